use std::path::PathBuf;

/// All domain errors for PetroManage.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum PetroError {
    #[error(
        "PetroManage is not initialized in {dir}\n\n  \
         Run 'petromanage init' to create the project directory,\n  \
         or point --dir at an existing one."
    )]
    NotInitialized { dir: PathBuf },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "This project uses format version {project_version}, but this build \
         only supports up to version {supported_version}.\n\n  \
         Upgrade petromanage before working with this project."
    )]
    FormatVersionTooNew {
        project_version: u32,
        supported_version: u32,
    },

    #[error(
        "Report '{id}' not found\n\n  \
         Run 'petromanage report list' to see existing report ids."
    )]
    ReportNotFound { id: String },

    #[error("Invalid value for {field}: {detail}")]
    Validation { field: String, detail: String },

    #[error("Storage error in {path}: {detail}")]
    Storage { path: PathBuf, detail: String },

    #[error("Export to {format} failed: {detail}")]
    ExportFailed { format: String, detail: String },

    #[error(
        "Invalid date: '{input}'\n\n  \
         Expected YYYY-MM-DD (e.g. 2026-01-15), an RFC 3339 timestamp,\n  \
         'DD/MM/YYYY, HH:MM:SS' or 'DD Month YYYY at HH:MM:SS'."
    )]
    InvalidDate { input: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PetroError {
    /// Shorthand for a field validation failure.
    pub fn validation(field: &str, detail: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            detail: detail.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PetroError>;
