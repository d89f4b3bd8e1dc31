use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{PetroError, Result};
use crate::core::services::pagination::DEFAULT_PAGE_SIZE;

/// Name of the configuration file inside the project directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Current format version supported by this build.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Top-level configuration read from `.petromanage/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub petromanage: ProjectSection,
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub export: ExportSection,
}

impl AppConfig {
    /// Load the configuration from `{project_dir}/config.toml`.
    ///
    /// After parsing, validates the storage and export file names to
    /// prevent path traversal from a tampered config file.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Err(PetroError::NotInitialized {
                dir: project_dir.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| PetroError::InvalidConfig {
            detail: format!("Failed to parse {CONFIG_FILE}: {e}"),
        })?;

        if config.petromanage.format_version > CURRENT_FORMAT_VERSION {
            return Err(PetroError::FormatVersionTooNew {
                project_version: config.petromanage.format_version,
                supported_version: CURRENT_FORMAT_VERSION,
            });
        }

        if config.petromanage.page_size == 0 {
            return Err(PetroError::InvalidConfig {
                detail: "page_size must be at least 1".into(),
            });
        }

        validate_simple_filename(&config.storage.reports_file, "reports file")?;
        validate_simple_filename(&config.storage.audit_file, "audit file")?;
        validate_simple_filename(&config.storage.assets_file, "assets file")?;
        validate_simple_filename(&config.export.output_dir, "export directory")?;

        Ok(config)
    }

    /// Contents written by `petromanage init`.
    pub fn default_toml() -> String {
        format!(
            r#"[petromanage]
version = "{version}"
format_version = {CURRENT_FORMAT_VERSION}
default_user = "{user}"
page_size = {DEFAULT_PAGE_SIZE}

[storage]
reports_file = "{reports}"
audit_file = "{audit}"
assets_file = "{assets}"

[export]
output_dir = "{exports}"
"#,
            version = env!("CARGO_PKG_VERSION"),
            user = default_user(),
            reports = default_reports_file(),
            audit = default_audit_file(),
            assets = default_assets_file(),
            exports = default_output_dir(),
        )
    }
}

/// The `[petromanage]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub version: String,
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    /// Actor recorded on audit entries.
    #[serde(default = "default_user")]
    pub default_user: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// The `[storage]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_reports_file")]
    pub reports_file: String,
    #[serde(default = "default_audit_file")]
    pub audit_file: String,
    #[serde(default = "default_assets_file")]
    pub assets_file: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            reports_file: default_reports_file(),
            audit_file: default_audit_file(),
            assets_file: default_assets_file(),
        }
    }
}

/// The `[export]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSection {
    /// Directory (inside the project dir) that receives export files.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_format_version() -> u32 {
    1
}

fn default_user() -> String {
    "System Administrator".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_reports_file() -> String {
    "reports.json".to_string()
}

fn default_audit_file() -> String {
    "audit.json".to_string()
}

fn default_assets_file() -> String {
    "assets.json".to_string()
}

fn default_output_dir() -> String {
    "exports".to_string()
}

/// Reject anything that is not a plain file name.
pub fn validate_simple_filename(name: &str, what: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(PetroError::InvalidConfig {
            detail: format!("Invalid {what} '{name}': must be a plain file name"),
        });
    }
    Ok(())
}
