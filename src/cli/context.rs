use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::adapters::export;
use crate::adapters::storage::json_file_store::JsonFileStore;
use crate::cli::FilterArgs;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::asset::Asset;
use crate::core::models::audit_entry::AuditLogEntry;
use crate::core::models::report::Report;
use crate::core::models::timestamp::parse_day;
use crate::core::services::export_service::ExportService;
use crate::core::services::record_filter::RecordFilter;

static PROJECT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Default project directory, relative to the working directory.
pub const DEFAULT_DIR: &str = ".petromanage";

/// Initialize the global project directory path.
/// If `custom` is provided, uses that path; otherwise defaults to `.petromanage`.
pub fn init(custom: Option<&str>) {
    let dir = custom
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));
    let _ = PROJECT_DIR.set(dir);
}

/// Get the current project directory path.
pub fn project_dir() -> &'static Path {
    PROJECT_DIR
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(DEFAULT_DIR))
}

/// An initialized project: its directory plus loaded configuration.
pub struct Project {
    pub dir: PathBuf,
    pub config: AppConfig,
}

impl Project {
    /// Open the project at the global project directory.
    pub fn open() -> Result<Self> {
        let dir = project_dir().to_path_buf();
        let config = AppConfig::load(&dir)?;
        Ok(Self { dir, config })
    }

    pub fn report_store(&self) -> JsonFileStore<Report> {
        JsonFileStore::new(&self.dir, &self.config.storage.reports_file)
    }

    pub fn audit_store(&self) -> JsonFileStore<AuditLogEntry> {
        JsonFileStore::new(&self.dir, &self.config.storage.audit_file)
    }

    pub fn asset_store(&self) -> JsonFileStore<Asset> {
        JsonFileStore::new(&self.dir, &self.config.storage.assets_file)
    }

    pub fn export_service(&self) -> ExportService {
        ExportService::new(self.dir.join(&self.config.export.output_dir), export::all())
    }

    pub fn user(&self) -> &str {
        &self.config.petromanage.default_user
    }

    pub fn page_size(&self) -> usize {
        self.config.petromanage.page_size
    }
}

/// Turn `--search/--from/--to` into a filter, validating the dates.
pub fn build_filter(args: &FilterArgs) -> Result<RecordFilter> {
    let from: Option<NaiveDate> = args.from.as_deref().map(parse_day).transpose()?;
    let to: Option<NaiveDate> = args.to.as_deref().map(parse_day).transpose()?;
    Ok(RecordFilter::new(args.search.as_deref(), from, to))
}
