use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::core::errors::{PetroError, Result};
use crate::core::models::export::{ExportDocument, ExportFormat};
use crate::core::models::record::Record;
use crate::core::traits::exporter::Exporter;

/// Columns that lead every tabular export, in this order, when present.
pub const PRIORITY_KEYS: &[&str] = &[
    "ReportID",
    "AssetName",
    "ComplianceStatus",
    "SafetyScore",
    "NextAuditDate",
];

/// Cell value for a column a record does not have.
pub const MISSING_VALUE: &str = "-";

/// Header row for `records`: priority keys first, then every other key
/// in the order it is first encountered.
pub fn derive_headers<R: Record>(records: &[R]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for record in records {
        for field in record.fields() {
            if !seen.contains(&field.key) {
                seen.push(field.key);
            }
        }
    }

    let mut headers: Vec<&'static str> = PRIORITY_KEYS
        .iter()
        .copied()
        .filter(|k| seen.contains(k))
        .collect();
    headers.extend(seen.into_iter().filter(|k| !PRIORITY_KEYS.contains(k)));
    headers
}

/// Prepare `records` for any output format.
pub fn build_document<R: Record>(records: &[R]) -> Result<ExportDocument> {
    let headers = derive_headers(records);

    let rows = records
        .iter()
        .map(|record| {
            let fields = record.fields();
            headers
                .iter()
                .map(|h| {
                    fields
                        .iter()
                        .find(|f| f.key == *h)
                        .map(|f| f.value.clone())
                        .unwrap_or_else(|| MISSING_VALUE.to_string())
                })
                .collect()
        })
        .collect();

    let json = serde_json::to_value(records).map_err(|e| PetroError::ExportFailed {
        format: ExportFormat::Json.to_string(),
        detail: format!("Failed to serialize records: {e}"),
    })?;

    Ok(ExportDocument {
        title: R::export_title(records),
        sheet_name: R::sheet_name(),
        headers,
        rows,
        json,
    })
}

/// `{stem}_{YYYYMMDD_HHMMSS}.{ext}`
pub fn export_file_name(stem: &str, format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "{stem}_{}.{}",
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Serializes record collections to files through pluggable exporters.
pub struct ExportService {
    output_dir: PathBuf,
    exporters: Vec<Box<dyn Exporter>>,
}

impl ExportService {
    pub fn new(output_dir: impl Into<PathBuf>, exporters: Vec<Box<dyn Exporter>>) -> Self {
        Self {
            output_dir: output_dir.into(),
            exporters,
        }
    }

    fn exporter(&self, format: ExportFormat) -> Result<&dyn Exporter> {
        self.exporters
            .iter()
            .find(|e| e.format() == format)
            .map(|e| e.as_ref())
            .ok_or_else(|| PetroError::ExportFailed {
                format: format.to_string(),
                detail: "no exporter registered for this format".into(),
            })
    }

    /// Render `records` in memory. Empty input renders nothing.
    pub fn render<R: Record>(&self, records: &[R], format: ExportFormat) -> Result<Option<Vec<u8>>> {
        if records.is_empty() {
            return Ok(None);
        }
        let doc = build_document(records)?;
        let bytes = self.exporter(format)?.render(&doc)?;
        debug!(%format, rows = doc.rows.len(), bytes = bytes.len(), "export rendered");
        Ok(Some(bytes))
    }

    /// Write `records` to a new timestamped file in the output directory.
    ///
    /// Returns the written path, or `None` when `records` is empty (no
    /// file is produced).
    pub fn export<R: Record>(
        &self,
        records: &[R],
        format: ExportFormat,
        stem: &str,
    ) -> Result<Option<PathBuf>> {
        let Some(bytes) = self.render(records, format)? else {
            return Ok(None);
        };

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.unused_path(&export_file_name(stem, format, Utc::now()));
        std::fs::write(&path, bytes)?;

        info!(path = %path.display(), %format, rows = records.len(), "export written");
        Ok(Some(path))
    }

    /// `name` inside the output dir, suffixed `-2`, `-3`... if already taken.
    fn unused_path(&self, name: &str) -> PathBuf {
        let candidate = self.output_dir.join(name);
        if !candidate.exists() {
            return candidate;
        }

        let (base, ext) = name.rsplit_once('.').unwrap_or((name, ""));
        (2..)
            .map(|n| self.output_dir.join(format!("{base}-{n}.{ext}")))
            .find(|p| !p.exists())
            .unwrap_or(candidate)
    }
}
