use crate::core::errors::{PetroError, Result};
use crate::core::models::export::{ExportDocument, ExportFormat};
use crate::core::traits::exporter::Exporter;

/// Pretty-printed JSON array with every stored field.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, doc: &ExportDocument) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(&doc.json).map_err(|e| PetroError::ExportFailed {
            format: self.format().to_string(),
            detail: e.to_string(),
        })?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
