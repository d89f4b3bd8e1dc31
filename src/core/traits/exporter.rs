use crate::core::errors::Result;
use crate::core::models::export::{ExportDocument, ExportFormat};

/// Port for serializing a prepared document into one file format.
pub trait Exporter: Send + Sync {
    /// Format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Render the document to the bytes of a complete file.
    fn render(&self, doc: &ExportDocument) -> Result<Vec<u8>>;
}
