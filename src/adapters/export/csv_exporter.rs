use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::core::errors::{PetroError, Result};
use crate::core::models::export::{ExportDocument, ExportFormat};
use crate::core::traits::exporter::Exporter;

/// Comma-separated values: a bare header row, then one row per record
/// with every field double-quoted (embedded quotes doubled).
pub struct CsvExporter;

impl CsvExporter {
    fn error(detail: impl ToString) -> PetroError {
        PetroError::ExportFailed {
            format: ExportFormat::Csv.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl Exporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(&self, doc: &ExportDocument) -> Result<Vec<u8>> {
        let mut header = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        header.write_record(&doc.headers).map_err(Self::error)?;
        let buffer = header.into_inner().map_err(Self::error)?;

        let mut body = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(buffer);
        for row in &doc.rows {
            body.write_record(row).map_err(Self::error)?;
        }
        body.into_inner().map_err(Self::error)
    }
}
