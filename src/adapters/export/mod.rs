pub mod csv_exporter;
pub mod json_exporter;
pub mod pdf_exporter;
pub mod xlsx_exporter;

use crate::core::traits::exporter::Exporter;

/// One exporter per supported format.
pub fn all() -> Vec<Box<dyn Exporter>> {
    vec![
        Box::new(json_exporter::JsonExporter),
        Box::new(csv_exporter::CsvExporter),
        Box::new(xlsx_exporter::XlsxExporter),
        Box::new(pdf_exporter::PdfExporter::default()),
    ]
}
