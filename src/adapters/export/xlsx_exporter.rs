use rust_xlsxwriter::{Color, Format, Workbook, XlsxError};

use crate::core::errors::{PetroError, Result};
use crate::core::models::export::{ExportDocument, ExportFormat};
use crate::core::traits::exporter::Exporter;

/// Header fill, matching the printable export.
const HEADER_FILL: u32 = 0x0F172A;

/// Columns whose values are written as numbers. Everything else stays
/// text, so codes such as `007` keep their leading zeros.
const NUMERIC_COLUMNS: &[&str] = &["SafetyScore"];

/// Excel workbook with a single sheet: one header row, then data rows.
pub struct XlsxExporter;

impl XlsxExporter {
    fn build(doc: &ExportDocument) -> std::result::Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new()
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(HEADER_FILL));

        let sheet = workbook.add_worksheet();
        sheet.set_name(doc.sheet_name)?;

        for (col, header) in doc.headers.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, row) in doc.rows.iter().enumerate() {
            let row_num = (i + 1) as u32;
            for (col, (header, value)) in doc.headers.iter().zip(row).enumerate() {
                match numeric_cell(header, value) {
                    Some(n) => sheet.write_number(row_num, col as u16, n)?,
                    None => sheet.write_string(row_num, col as u16, value)?,
                };
            }
        }

        sheet.autofit();
        workbook.save_to_buffer()
    }
}

/// Numeric value for a cell in a numeric column, if it parses.
fn numeric_cell(header: &str, value: &str) -> Option<f64> {
    if NUMERIC_COLUMNS.contains(&header) {
        numeric(value)
    } else {
        None
    }
}

/// Plain decimal numbers, so they sort and sum in the spreadsheet.
fn numeric(value: &str) -> Option<f64> {
    let looks_numeric = !value.is_empty()
        && value
            .chars()
            .enumerate()
            .all(|(i, c)| c.is_ascii_digit() || c == '.' || (i == 0 && c == '-'))
        && value.chars().any(|c| c.is_ascii_digit());
    if looks_numeric { value.parse().ok() } else { None }
}

impl Exporter for XlsxExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Excel
    }

    fn render(&self, doc: &ExportDocument) -> Result<Vec<u8>> {
        Self::build(doc).map_err(|e| PetroError::ExportFailed {
            format: self.format().to_string(),
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::audit_entry::AuditAction;
    use crate::core::models::audit_entry::fixtures::entry_at;
    use crate::core::services::export_service::build_document;

    #[test]
    fn produces_zip_container() {
        let doc = build_document(&[entry_at("CR-1", AuditAction::Created, "01/01/2026, 10:00:00")])
            .unwrap();
        let bytes = XlsxExporter.render(&doc).unwrap();
        assert!(bytes.starts_with(b"PK"), "xlsx files are zip archives");
    }

    #[test]
    fn only_numeric_columns_become_numbers() {
        assert_eq!(numeric_cell("SafetyScore", "92"), Some(92.0));
        assert_eq!(numeric_cell("Inspector", "007"), None);
        assert_eq!(numeric_cell("ReportID", "12"), None);
        assert_eq!(numeric_cell("SafetyScore", "-"), None);
    }

    #[test]
    fn numeric_detection() {
        assert_eq!(numeric("92"), Some(92.0));
        assert_eq!(numeric("-3.5"), Some(-3.5));
        assert_eq!(numeric("CR-1"), None);
        assert_eq!(numeric("inf"), None);
        assert_eq!(numeric("-"), None);
        assert_eq!(numeric("1.2.3"), None);
    }
}
