use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Rgb,
};

use crate::core::errors::{PetroError, Result};
use crate::core::models::export::{ExportDocument, ExportFormat};
use crate::core::models::record::humanize_key;
use crate::core::traits::exporter::Exporter;

// Landscape A4.
const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 10.0;

const TITLE_SIZE: f32 = 16.0;
const CELL_SIZE: f32 = 7.0;
const ROW_HEIGHT: f32 = 6.0;

/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_RATIO: f32 = 0.5;
const PT_TO_MM: f32 = 0.3528;

/// Paginated table for printing: a title line on the first page, a bold
/// header row repeated on every page, then the data rows.
pub struct PdfExporter {
    header_color: (f32, f32, f32),
    body_color: (f32, f32, f32),
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self {
            header_color: (15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0),
            body_color: (51.0 / 255.0, 65.0 / 255.0, 85.0 / 255.0),
        }
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Tracks the current page layer and the baseline of the next row.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl Cursor<'_> {
    fn new_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN - ROW_HEIGHT;
    }

    fn has_room(&self) -> bool {
        self.y - ROW_HEIGHT >= MARGIN
    }
}

impl PdfExporter {
    fn color(&self, rgb: (f32, f32, f32)) -> Color {
        Color::Rgb(Rgb::new(rgb.0, rgb.1, rgb.2, None))
    }

    fn draw_row(&self, cursor: &Cursor<'_>, cells: &[String], font: &IndirectFontRef, col_width: f32) {
        let max_chars = max_chars(col_width);
        for (i, cell) in cells.iter().enumerate() {
            let x = MARGIN + i as f32 * col_width;
            cursor
                .layer
                .use_text(truncate(cell, max_chars), CELL_SIZE, Mm(x), Mm(cursor.y), font);
        }
    }

    fn draw_header(&self, cursor: &Cursor<'_>, headers: &[String], fonts: &Fonts, col_width: f32) {
        cursor.layer.set_fill_color(self.color(self.header_color));
        self.draw_row(cursor, headers, &fonts.bold, col_width);
        cursor.layer.set_fill_color(self.color(self.body_color));
    }

    fn build(&self, doc: &ExportDocument) -> std::result::Result<Vec<u8>, String> {
        let (pdf, page, layer) = PdfDocument::new(
            doc.title.as_str(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Page 1",
        );
        let fonts = Fonts {
            regular: pdf
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| format!("{e:?}"))?,
            bold: pdf
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| format!("{e:?}"))?,
        };

        let headers: Vec<String> = doc.headers.iter().map(|h| humanize_key(h)).collect();
        let col_width = (PAGE_WIDTH - 2.0 * MARGIN) / headers.len().max(1) as f32;

        let mut cursor = Cursor {
            doc: &pdf,
            layer: pdf.get_page(page).get_layer(layer),
            y: PAGE_HEIGHT - 15.0,
            pages: 1,
        };

        cursor.layer.set_fill_color(self.color(self.header_color));
        cursor
            .layer
            .use_text(doc.title.as_str(), TITLE_SIZE, Mm(14.0), Mm(cursor.y), &fonts.bold);
        cursor.y -= 10.0;

        self.draw_header(&cursor, &headers, &fonts, col_width);
        cursor.y -= ROW_HEIGHT;

        for row in &doc.rows {
            if !cursor.has_room() {
                cursor.new_page();
                self.draw_header(&cursor, &headers, &fonts, col_width);
                cursor.y -= ROW_HEIGHT;
            }
            self.draw_row(&cursor, row, &fonts.regular, col_width);
            cursor.y -= ROW_HEIGHT;
        }

        drop(cursor);
        pdf.save_to_bytes().map_err(|e| format!("{e:?}"))
    }
}

/// How many characters of body text fit in a column.
fn max_chars(col_width: f32) -> usize {
    let glyph = CELL_SIZE * GLYPH_RATIO * PT_TO_MM;
    // leave one glyph of padding between columns
    ((col_width / glyph) as usize).saturating_sub(1).max(3)
}

/// Cut `text` to `max` characters, marking the cut with `..`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(2)).collect();
    format!("{kept}..")
}

impl Exporter for PdfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, doc: &ExportDocument) -> Result<Vec<u8>> {
        self.build(doc).map_err(|detail| PetroError::ExportFailed {
            format: self.format().to_string(),
            detail,
        })
    }
}
