//! PDF writer for paginated documents.
//!
//! # Responsibility
//! - Draw every placed line and rule of a `PaginatedDocument` onto PDF pages.
//!
//! # Invariants
//! - One PDF page per document page, same size, same order.
//! - Coordinates are millimetres; the document's top-left origin is flipped
//!   to the PDF's bottom-left origin here and nowhere else.
//! - Justified lines are drawn left-aligned.

use crate::layout::paginator::{PageSetup, PaginatedDocument, PlacedElement, PlacedText};
use crate::model::config::TextAlign;
use crate::render::document::PT_TO_MM;
use log::info;
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};
use std::error::Error;
use std::fmt::{Display, Formatter};

const LAYER_NAME: &str = "passage";
/// Baseline offset below the line top, as a fraction of the font size.
const ASCENT_EM: f32 = 0.8;

#[derive(Debug)]
pub enum PdfExportError {
    Font(printpdf::Error),
    Write(printpdf::Error),
}

impl Display for PdfExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Font(err) => write!(f, "failed to register pdf font: {err}"),
            Self::Write(err) => write!(f, "failed to write pdf: {err}"),
        }
    }
}

impl Error for PdfExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Font(err) | Self::Write(err) => Some(err),
        }
    }
}

/// Renders `document` as PDF bytes titled `title`.
pub fn write_pdf(document: &PaginatedDocument, title: &str) -> Result<Vec<u8>, PdfExportError> {
    let setup = document.setup;
    let (width, height) = (Mm(setup.page_width), Mm(setup.page_height));
    let (pdf, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);
    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(PdfExportError::Font)?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(PdfExportError::Font)?;

    for (index, page) in document.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            pdf.add_page(width, height, LAYER_NAME)
        };
        let layer = pdf.get_page(page_index).get_layer(layer_index);

        for element in &page.elements {
            match element {
                PlacedElement::Text(line) => {
                    let font = if line.bold { &bold } else { &regular };
                    layer.use_text(
                        line.text.as_str(),
                        line.font_size,
                        Mm(text_left(line)),
                        Mm(baseline(&setup, line)),
                        font,
                    );
                }
                PlacedElement::Rule(rule) => {
                    let y = Mm(setup.page_height - rule.y);
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(Mm(rule.x_start), y), false),
                            (Point::new(Mm(rule.x_end), y), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }
    }

    let bytes = pdf.save_to_bytes().map_err(PdfExportError::Write)?;
    info!(
        "event=pdf_write module=export status=ok pages={} bytes={}",
        document.page_count(),
        bytes.len()
    );
    Ok(bytes)
}

/// Left edge of a placed line; centred lines carry their centre in `x`.
fn text_left(line: &PlacedText) -> f32 {
    match line.align {
        TextAlign::Center => line.x - PageSetup::text_width(&line.text, line.font_size) / 2.0,
        TextAlign::Left | TextAlign::Justify => line.x,
    }
}

/// PDF baseline (bottom-left origin) for a line whose top sits at `line.y`.
fn baseline(setup: &PageSetup, line: &PlacedText) -> f32 {
    setup.page_height - (line.y + line.font_size * PT_TO_MM * ASCENT_EM)
}

#[cfg(test)]
mod tests {
    use super::{baseline, text_left, write_pdf};
    use crate::layout::paginator::{PageSetup, Paginator, PlacedText};
    use crate::model::config::TextAlign;

    fn line(text: &str, align: TextAlign) -> PlacedText {
        PlacedText {
            x: 105.0,
            y: 20.0,
            text: text.to_string(),
            bold: false,
            font_size: 10.0,
            align,
            max_width: 170.0,
        }
    }

    #[test]
    fn writes_pdf_bytes_for_every_page() {
        let mut paginator = Paginator::new(PageSetup::A4);
        for index in 0..80 {
            paginator.place_line(7.0, line(&format!("linha {index}"), TextAlign::Left));
        }
        let document = paginator.finish();
        assert_eq!(document.page_count(), 3);

        let bytes = write_pdf(&document, "versiculos-jo").unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.windows(5).any(|window| window == b"%%EOF"));
    }

    #[test]
    fn centred_line_is_shifted_by_half_its_width() {
        let centred = line("João 3", TextAlign::Center);
        let width = PageSetup::text_width("João 3", 10.0);
        assert!((text_left(&centred) - (105.0 - width / 2.0)).abs() < 1e-4);
        assert_eq!(text_left(&line("João 3", TextAlign::Justify)), 105.0);
    }

    #[test]
    fn baseline_flips_to_bottom_origin() {
        let top = baseline(&PageSetup::A4, &line("x", TextAlign::Left));
        assert!(top < 297.0 - 20.0);
        assert!(top > 297.0 - 20.0 - 7.0);
    }
}
