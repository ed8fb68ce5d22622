//! Cursor-tracked pagination.
//!
//! # Responsibility
//! - Place document blocks line by line on fixed-size pages.
//! - Wrap text to the content width before placement.
//!
//! # Invariants
//! - A line is placed only where `y + line_height <= page_height - margin`,
//!   unless it is the first line of an otherwise empty page.
//! - Page breaks happen between wrapped lines, never inside one.
//! - Placement order equals document block order.

use crate::layout::wrap::wrap_text;
use crate::model::config::TextAlign;
use crate::render::document::{BlockContent, DocumentBlock, DocumentModel, PT_TO_MM};
use log::debug;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Average glyph width as a fraction of the font size.
const AVERAGE_GLYPH_EM: f32 = 0.5;

/// Page geometry in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSetup {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
}

impl PageSetup {
    /// A4 portrait with 20 mm margins.
    pub const A4: Self = Self {
        page_width: 210.0,
        page_height: 297.0,
        margin: 20.0,
    };

    pub fn content_width(&self) -> f32 {
        (self.page_width - 2.0 * self.margin).max(1.0)
    }

    /// Lowest y a line may end at.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Cells of average glyph width that fit in `width` at `font_size` points.
    pub fn cells_for_width(width: f32, font_size: f32) -> usize {
        ((width / glyph_width(font_size)).floor() as usize).max(1)
    }

    /// Estimated width of `text` in millimetres at `font_size` points.
    pub fn text_width(text: &str, font_size: f32) -> f32 {
        text.width() as f32 * glyph_width(font_size)
    }
}

fn glyph_width(font_size: f32) -> f32 {
    (font_size * PT_TO_MM * AVERAGE_GLYPH_EM).max(0.1)
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::A4
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedText {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub bold: bool,
    pub font_size: f32,
    pub align: TextAlign,
    /// Width available to the line (column width in table rows).
    pub max_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedRule {
    pub y: f32,
    pub x_start: f32,
    pub x_end: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlacedElement {
    Text(PlacedText),
    Rule(PlacedRule),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub elements: Vec<PlacedElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedDocument {
    pub setup: PageSetup,
    pub pages: Vec<Page>,
}

impl PaginatedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Placed text lines in placement order.
    pub fn text_lines(&self) -> impl Iterator<Item = &PlacedText> + '_ {
        self.pages
            .iter()
            .flat_map(|page| page.elements.iter())
            .filter_map(|element| match element {
                PlacedElement::Text(text) => Some(text),
                PlacedElement::Rule(_) => None,
            })
    }
}

/// Vertical cursor over a growing list of pages.
#[derive(Debug, Clone)]
pub struct Paginator {
    setup: PageSetup,
    cursor: f32,
    pages: Vec<Page>,
}

impl Paginator {
    /// Opens the first page with the cursor at the top margin.
    pub fn new(setup: PageSetup) -> Self {
        Self {
            setup,
            cursor: setup.margin,
            pages: vec![Page {
                number: 1,
                elements: Vec::new(),
            }],
        }
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns whether nothing has been placed on the current page.
    pub fn at_page_top(&self) -> bool {
        self.pages
            .last()
            .map_or(true, |page| page.elements.is_empty())
    }

    /// Opens a new page and resets the cursor to the top margin.
    pub fn break_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(Page {
            number,
            elements: Vec::new(),
        });
        self.cursor = self.setup.margin;
    }

    /// Breaks the page when `height` does not fit below the cursor.
    ///
    /// An empty page never breaks, so oversized content cannot loop.
    /// Returns whether a break happened.
    pub fn measure_and_maybe_break(&mut self, height: f32) -> bool {
        if self.cursor + height > self.setup.bottom_limit() && !self.at_page_top() {
            self.break_page();
            return true;
        }
        false
    }

    /// Places one line at the cursor (after a break check) and advances.
    pub fn place_line(&mut self, height: f32, line: PlacedText) {
        self.measure_and_maybe_break(height);
        self.push_text(line);
        self.cursor += height;
    }

    /// Advances the cursor without placing anything.
    pub fn advance(&mut self, height: f32) {
        self.cursor += height;
    }

    fn push_text(&mut self, mut line: PlacedText) {
        line.y = self.cursor;
        self.push_element(PlacedElement::Text(line));
    }

    fn push_element(&mut self, element: PlacedElement) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    /// Places every block of `model` in order.
    pub fn place_document(&mut self, model: &DocumentModel) {
        for block in &model.blocks {
            self.place_block(block);
        }
    }

    pub fn place_block(&mut self, block: &DocumentBlock) {
        if block.page_break_before && !self.at_page_top() {
            self.break_page();
        }
        if block.keep_height > 0.0 {
            self.measure_and_maybe_break(block.keep_height);
        }

        let margin = self.setup.margin;
        let content_width = self.setup.content_width();
        match &block.content {
            BlockContent::Text(text) => {
                let cells = PageSetup::cells_for_width(content_width, block.font_size);
                for line in wrap_text(text, cells) {
                    let line = placed(block, line, margin, content_width);
                    self.place_line(block.line_advance, line);
                }
            }
            BlockContent::Cells(cells) => {
                self.place_row(block, cells, margin, content_width);
            }
            BlockContent::Rule => {
                self.measure_and_maybe_break(block.line_advance);
                let rule = PlacedRule {
                    y: self.cursor,
                    x_start: margin,
                    x_end: margin + content_width,
                };
                self.push_element(PlacedElement::Rule(rule));
                self.cursor += block.line_advance;
            }
        }

        self.advance(block.space_after);
    }

    /// Table row: each cell wraps to its column; row lines break together.
    fn place_row(&mut self, block: &DocumentBlock, cells: &[String], margin: f32, width: f32) {
        if cells.is_empty() {
            return;
        }
        let column_width = width / cells.len() as f32;
        let cell_cells = PageSetup::cells_for_width(column_width, block.font_size);
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .map(|cell| wrap_text(cell, cell_cells))
            .collect();
        let row_lines = wrapped.iter().map(Vec::len).max().unwrap_or(1);

        for line_index in 0..row_lines {
            self.measure_and_maybe_break(block.line_advance);
            for (column, lines) in wrapped.iter().enumerate() {
                let Some(text) = lines.get(line_index) else {
                    continue;
                };
                if text.is_empty() {
                    continue;
                }
                let x = margin + column as f32 * column_width;
                let line = placed(block, text.clone(), x, column_width);
                self.push_text(line);
            }
            self.cursor += block.line_advance;
        }
    }

    pub fn finish(self) -> PaginatedDocument {
        debug!(
            "event=paginate module=layout status=ok pages={}",
            self.pages.len()
        );
        PaginatedDocument {
            setup: self.setup,
            pages: self.pages,
        }
    }
}

fn placed(block: &DocumentBlock, text: String, left: f32, width: f32) -> PlacedText {
    let x = match block.align {
        TextAlign::Center => left + width / 2.0,
        TextAlign::Left | TextAlign::Justify => left,
    };
    PlacedText {
        x,
        y: 0.0,
        text,
        bold: block.bold,
        font_size: block.font_size,
        align: block.align,
        max_width: width,
    }
}

/// Runs the cursor engine over a whole document model.
pub fn paginate(model: &DocumentModel, setup: PageSetup) -> PaginatedDocument {
    let mut paginator = Paginator::new(setup);
    paginator.place_document(model);
    paginator.finish()
}
