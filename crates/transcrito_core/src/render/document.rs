//! Paginated document model (declarative block list).
//!
//! # Responsibility
//! - Turn results plus display config into styled blocks for the document
//!   sink.
//! - Resolve `PdfMode` into concrete typography.
//!
//! # Invariants
//! - Block order follows the same traversal as the flat-text sink, so both
//!   carry the same chapter headings, verse order and verse text.
//! - Columns layout sets `page_break_before` on every translation title
//!   except the first.
//! - Verse numbers use plain digits.

use crate::model::config::{DisplayConfig, Layout, PdfMode, TextAlign, VerseNumberFormat};
use crate::model::verse::TranslationResult;
use crate::render::markers::{inline_verse, DigitStyle};
use crate::render::traversal::{
    chapter_heading, flow_blocks, walk_parallel, FlowBlock, ParallelItem,
};
use serde::Serialize;

/// Typographic points to millimetres.
pub const PT_TO_MM: f32 = 0.352_778;

const OPTIMIZED_BODY_FONT_SIZE: f32 = 10.0;
const OPTIMIZED_LINE_ADVANCE: f32 = 7.0;
const TITLE_FONT_DELTA: f32 = 4.0;
const HEADING_FONT_DELTA: f32 = 2.0;
const TITLE_ADVANCE: f32 = 10.0;
const RULE_ADVANCE: f32 = 8.0;
const TITLE_KEEP: f32 = 20.0;
const VERSE_GAP: f32 = 3.0;
const SECTION_GAP: f32 = 10.0;

/// Concrete typography for one document, all lengths in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DocumentStyle {
    pub body_font_size: f32,
    pub title_font_size: f32,
    pub heading_font_size: f32,
    pub line_advance: f32,
    pub title_advance: f32,
    pub rule_advance: f32,
    /// Space a title needs below the cursor to stay on the current page.
    pub title_keep: f32,
    pub verse_gap: f32,
    pub section_gap: f32,
    pub align: TextAlign,
}

impl DocumentStyle {
    /// `Optimized` uses compact fixed typography; `Custom` follows the
    /// config's font size, line height and alignment.
    pub fn for_config(config: &DisplayConfig) -> Self {
        match config.pdf_mode {
            PdfMode::Optimized => Self::scaled(
                OPTIMIZED_BODY_FONT_SIZE,
                OPTIMIZED_LINE_ADVANCE,
                TextAlign::Left,
            ),
            PdfMode::Custom => {
                let config = config.normalized();
                let font_size = config.font_size as f32;
                Self::scaled(
                    font_size,
                    font_size * config.line_height * PT_TO_MM,
                    config.text_align,
                )
            }
        }
    }

    fn scaled(body_font_size: f32, line_advance: f32, align: TextAlign) -> Self {
        let scale = line_advance / OPTIMIZED_LINE_ADVANCE;
        Self {
            body_font_size,
            title_font_size: body_font_size + TITLE_FONT_DELTA,
            heading_font_size: body_font_size + HEADING_FONT_DELTA,
            line_advance,
            title_advance: TITLE_ADVANCE * scale,
            rule_advance: RULE_ADVANCE * scale,
            title_keep: TITLE_KEEP * scale,
            verse_gap: VERSE_GAP * scale,
            section_gap: SECTION_GAP * scale,
            align,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    TranslationTitle,
    TitleRule,
    ChapterHeading,
    VerseReference,
    VerseText,
    TableHeader,
    TableRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BlockContent {
    Text(String),
    /// One cell per translation; `""` for a missing cell.
    Cells(Vec<String>),
    Rule,
}

/// One styled block, placed by the pagination engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentBlock {
    pub kind: BlockKind,
    pub content: BlockContent,
    pub bold: bool,
    pub font_size: f32,
    pub align: TextAlign,
    pub page_break_before: bool,
    /// Height of each placed line.
    pub line_advance: f32,
    /// Free space required before placing the block.
    pub keep_height: f32,
    pub space_after: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentModel {
    pub style: DocumentStyle,
    pub blocks: Vec<DocumentBlock>,
}

impl DocumentModel {
    /// Texts of every text-bearing block in order (cells joined with `" | "`).
    pub fn text_content(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|block| match &block.content {
                BlockContent::Text(text) => Some(text.clone()),
                BlockContent::Cells(cells) => Some(cells.join(" | ")),
                BlockContent::Rule => None,
            })
            .collect()
    }
}

/// Builds the declarative document model for `results`.
pub fn build_document(
    results: &[TranslationResult],
    config: &DisplayConfig,
    book_name: &str,
) -> DocumentModel {
    let style = DocumentStyle::for_config(config);
    let mut builder = BlockBuilder {
        style,
        blocks: Vec::new(),
    };

    match config.layout {
        Layout::Columns => {
            for (index, result) in results.iter().enumerate() {
                builder.title(
                    BlockKind::TranslationTitle,
                    BlockContent::Text(result.translation_key.clone()),
                    index > 0,
                );
                builder.columns_body(result, config, book_name);
                builder.end_section();
            }
        }
        Layout::Parallel => {
            if !results.is_empty() {
                let keys = results
                    .iter()
                    .map(|result| result.translation_key.clone())
                    .collect();
                builder.title(BlockKind::TableHeader, BlockContent::Cells(keys), false);
                builder.parallel_body(results, config, book_name);
                builder.end_section();
            }
        }
    }

    DocumentModel {
        style,
        blocks: builder.blocks,
    }
}

struct BlockBuilder {
    style: DocumentStyle,
    blocks: Vec<DocumentBlock>,
}

impl BlockBuilder {
    fn push(&mut self, kind: BlockKind, content: BlockContent, bold: bool, font_size: f32) {
        let (line_advance, space_after) = match kind {
            BlockKind::TranslationTitle | BlockKind::TableHeader => (self.style.title_advance, 0.0),
            BlockKind::TitleRule => (self.style.rule_advance, 0.0),
            BlockKind::VerseReference => (self.style.line_advance, 0.0),
            BlockKind::ChapterHeading | BlockKind::VerseText | BlockKind::TableRow => {
                (self.style.line_advance, self.style.verse_gap)
            }
        };
        self.blocks.push(DocumentBlock {
            kind,
            content,
            bold,
            font_size,
            align: self.style.align,
            page_break_before: false,
            line_advance,
            keep_height: 0.0,
            space_after,
        });
    }

    fn title(&mut self, kind: BlockKind, content: BlockContent, page_break_before: bool) {
        self.push(kind, content, true, self.style.title_font_size);
        if let Some(block) = self.blocks.last_mut() {
            block.page_break_before = page_break_before;
            block.keep_height = self.style.title_keep;
            block.align = TextAlign::Left;
        }
        self.push(
            BlockKind::TitleRule,
            BlockContent::Rule,
            false,
            self.style.body_font_size,
        );
    }

    fn heading(&mut self, text: String) {
        self.push(
            BlockKind::ChapterHeading,
            BlockContent::Text(text),
            true,
            self.style.heading_font_size,
        );
    }

    fn columns_body(
        &mut self,
        result: &TranslationResult,
        config: &DisplayConfig,
        book_name: &str,
    ) {
        let format = config.verse_number_format;
        let body = self.style.body_font_size;
        for block in flow_blocks(&result.verses, config.text_flow) {
            match block {
                FlowBlock::ChapterHeading(chapter) => {
                    self.heading(chapter_heading(book_name, chapter));
                }
                FlowBlock::Verse(verse) if format == VerseNumberFormat::Full => {
                    self.push(
                        BlockKind::VerseReference,
                        BlockContent::Text(verse.reference.clone()),
                        true,
                        body,
                    );
                    self.push(
                        BlockKind::VerseText,
                        BlockContent::Text(verse.text.clone()),
                        false,
                        body,
                    );
                }
                FlowBlock::Verse(verse) => self.push(
                    BlockKind::VerseText,
                    BlockContent::Text(inline_verse(verse, format, DigitStyle::Plain)),
                    false,
                    body,
                ),
                FlowBlock::Stream(stream) => {
                    let text = stream
                        .into_iter()
                        .map(|verse| inline_verse(verse, format, DigitStyle::Plain))
                        .collect::<Vec<_>>()
                        .join(" ");
                    self.push(BlockKind::VerseText, BlockContent::Text(text), false, body);
                }
            }
        }
    }

    fn parallel_body(
        &mut self,
        results: &[TranslationResult],
        config: &DisplayConfig,
        book_name: &str,
    ) {
        for item in walk_parallel(results) {
            match item {
                ParallelItem::ChapterHeading(chapter) => {
                    self.heading(chapter_heading(book_name, chapter));
                }
                ParallelItem::Row { cells, .. } => {
                    let cells = cells
                        .into_iter()
                        .map(|cell| {
                            cell.map(|verse| {
                                inline_verse(verse, config.verse_number_format, DigitStyle::Plain)
                            })
                            .unwrap_or_default()
                        })
                        .collect();
                    self.push(
                        BlockKind::TableRow,
                        BlockContent::Cells(cells),
                        false,
                        self.style.body_font_size,
                    );
                }
            }
        }
    }

    fn end_section(&mut self) {
        if let Some(block) = self.blocks.last_mut() {
            block.space_after += self.style.section_gap;
        }
    }
}
