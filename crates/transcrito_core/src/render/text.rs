//! Flat text rendering for clipboard and `.txt` export.
//!
//! # Invariants
//! - Columns layout emits one section per translation: key line, a
//!   50-character `=` rule, a blank line, then the passage body.
//! - Parallel layout emits a `T1 | T2` header row, a `---` separator and one
//!   row per driver verse index; a missing cell renders as an empty string.
//! - Parallel rows ignore `TextFlow`; each row holds one verse per cell.
//! - Output depends only on the inputs.

use crate::model::config::{DisplayConfig, Layout};
use crate::model::verse::{ResolvedVerse, TranslationResult};
use crate::render::markers::{inline_verse, DigitStyle};
use crate::render::traversal::{
    chapter_heading, flow_blocks, walk_parallel, FlowBlock, ParallelItem,
};

/// Block separator for clipboard text.
pub const CLIPBOARD_SEPARATOR: &str = "\n";
/// Block separator for `.txt` files.
pub const FILE_SEPARATOR: &str = "\n\n";

const TITLE_RULE_WIDTH: usize = 50;
const ROW_SEPARATOR: &str = "---";
const CELL_SEPARATOR: &str = " | ";

/// Renders every translation as one string.
pub fn render_text(
    results: &[TranslationResult],
    config: &DisplayConfig,
    book_name: &str,
    separator: &str,
) -> String {
    match config.layout {
        Layout::Columns => results
            .iter()
            .map(|result| render_translation_text(result, config, book_name, separator))
            .collect(),
        Layout::Parallel => render_parallel_text(results, config, book_name, separator),
    }
}

/// Renders one translation section (used for per-translation copy too).
pub fn render_translation_text(
    result: &TranslationResult,
    config: &DisplayConfig,
    book_name: &str,
    separator: &str,
) -> String {
    let body = render_passage_body(&result.verses, config, book_name, separator);
    format!(
        "{}\n{}\n\n{body}\n\n",
        result.translation_key,
        "=".repeat(TITLE_RULE_WIDTH)
    )
}

/// Renders one verse list without any translation header.
pub fn render_passage_body(
    verses: &[ResolvedVerse],
    config: &DisplayConfig,
    book_name: &str,
    separator: &str,
) -> String {
    let format = config.verse_number_format;
    flow_blocks(verses, config.text_flow)
        .into_iter()
        .map(|block| match block {
            FlowBlock::ChapterHeading(chapter) => chapter_heading(book_name, chapter),
            FlowBlock::Verse(verse) => inline_verse(verse, format, DigitStyle::Superscript),
            FlowBlock::Stream(stream) => stream
                .into_iter()
                .map(|verse| inline_verse(verse, format, DigitStyle::Superscript))
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_parallel_text(
    results: &[TranslationResult],
    config: &DisplayConfig,
    book_name: &str,
    separator: &str,
) -> String {
    if results.is_empty() {
        return String::new();
    }

    let header = results
        .iter()
        .map(|result| result.translation_key.as_str())
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR);
    let mut blocks = vec![header, ROW_SEPARATOR.to_string()];

    for item in walk_parallel(results) {
        match item {
            ParallelItem::ChapterHeading(chapter) => {
                if blocks.len() > 2 {
                    blocks.push(ROW_SEPARATOR.to_string());
                }
                blocks.push(chapter_heading(book_name, chapter));
            }
            ParallelItem::Row { cells, .. } => {
                let row = cells
                    .into_iter()
                    .map(|cell| {
                        cell.map(|verse| {
                            inline_verse(verse, config.verse_number_format, DigitStyle::Superscript)
                        })
                        .unwrap_or_default()
                    })
                    .collect::<Vec<_>>()
                    .join(CELL_SEPARATOR);
                blocks.push(row);
            }
        }
    }

    let mut text = blocks.join(separator);
    text.push('\n');
    text
}
