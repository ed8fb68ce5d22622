//! Interactive screen tree.
//!
//! Translation → chapter group → verse nodes for the columns layout, and a
//! header row plus per-index rows for the parallel layout. The UI renders the
//! tree incrementally and applies `ScreenStyle` itself.

use crate::model::config::{DisplayConfig, Layout, TextAlign, TextFlow};
use crate::model::verse::{ResolvedVerse, TranslationResult};
use crate::render::markers::{verse_marker, DigitStyle};
use crate::render::traversal::{
    chapter_heading, walk_parallel, walk_passage, ParallelItem, PassageItem,
};
use serde::Serialize;

/// Typography hints taken from the display config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenStyle {
    pub font_size: u32,
    pub line_height: f32,
    pub text_align: TextAlign,
    pub text_flow: TextFlow,
}

/// One verse as shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseNode {
    pub reference: String,
    /// Full reference, superscript number, or nothing.
    pub marker: Option<String>,
    pub text: String,
}

/// Verses of one chapter; `heading` is set only for multi-chapter lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterGroup {
    pub heading: Option<String>,
    pub verses: Vec<VerseNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationPanel {
    pub translation_key: String,
    pub groups: Vec<ChapterGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParallelNode {
    Heading { title: String },
    Row { index: usize, cells: Vec<Option<VerseNode>> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ScreenBody {
    Columns {
        panels: Vec<TranslationPanel>,
    },
    Parallel {
        headers: Vec<String>,
        rows: Vec<ParallelNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenTree {
    pub style: ScreenStyle,
    /// Grid columns for the panel layout (1 to 4).
    pub column_count: usize,
    pub body: ScreenBody,
}

/// Builds the screen tree for `results`.
pub fn render_tree(
    results: &[TranslationResult],
    config: &DisplayConfig,
    book_name: &str,
) -> ScreenTree {
    let typography = config.normalized();
    let style = ScreenStyle {
        font_size: typography.font_size,
        line_height: typography.line_height,
        text_align: typography.text_align,
        text_flow: typography.text_flow,
    };
    let node = |verse: &ResolvedVerse| VerseNode {
        reference: verse.reference.clone(),
        marker: verse_marker(verse, config.verse_number_format, DigitStyle::Superscript),
        text: verse.text.clone(),
    };

    let body = match config.layout {
        Layout::Columns => ScreenBody::Columns {
            panels: results
                .iter()
                .map(|result| TranslationPanel {
                    translation_key: result.translation_key.clone(),
                    groups: chapter_groups(&result.verses, book_name, &node),
                })
                .collect(),
        },
        Layout::Parallel => ScreenBody::Parallel {
            headers: results
                .iter()
                .map(|result| result.translation_key.clone())
                .collect(),
            rows: walk_parallel(results)
                .into_iter()
                .map(|item| match item {
                    ParallelItem::ChapterHeading(chapter) => ParallelNode::Heading {
                        title: chapter_heading(book_name, chapter),
                    },
                    ParallelItem::Row { index, cells } => ParallelNode::Row {
                        index,
                        cells: cells.into_iter().map(|cell| cell.map(&node)).collect(),
                    },
                })
                .collect(),
        },
    };

    ScreenTree {
        style,
        column_count: results.len().clamp(1, 4),
        body,
    }
}

fn chapter_groups(
    verses: &[ResolvedVerse],
    book_name: &str,
    node: &dyn Fn(&ResolvedVerse) -> VerseNode,
) -> Vec<ChapterGroup> {
    let mut groups: Vec<ChapterGroup> = Vec::new();
    for item in walk_passage(verses) {
        match item {
            PassageItem::ChapterHeading(chapter) => groups.push(ChapterGroup {
                heading: Some(chapter_heading(book_name, chapter)),
                verses: Vec::new(),
            }),
            PassageItem::Verse(verse) => match groups.last_mut() {
                Some(group) => group.verses.push(node(verse)),
                None => groups.push(ChapterGroup {
                    heading: None,
                    verses: vec![node(verse)],
                }),
            },
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::{render_tree, ParallelNode, ScreenBody};
    use crate::model::config::{DisplayConfig, Layout, PdfMode, VerseNumberFormat};
    use crate::render::document::DocumentStyle;
    use crate::model::verse::{ResolvedVerse, TranslationResult};

    fn verse(chapter: u32, number: u32) -> ResolvedVerse {
        ResolvedVerse::new("gn", "Gênesis", chapter, number, format!("v{chapter}:{number}"))
    }

    #[test]
    fn single_chapter_panel_has_one_untitled_group() {
        let result = TranslationResult::new("NVI", vec![verse(1, 1), verse(1, 2)]);
        let tree = render_tree(&[result], &DisplayConfig::default(), "Gênesis");
        let ScreenBody::Columns { panels } = tree.body else {
            panic!("expected columns body");
        };
        assert_eq!(panels[0].groups.len(), 1);
        assert_eq!(panels[0].groups[0].heading, None);
        assert_eq!(
            panels[0].groups[0].verses[1].marker.as_deref(),
            Some("Gênesis 1:2")
        );
    }

    #[test]
    fn multi_chapter_panel_groups_by_chapter() {
        let result = TranslationResult::new("NVI", vec![verse(1, 31), verse(2, 1), verse(2, 2)]);
        let config = DisplayConfig {
            verse_number_format: VerseNumberFormat::Number,
            ..DisplayConfig::default()
        };
        let tree = render_tree(&[result], &config, "Gênesis");
        let ScreenBody::Columns { panels } = tree.body else {
            panic!("expected columns body");
        };
        let headings: Vec<_> = panels[0]
            .groups
            .iter()
            .map(|group| group.heading.clone())
            .collect();
        assert_eq!(
            headings,
            vec![Some("Gênesis 1".to_string()), Some("Gênesis 2".to_string())]
        );
        assert_eq!(panels[0].groups[0].verses[0].marker.as_deref(), Some("³¹"));
    }

    #[test]
    fn parallel_tree_has_absent_cell_for_short_translation() {
        let a = TranslationResult::new("A", (1..=5).map(|v| verse(1, v)).collect());
        let b = TranslationResult::new("B", (1..=3).map(|v| verse(1, v)).collect());
        let config = DisplayConfig {
            layout: Layout::Parallel,
            ..DisplayConfig::default()
        };
        let tree = render_tree(&[a, b], &config, "Gênesis");
        assert_eq!(tree.column_count, 2);
        let ScreenBody::Parallel { headers, rows } = tree.body else {
            panic!("expected parallel body");
        };
        assert_eq!(headers, vec!["A", "B"]);
        let ParallelNode::Row { cells, .. } = &rows[4] else {
            panic!("expected row");
        };
        assert!(cells[0].is_some());
        assert!(cells[1].is_none());
    }

    #[test]
    fn screen_style_matches_document_typography_for_out_of_range_config() {
        let config = DisplayConfig {
            font_size: 60,
            line_height: 0.5,
            pdf_mode: PdfMode::Custom,
            ..DisplayConfig::default()
        };
        let tree = render_tree(&[], &config, "Gênesis");
        let document = DocumentStyle::for_config(&config);
        assert_eq!(tree.style.font_size, 28);
        assert_eq!(tree.style.line_height, 1.2);
        assert_eq!(tree.style.font_size as f32, document.body_font_size);
    }
}
