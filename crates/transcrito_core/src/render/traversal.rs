//! Chapter/verse traversal shared by every output sink.
//!
//! # Responsibility
//! - Decide where chapter headings go for one verse list.
//! - Drive parallel rows from the first translation's verse list.
//! - Group verses into blocks according to `TextFlow`.
//!
//! # Invariants
//! - Headings appear only when the list spans more than one chapter, right
//!   before the first verse of each chapter.
//! - Parallel row count and headings come from `results[0]` alone; a
//!   shorter translation contributes `None` cells, never a panic.

use crate::model::config::TextFlow;
use crate::model::verse::{spans_chapters, ResolvedVerse, TranslationResult};
use log::debug;

/// One step of a single-translation walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassageItem<'a> {
    ChapterHeading(u32),
    Verse(&'a ResolvedVerse),
}

/// One step of a parallel (row-per-index) walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParallelItem<'a> {
    ChapterHeading(u32),
    Row {
        index: usize,
        cells: Vec<Option<&'a ResolvedVerse>>,
    },
}

/// Flow-grouped block of a single-translation walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowBlock<'a> {
    ChapterHeading(u32),
    /// One verse per block (`TextFlow::Paragraph`).
    Verse(&'a ResolvedVerse),
    /// Consecutive verses of one chapter (`TextFlow::Continuous`).
    Stream(Vec<&'a ResolvedVerse>),
}

/// `"<book name> <chapter>"`.
pub fn chapter_heading(book_name: &str, chapter: u32) -> String {
    format!("{book_name} {chapter}")
}

/// Walks one verse list, inserting chapter headings where needed.
pub fn walk_passage(verses: &[ResolvedVerse]) -> Vec<PassageItem<'_>> {
    let with_headings = spans_chapters(verses);
    let mut items = Vec::with_capacity(verses.len());
    let mut current_chapter = None;

    for verse in verses {
        if with_headings && current_chapter != Some(verse.chapter) {
            items.push(PassageItem::ChapterHeading(verse.chapter));
        }
        current_chapter = Some(verse.chapter);
        items.push(PassageItem::Verse(verse));
    }

    items
}

/// Groups a walk into blocks for the requested flow.
pub fn flow_blocks(verses: &[ResolvedVerse], flow: TextFlow) -> Vec<FlowBlock<'_>> {
    let mut blocks = Vec::new();
    for item in walk_passage(verses) {
        match (item, flow) {
            (PassageItem::ChapterHeading(chapter), _) => {
                blocks.push(FlowBlock::ChapterHeading(chapter));
            }
            (PassageItem::Verse(verse), TextFlow::Paragraph) => {
                blocks.push(FlowBlock::Verse(verse));
            }
            (PassageItem::Verse(verse), TextFlow::Continuous) => match blocks.last_mut() {
                Some(FlowBlock::Stream(stream)) => stream.push(verse),
                _ => blocks.push(FlowBlock::Stream(vec![verse])),
            },
        }
    }
    blocks
}

/// Walks all translations in lockstep by verse index.
pub fn walk_parallel(results: &[TranslationResult]) -> Vec<ParallelItem<'_>> {
    let Some(driver) = results.first() else {
        return Vec::new();
    };

    for result in &results[1..] {
        if result.verses.len() != driver.verses.len() {
            debug!(
                "event=parallel_mismatch module=render status=skip driver={} driver_len={} translation={} len={}",
                driver.translation_key,
                driver.verses.len(),
                result.translation_key,
                result.verses.len()
            );
        }
    }

    let mut items = Vec::with_capacity(driver.verses.len());
    let mut index = 0;
    for item in walk_passage(&driver.verses) {
        match item {
            PassageItem::ChapterHeading(chapter) => {
                items.push(ParallelItem::ChapterHeading(chapter));
            }
            PassageItem::Verse(_) => {
                let cells = results
                    .iter()
                    .map(|result| result.verses.get(index))
                    .collect();
                items.push(ParallelItem::Row { index, cells });
                index += 1;
            }
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::{flow_blocks, walk_parallel, walk_passage, FlowBlock, ParallelItem, PassageItem};
    use crate::model::config::TextFlow;
    use crate::model::verse::{ResolvedVerse, TranslationResult};

    fn verse(chapter: u32, verse: u32) -> ResolvedVerse {
        ResolvedVerse::new("sl", "Salmos", chapter, verse, format!("t{chapter}.{verse}"))
    }

    #[test]
    fn single_chapter_walk_has_no_headings() {
        let verses = vec![verse(23, 1), verse(23, 2)];
        assert!(walk_passage(&verses)
            .iter()
            .all(|item| matches!(item, PassageItem::Verse(_))));
    }

    #[test]
    fn multi_chapter_walk_heads_each_chapter() {
        let verses = vec![verse(1, 5), verse(2, 1), verse(2, 2)];
        let items = walk_passage(&verses);
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], PassageItem::ChapterHeading(1));
        assert_eq!(items[2], PassageItem::ChapterHeading(2));
    }

    #[test]
    fn continuous_flow_streams_per_chapter() {
        let verses = vec![verse(1, 5), verse(2, 1), verse(2, 2)];
        let blocks = flow_blocks(&verses, TextFlow::Continuous);
        assert_eq!(blocks.len(), 4);
        assert!(matches!(&blocks[3], FlowBlock::Stream(stream) if stream.len() == 2));
    }

    #[test]
    fn parallel_walk_leaves_missing_cells_empty() {
        let a = TranslationResult::new("A", (1..=5).map(|v| verse(1, v)).collect());
        let b = TranslationResult::new("B", (1..=3).map(|v| verse(1, v)).collect());
        let results = [a, b];
        let items = walk_parallel(&results);
        assert_eq!(items.len(), 5);
        let ParallelItem::Row { index, cells } = &items[4] else {
            panic!("expected a row");
        };
        assert_eq!(*index, 4);
        assert!(cells[0].is_some());
        assert!(cells[1].is_none());
    }
}
