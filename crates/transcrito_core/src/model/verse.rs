//! Resolved passage records.
//!
//! # Invariants
//! - `ResolvedVerse::reference` is always `"<book name> <chapter>:<verse>"`.
//! - Verses inside one `TranslationResult` ascend by chapter, then verse.

use serde::{Deserialize, Serialize};

/// One verse extracted from a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVerse {
    /// Book abbreviation, e.g. `jo`.
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    /// Display locator, e.g. `João 3:16`.
    pub reference: String,
}

impl ResolvedVerse {
    pub fn new(
        book: impl Into<String>,
        book_name: &str,
        chapter: u32,
        verse: u32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            text: text.into(),
            reference: format_reference(book_name, chapter, verse),
        }
    }
}

/// All verses resolved for one translation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translation_key: String,
    pub verses: Vec<ResolvedVerse>,
}

impl TranslationResult {
    pub fn new(translation_key: impl Into<String>, verses: Vec<ResolvedVerse>) -> Self {
        Self {
            translation_key: translation_key.into(),
            verses,
        }
    }

    /// Result for a translation that has no data for the requested book.
    pub fn empty(translation_key: impl Into<String>) -> Self {
        Self::new(translation_key, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// Formats the `"<book name> C:V"` locator.
pub fn format_reference(book_name: &str, chapter: u32, verse: u32) -> String {
    format!("{book_name} {chapter}:{verse}")
}

/// Returns whether `first.chapter != last.chapter`.
pub fn spans_chapters(verses: &[ResolvedVerse]) -> bool {
    match (verses.first(), verses.last()) {
        (Some(first), Some(last)) => first.chapter != last.chapter,
        _ => false,
    }
}
