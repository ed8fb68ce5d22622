//! Chapter/verse locators and the reference parser.
//!
//! # Responsibility
//! - Turn free-text `"chapter:verse"` input into a structured `VerseRef`.
//! - Pair two references into a `VerseRange`.
//!
//! # Invariants
//! - Parsing is total: every input yields a reference, never an error.
//! - Both fields are always `>= 1`; missing, non-numeric, zero or negative
//!   components collapse to `1`.
//! - Numeric components past `u32::MAX` saturate, so they address nothing
//!   instead of the start of the book.
//! - `VerseRange` does not enforce `start <= end`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Leading-integer prefix: optional whitespace, optional sign, ASCII digits.
static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").expect("valid leading integer regex"));

/// One chapter/verse locator, both components 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseRef {
    /// Creates a reference, replacing zero components with `1`.
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self {
            chapter: chapter.max(1),
            verse: verse.max(1),
        }
    }

    /// Parses `"chapter:verse"` text.
    ///
    /// Only the first two `:`-separated components are read. Each one is
    /// read as a leading integer (`"3abc"` reads as `3`); anything that does
    /// not produce a positive value becomes `1`, and values too large for
    /// `u32` saturate to `u32::MAX`.
    pub fn parse(input: &str) -> Self {
        let mut parts = input.split(':');
        let chapter = parse_component(parts.next());
        let verse = parse_component(parts.next());
        Self { chapter, verse }
    }
}

impl Default for VerseRef {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl Display for VerseRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// Start/end pair bounding the verses to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerseRange {
    pub start: VerseRef,
    pub end: VerseRef,
}

impl VerseRange {
    pub fn new(start: VerseRef, end: VerseRef) -> Self {
        Self { start, end }
    }

    /// Parses both range endpoints with [`VerseRef::parse`].
    pub fn parse(start: &str, end: &str) -> Self {
        Self::new(VerseRef::parse(start), VerseRef::parse(end))
    }

    /// Returns whether the range covers more than one chapter.
    pub fn spans_chapters(&self) -> bool {
        self.start.chapter != self.end.chapter
    }
}

impl Display for VerseRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn parse_component(raw: Option<&str>) -> u32 {
    let Some(captures) = raw.and_then(|raw| LEADING_INT_RE.captures(raw)) else {
        return 1;
    };
    let digits = captures[2].trim_start_matches('0');
    if &captures[1] == "-" || digits.is_empty() {
        return 1;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{VerseRange, VerseRef};

    #[test]
    fn parse_reads_chapter_and_verse() {
        assert_eq!(VerseRef::parse("3:16"), VerseRef::new(3, 16));
        assert_eq!(VerseRef::parse("3"), VerseRef::new(3, 1));
    }

    #[test]
    fn parse_falls_back_to_one() {
        assert_eq!(VerseRef::parse(""), VerseRef::new(1, 1));
        assert_eq!(VerseRef::parse("x:y"), VerseRef::new(1, 1));
        assert_eq!(VerseRef::parse(":"), VerseRef::new(1, 1));
        assert_eq!(VerseRef::parse("0:0"), VerseRef::new(1, 1));
        assert_eq!(VerseRef::parse("-2:-5"), VerseRef::new(1, 1));
    }

    #[test]
    fn parse_saturates_oversized_components() {
        assert_eq!(VerseRef::parse("99999999999:2"), VerseRef::new(u32::MAX, 2));
        assert_eq!(
            VerseRef::parse("3:123456789012345678901234567890"),
            VerseRef::new(3, u32::MAX)
        );
        assert_eq!(VerseRef::parse("-99999999999:007"), VerseRef::new(1, 7));
    }

    #[test]
    fn parse_uses_leading_integer_prefix() {
        assert_eq!(VerseRef::parse(" 23 : 6a"), VerseRef::new(23, 6));
        assert_eq!(VerseRef::parse("+4:7:9"), VerseRef::new(4, 7));
        assert_eq!(VerseRef::parse("12abc"), VerseRef::new(12, 1));
    }

    #[test]
    fn range_reports_chapter_span() {
        assert!(!VerseRange::parse("2:1", "2:9").spans_chapters());
        assert!(VerseRange::parse("1:4", "3:2").spans_chapters());
        assert_eq!(VerseRange::parse("1:4", "3:2").to_string(), "1:4-3:2");
    }
}
