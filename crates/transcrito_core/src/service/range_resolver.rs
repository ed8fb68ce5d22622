//! Verse range extraction for a single book.
//!
//! # Responsibility
//! - Walk a book's chapters and collect the verses bounded by a range.
//!
//! # Invariants
//! - Output ascends by chapter, then verse, matching source order.
//! - Missing chapters and empty verse slots are skipped, never errors.
//! - An inverted range yields an empty list.
//! - Work is bounded by the book's chapter count, not by the range.

use crate::model::corpus::{Book, Chapter};
use crate::model::reference::VerseRange;
use crate::model::verse::ResolvedVerse;
use log::debug;

/// Resolves `range` against `book`, labelling verses with `book_name`.
pub fn resolve_range(book: &Book, range: &VerseRange, book_name: &str) -> Vec<ResolvedVerse> {
    let VerseRange { start, end } = *range;
    let mut verses = Vec::new();

    if start.chapter == end.chapter {
        let Some(chapter) = book.chapter(start.chapter) else {
            log_missing_chapter(book, start.chapter);
            return verses;
        };
        push_window(
            &mut verses,
            book,
            book_name,
            start.chapter,
            chapter,
            zero_based(start.verse),
            end.verse as usize,
        );
        return verses;
    }

    let chapter_count = u32::try_from(book.chapter_count()).unwrap_or(u32::MAX);
    let last_chapter = end.chapter.min(chapter_count);
    if end.chapter > last_chapter {
        debug!(
            "event=range_clipped module=resolver status=skip book={} end_chapter={} chapter_count={}",
            book.abbrev, end.chapter, chapter_count
        );
    }

    for chapter_number in start.chapter..=last_chapter {
        let Some(chapter) = book.chapter(chapter_number) else {
            log_missing_chapter(book, chapter_number);
            continue;
        };
        let from = if chapter_number == start.chapter {
            zero_based(start.verse)
        } else {
            0
        };
        let to = if chapter_number == end.chapter {
            end.verse as usize
        } else {
            chapter.len()
        };
        push_window(
            &mut verses,
            book,
            book_name,
            chapter_number,
            chapter,
            from,
            to,
        );
    }

    verses
}

/// Pushes verse indices `from..to`, clipped to the chapter length.
fn push_window(
    verses: &mut Vec<ResolvedVerse>,
    book: &Book,
    book_name: &str,
    chapter_number: u32,
    chapter: &Chapter,
    from: usize,
    to: usize,
) {
    let to = to.min(chapter.len());
    for index in from..to {
        let text = chapter[index].as_str();
        if text.is_empty() {
            continue;
        }
        let verse_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        verses.push(ResolvedVerse::new(
            book.abbrev.as_str(),
            book_name,
            chapter_number,
            verse_number,
            text,
        ));
    }
}

fn zero_based(verse: u32) -> usize {
    (verse as usize).saturating_sub(1)
}

fn log_missing_chapter(book: &Book, chapter: u32) {
    debug!(
        "event=chapter_missing module=resolver status=skip book={} chapter={} chapter_count={}",
        book.abbrev,
        chapter,
        book.chapter_count()
    );
}

#[cfg(test)]
mod tests {
    use super::resolve_range;
    use crate::model::corpus::Book;
    use crate::model::reference::VerseRange;

    fn book_with_lengths(lengths: &[usize]) -> Book {
        let chapters = lengths
            .iter()
            .enumerate()
            .map(|(c, len)| (1..=*len).map(|v| format!("c{}v{v}", c + 1)).collect())
            .collect();
        Book::new("tt", chapters)
    }

    #[test]
    fn inverted_range_in_same_chapter_is_empty() {
        let book = book_with_lengths(&[5]);
        assert!(resolve_range(&book, &VerseRange::parse("1:4", "1:2"), "Tito").is_empty());
    }

    #[test]
    fn empty_verse_slots_are_skipped() {
        let book = Book::new(
            "tt",
            vec![vec!["a".to_string(), String::new(), "c".to_string()]],
        );
        let verses = resolve_range(&book, &VerseRange::parse("1:1", "1:3"), "Tito");
        let numbers: Vec<u32> = verses.iter().map(|v| v.verse).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn same_chapter_window_is_clipped_to_chapter_length() {
        let book = book_with_lengths(&[3]);
        let verses = resolve_range(&book, &VerseRange::parse("1:2", "1:40"), "Tito");
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[1].reference, "Tito 1:3");
    }

    #[test]
    fn huge_end_chapter_stops_at_last_chapter() {
        let book = book_with_lengths(&[2, 1]);
        let verses = resolve_range(&book, &VerseRange::parse("1:1", "4000000000:1"), "Tito");
        let references: Vec<&str> = verses.iter().map(|v| v.reference.as_str()).collect();
        assert_eq!(references, vec!["Tito 1:1", "Tito 1:2", "Tito 2:1"]);
    }

    #[test]
    fn saturated_chapter_resolves_to_nothing() {
        let book = book_with_lengths(&[3]);
        let range = VerseRange::parse("99999999999:1", "99999999999:3");
        assert!(resolve_range(&book, &range, "Tito").is_empty());
    }

    #[test]
    fn missing_single_chapter_yields_nothing() {
        let book = book_with_lengths(&[3]);
        assert!(resolve_range(&book, &VerseRange::parse("9:1", "9:3"), "Tito").is_empty());
    }
}
