//! Verse marker formatting.
//!
//! Screen and plain-text sinks print verse numbers as superscript digits;
//! the paginated document prints plain digits.

use crate::model::config::VerseNumberFormat;
use crate::model::verse::ResolvedVerse;

/// Digit rendering strategy for `VerseNumberFormat::Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitStyle {
    Superscript,
    Plain,
}

const SUPERSCRIPT_DIGITS: [char; 10] = [
    '⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹',
];

/// Renders `value` with Unicode superscript digits (`16` → `¹⁶`).
pub fn superscript_number(value: u32) -> String {
    value
        .to_string()
        .chars()
        .filter_map(|digit| digit.to_digit(10))
        .map(|digit| SUPERSCRIPT_DIGITS[digit as usize])
        .collect()
}

/// Marker shown before the verse text, if any.
pub fn verse_marker(
    verse: &ResolvedVerse,
    format: VerseNumberFormat,
    digits: DigitStyle,
) -> Option<String> {
    match format {
        VerseNumberFormat::Full => Some(verse.reference.clone()),
        VerseNumberFormat::Number => Some(match digits {
            DigitStyle::Superscript => superscript_number(verse.verse),
            DigitStyle::Plain => verse.verse.to_string(),
        }),
        VerseNumberFormat::None => None,
    }
}

/// One-line verse rendering: `"João 3:16 - text"`, `"¹⁶ text"` or `"text"`.
pub fn inline_verse(
    verse: &ResolvedVerse,
    format: VerseNumberFormat,
    digits: DigitStyle,
) -> String {
    match (format, verse_marker(verse, format, digits)) {
        (VerseNumberFormat::Full, Some(reference)) => format!("{reference} - {}", verse.text),
        (_, Some(number)) => format!("{number} {}", verse.text),
        (_, None) => verse.text.clone(),
    }
}
