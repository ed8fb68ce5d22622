//! Fixed-width line wrapping.
//!
//! Greedy word wrap measured in display cells, falling back to grapheme
//! breaks for words wider than the line. Lines never split a grapheme.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Wraps `text` into lines at most `max_cells` wide.
///
/// Always returns at least one line. Embedded newlines force a break.
pub fn wrap_text(text: &str, max_cells: usize) -> Vec<String> {
    let max_cells = max_cells.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_cells, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, max_cells: usize, lines: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_width = 0;

    for word in paragraph.split_whitespace() {
        let word_width = word.width();
        let gap = usize::from(!line.is_empty());

        if line_width + gap + word_width <= max_cells {
            if gap == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_width += gap + word_width;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= max_cells {
            line.push_str(word);
            line_width = word_width;
            continue;
        }

        for grapheme in word.graphemes(true) {
            let grapheme_width = grapheme.width();
            if line_width + grapheme_width > max_cells && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push_str(grapheme);
            line_width += grapheme_width;
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
}
