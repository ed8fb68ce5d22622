//! Export payloads handed to external sinks (file save, clipboard).
//!
//! # Invariants
//! - File names follow `versiculos-<book abbrev | "biblia">.<ext>`.

use serde::Serialize;

const FILE_PREFIX: &str = "versiculos";
const FALLBACK_BOOK: &str = "biblia";

/// Downloadable artefact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// UTF-8 plain text.
    Text,
    /// Paginated document as PDF.
    Document,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Document => "pdf",
        }
    }
}

/// File name for an export of `book` (blank or missing → `biblia`).
pub fn export_file_name(book: Option<&str>, kind: ExportKind) -> String {
    let book = book
        .map(str::trim)
        .filter(|abbrev| !abbrev.is_empty())
        .unwrap_or(FALLBACK_BOOK);
    format!("{FILE_PREFIX}-{book}.{}", kind.extension())
}

/// Finished export ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPayload {
    pub kind: ExportKind,
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl ExportPayload {
    /// Contents as UTF-8 text; `None` for binary exports.
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            ExportKind::Text => std::str::from_utf8(&self.contents).ok(),
            ExportKind::Document => None,
        }
    }
}
