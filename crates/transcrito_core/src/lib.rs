//! Core passage logic for Transcrito.
//! Resolves scripture verse ranges across translations and renders them as a
//! screen tree, flat text or a paginated document.

pub mod export;
pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use export::{export_file_name, ExportKind, ExportPayload};
pub use layout::paginator::{paginate, PageSetup, PaginatedDocument, Paginator};
pub use layout::pdf::{write_pdf, PdfExportError};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::book_catalog::{BookCatalog, BookNameLookup};
pub use model::config::{
    ConfigError, DisplayConfig, Layout, PdfMode, TextAlign, TextFlow, VerseNumberFormat,
};
pub use model::corpus::{Book, Chapter, Corpus, CorpusError};
pub use model::reference::{VerseRange, VerseRef};
pub use model::selection::{SelectionError, TranslationSelection, MAX_TRANSLATIONS};
pub use model::verse::{ResolvedVerse, TranslationResult};
pub use render::document::{build_document, DocumentModel};
pub use render::text::{render_text, CLIPBOARD_SEPARATOR, FILE_SEPARATOR};
pub use render::tree::{render_tree, ScreenTree};
pub use render::{render, OutputShape, RenderOutput};
pub use service::passage_service::PassageService;
pub use service::range_resolver::resolve_range;
pub use service::session::ReaderSession;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
