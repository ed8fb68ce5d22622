//! Reader session: one user's resolve-and-render cycle state.
//!
//! # Responsibility
//! - Hold the current selection, display config and last resolved results.
//! - Run resolve and export actions to completion, one at a time.
//!
//! # Invariants
//! - Results are replaced wholesale on every successful resolve.
//! - A resolve without a selected book or translation is a no-op that keeps
//!   the previous results.
//! - The stored config is always normalized.

use crate::export::{export_file_name, ExportKind, ExportPayload};
use crate::layout::paginator::{paginate, PageSetup, PaginatedDocument};
use crate::layout::pdf::{write_pdf, PdfExportError};
use crate::model::book_catalog::BookNameLookup;
use crate::model::config::DisplayConfig;
use crate::model::reference::VerseRange;
use crate::model::selection::TranslationSelection;
use crate::model::verse::TranslationResult;
use crate::render::document::build_document;
use crate::render::text::{
    render_text, render_translation_text, CLIPBOARD_SEPARATOR, FILE_SEPARATOR,
};
use crate::render::tree::{render_tree, ScreenTree};
use crate::service::passage_service::PassageService;
use log::{info, warn};

/// Passage last resolved by the session.
#[derive(Debug, Clone, PartialEq)]
struct ResolvedPassage {
    book: String,
    range: VerseRange,
    results: Vec<TranslationResult>,
}

pub struct ReaderSession<'c, L: BookNameLookup> {
    service: PassageService<'c, L>,
    config: DisplayConfig,
    selection: TranslationSelection,
    book: Option<String>,
    page_setup: PageSetup,
    passage: Option<ResolvedPassage>,
}

impl<'c, L: BookNameLookup> ReaderSession<'c, L> {
    pub fn new(service: PassageService<'c, L>) -> Self {
        Self {
            service,
            config: DisplayConfig::default(),
            selection: TranslationSelection::default(),
            book: None,
            page_setup: PageSetup::default(),
            passage: None,
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Replaces the display config (clamped into range).
    pub fn set_config(&mut self, config: DisplayConfig) {
        self.config = config.normalized();
    }

    pub fn set_page_setup(&mut self, page_setup: PageSetup) {
        self.page_setup = page_setup;
    }

    pub fn selection(&self) -> &TranslationSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut TranslationSelection {
        &mut self.selection
    }

    pub fn set_selection(&mut self, selection: TranslationSelection) {
        self.selection = selection;
    }

    /// Selects a book by abbreviation; blank clears the selection.
    pub fn select_book(&mut self, abbrev: &str) {
        let abbrev = abbrev.trim();
        self.book = (!abbrev.is_empty()).then(|| abbrev.to_string());
    }

    pub fn selected_book(&self) -> Option<&str> {
        self.book.as_deref()
    }

    /// Parses `start`/`end` and resolves them for the current selection.
    ///
    /// Returns `false` (keeping previous results) when no book or no
    /// translation is selected.
    pub fn resolve(&mut self, start: &str, end: &str) -> bool {
        self.resolve_range(VerseRange::parse(start, end))
    }

    pub fn resolve_range(&mut self, range: VerseRange) -> bool {
        let Some(book) = self.book.clone() else {
            warn!("event=session_resolve module=session status=skip reason=no_book");
            return false;
        };
        if self.selection.is_empty() {
            warn!("event=session_resolve module=session status=skip reason=no_translation");
            return false;
        }

        let results = self
            .service
            .resolve(book.as_str(), &range, self.selection.keys());
        info!(
            "event=session_resolve module=session status=ok book={} range={} translations={}",
            book,
            range,
            results.len()
        );
        self.passage = Some(ResolvedPassage {
            book,
            range,
            results,
        });
        true
    }

    /// Last resolved results (empty before the first resolve).
    pub fn results(&self) -> &[TranslationResult] {
        match &self.passage {
            Some(passage) => &passage.results,
            None => &[],
        }
    }

    pub fn resolved_range(&self) -> Option<VerseRange> {
        self.passage.as_ref().map(|passage| passage.range)
    }

    /// Whether there is anything to show or export.
    pub fn has_results(&self) -> bool {
        !self.results().is_empty()
    }

    fn book_name(&self) -> &str {
        match &self.passage {
            Some(passage) => self.service.book_display_name(passage.book.as_str()),
            None => "",
        }
    }

    pub fn screen_tree(&self) -> ScreenTree {
        render_tree(self.results(), &self.config, self.book_name())
    }

    /// Text for the clipboard (all translations).
    pub fn clipboard_text(&self) -> String {
        render_text(
            self.results(),
            &self.config,
            self.book_name(),
            CLIPBOARD_SEPARATOR,
        )
    }

    /// Text for the clipboard (one translation), if it was resolved.
    pub fn clipboard_text_for(&self, translation_key: &str) -> Option<String> {
        self.results()
            .iter()
            .find(|result| result.translation_key == translation_key)
            .map(|result| {
                render_translation_text(result, &self.config, self.book_name(), CLIPBOARD_SEPARATOR)
            })
    }

    pub fn paginated_document(&self) -> PaginatedDocument {
        let model = build_document(self.results(), &self.config, self.book_name());
        paginate(&model, self.page_setup)
    }

    pub fn export_text(&self) -> ExportPayload {
        let text = render_text(self.results(), &self.config, self.book_name(), FILE_SEPARATOR);
        ExportPayload {
            kind: ExportKind::Text,
            file_name: export_file_name(self.selected_book(), ExportKind::Text),
            contents: text.into_bytes(),
        }
    }

    /// Paginated document written as PDF.
    pub fn export_document(&self) -> Result<ExportPayload, PdfExportError> {
        let file_name = export_file_name(self.selected_book(), ExportKind::Document);
        let title = file_name.trim_end_matches(".pdf");
        let contents = write_pdf(&self.paginated_document(), title)?;
        Ok(ExportPayload {
            kind: ExportKind::Document,
            file_name,
            contents,
        })
    }
}
