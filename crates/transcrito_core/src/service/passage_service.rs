//! Passage use-case service (translation aggregation).
//!
//! # Responsibility
//! - Resolve one range across every requested translation.
//! - Isolate per-translation lookup failures.
//!
//! # Invariants
//! - Output has exactly one result per requested key, in request order.
//! - A missing translation or book produces an empty result for that key
//!   only; other keys are unaffected.
//! - Verse counts are not cross-validated between translations.

use crate::model::book_catalog::BookNameLookup;
use crate::model::corpus::Corpus;
use crate::model::reference::VerseRange;
use crate::model::verse::TranslationResult;
use crate::service::range_resolver::resolve_range;
use log::{debug, info};

/// Read-only façade over a loaded corpus.
pub struct PassageService<'c, L: BookNameLookup> {
    corpus: &'c Corpus,
    names: L,
}

impl<'c, L: BookNameLookup> PassageService<'c, L> {
    /// Creates a service using the provided corpus and book-name lookup.
    pub fn new(corpus: &'c Corpus, names: L) -> Self {
        Self { corpus, names }
    }

    /// Display name used in references and chapter headings.
    pub fn book_display_name<'a>(&'a self, abbrev: &'a str) -> &'a str {
        self.names.display_name(abbrev)
    }

    /// Resolves `range` of `book_abbrev` in each of `translation_keys`.
    ///
    /// # Contract
    /// - Callers keep the key count within 1..=4; it is not checked here.
    /// - Never fails; see module invariants for missing-data handling.
    pub fn resolve<S: AsRef<str>>(
        &self,
        book_abbrev: &str,
        range: &VerseRange,
        translation_keys: &[S],
    ) -> Vec<TranslationResult> {
        let book_name = self.book_display_name(book_abbrev);
        let results: Vec<TranslationResult> = translation_keys
            .iter()
            .map(|key| {
                let key = key.as_ref();
                match self.corpus.book(key, book_abbrev) {
                    Some(book) => {
                        TranslationResult::new(key, resolve_range(book, range, book_name))
                    }
                    None => {
                        debug!(
                            "event=book_missing module=aggregator status=skip translation={} book={} translation_loaded={}",
                            key,
                            book_abbrev,
                            self.corpus.translation(key).is_some()
                        );
                        TranslationResult::empty(key)
                    }
                }
            })
            .collect();

        info!(
            "event=passage_resolve module=aggregator status=ok book={} range={} translations={} verses={}",
            book_abbrev,
            range,
            results.len(),
            results.iter().map(|r| r.verses.len()).sum::<usize>()
        );
        results
    }
}
