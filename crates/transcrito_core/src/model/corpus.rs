//! Read-only translation corpus.
//!
//! # Responsibility
//! - Hold every loaded translation as an ordered list of books.
//! - Decode the external JSON corpus format
//!   (`[{"abbrev": "gn", "chapters": [["verse", ...], ...]}, ...]`).
//!
//! # Invariants
//! - A corpus is never mutated after construction.
//! - Chapter `c`, verse `v` lives at `chapters[c - 1][v - 1]`.
//! - Translation keys are non-blank and unique.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Ordered verse texts of one chapter.
pub type Chapter = Vec<String>;

/// One book record inside a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Key into the book catalog, e.g. `jo`.
    pub abbrev: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    pub fn new(abbrev: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        Self {
            abbrev: abbrev.into(),
            chapters,
        }
    }

    /// Returns the 1-based chapter, or `None` when absent.
    pub fn chapter(&self, chapter: u32) -> Option<&Chapter> {
        let index = usize::try_from(chapter).ok()?.checked_sub(1)?;
        self.chapters.get(index)
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

/// Errors raised while loading corpus data.
#[derive(Debug)]
pub enum CorpusError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    EmptyTranslationKey,
    DuplicateTranslation(String),
}

impl Display for CorpusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read corpus `{path}`: {source}"),
            Self::Json(err) => write!(f, "invalid corpus json: {err}"),
            Self::EmptyTranslationKey => write!(f, "translation key must not be blank"),
            Self::DuplicateTranslation(key) => {
                write!(f, "translation already loaded: {key}")
            }
        }
    }
}

impl Error for CorpusError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::EmptyTranslationKey | Self::DuplicateTranslation(_) => None,
        }
    }
}

impl From<serde_json::Error> for CorpusError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// All loaded translations keyed by translation key (e.g. `NVI`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    translations: BTreeMap<String, Vec<Book>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one translation, rejecting blank or duplicate keys.
    pub fn insert_translation(
        &mut self,
        key: impl Into<String>,
        books: Vec<Book>,
    ) -> Result<(), CorpusError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(CorpusError::EmptyTranslationKey);
        }
        if self.translations.contains_key(key.as_str()) {
            return Err(CorpusError::DuplicateTranslation(key));
        }
        self.translations.insert(key, books);
        Ok(())
    }

    /// Builder-style variant of [`Corpus::insert_translation`].
    pub fn with_translation(
        mut self,
        key: impl Into<String>,
        books: Vec<Book>,
    ) -> Result<Self, CorpusError> {
        self.insert_translation(key, books)?;
        Ok(self)
    }

    /// Decodes one translation from JSON text and adds it under `key`.
    ///
    /// A leading UTF-8 byte order mark is ignored.
    pub fn insert_translation_json(&mut self, key: &str, json: &str) -> Result<(), CorpusError> {
        let books: Vec<Book> = serde_json::from_str(json.trim_start_matches('\u{feff}'))?;
        self.insert_translation(key, books)
    }

    /// Reads and decodes one translation file.
    pub fn load_translation_file(
        &mut self,
        key: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), CorpusError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.insert_translation_json(key, json.as_str())
    }

    /// Returns the books of one translation.
    pub fn translation(&self, key: &str) -> Option<&[Book]> {
        self.translations.get(key).map(Vec::as_slice)
    }

    /// Finds a book by abbreviation inside one translation.
    pub fn book(&self, translation_key: &str, abbrev: &str) -> Option<&Book> {
        self.translation(translation_key)?
            .iter()
            .find(|book| book.abbrev == abbrev)
    }

    /// Returns sorted translation keys.
    pub fn translation_keys(&self) -> Vec<String> {
        self.translations.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
