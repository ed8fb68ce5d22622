//! Ordered translation selection (1 to 4 keys).
//!
//! # Invariants
//! - Keys are unique and keep selection order.
//! - `toggle` never grows the selection past [`MAX_TRANSLATIONS`].

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum number of translations rendered side by side.
pub const MAX_TRANSLATIONS: usize = 4;
/// Translation preselected when a session starts.
pub const DEFAULT_TRANSLATION: &str = "NVI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    Empty,
    TooMany(usize),
    Duplicate(String),
    BlankKey,
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "at least one translation must be selected"),
            Self::TooMany(count) => write!(
                f,
                "{count} translations selected; at most {MAX_TRANSLATIONS} are allowed"
            ),
            Self::Duplicate(key) => write!(f, "translation selected twice: {key}"),
            Self::BlankKey => write!(f, "translation key must not be blank"),
        }
    }
}

impl Error for SelectionError {}

/// Translation keys chosen by the user, in the order they were picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSelection {
    keys: Vec<String>,
}

impl Default for TranslationSelection {
    fn default() -> Self {
        Self {
            keys: vec![DEFAULT_TRANSLATION.to_string()],
        }
    }
}

impl TranslationSelection {
    /// Builds a selection from explicit keys.
    ///
    /// # Errors
    /// - `Empty` when no key is given.
    /// - `TooMany` when more than [`MAX_TRANSLATIONS`] keys are given.
    /// - `BlankKey` / `Duplicate` for invalid entries.
    pub fn try_from_keys<I, S>(keys: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into().trim().to_string();
            if key.is_empty() {
                return Err(SelectionError::BlankKey);
            }
            if normalized.contains(&key) {
                return Err(SelectionError::Duplicate(key));
            }
            normalized.push(key);
        }
        if normalized.is_empty() {
            return Err(SelectionError::Empty);
        }
        if normalized.len() > MAX_TRANSLATIONS {
            return Err(SelectionError::TooMany(normalized.len()));
        }
        Ok(Self { keys: normalized })
    }

    /// Checkbox semantics: removes a selected key, otherwise appends it
    /// while capacity remains.
    ///
    /// Returns whether the selection changed. Removing the last key is
    /// allowed; callers must not resolve an empty selection.
    pub fn toggle(&mut self, key: &str) -> bool {
        let key = key.trim();
        if key.is_empty() {
            return false;
        }
        if let Some(position) = self.keys.iter().position(|selected| selected == key) {
            self.keys.remove(position);
            return true;
        }
        if self.keys.len() >= MAX_TRANSLATIONS {
            return false;
        }
        self.keys.push(key.to_string());
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|selected| selected == key)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
