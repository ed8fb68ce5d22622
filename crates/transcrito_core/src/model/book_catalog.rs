//! Localized book names.
//!
//! # Responsibility
//! - Map book abbreviations to display names used in references and headings.
//! - Expose the canonical book order for selectors.
//!
//! # Invariants
//! - Lookup never fails; unknown abbreviations render as themselves.

/// Resolves a book abbreviation to its display name.
pub trait BookNameLookup {
    fn book_name(&self, abbrev: &str) -> Option<&str>;

    /// Display name, falling back to the abbreviation itself.
    fn display_name<'a>(&'a self, abbrev: &'a str) -> &'a str {
        self.book_name(abbrev).unwrap_or(abbrev)
    }
}

const PT_BR_BOOKS: &[(&str, &str)] = &[
    ("gn", "Gênesis"),
    ("ex", "Êxodo"),
    ("lv", "Levítico"),
    ("nm", "Números"),
    ("dt", "Deuteronômio"),
    ("js", "Josué"),
    ("jz", "Juízes"),
    ("rt", "Rute"),
    ("1sm", "1 Samuel"),
    ("2sm", "2 Samuel"),
    ("1rs", "1 Reis"),
    ("2rs", "2 Reis"),
    ("1cr", "1 Crônicas"),
    ("2cr", "2 Crônicas"),
    ("ed", "Esdras"),
    ("ne", "Neemias"),
    ("et", "Ester"),
    ("job", "Jó"),
    ("sl", "Salmos"),
    ("pv", "Provérbios"),
    ("ec", "Eclesiastes"),
    ("ct", "Cânticos"),
    ("is", "Isaías"),
    ("jr", "Jeremias"),
    ("lm", "Lamentações"),
    ("ez", "Ezequiel"),
    ("dn", "Daniel"),
    ("os", "Oséias"),
    ("jl", "Joel"),
    ("am", "Amós"),
    ("ob", "Obadias"),
    ("jn", "Jonas"),
    ("mq", "Miquéias"),
    ("na", "Naum"),
    ("hc", "Habacuque"),
    ("sf", "Sofonias"),
    ("ag", "Ageu"),
    ("zc", "Zacarias"),
    ("ml", "Malaquias"),
    ("mt", "Mateus"),
    ("mc", "Marcos"),
    ("lc", "Lucas"),
    ("jo", "João"),
    ("at", "Atos"),
    ("rm", "Romanos"),
    ("1co", "1 Coríntios"),
    ("2co", "2 Coríntios"),
    ("gl", "Gálatas"),
    ("ef", "Efésios"),
    ("fp", "Filipenses"),
    ("cl", "Colossenses"),
    ("1ts", "1 Tessalonicenses"),
    ("2ts", "2 Tessalonicenses"),
    ("1tm", "1 Timóteo"),
    ("2tm", "2 Timóteo"),
    ("tt", "Tito"),
    ("fm", "Filemom"),
    ("hb", "Hebreus"),
    ("tg", "Tiago"),
    ("1pe", "1 Pedro"),
    ("2pe", "2 Pedro"),
    ("1jo", "1 João"),
    ("2jo", "2 João"),
    ("3jo", "3 João"),
    ("jd", "Judas"),
    ("ap", "Apocalipse"),
];

/// Static abbreviation → name table in canonical book order.
#[derive(Debug, Clone, Copy)]
pub struct BookCatalog {
    entries: &'static [(&'static str, &'static str)],
}

impl BookCatalog {
    /// Brazilian Portuguese names for the 66-book canon.
    pub fn pt_br() -> Self {
        Self {
            entries: PT_BR_BOOKS,
        }
    }

    /// `(abbrev, name)` pairs in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn contains(&self, abbrev: &str) -> bool {
        self.book_name(abbrev).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::pt_br()
    }
}

impl BookNameLookup for BookCatalog {
    fn book_name(&self, abbrev: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == abbrev)
            .map(|(_, name)| *name)
    }
}

impl<L: BookNameLookup + ?Sized> BookNameLookup for &L {
    fn book_name(&self, abbrev: &str) -> Option<&str> {
        (**self).book_name(abbrev)
    }
}
