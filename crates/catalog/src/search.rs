//! Product name matching for the search view.
//!
//! Matching is a plain substring test after folding both sides: Unicode
//! canonical decomposition (NFD), removal of combining diacritical marks
//! (U+0300..=U+036F) and lowercasing. "Tênis" and "TENIS" both fold to
//! "tenis".

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

const COMBINING_DIACRITICS: RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Fold `text` for accent- and case-insensitive comparison.
#[must_use]
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_DIACRITICS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether a search term is empty once surrounding whitespace is ignored.
///
/// Blank terms match nothing: the search view stays empty until the user
/// types something.
#[must_use]
pub fn is_blank(term: &str) -> bool {
    term.trim().is_empty()
}

/// A search term folded once and matched against many names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    folded: Option<String>,
}

impl SearchTerm {
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            folded: (!is_blank(term)).then(|| fold(term)),
        }
    }

    /// Whether `name` contains the term. Always false for a blank term.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.folded
            .as_deref()
            .is_some_and(|needle| fold(name).contains(needle))
    }
}
