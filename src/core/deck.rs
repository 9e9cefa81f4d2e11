//! The deck-in-progress produced by an import

use crate::core::{CardLineEntry, MetaKey};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;

/// A block-level import failure, shown to the user as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ImportError {
    InvalidMainDeck,
    InvalidSideboard,
    NoCards,
}

impl ImportError {
    pub fn message(&self) -> &'static str {
        match self {
            ImportError::InvalidMainDeck => "Invalid input for main deck",
            ImportError::InvalidSideboard => "Invalid input for sideboard",
            ImportError::NoCards => "Deck must have cards",
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<ImportError> for String {
    fn from(error: ImportError) -> Self {
        error.message().to_string()
    }
}

impl TryFrom<String> for ImportError {
    type Error = String;

    fn try_from(message: String) -> Result<Self, Self::Error> {
        [
            ImportError::InvalidMainDeck,
            ImportError::InvalidSideboard,
            ImportError::NoCards,
        ]
        .into_iter()
        .find(|error| error.message() == message)
        .ok_or_else(|| format!("unknown import error: {message}"))
    }
}

/// Ordered import errors; main deck errors always precede sideboard errors
pub type ImportErrors = SmallVec<[ImportError; 2]>;

/// Structured result of importing a deck from text
///
/// Either `errors` is empty and everything else is populated, or `errors` is
/// non-empty and every other field holds its empty default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckInProgress {
    pub errors: ImportErrors,
    pub deck_name: String,
    pub deck_path: String,
    pub deck_power: String,
    pub deck_cover_art: String,
    /// Main deck entries keyed by their position in the import
    pub main_deck: BTreeMap<usize, CardLineEntry>,
    /// Sideboard entries keyed by their position in the import
    pub sideboard: BTreeMap<usize, CardLineEntry>,
    /// Re-importable text for the main deck block
    pub as_text: String,
    /// Re-importable text for the sideboard block
    pub sideboard_as_text: String,
}

impl DeckInProgress {
    /// An error-only result
    pub fn failed(errors: ImportErrors) -> Self {
        DeckInProgress {
            errors,
            ..Default::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// User-facing error strings, in order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Value of a metadata field (empty when absent)
    pub fn meta(&self, key: MetaKey) -> &str {
        match key {
            MetaKey::Name => &self.deck_name,
            MetaKey::Path => &self.deck_path,
            MetaKey::Power => &self.deck_power,
            MetaKey::CoverArt => &self.deck_cover_art,
        }
    }

    /// Total cards in main deck
    pub fn total_cards(&self) -> usize {
        self.main_deck.values().map(|e| e.quantity as usize).sum()
    }

    /// Total cards in sideboard
    pub fn sideboard_size(&self) -> usize {
        self.sideboard.values().map(|e| e.quantity as usize).sum()
    }
}
