//! Card line entries

use crate::core::CardId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One card line of an import: how many copies of which card
///
/// `quantity` is at least 1 and `name` carries no surrounding whitespace,
/// but internal whitespace is kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLineEntry {
    pub id: CardId,
    pub quantity: u32,
    pub name: String,
}

impl CardLineEntry {
    /// New entry with an unresolved id
    pub fn new(quantity: u32, name: impl Into<String>) -> Self {
        CardLineEntry {
            id: CardId::Unresolved,
            quantity,
            name: name.into(),
        }
    }
}

/// Renders the importable `"<quantity> <name>"` form
impl fmt::Display for CardLineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

/// Result of formatting one non-blank input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormattedLine {
    /// Line matched the card grammar
    Card(CardLineEntry),
    /// Line kept verbatim because it did not match
    Unparsed(String),
}

impl FormattedLine {
    pub fn as_card(&self) -> Option<&CardLineEntry> {
        match self {
            FormattedLine::Card(entry) => Some(entry),
            FormattedLine::Unparsed(_) => None,
        }
    }

    pub fn into_card(self) -> Option<CardLineEntry> {
        match self {
            FormattedLine::Card(entry) => Some(entry),
            FormattedLine::Unparsed(_) => None,
        }
    }

    pub fn is_card(&self) -> bool {
        matches!(self, FormattedLine::Card(_))
    }
}
