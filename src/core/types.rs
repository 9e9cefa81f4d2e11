//! Strongly-typed wrappers for deck concepts
//!
//! A parsed card line only knows the card's *name*. Binding that name to a
//! catalog entry happens later, so the identifier starts out unresolved and
//! the type system keeps the two states apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a card in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "id", rename_all = "lowercase")]
pub enum CardId {
    /// Parsed from text, not yet matched against the catalog
    #[default]
    Unresolved,
    /// Matched to a catalog entry
    Resolved(u32),
}

impl CardId {
    pub fn is_resolved(&self) -> bool {
        matches!(self, CardId::Resolved(_))
    }

    /// The catalog id, if resolution has happened
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            CardId::Resolved(id) => Some(*id),
            CardId::Unresolved => None,
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardId::Unresolved => write!(f, "TBD"),
            CardId::Resolved(id) => write!(f, "{id}"),
        }
    }
}
