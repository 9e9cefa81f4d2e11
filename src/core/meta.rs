//! Deck metadata keys
//!
//! The main deck block may carry `key: value` lines describing the deck. The
//! recognized keys form a closed set; each one owns its line prefix here so
//! nothing else in the crate spells out the literals.

use crate::DeckError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized metadata key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKey {
    Name,
    Path,
    Power,
    CoverArt,
}

impl MetaKey {
    /// All keys, in export order
    pub const ALL: [MetaKey; 4] = [
        MetaKey::Name,
        MetaKey::Path,
        MetaKey::Power,
        MetaKey::CoverArt,
    ];

    /// Bare key as typed by the user
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaKey::Name => "name",
            MetaKey::Path => "path",
            MetaKey::Power => "power",
            MetaKey::CoverArt => "coverart",
        }
    }

    /// Line prefix that introduces this key (`"name:"` etc.)
    pub fn prefix(&self) -> &'static str {
        match self {
            MetaKey::Name => "name:",
            MetaKey::Path => "path:",
            MetaKey::Power => "power:",
            MetaKey::CoverArt => "coverart:",
        }
    }

    /// Find the key whose prefix starts this line, if any.
    ///
    /// Matching is case-sensitive and anchored at column 0.
    pub fn for_line(line: &str) -> Option<MetaKey> {
        Self::ALL
            .into_iter()
            .find(|key| line.starts_with(key.prefix()))
    }
}

impl std::str::FromStr for MetaKey {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DeckError::UnknownMetaKey(s.to_string()))
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
