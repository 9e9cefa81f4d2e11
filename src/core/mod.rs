//! Core deck types

pub mod card;
pub mod deck;
pub mod meta;
pub mod types;

pub use card::{CardLineEntry, FormattedLine};
pub use deck::{DeckInProgress, ImportError, ImportErrors};
pub use meta::MetaKey;
pub use types::CardId;
