//! Mythgard deck import/export
//!
//! Parses the free-form deck text users paste into the deck builder (card
//! lines plus optional metadata), reports ordered import errors, and renders
//! decks back into importable text. Card names stay unresolved until a
//! catalog binds them to ids.

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;

pub use error::{DeckError, Result};
