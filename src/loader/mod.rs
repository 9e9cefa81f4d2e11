//! Deck import and export
//!
//! Turns the free-form text a user pastes into the import boxes into a
//! `DeckInProgress`, and serializes decks back into the same format.

pub mod card_line;
pub mod classify;
pub mod export;
pub mod files;
pub mod import;
pub mod meta;
pub mod untyped;

pub use card_line::{card_lines_valid, format_card_lines};
pub use export::export_deck_file;
pub use files::ImportLoader;
pub use import::{convert_import_to_deck, get_import_errors};
pub use meta::{extract_meta_value, meta_line_invalid};
