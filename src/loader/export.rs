//! Deck export back to importable text

use crate::core::{CardLineEntry, DeckInProgress, MetaKey};

/// Header line separating main deck and sideboard in a combined deck file
pub const SIDEBOARD_HEADER: &str = "[sideboard]";

/// Serialize metadata and cards to the main-block import format.
///
/// Metadata lines come first in `MetaKey::ALL` order, skipping empty values,
/// then one `"<quantity> <name>"` line per entry.
pub fn export_text<'a, F, I>(meta: F, cards: I) -> String
where
    F: Fn(MetaKey) -> &'a str,
    I: IntoIterator<Item = &'a CardLineEntry>,
{
    let meta_lines = MetaKey::ALL.into_iter().filter_map(|key| {
        let value = meta(key);
        (!value.is_empty()).then(|| format!("{} {}", key.prefix(), value))
    });
    let card_lines = cards.into_iter().map(|entry| entry.to_string());

    meta_lines.chain(card_lines).collect::<Vec<_>>().join("\n")
}

/// Serialize sideboard entries (card lines only)
pub fn export_cards<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = &'a CardLineEntry>,
{
    export_text(|_| "", cards)
}

/// Combined single-file form: main block, then the sideboard under its header
pub fn export_deck_file(deck: &DeckInProgress) -> String {
    if deck.sideboard_as_text.is_empty() {
        return deck.as_text.clone();
    }
    format!(
        "{}\n\n{}\n{}",
        deck.as_text, SIDEBOARD_HEADER, deck.sideboard_as_text
    )
}
