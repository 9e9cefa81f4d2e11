//! Card catalog lookup and deck resolution
//!
//! An import only knows card names. Saving a deck needs real catalog ids, so
//! every entry is looked up here before a `DeckSubmission` can be built.

use crate::core::{CardId, CardLineEntry, DeckInProgress};
use crate::{DeckError, Result};
use deunicode::deunicode;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Anything that can map a card name to its catalog id
pub trait CardCatalog {
    fn lookup(&self, name: &str) -> Option<u32>;
}

/// Normalize a card name for lookup: ASCII-folded, lowercase, trimmed
pub fn normalize_card_name(name: &str) -> String {
    deunicode(name.trim()).to_lowercase()
}

/// One catalog record as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCard {
    pub id: u32,
    pub name: String,
}

/// Catalog held in memory, keyed by normalized name
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    cards: FxHashMap<String, u32>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single card; a later card with the same name replaces the earlier one
    pub fn add_card(&mut self, card: CatalogCard) {
        self.cards.insert(normalize_card_name(&card.name), card.id);
    }

    /// Parse a JSON array of `{ "id": .., "name": .. }` records
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<CatalogCard> = serde_json::from_str(json)?;
        Ok(cards.into_iter().collect())
    }

    pub async fn load_from_file(path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<CatalogCard> for InMemoryCatalog {
    fn from_iter<T: IntoIterator<Item = CatalogCard>>(iter: T) -> Self {
        let mut catalog = InMemoryCatalog::new();
        for card in iter {
            catalog.add_card(card);
        }
        catalog
    }
}

impl CardCatalog for InMemoryCatalog {
    fn lookup(&self, name: &str) -> Option<u32> {
        self.cards.get(&normalize_card_name(name)).copied()
    }
}

/// A deck whose every entry carries a resolved id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDeck {
    pub deck_name: String,
    pub main_deck: Vec<CardLineEntry>,
    pub sideboard: Vec<CardLineEntry>,
}

fn resolve_entries<'a, C, I>(entries: I, catalog: &C, missing: &mut Vec<String>) -> Vec<CardLineEntry>
where
    C: CardCatalog + ?Sized,
    I: IntoIterator<Item = &'a CardLineEntry>,
{
    entries
        .into_iter()
        .filter_map(|entry| match catalog.lookup(&entry.name) {
            Some(id) => Some(CardLineEntry {
                id: CardId::Resolved(id),
                ..entry.clone()
            }),
            None => {
                warn!(name = %entry.name, "card not found in catalog");
                missing.push(entry.name.clone());
                None
            }
        })
        .collect()
}

/// Bind every entry of an imported deck to its catalog id.
///
/// Fails on decks with import errors, and lists every name the catalog does
/// not know, in import order.
pub fn resolve_deck<C: CardCatalog + ?Sized>(deck: &DeckInProgress, catalog: &C) -> Result<ResolvedDeck> {
    if !deck.is_valid() {
        return Err(DeckError::InvalidDeck(deck.error_messages().join("; ")));
    }

    let mut missing = Vec::new();
    let main_deck = resolve_entries(deck.main_deck.values(), catalog, &mut missing);
    let sideboard = resolve_entries(deck.sideboard.values(), catalog, &mut missing);

    if !missing.is_empty() {
        return Err(DeckError::UnresolvedCards(missing));
    }

    Ok(ResolvedDeck {
        deck_name: deck.deck_name.clone(),
        main_deck,
        sideboard,
    })
}

/// What the deck persistence API accepts: a name and one id per card copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSubmission {
    pub name: String,
    pub card_ids: Vec<u32>,
}

impl DeckSubmission {
    /// Build a submission for the main deck.
    ///
    /// `name` overrides the deck's own name when given; one of them must be
    /// non-empty.
    pub fn from_resolved(deck: &ResolvedDeck, name: Option<&str>) -> Result<Self> {
        let name = name.unwrap_or(&deck.deck_name).trim();
        if name.is_empty() {
            return Err(DeckError::MissingDeckName);
        }

        let card_ids = deck
            .main_deck
            .iter()
            .filter_map(|entry| entry.id.as_u32().map(|id| (id, entry.quantity)))
            .flat_map(|(id, quantity)| std::iter::repeat(id).take(quantity as usize))
            .collect();

        Ok(DeckSubmission {
            name: name.to_string(),
            card_ids,
        })
    }
}
