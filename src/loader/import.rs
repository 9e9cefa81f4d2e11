//! Import error collection and deck conversion
//!
//! Both entry points take the two text blocks as `Option<&str>`; `None`
//! stands for a missing value and marks that block invalid outright.

use crate::core::{CardLineEntry, DeckInProgress, FormattedLine, ImportError, ImportErrors, MetaKey};
use crate::loader::card_line::{card_lines_valid, format_card_lines};
use crate::loader::classify::{Block, ClassifiedBlock};
use crate::loader::export::{export_cards, export_text};
use std::collections::BTreeMap;
use tracing::debug;

/// One block after classification and card formatting
struct ParsedBlock<'a> {
    classified: ClassifiedBlock<'a>,
    formatted: Vec<FormattedLine>,
}

impl<'a> ParsedBlock<'a> {
    fn new(text: &'a str, block: Block) -> Self {
        let classified = ClassifiedBlock::new(text, block);
        let formatted = format_card_lines(classified.card_candidates());
        ParsedBlock {
            classified,
            formatted,
        }
    }

    fn is_valid(&self) -> bool {
        card_lines_valid(&self.formatted)
    }

    fn card_count(&self) -> usize {
        self.formatted.iter().filter(|line| line.is_card()).count()
    }

    fn meta(&self, key: MetaKey) -> &'a str {
        self.classified.meta(key).unwrap_or("")
    }

    fn into_cards(self) -> BTreeMap<usize, CardLineEntry> {
        self.formatted
            .into_iter()
            .filter_map(FormattedLine::into_card)
            .enumerate()
            .collect()
    }
}

fn collect_errors(main: Option<&ParsedBlock<'_>>, sideboard: Option<&ParsedBlock<'_>>) -> ImportErrors {
    let mut errors = ImportErrors::new();

    if !main.is_some_and(ParsedBlock::is_valid) {
        errors.push(ImportError::InvalidMainDeck);
    }
    if !sideboard.is_some_and(ParsedBlock::is_valid) {
        errors.push(ImportError::InvalidSideboard);
    }

    if errors.is_empty() {
        let total: usize = main
            .into_iter()
            .chain(sideboard)
            .map(ParsedBlock::card_count)
            .sum();
        if total == 0 {
            errors.push(ImportError::NoCards);
        }
    }

    errors
}

/// Validate both blocks and return the ordered import errors.
///
/// Main deck errors come before sideboard errors. `NoCards` is reported only
/// when nothing else is wrong and neither block has a card line.
pub fn get_import_errors(main: Option<&str>, sideboard: Option<&str>) -> ImportErrors {
    let main = main.map(|text| ParsedBlock::new(text, Block::Main));
    let sideboard = sideboard.map(|text| ParsedBlock::new(text, Block::Sideboard));
    collect_errors(main.as_ref(), sideboard.as_ref())
}

/// Build a deck from the two import blocks.
///
/// Conversion is all-or-nothing: any error yields a result holding only the
/// errors, with every other field empty.
pub fn convert_import_to_deck(main: Option<&str>, sideboard: Option<&str>) -> DeckInProgress {
    let main = main.map(|text| ParsedBlock::new(text, Block::Main));
    let sideboard = sideboard.map(|text| ParsedBlock::new(text, Block::Sideboard));

    let errors = collect_errors(main.as_ref(), sideboard.as_ref());
    let (Some(main), Some(sideboard)) = (main, sideboard) else {
        debug!(?errors, "import rejected: missing block");
        return DeckInProgress::failed(errors);
    };
    if !errors.is_empty() {
        debug!(?errors, "import rejected");
        return DeckInProgress::failed(errors);
    }

    let deck_name = main.meta(MetaKey::Name).to_string();
    let deck_path = main.meta(MetaKey::Path).to_string();
    let deck_power = main.meta(MetaKey::Power).to_string();
    let deck_cover_art = main.meta(MetaKey::CoverArt).to_string();

    let as_text = export_text(|key| main.meta(key), main.formatted.iter().filter_map(FormattedLine::as_card));
    let sideboard_as_text = export_cards(sideboard.formatted.iter().filter_map(FormattedLine::as_card));

    let main_deck = main.into_cards();
    let sideboard = sideboard.into_cards();

    debug!(
        name = %deck_name,
        main_entries = main_deck.len(),
        sideboard_entries = sideboard.len(),
        "import converted"
    );

    DeckInProgress {
        errors,
        deck_name,
        deck_path,
        deck_power,
        deck_cover_art,
        main_deck,
        sideboard,
        as_text,
        sideboard_as_text,
    }
}
