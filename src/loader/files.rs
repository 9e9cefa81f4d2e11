//! Import file loader
//!
//! A deck file holds the main block, optionally followed by a `[sideboard]`
//! header and the sideboard block. The two blocks can also live in separate
//! files.

use crate::core::DeckInProgress;
use crate::loader::export::SIDEBOARD_HEADER;
use crate::loader::import::convert_import_to_deck;
use crate::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Import loader for deck text files
pub struct ImportLoader;

impl ImportLoader {
    /// Load a combined deck file
    pub fn load_from_file(path: &Path) -> Result<DeckInProgress> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = content.len(), "read deck file");
        Ok(Self::parse(&content))
    }

    /// Load a deck from a main file and an optional separate sideboard file
    pub async fn load_from_files(main: &Path, sideboard: Option<&Path>) -> Result<DeckInProgress> {
        let Some(sideboard) = sideboard else {
            let content = tokio::fs::read_to_string(main).await?;
            return Ok(Self::parse(&content));
        };

        let (main_text, sideboard_text) = tokio::try_join!(
            tokio::fs::read_to_string(main),
            tokio::fs::read_to_string(sideboard)
        )?;
        Ok(convert_import_to_deck(Some(main_text.as_str()), Some(sideboard_text.as_str())))
    }

    /// Parse a combined deck file
    pub fn parse(content: &str) -> DeckInProgress {
        let (main, sideboard) = split_deck_file(content);
        convert_import_to_deck(Some(main.as_str()), Some(sideboard.as_str()))
    }
}

/// Split a combined deck file into main and sideboard blocks.
///
/// The header is matched case-insensitively and ignoring surrounding
/// whitespace; the sideboard is empty when there is no header.
pub fn split_deck_file(content: &str) -> (String, String) {
    let mut main = Vec::new();
    let mut sideboard = Vec::new();
    let mut in_sideboard = false;

    for line in content.lines() {
        if !in_sideboard && line.trim().eq_ignore_ascii_case(SIDEBOARD_HEADER) {
            in_sideboard = true;
            continue;
        }
        if in_sideboard {
            sideboard.push(line);
        } else {
            main.push(line);
        }
    }

    (main.join("\n"), sideboard.join("\n"))
}
