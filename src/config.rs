//! Optional `deck.config.json` in the working directory

use crate::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "deck.config.json";

/// How the CLI prints a converted deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// The full `DeckInProgress` as JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(DeckError::ConfigError(format!(
                "invalid format '{s}' (expected: text, json)"
            ))),
        }
    }
}

/// Deck tool configuration file format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog JSON used by `resolve` when `--catalog` is not given
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    #[serde(default)]
    pub format: OutputFormat,

    /// Same values as `--verbosity`
    #[serde(default)]
    pub verbosity: Option<String>,
}

impl Config {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            DeckError::ConfigError(format!("{}: {e}", config_path.display()))
        })
    }
}
