//! Error types for deck import and resolution

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown meta key: {0}")]
    UnknownMetaKey(String),

    #[error("Deck has import errors: {0}")]
    InvalidDeck(String),

    #[error("Unresolved card names: {}", .0.join(", "))]
    UnresolvedCards(Vec<String>),

    #[error("Deck name is required")]
    MissingDeckName,

    #[error("Invalid config: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
