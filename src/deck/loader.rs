use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::deck::Deck;

/// Errors that can occur when loading a deck file.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Failed to read deck file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse deck file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Deck validation failed: {message}")]
    ValidationError { message: String },
}

impl Deck {
    /// Loads a deck from a TOML file (`title` plus `[[cards]]` entries).
    pub fn load_from(path: &Path) -> Result<Self, DeckError> {
        let content = fs::read_to_string(path).map_err(|e| DeckError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let deck: Deck = toml::from_str(&content).map_err(|e| DeckError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        deck.validate()?;
        Ok(deck)
    }

    /// Validates the deck.
    ///
    /// A deck must contain at least one card, and every card needs a
    /// non-blank question.
    fn validate(&self) -> Result<(), DeckError> {
        if self.is_empty() {
            return Err(DeckError::ValidationError {
                message: "deck has no cards".to_string(),
            });
        }

        for (index, card) in self.cards.iter().enumerate() {
            if card.question.trim().is_empty() {
                return Err(DeckError::ValidationError {
                    message: format!("card {} has an empty question", index + 1),
                });
            }
        }

        Ok(())
    }
}
