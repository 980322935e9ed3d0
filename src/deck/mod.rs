mod cache;
mod loader;

pub use cache::DeckCache;
pub use loader::DeckError;

use serde::Deserialize;

/// A single question/answer pair. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

/// An ordered collection of cards loaded from a deck file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: String,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}
