use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum BrowseIntent {
    /// Move to the next card; no-op at the end of the deck.
    NextCard,
    /// Move to the previous card; no-op at the first card.
    PrevCard,
}

impl Intent for BrowseIntent {}
