use crate::ui::mvi::UiState;

/// Per-card ephemeral view state, never part of the shared store.
///
/// `reviewed` is a one-way latch: once the card has been flipped it
/// stays set, and only clears when the app remounts the view for a
/// different card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlashcardViewState {
    pub flipped: bool,
    pub reviewed: bool,
}

impl UiState for FlashcardViewState {}
