use crate::ui::mvi::UiState;

/// Position within the deck while browsing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowseState {
    pub current_card: usize,
    pub total: usize,
}

impl UiState for BrowseState {}
