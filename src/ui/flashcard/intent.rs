use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum FlashcardIntent {
    /// Toggle between question and answer. The first flip sets the
    /// reviewed latch.
    Flip,
}

impl Intent for FlashcardIntent {}
