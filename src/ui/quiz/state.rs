use serde::{Deserialize, Serialize};

use crate::ui::mvi::UiState;

/// Shared quiz progress.
///
/// Invariant: `complete` holds exactly when `current_question` has
/// reached the total handed to `NextQuestion`. Only the reducer writes
/// this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizState {
    pub current_question: usize,
    pub score: u32,
    pub complete: bool,
}

impl UiState for QuizState {}

impl QuizState {
    pub fn in_progress(&self) -> bool {
        !self.complete
    }

    /// Re-establish the completion invariant against a deck size.
    ///
    /// State saved against one deck can be restored against another
    /// (the deck file changed between runs, or shrank on reload): the
    /// index is clamped to the total and `complete` recomputed.
    pub fn clamped_to(self, total_questions: usize) -> Self {
        let current_question = self.current_question.min(total_questions);
        Self {
            current_question,
            complete: current_question >= total_questions,
            ..self
        }
    }
}
