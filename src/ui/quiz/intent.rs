use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum QuizIntent {
    /// Credit the current question. Ignored once the quiz is complete.
    IncrementScore,
    /// Advance to the next question; completes the quiz when the new
    /// index reaches `total_questions`. Ignored once complete.
    NextQuestion { total_questions: usize },
    /// Back to a fresh quiz, from any state.
    Reset,
}

impl Intent for QuizIntent {}
