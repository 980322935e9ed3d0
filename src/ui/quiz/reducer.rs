use crate::ui::mvi::Reducer;
use crate::ui::quiz::intent::QuizIntent;
use crate::ui::quiz::state::QuizState;

pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::IncrementScore => {
                if state.complete {
                    return state;
                }
                QuizState {
                    score: state.score.saturating_add(1),
                    ..state
                }
            }
            QuizIntent::NextQuestion { total_questions } => {
                if state.complete {
                    return state;
                }
                let next = state.current_question + 1;
                QuizState {
                    // Clamp so the index never exceeds the total even if
                    // callers hand in inconsistent totals across dispatches.
                    current_question: next.min(total_questions),
                    score: state.score,
                    complete: next >= total_questions,
                }
            }
            QuizIntent::Reset => QuizState::default(),
        }
    }
}
