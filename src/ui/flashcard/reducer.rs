use crate::ui::flashcard::intent::FlashcardIntent;
use crate::ui::flashcard::state::FlashcardViewState;
use crate::ui::mvi::Reducer;

pub struct FlashcardReducer;

impl Reducer for FlashcardReducer {
    type State = FlashcardViewState;
    type Intent = FlashcardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FlashcardIntent::Flip => FlashcardViewState {
                flipped: !state.flipped,
                reviewed: true,
            },
        }
    }
}
