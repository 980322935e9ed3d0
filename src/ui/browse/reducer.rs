use crate::ui::browse::intent::BrowseIntent;
use crate::ui::browse::state::BrowseState;
use crate::ui::mvi::Reducer;

pub struct BrowseReducer;

impl Reducer for BrowseReducer {
    type State = BrowseState;
    type Intent = BrowseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowseIntent::NextCard => {
                if state.current_card + 1 < state.total {
                    BrowseState {
                        current_card: state.current_card + 1,
                        ..state
                    }
                } else {
                    state
                }
            }
            BrowseIntent::PrevCard => BrowseState {
                current_card: state.current_card.saturating_sub(1),
                ..state
            },
        }
    }
}
