use quizdeck::ui::browse::{BrowseIntent, BrowseReducer, BrowseState};
use quizdeck::ui::mvi::Reducer;

fn at(current_card: usize, total: usize) -> BrowseState {
    BrowseState {
        current_card,
        total,
    }
}

#[test]
fn next_card_advances() {
    let state = BrowseReducer::reduce(at(0, 3), BrowseIntent::NextCard);
    assert_eq!(state, at(1, 3));
}

#[test]
fn next_card_stops_at_last() {
    let state = BrowseReducer::reduce(at(2, 3), BrowseIntent::NextCard);
    assert_eq!(state, at(2, 3));
}

#[test]
fn prev_card_goes_back() {
    let state = BrowseReducer::reduce(at(2, 3), BrowseIntent::PrevCard);
    assert_eq!(state, at(1, 3));
}

#[test]
fn prev_card_stops_at_first() {
    let state = BrowseReducer::reduce(at(0, 3), BrowseIntent::PrevCard);
    assert_eq!(state, at(0, 3));
}

#[test]
fn empty_deck_is_inert() {
    let state = BrowseReducer::reduce(at(0, 0), BrowseIntent::NextCard);
    assert_eq!(state, at(0, 0));
    let state = BrowseReducer::reduce(state, BrowseIntent::PrevCard);
    assert_eq!(state, at(0, 0));
}
