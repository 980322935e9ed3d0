use quizdeck::ui::mvi::Reducer;
use quizdeck::ui::quiz::{QuizIntent, QuizReducer, QuizState};

fn state(current_question: usize, score: u32, complete: bool) -> QuizState {
    QuizState {
        current_question,
        score,
        complete,
    }
}

#[test]
fn initial_state_is_zeroed() {
    let initial = QuizState::default();
    assert_eq!(initial, state(0, 0, false));
    assert!(initial.in_progress());
}

#[test]
fn increment_score_adds_one_without_moving() {
    let next = QuizReducer::reduce(state(3, 1, false), QuizIntent::IncrementScore);
    assert_eq!(next, state(3, 2, false));
}

#[test]
fn next_question_advances_index() {
    let next = QuizReducer::reduce(
        state(0, 0, false),
        QuizIntent::NextQuestion { total_questions: 5 },
    );
    assert_eq!(next, state(1, 0, false));
}

#[test]
fn completes_exactly_when_index_reaches_total() {
    let next = QuizReducer::reduce(
        state(3, 2, false),
        QuizIntent::NextQuestion { total_questions: 5 },
    );
    assert!(!next.complete, "index 4 of 5 is not complete");

    let done = QuizReducer::reduce(next, QuizIntent::NextQuestion { total_questions: 5 });
    assert_eq!(done, state(5, 2, true));
}

#[test]
fn worked_example_two_questions() {
    // {0,0,false} -> IncrementScore -> {0,1,false}
    // -> NextQuestion{2} -> {1,1,false} -> NextQuestion{2} -> {2,1,true}
    let s = QuizState::default();
    let s = QuizReducer::reduce(s, QuizIntent::IncrementScore);
    assert_eq!(s, state(0, 1, false));
    let s = QuizReducer::reduce(s, QuizIntent::NextQuestion { total_questions: 2 });
    assert_eq!(s, state(1, 1, false));
    let s = QuizReducer::reduce(s, QuizIntent::NextQuestion { total_questions: 2 });
    assert_eq!(s, state(2, 1, true));
}

#[test]
fn score_and_index_never_decrease() {
    let intents = [
        QuizIntent::IncrementScore,
        QuizIntent::NextQuestion { total_questions: 10 },
        QuizIntent::IncrementScore,
        QuizIntent::IncrementScore,
        QuizIntent::NextQuestion { total_questions: 10 },
        QuizIntent::NextQuestion { total_questions: 10 },
    ];

    let mut s = QuizState::default();
    for intent in intents {
        let next = QuizReducer::reduce(s, intent);
        assert!(next.score >= s.score, "score must only increase");
        assert!(
            next.current_question >= s.current_question,
            "index must only increase"
        );
        s = next;
    }
}

#[test]
fn reset_from_any_state_returns_initial() {
    for start in [
        state(0, 0, false),
        state(4, 2, false),
        state(5, 5, true),
    ] {
        let next = QuizReducer::reduce(start, QuizIntent::Reset);
        assert_eq!(next, QuizState::default());
    }
}

#[test]
fn clamping_restores_the_completion_invariant() {
    // Saved against a larger deck: index past the total.
    assert_eq!(state(5, 4, false).clamped_to(3), state(3, 4, true));
    // Saved against a smaller deck: a finished quiz reopens.
    assert_eq!(state(3, 3, true).clamped_to(5), state(3, 3, false));
    // In range: unchanged.
    assert_eq!(state(1, 1, false).clamped_to(3), state(1, 1, false));
}

// -- Intents that do not apply return the state unchanged ---------------------

#[test]
fn increment_after_complete_is_noop() {
    let done = state(2, 1, true);
    let next = QuizReducer::reduce(done, QuizIntent::IncrementScore);
    assert_eq!(next, done);
}

#[test]
fn next_question_after_complete_is_noop() {
    let done = state(2, 1, true);
    let next = QuizReducer::reduce(done, QuizIntent::NextQuestion { total_questions: 2 });
    assert_eq!(next, done, "index must never exceed the total");
}

#[test]
fn index_clamped_when_totals_shrink_between_dispatches() {
    // A caller handing in a smaller total than before must not push the
    // index past it.
    let next = QuizReducer::reduce(
        state(4, 0, false),
        QuizIntent::NextQuestion { total_questions: 3 },
    );
    assert_eq!(next.current_question, 3);
    assert!(next.complete);
}
