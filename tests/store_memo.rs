use quizdeck::store::{ContextError, Memo, Provider, Store};
use quizdeck::ui::quiz::{QuizIntent, QuizReducer, QuizState};

// -- Store revisions ----------------------------------------------------------

#[test]
fn dispatch_that_changes_state_advances_revision() {
    let mut store: Store<QuizReducer> = Store::default();
    assert_eq!(store.revision(), 0);

    store.dispatch(QuizIntent::IncrementScore);
    assert_eq!(store.revision(), 1);
    assert_eq!(store.state().score, 1);
}

#[test]
fn noop_dispatch_keeps_revision() {
    let mut store: Store<QuizReducer> = Store::new(QuizState {
        current_question: 2,
        score: 1,
        complete: true,
    });
    let before = store.revision();

    // IncrementScore is ignored once the quiz is complete.
    store.dispatch(QuizIntent::IncrementScore);
    assert_eq!(store.revision(), before);
}

#[test]
fn restore_counts_as_change_only_when_different() {
    let mut store: Store<QuizReducer> = Store::default();
    store.restore(QuizState::default());
    assert_eq!(store.revision(), 0);

    store.restore(QuizState {
        current_question: 1,
        score: 0,
        complete: false,
    });
    assert_eq!(store.revision(), 1);
}

// -- Memoized snapshots -------------------------------------------------------

#[test]
fn memo_recomputes_only_when_key_moves() {
    let mut memo: Memo<u64, u32> = Memo::new();
    let mut computed = 0;

    let first = memo.get(0, || {
        computed += 1;
        41
    });
    assert_eq!(first, 41);
    assert_eq!(computed, 1);

    // Same key: the closure must not run again.
    let again = memo.get(0, || {
        computed += 1;
        99
    });
    assert_eq!(again, 41);
    assert_eq!(computed, 1);

    let moved = memo.get(1, || {
        computed += 1;
        42
    });
    assert_eq!(moved, 42);
    assert_eq!(computed, 2);
}

#[test]
fn memo_and_store_together_skip_noop_dispatches() {
    let mut store: Store<QuizReducer> = Store::new(QuizState {
        current_question: 2,
        score: 1,
        complete: true,
    });
    let mut memo: Memo<u64, QuizState> = Memo::new();
    let mut computed = 0;

    memo.get(store.revision(), || {
        computed += 1;
        *store.state()
    });
    store.dispatch(QuizIntent::NextQuestion { total_questions: 2 });
    memo.get(store.revision(), || {
        computed += 1;
        *store.state()
    });

    assert_eq!(computed, 1, "no-op dispatch must not invalidate the memo");
}

// -- Providers ----------------------------------------------------------------

#[test]
fn empty_provider_fails_fast() {
    let provider: Provider<String> = Provider::empty("deck");
    assert_eq!(
        provider.get().unwrap_err(),
        ContextError::ProviderMissing { resource: "deck" }
    );
}

#[test]
fn installed_provider_returns_resource() {
    let mut provider = Provider::empty("deck");
    provider.install("cards".to_string());
    assert_eq!(provider.get().unwrap().as_str(), "cards");
}

#[test]
fn provider_missing_message_names_the_resource() {
    let provider: Provider<u8> = Provider::empty("deck");
    let err = provider.get().unwrap_err();
    assert_eq!(err.to_string(), "no provider installed for 'deck'");
}
