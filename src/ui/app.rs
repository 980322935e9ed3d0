use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::config::ConfigStore;
use crate::deck::{Deck, DeckCache, DeckError};
use crate::session::{session_key, SessionRecord, SessionStore};
use crate::store::{ContextError, Memo, Provider, Store};
use crate::ui::browse::{BrowseIntent, BrowseReducer, BrowseState};
use crate::ui::flashcard::{FlashcardIntent, FlashcardReducer, FlashcardViewState};
use crate::ui::quiz::{QuizIntent, QuizReducer, QuizState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Browse,
    Quiz,
}

/// Aggregate handed to the views each frame. Rebuilt only when one of
/// the underlying stores actually changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSnapshot {
    pub quiz: QuizState,
    pub browse: BrowseState,
    pub card_view: FlashcardViewState,
}

/// Composition root: owns the stores, the deck provider, and the
/// session store, and wires intent dispatch to persistence.
pub struct App {
    should_quit: bool,
    screen: Screen,
    deck_path: PathBuf,
    deck_cache: DeckCache,
    deck: Provider<Deck>,
    /// Last deck reload failure, shown in the footer.
    deck_notice: Option<String>,
    quiz: Store<QuizReducer>,
    browse: Store<BrowseReducer>,
    card_view: Store<FlashcardReducer>,
    /// Ephemeral quiz-screen flag: the answer for the current question
    /// has been revealed and can be graded.
    answer_revealed: bool,
    snapshot: Memo<(u64, u64, u64), ViewSnapshot>,
    session: Option<SessionStore>,
    session_key: String,
}

impl App {
    pub fn new(
        config: &ConfigStore,
        deck_path: PathBuf,
        persist: bool,
        session_dir: PathBuf,
    ) -> Result<Self, DeckError> {
        let study = config.get().study;
        let mut deck_cache = DeckCache::new(Duration::from_secs(study.deck_cache_ttl_secs), 8);
        let loaded = deck_cache.load(&deck_path)?;
        let total = loaded.len();

        let mut deck = Provider::empty("deck");
        deck.install(loaded);

        let persist = persist && config.get().session.persist;
        let session = persist.then(|| SessionStore::open(session_dir));
        let key = session_key(&deck_path);
        let restored = session
            .as_ref()
            .and_then(|store| store.load(&key))
            .unwrap_or_default();

        let mut quiz = Store::default();
        // The session may have been saved against a different deck;
        // clamp like the browse position below.
        quiz.restore(restored.quiz.clamped_to(total));
        let mut browse = Store::default();
        browse.restore(BrowseState {
            current_card: restored.current_card.min(total.saturating_sub(1)),
            total,
        });

        Ok(Self {
            should_quit: false,
            screen: Screen::Browse,
            deck_path,
            deck_cache,
            deck,
            deck_notice: None,
            quiz,
            browse,
            card_view: Store::default(),
            answer_revealed: false,
            snapshot: Memo::new(),
            session,
            session_key: key,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Browse => Screen::Quiz,
            Screen::Quiz => Screen::Browse,
        };
        self.answer_revealed = false;
    }

    /// Shared deck access. Fails fast when no deck is installed.
    pub fn deck(&self) -> Result<&Deck, ContextError> {
        self.deck.get()
    }

    pub fn deck_notice(&self) -> Option<&str> {
        self.deck_notice.as_deref()
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    /// Memoized view aggregate, keyed on the store revisions.
    pub fn snapshot(&mut self) -> ViewSnapshot {
        let key = (
            self.quiz.revision(),
            self.browse.revision(),
            self.card_view.revision(),
        );
        let quiz = *self.quiz.state();
        let browse = *self.browse.state();
        let card_view = *self.card_view.state();
        self.snapshot.get(key, || ViewSnapshot {
            quiz,
            browse,
            card_view,
        })
    }

    pub fn dispatch_quiz(&mut self, intent: QuizIntent) {
        self.quiz.dispatch(intent);
        self.sync_session();
    }

    pub fn dispatch_browse(&mut self, intent: BrowseIntent) {
        let before = self.browse.state().current_card;
        self.browse.dispatch(intent);
        if self.browse.state().current_card != before {
            // Moving to a different card remounts the per-card view,
            // which is the only way the reviewed latch resets.
            self.card_view = Store::default();
        }
        self.sync_session();
    }

    pub fn dispatch_flashcard(&mut self, intent: FlashcardIntent) {
        self.card_view.dispatch(intent);
    }

    /// Quiz screen: show the answer for the current question.
    pub fn reveal_answer(&mut self) {
        if self.quiz.state().in_progress() {
            self.answer_revealed = true;
        }
    }

    /// Grade the revealed answer and move on. Ignored until the answer
    /// has been revealed.
    pub fn grade_current(&mut self, correct: bool) {
        if !self.answer_revealed {
            return;
        }
        let total = match self.deck.get() {
            Ok(deck) => deck.len(),
            Err(_) => return,
        };
        if correct {
            self.dispatch_quiz(QuizIntent::IncrementScore);
        }
        self.dispatch_quiz(QuizIntent::NextQuestion {
            total_questions: total,
        });
        self.answer_revealed = false;
    }

    pub fn reset_quiz(&mut self) {
        self.answer_revealed = false;
        self.dispatch_quiz(QuizIntent::Reset);
    }

    /// Re-read the deck from disk through the cache. On failure the old
    /// deck stays installed and the error is shown in the footer.
    pub fn reload_deck(&mut self) {
        match self.deck_cache.load(&self.deck_path) {
            Ok(deck) => {
                let total = deck.len();
                self.deck.install(deck);
                self.deck_notice = None;
                let state = *self.browse.state();
                self.browse.restore(BrowseState {
                    current_card: state.current_card.min(total.saturating_sub(1)),
                    total,
                });
                // A shrunken deck must not leave the quiz pointing past
                // the end with complete still false.
                let quiz = self.quiz.state().clamped_to(total);
                self.quiz.restore(quiz);
            }
            Err(err) => {
                warn!(error = %err, "deck reload failed");
                self.deck_notice = Some(err.to_string());
            }
        }
    }

    /// Queue a fire-and-forget session write after a state change.
    fn sync_session(&mut self) {
        if let Some(session) = &self.session {
            session.save(
                &self.session_key,
                SessionRecord {
                    quiz: *self.quiz.state(),
                    current_card: self.browse.state().current_card,
                },
            );
        }
    }

    /// Final synchronous write on shutdown. Failures are logged, never
    /// surfaced.
    pub fn flush_session(&self) {
        if let Some(session) = &self.session {
            let record = SessionRecord {
                quiz: *self.quiz.state(),
                current_card: self.browse.state().current_card,
            };
            if let Err(err) = session.save_blocking(&self.session_key, &record) {
                warn!(error = %err, "final session write failed");
            }
        }
    }
}
