mod intent;
mod reducer;
mod state;

pub use intent::FlashcardIntent;
pub use reducer::FlashcardReducer;
pub use state::FlashcardViewState;
