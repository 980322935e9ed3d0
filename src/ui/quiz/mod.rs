mod intent;
mod reducer;
mod state;

pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use state::QuizState;
