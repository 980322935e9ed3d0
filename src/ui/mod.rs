pub mod app;
pub mod browse;
pub mod events;
pub mod flashcard;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod quiz;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
