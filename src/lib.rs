pub mod config;
pub mod deck;
pub mod logging;
pub mod session;
pub mod store;
pub mod ui;
