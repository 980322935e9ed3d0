//! Session persistence.
//!
//! Quiz progress survives restarts through a small key-value store:
//! one JSON file per key under the platform data directory. Reads
//! happen once at startup and degrade to defaults on any failure;
//! writes are fire-and-forget on a background thread.

mod record;
mod store;

pub use record::{session_key, SessionRecord};
pub use store::{PersistError, SessionStore};
