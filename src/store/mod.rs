//! Shared-state distribution for the view tree.
//!
//! Instead of threading every piece of state through view parameters,
//! the composition root builds explicit service objects and hands them
//! to the views:
//!
//! - [`Store`] owns one state machine and a revision counter.
//! - [`Memo`] caches a derived value keyed by store revisions, so the
//!   aggregate handed to views is rebuilt only when state actually
//!   changed.
//! - [`Provider`] is an explicit slot for a shared resource; reading an
//!   empty slot fails fast instead of returning a silent default.

mod memo;
mod provider;
mod state_store;

pub use memo::Memo;
pub use provider::{ContextError, Provider};
pub use state_store::Store;
