use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::ui::quiz::QuizState;

/// Everything restored between runs for one deck.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    pub quiz: QuizState,
    pub current_card: usize,
}

/// Stable storage key for a deck path, so each deck keeps its own
/// session file.
///
/// Derived from the path bytes with SHA-256 rather than the std
/// hasher, whose algorithm may change between toolchain releases and
/// would orphan every saved session.
pub fn session_key(deck_path: &Path) -> String {
    let digest = Sha256::digest(deck_path.as_os_str().as_encoded_bytes());
    format!("session-{}", hex::encode(&digest[..8]))
}
