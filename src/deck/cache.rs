//! Deck cache with freshness TTL and bounded capacity.
//!
//! The cache is an explicit object owned by the caller, never module
//! state. Entries older than the TTL are re-read from disk on access;
//! when full, the oldest insertion is evicted first.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::deck::{Deck, DeckError};

struct CacheEntry {
    deck: Deck,
    loaded_at: Instant,
}

pub struct DeckCache {
    entries: HashMap<PathBuf, CacheEntry>,
    /// Insertion order for eviction (oldest first).
    insertion_order: Vec<PathBuf>,
    ttl: Duration,
    capacity: usize,
}

impl DeckCache {
    /// Create a cache holding up to `capacity` decks, each fresh for `ttl`.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            insertion_order: Vec::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Load a deck through the cache.
    ///
    /// Returns the cached copy while it is within the TTL, otherwise
    /// reads the file again. A failed re-read surfaces the error and
    /// leaves the stale entry in place.
    pub fn load(&mut self, path: &Path) -> Result<Deck, DeckError> {
        // Key on the canonical path so relative and absolute spellings
        // of the same file share one entry.
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if let Some(entry) = self.entries.get(&key) {
            if entry.loaded_at.elapsed() < self.ttl {
                return Ok(entry.deck.clone());
            }
        }

        let deck = Deck::load_from(&key)?;
        self.insert(key, deck.clone());
        Ok(deck)
    }

    fn insert(&mut self, path: PathBuf, deck: Deck) {
        if !self.entries.contains_key(&path) {
            while self.entries.len() >= self.capacity && !self.insertion_order.is_empty() {
                let oldest = self.insertion_order.remove(0);
                self.entries.remove(&oldest);
            }
            self.insertion_order.push(path.clone());
        }

        self.entries.insert(
            path,
            CacheEntry {
                deck,
                loaded_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
