/// Caches a derived value keyed by a revision key.
///
/// The compute closure runs only when the key moved since the last
/// call; otherwise the cached value is returned as-is. Used to hand
/// views a stable aggregate that is rebuilt only on real state changes.
pub struct Memo<K, T> {
    cached: Option<(K, T)>,
}

impl<K: PartialEq, T: Clone> Memo<K, T> {
    pub fn new() -> Self {
        Self { cached: None }
    }

    pub fn get(&mut self, key: K, compute: impl FnOnce() -> T) -> T {
        match &self.cached {
            Some((seen, value)) if *seen == key => value.clone(),
            _ => {
                let value = compute();
                self.cached = Some((key, value.clone()));
                value
            }
        }
    }
}

impl<K: PartialEq, T: Clone> Default for Memo<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
