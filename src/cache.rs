//! Bounded memoization for composed styles.
//!
//! Composition is a pure function of the visual props, so results can be
//! reused across calls with the same input tuple. The cache is optional and
//! never changes what a composer returns.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Hit/miss counters for a [`StyleCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to compute
    pub misses: u64,
    /// Entries currently stored
    pub size: usize,
    /// Maximum entries before the cache is cleared
    pub capacity: usize,
}

#[derive(Debug)]
struct CacheState<V> {
    map: HashMap<String, Arc<V>>,
    hits: u64,
    misses: u64,
}

/// String-keyed cache, bounded; clears on overflow.
#[derive(Debug)]
pub struct StyleCache<V> {
    capacity: usize,
    state: Mutex<CacheState<V>>,
}

impl<V> StyleCache<V> {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            state: Mutex::new(CacheState {
                map: HashMap::with_capacity(capacity.min(256)),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// The lock is not held while `compute` runs, so two threads missing on
    /// the same key may both compute; the last one stored wins.
    pub fn get_or_insert_with(&self, key: &str, compute: impl FnOnce() -> V) -> Arc<V> {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = state.map.get(key).cloned() {
                state.hits += 1;
                return cached;
            }
            state.misses += 1;
        }

        let value = Arc::new(compute());

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.map.len() >= self.capacity {
            state.map.clear();
        }
        state.map.insert(key.to_string(), Arc::clone(&value));
        value
    }

    /// Drops every entry; counters are kept.
    pub fn clear(&self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .clear();
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            size: state.map.len(),
            capacity: self.capacity,
        }
    }
}
