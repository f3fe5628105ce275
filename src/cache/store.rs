//! Cache Store Module
//!
//! Per-function memo storage: a HashMap keyed on the argument tuple, guarded by
//! a mutex so wrapped functions can be shared across test threads.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::cache::CacheStats;

#[derive(Debug)]
struct StoreState<K, V> {
    entries: HashMap<K, V>,
    stats: CacheStats,
}

// == Cache Store ==
/// Process-lifetime store of computed results for one wrapped function.
///
/// Entries are never evicted. The key space of the functions this wraps
/// (translation tables, host probes) is small and fixed.
///
/// The wrapped function always runs outside the lock. Two threads that miss on
/// the same key may both compute it; the first insert wins and the second
/// caller receives the stored value, so the map never holds a torn entry.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Label used in trace output
    name: &'static str,
    state: Mutex<StoreState<K, V>>,
}

impl<K, V> CacheStore<K, V> {
    // == Constructor ==
    /// Creates an empty store. `name` only appears in trace output.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(StoreState {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
        }
    }

    /// Returns the label given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    // == Get Or Insert ==
    /// Returns the stored result for `key`, computing it with `f` on a miss.
    pub fn get_or_insert_with<F>(&self, key: K, f: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        if let Some(value) = self.lookup(&key) {
            return value;
        }
        let value = f(&key);
        self.insert(key, value)
    }

    // == Try Get Or Insert ==
    /// Fallible variant of [`get_or_insert_with`](Self::get_or_insert_with).
    ///
    /// An `Err` from `f` is handed back untouched and nothing is stored, so the
    /// next call with the same key runs `f` again.
    pub fn try_get_or_insert_with<E, F>(&self, key: K, f: F) -> Result<V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        if let Some(value) = self.lookup(&key) {
            return Ok(value);
        }
        let value = f(&key)?;
        Ok(self.insert(key, value))
    }

    /// Returns the stored result for `key` without touching the statistics.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.lock().entries.get(key).cloned()
    }

    // == Stats ==
    /// Returns a snapshot of the hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    /// Returns the number of distinct argument tuples stored.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true if nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    fn lookup(&self, key: &K) -> Option<V> {
        let mut state = self.lock();
        let found = state.entries.get(key).cloned();
        match found {
            Some(value) => {
                state.stats.record_hit();
                Some(value)
            }
            None => {
                state.stats.record_miss();
                trace!(cache = self.name, "cache miss");
                None
            }
        }
    }

    fn insert(&self, key: K, value: V) -> V {
        let mut state = self.lock();
        let stored = state.entries.entry(key).or_insert(value).clone();
        let count = state.entries.len();
        state.stats.set_total_entries(count);
        stored
    }

    // A panic inside a critical section cannot leave a half-written entry,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, StoreState<K, V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
