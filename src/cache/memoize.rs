//! Memoizing Wrappers
//!
//! Pairs a pure function with its own [`CacheStore`] so repeated calls with the
//! same arguments are answered from memory.
//!
//! # Example
//! ```
//! use gst_msdk_fits::cache::memoize;
//!
//! let square = memoize("square", |&(x,): &(u64,)| x * x);
//! assert_eq!(square.call((12,)), 144);
//! assert_eq!(square.call((12,)), 144);
//! assert_eq!(square.stats().misses, 1);
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::cache::{CacheStats, CacheStore};

// == Memoize ==
/// A function wrapped with a private result store.
///
/// The argument tuple `K` is the lookup key, used verbatim. `f` must be
/// deterministic: it runs at most once per distinct `K` for the lifetime of
/// the wrapper.
pub struct Memoize<K, V, F> {
    func: F,
    store: CacheStore<K, V>,
}

impl<K, V, F> Memoize<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: Fn(&K) -> V,
{
    /// Wraps `func`. `name` labels the store in trace output.
    pub fn new(name: &'static str, func: F) -> Self {
        Self {
            func,
            store: CacheStore::new(name),
        }
    }

    /// Returns `func(&args)`, computing it only on the first call with `args`.
    pub fn call(&self, args: K) -> V {
        self.store.get_or_insert_with(args, &self.func)
    }

    /// Hit/miss counters of the private store.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    /// The private store.
    pub fn store(&self) -> &CacheStore<K, V> {
        &self.store
    }
}

impl<K, V, F> fmt::Debug for Memoize<K, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("name", &self.store.name())
            .finish_non_exhaustive()
    }
}

// == Try Memoize ==
/// A fallible function wrapped with a private result store.
///
/// Only `Ok` results are stored. An `Err` reaches the caller unchanged, and
/// the next call with the same arguments runs the function again.
pub struct TryMemoize<K, V, E, F> {
    func: F,
    store: CacheStore<K, V>,
    _error: PhantomData<fn() -> E>,
}

impl<K, V, E, F> TryMemoize<K, V, E, F>
where
    K: Eq + Hash,
    V: Clone,
    F: Fn(&K) -> Result<V, E>,
{
    /// Wraps `func`. `name` labels the store in trace output.
    pub fn new(name: &'static str, func: F) -> Self {
        Self {
            func,
            store: CacheStore::new(name),
            _error: PhantomData,
        }
    }

    /// Returns `func(&args)`, storing the value on success.
    pub fn call(&self, args: K) -> Result<V, E> {
        self.store.try_get_or_insert_with(args, &self.func)
    }

    /// Hit/miss counters of the private store.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    /// The private store.
    pub fn store(&self) -> &CacheStore<K, V> {
        &self.store
    }
}

impl<K, V, E, F> fmt::Debug for TryMemoize<K, V, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMemoize")
            .field("name", &self.store.name())
            .finish_non_exhaustive()
    }
}

/// Wraps a pure function with a memo store.
pub fn memoize<K, V, F>(name: &'static str, func: F) -> Memoize<K, V, F>
where
    K: Eq + Hash,
    V: Clone,
    F: Fn(&K) -> V,
{
    Memoize::new(name, func)
}

/// Wraps a fallible pure function with a memo store that skips failures.
pub fn try_memoize<K, V, E, F>(name: &'static str, func: F) -> TryMemoize<K, V, E, F>
where
    K: Eq + Hash,
    V: Clone,
    F: Fn(&K) -> Result<V, E>,
{
    TryMemoize::new(name, func)
}
