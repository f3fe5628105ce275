//! Cache Statistics Module
//!
//! Tracks memoization metrics: hits, misses and stored results.

// == Cache Stats ==
/// Tracks memoization performance for a single wrapped function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the store
    pub hits: u64,
    /// Calls that had to invoke the wrapped function
    pub misses: u64,
    /// Number of distinct argument tuples currently stored
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Updates the stored entry count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
