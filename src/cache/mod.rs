//! Cache Module
//!
//! Transparent memoization for pure, deterministic functions: translation
//! tables and host probes are evaluated once per distinct argument tuple.

mod memoize;
mod stats;
mod store;


// Re-export public types
pub use memoize::{memoize, try_memoize, Memoize, TryMemoize};
pub use stats::CacheStats;
pub use store::CacheStore;
