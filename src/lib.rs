//! gst-msdk FITS support
//!
//! Parameter translation, memoization and layered test specs for the
//! gst-msdk media conformance suite.

pub mod cache;
pub mod config;
pub mod error;
pub mod mapping;
pub mod models;
pub mod probe;
pub mod spec;

pub use cache::{memoize, try_memoize, CacheStore, Memoize, TryMemoize};
pub use config::Config;
pub use error::{FitsError, Result};
pub use spec::{load_test_spec, JsonSpecStore, Spec, SpecComposer, SpecStore};
