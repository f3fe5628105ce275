//! Test Specifications
//!
//! A spec is a JSON object of test parameters. Specs are kept in a
//! [`SpecStore`] keyed by context path, at two tiers: general entries that
//! apply to every component, and component entries (`gst-msdk`) that
//! override them. [`SpecComposer`] merges the two into an owned result.

mod composer;
mod store;

pub use composer::{load_test_spec, SpecComposer};
pub use store::{JsonSpecStore, SpecStore};

/// Test configuration: string keys to arbitrary JSON values.
pub type Spec = serde_json::Map<String, serde_json::Value>;
