//! Spec Store Module
//!
//! Lookup of specs by context path.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{FitsError, Result};
use crate::spec::Spec;

// == Spec Store ==
/// Source of specs keyed by context (`["encode", "avc"]`).
///
/// Implementations decide what an unknown context yields; the stock
/// [`JsonSpecStore`] returns an empty spec. A store may lend its own data; a
/// caller that needs to mutate the result takes ownership with
/// [`Cow::into_owned`].
pub trait SpecStore {
    fn get_spec(&self, context: &[&str]) -> Cow<'_, Spec>;
}

impl<S: SpecStore + ?Sized> SpecStore for &S {
    fn get_spec(&self, context: &[&str]) -> Cow<'_, Spec> {
        (**self).get_spec(context)
    }
}

// == JSON Spec Store ==
/// Spec store backed by a nested JSON document.
///
/// Each context segment selects a key one level deeper:
///
/// ```json
/// { "encode": { "avc": { "bitrate": 4000 } },
///   "gst-msdk": { "encode": { "avc": { "bitrate": 3500 } } } }
/// ```
///
/// Here `["encode", "avc"]` is the general spec and
/// `["gst-msdk", "encode", "avc"]` the component spec.
#[derive(Debug, Clone, Default)]
pub struct JsonSpecStore {
    root: Value,
}

impl JsonSpecStore {
    /// Creates a store over an already parsed document.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::from_value(serde_json::from_str(json)?))
    }

    /// Reads and parses a JSON document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| FitsError::io(path, e))?;
        let store = Self::from_json_str(&text)?;
        debug!("Loaded spec document from {}", path.display());
        Ok(store)
    }

    /// The underlying document.
    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl SpecStore for JsonSpecStore {
    fn get_spec(&self, context: &[&str]) -> Cow<'_, Spec> {
        let node = context
            .iter()
            .try_fold(&self.root, |node, segment| node.get(*segment));

        match node {
            Some(Value::Object(spec)) => Cow::Borrowed(spec),
            _ => {
                debug!(?context, "no spec entries for context");
                Cow::Owned(Spec::new())
            }
        }
    }
}
