//! Spec Composer Module
//!
//! Layers a component's spec entries over the general entries for a context.

use tracing::trace;

use crate::config::DEFAULT_COMPONENT;
use crate::spec::{Spec, SpecStore};

// == Spec Composer ==
/// Builds the effective spec for a test context.
///
/// The override is shallow: a key present in both tiers takes the
/// component's value whole, nested objects included.
#[derive(Debug, Clone)]
pub struct SpecComposer<S> {
    store: S,
    component: String,
}

impl<S: SpecStore> SpecComposer<S> {
    /// Creates a composer that applies `gst-msdk` overrides.
    pub fn new(store: S) -> Self {
        Self::with_component(store, DEFAULT_COMPONENT)
    }

    /// Creates a composer that applies overrides for `component`.
    pub fn with_component(store: S, component: impl Into<String>) -> Self {
        Self {
            store,
            component: component.into(),
        }
    }

    /// The component whose entries take precedence.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // == Compose ==
    /// Returns the general spec for `context` with the component's entries
    /// written over it.
    ///
    /// The result is owned and shares nothing with the store, so callers may
    /// mutate it freely. What an unknown context yields is up to the store.
    pub fn compose(&self, context: &[&str]) -> Spec {
        let mut spec = self.store.get_spec(context).into_owned();

        let mut component_context = Vec::with_capacity(context.len() + 1);
        component_context.push(self.component.as_str());
        component_context.extend_from_slice(context);

        let overrides = self.store.get_spec(&component_context);
        for (key, value) in overrides.iter() {
            spec.insert(key.clone(), value.clone());
        }

        trace!(
            ?context,
            component = %self.component,
            overridden = overrides.len(),
            "composed spec"
        );
        spec
    }
}

/// Composes the `gst-msdk` spec for `context` from `store`.
pub fn load_test_spec<S: SpecStore + ?Sized>(store: &S, context: &[&str]) -> Spec {
    SpecComposer::new(store).compose(context)
}
