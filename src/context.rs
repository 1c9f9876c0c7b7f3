//! Variable context threaded through a manifest walk.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping from variable name to value, handed to the template renderer.
///
/// A `Context` is a value: every update returns a new one, so a context held
/// by an enclosing walk never changes underneath it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context(IndexMap<String, serde_json::Value>);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a context with `name` bound to `value` unless `name` is already bound.
    ///
    /// Existing bindings win, which is how values supplied by a caller take
    /// precedence over defaults declared inside an imported pack.
    pub fn with_default<S: Into<String>>(&self, name: S, value: serde_json::Value) -> Self {
        let mut vars = self.0.clone();
        vars.entry(name.into()).or_insert(value);
        Self(vars)
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, serde_json::Value)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
