//! Variable bindings.
//!
//! A single flat scope. Lookups search only this map; the interface is kept
//! to "search this scope" so an enclosing-scope chain can be layered on
//! without changing callers.

use rustc_hash::FxHashMap;

use crate::Value;

#[derive(Clone, Debug, Default)]
pub struct Environment {
    values: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Bind `name`, overwriting any existing binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// The value bound to `name`, if any.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

#[cfg(test)]
mod tests;
