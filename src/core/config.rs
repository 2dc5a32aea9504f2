//! Read-only configuration tree
//!
//! The factory consumes an already-parsed JSON value; this wrapper shares it
//! cheaply between the sub-factories and offers typed section access. Nothing
//! mutates the tree after construction.

use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Config {
    root: Arc<Value>,
}

impl Config {
    pub fn new(root: Value) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Top-level section (`logger`, `handler`, `formatter`) as an object,
    /// or `None` when absent or not an object.
    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.root.get(name).and_then(Value::as_object)
    }
}
