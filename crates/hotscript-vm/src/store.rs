//! The dynamic variable store.
//!
//! User-visible script variables that are not method locals live here, keyed
//! by name. Keys are ASCII case-insensitive, the same folding property names
//! use.

use hotscript_core::{Environment, Value};
use rustc_hash::FxHashMap;

/// Key/value container reached through `LOAD_STORE`.
#[derive(Debug, Default, Clone)]
pub struct DynamicStore {
    /// Values keyed by lowered name
    values: FxHashMap<String, Value>,
}

impl DynamicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a variable. Missing variables read as null.
    pub fn get(&self, key: &str) -> Value {
        self.values
            .get(&key.to_ascii_lowercase())
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Write a variable, returning the previous value if there was one.
    pub fn set(&mut self, key: &str, value: Value) -> Option<Value> {
        self.values.insert(key.to_ascii_lowercase(), value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(&key.to_ascii_lowercase())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(&key.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterate over (lowered key, value) pairs, unordered.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Mutable state a method runs against.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    pub store: DynamicStore,
    pub env: Environment,
}

impl ExecutionContext {
    pub fn new(env: Environment) -> Self {
        Self {
            store: DynamicStore::new(),
            env,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_read_null() {
        let store = DynamicStore::new();
        assert_eq!(store.get("nothing"), Value::Null);
        assert!(store.is_empty());
    }

    #[test]
    fn keys_ignore_case() {
        let mut store = DynamicStore::new();
        assert_eq!(store.set("Name", Value::from("a")), None);
        assert_eq!(store.get("NAME"), Value::from("a"));

        let previous = store.set("name", Value::Int(1).boxed());
        assert_eq!(previous, Some(Value::from("a")));
        assert_eq!(store.len(), 1);
        assert!(store.contains("nAmE"));

        assert!(store.remove("name").is_some());
        assert!(!store.contains("name"));
    }

    #[test]
    fn only_ascii_letters_fold() {
        let mut store = DynamicStore::new();
        store.set("Straße", Value::from("a"));
        assert!(store.contains("STRAßE"));
        assert!(!store.contains("STRASSE"));

        store.set("Ä", Value::from("b"));
        assert!(!store.contains("ä"));
        assert_eq!(store.len(), 2);
    }
}
