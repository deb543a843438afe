//! PropertyRegistry - the default table of named properties.
//!
//! # Thread Safety
//!
//! The registry is populated once, before any method is compiled, and is
//! read-only afterwards. Accessors are `Send + Sync`, so a finished registry
//! can be shared across threads compiling different methods; registration
//! takes `&mut self` and therefore needs exclusive access.
//!
//! # Example
//!
//! ```
//! use hotscript_registry::PropertyRegistry;
//!
//! let registry = PropertyRegistry::with_builtins();
//! let prop = registry.get("errorlevel").unwrap();
//! assert_eq!(prop.name(), "ErrorLevel");
//! assert!(prop.has_setter());
//! ```

use hotscript_core::{RegistrationError, TypeHash};
use rustc_hash::FxHashMap;

use crate::PropertyDescriptor;
use crate::builtins;

/// Name → descriptor table with case-insensitive lookup.
#[derive(Debug, Default, Clone)]
pub struct PropertyRegistry {
    /// Descriptors keyed by their name hash.
    properties: FxHashMap<TypeHash, PropertyDescriptor>,
}

impl PropertyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in runtime surface.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtins::register_all(&mut registry);
        registry
    }

    /// Register a property.
    ///
    /// Fails if a property with the same case-insensitive name exists, or if
    /// the descriptor has no accessors at all.
    pub fn register(&mut self, descriptor: PropertyDescriptor) -> Result<(), RegistrationError> {
        if !descriptor.has_getter() && !descriptor.has_setter() {
            return Err(RegistrationError::NoAccessors {
                name: descriptor.name().to_string(),
            });
        }

        let key = descriptor.id();
        if self.properties.contains_key(&key) {
            return Err(RegistrationError::DuplicateProperty {
                name: descriptor.name().to_string(),
            });
        }

        tracing::debug!(
            property = descriptor.name(),
            getter = descriptor.has_getter(),
            setter = descriptor.has_setter(),
            "registered property"
        );
        self.properties.insert(key, descriptor);
        Ok(())
    }

    /// Look up a property by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(&TypeHash::from_property(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over all registered descriptors (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.values()
    }
}
