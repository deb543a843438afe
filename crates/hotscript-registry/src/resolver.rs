//! Extension resolvers layered over the default registry.
//!
//! An embedder can inject a [`PropertyResolver`] to add, replace or hide
//! properties without rebuilding the registry. The resolver is asked first;
//! when it declines, lookup falls back to the registry.

use crate::{PropertyDescriptor, PropertyRegistry};

/// Outcome of asking a resolver about a property.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Use this descriptor instead of the registry's.
    Found(PropertyDescriptor),
    /// Let the default registry answer.
    Declined,
}

/// Strategy consulted before the default registry.
pub trait PropertyResolver: Send + Sync {
    /// Resolve `name`, optionally consulting the default `registry`.
    fn resolve(&self, name: &str, registry: &PropertyRegistry) -> Resolution;
}

impl<F> PropertyResolver for F
where
    F: Fn(&str, &PropertyRegistry) -> Resolution + Send + Sync,
{
    fn resolve(&self, name: &str, registry: &PropertyRegistry) -> Resolution {
        (self)(name, registry)
    }
}

/// Registry plus optional resolver; what the compiler resolves names against.
#[derive(Clone, Copy)]
pub struct PropertyLookup<'a> {
    registry: &'a PropertyRegistry,
    resolver: Option<&'a dyn PropertyResolver>,
}

impl<'a> PropertyLookup<'a> {
    pub fn new(registry: &'a PropertyRegistry) -> Self {
        Self {
            registry,
            resolver: None,
        }
    }

    pub fn with_resolver(mut self, resolver: &'a dyn PropertyResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn registry(&self) -> &'a PropertyRegistry {
        self.registry
    }

    /// Resolve a property by name: resolver first, registry second.
    pub fn resolve(&self, name: &str) -> Option<PropertyDescriptor> {
        if let Some(resolver) = self.resolver
            && let Resolution::Found(descriptor) = resolver.resolve(name, self.registry)
        {
            tracing::trace!(property = name, "resolved by extension resolver");
            return Some(descriptor);
        }
        self.registry.get(name).cloned()
    }

    /// Resolve a property that can be written.
    pub fn resolve_setter(&self, name: &str) -> Option<PropertyDescriptor> {
        self.resolve(name).filter(PropertyDescriptor::has_setter)
    }

    /// Resolve a property that can be read.
    pub fn resolve_getter(&self, name: &str) -> Option<PropertyDescriptor> {
        self.resolve(name).filter(PropertyDescriptor::has_getter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotscript_core::Value;

    fn shadow_error_level(name: &str, _: &PropertyRegistry) -> Resolution {
        if name.eq_ignore_ascii_case("ErrorLevel") {
            Resolution::Found(PropertyDescriptor::new("ErrorLevel").with_getter(|_| Value::Int(-1)))
        } else {
            Resolution::Declined
        }
    }

    #[test]
    fn registry_only() {
        let registry = PropertyRegistry::with_builtins();
        let lookup = PropertyLookup::new(&registry);
        assert!(lookup.resolve("A_TickCount").is_some());
        assert!(lookup.resolve("NoSuchThing").is_none());
    }

    #[test]
    fn resolver_is_consulted_first() {
        let registry = PropertyRegistry::with_builtins();
        let lookup = PropertyLookup::new(&registry).with_resolver(&shadow_error_level);

        let prop = lookup.resolve("ErrorLevel").unwrap();
        assert!(!prop.has_setter());
        assert!(lookup.resolve_setter("ErrorLevel").is_none());
    }

    #[test]
    fn declining_resolver_falls_back() {
        let registry = PropertyRegistry::with_builtins();
        let lookup = PropertyLookup::new(&registry).with_resolver(&shadow_error_level);
        assert!(lookup.resolve_setter("A_WorkingDir").is_some());
    }

    #[test]
    fn resolver_can_add_properties() {
        let registry = PropertyRegistry::new();
        let extra = |name: &str, _: &PropertyRegistry| {
            if name == "Custom" {
                Resolution::Found(
                    PropertyDescriptor::new("Custom").with_setter(|_, _| Ok(())),
                )
            } else {
                Resolution::Declined
            }
        };
        let lookup = PropertyLookup::new(&registry).with_resolver(&extra);
        assert!(lookup.resolve_setter("Custom").is_some());
        assert!(lookup.resolve_getter("Custom").is_none());
    }
}
