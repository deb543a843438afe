//! Property descriptors: a name plus optional typed accessors.

use std::fmt;
use std::sync::Arc;

use hotscript_core::{Environment, NativeError, TypeHash, Value};

/// Reads a property from the runtime environment.
pub type Getter = Arc<dyn Fn(&Environment) -> Value + Send + Sync>;

/// Writes a property into the runtime environment.
pub type Setter = Arc<dyn Fn(&mut Environment, Value) -> Result<(), NativeError> + Send + Sync>;

/// A named property with an optional getter and setter.
///
/// Cloning shares the accessors. The `id` is derived from the name and keys
/// the registry.
#[derive(Clone)]
pub struct PropertyDescriptor {
    name: String,
    id: TypeHash,
    getter: Option<Getter>,
    setter: Option<Setter>,
}

impl PropertyDescriptor {
    /// A property with no accessors yet.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = TypeHash::from_property(&name);
        Self {
            name,
            id,
            getter: None,
            setter: None,
        }
    }

    pub fn with_getter<F>(mut self, getter: F) -> Self
    where
        F: Fn(&Environment) -> Value + Send + Sync + 'static,
    {
        self.getter = Some(Arc::new(getter));
        self
    }

    pub fn with_setter<F>(mut self, setter: F) -> Self
    where
        F: Fn(&mut Environment, Value) -> Result<(), NativeError> + Send + Sync + 'static,
    {
        self.setter = Some(Arc::new(setter));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> TypeHash {
        self.id
    }

    /// Whether both descriptors call the same accessor closures.
    ///
    /// Names are not compared: two descriptors with one name but different
    /// closures are distinct.
    pub fn shares_accessors(&self, other: &PropertyDescriptor) -> bool {
        fn same<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        (self.has_getter() || self.has_setter())
            && same(&self.getter, &other.getter)
            && same(&self.setter, &other.setter)
    }

    pub fn has_getter(&self) -> bool {
        self.getter.is_some()
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }

    /// Read the property. Value types are boxed: properties are `object`.
    ///
    /// Returns `None` for write-only properties.
    pub fn get(&self, env: &Environment) -> Option<Value> {
        self.getter.as_ref().map(|getter| getter(env).boxed())
    }

    /// Write the property.
    ///
    /// Writing a read-only property is a no-op; the compiler never emits such
    /// a call, it emits a null result instead.
    pub fn set(&self, env: &mut Environment, value: Value) -> Result<(), NativeError> {
        match &self.setter {
            Some(setter) => setter(env, value),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("getter", &self.getter.is_some())
            .field("setter", &self.setter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getter_results_are_boxed() {
        let prop = PropertyDescriptor::new("Answer").with_getter(|_| Value::Int(42));
        let env = Environment::default();
        assert_eq!(prop.get(&env), Some(Value::Int(42).boxed()));
        assert!(!prop.has_setter());
    }

    #[test]
    fn setter_writes_environment() {
        let prop = PropertyDescriptor::new("ErrorLevel").with_setter(|env, value| {
            env.error_level = value;
            Ok(())
        });
        let mut env = Environment::default();
        prop.set(&mut env, Value::from("failed")).unwrap();
        assert_eq!(env.error_level, Value::from("failed"));
        assert_eq!(prop.get(&env), None);
    }

    #[test]
    fn clones_share_accessors_but_namesakes_do_not() {
        let prop = PropertyDescriptor::new("ErrorLevel").with_getter(|env| env.error_level.clone());
        assert!(prop.shares_accessors(&prop.clone()));

        let namesake = PropertyDescriptor::new("ErrorLevel").with_getter(|env| env.error_level.clone());
        assert!(!prop.shares_accessors(&namesake));
        assert!(!PropertyDescriptor::new("x").shares_accessors(&PropertyDescriptor::new("x")));
    }

    #[test]
    fn id_follows_name() {
        let prop = PropertyDescriptor::new("A_TickCount");
        assert_eq!(prop.id(), TypeHash::from_property("a_tickcount"));
    }
}
