//! Runtime values for interpreter slots and the evaluation stack.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use rust_decimal::Decimal;

use crate::StaticType;

/// A value held on the interpreter stack, in a local slot, or in the store.
///
/// Value types (`Int`, `Long`, `Decimal`, `Bool`) must be wrapped in
/// [`Value::Boxed`] before they can flow into an `object`-typed consumer.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Null reference.
    Null,
    Int(i32),
    Long(i64),
    Decimal(Decimal),
    Bool(bool),
    String(String),
    /// A value type wrapped as an object.
    Boxed(Box<Value>),
    /// Shared reference to a typed array.
    Array(ArrayRef),
    /// Reference to the dynamic variable store.
    Store,
}

impl Value {
    /// Human-readable name of the runtime representation.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Decimal(_) => "decimal",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Boxed(_) => "boxed",
            Value::Array(_) => "array",
            Value::Store => "store",
        }
    }

    /// Whether this is an unboxed value type.
    pub fn is_value_type(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Long(_) | Value::Decimal(_) | Value::Bool(_)
        )
    }

    /// Wrap a value type as an object. References are returned unchanged.
    pub fn boxed(self) -> Value {
        if self.is_value_type() {
            Value::Boxed(Box::new(self))
        } else {
            self
        }
    }

    /// Look through a box.
    pub fn unboxed(&self) -> &Value {
        match self {
            Value::Boxed(inner) => inner,
            other => other,
        }
    }

    /// Whether a value of this shape may sit in a slot of the given static type.
    ///
    /// `Object` accepts every reference and every boxed value; value-type
    /// slots only accept the matching unboxed representation.
    pub fn fits(&self, ty: &StaticType) -> bool {
        match (ty, self) {
            (StaticType::Int, Value::Int(_))
            | (StaticType::Long, Value::Long(_))
            | (StaticType::Decimal, Value::Decimal(_))
            | (StaticType::Bool, Value::Bool(_))
            | (StaticType::String, Value::String(_) | Value::Null) => true,
            (StaticType::Object, value) => !value.is_value_type(),
            (StaticType::Array(_), Value::Array(_) | Value::Null) => true,
            _ => false,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Int(v) => write!(f, "Int({})", v),
            Value::Long(v) => write!(f, "Long({})", v),
            Value::Decimal(v) => write!(f, "Decimal({})", v),
            Value::Bool(v) => write!(f, "Bool({})", v),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Boxed(inner) => write!(f, "Boxed({:?})", inner),
            Value::Array(array) => write!(f, "Array<{}>{:?}", array.element_type(), array.items()),
            Value::Store => write!(f, "Store"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// Shared handle to a fixed-length typed array.
///
/// Cloning the handle aliases the same storage, matching reference semantics
/// of `Dup` on the evaluation stack. Equality compares contents.
#[derive(Clone)]
pub struct ArrayRef {
    element: StaticType,
    items: Rc<RefCell<Vec<Value>>>,
}

impl ArrayRef {
    /// Allocate an array of `len` null elements.
    pub fn new(element: StaticType, len: usize) -> Self {
        Self {
            element,
            items: Rc::new(RefCell::new(vec![Value::Null; len])),
        }
    }

    /// Wrap existing values (used for the argument container).
    pub fn from_values(element: StaticType, values: Vec<Value>) -> Self {
        Self {
            element,
            items: Rc::new(RefCell::new(values)),
        }
    }

    pub fn element_type(&self) -> &StaticType {
        &self.element
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn items(&self) -> Ref<'_, Vec<Value>> {
        self.items.borrow()
    }

    pub fn items_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.items.borrow_mut()
    }

    /// Whether both handles alias the same storage.
    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl PartialEq for ArrayRef {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element && *self.items.borrow() == *other.items.borrow()
    }
}
