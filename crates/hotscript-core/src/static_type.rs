//! Static types known to the code generator.

use std::fmt;

/// The static type of a value left on the evaluation stack.
///
/// The set is closed: scripts are dynamically typed, and everything the
/// emitter cannot pin to one of the concrete types is `Object`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StaticType {
    /// Nothing on the stack.
    Void,
    /// Text. A reference type.
    String,
    /// Base-10 fixed point number.
    Decimal,
    /// 64-bit signed integer.
    Long,
    /// 32-bit signed integer.
    Int,
    /// Boolean.
    Bool,
    /// Universal dynamic supertype.
    Object,
    /// Array with the given element type.
    Array(Box<StaticType>),
}

impl StaticType {
    /// Shorthand for `Array(Box::new(element))`.
    pub fn array_of(element: StaticType) -> Self {
        StaticType::Array(Box::new(element))
    }

    /// Value types must be boxed before they can be used as `Object`.
    pub fn is_value_type(&self) -> bool {
        matches!(
            self,
            StaticType::Decimal | StaticType::Long | StaticType::Int | StaticType::Bool
        )
    }

    pub fn is_array(&self) -> bool {
        matches!(self, StaticType::Array(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, StaticType::Void)
    }

    /// Element type if this is an array.
    pub fn element_type(&self) -> Option<&StaticType> {
        match self {
            StaticType::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Resolve an element type name as it appears in array literals.
    ///
    /// Accepts the script spellings (`int`, `string`, ...) case-insensitively
    /// as well as the qualified runtime spellings (`System.Int32`, ...).
    /// Returns `None` for anything outside the closed set.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        let short = lowered.strip_prefix("system.").unwrap_or(&lowered);
        let ty = match short {
            "string" => StaticType::String,
            "decimal" => StaticType::Decimal,
            "long" | "int64" => StaticType::Long,
            "int" | "int32" => StaticType::Int,
            "bool" | "boolean" => StaticType::Bool,
            "object" => StaticType::Object,
            _ => return None,
        };
        Some(ty)
    }

    /// Script-facing name.
    pub fn name(&self) -> String {
        match self {
            StaticType::Void => "void".to_string(),
            StaticType::String => "string".to_string(),
            StaticType::Decimal => "decimal".to_string(),
            StaticType::Long => "long".to_string(),
            StaticType::Int => "int".to_string(),
            StaticType::Bool => "bool".to_string(),
            StaticType::Object => "object".to_string(),
            StaticType::Array(element) => format!("{}[]", element.name()),
        }
    }
}

impl fmt::Display for StaticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_types() {
        assert!(StaticType::Int.is_value_type());
        assert!(StaticType::Long.is_value_type());
        assert!(StaticType::Decimal.is_value_type());
        assert!(StaticType::Bool.is_value_type());
        assert!(!StaticType::String.is_value_type());
        assert!(!StaticType::Object.is_value_type());
        assert!(!StaticType::array_of(StaticType::Int).is_value_type());
    }

    #[test]
    fn names_resolve() {
        assert_eq!(StaticType::from_name("Object"), Some(StaticType::Object));
        assert_eq!(StaticType::from_name("System.Object"), Some(StaticType::Object));
        assert_eq!(StaticType::from_name("System.Int32"), Some(StaticType::Int));
        assert_eq!(StaticType::from_name(" bool "), Some(StaticType::Bool));
        assert_eq!(StaticType::from_name("float"), None);
    }

    #[test]
    fn array_display() {
        let ty = StaticType::array_of(StaticType::Object);
        assert_eq!(ty.to_string(), "object[]");
        assert_eq!(ty.element_type(), Some(&StaticType::Object));
    }
}
