//! Deterministic identities for runtime accessors.
//!
//! Properties are keyed by a [`TypeHash`] computed from the ASCII-lowered
//! property name, so the same property always gets the same identity no
//! matter which registry built it.

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into property hashes.
const PROPERTY: u64 = 0x2fac10b63a6cc57c;

/// A deterministic 64-bit hash identifying a named runtime entity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Hash a property name.
    ///
    /// Property names are case-insensitive, so `ErrorLevel` and `errorlevel`
    /// hash identically.
    ///
    /// ```
    /// use hotscript_core::TypeHash;
    ///
    /// assert_eq!(TypeHash::from_property("ErrorLevel"), TypeHash::from_property("errorlevel"));
    /// ```
    #[inline]
    pub fn from_property(name: &str) -> Self {
        TypeHash(PROPERTY ^ xxh64(name.to_ascii_lowercase().as_bytes(), 0))
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(
            TypeHash::from_property("A_WorkingDir"),
            TypeHash::from_property("A_WorkingDir")
        );
    }

    #[test]
    fn distinct_names_differ() {
        assert_ne!(
            TypeHash::from_property("ErrorLevel"),
            TypeHash::from_property("A_TickCount")
        );
    }
}
