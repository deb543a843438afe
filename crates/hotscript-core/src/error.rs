//! Error types for every phase of hotscript processing.
//!
//! ```text
//! HotscriptError (top-level wrapper)
//! ├── RegistrationError - property registry construction
//! ├── CompilationError  - method body emission
//! ├── RuntimeError      - instruction execution
//! └── NativeError       - failures reported by native accessors
//! ```
//!
//! Compilation errors carry the span and kind of the IR node that raised
//! them so the driver can point at the offending script text.

use thiserror::Error;

use crate::{Span, StaticType};

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while building a property registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistrationError {
    /// A property with the same (case-insensitive) name already exists.
    #[error("property '{name}' is already registered")]
    DuplicateProperty { name: String },

    /// A property was registered without any accessor.
    #[error("property '{name}' has neither a getter nor a setter")]
    NoAccessors { name: String },
}

// ============================================================================
// Compilation Errors
// ============================================================================

/// Errors raised while emitting a method body.
///
/// Any of these aborts compilation of the current method.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompilationError {
    /// A name was declared twice in one method.
    #[error("at {span}: attempt to redefine local variable '{name}' (first declared at {original})")]
    DuplicateDeclaration {
        name: String,
        original: Span,
        span: Span,
        node: &'static str,
    },

    /// A name was read before any declaration or assignment bound it.
    #[error("at {span}: undefined variable '{name}'")]
    UndefinedVariable {
        name: String,
        span: Span,
        node: &'static str,
    },

    /// The left-hand side of an assignment cannot be assigned to.
    #[error("at {span}: left hand side ({node}) is unassignable")]
    UnassignableTarget { span: Span, node: &'static str },

    /// An array literal named an element type outside the closed set.
    #[error("at {span}: unknown element type '{name}'")]
    UnknownType {
        name: String,
        span: Span,
        node: &'static str,
    },

    /// A count or index does not fit the instruction encoding.
    #[error("at {span}: too many {what} (limit {limit})")]
    LimitExceeded {
        what: &'static str,
        limit: usize,
        span: Span,
        node: &'static str,
    },

    /// The coercion table has no rule for this pair.
    ///
    /// This indicates a gap in the compiler, not a mistake in the script.
    #[error("internal error at {span}: cannot coerce '{from}' to '{to}'")]
    UnresolvedCoercion {
        from: StaticType,
        to: StaticType,
        span: Span,
    },
}

impl CompilationError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CompilationError::DuplicateDeclaration { span, .. } => *span,
            CompilationError::UndefinedVariable { span, .. } => *span,
            CompilationError::UnassignableTarget { span, .. } => *span,
            CompilationError::UnknownType { span, .. } => *span,
            CompilationError::LimitExceeded { span, .. } => *span,
            CompilationError::UnresolvedCoercion { span, .. } => *span,
        }
    }

    /// Kind of the IR node that raised the error, if known.
    pub fn node(&self) -> Option<&'static str> {
        match self {
            CompilationError::DuplicateDeclaration { node, .. }
            | CompilationError::UndefinedVariable { node, .. }
            | CompilationError::UnassignableTarget { node, .. }
            | CompilationError::UnknownType { node, .. }
            | CompilationError::LimitExceeded { node, .. } => Some(*node),
            CompilationError::UnresolvedCoercion { .. } => None,
        }
    }

    /// Internal-consistency failures, as opposed to script diagnostics.
    pub fn is_internal(&self) -> bool {
        matches!(self, CompilationError::UnresolvedCoercion { .. })
    }
}

// ============================================================================
// Native Errors
// ============================================================================

/// Errors reported by native property accessors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeError {
    /// The assigned value is not acceptable for the property.
    #[error("invalid value for '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// Any other accessor failure.
    #[error("{0}")]
    Other(String),
}

// ============================================================================
// Runtime Errors
// ============================================================================

/// Errors raised while executing an instruction stream.
///
/// `offset` is the index of the failing instruction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("stack underflow at instruction {offset}")]
    StackUnderflow { offset: usize },

    #[error("stack overflow at instruction {offset} (limit {limit})")]
    StackOverflow { offset: usize, limit: usize },

    #[error("type mismatch at instruction {offset}: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: String,
        actual: &'static str,
        offset: usize,
    },

    #[error("invalid local slot {slot} at instruction {offset}")]
    InvalidSlot { slot: u32, offset: usize },

    #[error("instruction {offset} is missing its operand")]
    MissingOperand { offset: usize },

    #[error("index {index} out of bounds for array of length {len} at instruction {offset}")]
    IndexOutOfBounds {
        index: i64,
        len: usize,
        offset: usize,
    },

    #[error("no accessor #{index} in the method's table at instruction {offset}")]
    UnknownAccessor { index: u32, offset: usize },

    #[error(transparent)]
    Native(#[from] NativeError),
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Unified error for callers that drive several phases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HotscriptError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Compilation(#[from] CompilationError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
