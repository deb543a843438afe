//! Core types shared by the hotscript compiler and interpreter.
//!
//! - [`StaticType`]: the closed set of static types the code generator reasons about
//! - [`Value`]: runtime values held in interpreter slots and on the stack
//! - [`convert`]: the canonical conversions behind the `force_*` intrinsics
//! - [`Environment`]: built-in runtime state exposed through properties
//! - [`error`]: error types for every phase
//! - [`Span`] and [`TypeHash`]: source positions and deterministic identities

pub mod convert;
mod environment;
pub mod error;
mod span;
mod static_type;
mod type_hash;
mod value;

pub use environment::{Environment, TitleMatchMode};
pub use error::{CompilationError, HotscriptError, NativeError, RegistrationError, RuntimeError};
pub use span::Span;
pub use static_type::StaticType;
pub use type_hash::TypeHash;
pub use value::{ArrayRef, Value};
