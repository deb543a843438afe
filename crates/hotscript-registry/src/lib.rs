//! Property registry for the hotscript runtime surface.
//!
//! Scripts reach built-in state (`ErrorLevel`, `A_WorkingDir`, ...) through
//! named properties. This crate provides:
//!
//! - [`PropertyRegistry`]: name → [`PropertyDescriptor`] table, built once
//! - [`PropertyResolver`]: an injectable strategy consulted before the registry
//! - [`PropertyLookup`]: the combination the compiler resolves against
//! - [`builtins`]: the default built-in surface

pub mod builtins;
mod descriptor;
mod registry;
mod resolver;

pub use descriptor::{Getter, PropertyDescriptor, Setter};
pub use registry::PropertyRegistry;
pub use resolver::{PropertyLookup, PropertyResolver, Resolution};
