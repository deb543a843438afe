//! Interpreter for hotscript instruction streams.
//!
//! Executes a [`CompiledMethod`](hotscript_compiler::CompiledMethod) against
//! an [`ExecutionContext`] holding the dynamic variable store and the built-in
//! runtime environment. This is not a general virtual machine: there is no
//! control flow and no calls between methods, only the stack operations,
//! conversions, store access and property accessors the compiler emits.
//!
//! ## Modules
//!
//! - [`store`]: the dynamic variable store and execution context
//! - [`frame`]: the locals and stack left behind by a run
//! - [`intrinsics`]: runtime routines behind `CALL_INTRINSIC`

mod frame;
pub mod intrinsics;
pub mod store;
mod vm;

pub use frame::Frame;
pub use store::{DynamicStore, ExecutionContext};
pub use vm::{Vm, VmOptions};

pub use hotscript_core::RuntimeError;
