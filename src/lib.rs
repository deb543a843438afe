//! Hotscript: method-body code generation for a dynamically-typed script
//! language, plus an interpreter for the generated instructions.
//!
//! The workspace is split by phase:
//!
//! - [`hotscript_core`]: static types, runtime values, conversions, errors
//! - [`hotscript_ir`]: the IR trees a parser produces
//! - [`hotscript_registry`]: the built-in property surface and resolvers
//! - [`hotscript_compiler`]: lowering IR to instruction streams
//! - [`hotscript_vm`]: executing instruction streams
//!
//! [`Runtime`] ties them together for embedders that want to compile and run
//! methods against one store and environment.
//!
//! ```
//! use bumpalo::Bump;
//! use hotscript::{IrBuilder, Runtime, Value};
//!
//! let arena = Bump::new();
//! let ir = IrBuilder::new(&arena);
//! let method = ir.method(
//!     "main",
//!     &[
//!         ir.assign_stmt(ir.var("x"), ir.int(5)),
//!         ir.declare("y", ir.var("x")),
//!     ],
//! );
//!
//! let mut runtime = Runtime::new();
//! let frame = runtime.execute(&method, Vec::new()).unwrap();
//! assert_eq!(frame.get("y"), Some(&Value::Int(5)));
//! ```

mod runtime;

pub use runtime::Runtime;

pub use hotscript_compiler::{
    CompilationResult, CompiledMethod, CompilerOptions, InstructionStream, OpCode, compile_method,
    compile_unit,
};
pub use hotscript_core::{
    CompilationError, Environment, HotscriptError, NativeError, RegistrationError, RuntimeError,
    Span, StaticType, Value,
};
pub use hotscript_ir::{IrBuilder, MethodDecl};
pub use hotscript_registry::{
    PropertyDescriptor, PropertyLookup, PropertyRegistry, PropertyResolver, Resolution,
};
pub use hotscript_vm::{DynamicStore, ExecutionContext, Frame, Vm, VmOptions};

/// Everything an embedder typically needs.
pub mod prelude {
    pub use crate::Runtime;
    pub use hotscript_compiler::{CompiledMethod, CompilerOptions};
    pub use hotscript_core::{HotscriptError, StaticType, Value};
    pub use hotscript_ir::IrBuilder;
    pub use hotscript_registry::{PropertyDescriptor, PropertyResolver, Resolution};
    pub use hotscript_vm::{Frame, VmOptions};
}
