//! Hotscript method-body compiler.
//!
//! Lowers dynamically-typed IR into instructions for a statically-typed stack
//! machine, inserting coercions wherever an expression's static type differs
//! from what its consumer requires.
//!
//! ## Modules
//!
//! - [`bytecode`]: Instruction types (OpCode, Instruction, InstructionStream)
//! - [`coercion`]: Coercion rules between static types
//! - [`emit`]: Low-level instruction emitter
//! - [`symbols`]: Flat per-method symbol table
//! - [`options`]: Compiler configuration
//!
//! Each method is compiled independently with a fresh symbol table and
//! instruction stream. A failing method produces no output.

mod array;
mod assign;
pub mod bytecode;
pub mod coercion;
pub mod emit;
mod method;
pub mod options;
pub mod symbols;

pub use bytecode::{Constant, Instruction, InstructionStream, Intrinsic, OpCode, Operand};
pub use coercion::{Coercion, CoercionKind, find_coercion};
pub use emit::InstructionEmitter;
pub use method::{ARGUMENT_CONTAINER, AssignForm, MethodCompiler};
pub use options::CompilerOptions;
pub use symbols::{LocalSlot, SymbolTable};

// Re-export CompilationError from core for convenience
pub use hotscript_core::CompilationError;

use hotscript_ir::MethodDecl;
use hotscript_registry::{PropertyDescriptor, PropertyLookup};

/// A compiled method.
#[derive(Debug, Clone)]
pub struct CompiledMethod {
    /// Method name.
    pub name: String,
    /// Compiled instructions.
    pub instructions: InstructionStream,
    /// Slot layout, ordered by slot.
    pub locals: Vec<LocalSlot>,
    /// Descriptors behind `CallGetter`/`CallSetter`, indexed by their
    /// `Accessor` operand.
    pub accessors: Vec<PropertyDescriptor>,
}

impl CompiledMethod {
    /// Number of local slots the method needs.
    pub fn frame_size(&self) -> usize {
        self.locals.len()
    }

    pub fn local(&self, name: &str) -> Option<&LocalSlot> {
        self.locals.iter().find(|local| local.name == name)
    }
}

/// Result of compiling several methods.
#[derive(Debug, Default)]
pub struct CompilationResult {
    /// Methods that compiled.
    pub methods: Vec<CompiledMethod>,
    /// One error per method that failed.
    pub errors: Vec<CompilationError>,
}

impl CompilationResult {
    /// Check if compilation succeeded (no errors).
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn method(&self, name: &str) -> Option<&CompiledMethod> {
        self.methods.iter().find(|method| method.name == name)
    }
}

/// Compile one method.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_method(
    method: &MethodDecl<'_>,
    lookup: PropertyLookup<'_>,
    options: &CompilerOptions,
) -> Result<CompiledMethod, CompilationError> {
    let mut compiler = MethodCompiler::new(method.name, lookup, options);
    compiler.compile_body(method.body)?;
    Ok(compiler.finish())
}

/// Compile each method independently, collecting successes and failures.
pub fn compile_unit(
    methods: &[MethodDecl<'_>],
    lookup: PropertyLookup<'_>,
    options: &CompilerOptions,
) -> CompilationResult {
    let mut result = CompilationResult::default();
    for method in methods {
        match compile_method(method, lookup, options) {
            Ok(compiled) => result.methods.push(compiled),
            Err(err) => {
                if err.is_internal() {
                    tracing::error!(method = method.name, %err, "internal compiler error");
                } else {
                    tracing::debug!(method = method.name, %err, "method failed to compile");
                }
                result.errors.push(err);
            }
        }
    }
    result
}
