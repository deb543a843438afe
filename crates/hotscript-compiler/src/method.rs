//! Method compiler for generating instructions from method bodies.
//!
//! [`MethodCompiler`] walks one method's IR and drives the
//! [`InstructionEmitter`]. Every expression compiles to the static type it
//! leaves on the stack; consumers reconcile that type with the one they need
//! through the coercion engine.
//!
//! Assignment lives in `assign.rs` and array literals in `array.rs`; both are
//! further `impl` blocks on the same compiler.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use hotscript_compiler::{CompilerOptions, MethodCompiler};
//! use hotscript_ir::IrBuilder;
//! use hotscript_registry::{PropertyLookup, PropertyRegistry};
//!
//! let arena = Bump::new();
//! let ir = IrBuilder::new(&arena);
//! let method = ir.method("main", &[ir.declare("x", ir.int(5))]);
//!
//! let registry = PropertyRegistry::with_builtins();
//! let options = CompilerOptions::default();
//! let mut compiler = MethodCompiler::new(method.name, PropertyLookup::new(&registry), &options);
//! compiler.compile_body(method.body).unwrap();
//! let compiled = compiler.finish();
//! assert_eq!(compiled.locals.len(), 1);
//! ```

use hotscript_core::{CompilationError, Span, StaticType};
use hotscript_ir::{Expr, LiteralKind, Stmt, VarDeclStmt};
use hotscript_registry::{PropertyDescriptor, PropertyLookup};

use crate::CompiledMethod;
use crate::bytecode::Intrinsic;
use crate::coercion::find_coercion;
use crate::emit::InstructionEmitter;
use crate::options::CompilerOptions;
use crate::symbols::SymbolTable;

pub(crate) type Result<T> = std::result::Result<T, CompilationError>;

/// Index of the method's sole dynamic-argument container.
pub const ARGUMENT_CONTAINER: u16 = 0;

/// Compiles a single method body to an instruction stream.
pub struct MethodCompiler<'a> {
    /// Method name, for diagnostics
    name: &'a str,
    pub(crate) emitter: InstructionEmitter,
    pub(crate) symbols: SymbolTable,
    pub(crate) lookup: PropertyLookup<'a>,
    pub(crate) options: &'a CompilerOptions,
    /// Descriptors behind every `CallGetter`/`CallSetter` emitted so far
    accessors: Vec<PropertyDescriptor>,
}

impl<'a> MethodCompiler<'a> {
    pub fn new(name: &'a str, lookup: PropertyLookup<'a>, options: &'a CompilerOptions) -> Self {
        let emitter = if options.emit_line_info {
            InstructionEmitter::new()
        } else {
            InstructionEmitter::without_line_info()
        };
        Self {
            name,
            emitter,
            symbols: SymbolTable::new(),
            lookup,
            options,
            accessors: Vec::new(),
        }
    }

    /// Compile every statement of the body, in order.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile_body(&mut self, body: &[Stmt<'_>]) -> Result<()> {
        tracing::debug!(method = self.name, statements = body.len(), "compiling method");
        for stmt in body {
            self.compile_stmt(stmt)?;
        }
        Ok(())
    }

    /// Finish compilation, handing over the stream and slot layout.
    pub fn finish(self) -> CompiledMethod {
        let instructions = self.emitter.finish();
        tracing::debug!(
            method = self.name,
            instructions = instructions.len(),
            locals = self.symbols.frame_size(),
            "compiled method"
        );
        CompiledMethod {
            name: self.name.to_string(),
            instructions,
            locals: self.symbols.into_locals(),
            accessors: self.accessors,
        }
    }

    // ==========================================================================
    // Statements
    // ==========================================================================

    pub fn compile_stmt(&mut self, stmt: &Stmt<'_>) -> Result<()> {
        self.emitter.set_line(stmt.span().line);
        tracing::trace!(method = self.name, node = stmt.kind_name(), "statement");

        match stmt {
            Stmt::VarDecl(decl) => self.compile_var_decl(decl),
            Stmt::Assign(assign) => {
                let result = self.compile_assignment(assign, AssignForm::Statement)?;
                if !result.is_void() {
                    self.emitter.emit_pop();
                }
                Ok(())
            }
            Stmt::Expr(stmt) => {
                let result = self.compile_expr(stmt.expr)?;
                if !result.is_void() {
                    self.emitter.emit_pop();
                }
                Ok(())
            }
        }
    }

    fn compile_var_decl(&mut self, decl: &VarDeclStmt<'_>) -> Result<()> {
        let ty = self.compile_expr(decl.init)?;
        let slot = self.symbols.declare(decl.name, ty, decl.span)?.slot;
        self.emitter.emit_set_local(slot);
        Ok(())
    }

    // ==========================================================================
    // Expressions
    // ==========================================================================

    /// Compile an expression, returning the static type left on the stack.
    pub fn compile_expr(&mut self, expr: &Expr<'_>) -> Result<StaticType> {
        tracing::trace!(method = self.name, node = expr.kind_name(), "expression");

        match expr {
            Expr::Literal(lit) => Ok(self.compile_literal(&lit.kind)),
            Expr::Variable(var) => {
                let local = self.symbols.lookup(var.name, var.span)?;
                let (slot, ty) = (local.slot, local.ty.clone());
                self.emitter.emit_get_local(slot);
                Ok(ty)
            }
            Expr::Argument(_) => {
                self.emitter.emit_get_argument(ARGUMENT_CONTAINER);
                Ok(StaticType::array_of(StaticType::Object))
            }
            Expr::IndexedAccess(access) => {
                self.emitter.emit_load_store();
                self.compile_store_key(access.index)?;
                self.emitter.emit_intrinsic(Intrinsic::StoreGet);
                Ok(StaticType::Object)
            }
            Expr::Property(prop) => {
                match self.lookup.resolve_getter(prop.name) {
                    Some(descriptor) => {
                        let index = self.record_accessor(descriptor, prop.span, "PropertyReference")?;
                        self.emitter.emit_call_getter(index);
                    }
                    None => {
                        tracing::debug!(property = prop.name, "no getter; reading null");
                        self.emitter.emit_null();
                    }
                }
                Ok(StaticType::Object)
            }
            Expr::ArrayCreate(array) => self.compile_array_create(array),
            Expr::Assign(assign) => self.compile_assignment(assign, AssignForm::Expression),
        }
    }

    fn compile_literal(&mut self, kind: &LiteralKind<'_>) -> StaticType {
        match *kind {
            LiteralKind::Int(v) => {
                self.emitter.emit_int(v);
                StaticType::Int
            }
            LiteralKind::Long(v) => {
                self.emitter.emit_long(v);
                StaticType::Long
            }
            LiteralKind::Decimal(v) => {
                self.emitter.emit_decimal(v);
                StaticType::Decimal
            }
            LiteralKind::String(v) => {
                self.emitter.emit_string(v);
                StaticType::String
            }
            LiteralKind::Bool(v) => {
                self.emitter.emit_bool(v);
                StaticType::Bool
            }
            LiteralKind::Null => {
                self.emitter.emit_null();
                StaticType::Object
            }
        }
    }

    /// Compile a dynamic-store key, coerced to string.
    pub(crate) fn compile_store_key(&mut self, key: &Expr<'_>) -> Result<()> {
        let ty = self.compile_expr(key)?;
        self.coerce(&ty, &StaticType::String, key.span())
    }

    // ==========================================================================
    // Helpers
    // ==========================================================================

    /// Emit the coercion from `top` to `wanted`.
    pub(crate) fn coerce(&mut self, top: &StaticType, wanted: &StaticType, span: Span) -> Result<()> {
        let coercion = find_coercion(top, wanted, span)?;
        self.emitter.emit_all(coercion.instructions());
        Ok(())
    }

    /// Index of `descriptor` in the accessor table, adding it if new.
    ///
    /// Entries are matched by accessor identity, not by name: a resolver may
    /// serve a descriptor named like a registry property.
    pub(crate) fn record_accessor(
        &mut self,
        descriptor: PropertyDescriptor,
        span: Span,
        node: &'static str,
    ) -> Result<u32> {
        let index = match self.accessors.iter().position(|d| d.shares_accessors(&descriptor)) {
            Some(index) => index,
            None => {
                self.accessors.push(descriptor);
                self.accessors.len() - 1
            }
        };
        u32::try_from(index).map_err(|_| CompilationError::LimitExceeded {
            what: "property accessors",
            limit: u32::MAX as usize,
            span,
            node,
        })
    }
}

/// Whether an assignment's value is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignForm {
    /// Value discarded; plain locals leave nothing behind.
    Statement,
    /// Value left on the stack.
    Expression,
}
