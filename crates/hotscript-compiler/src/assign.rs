//! Assignment compilation.
//!
//! Routes an assignment by the variant of its left-hand node:
//!
//! | Target | Sequence | Result |
//! |---|---|---|
//! | variable | rhs, coerce to slot type, (`Dup`), `StoreLocal` | void / slot type |
//! | indexed access | `LoadStore`, key as string, rhs as object, `StoreSet` | object |
//! | property with setter | rhs as object, `Dup`, `CallSetter` | object |
//! | property without setter | `PushNull` | object |
//!
//! Every other target is unassignable.

use hotscript_core::{CompilationError, StaticType};
use hotscript_ir::{AssignExpr, Expr, IndexedAccessExpr, PropertyRef, VariableRef};

use crate::bytecode::Intrinsic;
use crate::method::{AssignForm, MethodCompiler, Result};

impl<'a> MethodCompiler<'a> {
    /// Compile an assignment, returning the static type it leaves behind.
    pub fn compile_assignment(&mut self, assign: &AssignExpr<'_>, form: AssignForm) -> Result<StaticType> {
        match assign.target {
            Expr::Variable(var) => self.assign_variable(var, assign.value, form),
            Expr::IndexedAccess(access) => self.assign_indexed(access, assign.value),
            Expr::Property(prop) => self.assign_property(prop, assign.value),
            other => Err(CompilationError::UnassignableTarget {
                span: other.span(),
                node: other.kind_name(),
            }),
        }
    }

    fn assign_variable(
        &mut self,
        var: &VariableRef<'_>,
        value: &Expr<'_>,
        form: AssignForm,
    ) -> Result<StaticType> {
        let implicit = &self.options.implicit_local_type;
        let local = self.symbols.declare_or_reuse(var.name, implicit, var.span);
        let (slot, slot_ty) = (local.slot, local.ty.clone());

        let top = self.compile_expr(value)?;
        self.coerce(&top, &slot_ty, value.span())?;

        match form {
            AssignForm::Statement => {
                self.emitter.emit_set_local(slot);
                Ok(StaticType::Void)
            }
            AssignForm::Expression => {
                self.emitter.emit_dup();
                self.emitter.emit_set_local(slot);
                Ok(slot_ty)
            }
        }
    }

    /// The base names the dynamic store and is not evaluated.
    fn assign_indexed(&mut self, access: &IndexedAccessExpr<'_>, value: &Expr<'_>) -> Result<StaticType> {
        self.emitter.emit_load_store();
        self.compile_store_key(access.index)?;

        let top = self.compile_expr(value)?;
        self.coerce(&top, &StaticType::Object, value.span())?;

        self.emitter.emit_intrinsic(Intrinsic::StoreSet);
        Ok(StaticType::Object)
    }

    fn assign_property(&mut self, prop: &PropertyRef<'_>, value: &Expr<'_>) -> Result<StaticType> {
        let Some(descriptor) = self.lookup.resolve_setter(prop.name) else {
            tracing::debug!(property = prop.name, "no setter; assignment yields null");
            self.emitter.emit_null();
            return Ok(StaticType::Object);
        };

        let top = self.compile_expr(value)?;
        self.coerce(&top, &StaticType::Object, value.span())?;

        let index = self.record_accessor(descriptor, prop.span, "PropertyReference")?;
        self.emitter.emit_dup();
        self.emitter.emit_call_setter(index);
        Ok(StaticType::Object)
    }
}
