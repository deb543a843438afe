//! Array literal compilation.

use hotscript_core::{CompilationError, Span, StaticType};
use hotscript_ir::ArrayCreateExpr;

use crate::method::{MethodCompiler, Result};

impl<'a> MethodCompiler<'a> {
    /// Allocate a typed array and fill it element by element.
    ///
    /// Emits the count and `NewArray`, then for each initializer in order:
    /// `Dup`, index, value coerced to the element type, `StoreElement`.
    pub fn compile_array_create(&mut self, array: &ArrayCreateExpr<'_>) -> Result<StaticType> {
        let element = StaticType::from_name(array.element_type).ok_or_else(|| {
            CompilationError::UnknownType {
                name: array.element_type.to_string(),
                span: array.span,
                node: "ArrayCreate",
            }
        })?;

        // Array lengths and indices are `int` on the machine.
        let count = machine_int(array.initializers.len(), array.span)?;
        self.emitter.emit_int(count);
        self.emitter.emit_new_array(element.clone());

        for (index, init) in (0..count).zip(array.initializers.iter()) {
            self.emitter.emit_dup();
            self.emitter.emit_int(index);
            let top = self.compile_expr(init)?;
            self.coerce(&top, &element, init.span())?;
            self.emitter.emit_store_element();
        }

        Ok(StaticType::array_of(element))
    }
}

fn machine_int(count: usize, span: Span) -> Result<i32> {
    i32::try_from(count).map_err(|_| CompilationError::LimitExceeded {
        what: "array initializers",
        limit: i32::MAX as usize,
        span,
        node: "ArrayCreate",
    })
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use hotscript_core::Span;
    use hotscript_ir::{Expr, IrBuilder};
    use hotscript_registry::{PropertyLookup, PropertyRegistry};

    use crate::bytecode::{Constant, OpCode, Operand};
    use crate::{CompilerOptions, MethodCompiler};

    use super::*;

    fn compile_array<'ast>(ir: IrBuilder<'ast>, ty: &str, items: &[Expr<'ast>]) -> Result<crate::CompiledMethod> {
        let registry = PropertyRegistry::new();
        let options = CompilerOptions::default();
        let body = [ir.declare("a", ir.array(ty, items))];
        let mut compiler = MethodCompiler::new("arrays", PropertyLookup::new(&registry), &options);
        compiler.compile_body(&body)?;
        Ok(compiler.finish())
    }

    #[test]
    fn object_array_boxes_value_types() {
        let arena = Bump::new();
        let ir = IrBuilder::new(&arena);
        let method = compile_array(ir, "object", &[ir.int(1), ir.string("two")]).unwrap();

        method.instructions.assert_opcodes(&[
            OpCode::PushConst,
            OpCode::NewArray,
            OpCode::Dup,
            OpCode::PushConst,
            OpCode::PushConst,
            OpCode::Box,
            OpCode::StoreElement,
            OpCode::Dup,
            OpCode::PushConst,
            OpCode::PushConst,
            OpCode::StoreElement,
            OpCode::StoreLocal,
        ]);
        assert_eq!(
            method.locals[0].ty,
            StaticType::array_of(StaticType::Object)
        );
    }

    #[test]
    fn indices_ascend_from_zero() {
        let arena = Bump::new();
        let ir = IrBuilder::new(&arena);
        let method = compile_array(ir, "int", &[ir.int(7), ir.int(8), ir.int(9)]).unwrap();

        let indices: Vec<_> = method
            .instructions
            .iter()
            .zip(method.instructions.iter().skip(1))
            .filter(|(prev, _)| prev.op == OpCode::Dup)
            .filter_map(|(_, next)| match &next.operand {
                Some(Operand::Constant(Constant::Int(i))) => Some(*i),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(
            method.instructions.get(0).and_then(|i| i.operand.clone()),
            Some(Operand::Constant(Constant::Int(3)))
        );
    }

    #[test]
    fn elements_are_coerced_to_element_type() {
        let arena = Bump::new();
        let ir = IrBuilder::new(&arena);
        let method = compile_array(ir, "string", &[ir.int(1)]).unwrap();

        method.instructions.assert_contains_opcodes(&[
            OpCode::NewArray,
            OpCode::PushConst,
            OpCode::Box,
            OpCode::CallIntrinsic,
            OpCode::StoreElement,
        ]);
    }

    #[test]
    fn empty_literal() {
        let arena = Bump::new();
        let ir = IrBuilder::new(&arena);
        let method = compile_array(ir, "System.Object", &[]).unwrap();

        method
            .instructions
            .assert_opcodes(&[OpCode::PushConst, OpCode::NewArray, OpCode::StoreLocal]);
    }

    #[test]
    fn unknown_element_type() {
        let arena = Bump::new();
        let ir = IrBuilder::new(&arena).at(Span::new(2, 5, 9));
        let err = compile_array(ir, "Widget", &[ir.int(1)]).unwrap_err();

        assert_eq!(
            err,
            CompilationError::UnknownType {
                name: "Widget".to_string(),
                span: Span::new(2, 5, 9),
                node: "ArrayCreate",
            }
        );
    }

    #[test]
    fn oversized_literal_is_rejected_instead_of_wrapping() {
        let span = Span::new(4, 1, 3);
        assert_eq!(machine_int(0, span), Ok(0));
        assert_eq!(machine_int(i32::MAX as usize, span), Ok(i32::MAX));

        let err = machine_int(i32::MAX as usize + 1, span).unwrap_err();
        assert_eq!(
            err,
            CompilationError::LimitExceeded {
                what: "array initializers",
                limit: i32::MAX as usize,
                span,
                node: "ArrayCreate",
            }
        );
    }
}
