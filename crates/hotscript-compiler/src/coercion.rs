//! Type coercion engine.
//!
//! Decides which instructions turn the static type on top of the stack into
//! the static type a consumer requires. Rules are checked in this order:
//!
//! 1. Identity (exact match)
//! 2. Scalar targets (`string`, `decimal`, `long`, `int`, `bool`): box if the
//!    top is a value type, then call the matching `force_*` intrinsic
//! 3. `object`: box if the top is a value type
//! 4. `object[]` from any array: reference pass-through
//!
//! Anything else is an internal failure of the compiler.

use hotscript_core::{CompilationError, Span, StaticType};

use crate::bytecode::{Instruction, Intrinsic, OpCode, Operand};

/// A coercion from one static type to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Coercion {
    pub kind: CoercionKind,
    /// Static type left on the stack once applied.
    pub target: StaticType,
}

/// The kind of coercion being performed.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercionKind {
    /// No conversion needed.
    Identity,

    /// Canonical conversion through a runtime routine.
    Force {
        /// Value type to box before the call, if the top is one.
        boxed: Option<StaticType>,
        /// Conversion routine.
        routine: Intrinsic,
    },

    /// Box a value type as `object`.
    Box {
        /// The value type being boxed.
        from: StaticType,
    },

    /// Reference conversion of any array to `object[]`.
    ArrayPassThrough,
}

impl Coercion {
    pub fn is_identity(&self) -> bool {
        matches!(self.kind, CoercionKind::Identity)
    }

    /// The instructions implementing this coercion.
    pub fn instructions(&self) -> Vec<Instruction> {
        match &self.kind {
            CoercionKind::Identity | CoercionKind::ArrayPassThrough => Vec::new(),
            CoercionKind::Box { from } => vec![box_instruction(from)],
            CoercionKind::Force { boxed, routine } => {
                let mut out = Vec::with_capacity(2);
                if let Some(from) = boxed {
                    out.push(box_instruction(from));
                }
                out.push(Instruction::with_operand(
                    OpCode::CallIntrinsic,
                    Operand::Intrinsic(*routine),
                ));
                out
            }
        }
    }
}

fn box_instruction(from: &StaticType) -> Instruction {
    Instruction::with_operand(OpCode::Box, Operand::Type(from.clone()))
}

/// Find the coercion from `top` to `wanted`.
///
/// `span` locates the consumer for the internal error raised when no rule
/// applies.
pub fn find_coercion(
    top: &StaticType,
    wanted: &StaticType,
    span: Span,
) -> Result<Coercion, CompilationError> {
    let kind = if top == wanted {
        CoercionKind::Identity
    } else if top.is_void() {
        return Err(unresolved(top, wanted, span));
    } else if let Some(routine) = Intrinsic::force_for(wanted) {
        CoercionKind::Force {
            boxed: top.is_value_type().then(|| top.clone()),
            routine,
        }
    } else if *wanted == StaticType::Object {
        if top.is_value_type() {
            CoercionKind::Box { from: top.clone() }
        } else {
            CoercionKind::Identity
        }
    } else if wanted.element_type() == Some(&StaticType::Object) && top.is_array() {
        CoercionKind::ArrayPassThrough
    } else {
        return Err(unresolved(top, wanted, span));
    };

    Ok(Coercion {
        kind,
        target: wanted.clone(),
    })
}

fn unresolved(top: &StaticType, wanted: &StaticType, span: Span) -> CompilationError {
    tracing::error!(from = %top, to = %wanted, %span, "can not force top of stack");
    CompilationError::UnresolvedCoercion {
        from: top.clone(),
        to: wanted.clone(),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ops(top: StaticType, wanted: StaticType) -> Vec<OpCode> {
        find_coercion(&top, &wanted, Span::default())
            .unwrap()
            .instructions()
            .iter()
            .map(|i| i.op)
            .collect()
    }

    fn all_types() -> Vec<StaticType> {
        vec![
            StaticType::String,
            StaticType::Decimal,
            StaticType::Long,
            StaticType::Int,
            StaticType::Bool,
            StaticType::Object,
            StaticType::array_of(StaticType::Object),
            StaticType::array_of(StaticType::Int),
        ]
    }

    #[test]
    fn identity_is_empty_for_every_type() {
        for ty in all_types().into_iter().chain([StaticType::Void]) {
            let coercion = find_coercion(&ty, &ty, Span::default()).unwrap();
            assert!(coercion.is_identity(), "{ty}");
            assert!(coercion.instructions().is_empty(), "{ty}");
        }
    }

    #[test]
    fn value_type_to_string_boxes_then_forces() {
        let coercion = find_coercion(&StaticType::Int, &StaticType::String, Span::default()).unwrap();
        assert_eq!(
            coercion.instructions(),
            vec![
                Instruction::with_operand(OpCode::Box, Operand::Type(StaticType::Int)),
                Instruction::with_operand(
                    OpCode::CallIntrinsic,
                    Operand::Intrinsic(Intrinsic::ForceString)
                ),
            ]
        );
        assert_eq!(coercion.target, StaticType::String);
    }

    #[test]
    fn reference_to_scalar_forces_without_boxing() {
        assert_eq!(
            ops(StaticType::String, StaticType::Int),
            vec![OpCode::CallIntrinsic]
        );
        assert_eq!(
            ops(StaticType::Object, StaticType::Bool),
            vec![OpCode::CallIntrinsic]
        );
    }

    #[test]
    fn value_type_pairs_always_box_first() {
        assert_eq!(
            ops(StaticType::Long, StaticType::Int),
            vec![OpCode::Box, OpCode::CallIntrinsic]
        );
        assert_eq!(
            ops(StaticType::Bool, StaticType::Decimal),
            vec![OpCode::Box, OpCode::CallIntrinsic]
        );
    }

    #[test]
    fn to_object() {
        assert_eq!(ops(StaticType::Decimal, StaticType::Object), vec![OpCode::Box]);
        assert!(ops(StaticType::String, StaticType::Object).is_empty());
        assert!(ops(StaticType::array_of(StaticType::Int), StaticType::Object).is_empty());
    }

    #[test]
    fn arrays_pass_through_to_object_array() {
        let coercion = find_coercion(
            &StaticType::array_of(StaticType::String),
            &StaticType::array_of(StaticType::Object),
            Span::default(),
        )
        .unwrap();
        assert_eq!(coercion.kind, CoercionKind::ArrayPassThrough);
        assert!(coercion.instructions().is_empty());
    }

    #[test]
    fn no_rule_is_internal_error() {
        let err = find_coercion(
            &StaticType::String,
            &StaticType::array_of(StaticType::Int),
            Span::new(2, 1, 3),
        )
        .unwrap_err();
        assert!(err.is_internal());
        assert_eq!(err.span(), Span::new(2, 1, 3));
    }

    #[test]
    fn void_cannot_be_coerced() {
        let err = find_coercion(&StaticType::Void, &StaticType::Object, Span::default()).unwrap_err();
        assert!(matches!(err, CompilationError::UnresolvedCoercion { .. }));
    }

    #[test]
    fn scalar_targets_always_resolve() {
        let scalars = [
            StaticType::String,
            StaticType::Decimal,
            StaticType::Long,
            StaticType::Int,
            StaticType::Bool,
        ];
        for top in all_types() {
            for wanted in &scalars {
                let coercion = find_coercion(&top, wanted, Span::default()).unwrap();
                assert_eq!(&coercion.target, wanted);
            }
        }
    }
}
