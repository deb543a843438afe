//! Instructions and their operands.

use std::fmt;

use hotscript_core::{StaticType, Value};
use rust_decimal::Decimal;

use super::OpCode;

/// A literal pushed by `PushConst`.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Int(i32),
    Long(i64),
    Decimal(Decimal),
    String(String),
    Bool(bool),
}

impl Constant {
    /// Static type of the pushed value.
    pub fn static_type(&self) -> StaticType {
        match self {
            Constant::Int(_) => StaticType::Int,
            Constant::Long(_) => StaticType::Long,
            Constant::Decimal(_) => StaticType::Decimal,
            Constant::String(_) => StaticType::String,
            Constant::Bool(_) => StaticType::Bool,
        }
    }

    /// Runtime value of the constant.
    pub fn to_value(&self) -> Value {
        match self {
            Constant::Int(v) => Value::Int(*v),
            Constant::Long(v) => Value::Long(*v),
            Constant::Decimal(v) => Value::Decimal(*v),
            Constant::String(v) => Value::String(v.clone()),
            Constant::Bool(v) => Value::Bool(*v),
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(v) => write!(f, "{}", v),
            Constant::Long(v) => write!(f, "{}L", v),
            Constant::Decimal(v) => write!(f, "{}M", v),
            Constant::String(v) => write!(f, "{:?}", v),
            Constant::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Runtime routines reachable through `CallIntrinsic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// object -> string
    ForceString,
    /// object -> decimal
    ForceDecimal,
    /// object -> long
    ForceLong,
    /// object -> int
    ForceInt,
    /// object -> bool
    ForceBool,
    /// store, key -> object
    StoreGet,
    /// store, key, object -> object
    StoreSet,
}

impl Intrinsic {
    /// The conversion routine producing `target`, if there is one.
    pub fn force_for(target: &StaticType) -> Option<Self> {
        match target {
            StaticType::String => Some(Intrinsic::ForceString),
            StaticType::Decimal => Some(Intrinsic::ForceDecimal),
            StaticType::Long => Some(Intrinsic::ForceLong),
            StaticType::Int => Some(Intrinsic::ForceInt),
            StaticType::Bool => Some(Intrinsic::ForceBool),
            _ => None,
        }
    }

    /// Static type left on the stack by the call.
    pub fn result_type(&self) -> StaticType {
        match self {
            Intrinsic::ForceString => StaticType::String,
            Intrinsic::ForceDecimal => StaticType::Decimal,
            Intrinsic::ForceLong => StaticType::Long,
            Intrinsic::ForceInt => StaticType::Int,
            Intrinsic::ForceBool => StaticType::Bool,
            Intrinsic::StoreGet | Intrinsic::StoreSet => StaticType::Object,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Intrinsic::ForceString => "force_string",
            Intrinsic::ForceDecimal => "force_decimal",
            Intrinsic::ForceLong => "force_long",
            Intrinsic::ForceInt => "force_int",
            Intrinsic::ForceBool => "force_bool",
            Intrinsic::StoreGet => "store_get",
            Intrinsic::StoreSet => "store_set",
        }
    }
}

/// Operand attached to an instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Constant(Constant),
    Slot(u32),
    Argument(u16),
    Type(StaticType),
    Intrinsic(Intrinsic),
    /// Index into the method's accessor table
    Accessor(u32),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Constant(c) => write!(f, "{}", c),
            Operand::Slot(slot) => write!(f, "${}", slot),
            Operand::Argument(index) => write!(f, "arg{}", index),
            Operand::Type(ty) => write!(f, "{}", ty),
            Operand::Intrinsic(intrinsic) => f.write_str(intrinsic.name()),
            Operand::Accessor(index) => write!(f, "@{}", index),
        }
    }
}

/// One `{opcode, operand?}` entry of an instruction stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub op: OpCode,
    pub operand: Option<Operand>,
}

impl Instruction {
    pub fn new(op: OpCode) -> Self {
        Self { op, operand: None }
    }

    pub fn with_operand(op: OpCode, operand: Operand) -> Self {
        Self {
            op,
            operand: Some(operand),
        }
    }

    /// Slot operand, if present.
    pub fn slot(&self) -> Option<u32> {
        match self.operand {
            Some(Operand::Slot(slot)) => Some(slot),
            _ => None,
        }
    }

    /// Intrinsic operand, if present.
    pub fn intrinsic(&self) -> Option<Intrinsic> {
        match self.operand {
            Some(Operand::Intrinsic(intrinsic)) => Some(intrinsic),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operand {
            Some(operand) => write!(f, "{} {}", self.op.name(), operand),
            None => f.write_str(self.op.name()),
        }
    }
}
