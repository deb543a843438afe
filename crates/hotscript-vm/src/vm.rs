//! The instruction loop.

use hotscript_compiler::{CompiledMethod, Instruction, Intrinsic, OpCode, Operand};
use hotscript_core::{ArrayRef, RuntimeError, StaticType, Value};
use hotscript_registry::PropertyDescriptor;
use rust_decimal::Decimal;

use crate::intrinsics;
use crate::{ExecutionContext, Frame};

type Result<T> = std::result::Result<T, RuntimeError>;

/// Interpreter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmOptions {
    /// Maximum evaluation stack depth.
    pub max_stack_depth: usize,
}

impl Default for VmOptions {
    fn default() -> Self {
        Self {
            max_stack_depth: 1024,
        }
    }
}

impl VmOptions {
    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }
}

/// Executes compiled methods.
#[derive(Debug, Default, Clone)]
pub struct Vm {
    options: VmOptions,
}

impl Vm {
    pub fn new(options: VmOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &VmOptions {
        &self.options
    }

    /// Run `method` to completion.
    ///
    /// `args` become the method's dynamic-argument container; value types
    /// among them are boxed.
    pub fn execute(
        &self,
        method: &CompiledMethod,
        ctx: &mut ExecutionContext,
        args: Vec<Value>,
    ) -> Result<Frame> {
        tracing::debug!(
            method = %method.name,
            instructions = method.instructions.len(),
            "executing method"
        );

        let arguments = ArrayRef::from_values(
            StaticType::Object,
            args.into_iter().map(Value::boxed).collect(),
        );
        let mut state = State {
            method,
            ctx,
            arguments,
            locals: method.locals.iter().map(|l| default_value(&l.ty)).collect(),
            stack: Vec::new(),
            limit: self.options.max_stack_depth,
        };

        for (offset, instruction) in method.instructions.iter().enumerate() {
            tracing::trace!(offset, %instruction, depth = state.stack.len(), "step");
            state.step(offset, instruction)?;
        }

        let names = method.locals.iter().map(|l| l.name.clone()).collect();
        Ok(Frame::new(names, state.locals, state.stack))
    }
}

/// Zero value a slot starts with.
fn default_value(ty: &StaticType) -> Value {
    match ty {
        StaticType::Int => Value::Int(0),
        StaticType::Long => Value::Long(0),
        StaticType::Decimal => Value::Decimal(Decimal::ZERO),
        StaticType::Bool => Value::Bool(false),
        _ => Value::Null,
    }
}

/// Per-run interpreter state.
struct State<'a> {
    method: &'a CompiledMethod,
    ctx: &'a mut ExecutionContext,
    arguments: ArrayRef,
    locals: Vec<Value>,
    stack: Vec<Value>,
    limit: usize,
}

impl State<'_> {
    fn step(&mut self, offset: usize, instruction: &Instruction) -> Result<()> {
        let operand = instruction.operand.as_ref();
        match instruction.op {
            // =================================================================
            // Constants
            // =================================================================
            OpCode::PushConst => match operand {
                Some(Operand::Constant(constant)) => self.push(constant.to_value(), offset),
                _ => Err(RuntimeError::MissingOperand { offset }),
            },
            OpCode::PushNull => self.push(Value::Null, offset),

            // =================================================================
            // Stack Operations
            // =================================================================
            OpCode::Pop => self.pop(offset).map(drop),
            OpCode::Dup => {
                let top = self
                    .stack
                    .last()
                    .cloned()
                    .ok_or(RuntimeError::StackUnderflow { offset })?;
                self.push(top, offset)
            }
            OpCode::Box => {
                let value = self.pop(offset)?;
                if !value.is_value_type() {
                    return Err(mismatch("value type", &value, offset));
                }
                self.push(value.boxed(), offset)
            }

            // =================================================================
            // Locals and Arguments
            // =================================================================
            OpCode::LoadLocal => {
                let slot = slot_operand(operand, offset)?;
                let value = self
                    .locals
                    .get(slot as usize)
                    .cloned()
                    .ok_or(RuntimeError::InvalidSlot { slot, offset })?;
                self.push(value, offset)
            }
            OpCode::StoreLocal => {
                let slot = slot_operand(operand, offset)?;
                let value = self.pop(offset)?;
                let ty = &self
                    .method
                    .locals
                    .get(slot as usize)
                    .ok_or(RuntimeError::InvalidSlot { slot, offset })?
                    .ty;
                if !value.fits(ty) {
                    return Err(mismatch(&ty.name(), &value, offset));
                }
                self.locals[slot as usize] = value;
                Ok(())
            }
            OpCode::LoadArgument => match operand {
                Some(Operand::Argument(_)) => {
                    self.push(Value::Array(self.arguments.clone()), offset)
                }
                _ => Err(RuntimeError::MissingOperand { offset }),
            },
            OpCode::LoadStore => self.push(Value::Store, offset),

            // =================================================================
            // Calls
            // =================================================================
            OpCode::CallIntrinsic => {
                let intrinsic = instruction
                    .intrinsic()
                    .ok_or(RuntimeError::MissingOperand { offset })?;
                let value = match intrinsic {
                    Intrinsic::StoreGet => {
                        let key = self.pop(offset)?;
                        let target = self.pop(offset)?;
                        intrinsics::store_get(&self.ctx.store, &target, &key, offset)?
                    }
                    Intrinsic::StoreSet => {
                        let value = self.pop(offset)?;
                        let key = self.pop(offset)?;
                        let target = self.pop(offset)?;
                        intrinsics::store_set(&mut self.ctx.store, &target, &key, value, offset)?
                    }
                    _ => {
                        let operand = self.pop(offset)?;
                        intrinsics::force(intrinsic, operand, offset)
                            .ok_or(RuntimeError::MissingOperand { offset })??
                    }
                };
                self.push(value, offset)
            }
            OpCode::CallGetter => {
                let descriptor = accessor(self.method, operand, offset)?;
                let value = descriptor.get(&self.ctx.env).unwrap_or(Value::Null);
                self.push(value, offset)
            }
            OpCode::CallSetter => {
                let descriptor = accessor(self.method, operand, offset)?;
                let value = self.pop(offset)?;
                descriptor.set(&mut self.ctx.env, value)?;
                Ok(())
            }

            // =================================================================
            // Arrays
            // =================================================================
            OpCode::NewArray => {
                let element = match operand {
                    Some(Operand::Type(ty)) => ty.clone(),
                    _ => return Err(RuntimeError::MissingOperand { offset }),
                };
                let count = self.pop_index(offset)?;
                let len = usize::try_from(count).map_err(|_| RuntimeError::IndexOutOfBounds {
                    index: count,
                    len: 0,
                    offset,
                })?;
                let items = vec![default_value(&element); len];
                self.push(Value::Array(ArrayRef::from_values(element, items)), offset)
            }
            OpCode::StoreElement => {
                let value = self.pop(offset)?;
                let index = self.pop_index(offset)?;
                let target = self.pop(offset)?;
                let array = target
                    .as_array()
                    .ok_or_else(|| mismatch("array", &target, offset))?;
                if !value.fits(array.element_type()) {
                    return Err(mismatch(&array.element_type().name(), &value, offset));
                }

                let len = array.len();
                let slot = usize::try_from(index)
                    .ok()
                    .filter(|&i| i < len)
                    .ok_or(RuntimeError::IndexOutOfBounds { index, len, offset })?;
                array.items_mut()[slot] = value;
                Ok(())
            }
        }
    }

    fn push(&mut self, value: Value, offset: usize) -> Result<()> {
        if self.stack.len() >= self.limit {
            return Err(RuntimeError::StackOverflow {
                offset,
                limit: self.limit,
            });
        }
        self.stack.push(value);
        Ok(())
    }

    fn pop(&mut self, offset: usize) -> Result<Value> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow { offset })
    }

    /// Pop an `int` used as a length or index.
    fn pop_index(&mut self, offset: usize) -> Result<i64> {
        match self.pop(offset)? {
            Value::Int(i) => Ok(i64::from(i)),
            other => Err(mismatch("int", &other, offset)),
        }
    }
}

/// Descriptor behind an accessor operand.
fn accessor<'m>(
    method: &'m CompiledMethod,
    operand: Option<&Operand>,
    offset: usize,
) -> Result<&'m PropertyDescriptor> {
    let index = match operand {
        Some(Operand::Accessor(index)) => *index,
        _ => return Err(RuntimeError::MissingOperand { offset }),
    };
    method
        .accessors
        .get(index as usize)
        .ok_or(RuntimeError::UnknownAccessor { index, offset })
}

fn slot_operand(operand: Option<&Operand>, offset: usize) -> Result<u32> {
    match operand {
        Some(Operand::Slot(slot)) => Ok(*slot),
        _ => Err(RuntimeError::MissingOperand { offset }),
    }
}

fn mismatch(expected: &str, actual: &Value, offset: usize) -> RuntimeError {
    RuntimeError::TypeMismatch {
        expected: expected.to_string(),
        actual: actual.type_name(),
        offset,
    }
}
