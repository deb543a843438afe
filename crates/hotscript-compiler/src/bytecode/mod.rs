//! Instruction types for the hotscript stack machine.
//!
//! - [`OpCode`] - The instruction set
//! - [`Instruction`] and [`Operand`] - One `{opcode, operand?}` entry
//! - [`Constant`] - Literal operands
//! - [`Intrinsic`] - Runtime routines reachable through `CallIntrinsic`
//! - [`InstructionStream`] - The ordered output of one method

mod instruction;
mod opcode;
mod stream;

pub use instruction::{Constant, Instruction, Intrinsic, Operand};
pub use opcode::OpCode;
pub use stream::InstructionStream;
