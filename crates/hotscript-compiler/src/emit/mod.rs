//! Instruction emitter for the hotscript compiler.
//!
//! The [`InstructionEmitter`] is the low-level append API the method compiler
//! drives. It knows nothing about IR nodes or types; it only builds an
//! [`InstructionStream`] and stamps each instruction with the current line.
//!
//! # Example
//!
//! ```
//! use hotscript_compiler::bytecode::OpCode;
//! use hotscript_compiler::emit::InstructionEmitter;
//!
//! let mut emitter = InstructionEmitter::new();
//! emitter.set_line(1);
//! emitter.emit_int(5);
//! emitter.emit_set_local(0);
//!
//! let stream = emitter.finish();
//! stream.assert_opcodes(&[OpCode::PushConst, OpCode::StoreLocal]);
//! ```

use hotscript_core::StaticType;
use rust_decimal::Decimal;

use crate::bytecode::{Constant, Instruction, InstructionStream, Intrinsic, OpCode, Operand};

/// Emits instructions for a single method.
#[derive(Debug)]
pub struct InstructionEmitter {
    stream: InstructionStream,

    /// Current source line for debug info
    current_line: u32,

    /// When false every instruction is recorded against line 0.
    record_lines: bool,
}

impl Default for InstructionEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionEmitter {
    pub fn new() -> Self {
        Self {
            stream: InstructionStream::new(),
            current_line: 1,
            record_lines: true,
        }
    }

    /// An emitter that leaves the line table zeroed.
    pub fn without_line_info() -> Self {
        Self {
            record_lines: false,
            ..Self::new()
        }
    }

    /// Set current source line for debug info.
    pub fn set_line(&mut self, line: u32) {
        self.current_line = line;
    }

    pub fn current_line(&self) -> u32 {
        self.current_line
    }

    fn line(&self) -> u32 {
        if self.record_lines {
            self.current_line
        } else {
            0
        }
    }

    // ==========================================================================
    // Basic Emission
    // ==========================================================================

    /// Emit a single opcode with no operand.
    pub fn emit(&mut self, op: OpCode) {
        let line = self.line();
        self.stream.push(Instruction::new(op), line);
    }

    /// Emit an opcode with its operand.
    pub fn emit_with(&mut self, op: OpCode, operand: Operand) {
        let line = self.line();
        self.stream.push(Instruction::with_operand(op, operand), line);
    }

    /// Append a prepared run of instructions, such as a coercion sequence.
    pub fn emit_all(&mut self, instructions: impl IntoIterator<Item = Instruction>) {
        let line = self.line();
        self.stream.extend(instructions, line);
    }

    // ==========================================================================
    // Constants
    // ==========================================================================

    pub fn emit_constant(&mut self, constant: Constant) {
        self.emit_with(OpCode::PushConst, Operand::Constant(constant));
    }

    pub fn emit_int(&mut self, value: i32) {
        self.emit_constant(Constant::Int(value));
    }

    pub fn emit_long(&mut self, value: i64) {
        self.emit_constant(Constant::Long(value));
    }

    pub fn emit_decimal(&mut self, value: Decimal) {
        self.emit_constant(Constant::Decimal(value));
    }

    pub fn emit_string(&mut self, value: &str) {
        self.emit_constant(Constant::String(value.to_string()));
    }

    pub fn emit_bool(&mut self, value: bool) {
        self.emit_constant(Constant::Bool(value));
    }

    pub fn emit_null(&mut self) {
        self.emit(OpCode::PushNull);
    }

    // ==========================================================================
    // Locals and Arguments
    // ==========================================================================

    pub fn emit_get_local(&mut self, slot: u32) {
        self.emit_with(OpCode::LoadLocal, Operand::Slot(slot));
    }

    pub fn emit_set_local(&mut self, slot: u32) {
        self.emit_with(OpCode::StoreLocal, Operand::Slot(slot));
    }

    pub fn emit_get_argument(&mut self, index: u16) {
        self.emit_with(OpCode::LoadArgument, Operand::Argument(index));
    }

    pub fn emit_load_store(&mut self) {
        self.emit(OpCode::LoadStore);
    }

    // ==========================================================================
    // Calls
    // ==========================================================================

    pub fn emit_intrinsic(&mut self, intrinsic: Intrinsic) {
        self.emit_with(OpCode::CallIntrinsic, Operand::Intrinsic(intrinsic));
    }

    pub fn emit_call_getter(&mut self, accessor: u32) {
        self.emit_with(OpCode::CallGetter, Operand::Accessor(accessor));
    }

    pub fn emit_call_setter(&mut self, accessor: u32) {
        self.emit_with(OpCode::CallSetter, Operand::Accessor(accessor));
    }

    // ==========================================================================
    // Arrays
    // ==========================================================================

    /// Emit array allocation. The length must already be on the stack.
    pub fn emit_new_array(&mut self, element: StaticType) {
        self.emit_with(OpCode::NewArray, Operand::Type(element));
    }

    pub fn emit_store_element(&mut self) {
        self.emit(OpCode::StoreElement);
    }

    // ==========================================================================
    // Stack Operations
    // ==========================================================================

    pub fn emit_pop(&mut self) {
        self.emit(OpCode::Pop);
    }

    pub fn emit_dup(&mut self) {
        self.emit(OpCode::Dup);
    }

    // ==========================================================================
    // Finalization
    // ==========================================================================

    /// Finish emission and return the instruction stream.
    pub fn finish(self) -> InstructionStream {
        self.stream
    }

    /// Number of instructions emitted so far.
    pub fn len(&self) -> usize {
        self.stream.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_constant() {
        let mut emitter = InstructionEmitter::new();
        emitter.emit_int(42);
        let stream = emitter.finish();

        assert_eq!(
            stream.get(0),
            Some(&Instruction::with_operand(
                OpCode::PushConst,
                Operand::Constant(Constant::Int(42))
            ))
        );
    }

    #[test]
    fn emit_null_has_no_operand() {
        let mut emitter = InstructionEmitter::new();
        emitter.emit_null();
        let stream = emitter.finish();
        assert_eq!(stream.get(0), Some(&Instruction::new(OpCode::PushNull)));
    }

    #[test]
    fn lines_follow_set_line() {
        let mut emitter = InstructionEmitter::new();
        emitter.set_line(3);
        emitter.emit_int(1);
        emitter.set_line(7);
        emitter.emit_set_local(0);
        let stream = emitter.finish();

        assert_eq!(stream.lines(), &[3, 7]);
    }

    #[test]
    fn line_info_can_be_disabled() {
        let mut emitter = InstructionEmitter::without_line_info();
        emitter.set_line(9);
        emitter.emit_int(1);
        emitter.emit_pop();
        assert_eq!(emitter.len(), 2);
        assert_eq!(emitter.finish().lines(), &[0, 0]);
    }

    #[test]
    fn locals_and_arguments() {
        let mut emitter = InstructionEmitter::new();
        emitter.emit_get_argument(0);
        emitter.emit_get_local(1);
        emitter.emit_set_local(2);
        let stream = emitter.finish();

        stream.assert_opcodes(&[OpCode::LoadArgument, OpCode::LoadLocal, OpCode::StoreLocal]);
        assert_eq!(
            stream.operands(),
            vec![&Operand::Argument(0), &Operand::Slot(1), &Operand::Slot(2)]
        );
    }

    #[test]
    fn emit_all_appends_in_order() {
        let mut emitter = InstructionEmitter::new();
        emitter.emit_all([
            Instruction::with_operand(OpCode::Box, Operand::Type(StaticType::Int)),
            Instruction::with_operand(
                OpCode::CallIntrinsic,
                Operand::Intrinsic(Intrinsic::ForceString),
            ),
        ]);
        emitter
            .finish()
            .assert_opcodes(&[OpCode::Box, OpCode::CallIntrinsic]);
    }

    #[test]
    fn array_operations() {
        let mut emitter = InstructionEmitter::new();
        emitter.emit_int(2);
        emitter.emit_new_array(StaticType::Object);
        emitter.emit_dup();
        emitter.emit_int(0);
        emitter.emit_null();
        emitter.emit_store_element();
        emitter.finish().assert_opcodes(&[
            OpCode::PushConst,
            OpCode::NewArray,
            OpCode::Dup,
            OpCode::PushConst,
            OpCode::PushNull,
            OpCode::StoreElement,
        ]);
    }
}
