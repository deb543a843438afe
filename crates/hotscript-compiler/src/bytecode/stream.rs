//! Instruction stream for compiled methods.
//!
//! An `InstructionStream` holds the instructions for a single method body,
//! along with line number information for debugging.

use std::fmt::Write as _;

use super::{Instruction, OpCode, Operand};

/// Ordered, append-only instructions for one method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstructionStream {
    instructions: Vec<Instruction>,
    /// Line numbers for debugging (parallel to `instructions`).
    lines: Vec<u32>,
}

impl InstructionStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction recorded against `line`.
    pub fn push(&mut self, instruction: Instruction, line: u32) {
        self.instructions.push(instruction);
        self.lines.push(line);
    }

    /// Append a run of instructions, all recorded against `line`.
    pub fn extend<I>(&mut self, instructions: I, line: u32)
    where
        I: IntoIterator<Item = Instruction>,
    {
        for instruction in instructions {
            self.push(instruction, line);
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, offset: usize) -> Option<&Instruction> {
        self.instructions.get(offset)
    }

    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    pub fn line_at(&self, offset: usize) -> Option<u32> {
        self.lines.get(offset).copied()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    /// All opcodes, without operands.
    pub fn opcodes(&self) -> Vec<OpCode> {
        self.instructions.iter().map(|i| i.op).collect()
    }

    /// All operands in order, skipping operand-less instructions.
    pub fn operands(&self) -> Vec<&Operand> {
        self.instructions
            .iter()
            .filter_map(|i| i.operand.as_ref())
            .collect()
    }

    /// Human-readable listing, one instruction per line.
    pub fn disassemble(&self) -> String {
        let mut out = String::new();
        for (offset, (instruction, line)) in self.instructions.iter().zip(&self.lines).enumerate() {
            let _ = writeln!(out, "{:04} {:>4} {}", offset, line, instruction);
        }
        out
    }

    /// Check that this stream contains exactly the given opcode sequence.
    ///
    /// Ignores operands. Panics with a descriptive message on mismatch.
    #[track_caller]
    pub fn assert_opcodes(&self, expected: &[OpCode]) {
        let actual = self.opcodes();
        assert_eq!(
            actual,
            expected,
            "Instruction mismatch.\nExpected: {:?}\nActual:   {:?}",
            expected.iter().map(|op| op.name()).collect::<Vec<_>>(),
            actual.iter().map(|op| op.name()).collect::<Vec<_>>(),
        );
    }

    /// Check that the given opcodes appear in order, not necessarily contiguous.
    #[track_caller]
    pub fn assert_contains_opcodes(&self, expected: &[OpCode]) {
        let actual = self.opcodes();
        let mut expected_iter = expected.iter().peekable();

        for op in &actual {
            if expected_iter.peek() == Some(&op) {
                expected_iter.next();
            }
        }

        if expected_iter.peek().is_some() {
            let remaining: Vec<_> = expected_iter.map(|op| op.name()).collect();
            panic!(
                "Missing opcodes in sequence.\nExpected to find: {:?}\nActual stream:    {:?}",
                remaining,
                actual.iter().map(|op| op.name()).collect::<Vec<_>>(),
            );
        }
    }
}

impl<'a> IntoIterator for &'a InstructionStream {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
