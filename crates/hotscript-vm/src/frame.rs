//! What a finished run leaves behind.

use hotscript_core::Value;

/// Locals and evaluation stack after a method ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Slot names, indexed by slot
    names: Vec<String>,
    /// Slot values, indexed by slot
    locals: Vec<Value>,
    stack: Vec<Value>,
}

impl Frame {
    pub(crate) fn new(names: Vec<String>, locals: Vec<Value>, stack: Vec<Value>) -> Self {
        Self {
            names,
            locals,
            stack,
        }
    }

    /// Value of a slot.
    pub fn local(&self, slot: u32) -> Option<&Value> {
        self.locals.get(slot as usize)
    }

    /// Value of a local by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let slot = self.names.iter().position(|n| n == name)?;
        self.locals.get(slot)
    }

    pub fn locals(&self) -> &[Value] {
        &self.locals
    }

    /// The evaluation stack, bottom first.
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    /// Whether the run left nothing on the stack.
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty()
    }
}
