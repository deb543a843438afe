//! Operation codes.
//!
//! The machine is stack based: operations pop their inputs and push their
//! results. Each opcode takes at most one operand, stored next to it in the
//! [`Instruction`](super::Instruction).

/// Operation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    // =========================================================================
    // Constants
    // =========================================================================
    /// Push a literal.
    /// Operand: Constant
    PushConst,
    /// Push the null reference.
    PushNull,

    // =========================================================================
    // Stack Operations
    // =========================================================================
    /// Pop top of stack.
    Pop,
    /// Duplicate top of stack.
    Dup,
    /// Wrap the value type on top of the stack as an object.
    /// Operand: Type (the value type being boxed)
    Box,

    // =========================================================================
    // Locals and Arguments
    // =========================================================================
    /// Push a local slot.
    /// Operand: Slot
    LoadLocal,
    /// Pop into a local slot.
    /// Operand: Slot
    StoreLocal,
    /// Push a method argument (the `object[]` argument container).
    /// Operand: Argument
    LoadArgument,
    /// Push a reference to the dynamic variable store.
    LoadStore,

    // =========================================================================
    // Calls
    // =========================================================================
    /// Call a runtime intrinsic.
    /// Operand: Intrinsic
    CallIntrinsic,
    /// Call a property getter, pushing its value.
    /// Operand: Accessor
    CallGetter,
    /// Pop a value and pass it to a property setter.
    /// Operand: Accessor
    CallSetter,

    // =========================================================================
    // Arrays
    // =========================================================================
    /// Pop a length and push a new array.
    /// Operand: Type (element type)
    NewArray,
    /// Pop value, index and array; store the value at the index.
    StoreElement,
}

impl OpCode {
    /// Get the name of this opcode for debugging.
    pub fn name(&self) -> &'static str {
        match self {
            OpCode::PushConst => "PUSH_CONST",
            OpCode::PushNull => "PUSH_NULL",
            OpCode::Pop => "POP",
            OpCode::Dup => "DUP",
            OpCode::Box => "BOX",
            OpCode::LoadLocal => "LOAD_LOCAL",
            OpCode::StoreLocal => "STORE_LOCAL",
            OpCode::LoadArgument => "LOAD_ARGUMENT",
            OpCode::LoadStore => "LOAD_STORE",
            OpCode::CallIntrinsic => "CALL_INTRINSIC",
            OpCode::CallGetter => "CALL_GETTER",
            OpCode::CallSetter => "CALL_SETTER",
            OpCode::NewArray => "NEW_ARRAY",
            OpCode::StoreElement => "STORE_ELEMENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_name() {
        assert_eq!(OpCode::StoreLocal.name(), "STORE_LOCAL");
        assert_eq!(OpCode::CallIntrinsic.name(), "CALL_INTRINSIC");
    }
}
