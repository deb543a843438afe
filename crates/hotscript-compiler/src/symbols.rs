//! Symbol table for method body compilation.
//!
//! One flat table per method: there are no nested block scopes, and a name
//! keeps the slot it was first bound to until the method is finished. Slots
//! are numbered densely from 0 in allocation order.

use hotscript_core::{CompilationError, Span, StaticType};
use rustc_hash::FxHashMap;

// ============================================================================
// Types
// ============================================================================

/// A local variable binding.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSlot {
    /// Variable name
    pub name: String,
    /// Storage slot index
    pub slot: u32,
    /// Static type of the slot; fixed at first binding
    pub ty: StaticType,
    /// Where the name was first bound
    pub span: Span,
}

// ============================================================================
// SymbolTable
// ============================================================================

/// Name → slot bindings for one method.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: FxHashMap<String, LocalSlot>,
    next_slot: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to a new slot of type `ty`.
    ///
    /// Fails with `DuplicateDeclaration` if the name is already bound, whether
    /// by an earlier declaration or an implicit assignment.
    pub fn declare(
        &mut self,
        name: &str,
        ty: StaticType,
        span: Span,
    ) -> Result<&LocalSlot, CompilationError> {
        if let Some(existing) = self.variables.get(name) {
            return Err(CompilationError::DuplicateDeclaration {
                name: name.to_string(),
                original: existing.span,
                span,
                node: "VariableDeclaration",
            });
        }
        Ok(self.bind(name, ty, span))
    }

    /// Look up a bound name.
    pub fn lookup(&self, name: &str, span: Span) -> Result<&LocalSlot, CompilationError> {
        self.variables
            .get(name)
            .ok_or_else(|| CompilationError::UndefinedVariable {
                name: name.to_string(),
                span,
                node: "VariableReference",
            })
    }

    /// Implicit binding used by plain assignment.
    ///
    /// An unbound name gets a new slot of type `implicit`; a bound name keeps
    /// its slot and its type.
    pub fn declare_or_reuse(&mut self, name: &str, implicit: &StaticType, span: Span) -> &LocalSlot {
        if self.variables.contains_key(name) {
            return &self.variables[name];
        }
        tracing::trace!(name, ty = %implicit, "implicit local");
        self.bind(name, implicit.clone(), span)
    }

    fn bind(&mut self, name: &str, ty: StaticType, span: Span) -> &LocalSlot {
        let slot = self.allocate_slot();
        self.variables
            .entry(name.to_string())
            .or_insert(LocalSlot {
                name: name.to_string(),
                slot,
                ty,
                span,
            })
    }

    fn allocate_slot(&mut self) -> u32 {
        let slot = self.next_slot;
        self.next_slot += 1;
        slot
    }

    pub fn get(&self, name: &str) -> Option<&LocalSlot> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of slots allocated so far.
    pub fn frame_size(&self) -> u32 {
        self.next_slot
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Consume the table, yielding the slot layout ordered by slot.
    pub fn into_locals(self) -> Vec<LocalSlot> {
        let mut locals: Vec<_> = self.variables.into_values().collect();
        locals.sort_by_key(|local| local.slot);
        locals
    }
}
