//! Compiler configuration.

use hotscript_core::StaticType;

/// Options controlling method compilation.
///
/// ```
/// use hotscript_compiler::CompilerOptions;
/// use hotscript_core::StaticType;
///
/// let options = CompilerOptions::default()
///     .with_implicit_local_type(StaticType::Object)
///     .with_line_info(false);
/// assert_eq!(options.implicit_local_type, StaticType::Object);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerOptions {
    /// Type given to a local first bound by plain assignment.
    pub implicit_local_type: StaticType,
    /// Record source lines in the instruction stream's line table.
    pub emit_line_info: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            implicit_local_type: StaticType::Int,
            emit_line_info: true,
        }
    }
}

impl CompilerOptions {
    pub fn with_implicit_local_type(mut self, ty: StaticType) -> Self {
        self.implicit_local_type = ty;
        self
    }

    pub fn with_line_info(mut self, enabled: bool) -> Self {
        self.emit_line_info = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = CompilerOptions::default();
        assert_eq!(options.implicit_local_type, StaticType::Int);
        assert!(options.emit_line_info);
    }
}
