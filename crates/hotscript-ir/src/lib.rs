//! IR node model consumed by the hotscript code generator.
//!
//! The parser (not part of this workspace) lowers script text into the
//! arena-allocated trees defined here. Trees are immutable once built; the
//! emitter only reads them.
//!
//! ## Modules
//!
//! - [`expr`]: expression nodes (variables, literals, indexed access, ...)
//! - [`stmt`]: statement nodes and method declarations
//! - [`builder`]: arena-backed construction helpers

pub mod builder;
pub mod expr;
pub mod stmt;

pub use builder::IrBuilder;
pub use expr::{
    ArgumentRef, ArrayCreateExpr, AssignExpr, Expr, IndexedAccessExpr, LiteralExpr, LiteralKind,
    PropertyRef, VariableRef,
};
pub use stmt::{ExprStmt, MethodDecl, Stmt, VarDeclStmt};
