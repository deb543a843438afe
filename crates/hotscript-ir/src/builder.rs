//! Arena-backed construction of IR trees.
//!
//! Producers (the parser, tests, embedders generating code) build trees with
//! [`IrBuilder`], which allocates children and strings in a `bumpalo` arena so
//! that the resulting nodes are cheap `Copy` values borrowing from the arena.
//!
//! ```
//! use bumpalo::Bump;
//! use hotscript_ir::IrBuilder;
//!
//! let arena = Bump::new();
//! let ir = IrBuilder::new(&arena);
//! let body = [ir.assign_stmt(ir.var("x"), ir.int(5))];
//! let method = ir.method("main", &body);
//! assert_eq!(method.body.len(), 1);
//! ```

use bumpalo::Bump;
use hotscript_core::Span;
use rust_decimal::Decimal;

use crate::expr::{
    ArgumentRef, ArrayCreateExpr, AssignExpr, Expr, IndexedAccessExpr, LiteralExpr, LiteralKind,
    PropertyRef, VariableRef,
};
use crate::stmt::{ExprStmt, MethodDecl, Stmt, VarDeclStmt};

/// Builds IR nodes in an arena.
///
/// Every node gets the builder's current span; use [`IrBuilder::at`] to
/// produce nodes for a different position.
#[derive(Clone, Copy)]
pub struct IrBuilder<'ast> {
    arena: &'ast Bump,
    span: Span,
}

impl<'ast> IrBuilder<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self {
            arena,
            span: Span::point(1, 1),
        }
    }

    /// A builder stamping nodes with `span`.
    pub fn at(self, span: Span) -> Self {
        Self { span, ..self }
    }

    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    fn alloc_expr(&self, expr: Expr<'ast>) -> &'ast Expr<'ast> {
        self.arena.alloc(expr)
    }

    fn literal(&self, kind: LiteralKind<'ast>) -> Expr<'ast> {
        Expr::Literal(LiteralExpr {
            kind,
            span: self.span,
        })
    }

    // ==========================================================================
    // Literals
    // ==========================================================================

    pub fn int(&self, value: i32) -> Expr<'ast> {
        self.literal(LiteralKind::Int(value))
    }

    pub fn long(&self, value: i64) -> Expr<'ast> {
        self.literal(LiteralKind::Long(value))
    }

    pub fn decimal(&self, value: Decimal) -> Expr<'ast> {
        self.literal(LiteralKind::Decimal(value))
    }

    pub fn string(&self, value: &str) -> Expr<'ast> {
        self.literal(LiteralKind::String(self.arena.alloc_str(value)))
    }

    pub fn bool(&self, value: bool) -> Expr<'ast> {
        self.literal(LiteralKind::Bool(value))
    }

    pub fn null(&self) -> Expr<'ast> {
        self.literal(LiteralKind::Null)
    }

    // ==========================================================================
    // References
    // ==========================================================================

    pub fn var(&self, name: &str) -> Expr<'ast> {
        Expr::Variable(VariableRef {
            name: self.arena.alloc_str(name),
            span: self.span,
        })
    }

    pub fn arg(&self, index: u16) -> Expr<'ast> {
        Expr::Argument(ArgumentRef {
            index,
            span: self.span,
        })
    }

    pub fn property(&self, name: &str) -> Expr<'ast> {
        Expr::Property(PropertyRef {
            name: self.arena.alloc_str(name),
            span: self.span,
        })
    }

    pub fn indexed(&self, base: Expr<'ast>, index: Expr<'ast>) -> Expr<'ast> {
        Expr::IndexedAccess(self.arena.alloc(IndexedAccessExpr {
            base: self.alloc_expr(base),
            index: self.alloc_expr(index),
            span: self.span,
        }))
    }

    // ==========================================================================
    // Composite expressions
    // ==========================================================================

    pub fn array(&self, element_type: &str, initializers: &[Expr<'ast>]) -> Expr<'ast> {
        Expr::ArrayCreate(ArrayCreateExpr {
            element_type: self.arena.alloc_str(element_type),
            initializers: self.arena.alloc_slice_copy(initializers),
            span: self.span,
        })
    }

    pub fn assign(&self, target: Expr<'ast>, value: Expr<'ast>) -> Expr<'ast> {
        Expr::Assign(self.assign_node(target, value))
    }

    fn assign_node(&self, target: Expr<'ast>, value: Expr<'ast>) -> &'ast AssignExpr<'ast> {
        self.arena.alloc(AssignExpr {
            target: self.alloc_expr(target),
            value: self.alloc_expr(value),
            span: self.span,
        })
    }

    // ==========================================================================
    // Statements
    // ==========================================================================

    pub fn declare(&self, name: &str, init: Expr<'ast>) -> Stmt<'ast> {
        Stmt::VarDecl(VarDeclStmt {
            name: self.arena.alloc_str(name),
            init: self.alloc_expr(init),
            span: self.span,
        })
    }

    pub fn assign_stmt(&self, target: Expr<'ast>, value: Expr<'ast>) -> Stmt<'ast> {
        Stmt::Assign(self.assign_node(target, value))
    }

    pub fn expr_stmt(&self, expr: Expr<'ast>) -> Stmt<'ast> {
        Stmt::Expr(ExprStmt {
            expr: self.alloc_expr(expr),
            span: self.span,
        })
    }

    pub fn method(&self, name: &str, body: &[Stmt<'ast>]) -> MethodDecl<'ast> {
        MethodDecl {
            name: self.arena.alloc_str(name),
            body: self.arena.alloc_slice_copy(body),
            span: self.span,
        }
    }
}
