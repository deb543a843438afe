//! Statement nodes and method declarations.

use hotscript_core::Span;

use crate::expr::{AssignExpr, Expr};

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// Explicit local declaration with an initializer
    VarDecl(VarDeclStmt<'ast>),
    /// Assignment whose value is discarded
    Assign(&'ast AssignExpr<'ast>),
    /// Expression evaluated for its side effects
    Expr(ExprStmt<'ast>),
}

impl<'ast> Stmt<'ast> {
    pub fn span(&self) -> Span {
        match self {
            Self::VarDecl(s) => s.span,
            Self::Assign(s) => s.span,
            Self::Expr(s) => s.span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::VarDecl(_) => "VariableDeclaration",
            Self::Assign(_) => "AssignStatement",
            Self::Expr(_) => "ExpressionStatement",
        }
    }
}

/// `name := init` introducing a new local.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDeclStmt<'ast> {
    pub name: &'ast str,
    pub init: &'ast Expr<'ast>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprStmt<'ast> {
    pub expr: &'ast Expr<'ast>,
    pub span: Span,
}

/// A method body to compile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodDecl<'ast> {
    pub name: &'ast str,
    pub body: &'ast [Stmt<'ast>],
    pub span: Span,
}
