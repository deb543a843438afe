//! Expression nodes.
//!
//! Every expression leaves exactly one value on the evaluation stack when
//! emitted. Child expressions are arena references so nodes stay `Copy`.

use hotscript_core::Span;
use rust_decimal::Decimal;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Literal constant
    Literal(LiteralExpr<'ast>),
    /// Method-local variable
    Variable(VariableRef<'ast>),
    /// The method's argument container
    Argument(ArgumentRef),
    /// Dynamic-store variable access (`store[key]`)
    IndexedAccess(&'ast IndexedAccessExpr<'ast>),
    /// Built-in property
    Property(PropertyRef<'ast>),
    /// Typed array literal
    ArrayCreate(ArrayCreateExpr<'ast>),
    /// Assignment used as a value
    Assign(&'ast AssignExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Variable(e) => e.span,
            Self::Argument(e) => e.span,
            Self::IndexedAccess(e) => e.span,
            Self::Property(e) => e.span,
            Self::ArrayCreate(e) => e.span,
            Self::Assign(e) => e.span,
        }
    }

    /// Name of the node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Literal(_) => "Literal",
            Self::Variable(_) => "VariableReference",
            Self::Argument(_) => "ArgumentReference",
            Self::IndexedAccess(_) => "IndexedAccess",
            Self::Property(_) => "PropertyReference",
            Self::ArrayCreate(_) => "ArrayCreate",
            Self::Assign(_) => "Assign",
        }
    }
}

/// Literal constant value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    Int(i32),
    Long(i64),
    Decimal(Decimal),
    String(&'ast str),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    pub kind: LiteralKind<'ast>,
    pub span: Span,
}

/// Reference to a method-local variable by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableRef<'ast> {
    pub name: &'ast str,
    pub span: Span,
}

/// Reference to a method argument.
///
/// Compiled methods take a single argument: an `object[]` holding the
/// script-level parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArgumentRef {
    pub index: u16,
    pub span: Span,
}

/// Keyed access into the dynamic variable store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedAccessExpr<'ast> {
    /// The container being indexed.
    pub base: &'ast Expr<'ast>,
    /// The key expression.
    pub index: &'ast Expr<'ast>,
    pub span: Span,
}

/// Reference to a built-in property by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyRef<'ast> {
    pub name: &'ast str,
    pub span: Span,
}

/// `new T[] { a, b, c }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayCreateExpr<'ast> {
    /// Element type as written by the parser (`object`, `System.String`, ...).
    pub element_type: &'ast str,
    pub initializers: &'ast [Expr<'ast>],
    pub span: Span,
}

/// `target := value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignExpr<'ast> {
    pub target: &'ast Expr<'ast>,
    pub value: &'ast Expr<'ast>,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        let var = Expr::Variable(VariableRef {
            name: "x",
            span: Span::new(1, 1, 1),
        });
        assert_eq!(var.kind_name(), "VariableReference");
        assert_eq!(var.span(), Span::new(1, 1, 1));

        let lit = Expr::Literal(LiteralExpr {
            kind: LiteralKind::Null,
            span: Span::default(),
        });
        assert_eq!(lit.kind_name(), "Literal");
    }
}
