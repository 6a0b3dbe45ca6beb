//! Expression nodes.
//!
//! The shapes follow the MiniC `expr` production:
//!
//! ```text
//! expr : LITERAL | IDENT | '(' expr ')'
//!      | IDENT '[' expr ']' | IDENT '(' args ')'
//!      | op expr | expr op expr
//!      | IDENT '=' expr | IDENT '[' expr ']' '=' expr
//! ```

use crate::Ident;
use crate::ops::{BinaryOp, UnaryOp};

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Variable reference
    Ident(Ident<'ast>),
    /// Integer literal
    Literal(i32),
    /// Parenthesized expression
    Paren(&'ast Expr<'ast>),
    /// `IDENT = expr`
    Assign(&'ast AssignExpr<'ast>),
    /// Prefix operation
    Unary(&'ast UnaryExpr<'ast>),
    /// Infix operation
    Binary(&'ast BinaryExpr<'ast>),
    /// `IDENT(args)`
    Call(&'ast CallExpr<'ast>),
    /// `IDENT[expr]`
    Index(&'ast IndexExpr<'ast>),
    /// `IDENT[expr] = expr`
    IndexAssign(&'ast IndexAssignExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Whether this is a leaf (identifier or literal).
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Ident(_) | Expr::Literal(_))
    }

    /// The identifier, if this expression is a bare variable reference.
    pub fn as_ident(&self) -> Option<Ident<'ast>> {
        match self {
            Expr::Ident(ident) => Some(*ident),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignExpr<'ast> {
    pub target: Ident<'ast>,
    pub value: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpr<'ast> {
    pub op: UnaryOp,
    pub operand: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    pub left: &'ast Expr<'ast>,
    pub op: BinaryOp,
    pub right: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    pub callee: Ident<'ast>,
    pub args: &'ast [&'ast Expr<'ast>],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexExpr<'ast> {
    pub array: Ident<'ast>,
    pub index: &'ast Expr<'ast>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexAssignExpr<'ast> {
    pub array: Ident<'ast>,
    pub index: &'ast Expr<'ast>,
    pub value: &'ast Expr<'ast>,
}
