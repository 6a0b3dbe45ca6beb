//! Statement nodes.

use crate::decl::VarDecl;
use crate::expr::Expr;

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// Expression statement (expr;)
    Expr(ExprStmt<'ast>),
    /// Block with leading local declarations
    Compound(CompoundStmt<'ast>),
    /// If statement
    If(&'ast IfStmt<'ast>),
    /// While loop
    While(&'ast WhileStmt<'ast>),
    /// Return statement
    Return(ReturnStmt<'ast>),
}

impl Stmt<'_> {
    pub fn is_return(&self) -> bool {
        matches!(self, Stmt::Return(_))
    }
}

/// An expression evaluated for its side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprStmt<'ast> {
    pub expr: &'ast Expr<'ast>,
}

/// `{ local_decl* stmt* }`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundStmt<'ast> {
    pub locals: &'ast [VarDecl<'ast>],
    pub stmts: &'ast [Stmt<'ast>],
}

impl<'ast> CompoundStmt<'ast> {
    /// The last statement of the block, if any.
    pub fn trailing(&self) -> Option<&'ast Stmt<'ast>> {
        self.stmts.last()
    }
}

/// `if (condition) then_stmt [else else_stmt]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub then_stmt: &'ast Stmt<'ast>,
    pub else_stmt: Option<&'ast Stmt<'ast>>,
}

/// `while (condition) body`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStmt<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub body: &'ast Stmt<'ast>,
}

/// `return;` or `return expr;`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStmt<'ast> {
    pub value: Option<&'ast Expr<'ast>>,
}
