//! Arena-backed constructors for syntax trees.
//!
//! With no parser in the workspace, trees are assembled node by node. The
//! builder copies names and child slices into the arena so callers can pass
//! temporaries.

use bumpalo::Bump;

use crate::decl::{Decl, FunDecl, Param, Program, TypeSpec, VarDecl, VarDeclKind};
use crate::expr::{
    AssignExpr, BinaryExpr, CallExpr, Expr, IndexAssignExpr, IndexExpr, UnaryExpr,
};
use crate::ops::{BinaryOp, UnaryOp};
use crate::stmt::{CompoundStmt, ExprStmt, IfStmt, ReturnStmt, Stmt, WhileStmt};
use crate::Ident;

/// Builds MiniC trees inside a [`Bump`] arena.
#[derive(Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
}

impl<'ast> AstBuilder<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self { arena }
    }

    /// The arena nodes are allocated in.
    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    fn name(&self, name: &str) -> Ident<'ast> {
        Ident::new(self.arena.alloc_str(name))
    }

    // ==========================================================================
    // Declarations
    // ==========================================================================

    pub fn program(&self, decls: &[Decl<'ast>]) -> Program<'ast> {
        Program {
            decls: self.arena.alloc_slice_copy(decls),
        }
    }

    /// `int name;` at top level.
    pub fn global(&self, name: &str) -> Decl<'ast> {
        Decl::Var(self.var(name))
    }

    /// `int name = value;` at top level.
    pub fn global_init(&self, name: &str, value: i32) -> Decl<'ast> {
        Decl::Var(self.var_init(name, value))
    }

    /// `int name[size];` at top level.
    pub fn global_array(&self, name: &str, size: i32) -> Decl<'ast> {
        Decl::Var(self.var_array(name, size))
    }

    pub fn var(&self, name: &str) -> VarDecl<'ast> {
        VarDecl {
            name: self.name(name),
            kind: VarDeclKind::Plain,
        }
    }

    pub fn var_init(&self, name: &str, value: i32) -> VarDecl<'ast> {
        VarDecl {
            name: self.name(name),
            kind: VarDeclKind::Init(value),
        }
    }

    pub fn var_array(&self, name: &str, size: i32) -> VarDecl<'ast> {
        VarDecl {
            name: self.name(name),
            kind: VarDeclKind::Array(size),
        }
    }

    pub fn fun(
        &self,
        return_type: TypeSpec,
        name: &str,
        params: &[Param<'ast>],
        body: CompoundStmt<'ast>,
    ) -> Decl<'ast> {
        Decl::Fun(self.arena.alloc(FunDecl {
            return_type,
            name: self.name(name),
            params: self.arena.alloc_slice_copy(params),
            body,
        }))
    }

    /// `int name`
    pub fn param(&self, name: &str) -> Param<'ast> {
        Param {
            name: self.name(name),
            is_array: false,
        }
    }

    /// `int name[]`
    pub fn array_param(&self, name: &str) -> Param<'ast> {
        Param {
            name: self.name(name),
            is_array: true,
        }
    }

    // ==========================================================================
    // Statements
    // ==========================================================================

    pub fn compound(&self, locals: &[VarDecl<'ast>], stmts: &[Stmt<'ast>]) -> CompoundStmt<'ast> {
        CompoundStmt {
            locals: self.arena.alloc_slice_copy(locals),
            stmts: self.arena.alloc_slice_copy(stmts),
        }
    }

    /// A nested `{ ... }` block used as a statement.
    pub fn block(&self, locals: &[VarDecl<'ast>], stmts: &[Stmt<'ast>]) -> Stmt<'ast> {
        Stmt::Compound(self.compound(locals, stmts))
    }

    pub fn expr_stmt(&self, expr: &'ast Expr<'ast>) -> Stmt<'ast> {
        Stmt::Expr(ExprStmt { expr })
    }

    pub fn if_then(&self, condition: &'ast Expr<'ast>, then_stmt: Stmt<'ast>) -> Stmt<'ast> {
        Stmt::If(self.arena.alloc(IfStmt {
            condition,
            then_stmt: self.arena.alloc(then_stmt),
            else_stmt: None,
        }))
    }

    pub fn if_else(
        &self,
        condition: &'ast Expr<'ast>,
        then_stmt: Stmt<'ast>,
        else_stmt: Stmt<'ast>,
    ) -> Stmt<'ast> {
        Stmt::If(self.arena.alloc(IfStmt {
            condition,
            then_stmt: self.arena.alloc(then_stmt),
            else_stmt: Some(self.arena.alloc(else_stmt)),
        }))
    }

    pub fn while_loop(&self, condition: &'ast Expr<'ast>, body: Stmt<'ast>) -> Stmt<'ast> {
        Stmt::While(self.arena.alloc(WhileStmt {
            condition,
            body: self.arena.alloc(body),
        }))
    }

    pub fn return_void(&self) -> Stmt<'ast> {
        Stmt::Return(ReturnStmt { value: None })
    }

    pub fn return_value(&self, value: &'ast Expr<'ast>) -> Stmt<'ast> {
        Stmt::Return(ReturnStmt { value: Some(value) })
    }

    // ==========================================================================
    // Expressions
    // ==========================================================================

    pub fn ident(&self, name: &str) -> &'ast Expr<'ast> {
        self.arena.alloc(Expr::Ident(self.name(name)))
    }

    pub fn lit(&self, value: i32) -> &'ast Expr<'ast> {
        self.arena.alloc(Expr::Literal(value))
    }

    pub fn paren(&self, inner: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        self.arena.alloc(Expr::Paren(inner))
    }

    pub fn assign(&self, target: &str, value: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(AssignExpr {
            target: self.name(target),
            value,
        });
        self.arena.alloc(Expr::Assign(node))
    }

    pub fn unary(&self, op: UnaryOp, operand: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(UnaryExpr { op, operand });
        self.arena.alloc(Expr::Unary(node))
    }

    pub fn binary(
        &self,
        op: BinaryOp,
        left: &'ast Expr<'ast>,
        right: &'ast Expr<'ast>,
    ) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(BinaryExpr { left, op, right });
        self.arena.alloc(Expr::Binary(node))
    }

    pub fn call(&self, callee: &str, args: &[&'ast Expr<'ast>]) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(CallExpr {
            callee: self.name(callee),
            args: self.arena.alloc_slice_copy(args),
        });
        self.arena.alloc(Expr::Call(node))
    }

    pub fn index(&self, array: &str, index: &'ast Expr<'ast>) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(IndexExpr {
            array: self.name(array),
            index,
        });
        self.arena.alloc(Expr::Index(node))
    }

    pub fn index_assign(
        &self,
        array: &str,
        index: &'ast Expr<'ast>,
        value: &'ast Expr<'ast>,
    ) -> &'ast Expr<'ast> {
        let node = self.arena.alloc(IndexAssignExpr {
            array: self.name(array),
            index,
            value,
        });
        self.arena.alloc(Expr::IndexAssign(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_expression() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let expr = b.binary(BinaryOp::Mul, b.paren(b.ident("a")), b.lit(3));
        let Expr::Binary(bin) = expr else {
            panic!("expected binary expression");
        };
        assert_eq!(bin.op, BinaryOp::Mul);
        assert_eq!(*bin.left, Expr::Paren(b.ident("a")));
        assert_eq!(*bin.right, Expr::Literal(3));
    }

    #[test]
    fn program_splits_globals_and_functions() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let main = b.fun(TypeSpec::Void, "main", &[], b.compound(&[], &[]));
        let program = b.program(&[b.global("g"), main, b.global_init("h", 4)]);

        let globals: Vec<_> = program.globals().map(|g| g.name.name).collect();
        assert_eq!(globals, ["g", "h"]);
        let functions: Vec<_> = program.functions().map(|f| f.name.name).collect();
        assert_eq!(functions, ["main"]);
    }

    #[test]
    fn trailing_statement() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let body = b.compound(&[b.var("x")], &[b.expr_stmt(b.lit(1)), b.return_void()]);
        assert!(body.trailing().is_some_and(|s| s.is_return()));
        assert!(b.compound(&[], &[]).trailing().is_none());
    }

    #[test]
    fn var_decl_kinds() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        assert_eq!(b.var_init("x", 7).init(), Some(7));
        assert_eq!(b.var("x").init(), None);
        assert!(b.var_array("a", 10).is_array());
        assert!(!b.var("x").is_array());
    }
}
