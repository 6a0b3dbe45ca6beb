//! Statement lowering.
//!
//! The [`StmtCompiler`] composes expression fragments with labels into the
//! control flow of:
//! - Compound statements and their local declarations
//! - `if` with an optional `else`
//! - `while` loops
//! - `return`, with or without a value
//!
//! # Example
//!
//! ```ignore
//! let mut compiler = StmtCompiler::new(&mut ctx);
//! let (body, closed) = compiler.lower_function_body(&fun.body)?;
//! ```

mod block;
mod if_stmt;
mod return_stmt;
mod var_decl;
mod while_stmt;

use minic_ast::{ExprStmt, Stmt};
use minic_core::Result;

use crate::bytecode::{Fragment, Instruction};
use crate::context::CodegenContext;
use crate::expr::ExprCompiler;

/// Lowers statements to instruction fragments.
pub struct StmtCompiler<'a> {
    ctx: &'a mut CodegenContext,
}

impl<'a> StmtCompiler<'a> {
    pub fn new(ctx: &'a mut CodegenContext) -> Self {
        Self { ctx }
    }

    /// Lower a statement that is not the trailing statement of a function body.
    pub fn lower(&mut self, stmt: &Stmt<'_>) -> Result<Fragment> {
        self.lower_stmt(stmt, false)
    }

    /// `closes_method` is set only for the trailing statement of a function
    /// body; a `return` there also ends the method.
    fn lower_stmt(&mut self, stmt: &Stmt<'_>, closes_method: bool) -> Result<Fragment> {
        match stmt {
            Stmt::Expr(expr_stmt) => self.lower_expr_stmt(expr_stmt),
            Stmt::Compound(block) => self.lower_compound(block),
            Stmt::If(if_stmt) => self.lower_if(if_stmt),
            Stmt::While(while_stmt) => self.lower_while(while_stmt),
            Stmt::Return(ret) => self.lower_return(ret, closes_method),
        }
    }

    /// Evaluate an expression for its side effects.
    ///
    /// Whatever value the expression leaves behind is discarded so the operand
    /// stack has the same height on every path through a loop.
    fn lower_expr_stmt(&mut self, expr_stmt: &ExprStmt<'_>) -> Result<Fragment> {
        let depth = self.ctx.stack.current();
        let mut fragment = self.expr_compiler().lower(expr_stmt.expr)?;
        for _ in depth..self.ctx.stack.current() {
            fragment.push(Instruction::Pop);
            self.ctx.stack.pop();
        }
        Ok(fragment)
    }

    fn expr_compiler(&mut self) -> ExprCompiler<'_> {
        ExprCompiler::new(self.ctx)
    }
}
