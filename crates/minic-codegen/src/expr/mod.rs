//! Expression lowering.
//!
//! The [`ExprCompiler`] lowers an expression tree bottom-up: every child is
//! lowered before its parent, the parent splices the children's fragments into
//! its own, and labels a parent needs are allocated only after all of its
//! children are done. Each construct reports its stack effect to the
//! [`StackTracker`](crate::stack::StackTracker) as it completes.
//!
//! # Example
//!
//! ```ignore
//! let mut compiler = ExprCompiler::new(&mut ctx);
//! let fragment = compiler.lower(&expr)?;
//! ```

mod assignment;
mod binary;
mod calls;
mod identifiers;
mod literals;
mod unary;

use minic_ast::Expr;
use minic_core::{CodegenError, Result};

use crate::bytecode::Fragment;
use crate::context::CodegenContext;

/// Lowers expressions to instruction fragments.
pub struct ExprCompiler<'a> {
    ctx: &'a mut CodegenContext,
}

impl<'a> ExprCompiler<'a> {
    pub fn new(ctx: &'a mut CodegenContext) -> Self {
        Self { ctx }
    }

    /// Lower an expression, leaving its value (if any) on the operand stack.
    pub fn lower(&mut self, expr: &Expr<'_>) -> Result<Fragment> {
        match expr {
            Expr::Ident(ident) => identifiers::lower_ident(self, *ident),
            Expr::Literal(value) => literals::lower_literal(self, *value),
            Expr::Paren(inner) => self.lower(inner),
            Expr::Assign(assign) => assignment::lower_assign(self, assign),
            Expr::Unary(unary) => unary::lower_unary(self, unary),
            Expr::Binary(binary) => binary::lower_binary(self, binary),
            Expr::Call(call) => calls::lower_call(self, call),
            Expr::Index(index) => Err(CodegenError::unsupported(format!(
                "array indexing '{}[...]'",
                index.array
            ))),
            Expr::IndexAssign(assign) => Err(CodegenError::unsupported(format!(
                "array element assignment '{}[...] = ...'",
                assign.array
            ))),
        }
    }

    pub fn ctx(&self) -> &CodegenContext {
        self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut CodegenContext {
        self.ctx
    }
}
