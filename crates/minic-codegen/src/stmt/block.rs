//! Compound statements and function bodies.

use minic_ast::{CompoundStmt, Stmt};
use minic_core::Result;

use super::StmtCompiler;
use crate::bytecode::Fragment;

impl<'a> StmtCompiler<'a> {
    /// Local declarations first, then the statements, in source order.
    ///
    /// Locals stay bound until the function ends; there is no block scoping
    /// of slots.
    pub fn lower_compound(&mut self, block: &CompoundStmt<'_>) -> Result<Fragment> {
        let mut fragment = self.lower_locals(block)?;
        for stmt in block.stmts {
            fragment.append(self.lower(stmt)?);
        }
        Ok(fragment)
    }

    /// Lower a function body.
    ///
    /// Returns the fragment and whether it already ends the method, which is
    /// the case exactly when the body's last statement is a `return`.
    pub fn lower_function_body(&mut self, body: &CompoundStmt<'_>) -> Result<(Fragment, bool)> {
        let mut fragment = self.lower_locals(body)?;

        let Some((last, leading)) = body.stmts.split_last() else {
            return Ok((fragment, false));
        };
        for stmt in leading {
            fragment.append(self.lower(stmt)?);
        }

        let closes_method = matches!(last, Stmt::Return(_));
        fragment.append(self.lower_stmt(last, closes_method)?);
        Ok((fragment, closes_method))
    }

    fn lower_locals(&mut self, block: &CompoundStmt<'_>) -> Result<Fragment> {
        let mut fragment = Fragment::new();
        for decl in block.locals {
            fragment.append(self.lower_local(decl)?);
        }
        Ok(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::expr::test_support::lines;
    use bumpalo::Bump;
    use minic_ast::{AstBuilder, BinaryOp};
    use minic_core::CodegenError;

    #[test]
    fn declarations_precede_statements() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();

        let block = b.compound(
            &[b.var_init("a", 1), b.var("b")],
            &[b.expr_stmt(b.assign("b", b.ident("a")))],
        );
        let fragment = StmtCompiler::new(&mut ctx).lower_compound(&block).unwrap();
        assert_eq!(lines(&fragment), ["ldc 1", "istore_0", "iload_0", "istore_1"]);
        assert_eq!(ctx.symbols.local_count(), 2);
    }

    #[test]
    fn nested_block_shares_the_function_scope() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();

        let inner = b.block(&[b.var("y")], &[b.expr_stmt(b.assign("y", b.lit(2)))]);
        let outer = b.compound(&[b.var("x")], &[inner]);
        let fragment = StmtCompiler::new(&mut ctx).lower_compound(&outer).unwrap();
        assert_eq!(lines(&fragment), ["ldc 2", "istore_1"]);

        // Redeclaring in a nested block is still a duplicate within the function.
        let clash = b.compound(&[], &[b.block(&[b.var("x")], &[])]);
        let err = StmtCompiler::new(&mut ctx).lower_compound(&clash).unwrap_err();
        assert!(matches!(err, CodegenError::DuplicateBinding { .. }));
    }

    #[test]
    fn trailing_return_closes_the_method() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();

        let body = b.compound(
            &[b.var_init("n", 3)],
            &[b.return_value(b.binary(BinaryOp::Mul, b.ident("n"), b.lit(2)))],
        );
        let (fragment, closed) = StmtCompiler::new(&mut ctx).lower_function_body(&body).unwrap();
        assert!(closed);
        assert_eq!(
            fragment.to_string(),
            "ldc 3\nistore_0\niload_0\nldc 2\nimul\nireturn\n.end method\n\n"
        );
        assert_eq!(ctx.stack.pending(), 1);
        assert_eq!(ctx.stack.max_for_next_prologue(), 2);
    }

    #[test]
    fn body_without_trailing_return_stays_open() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();

        let body = b.compound(
            &[b.var("x")],
            &[
                b.if_then(b.ident("x"), b.return_void()),
                b.expr_stmt(b.assign("x", b.lit(1))),
            ],
        );
        let (fragment, closed) = StmtCompiler::new(&mut ctx).lower_function_body(&body).unwrap();
        assert!(!closed);
        assert_eq!(
            lines(&fragment),
            ["iload_0", "ifeq L0", "return", "L0:", "ldc 1", "istore_0"]
        );
        assert_eq!(ctx.stack.pending(), 0);
    }

    #[test]
    fn empty_body() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();

        let (fragment, closed) = StmtCompiler::new(&mut ctx)
            .lower_function_body(&b.compound(&[], &[]))
            .unwrap();
        assert!(fragment.is_empty());
        assert!(!closed);
    }
}
