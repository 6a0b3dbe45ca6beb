//! While loops.

use minic_ast::WhileStmt;
use minic_core::Result;

use super::StmtCompiler;
use crate::bytecode::{Cond, Fragment, Instruction};

impl<'a> StmtCompiler<'a> {
    /// Lower a `while` loop.
    ///
    /// The start label sits before the condition so it is re-tested on every
    /// iteration:
    /// ```text
    /// start:
    /// [condition]
    /// ifeq end
    /// [body]
    /// goto start
    /// end:
    /// ```
    pub fn lower_while(&mut self, while_stmt: &WhileStmt<'_>) -> Result<Fragment> {
        let condition = self.expr_compiler().lower(while_stmt.condition)?;
        let body = self.lower(while_stmt.body)?;

        let start = self.ctx.symbols.new_label();
        let end = self.ctx.symbols.new_label();

        let mut fragment = Fragment::new();
        fragment.label(start);
        fragment.append(condition);
        fragment.push(Instruction::If(Cond::Eq, end));
        fragment.append(body);
        fragment.push(Instruction::Goto(start));
        fragment.label(end);

        self.ctx.stack.pop();
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
    use minic_core::DataType;

    #[test]
    fn counting_loop() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();
        ctx.symbols.bind_local("x", DataType::Int, None).unwrap();

        let stmt = b.while_loop(
            b.binary(BinaryOp::Lt, b.ident("x"), b.lit(10)),
            b.expr_stmt(b.assign("x", b.binary(BinaryOp::Add, b.ident("x"), b.lit(1)))),
        );
        let fragment = StmtCompiler::new(&mut ctx).lower(&stmt).unwrap();
        assert_eq!(
            lines(&fragment),
            [
                "L2:", "iload_0", "ldc 10", "isub", "iflt L0", "ldc 0", "goto L1", "L0:",
                "ldc 1", "L1:", "ifeq L3", "iload_0", "ldc 1", "iadd", "istore_0", "goto L2",
                "L3:"
            ]
        );
        assert_eq!(ctx.stack.current(), 0);
        // The condition value is still counted while the body is lowered.
        assert_eq!(ctx.stack.maximum(), 3);
    }

    #[test]
    fn every_jump_has_a_definition() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();
        ctx.symbols.bind_local("x", DataType::Int, None).unwrap();

        let inner = b.while_loop(b.ident("x"), b.expr_stmt(b.assign("x", b.lit(0))));
        let stmt = b.while_loop(b.unary(minic_ast::UnaryOp::Not, b.ident("x")), inner);
        let fragment = StmtCompiler::new(&mut ctx).lower(&stmt).unwrap();

        let defined: Vec<_> = fragment.defined_labels().collect();
        for target in fragment.jump_targets() {
            assert!(defined.contains(&target), "undefined {}", target);
        }
        let mut unique = defined.clone();
        unique.sort_by_key(|l| l.id());
        unique.dedup();
        assert_eq!(unique.len(), defined.len());
    }
}
