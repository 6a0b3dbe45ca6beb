//! If/else statements.

use minic_ast::IfStmt;
use minic_core::Result;

use super::StmtCompiler;
use crate::bytecode::{Cond, Fragment, Instruction};

impl<'a> StmtCompiler<'a> {
    /// Lower an `if` statement.
    ///
    /// Layout with an `else` branch:
    /// ```text
    /// [condition]
    /// ifeq else
    /// [then]
    /// goto end
    /// else:
    /// [else]
    /// end:
    /// ```
    /// Without one the branch goes straight to `end` and only that label is
    /// allocated.
    pub fn lower_if(&mut self, if_stmt: &IfStmt<'_>) -> Result<Fragment> {
        let mut fragment = self.expr_compiler().lower(if_stmt.condition)?;
        let then_fragment = self.lower(if_stmt.then_stmt)?;
        let else_fragment = match if_stmt.else_stmt {
            Some(else_stmt) => Some(self.lower(else_stmt)?),
            None => None,
        };

        let end = self.ctx.symbols.new_label();
        match else_fragment {
            Some(else_fragment) => {
                let otherwise = self.ctx.symbols.new_label();
                fragment.push(Instruction::If(Cond::Eq, otherwise));
                fragment.append(then_fragment);
                fragment.push(Instruction::Goto(end));
                fragment.label(otherwise);
                fragment.append(else_fragment);
            }
            None => {
                fragment.push(Instruction::If(Cond::Eq, end));
                fragment.append(then_fragment);
            }
        }
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
    fn if_else() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();
        ctx.symbols.bind_local("x", DataType::Int, None).unwrap();

        let stmt = b.if_else(
            b.lit(1),
            b.expr_stmt(b.assign("x", b.lit(2))),
            b.expr_stmt(b.assign("x", b.lit(3))),
        );
        let fragment = StmtCompiler::new(&mut ctx).lower(&stmt).unwrap();
        assert_eq!(
            lines(&fragment),
            [
                "ldc 1", "ifeq L1", "ldc 2", "istore_0", "goto L0", "L1:", "ldc 3", "istore_0",
                "L0:"
            ]
        );
        assert_eq!(ctx.symbols.labels_issued(), 2);
        assert_eq!(fragment.defined_labels().count(), 2);
        assert_eq!(ctx.stack.current(), 0);
    }

    #[test]
    fn if_without_else() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();
        ctx.symbols.bind_local("x", DataType::Int, None).unwrap();

        let stmt = b.if_then(
            b.binary(BinaryOp::Gt, b.ident("x"), b.lit(0)),
            b.expr_stmt(b.assign("x", b.lit(0))),
        );
        let fragment = StmtCompiler::new(&mut ctx).lower(&stmt).unwrap();
        assert_eq!(
            lines(&fragment),
            [
                "iload_0", "ldc 0", "isub", "ifgt L0", "ldc 0", "goto L1", "L0:", "ldc 1",
                "L1:", "ifeq L2", "ldc 0", "istore_0", "L2:"
            ]
        );
        assert_eq!(ctx.stack.current(), 0);
    }

    #[test]
    fn nested_if_allocates_inner_labels_first() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = body_ctx();
        ctx.symbols.bind_local("x", DataType::Int, None).unwrap();

        let inner = b.if_then(b.ident("x"), b.expr_stmt(b.assign("x", b.lit(1))));
        let outer = b.if_else(b.ident("x"), inner, b.expr_stmt(b.assign("x", b.lit(2))));
        let fragment = StmtCompiler::new(&mut ctx).lower(&outer).unwrap();

        let text = lines(&fragment);
        assert_eq!(text[1], "ifeq L2");
        assert_eq!(text[2], "iload_0");
        assert_eq!(text[3], "ifeq L0");
        assert_eq!(ctx.symbols.labels_issued(), 3);
    }
}
