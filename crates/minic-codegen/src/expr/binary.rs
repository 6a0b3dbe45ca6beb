//! Binary operators.
//!
//! Relational and logical operators materialize a 0/1 result through
//! branches; arithmetic maps straight onto one instruction.

use minic_ast::{BinaryExpr, BinaryOp};
use minic_core::Result;

use super::ExprCompiler;
use crate::bytecode::{Cond, Fragment, Instruction};

/// Operands are the spliced fragments of the child expressions, left first.
pub(super) fn lower_binary(
    compiler: &mut ExprCompiler<'_>,
    expr: &BinaryExpr<'_>,
) -> Result<Fragment> {
    let op = expr.op;
    if op == BinaryOp::Or {
        return lower_or(compiler, expr);
    }

    let mut fragment = compiler.lower(expr.left)?;
    fragment.append(compiler.lower(expr.right)?);

    if op.is_arithmetic() {
        fragment.push(arithmetic_instruction(op));
        compiler.ctx.stack.pop();
    } else if op.is_relational() {
        lower_comparison(compiler, &mut fragment, comparison_cond(op));
    } else {
        debug_assert!(op.is_logical());
        fragment.push(Instruction::Imul);
        lower_truth_test(compiler, &mut fragment);
        compiler.ctx.stack.pop();
        compiler.ctx.stack.pop();
        compiler.ctx.stack.push();
    }

    Ok(fragment)
}

fn arithmetic_instruction(op: BinaryOp) -> Instruction {
    match op {
        BinaryOp::Mul => Instruction::Imul,
        BinaryOp::Div => Instruction::Idiv,
        BinaryOp::Mod => Instruction::Irem,
        BinaryOp::Add => Instruction::Iadd,
        _ => Instruction::Isub,
    }
}

fn comparison_cond(op: BinaryOp) -> Cond {
    match op {
        BinaryOp::Eq => Cond::Eq,
        BinaryOp::Ne => Cond::Ne,
        BinaryOp::Le => Cond::Le,
        BinaryOp::Lt => Cond::Lt,
        BinaryOp::Ge => Cond::Ge,
        _ => Cond::Gt,
    }
}

/// `left - right` compared against zero.
fn lower_comparison(compiler: &mut ExprCompiler<'_>, fragment: &mut Fragment, cond: Cond) {
    let when_true = compiler.ctx.symbols.new_label();
    let end = compiler.ctx.symbols.new_label();

    fragment.push(Instruction::Isub);
    fragment.push(Instruction::If(cond, when_true));
    fragment.push(Instruction::Ldc(0));
    fragment.push(Instruction::Goto(end));
    fragment.label(when_true);
    fragment.push(Instruction::Ldc(1));
    fragment.label(end);

    compiler.ctx.stack.pop();
    compiler.ctx.stack.pop();
    compiler.ctx.stack.push();
}

/// Replace the value on top of the stack with 1 if it is non-zero, else 0.
fn lower_truth_test(compiler: &mut ExprCompiler<'_>, fragment: &mut Fragment) {
    let when_false = compiler.ctx.symbols.new_label();
    let end = compiler.ctx.symbols.new_label();

    fragment.push(Instruction::If(Cond::Eq, when_false));
    fragment.push(Instruction::Ldc(1));
    fragment.push(Instruction::Goto(end));
    fragment.label(when_false);
    fragment.push(Instruction::Ldc(0));
    fragment.label(end);
}

/// `left or right`: the operands are summed with the left counted twice, so a
/// negative right operand cannot cancel a positive left one to zero.
///
/// A leaf left operand is simply reloaded. Anything else is duplicated up
/// front so its side effects run once.
fn lower_or(compiler: &mut ExprCompiler<'_>, expr: &BinaryExpr<'_>) -> Result<Fragment> {
    let left = compiler.lower(expr.left)?;

    let mut fragment = Fragment::new();
    if expr.left.is_leaf() {
        let reload = left.clone();
        fragment.append(left);
        fragment.append(compiler.lower(expr.right)?);
        fragment.push(Instruction::Iadd);
        fragment.append(reload);
        fragment.push(Instruction::Iadd);

        let stack = &mut compiler.ctx.stack;
        stack.pop();
        stack.push();
        stack.pop();
    } else {
        // The copy sits under the right operand for its whole evaluation.
        fragment.append(left);
        fragment.push(Instruction::Dup);
        compiler.ctx.stack.push();
        fragment.append(compiler.lower(expr.right)?);
        fragment.push(Instruction::Iadd);
        fragment.push(Instruction::Iadd);

        let stack = &mut compiler.ctx.stack;
        stack.pop();
        stack.pop();
    }

    lower_truth_test(compiler, &mut fragment);
    compiler.ctx.stack.pop();
    compiler.ctx.stack.push();
    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use bumpalo::Bump;
    use minic_ast::AstBuilder;

    #[test]
    fn arithmetic() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = function_ctx();

        let expr = b.binary(
            BinaryOp::Mul,
            b.binary(BinaryOp::Add, b.ident("x"), b.lit(2)),
            b.binary(BinaryOp::Mod, b.ident("y"), b.lit(3)),
        );
        let fragment = ExprCompiler::new(&mut ctx).lower(expr).unwrap();
        assert_eq!(
            lines(&fragment),
            ["iload_0", "ldc 2", "iadd", "iload_1", "ldc 3", "irem", "imul"]
        );
        assert_eq!(ctx.stack.current(), 1);
        assert_eq!(ctx.stack.maximum(), 3);
    }

    #[test]
    fn subtraction_and_division_keep_operand_order() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = function_ctx();

        let expr = b.binary(
            BinaryOp::Div,
            b.binary(BinaryOp::Sub, b.ident("y"), b.ident("x")),
            b.lit(4),
        );
        let fragment = ExprCompiler::new(&mut ctx).lower(expr).unwrap();
        assert_eq!(
            lines(&fragment),
            ["iload_1", "iload_0", "isub", "ldc 4", "idiv"]
        );
    }

    #[test]
    fn less_than() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = function_ctx();

        let fragment = ExprCompiler::new(&mut ctx)
            .lower(b.binary(BinaryOp::Lt, b.ident("x"), b.lit(10)))
            .unwrap();
        assert_eq!(
            lines(&fragment),
            [
                "iload_0", "ldc 10", "isub", "iflt L0", "ldc 0", "goto L1", "L0:", "ldc 1",
                "L1:"
            ]
        );
        assert_eq!(ctx.stack.current(), 1);
        assert_eq!(ctx.stack.maximum(), 2);
    }

    #[test]
    fn every_comparison_branches_on_its_condition() {
        let cases = [
            (BinaryOp::Eq, "ifeq"),
            (BinaryOp::Ne, "ifne"),
            (BinaryOp::Le, "ifle"),
            (BinaryOp::Lt, "iflt"),
            (BinaryOp::Ge, "ifge"),
            (BinaryOp::Gt, "ifgt"),
        ];
        for (op, mnemonic) in cases {
            let arena = Bump::new();
            let b = AstBuilder::new(&arena);
            let mut ctx = function_ctx();

            let fragment = ExprCompiler::new(&mut ctx)
                .lower(b.binary(op, b.ident("x"), b.ident("y")))
                .unwrap();
            assert_eq!(lines(&fragment)[3], format!("{} L0", mnemonic), "{}", op);
        }
    }

    #[test]
    fn nested_comparisons_allocate_labels_children_first() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = function_ctx();

        let expr = b.binary(
            BinaryOp::Eq,
            b.binary(BinaryOp::Gt, b.ident("x"), b.lit(0)),
            b.lit(1),
        );
        let fragment = ExprCompiler::new(&mut ctx).lower(expr).unwrap();
        let text = lines(&fragment);
        assert_eq!(text[3], "ifgt L0");
        assert_eq!(text[11], "ifeq L2");
        assert_eq!(ctx.symbols.labels_issued(), 4);
    }

    #[test]
    fn logical_and() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = function_ctx();

        let fragment = ExprCompiler::new(&mut ctx)
            .lower(b.binary(BinaryOp::And, b.ident("x"), b.ident("y")))
            .unwrap();
        assert_eq!(
            lines(&fragment),
            [
                "iload_0", "iload_1", "imul", "ifeq L0", "ldc 1", "goto L1", "L0:", "ldc 0",
                "L1:"
            ]
        );
        assert_eq!(ctx.stack.current(), 1);
    }

    #[test]
    fn logical_or_with_leaf_left_reloads_it() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = function_ctx();

        let fragment = ExprCompiler::new(&mut ctx)
            .lower(b.binary(BinaryOp::Or, b.ident("x"), b.ident("y")))
            .unwrap();
        assert_eq!(
            lines(&fragment),
            [
                "iload_0", "iload_1", "iadd", "iload_0", "iadd", "ifeq L0", "ldc 1", "goto L1",
                "L0:", "ldc 0", "L1:"
            ]
        );
        assert_eq!(ctx.stack.current(), 1);
        assert_eq!(ctx.stack.maximum(), 2);
    }

    #[test]
    fn logical_or_with_compound_left_duplicates_it() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = function_ctx();

        let left = b.binary(BinaryOp::Add, b.ident("x"), b.lit(1));
        let fragment = ExprCompiler::new(&mut ctx)
            .lower(b.binary(BinaryOp::Or, left, b.ident("y")))
            .unwrap();
        assert_eq!(
            lines(&fragment),
            [
                "iload_0", "ldc 1", "iadd", "dup", "iload_1", "iadd", "iadd", "ifeq L0",
                "ldc 1", "goto L1", "L0:", "ldc 0", "L1:"
            ]
        );
        assert_eq!(ctx.stack.current(), 1);
        assert_eq!(ctx.stack.maximum(), 3);
    }

    #[test]
    fn logical_or_counts_the_copy_under_a_compound_right() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = function_ctx();

        let left = b.binary(BinaryOp::Add, b.ident("x"), b.lit(1));
        let right = b.binary(BinaryOp::Add, b.ident("y"), b.lit(2));
        let fragment = ExprCompiler::new(&mut ctx)
            .lower(b.binary(BinaryOp::Or, left, right))
            .unwrap();
        assert_eq!(
            lines(&fragment)[..9],
            ["iload_0", "ldc 1", "iadd", "dup", "iload_1", "ldc 2", "iadd", "iadd", "iadd"]
        );
        // x+1, its copy, y, 2
        assert_eq!(ctx.stack.maximum(), 4);
        assert_eq!(ctx.stack.current(), 1);
    }
}
