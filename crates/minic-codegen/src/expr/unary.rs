//! Prefix operators: `-`, `!`, `++`, `--`.

use minic_ast::{UnaryExpr, UnaryOp};
use minic_core::Result;

use super::ExprCompiler;
use crate::bytecode::{Cond, Fragment, Instruction};

pub(super) fn lower_unary(
    compiler: &mut ExprCompiler<'_>,
    expr: &UnaryExpr<'_>,
) -> Result<Fragment> {
    let mut fragment = compiler.lower(expr.operand)?;

    match expr.op {
        UnaryOp::Neg => fragment.push(Instruction::Ineg),
        UnaryOp::PreInc | UnaryOp::PreDec => {
            fragment.push(Instruction::Ldc(1));
            fragment.push(if expr.op == UnaryOp::PreInc {
                Instruction::Iadd
            } else {
                Instruction::Isub
            });
            compiler.ctx.stack.push();
            compiler.ctx.stack.pop();

            // A variable operand is updated in place; the new value stays on
            // the stack as the result.
            if let Some(target) = expr.operand.as_ident() {
                fragment.push(Instruction::Dup);
                compiler.ctx.stack.push();
                fragment.push(compiler.ctx.store(target.name)?);
                compiler.ctx.stack.pop();
            }
        }
        UnaryOp::Not => lower_not(compiler, &mut fragment),
    }

    Ok(fragment)
}

/// Materialize `operand == 0` as 0/1.
fn lower_not(compiler: &mut ExprCompiler<'_>, fragment: &mut Fragment) {
    let symbols = &mut compiler.ctx.symbols;
    let entry = symbols.new_label();
    let on_zero = symbols.new_label();
    let end = symbols.new_label();

    fragment.push(Instruction::If(Cond::Eq, on_zero));
    fragment.label(entry);
    fragment.push(Instruction::Ldc(0));
    fragment.push(Instruction::Goto(end));
    fragment.label(on_zero);
    fragment.push(Instruction::Ldc(1));
    fragment.label(end);

    compiler.ctx.stack.pop();
    compiler.ctx.stack.push();
}
