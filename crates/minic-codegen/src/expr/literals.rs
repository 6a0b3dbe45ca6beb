//! Integer literals.

use minic_core::Result;

use super::ExprCompiler;
use crate::bytecode::{Fragment, Instruction};

pub(super) fn lower_literal(compiler: &mut ExprCompiler<'_>, value: i32) -> Result<Fragment> {
    compiler.ctx.stack.push();
    Ok(Fragment::of(Instruction::Ldc(value)))
}
