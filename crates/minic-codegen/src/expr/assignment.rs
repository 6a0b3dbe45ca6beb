//! `IDENT = expr`

use minic_ast::AssignExpr;
use minic_core::Result;

use super::ExprCompiler;
use crate::bytecode::Fragment;

/// The value is stored and leaves the stack; an assignment produces nothing.
pub(super) fn lower_assign(
    compiler: &mut ExprCompiler<'_>,
    assign: &AssignExpr<'_>,
) -> Result<Fragment> {
    let mut fragment = compiler.lower(assign.value)?;
    let store = compiler.ctx.store(assign.target.name)?;
    fragment.push(store);
    compiler.ctx.stack.pop();
    Ok(fragment)
}
