//! Variable references.

use minic_ast::Ident;
use minic_core::Result;

use super::ExprCompiler;
use crate::bytecode::Fragment;

/// Load a scalar variable. Array references load nothing and leave the
/// stack untouched.
pub(super) fn lower_ident(compiler: &mut ExprCompiler<'_>, ident: Ident<'_>) -> Result<Fragment> {
    let mut fragment = Fragment::new();
    if let Some(load) = compiler.ctx.load(ident.name)? {
        fragment.push(load);
        compiler.ctx.stack.push();
    }
    Ok(fragment)
}
