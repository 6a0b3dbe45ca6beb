//! Return statements.

use minic_ast::ReturnStmt;
use minic_core::Result;
use tracing::trace;

use super::StmtCompiler;
use crate::bytecode::{Fragment, Instruction};

impl<'a> StmtCompiler<'a> {
    /// Lower a `return`.
    ///
    /// When `closes_method` is set this is the trailing statement of the
    /// body: the method end marker follows and the function's stack watermark
    /// is archived for its prologue.
    pub fn lower_return(&mut self, ret: &ReturnStmt<'_>, closes_method: bool) -> Result<Fragment> {
        let mut fragment = match ret.value {
            Some(value) => {
                let mut fragment = self.expr_compiler().lower(value)?;
                fragment.push(Instruction::Ireturn);
                self.ctx.stack.pop();
                fragment
            }
            None => Fragment::of(Instruction::Return),
        };

        if closes_method {
            fragment.end_method();
            let watermark = self.ctx.stack.archive_and_reset();
            trace!(watermark, "closed method at trailing return");
        }

        Ok(fragment)
    }
}
