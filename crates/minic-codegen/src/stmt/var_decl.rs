//! Local variable declarations.

use minic_ast::{VarDecl, VarDeclKind};
use minic_core::{DataType, Result};

use super::StmtCompiler;
use crate::bytecode::{Fragment, Instruction};

impl<'a> StmtCompiler<'a> {
    /// Bind a local to the next slot.
    ///
    /// Only an initialized scalar emits code. Arrays are bound but their
    /// storage is never allocated.
    pub fn lower_local(&mut self, decl: &VarDecl<'_>) -> Result<Fragment> {
        let name = decl.name.name;
        match decl.kind {
            VarDeclKind::Plain => {
                self.ctx.symbols.bind_local(name, DataType::Int, None)?;
                Ok(Fragment::new())
            }
            VarDeclKind::Init(value) => {
                let slot = self.ctx.symbols.bind_local(name, DataType::Int, Some(value))?;
                let mut fragment = Fragment::of(Instruction::Ldc(value));
                fragment.push(Instruction::Istore(slot));
                self.ctx.stack.push();
                self.ctx.stack.pop();
                Ok(fragment)
            }
            VarDeclKind::Array(_) => {
                self.ctx.symbols.bind_local(name, DataType::IntArray, None)?;
                Ok(Fragment::new())
            }
        }
    }
}
