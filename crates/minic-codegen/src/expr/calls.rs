//! Function calls, including the print builtin.

use minic_ast::CallExpr;
use minic_core::{CodegenError, Result};

use super::ExprCompiler;
use crate::bytecode::{Fragment, Instruction};

const PRINT_STREAM_FIELD: &str = "java/lang/System/out";
const PRINT_STREAM_DESCRIPTOR: &str = "Ljava/io/PrintStream;";
const PRINTLN_INT: &str = "java/io/PrintStream/println(I)V";

pub(super) fn lower_call(compiler: &mut ExprCompiler<'_>, call: &CallExpr<'_>) -> Result<Fragment> {
    if call.callee.name == compiler.ctx.config().print_builtin() {
        return lower_print(compiler, call);
    }

    // Resolve before lowering the arguments so a bad call emits nothing.
    let signature = compiler.ctx.symbols.signature_of(call.callee.name)?;
    if signature.arity() != call.args.len() {
        return Err(CodegenError::ArgumentCountMismatch {
            name: signature.name.clone(),
            expected: signature.arity(),
            found: call.args.len(),
        });
    }
    let target = compiler.ctx.qualified(&signature.descriptor());
    let returns_value = !signature.return_type.is_void();

    compiler.ctx.stack.push();
    let mut fragment = Fragment::new();
    for arg in call.args {
        fragment.append(compiler.lower(arg)?);
    }
    fragment.push(Instruction::InvokeStatic(target));

    for _ in call.args {
        compiler.ctx.stack.pop();
    }
    compiler.ctx.stack.pop();
    if returns_value {
        compiler.ctx.stack.push();
    }

    Ok(fragment)
}

/// `println(int)` on `System.out`.
fn lower_print(compiler: &mut ExprCompiler<'_>, call: &CallExpr<'_>) -> Result<Fragment> {
    let [arg] = call.args else {
        return Err(CodegenError::ArgumentCountMismatch {
            name: call.callee.name.to_string(),
            expected: 1,
            found: call.args.len(),
        });
    };

    let mut fragment = Fragment::of(Instruction::GetStatic {
        field: PRINT_STREAM_FIELD.to_string(),
        descriptor: PRINT_STREAM_DESCRIPTOR.to_string(),
    });
    compiler.ctx.stack.push();
    fragment.append(compiler.lower(arg)?);
    fragment.push(Instruction::InvokeVirtual(PRINTLN_INT.to_string()));
    compiler.ctx.stack.pop();
    compiler.ctx.stack.pop();

    Ok(fragment)
}
