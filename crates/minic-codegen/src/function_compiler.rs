//! Function compiler for lowering one function declaration to a method.
//!
//! This module provides [`FunctionCompiler`] which lowers a single function
//! to Jasmin method text. It handles:
//!
//! - Resetting the symbol scope and stack tracker
//! - Binding `main`'s implicit argument array and the declared parameters
//! - Lowering the body
//! - Appending the implicit return and method end when the body has no
//!   trailing `return`
//! - Emitting the prologue with the archived stack watermark
//!
//! # Example
//!
//! ```ignore
//! let compiled = FunctionCompiler::new(&mut ctx, fun).compile()?;
//! println!("{}", compiled.code);
//! ```

use minic_ast::FunDecl;
use minic_core::{DataType, Result};
use tracing::debug;

use crate::bytecode::{Directive, Fragment, Instruction};
use crate::context::CodegenContext;
use crate::stmt::StmtCompiler;
use crate::symbols::FunctionSignature;

/// Name bound to the entry point's `String[]` parameter.
const ENTRY_ARGS: &str = "args";

/// A lowered method with its frame limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFunction {
    /// Function name.
    pub name: String,
    /// Name plus JVM descriptor, e.g. `add(II)I`.
    pub descriptor: String,
    /// Value of `.limit stack`.
    pub stack_limit: usize,
    /// Value of `.limit locals`.
    pub locals_limit: usize,
    /// The complete method, from `.method` through `.end method`.
    pub code: Fragment,
}

/// Lowers a single function declaration.
pub struct FunctionCompiler<'a, 'ast> {
    ctx: &'a mut CodegenContext,
    decl: &'ast FunDecl<'ast>,
}

impl<'a, 'ast> FunctionCompiler<'a, 'ast> {
    pub fn new(ctx: &'a mut CodegenContext, decl: &'ast FunDecl<'ast>) -> Self {
        Self { ctx, decl }
    }

    /// Lower the function. Its signature must already be registered.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile(mut self) -> Result<CompiledFunction> {
        let signature = self.ctx.symbols.signature_of(self.decl.name.name)?.clone();

        self.ctx.symbols.begin_function_scope();
        self.ctx.stack.enter_function();
        self.setup_parameters(&signature)?;

        let (mut body, closed) = StmtCompiler::new(self.ctx).lower_function_body(&self.decl.body)?;
        if !closed {
            if signature.return_type.is_void() {
                body.push(Instruction::Return);
            }
            body.end_method();
            self.ctx.stack.archive_and_reset();
        }

        let stack_limit = self.ctx.stack.max_for_next_prologue();
        let locals_limit = self.ctx.symbols.local_count();
        let descriptor = signature.descriptor();

        let mut code = Fragment::new();
        code.directive(Directive::Method {
            access: "public static".to_string(),
            descriptor: descriptor.clone(),
        });
        code.directive(Directive::LimitStack(stack_limit));
        code.directive(Directive::LimitLocals(locals_limit));
        code.append(body);

        debug!(
            name = %signature.name,
            %descriptor,
            stack_limit,
            locals_limit,
            "compiled function"
        );

        Ok(CompiledFunction {
            name: signature.name,
            descriptor,
            stack_limit,
            locals_limit,
            code,
        })
    }

    fn setup_parameters(&mut self, signature: &FunctionSignature) -> Result<()> {
        if signature.is_entry_point() {
            self.ctx.symbols.bind_parameter(ENTRY_ARGS, DataType::IntArray)?;
        }

        for param in self.decl.params {
            let data_type = if param.is_array {
                DataType::IntArray
            } else {
                DataType::Int
            };
            self.ctx.symbols.bind_parameter(param.name.name, data_type)?;
        }

        Ok(())
    }
}
