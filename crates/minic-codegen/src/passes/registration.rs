//! Registration Pass - record every global and function signature.
//!
//! Walks the top-level declarations once, without looking into function
//! bodies. Globals are registered first, then functions, so that a call may
//! target a function declared after its caller.

use minic_ast::{FunDecl, Program, TypeSpec, VarDecl};
use minic_core::{DataType, Result, ReturnType};
use tracing::debug;

use crate::context::CodegenContext;
use crate::symbols::{ENTRY_POINT, FunctionSignature};

/// Counts of what the pass registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationOutput {
    pub globals: usize,
    pub functions: usize,
}

pub struct RegistrationPass<'a> {
    ctx: &'a mut CodegenContext,
}

impl<'a> RegistrationPass<'a> {
    pub fn new(ctx: &'a mut CodegenContext) -> Self {
        Self { ctx }
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(&mut self, program: &Program<'_>) -> Result<RegistrationOutput> {
        let mut output = RegistrationOutput::default();

        for global in program.globals() {
            self.register_global(global)?;
            output.globals += 1;
        }
        for fun in program.functions() {
            self.register_function(fun)?;
            output.functions += 1;
        }

        debug!(
            globals = output.globals,
            functions = output.functions,
            "registration complete"
        );
        Ok(output)
    }

    fn register_global(&mut self, decl: &VarDecl<'_>) -> Result<()> {
        let data_type = if decl.is_array() {
            DataType::IntArray
        } else {
            DataType::Int
        };
        self.ctx
            .symbols
            .register_global(decl.name.name, data_type, decl.init())
    }

    fn register_function(&mut self, fun: &FunDecl<'_>) -> Result<()> {
        let signature = if fun.name.name == ENTRY_POINT {
            FunctionSignature::entry_point()
        } else {
            let params = fun
                .params
                .iter()
                .map(|p| {
                    if p.is_array {
                        DataType::IntArray
                    } else {
                        DataType::Int
                    }
                })
                .collect();
            FunctionSignature::new(fun.name.name, params, return_type(fun.return_type))
        };
        self.ctx.symbols.register_function(signature)
    }
}

fn return_type(spec: TypeSpec) -> ReturnType {
    match spec {
        TypeSpec::Int => ReturnType::Int,
        TypeSpec::Void => ReturnType::Void,
    }
}
