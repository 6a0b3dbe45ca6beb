//! MiniC to Jasmin.
//!
//! Facade over the workspace crates:
//!
//! - [`ast`]: the arena-allocated syntax tree and [`AstBuilder`]
//! - [`codegen`]: lowering to Jasmin text
//!
//! The output boundary is [`compile_to_writer`], which lowers a program and
//! writes the class text to any [`io::Write`].

use std::io;

use thiserror::Error;
use tracing::info;

pub use minic_ast as ast;
pub use minic_codegen as codegen;

pub use minic_ast::AstBuilder;
pub use minic_codegen::{CodegenConfig, CompiledFunction, CompiledProgram, ProgramAssembler, generate};
pub use minic_core::{CodegenError, DataType, ReturnType};

/// Commonly used items.
pub mod prelude {
    pub use minic_ast::{AstBuilder, BinaryOp, Program, TypeSpec, UnaryOp};
    pub use minic_codegen::{CodegenConfig, CompiledProgram, generate};
    pub use minic_core::CodegenError;

    pub use crate::{EmitError, compile_to_writer};
}

/// Failure to produce the class file text.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    #[error("failed to write assembler output: {0}")]
    Io(#[from] io::Error),
}

/// Lower `program` and write the Jasmin text to `out`.
///
/// Nothing is written when lowering fails.
pub fn compile_to_writer<W: io::Write>(
    program: &ast::Program<'_>,
    config: &CodegenConfig,
    out: W,
) -> Result<CompiledProgram, EmitError> {
    let compiled = generate(program, config)?;
    compiled.write_to(out)?;
    info!(
        class = config.class_name(),
        bytes = compiled.text().len(),
        "wrote class"
    );
    Ok(compiled)
}
