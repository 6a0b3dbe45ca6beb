//! MiniC Code Generator
//!
//! A single-pass generator that lowers a typed MiniC syntax tree to Jasmin
//! assembler text for one JVM class.
//!
//! ## Architecture
//!
//! - **Registration**: record globals and function signatures so calls can
//!   refer forward
//! - **Lowering**: walk each function body bottom-up, producing a fragment per
//!   node and tracking operand stack depth as instructions are emitted
//! - **Assembly**: stitch the class header, fields, initializers and methods
//!   into the final text
//!
//! ## Modules
//!
//! - [`bytecode`]: Instruction model, labels and text fragments
//! - [`symbols`]: Slot bindings, globals, function signatures and labels
//! - [`stack`]: Operand stack depth tracking for `.limit stack`
//! - [`expr`]: Expression lowering
//! - [`stmt`]: Statement and local declaration lowering
//! - [`function_compiler`]: Method prologue and epilogue
//! - [`assembler`]: Whole-program assembly
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use minic_ast::{AstBuilder, TypeSpec};
//! use minic_codegen::{CodegenConfig, generate};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let program = b.program(&[b.fun(
//!     TypeSpec::Void,
//!     "main",
//!     &[],
//!     b.compound(&[], &[b.expr_stmt(b.call("_print", &[b.lit(1)]))]),
//! )]);
//!
//! let compiled = generate(&program, &CodegenConfig::default()).unwrap();
//! assert!(compiled.text().contains("invokevirtual java/io/PrintStream/println(I)V"));
//! ```

pub mod assembler;
pub mod bytecode;
pub mod config;
pub mod context;
pub mod expr;
pub mod function_compiler;
pub mod passes;
pub mod stack;
pub mod static_init;
pub mod stmt;
pub mod symbols;

pub use assembler::{CompiledProgram, ProgramAssembler};
pub use config::CodegenConfig;
pub use context::CodegenContext;
pub use expr::ExprCompiler;
pub use function_compiler::{CompiledFunction, FunctionCompiler};
pub use passes::{RegistrationOutput, RegistrationPass};
pub use stack::StackTracker;
pub use stmt::StmtCompiler;
pub use symbols::{FunctionSignature, GlobalVar, SymbolTable, VarLookup};

pub use minic_core::{CodegenError, Result};

use minic_ast::Program;

/// Lower `program` to a class using `config`.
pub fn generate(program: &Program<'_>, config: &CodegenConfig) -> Result<CompiledProgram> {
    ProgramAssembler::new(config.clone()).assemble(program)
}

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Install a `tracing` subscriber that writes through the test harness.
    ///
    /// The filter comes from `RUST_LOG`, defaulting to `debug`. Safe to call
    /// from every test.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
