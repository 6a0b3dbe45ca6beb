//! Shared vocabulary for the MiniC code generator.
//!
//! This crate holds the types every other crate in the workspace agrees on:
//! the value types a variable can carry, the return types a function can
//! declare, and the error type every lowering pass reports.

mod data_type;
mod error;

pub use data_type::{DataType, ReturnType};
pub use error::CodegenError;

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, CodegenError>;
