//! Error type for code generation.
//!
//! Every error is fail-fast: the first one aborts lowering of the whole
//! program, since a partially emitted class cannot be assembled.

use thiserror::Error;

/// Errors raised while lowering a MiniC program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// An identifier is bound neither in the active function nor globally.
    #[error("unbound name '{name}'")]
    UnboundName { name: String },

    /// A name was declared twice in the same scope (one function, or the globals).
    #[error("'{name}' is already bound in this scope")]
    DuplicateBinding { name: String },

    /// A call targets a function that was never declared.
    #[error("call to unknown function '{name}'")]
    UnknownFunction { name: String },

    /// Two functions share a name.
    #[error("function '{name}' is defined more than once")]
    DuplicateFunction { name: String },

    /// A call passes the wrong number of arguments.
    #[error("function '{name}' expects {expected} argument(s), found {found}")]
    ArgumentCountMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A valid tree shape the generator does not lower.
    #[error("unsupported construct: {construct}")]
    UnsupportedConstruct { construct: String },
}

impl CodegenError {
    /// Shorthand for [`CodegenError::UnsupportedConstruct`].
    pub fn unsupported(construct: impl Into<String>) -> Self {
        CodegenError::UnsupportedConstruct {
            construct: construct.into(),
        }
    }

    /// The name the error is about, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            CodegenError::UnboundName { name }
            | CodegenError::DuplicateBinding { name }
            | CodegenError::UnknownFunction { name }
            | CodegenError::DuplicateFunction { name }
            | CodegenError::ArgumentCountMismatch { name, .. } => Some(name),
            CodegenError::UnsupportedConstruct { .. } => None,
        }
    }
}
