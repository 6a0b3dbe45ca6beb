//! Typed syntax tree for MiniC.
//!
//! The tree is the input boundary of the code generator. Nodes live in a
//! [`bumpalo::Bump`] arena and are `Copy`; children are borrowed for the arena
//! lifetime `'ast`. Lexing and parsing are not part of this crate: trees are
//! produced by an external front end or built directly with [`AstBuilder`].
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use minic_ast::{AstBuilder, BinaryOp, TypeSpec};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//!
//! // int twice(int n) { return n + n; }
//! let body = b.compound(
//!     &[],
//!     &[b.return_value(b.binary(BinaryOp::Add, b.ident("n"), b.ident("n")))],
//! );
//! let twice = b.fun(TypeSpec::Int, "twice", &[b.param("n")], body);
//! let program = b.program(&[twice]);
//!
//! assert_eq!(program.decls.len(), 1);
//! ```

mod builder;
pub mod decl;
pub mod expr;
pub mod ops;
pub mod stmt;

pub use builder::AstBuilder;
pub use decl::*;
pub use expr::*;
pub use ops::*;
pub use stmt::*;

use std::fmt;

/// An identifier as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ident<'ast> {
    pub name: &'ast str,
}

impl<'ast> Ident<'ast> {
    pub fn new(name: &'ast str) -> Self {
        Self { name }
    }
}

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
