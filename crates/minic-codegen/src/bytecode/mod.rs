//! Instruction model for Jasmin assembler text.
//!
//! - [`Instruction`]: a single JVM instruction with its operands
//! - [`Label`]: a unique jump target
//! - [`Fragment`]: the ordered lines produced for one tree node

mod fragment;
mod instruction;
mod label;

pub use fragment::{Directive, Fragment, Line};
pub use instruction::{Cond, Instruction};
pub use label::Label;
