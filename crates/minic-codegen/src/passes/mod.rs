//! Program-wide passes that run before any function body is lowered.
//!
//! - [`registration`]: register globals and function signatures so lookups
//!   and calls can refer to declarations that appear later in the source

pub mod registration;

pub use registration::{RegistrationOutput, RegistrationPass};
