//! Value and return types.
//!
//! MiniC only distinguishes the two shapes that change emitted code: an
//! integer scalar and an integer array.

use std::fmt;

/// The type of a variable or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// A 32-bit integer scalar.
    Int,
    /// An array of 32-bit integers.
    IntArray,
}

impl DataType {
    /// JVM field/parameter descriptor for this type.
    pub fn descriptor(self) -> &'static str {
        match self {
            DataType::Int => "I",
            DataType::IntArray => "[I",
        }
    }

    /// Whether values of this type are loaded onto the operand stack.
    pub fn is_scalar(self) -> bool {
        matches!(self, DataType::Int)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Int => write!(f, "int"),
            DataType::IntArray => write!(f, "int[]"),
        }
    }
}

/// The declared return type of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnType {
    Int,
    Void,
}

impl ReturnType {
    /// JVM return descriptor.
    pub fn descriptor(self) -> &'static str {
        match self {
            ReturnType::Int => "I",
            ReturnType::Void => "V",
        }
    }

    pub fn is_void(self) -> bool {
        matches!(self, ReturnType::Void)
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Int => write!(f, "int"),
            ReturnType::Void => write!(f, "void"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors() {
        assert_eq!(DataType::Int.descriptor(), "I");
        assert_eq!(DataType::IntArray.descriptor(), "[I");
        assert_eq!(ReturnType::Int.descriptor(), "I");
        assert_eq!(ReturnType::Void.descriptor(), "V");
    }

    #[test]
    fn only_int_is_scalar() {
        assert!(DataType::Int.is_scalar());
        assert!(!DataType::IntArray.is_scalar());
    }

    #[test]
    fn display() {
        assert_eq!(DataType::IntArray.to_string(), "int[]");
        assert_eq!(ReturnType::Void.to_string(), "void");
    }
}
