//! Operator definitions for MiniC expressions.

use std::fmt;

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
    /// `++`
    PreInc,
    /// `--`
    PreDec,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::PreInc => "++",
            UnaryOp::PreDec => "--",
        };
        write!(f, "{}", s)
    }
}

/// Infix operators, grouped by how they lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `+`
    Add,
    /// `-`
    Sub,

    // Relational
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<=`
    Le,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `>`
    Gt,

    // Logical
    /// `and`
    And,
    /// `or`
    Or,
}

impl BinaryOp {
    pub fn is_arithmetic(&self) -> bool {
        use BinaryOp::*;
        matches!(self, Mul | Div | Mod | Add | Sub)
    }

    pub fn is_relational(&self) -> bool {
        use BinaryOp::*;
        matches!(self, Eq | Ne | Le | Lt | Ge | Gt)
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOp::*;
        let s = match self {
            Mul => "*",
            Div => "/",
            Mod => "%",
            Add => "+",
            Sub => "-",
            Eq => "==",
            Ne => "!=",
            Le => "<=",
            Lt => "<",
            Ge => ">=",
            Gt => ">",
            And => "and",
            Or => "or",
        };
        write!(f, "{}", s)
    }
}
