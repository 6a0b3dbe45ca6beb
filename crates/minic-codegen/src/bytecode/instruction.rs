//! JVM instructions emitted by the generator.
//!
//! Only the integer subset MiniC needs is modelled. [`Display`] renders the
//! Jasmin spelling, including the short `_N` forms for the first four slots.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use super::Label;

/// Comparison against zero used by conditional branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cond {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Cond {
    /// The Jasmin mnemonic of the branch instruction.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Cond::Eq => "ifeq",
            Cond::Ne => "ifne",
            Cond::Lt => "iflt",
            Cond::Le => "ifle",
            Cond::Gt => "ifgt",
            Cond::Ge => "ifge",
        }
    }
}

/// A single instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Push an integer constant.
    Ldc(i32),
    /// Load an int local.
    Iload(u16),
    /// Store an int local.
    Istore(u16),
    Iadd,
    Isub,
    Imul,
    Idiv,
    Irem,
    Ineg,
    /// Duplicate the top of stack.
    Dup,
    /// Discard the top of stack.
    Pop,
    /// Branch to the label if the popped value compares to zero.
    If(Cond, Label),
    Goto(Label),
    /// `getstatic <field> <descriptor>`; `field` is `owner/name`.
    GetStatic { field: String, descriptor: String },
    /// `putstatic <field> <descriptor>`
    PutStatic { field: String, descriptor: String },
    /// `invokestatic <owner>/<name><descriptor>`
    InvokeStatic(String),
    /// `invokevirtual <owner>/<name><descriptor>`
    InvokeVirtual(String),
    /// Return an int.
    Ireturn,
    /// Return from a void method.
    Return,
}

impl Instruction {
    /// The label this instruction jumps to, if it is a jump.
    pub fn jump_target(&self) -> Option<Label> {
        match self {
            Instruction::If(_, label) | Instruction::Goto(label) => Some(*label),
            _ => None,
        }
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Instruction::Ireturn | Instruction::Return)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Ldc(value) => write!(f, "ldc {}", value),
            Instruction::Iload(slot) if *slot <= 3 => write!(f, "iload_{}", slot),
            Instruction::Iload(slot) => write!(f, "iload {}", slot),
            Instruction::Istore(slot) if *slot <= 3 => write!(f, "istore_{}", slot),
            Instruction::Istore(slot) => write!(f, "istore {}", slot),
            Instruction::Iadd => f.write_str("iadd"),
            Instruction::Isub => f.write_str("isub"),
            Instruction::Imul => f.write_str("imul"),
            Instruction::Idiv => f.write_str("idiv"),
            Instruction::Irem => f.write_str("irem"),
            Instruction::Ineg => f.write_str("ineg"),
            Instruction::Dup => f.write_str("dup"),
            Instruction::Pop => f.write_str("pop"),
            Instruction::If(cond, label) => write!(f, "{} {}", cond.mnemonic(), label),
            Instruction::Goto(label) => write!(f, "goto {}", label),
            Instruction::GetStatic { field, descriptor } => {
                write!(f, "getstatic {} {}", field, descriptor)
            }
            Instruction::PutStatic { field, descriptor } => {
                write!(f, "putstatic {} {}", field, descriptor)
            }
            Instruction::InvokeStatic(method) => write!(f, "invokestatic {}", method),
            Instruction::InvokeVirtual(method) => write!(f, "invokevirtual {}", method),
            Instruction::Ireturn => f.write_str("ireturn"),
            Instruction::Return => f.write_str("return"),
        }
    }
}
