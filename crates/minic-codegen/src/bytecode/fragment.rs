//! Bytecode fragments.
//!
//! A [`Fragment`] is the text produced for one tree node. Parents consume their
//! children's fragments by value and splice them into their own, so the final
//! program is assembled bottom-up while textual order follows child order.

use std::fmt;

use super::{Instruction, Label};

/// Assembler directives that appear inside method text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `.method <access> <descriptor>`
    Method { access: String, descriptor: String },
    /// `.limit stack N`
    LimitStack(usize),
    /// `.limit locals N`
    LimitLocals(usize),
    /// `.end method`
    EndMethod,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Method { access, descriptor } => {
                write!(f, ".method {} {}", access, descriptor)
            }
            Directive::LimitStack(n) => write!(f, ".limit stack {}", n),
            Directive::LimitLocals(n) => write!(f, ".limit locals {}", n),
            Directive::EndMethod => f.write_str(".end method"),
        }
    }
}

/// One line of assembler text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Insn(Instruction),
    /// A label definition, `L<n>:`
    Label(Label),
    Directive(Directive),
    Blank,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Insn(insn) => write!(f, "{}", insn),
            Line::Label(label) => write!(f, "{}:", label),
            Line::Directive(directive) => write!(f, "{}", directive),
            Line::Blank => Ok(()),
        }
    }
}

/// The lines produced for one tree node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    lines: Vec<Line>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding a single instruction.
    pub fn of(insn: Instruction) -> Self {
        Self {
            lines: vec![Line::Insn(insn)],
        }
    }

    pub fn push(&mut self, insn: Instruction) {
        self.lines.push(Line::Insn(insn));
    }

    /// Define `label` at the current position.
    pub fn label(&mut self, label: Label) {
        self.lines.push(Line::Label(label));
    }

    pub fn directive(&mut self, directive: Directive) {
        self.lines.push(Line::Directive(directive));
    }

    /// Close a method: `.end method` followed by a blank line.
    pub fn end_method(&mut self) {
        self.directive(Directive::EndMethod);
        self.lines.push(Line::Blank);
    }

    /// Splice a child fragment onto the end of this one.
    pub fn append(&mut self, mut child: Fragment) {
        self.lines.append(&mut child.lines);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Iterate the instructions, skipping labels and directives.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.lines.iter().filter_map(|line| match line {
            Line::Insn(insn) => Some(insn),
            _ => None,
        })
    }

    /// Labels defined in this fragment, in order.
    pub fn defined_labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.lines.iter().filter_map(|line| match line {
            Line::Label(label) => Some(*label),
            _ => None,
        })
    }

    /// Labels referenced by jumps in this fragment, in order.
    pub fn jump_targets(&self) -> impl Iterator<Item = Label> + '_ {
        self.instructions().filter_map(Instruction::jump_target)
    }

    /// Whether the last instruction is a return.
    pub fn ends_with_return(&self) -> bool {
        self.instructions().last().is_some_and(Instruction::is_return)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl From<Instruction> for Fragment {
    fn from(insn: Instruction) -> Self {
        Fragment::of(insn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::Cond;

    #[test]
    fn renders_one_line_per_entry() {
        let mut fragment = Fragment::of(Instruction::Ldc(7));
        fragment.push(Instruction::If(Cond::Eq, Label(1)));
        fragment.label(Label(1));
        fragment.end_method();

        assert_eq!(fragment.to_string(), "ldc 7\nifeq L1\nL1:\n.end method\n\n");
    }

    #[test]
    fn append_preserves_child_order() {
        let mut parent = Fragment::of(Instruction::Iload(0));
        parent.append(Fragment::of(Instruction::Iload(1)));
        parent.push(Instruction::Iadd);

        let insns: Vec<_> = parent.instructions().cloned().collect();
        assert_eq!(
            insns,
            [Instruction::Iload(0), Instruction::Iload(1), Instruction::Iadd]
        );
    }

    #[test]
    fn labels_and_targets() {
        let mut fragment = Fragment::new();
        fragment.push(Instruction::If(Cond::Ne, Label(4)));
        fragment.push(Instruction::Goto(Label(5)));
        fragment.label(Label(4));
        fragment.label(Label(5));

        assert_eq!(fragment.jump_targets().collect::<Vec<_>>(), [Label(4), Label(5)]);
        assert_eq!(fragment.defined_labels().collect::<Vec<_>>(), [Label(4), Label(5)]);
    }

    #[test]
    fn ends_with_return_ignores_trailing_directives() {
        let mut fragment = Fragment::of(Instruction::Return);
        fragment.end_method();
        assert!(fragment.ends_with_return());
        assert!(!Fragment::new().ends_with_return());
    }

    #[test]
    fn directives() {
        let method = Directive::Method {
            access: "public static".to_string(),
            descriptor: "add(II)I".to_string(),
        };
        assert_eq!(method.to_string(), ".method public static add(II)I");
        assert_eq!(Directive::LimitStack(3).to_string(), ".limit stack 3");
        assert_eq!(Directive::LimitLocals(2).to_string(), ".limit locals 2");
    }
}
