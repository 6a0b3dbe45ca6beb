//! Jump labels.

use std::fmt;

/// A jump target.
///
/// Labels are handed out by the symbol table from a single counter shared by
/// the whole program, so two labels never compare equal unless they are the
/// same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(pub(crate) u32);

impl Label {
    /// The numeric id of this label.
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Label(0).to_string(), "L0");
        assert_eq!(Label(17).to_string(), "L17");
    }
}
