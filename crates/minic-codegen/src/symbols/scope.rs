//! Per-function variable bindings.

use minic_core::{CodegenError, DataType, Result};
use rustc_hash::FxHashMap;

/// A variable bound to a local slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBinding {
    pub name: String,
    pub data_type: DataType,
    pub slot: u16,
    /// Literal initializer from the declaration, if any.
    pub init: Option<i32>,
}

/// Slot bindings of the function being lowered.
///
/// Slots are handed out in first-bound order starting at 0 and are never
/// reused, so the bound names always occupy exactly `0..len()`.
#[derive(Debug, Default)]
pub struct FunctionScope {
    variables: FxHashMap<String, VarBinding>,
    next_slot: u16,
}

impl FunctionScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every binding; the next bind gets slot 0.
    pub fn clear(&mut self) {
        self.variables.clear();
        self.next_slot = 0;
    }

    /// Bind `name` to the next free slot.
    pub fn bind(&mut self, name: &str, data_type: DataType, init: Option<i32>) -> Result<u16> {
        if self.variables.contains_key(name) {
            return Err(CodegenError::DuplicateBinding {
                name: name.to_string(),
            });
        }

        let slot = self.next_slot;
        self.next_slot += 1;
        self.variables.insert(
            name.to_string(),
            VarBinding {
                name: name.to_string(),
                data_type,
                slot,
                init,
            },
        );
        Ok(slot)
    }

    pub fn get(&self, name: &str) -> Option<&VarBinding> {
        self.variables.get(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All bindings ordered by slot.
    pub fn bindings(&self) -> Vec<&VarBinding> {
        let mut bindings: Vec<_> = self.variables.values().collect();
        bindings.sort_by_key(|b| b.slot);
        bindings
    }
}
