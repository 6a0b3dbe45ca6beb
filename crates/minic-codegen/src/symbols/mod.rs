//! Symbol table for one program-lowering run.
//!
//! Owns three kinds of state with different lifetimes:
//! - the active function's slot bindings, cleared at every function start
//! - the program-wide globals and function signatures
//! - the label counter, shared by the whole program and never reset

mod scope;
mod signature;

pub use scope::{FunctionScope, VarBinding};
pub use signature::{ENTRY_POINT, FunctionSignature};

use minic_core::{CodegenError, DataType, Result};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::bytecode::Label;

/// A global variable, stored as a static field of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalVar {
    pub name: String,
    pub data_type: DataType,
    pub init: Option<i32>,
}

/// Result of resolving a variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarLookup {
    /// Bound in the active function scope.
    Local { data_type: DataType, slot: u16 },
    /// A static field of the generated class.
    Global { data_type: DataType },
}

impl VarLookup {
    pub fn data_type(&self) -> DataType {
        match self {
            VarLookup::Local { data_type, .. } | VarLookup::Global { data_type } => *data_type,
        }
    }
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    scope: FunctionScope,
    globals: FxHashMap<String, GlobalVar>,
    /// Global names in declaration order.
    global_order: Vec<String>,
    functions: FxHashMap<String, FunctionSignature>,
    next_label: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Function Scope
    // ==========================================================================

    /// Clear the variable bindings for a new function.
    pub fn begin_function_scope(&mut self) {
        self.scope.clear();
    }

    pub fn bind_parameter(&mut self, name: &str, data_type: DataType) -> Result<u16> {
        let slot = self.scope.bind(name, data_type, None)?;
        trace!(name, %data_type, slot, "bound parameter");
        Ok(slot)
    }

    pub fn bind_local(&mut self, name: &str, data_type: DataType, init: Option<i32>) -> Result<u16> {
        let slot = self.scope.bind(name, data_type, init)?;
        trace!(name, %data_type, slot, "bound local");
        Ok(slot)
    }

    /// Resolve a name, preferring the active function scope over globals.
    pub fn lookup(&self, name: &str) -> Result<VarLookup> {
        if let Some(binding) = self.scope.get(name) {
            return Ok(VarLookup::Local {
                data_type: binding.data_type,
                slot: binding.slot,
            });
        }

        if let Some(global) = self.globals.get(name) {
            return Ok(VarLookup::Global {
                data_type: global.data_type,
            });
        }

        Err(CodegenError::UnboundName {
            name: name.to_string(),
        })
    }

    /// Number of names bound in the active function, i.e. its locals limit.
    pub fn local_count(&self) -> usize {
        self.scope.len()
    }

    pub fn scope(&self) -> &FunctionScope {
        &self.scope
    }

    // ==========================================================================
    // Globals
    // ==========================================================================

    pub fn register_global(&mut self, name: &str, data_type: DataType, init: Option<i32>) -> Result<()> {
        if self.globals.contains_key(name) {
            return Err(CodegenError::DuplicateBinding {
                name: name.to_string(),
            });
        }

        trace!(name, %data_type, "registered global");
        self.global_order.push(name.to_string());
        self.globals.insert(
            name.to_string(),
            GlobalVar {
                name: name.to_string(),
                data_type,
                init,
            },
        );
        Ok(())
    }

    /// Globals in declaration order.
    pub fn globals(&self) -> impl Iterator<Item = &GlobalVar> {
        self.global_order
            .iter()
            .filter_map(|name| self.globals.get(name))
    }

    // ==========================================================================
    // Functions
    // ==========================================================================

    pub fn register_function(&mut self, signature: FunctionSignature) -> Result<()> {
        if self.functions.contains_key(&signature.name) {
            return Err(CodegenError::DuplicateFunction {
                name: signature.name,
            });
        }

        trace!(name = %signature.name, descriptor = %signature.descriptor(), "registered function");
        self.functions.insert(signature.name.clone(), signature);
        Ok(())
    }

    pub fn signature_of(&self, name: &str) -> Result<&FunctionSignature> {
        self.functions
            .get(name)
            .ok_or_else(|| CodegenError::UnknownFunction {
                name: name.to_string(),
            })
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    // ==========================================================================
    // Labels
    // ==========================================================================

    /// Allocate the next label from the program-wide counter.
    pub fn new_label(&mut self) -> Label {
        let label = Label(self.next_label);
        self.next_label += 1;
        trace!(%label, "allocated label");
        label
    }

    /// How many labels have been handed out so far.
    pub fn labels_issued(&self) -> u32 {
        self.next_label
    }
}
