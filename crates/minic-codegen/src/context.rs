//! CodegenContext - the state threaded through every lowering call.

use minic_core::{CodegenError, DataType, Result};

use crate::bytecode::Instruction;
use crate::config::CodegenConfig;
use crate::stack::StackTracker;
use crate::symbols::{SymbolTable, VarLookup};

/// Symbol table, stack tracker and configuration for one program run.
///
/// Lowering passes borrow the context mutably one at a time; nothing here is
/// shared between runs.
#[derive(Debug)]
pub struct CodegenContext {
    config: CodegenConfig,
    pub(crate) symbols: SymbolTable,
    pub(crate) stack: StackTracker,
}

impl CodegenContext {
    pub fn new(config: CodegenConfig) -> Self {
        let stack = StackTracker::new(config.default_stack_limit());
        Self {
            config,
            symbols: SymbolTable::new(),
            stack,
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn stack(&self) -> &StackTracker {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut StackTracker {
        &mut self.stack
    }

    /// `Class/name` for a static member of the generated class.
    pub fn qualified(&self, member: &str) -> String {
        format!("{}/{}", self.config.class_name(), member)
    }

    /// The instruction that pushes variable `name`.
    ///
    /// Arrays are never loaded as bare references, so they yield `None`.
    pub(crate) fn load(&self, name: &str) -> Result<Option<Instruction>> {
        let insn = match self.symbols.lookup(name)? {
            VarLookup::Local {
                data_type: DataType::Int,
                slot,
            } => Some(Instruction::Iload(slot)),
            VarLookup::Global {
                data_type: DataType::Int,
            } => Some(Instruction::GetStatic {
                field: self.qualified(name),
                descriptor: DataType::Int.descriptor().to_string(),
            }),
            _ => None,
        };
        Ok(insn)
    }

    /// The instruction that pops the top of stack into variable `name`.
    pub(crate) fn store(&self, name: &str) -> Result<Instruction> {
        match self.symbols.lookup(name)? {
            VarLookup::Local {
                data_type: DataType::Int,
                slot,
            } => Ok(Instruction::Istore(slot)),
            VarLookup::Global {
                data_type: DataType::Int,
            } => Ok(Instruction::PutStatic {
                field: self.qualified(name),
                descriptor: DataType::Int.descriptor().to_string(),
            }),
            lookup => Err(CodegenError::unsupported(format!(
                "assignment to {} '{}'",
                lookup.data_type(),
                name
            ))),
        }
    }
}

impl Default for CodegenContext {
    fn default() -> Self {
        Self::new(CodegenConfig::default())
    }
}
