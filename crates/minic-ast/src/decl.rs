//! Declaration nodes: the program root, variables and functions.

use crate::Ident;
use crate::stmt::CompoundStmt;

/// The root of a MiniC translation unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'ast> {
    /// Top-level declarations in source order.
    pub decls: &'ast [Decl<'ast>],
}

impl<'ast> Program<'ast> {
    /// Iterate the global variable declarations in source order.
    pub fn globals(&self) -> impl Iterator<Item = &VarDecl<'ast>> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Var(var) => Some(var),
            Decl::Fun(_) => None,
        })
    }

    /// Iterate the function declarations in source order.
    pub fn functions(&self) -> impl Iterator<Item = &'ast FunDecl<'ast>> + '_ {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Fun(fun) => Some(*fun),
            Decl::Var(_) => None,
        })
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decl<'ast> {
    /// Global variable
    Var(VarDecl<'ast>),
    /// Function
    Fun(&'ast FunDecl<'ast>),
}

/// The declared type of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSpec {
    Int,
    Void,
}

/// A variable declaration, global or local.
///
/// Examples:
/// - `int x;`
/// - `int x = 5;`
/// - `int x[10];`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarDecl<'ast> {
    pub name: Ident<'ast>,
    pub kind: VarDeclKind,
}

/// The three declaration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarDeclKind {
    /// `int x;`
    Plain,
    /// `int x = LITERAL;`
    Init(i32),
    /// `int x[LITERAL];`
    Array(i32),
}

impl VarDecl<'_> {
    pub fn is_array(&self) -> bool {
        matches!(self.kind, VarDeclKind::Array(_))
    }

    /// The literal initializer, if any.
    pub fn init(&self) -> Option<i32> {
        match self.kind {
            VarDeclKind::Init(value) => Some(value),
            _ => None,
        }
    }
}

/// A function declaration.
///
/// Example: `int add(int a, int b) { return a + b; }`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunDecl<'ast> {
    pub return_type: TypeSpec,
    pub name: Ident<'ast>,
    pub params: &'ast [Param<'ast>],
    pub body: CompoundStmt<'ast>,
}

/// A function parameter: `int x` or `int x[]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param<'ast> {
    pub name: Ident<'ast>,
    pub is_array: bool,
}
