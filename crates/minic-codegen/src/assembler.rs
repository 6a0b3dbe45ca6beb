//! Program assembler.
//!
//! Runs the registration pass, lowers the static initializer and every
//! function in declaration order, then stitches the class text together:
//!
//! ```text
//! .class public <Class>
//! .super java/lang/Object
//! .field public static <global> <descriptor>    (one per global)
//! ; standard initializer
//! .method public <init>()V ... .end method
//! .method static <clinit>()V ... .end method     (only with initialized globals)
//! .method public static <function> ... .end method
//! ```
//!
//! Field directives must precede every method in Jasmin, so they come right
//! after the class header.

use std::fmt::Write as _;
use std::io;

use minic_ast::Program;
use minic_core::Result;
use tracing::{debug, info};

use crate::config::CodegenConfig;
use crate::context::CodegenContext;
use crate::function_compiler::{CompiledFunction, FunctionCompiler};
use crate::passes::RegistrationPass;
use crate::static_init::compile_static_initializer;
use crate::symbols::GlobalVar;

const SUPER_CLASS: &str = "java/lang/Object";

/// The lowered class: its text plus the metadata of every method in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    text: String,
    globals: Vec<GlobalVar>,
    static_init: Option<CompiledFunction>,
    functions: Vec<CompiledFunction>,
}

impl CompiledProgram {
    /// The complete Jasmin source.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Globals in declaration order.
    pub fn globals(&self) -> &[GlobalVar] {
        &self.globals
    }

    /// The `<clinit>` method, if any global has an initializer.
    pub fn static_init(&self) -> Option<&CompiledFunction> {
        self.static_init.as_ref()
    }

    /// Functions in declaration order.
    pub fn functions(&self) -> &[CompiledFunction] {
        &self.functions
    }

    pub fn function(&self, name: &str) -> Option<&CompiledFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Write the Jasmin source to `out`.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.text.as_bytes())?;
        out.flush()
    }
}

/// Lowers a whole program to one class.
///
/// An assembler owns the state of a single run and is consumed by
/// [`assemble`](Self::assemble).
pub struct ProgramAssembler {
    ctx: CodegenContext,
}

impl ProgramAssembler {
    pub fn new(config: CodegenConfig) -> Self {
        Self {
            ctx: CodegenContext::new(config),
        }
    }

    /// Lower `program`. The first error aborts the run.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn assemble(mut self, program: &Program<'_>) -> Result<CompiledProgram> {
        RegistrationPass::new(&mut self.ctx).run(program)?;

        let static_init = compile_static_initializer(&mut self.ctx)?;
        let functions = program
            .functions()
            .map(|fun| FunctionCompiler::new(&mut self.ctx, fun).compile())
            .collect::<Result<Vec<_>>>()?;

        let globals: Vec<GlobalVar> = self.ctx.symbols.globals().cloned().collect();
        let text = self.render(&globals, static_init.as_ref(), &functions);

        info!(
            class = self.ctx.config().class_name(),
            functions = functions.len(),
            labels = self.ctx.symbols.labels_issued(),
            "assembled program"
        );

        Ok(CompiledProgram {
            text,
            globals,
            static_init,
            functions,
        })
    }

    fn render(
        &self,
        globals: &[GlobalVar],
        static_init: Option<&CompiledFunction>,
        functions: &[CompiledFunction],
    ) -> String {
        let class_name = self.ctx.config().class_name();
        let mut text = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(text, ".class public {}", class_name);
        let _ = writeln!(text, ".super {}", SUPER_CLASS);
        for global in globals {
            let _ = writeln!(
                text,
                ".field public static {} {}",
                global.name,
                global.data_type.descriptor()
            );
        }
        text.push_str(&standard_initializer());

        for method in static_init.into_iter().chain(functions) {
            debug!(method = %method.descriptor, lines = method.code.len(), "appending method");
            let _ = write!(text, "{}", method.code);
        }

        text
    }
}

/// The default constructor every class needs.
fn standard_initializer() -> String {
    format!(
        "; standard initializer\n\
         .method public <init>()V\n\
         aload_0\n\
         invokenonvirtual {}/<init>()V\n\
         return\n\
         .end method\n\n",
        SUPER_CLASS
    )
}
