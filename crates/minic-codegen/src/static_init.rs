//! Static initialization of global variables.
//!
//! A global declared with a literal initializer is stored into its field by
//! the class's `<clinit>` method, in declaration order. Globals without an
//! initializer keep the JVM default of zero and contribute no code.

use minic_core::Result;
use tracing::debug;

use crate::bytecode::{Directive, Fragment, Instruction};
use crate::context::CodegenContext;
use crate::function_compiler::CompiledFunction;

/// Method name and descriptor of the class initializer.
pub const CLASS_INITIALIZER: &str = "<clinit>()V";

/// The store of one initialized global: `ldc V` then `putstatic`.
pub fn lower_global_init(ctx: &mut CodegenContext, name: &str, value: i32) -> Result<Fragment> {
    let mut fragment = Fragment::of(Instruction::Ldc(value));
    ctx.stack.push();
    fragment.push(ctx.store(name)?);
    ctx.stack.pop();
    Ok(fragment)
}

/// Build `<clinit>`, or `None` when no global has an initializer.
///
/// The method's stack limit goes through the same watermark queue as every
/// other method.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn compile_static_initializer(ctx: &mut CodegenContext) -> Result<Option<CompiledFunction>> {
    let inits: Vec<(String, i32)> = ctx
        .symbols
        .globals()
        .filter_map(|global| global.init.map(|value| (global.name.clone(), value)))
        .collect();
    if inits.is_empty() {
        return Ok(None);
    }

    ctx.symbols.begin_function_scope();
    ctx.stack.enter_function();

    let mut body = Fragment::new();
    for (name, value) in &inits {
        body.append(lower_global_init(ctx, name, *value)?);
    }
    body.push(Instruction::Return);
    body.end_method();
    ctx.stack.archive_and_reset();

    let stack_limit = ctx.stack.max_for_next_prologue();
    let locals_limit = ctx.symbols.local_count();

    let mut code = Fragment::new();
    code.directive(Directive::Method {
        access: "static".to_string(),
        descriptor: CLASS_INITIALIZER.to_string(),
    });
    code.directive(Directive::LimitStack(stack_limit));
    code.directive(Directive::LimitLocals(locals_limit));
    code.append(body);

    debug!(globals = inits.len(), stack_limit, "compiled static initializer");

    Ok(Some(CompiledFunction {
        name: "<clinit>".to_string(),
        descriptor: CLASS_INITIALIZER.to_string(),
        stack_limit,
        locals_limit,
        code,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minic_core::DataType;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_initializers_no_method() {
        let mut ctx = CodegenContext::default();
        ctx.symbols.register_global("g", DataType::Int, None).unwrap();
        ctx.symbols.register_global("a", DataType::IntArray, None).unwrap();

        assert_eq!(compile_static_initializer(&mut ctx).unwrap(), None);
        assert_eq!(ctx.stack.pending(), 0);
    }

    #[test]
    fn initializers_in_declaration_order() {
        let mut ctx = CodegenContext::default();
        ctx.symbols.register_global("b", DataType::Int, Some(2)).unwrap();
        ctx.symbols.register_global("skip", DataType::Int, None).unwrap();
        ctx.symbols.register_global("a", DataType::Int, Some(1)).unwrap();

        let clinit = compile_static_initializer(&mut ctx).unwrap().unwrap();
        assert_eq!(clinit.stack_limit, 1);
        assert_eq!(clinit.locals_limit, 0);
        assert_eq!(
            clinit.code.to_string(),
            ".method static <clinit>()V\n.limit stack 1\n.limit locals 0\n\
             ldc 2\nputstatic Test/b I\nldc 1\nputstatic Test/a I\nreturn\n.end method\n\n"
        );
        assert_eq!(ctx.stack.pending(), 0);
    }

    #[test]
    fn single_store() {
        let mut ctx = CodegenContext::default();
        ctx.symbols.register_global("n", DataType::Int, Some(7)).unwrap();
        ctx.stack.enter_function();

        let fragment = lower_global_init(&mut ctx, "n", 7).unwrap();
        assert_eq!(fragment.to_string(), "ldc 7\nputstatic Test/n I\n");
        assert_eq!(ctx.stack.current(), 0);
        assert_eq!(ctx.stack.maximum(), 1);
    }
}
