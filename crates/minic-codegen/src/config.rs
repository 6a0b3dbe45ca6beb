//! Generator configuration.

/// Settings that shape the emitted class.
///
/// ```
/// use minic_codegen::CodegenConfig;
///
/// let config = CodegenConfig::new().with_class_name("Fib");
/// assert_eq!(config.class_name(), "Fib");
/// assert_eq!(config.default_stack_limit(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    class_name: String,
    default_stack_limit: usize,
    print_builtin: String,
}

impl CodegenConfig {
    pub const DEFAULT_CLASS_NAME: &'static str = "Test";
    pub const DEFAULT_STACK_LIMIT: usize = 32;
    pub const DEFAULT_PRINT_BUILTIN: &'static str = "_print";

    pub fn new() -> Self {
        Self {
            class_name: Self::DEFAULT_CLASS_NAME.to_string(),
            default_stack_limit: Self::DEFAULT_STACK_LIMIT,
            print_builtin: Self::DEFAULT_PRINT_BUILTIN.to_string(),
        }
    }

    /// Name of the generated class; owner of every static method and field.
    pub fn with_class_name<S: Into<String>>(mut self, name: S) -> Self {
        self.class_name = name.into();
        self
    }

    /// Stack limit used when a prologue finds no archived watermark.
    pub fn with_default_stack_limit(mut self, limit: usize) -> Self {
        self.default_stack_limit = limit;
        self
    }

    /// Name that lowers to `System.out.println`.
    pub fn with_print_builtin<S: Into<String>>(mut self, name: S) -> Self {
        self.print_builtin = name.into();
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn default_stack_limit(&self) -> usize {
        self.default_stack_limit
    }

    pub fn print_builtin(&self) -> &str {
        &self.print_builtin
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CodegenConfig::default();
        assert_eq!(config.class_name(), "Test");
        assert_eq!(config.default_stack_limit(), 32);
        assert_eq!(config.print_builtin(), "_print");
    }

    #[test]
    fn builder_overrides() {
        let config = CodegenConfig::new()
            .with_class_name("Main")
            .with_default_stack_limit(8)
            .with_print_builtin("print");
        assert_eq!(config.class_name(), "Main");
        assert_eq!(config.default_stack_limit(), 8);
        assert_eq!(config.print_builtin(), "print");
    }
}
