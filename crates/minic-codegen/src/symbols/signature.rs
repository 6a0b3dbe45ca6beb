//! Function signatures and their JVM descriptors.

use minic_core::{DataType, ReturnType};

/// The name of the program entry point.
pub const ENTRY_POINT: &str = "main";

/// A function's parameter and return types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<DataType>,
    pub return_type: ReturnType,
    /// The entry point always has the `main([Ljava/lang/String;)V` descriptor,
    /// whatever its declaration says.
    entry_point: bool,
}

impl FunctionSignature {
    pub fn new(name: impl Into<String>, params: Vec<DataType>, return_type: ReturnType) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            entry_point: false,
        }
    }

    /// Signature of `main`, which takes the JVM's string array.
    pub fn entry_point() -> Self {
        Self {
            name: ENTRY_POINT.to_string(),
            params: vec![DataType::IntArray],
            return_type: ReturnType::Void,
            entry_point: true,
        }
    }

    pub fn is_entry_point(&self) -> bool {
        self.entry_point
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Method name plus descriptor, e.g. `add(II)I`.
    pub fn descriptor(&self) -> String {
        if self.entry_point {
            return format!("{}([Ljava/lang/String;)V", self.name);
        }

        let params: String = self.params.iter().map(|p| p.descriptor()).collect();
        format!(
            "{}({}){}",
            self.name,
            params,
            self.return_type.descriptor()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_function() {
        let sig = FunctionSignature::new(
            "add",
            vec![DataType::Int, DataType::Int],
            ReturnType::Int,
        );
        assert_eq!(sig.descriptor(), "add(II)I");
        assert_eq!(sig.arity(), 2);
    }

    #[test]
    fn void_function_with_array() {
        let sig = FunctionSignature::new(
            "fill",
            vec![DataType::IntArray, DataType::Int],
            ReturnType::Void,
        );
        assert_eq!(sig.descriptor(), "fill([II)V");
    }

    #[test]
    fn no_params() {
        let sig = FunctionSignature::new("f", vec![], ReturnType::Void);
        assert_eq!(sig.descriptor(), "f()V");
    }

    #[test]
    fn entry_point_descriptor() {
        let sig = FunctionSignature::entry_point();
        assert!(sig.is_entry_point());
        assert_eq!(sig.descriptor(), "main([Ljava/lang/String;)V");
    }
}
