//! Method signatures as reported by the host front end

use super::type_name::TypeName;
use super::type_ref::TypeRef;

/// The type that declares a method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainingType {
    /// Fully-qualified name
    pub name:         TypeName,
    /// True for a pure interface
    pub is_interface: bool,
}

/// One declared parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Declared name
    pub name:        String,
    /// Declared type
    pub type_ref:    TypeRef,
    /// Annotation names as written, bare or fully qualified
    pub annotations: Vec<TypeName>,
}

impl Parameter {
    /// Parameter without annotations
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            annotations: Vec::new(),
        }
    }

    /// Add an annotation
    #[must_use]
    pub fn annotated(mut self, annotation: impl Into<TypeName>) -> Self {
        self.annotations.push(annotation.into());
        self
    }
}

/// How the payload of a call is delivered
///
/// Suspending methods are desugared by their compiler into a hidden trailing
/// continuation parameter; its type argument is the real payload and the declared
/// return type is erased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CallShape {
    /// Payload is the declared return type
    #[default]
    Direct,
    /// Payload is the continuation's type argument
    Suspending {
        /// Type argument of the desugared continuation parameter
        continuation_arg: TypeRef,
    },
}

/// Everything the analysis needs to know about one method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// Method name
    pub name:            String,
    /// Declaring type
    pub containing_type: ContainingType,
    /// Declared return type
    pub return_type:     TypeRef,
    /// Parameters in declaration order, excluding any desugared continuation
    pub parameters:      Vec<Parameter>,
    /// Annotations merged from the method and anything it overrides
    pub annotations:     Vec<TypeName>,
    /// Direct or suspending
    pub call_shape:      CallShape,
}

impl MethodSignature {
    /// Type that carries the payload for this call shape
    pub const fn payload_source(&self) -> &TypeRef {
        match &self.call_shape {
            CallShape::Direct => &self.return_type,
            CallShape::Suspending { continuation_arg } => continuation_arg,
        }
    }
}
