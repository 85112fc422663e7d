//! Class and field definitions, and the field records produced by traversal

use super::type_name::TypeName;
use super::type_ref::TypeRef;

/// A declared field of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Declared name
    pub name:             String,
    /// Declared type, as written (no substitution applied)
    pub type_ref:         TypeRef,
    /// Static (class-level) member
    pub is_static:        bool,
    /// Enum constant; enum constants are also static
    pub is_enum_constant: bool,
}

impl FieldDefinition {
    /// Instance field
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            is_static: false,
            is_enum_constant: false,
        }
    }

    /// Mark the field static
    #[must_use]
    pub const fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Mark the field as an enum constant (implies static)
    #[must_use]
    pub const fn with_enum_constant(mut self, is_enum_constant: bool) -> Self {
        self.is_enum_constant = is_enum_constant;
        self.is_static |= is_enum_constant;
        self
    }
}

/// A resolved class: its formal type parameters and declared fields in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    /// Fully-qualified class name
    pub name:            TypeName,
    /// Formal type parameter names in declaration order
    pub type_parameters: Vec<String>,
    /// Declared fields in declaration order
    pub fields:          Vec<FieldDefinition>,
}

impl ClassDefinition {
    /// Non-generic class with the given fields
    pub fn new(name: impl Into<TypeName>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            fields,
        }
    }

    /// Set the formal type parameters
    #[must_use]
    pub fn with_type_parameters(
        mut self,
        type_parameters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.type_parameters = type_parameters.into_iter().map(Into::into).collect();
        self
    }

    /// True if the class declares formal type parameters
    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}

/// One field found while flattening a payload type
///
/// Records carry no identity of their own: the same definition reached through two
/// branches yields two equal records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    /// Class that declares the field
    pub owner: TypeName,
    /// The declared field
    pub field: FieldDefinition,
}

impl FieldRecord {
    /// Record for `field` declared by `owner`
    pub fn new(owner: &TypeName, field: &FieldDefinition) -> Self {
        Self {
            owner: owner.clone(),
            field: field.clone(),
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.field.name
    }
}
