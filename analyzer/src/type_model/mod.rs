//! Read-only views over host metadata: names, type references, classes, methods

mod class_def;
mod method;
mod substitution;
mod type_name;
mod type_parser;
mod type_ref;

pub use class_def::{ClassDefinition, FieldDefinition, FieldRecord};
pub use method::{CallShape, ContainingType, MethodSignature, Parameter};
pub use substitution::SubstitutionMap;
pub use type_name::TypeName;
pub use type_parser::parse_type_ref;
pub use type_ref::TypeRef;
