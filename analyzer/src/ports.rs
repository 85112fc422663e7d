//! Capability ports the host front end implements
//!
//! The analysis never inspects syntax itself. Everything it knows about methods,
//! classes, and members comes through these traits, treated as an immutable
//! snapshot for the duration of one query.

use std::borrow::Cow;

use crate::type_model::{ClassDefinition, FieldDefinition, MethodSignature, SubstitutionMap, TypeRef};

/// Metadata port: method node to signature
pub trait MethodMetadata {
    /// Host handle for a method (a syntax node, an id, ...)
    type Method: ?Sized;

    /// Signature of `method`, or `None` if the host does not know it
    fn signature<'a>(&'a self, method: &Self::Method) -> Option<Cow<'a, MethodSignature>>;
}

/// Type-resolution port
pub trait TypeResolution {
    /// Class definition for a class-typed reference, `None` when the class is opaque,
    /// external, or the reference is not class-typed
    fn resolve_class(&self, type_ref: &TypeRef) -> Option<&ClassDefinition>;

    /// Binding of the referenced class's formal parameters to this reference's arguments
    ///
    /// Empty for raw, non-generic, non-class, or unresolvable references.
    fn substitution_map(&self, type_ref: &TypeRef) -> SubstitutionMap {
        let TypeRef::Class { args, .. } = type_ref else {
            return SubstitutionMap::default();
        };
        if args.is_empty() {
            return SubstitutionMap::default();
        }
        self.resolve_class(type_ref)
            .filter(|class| class.is_generic())
            .map(|class| SubstitutionMap::for_use_site(class, args))
            .unwrap_or_default()
    }
}

/// Member-classification port
///
/// The defaults read the flags recorded on the definition; hosts with richer member
/// models override them.
pub trait MemberClassification {
    /// Static (class-level) member
    fn is_static(&self, field: &FieldDefinition) -> bool {
        field.is_static
    }

    /// Enum constant
    fn is_enum_constant(&self, field: &FieldDefinition) -> bool {
        field.is_enum_constant
    }
}

/// Read-only symbol oracle: type resolution plus member classification
pub trait SymbolOracle: TypeResolution + MemberClassification {}

impl<T: TypeResolution + MemberClassification + ?Sized> SymbolOracle for T {}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "tests")]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;
    use crate::type_model::TypeName;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .insert_class(
                ClassDefinition::new("retrofit2.Response", Vec::new()).with_type_parameters(["T"]),
            )
            .expect("response class");
        registry
            .insert_class(ClassDefinition::new("com.example.Dto", Vec::new()))
            .expect("dto class");
        registry
    }

    #[test]
    fn test_default_substitution_map_binds_generic_classes() {
        let registry = registry();
        let response = TypeRef::generic("retrofit2.Response", [TypeRef::class("com.example.Dto")]);

        assert!(
            registry
                .class(&TypeName::from("retrofit2.Response"))
                .expect("response class")
                .is_generic()
        );
        assert_eq!(
            registry.substitution_map(&response).get_index(0),
            Some(("T", &TypeRef::class("com.example.Dto")))
        );
    }

    #[test]
    fn test_default_substitution_map_empty_for_non_generic_and_raw() {
        let registry = registry();

        // Arguments written against a class that declares no parameters bind nothing
        let dto = TypeRef::generic("com.example.Dto", [TypeRef::class("com.example.Other")]);
        assert!(
            !registry
                .class(&TypeName::from("com.example.Dto"))
                .expect("dto class")
                .is_generic()
        );
        assert!(registry.substitution_map(&dto).is_empty());

        assert!(
            registry
                .substitution_map(&TypeRef::class("retrofit2.Response"))
                .is_empty()
        );
        assert!(
            registry
                .substitution_map(&TypeRef::Array(Box::new(TypeRef::class("com.example.Dto"))))
                .is_empty()
        );
    }

    #[test]
    fn test_default_member_classification_reads_flags() {
        let registry = registry();
        let constant = FieldDefinition::new("ACTIVE", TypeRef::class("com.example.Status"))
            .with_enum_constant(true);

        assert!(registry.is_static(&constant));
        assert!(registry.is_enum_constant(&constant));
        assert!(!registry.is_static(&FieldDefinition::new("id", TypeRef::Primitive("long".into()))));
    }
}
