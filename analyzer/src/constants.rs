// ============================================================================
// ANNOTATION CONSTANTS
// ============================================================================

/// Package holding the HTTP verb and request body annotations
pub const HTTP_ANNOTATION_PACKAGE: &str = "retrofit2.http";

/// Bare name of the request body annotation
pub const BODY_ANNOTATION: &str = "Body";

// ============================================================================
// TYPE CONSTANTS
// ============================================================================

/// Canonical empty-return types, compared by nominal identity
pub const EMPTY_RETURN_TYPES: &[&str] = &["kotlin.Unit", "java.lang.Void"];

/// Substrings that mark an empty return type in substring matching mode
pub const EMPTY_RETURN_MARKERS: &[&str] = &["Unit", "Void"];

/// Keywords parsed as primitive (non-class) types
pub const PRIMITIVE_TYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
];

/// Type argument followed when no per-wrapper index is configured
pub const DEFAULT_WRAPPER_PARAMETER_INDEX: usize = 0;
