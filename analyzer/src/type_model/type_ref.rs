//! Type references as seen at a use site
//!
//! A `TypeRef` is what a field, parameter, or return position names: a class with its
//! type arguments, a primitive, an unbound type variable, or a wildcard projection.

use itertools::Itertools;

use super::type_name::TypeName;

/// A reference to a type at one use site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A nominal class with its ordered type arguments (empty for raw or non-generic use)
    Class {
        /// Fully-qualified class name
        name: TypeName,
        /// Type arguments in declaration order
        args: Vec<TypeRef>,
    },
    /// A non-class type such as `int` or `boolean`
    Primitive(TypeName),
    /// A formal type variable that is not bound at this site
    TypeParameter(String),
    /// A JVM array `T[]`; listed as a field type but never expanded
    Array(Box<TypeRef>),
    /// A wildcard projection, `?`, `*`, `? extends T`, or `out T`
    Wildcard {
        /// Upper bound when the projection has one
        upper_bound: Option<Box<TypeRef>>,
    },
}

impl TypeRef {
    /// Non-generic class reference
    pub fn class(name: impl Into<TypeName>) -> Self {
        Self::Class {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Class reference with type arguments
    pub fn generic(name: impl Into<TypeName>, args: impl IntoIterator<Item = Self>) -> Self {
        Self::Class {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Wildcard with an optional upper bound
    pub fn wildcard(upper_bound: Option<Self>) -> Self {
        Self::Wildcard {
            upper_bound: upper_bound.map(Box::new),
        }
    }

    /// True for class-typed references
    pub const fn is_class(&self) -> bool {
        matches!(self, Self::Class { .. })
    }

    /// Class name for class-typed references
    pub const fn class_name(&self) -> Option<&TypeName> {
        match self {
            Self::Class { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Nesting depth: 1 for a leaf, one more than the deepest argument, bound, or
    /// element otherwise
    ///
    /// Every unwrapping step of a consistent host moves to a strictly shallower
    /// sub-term, so this bounds the number of wrapper layers.
    pub fn depth(&self) -> usize {
        match self {
            Self::Class { args, .. } => 1 + args.iter().map(Self::depth).max().unwrap_or(0),
            Self::Wildcard {
                upper_bound: Some(bound),
            } => 1 + bound.depth(),
            Self::Array(element) => 1 + element.depth(),
            Self::Primitive(_) | Self::TypeParameter(_) | Self::Wildcard { upper_bound: None } => 1,
        }
    }

    /// Type arguments, empty for anything but a parameterized class
    pub fn args(&self) -> &[Self] {
        match self {
            Self::Class { args, .. } => args,
            _ => &[],
        }
    }

    /// Rewrite argument-less class references whose name is one of `formals` into
    /// `TypeParameter`s, recursively
    ///
    /// Textual type expressions cannot tell `T` from a class named `T`; the declaring
    /// scope decides.
    #[must_use]
    pub fn bind_type_parameters(self, formals: &[String]) -> Self {
        match self {
            Self::Class { name, args }
                if args.is_empty() && formals.iter().any(|f| f == name.as_str()) =>
            {
                Self::TypeParameter(name.into())
            }
            Self::Class { name, args } => Self::Class {
                name,
                args: args
                    .into_iter()
                    .map(|arg| arg.bind_type_parameters(formals))
                    .collect(),
            },
            Self::Wildcard { upper_bound } => Self::Wildcard {
                upper_bound: upper_bound
                    .map(|bound| Box::new((*bound).bind_type_parameters(formals))),
            },
            Self::Array(element) => Self::Array(Box::new((*element).bind_type_parameters(formals))),
            other => other,
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class { name, args } if args.is_empty() => write!(f, "{name}"),
            Self::Class { name, args } => write!(f, "{name}<{}>", args.iter().join(", ")),
            Self::Primitive(name) => write!(f, "{name}"),
            Self::TypeParameter(name) => write!(f, "{name}"),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::Wildcard { upper_bound: None } => write!(f, "?"),
            Self::Wildcard {
                upper_bound: Some(bound),
            } => write!(f, "? extends {bound}"),
        }
    }
}
