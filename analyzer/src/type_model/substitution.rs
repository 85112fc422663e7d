//! Use-site bindings of formal type parameters

use tracing::warn;

use super::class_def::ClassDefinition;
use super::type_ref::TypeRef;

/// Ordered binding of a class's formal type parameters to the arguments of one use site
///
/// Empty for raw and non-generic uses. Order follows the class's formal parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubstitutionMap {
    bindings: Vec<(String, TypeRef)>,
}

impl SubstitutionMap {
    /// Build from explicit bindings
    pub fn new(bindings: impl IntoIterator<Item = (String, TypeRef)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Zip `class`'s formal parameters with the use-site `args`
    ///
    /// A raw use (no arguments) binds nothing. Extra or missing arguments are
    /// truncated to the shorter side.
    pub fn for_use_site(class: &ClassDefinition, args: &[TypeRef]) -> Self {
        if !args.is_empty() && args.len() != class.type_parameters.len() {
            warn!(
                type_name = %class.name,
                expected = class.type_parameters.len(),
                found = args.len(),
                "Type argument count does not match formal parameters"
            );
        }

        Self::new(
            class
                .type_parameters
                .iter()
                .cloned()
                .zip(args.iter().cloned()),
        )
    }

    /// True when nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Binding at `index` in formal-parameter order
    pub fn get_index(&self, index: usize) -> Option<(&str, &TypeRef)> {
        self.bindings
            .get(index)
            .map(|(name, arg)| (name.as_str(), arg))
    }
}
