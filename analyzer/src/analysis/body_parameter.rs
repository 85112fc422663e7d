//! Request body parameter of an endpoint method

use tracing::debug;

use super::annotation_matcher::AnnotationMatcher;
use super::field_collector::FieldCollector;
use crate::config::AnalyzerConfig;
use crate::ports::SymbolOracle;
use crate::type_model::{FieldRecord, MethodSignature, TypeRef};

/// The request body parameter of a method and its flattened fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyParameterFields {
    /// Position in the declared parameter list
    pub index:    usize,
    /// Declared parameter name
    pub name:     String,
    /// Declared parameter type
    pub type_ref: TypeRef,
    /// Flattened fields of `type_ref`
    pub fields:   Vec<FieldRecord>,
}

/// Finds the body parameter of an endpoint and flattens its type
pub struct BodyParameterLocator<'a, O: ?Sized> {
    oracle: &'a O,
    config: &'a AnalyzerConfig,
}

impl<'a, O: SymbolOracle + ?Sized> BodyParameterLocator<'a, O> {
    /// Locator over `oracle`
    pub const fn new(oracle: &'a O, config: &'a AnalyzerConfig) -> Self {
        Self { oracle, config }
    }

    /// First body-annotated parameter of an endpoint, in declaration order
    ///
    /// Only one body parameter is supported; later ones are ignored.
    pub fn locate(&self, signature: &MethodSignature) -> Option<BodyParameterFields> {
        let matcher = AnnotationMatcher::new(self.config);
        if !matcher.is_endpoint(signature) {
            return None;
        }

        let mut body_parameters = signature
            .parameters
            .iter()
            .enumerate()
            .filter(|(_, parameter)| matcher.is_body_parameter(parameter));

        let Some((index, parameter)) = body_parameters.next() else {
            debug!(method = %signature.name, "No body parameter");
            return None;
        };

        let ignored: Vec<&str> = body_parameters
            .map(|(_, parameter)| parameter.name.as_str())
            .collect();
        if !ignored.is_empty() {
            debug!(
                method = %signature.name,
                body = %parameter.name,
                ?ignored,
                "Multiple body parameters - only the first is analyzed"
            );
        }

        Some(BodyParameterFields {
            index,
            name: parameter.name.clone(),
            type_ref: parameter.type_ref.clone(),
            fields: FieldCollector::new(self.oracle).collect(&parameter.type_ref),
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "tests")]
mod tests {
    use super::super::test_fixtures::{names, registry, signature};
    use super::*;

    fn locate(method: &str) -> Option<BodyParameterFields> {
        let registry = registry();
        let config = AnalyzerConfig::default();
        BodyParameterLocator::new(&registry, &config).locate(&signature(&registry, method))
    }

    #[test]
    fn test_first_body_parameter_only() {
        let body = locate("com.example.Api#create").expect("create has a body parameter");
        assert_eq!(body.index, 1);
        assert_eq!(body.name, "body");
        assert_eq!(body.type_ref, TypeRef::class("com.example.Outer"));
        assert_eq!(names(&body.fields), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_no_body_parameter() {
        assert_eq!(locate("com.example.Api#update"), None);
        assert_eq!(locate("com.example.Api#getDto"), None);
    }

    #[test]
    fn test_ineligible_method_has_no_body() {
        let registry = registry();
        let config = AnalyzerConfig::default();
        let mut method = signature(&registry, "com.example.Api#create");
        method.containing_type.is_interface = false;

        assert_eq!(
            BodyParameterLocator::new(&registry, &config).locate(&method),
            None
        );
    }

    #[test]
    fn test_cyclic_body_terminates() {
        let body = locate("com.example.Api#patchNode").expect("patchNode has a body parameter");
        assert_eq!(names(&body.fields), vec!["next"]);
    }
}
