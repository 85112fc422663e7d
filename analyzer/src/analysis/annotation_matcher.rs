//! Endpoint eligibility from annotation names

use tracing::trace;

use crate::config::AnalyzerConfig;
use crate::type_model::{MethodSignature, Parameter};

/// Decides whether a method is a network endpoint and which parameter is its body
pub struct AnnotationMatcher<'a> {
    config: &'a AnalyzerConfig,
}

impl<'a> AnnotationMatcher<'a> {
    /// Matcher over the configured annotation set
    pub const fn new(config: &'a AnalyzerConfig) -> Self {
        Self { config }
    }

    /// True only for interface methods carrying a recognized verb annotation
    pub fn is_endpoint(&self, signature: &MethodSignature) -> bool {
        if !signature.containing_type.is_interface {
            trace!(
                method = %signature.name,
                containing_type = %signature.containing_type.name,
                "Not an interface method"
            );
            return false;
        }

        let recognized = signature.annotations.iter().any(|annotation| {
            self.config
                .endpoint_verbs
                .iter()
                .any(|verb| self.config.is_marker(annotation, verb))
        });
        if !recognized {
            trace!(method = %signature.name, "No endpoint annotation");
        }
        recognized
    }

    /// True if `parameter` carries the request body annotation
    pub fn is_body_parameter(&self, parameter: &Parameter) -> bool {
        parameter
            .annotations
            .iter()
            .any(|annotation| self.config.is_marker(annotation, &self.config.body_annotation))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::{registry, signature};
    use super::*;
    use crate::type_model::{TypeName, TypeRef};

    #[test]
    fn test_interface_with_verb_is_endpoint() {
        let registry = registry();
        let config = AnalyzerConfig::default();
        let matcher = AnnotationMatcher::new(&config);

        assert!(matcher.is_endpoint(&signature(&registry, "com.example.Api#getDto")));
        assert!(matcher.is_endpoint(&signature(&registry, "com.example.Api#update")));
        assert!(matcher.is_endpoint(&signature(&registry, "com.example.Api#patchNode")));
    }

    #[test]
    fn test_non_interface_never_endpoint() {
        let registry = registry();
        let config = AnalyzerConfig::default();
        let matcher = AnnotationMatcher::new(&config);

        assert!(!matcher.is_endpoint(&signature(&registry, "com.example.ApiImpl#getDto")));
    }

    #[test]
    fn test_unrecognized_annotation_not_endpoint() {
        let registry = registry();
        let config = AnalyzerConfig::default();
        let matcher = AnnotationMatcher::new(&config);

        assert!(!matcher.is_endpoint(&signature(&registry, "com.example.Api#unannotated")));

        let mut foreign = signature(&registry, "com.example.Api#getDto");
        foreign.annotations = vec![TypeName::from("javax.ws.rs.GET")];
        assert!(!matcher.is_endpoint(&foreign));

        foreign.annotations = vec![TypeName::from("DELETE")];
        assert!(!matcher.is_endpoint(&foreign));
    }

    #[test]
    fn test_configured_verbs() {
        let registry = registry();
        let config = AnalyzerConfig {
            endpoint_verbs: vec!["DELETE".to_string()],
            ..AnalyzerConfig::default()
        };
        let matcher = AnnotationMatcher::new(&config);

        let mut method = signature(&registry, "com.example.Api#getDto");
        assert!(!matcher.is_endpoint(&method));
        method.annotations = vec![TypeName::from("retrofit2.http.DELETE")];
        assert!(matcher.is_endpoint(&method));
    }

    #[test]
    fn test_body_parameter() {
        let config = AnalyzerConfig::default();
        let matcher = AnnotationMatcher::new(&config);
        let dto = TypeRef::class("com.example.Dto");

        assert!(matcher.is_body_parameter(&Parameter::new("a", dto.clone()).annotated("Body")));
        assert!(
            matcher.is_body_parameter(
                &Parameter::new("b", dto.clone()).annotated("retrofit2.http.Body")
            )
        );
        assert!(!matcher.is_body_parameter(&Parameter::new("c", dto.clone()).annotated("Path")));
        assert!(!matcher.is_body_parameter(&Parameter::new("d", dto)));
    }
}
