//! Payload type of an endpoint method

use tracing::debug;

use super::annotation_matcher::AnnotationMatcher;
use super::generic_substitutor::GenericSubstitutor;
use crate::config::{AnalyzerConfig, EmptyReturnMatching};
use crate::constants::EMPTY_RETURN_MARKERS;
use crate::ports::TypeResolution;
use crate::type_model::{MethodSignature, TypeRef};

/// Computes the concrete payload type an endpoint actually returns
pub struct EffectiveTypeResolver<'a, O: ?Sized> {
    oracle: &'a O,
    config: &'a AnalyzerConfig,
}

impl<'a, O: TypeResolution + ?Sized> EffectiveTypeResolver<'a, O> {
    /// Resolver over `oracle`
    pub const fn new(oracle: &'a O, config: &'a AnalyzerConfig) -> Self {
        Self { oracle, config }
    }

    /// Innermost payload class of `signature`, or `None` for non-endpoints, non-class
    /// payloads, and empty (unit/void) payloads
    pub fn resolve(&self, signature: &MethodSignature) -> Option<TypeRef> {
        if !AnnotationMatcher::new(self.config).is_endpoint(signature) {
            return None;
        }

        let source = signature.payload_source();
        if !source.is_class() {
            debug!(method = %signature.name, payload = %source, "Payload is not class-typed");
            return None;
        }
        if self.is_empty_return(source) {
            debug!(method = %signature.name, payload = %source, "Empty payload type");
            return None;
        }

        let effective = GenericSubstitutor::new(self.oracle, self.config).innermost(source);

        // Substring mode only ever inspected the declared type
        if self.config.empty_return_matching == EmptyReturnMatching::Nominal
            && self.is_empty_return(&effective)
        {
            debug!(method = %signature.name, payload = %effective, "Empty payload type after unwrapping");
            return None;
        }

        Some(effective)
    }

    /// True if `type_ref` denotes an empty payload under the configured matching mode
    pub fn is_empty_return(&self, type_ref: &TypeRef) -> bool {
        match self.config.empty_return_matching {
            EmptyReturnMatching::Nominal => type_ref.class_name().is_some_and(|name| {
                self.config
                    .empty_return_types
                    .iter()
                    .any(|empty| empty.matches(name.as_str()))
            }),
            EmptyReturnMatching::Substring => {
                let rendered = type_ref.to_string();
                EMPTY_RETURN_MARKERS
                    .iter()
                    .any(|marker| rendered.contains(marker))
            }
        }
    }
}
