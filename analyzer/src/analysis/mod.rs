//! Endpoint payload analysis
//!
//! Leaf-first: annotation matching, generic unwrapping, field flattening, then the two
//! consumers of those, the effective return type and the request body parameter.

mod analyzer;
mod annotation_matcher;
mod body_parameter;
mod effective_type;
mod field_collector;
mod generic_substitutor;
#[cfg(test)]
mod test_fixtures;

pub use analyzer::EndpointAnalyzer;
pub use annotation_matcher::AnnotationMatcher;
pub use body_parameter::{BodyParameterFields, BodyParameterLocator};
pub use effective_type::EffectiveTypeResolver;
pub use field_collector::FieldCollector;
pub use generic_substitutor::GenericSubstitutor;
