//! # Endpoint payload fields
//!
//! Determines the payload type of each HTTP API interface method (the response it
//! returns and the request body it accepts) and flattens every field reachable from that
//! type, including fields of nested object-typed fields. The flattened lists feed policy
//! checks (nullability, mutability, naming) that live outside this crate.
//!
//! The host front end supplies method and class metadata through the traits in
//! [`ports`]; [`TypeRegistry`] is a ready-made in-memory host loaded from a JSON
//! snapshot.
//!
//! ```no_run
//! use endpoint_fields::{EndpointAnalyzer, TypeRegistry};
//!
//! # fn main() -> endpoint_fields::Result<()> {
//! let registry = TypeRegistry::from_path(std::path::Path::new("snapshot.json"))?;
//! let analyzer = EndpointAnalyzer::new(&registry);
//! for record in analyzer.compute_return_type_fields("com.example.Api#getUser") {
//!     println!("{}.{}", record.owner, record.name());
//! }
//! # Ok(())
//! # }
//! ```

mod analysis;
mod config;
mod constants;
mod error;
pub mod logging;
pub mod ports;
mod registry;
mod type_model;

pub use analysis::{
    AnnotationMatcher, BodyParameterFields, BodyParameterLocator, EffectiveTypeResolver,
    EndpointAnalyzer, FieldCollector, GenericSubstitutor,
};
pub use config::{AnalyzerConfig, EmptyReturnMatching, HttpVerb};
pub use error::{Error, Result};
pub use registry::TypeRegistry;
pub use type_model::{
    CallShape, ClassDefinition, ContainingType, FieldDefinition, FieldRecord, MethodSignature,
    Parameter, SubstitutionMap, TypeName, TypeRef, parse_type_ref,
};
