//! Public entry point: the two field queries over an injected host

use std::fmt::Debug;

use tracing::warn;

use super::annotation_matcher::AnnotationMatcher;
use super::body_parameter::{BodyParameterFields, BodyParameterLocator};
use super::effective_type::EffectiveTypeResolver;
use super::field_collector::FieldCollector;
use crate::config::AnalyzerConfig;
use crate::ports::{MethodMetadata, SymbolOracle};
use crate::type_model::{FieldRecord, MethodSignature, TypeRef};

/// Extracts payload field lists for endpoint methods
///
/// Holds only a shared reference to the host, so one analyzer can serve many queries
/// (and threads, when the host is `Sync`).
pub struct EndpointAnalyzer<'h, H: ?Sized> {
    host:   &'h H,
    config: AnalyzerConfig,
}

impl<'h, H> EndpointAnalyzer<'h, H>
where
    H: MethodMetadata + SymbolOracle + ?Sized,
    H::Method: Debug,
{
    /// Analyzer with the default (Retrofit) configuration
    pub fn new(host: &'h H) -> Self {
        Self::with_config(host, AnalyzerConfig::default())
    }

    /// Analyzer with an explicit configuration
    pub const fn with_config(host: &'h H, config: AnalyzerConfig) -> Self {
        Self { host, config }
    }

    /// Active configuration
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Flattened fields of the payload `method` returns; empty for non-endpoints
    pub fn compute_return_type_fields(&self, method: &H::Method) -> Vec<FieldRecord> {
        self.host
            .signature(method)
            .map(|signature| self.return_type_fields_for(&signature))
            .unwrap_or_else(|| {
                warn!(
                    method = ?method,
                    "Host has no signature for method - no return type fields"
                );
                Vec::new()
            })
    }

    /// Request body parameter of `method` and its flattened fields
    pub fn compute_body_parameter_fields(&self, method: &H::Method) -> Option<BodyParameterFields> {
        let Some(signature) = self.host.signature(method) else {
            warn!(
                method = ?method,
                "Host has no signature for method - no body parameter fields"
            );
            return None;
        };
        self.body_parameter_fields_for(&signature)
    }

    /// True for interface methods carrying a recognized endpoint annotation
    pub fn is_endpoint(&self, signature: &MethodSignature) -> bool {
        AnnotationMatcher::new(&self.config).is_endpoint(signature)
    }

    /// Innermost payload class of `signature`
    pub fn effective_type(&self, signature: &MethodSignature) -> Option<TypeRef> {
        EffectiveTypeResolver::new(self.host, &self.config).resolve(signature)
    }

    /// Flattened payload fields for a signature the caller already holds
    pub fn return_type_fields_for(&self, signature: &MethodSignature) -> Vec<FieldRecord> {
        self.effective_type(signature)
            .map(|payload| FieldCollector::new(self.host).collect(&payload))
            .unwrap_or_default()
    }

    /// Body parameter fields for a signature the caller already holds
    pub fn body_parameter_fields_for(
        &self,
        signature: &MethodSignature,
    ) -> Option<BodyParameterFields> {
        BodyParameterLocator::new(self.host, &self.config).locate(signature)
    }
}
