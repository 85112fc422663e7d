//! Analyzer configuration
//!
//! Every field has a default matching the Retrofit annotation set, so an empty JSON
//! object is a valid configuration.

use std::collections::HashMap;
use std::path::Path;

use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::constants::{
    BODY_ANNOTATION, DEFAULT_WRAPPER_PARAMETER_INDEX, EMPTY_RETURN_TYPES, HTTP_ANNOTATION_PACKAGE,
};
use crate::error::{Error, Result};
use crate::type_model::TypeName;

/// HTTP verbs whose annotations mark an endpoint method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpVerb {
    /// `@GET`
    Get,
    /// `@POST`
    Post,
    /// `@PUT`
    Put,
    /// `@PATCH`
    Patch,
}

impl From<HttpVerb> for String {
    fn from(verb: HttpVerb) -> Self {
        verb.as_ref().to_string()
    }
}

/// How an empty (unit/void) payload type is recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyReturnMatching {
    /// Exact comparison against `empty_return_types`
    #[default]
    Nominal,
    /// Any rendered type containing `Unit` or `Void`, matching older tooling
    Substring,
}

/// Configuration for endpoint recognition and payload unwrapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Package of the verb and body annotations
    pub annotation_package:      String,
    /// Bare names of endpoint verb annotations
    pub endpoint_verbs:          Vec<String>,
    /// Bare name of the request body annotation
    pub body_annotation:         String,
    /// Empty-return recognition mode
    pub empty_return_matching:   EmptyReturnMatching,
    /// Canonical empty-return types for nominal matching
    pub empty_return_types:      Vec<TypeName>,
    /// Type argument followed per wrapper class; unlisted wrappers follow argument 0
    pub wrapper_parameter_index: HashMap<TypeName, usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            annotation_package:      HTTP_ANNOTATION_PACKAGE.to_string(),
            endpoint_verbs:          HttpVerb::iter().map(String::from).collect(),
            body_annotation:         BODY_ANNOTATION.to_string(),
            empty_return_matching:   EmptyReturnMatching::default(),
            empty_return_types:      EMPTY_RETURN_TYPES.iter().copied().map(TypeName::from).collect(),
            wrapper_parameter_index: HashMap::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for malformed JSON, unknown keys, or a failed [`Self::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .change_context(Error::Config("Failed to parse analyzer configuration".to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns `Error::FileOperation` if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .change_context(Error::io_failed("read configuration", path, "I/O error"))?;
        Self::from_json_str(&json)
    }

    /// Reject configurations that could never recognize an endpoint
    ///
    /// # Errors
    ///
    /// Returns an error for an empty verb list, a blank verb, or a blank body annotation.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint_verbs.is_empty() {
            return Err(Report::new(Error::Config(
                "endpointVerbs must list at least one annotation".to_string(),
            )));
        }
        if let Some(blank) = self.endpoint_verbs.iter().find(|verb| verb.trim().is_empty()) {
            return Err(Report::new(Error::invalid("endpoint verb", format!("'{blank}'"))));
        }
        if self.body_annotation.trim().is_empty() {
            return Err(Report::new(Error::Config(
                "bodyAnnotation must not be empty".to_string(),
            )));
        }
        Ok(())
    }

    /// Type argument to follow when unwrapping `wrapper`
    pub fn parameter_index_for(&self, wrapper: Option<&TypeName>) -> usize {
        wrapper
            .and_then(|name| self.wrapper_parameter_index.get(name))
            .copied()
            .unwrap_or(DEFAULT_WRAPPER_PARAMETER_INDEX)
    }

    /// True if `annotation` is `bare` either as written or qualified by the annotation package
    pub fn is_marker(&self, annotation: &TypeName, bare: &str) -> bool {
        match annotation.package() {
            None => annotation.as_str() == bare,
            Some(package) => package == self.annotation_package && annotation.short_name() == bare,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "tests")]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_cover_four_verbs() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.endpoint_verbs, vec!["GET", "POST", "PUT", "PATCH"]);
        assert_eq!(config.body_annotation, "Body");
        assert_eq!(config.empty_return_matching, EmptyReturnMatching::Nominal);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = AnalyzerConfig::from_json_str("{}").expect("empty config should parse");
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_overrides_and_wrapper_indices() {
        let config = AnalyzerConfig::from_json_str(
            r#"{
                "endpointVerbs": ["GET", "DELETE"],
                "emptyReturnMatching": "substring",
                "wrapperParameterIndex": { "arrow.core.Either": 1 }
            }"#,
        )
        .expect("config should parse");

        assert_eq!(config.endpoint_verbs, vec!["GET", "DELETE"]);
        assert_eq!(config.empty_return_matching, EmptyReturnMatching::Substring);
        assert_eq!(
            config.parameter_index_for(Some(&TypeName::from("arrow.core.Either"))),
            1
        );
        assert_eq!(
            config.parameter_index_for(Some(&TypeName::from("retrofit2.Response"))),
            0
        );
        assert_eq!(config.parameter_index_for(None), 0);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let error = AnalyzerConfig::from_json_str(r#"{"verbs": ["GET"]}"#)
            .expect_err("unknown key should be rejected");
        assert!(matches!(error.current_context(), Error::Config(_)));
    }

    #[test]
    fn test_empty_verb_list_rejected() {
        assert!(AnalyzerConfig::from_json_str(r#"{"endpointVerbs": []}"#).is_err());
        assert!(AnalyzerConfig::from_json_str(r#"{"bodyAnnotation": " "}"#).is_err());
    }

    #[test]
    fn test_is_marker() {
        let config = AnalyzerConfig::default();
        assert!(config.is_marker(&TypeName::from("GET"), "GET"));
        assert!(config.is_marker(&TypeName::from("retrofit2.http.GET"), "GET"));
        assert!(!config.is_marker(&TypeName::from("javax.ws.rs.GET"), "GET"));
        assert!(!config.is_marker(&TypeName::from("Get"), "GET"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"bodyAnnotation": "Payload"}}"#).expect("write config");

        let config = AnalyzerConfig::from_path(file.path()).expect("config file should load");
        assert_eq!(config.body_annotation, "Payload");

        let missing = AnalyzerConfig::from_path(Path::new("/nonexistent/analyzer.json"))
            .expect_err("missing file should fail");
        assert!(matches!(missing.current_context(), Error::FileOperation(_)));
    }
}
