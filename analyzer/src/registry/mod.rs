//! In-memory symbol table implementing every capability port
//!
//! Hosts that can export their front end's view as JSON (or build it directly) get a
//! ready-made adapter; the analysis itself only sees the port traits.

mod snapshot;

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use error_stack::{Report, ResultExt};
use tracing::debug;

use self::snapshot::SnapshotDocument;
use crate::error::{Error, Result};
use crate::ports::{MemberClassification, MethodMetadata, TypeResolution};
use crate::type_model::{CallShape, ClassDefinition, MethodSignature, TypeName, TypeRef};

/// Classes and method signatures keyed by name and method id
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    classes: HashMap<TypeName, ClassDefinition>,
    methods: HashMap<String, MethodSignature>,
}

impl TypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `Error::SnapshotParse` for malformed JSON and `Error::InvalidSnapshot` or
    /// `Error::ArityMismatch` for an inconsistent symbol table.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: SnapshotDocument = serde_json::from_str(json)
            .change_context(Error::SnapshotParse("Failed to parse snapshot JSON".to_string()))?;
        Self::from_document(document)
    }

    /// Load a snapshot from an already parsed JSON value
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_json_str`].
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let document: SnapshotDocument = serde_json::from_value(value)
            .change_context(Error::SnapshotParse("Failed to decode snapshot".to_string()))?;
        Self::from_document(document)
    }

    /// Load a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `Error::FileOperation` if the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .change_context(Error::io_failed("read snapshot", path, "I/O error"))?;
        Self::from_json_str(&json)
    }

    fn from_document(document: SnapshotDocument) -> Result<Self> {
        let mut registry = Self::new();

        for entry in document.classes {
            let name = entry.name().to_string();
            let class = entry
                .into_definition()
                .change_context(Error::InvalidSnapshot(format!("class '{name}'")))?;
            registry.insert_class(class)?;
        }

        for entry in document.methods {
            let id = entry.id.clone();
            let class_formals = registry
                .classes
                .get(&TypeName::from(entry.containing_type_name()))
                .map(|class| class.type_parameters.clone())
                .unwrap_or_default();
            let signature = entry
                .into_signature(&class_formals)
                .change_context(Error::InvalidSnapshot(format!("method '{id}'")))?;
            registry.insert_method(id, signature)?;
        }

        registry.validate()?;
        debug!(
            classes = registry.classes.len(),
            methods = registry.methods.len(),
            "Loaded type registry snapshot"
        );
        Ok(registry)
    }

    /// Add a class; names must be unique
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSnapshot` if the name is already registered.
    pub fn insert_class(&mut self, class: ClassDefinition) -> Result<()> {
        if self.classes.contains_key(&class.name) {
            return Err(Report::new(Error::duplicate("class", &class.name)));
        }
        self.classes.insert(class.name.clone(), class);
        Ok(())
    }

    /// Add a method signature under `id`; ids must be unique
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSnapshot` if the id is already registered.
    pub fn insert_method(&mut self, id: impl Into<String>, signature: MethodSignature) -> Result<()> {
        let id = id.into();
        if self.methods.contains_key(&id) {
            return Err(Report::new(Error::duplicate("method", &id)));
        }
        self.methods.insert(id, signature);
        Ok(())
    }

    /// Look up a class by name
    pub fn class(&self, name: &TypeName) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    /// Look up a method by id
    pub fn method(&self, id: &str) -> Option<&MethodSignature> {
        self.methods.get(id)
    }

    /// All method ids, sorted
    pub fn method_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Check that every parameterized reference to a known class supplies one argument
    /// per formal parameter
    ///
    /// # Errors
    ///
    /// Returns `Error::ArityMismatch` for the first offending reference.
    pub fn validate(&self) -> Result<()> {
        for class in self.classes.values() {
            for field in &class.fields {
                self.check_arity(&field.type_ref)?;
            }
        }

        for signature in self.methods.values() {
            self.check_arity(&signature.return_type)?;
            if let CallShape::Suspending { continuation_arg } = &signature.call_shape {
                self.check_arity(continuation_arg)?;
            }
            for parameter in &signature.parameters {
                self.check_arity(&parameter.type_ref)?;
            }
        }
        Ok(())
    }

    fn check_arity(&self, type_ref: &TypeRef) -> Result<()> {
        match type_ref {
            TypeRef::Class { name, args } => {
                if !args.is_empty()
                    && let Some(class) = self.classes.get(name)
                    && class.type_parameters.len() != args.len()
                {
                    return Err(Report::new(Error::ArityMismatch {
                        type_name: name.to_string(),
                        expected:  class.type_parameters.len(),
                        found:     args.len(),
                    }));
                }
                args.iter().try_for_each(|arg| self.check_arity(arg))
            }
            TypeRef::Wildcard {
                upper_bound: Some(bound),
            } => self.check_arity(bound),
            TypeRef::Array(element) => self.check_arity(element),
            _ => Ok(()),
        }
    }
}

impl TypeResolution for TypeRegistry {
    fn resolve_class(&self, type_ref: &TypeRef) -> Option<&ClassDefinition> {
        type_ref
            .class_name()
            .and_then(|name| self.classes.get(name))
    }
}

impl MemberClassification for TypeRegistry {}

impl MethodMetadata for TypeRegistry {
    type Method = str;

    fn signature<'a>(&'a self, method: &str) -> Option<Cow<'a, MethodSignature>> {
        self.methods.get(method).map(Cow::Borrowed)
    }
}
