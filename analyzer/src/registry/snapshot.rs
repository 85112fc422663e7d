//! JSON snapshot of a host symbol table
//!
//! Types are written as type expressions and parsed on load. Names listed in a class's
//! `typeParameters` (or a method's) become type variables inside that scope.

use serde::Deserialize;

use crate::error::Result;
use crate::type_model::{
    CallShape, ClassDefinition, ContainingType, FieldDefinition, MethodSignature, Parameter,
    TypeName, TypeRef, parse_type_ref,
};

/// Return type assumed when a method entry omits one
const DEFAULT_RETURN_TYPE: &str = "kotlin.Unit";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(super) struct SnapshotDocument {
    #[serde(default)]
    pub classes: Vec<ClassEntry>,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(super) struct ClassEntry {
    name:            String,
    #[serde(default)]
    type_parameters: Vec<String>,
    #[serde(default)]
    fields:          Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct FieldEntry {
    name:          String,
    #[serde(rename = "type")]
    type_expr:     String,
    #[serde(default, rename = "static")]
    is_static:     bool,
    #[serde(default)]
    enum_constant: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ContainingTypeEntry {
    name:         String,
    #[serde(default)]
    is_interface: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", deny_unknown_fields)]
enum CallShapeEntry {
    Direct,
    #[serde(rename_all = "camelCase")]
    Suspending { continuation_arg: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ParameterEntry {
    name:        String,
    #[serde(rename = "type")]
    type_expr:   String,
    #[serde(default)]
    annotations: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(super) struct MethodEntry {
    pub id:          String,
    #[serde(default)]
    name:            Option<String>,
    containing_type: ContainingTypeEntry,
    #[serde(default)]
    type_parameters: Vec<String>,
    #[serde(default)]
    return_type:     Option<String>,
    #[serde(default)]
    call_shape:      Option<CallShapeEntry>,
    #[serde(default)]
    annotations:     Vec<String>,
    #[serde(default)]
    parameters:      Vec<ParameterEntry>,
}

/// Parse `type_expr` and bind `formals` as type variables
fn parse_in_scope(type_expr: &str, formals: &[String]) -> Result<TypeRef> {
    Ok(parse_type_ref(type_expr)?.bind_type_parameters(formals))
}

impl ClassEntry {
    /// Declared class name
    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn into_definition(self) -> Result<ClassDefinition> {
        let fields = self
            .fields
            .into_iter()
            .map(|field| -> Result<FieldDefinition> {
                Ok(FieldDefinition::new(
                    field.name,
                    parse_in_scope(&field.type_expr, &self.type_parameters)?,
                )
                .with_static(field.is_static)
                .with_enum_constant(field.enum_constant))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassDefinition::new(self.name, fields).with_type_parameters(self.type_parameters))
    }
}

impl MethodEntry {
    /// Method name, falling back to the part of the id after `#`
    fn method_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.id
                .rsplit_once('#')
                .map_or(self.id.as_str(), |(_, name)| name)
                .to_string()
        })
    }

    /// Convert to a signature; `class_formals` are the containing type's type parameters
    pub(super) fn into_signature(self, class_formals: &[String]) -> Result<MethodSignature> {
        let name = self.method_name();
        let formals: Vec<String> = class_formals
            .iter()
            .chain(&self.type_parameters)
            .cloned()
            .collect();

        let return_type = parse_in_scope(
            self.return_type.as_deref().unwrap_or(DEFAULT_RETURN_TYPE),
            &formals,
        )?;

        let call_shape = match self.call_shape {
            None | Some(CallShapeEntry::Direct) => CallShape::Direct,
            Some(CallShapeEntry::Suspending { continuation_arg }) => CallShape::Suspending {
                continuation_arg: parse_in_scope(&continuation_arg, &formals)?,
            },
        };

        let parameters = self
            .parameters
            .into_iter()
            .map(|parameter| -> Result<Parameter> {
                Ok(Parameter {
                    name:        parameter.name,
                    type_ref:    parse_in_scope(&parameter.type_expr, &formals)?,
                    annotations: parameter
                        .annotations
                        .into_iter()
                        .map(TypeName::from)
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MethodSignature {
            name,
            containing_type: ContainingType {
                name:         TypeName::from(self.containing_type.name),
                is_interface: self.containing_type.is_interface,
            },
            return_type,
            parameters,
            annotations: self.annotations.into_iter().map(TypeName::from).collect(),
            call_shape,
        })
    }

    /// Name of the declaring type
    pub(super) fn containing_type_name(&self) -> &str {
        &self.containing_type.name
    }
}
