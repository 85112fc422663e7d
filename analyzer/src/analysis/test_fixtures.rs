//! Shared symbol table for analysis tests

use serde_json::json;

use crate::registry::TypeRegistry;
use crate::type_model::{FieldRecord, MethodSignature};

/// Interface methods, payload classes, and wrappers used across analysis tests
#[allow(clippy::expect_used, reason = "tests")]
pub fn registry() -> TypeRegistry {
    TypeRegistry::from_value(json!({
        "classes": [
            { "name": "retrofit2.Response", "typeParameters": ["T"],
              "fields": [ { "name": "rawResponse", "type": "okhttp3.Response" } ] },
            { "name": "retrofit2.Call", "typeParameters": ["T"] },
            { "name": "java.util.List", "typeParameters": ["E"] },
            { "name": "arrow.core.Either", "typeParameters": ["A", "B"] },
            { "name": "com.example.Envelope", "typeParameters": ["T"],
              "fields": [
                  { "name": "data", "type": "T" },
                  { "name": "error", "type": "com.example.ApiError" }
              ] },
            { "name": "com.example.ApiError",
              "fields": [ { "name": "code", "type": "int" } ] },
            { "name": "com.example.Dto",
              "fields": [
                  { "name": "a", "type": "kotlin.Int" },
                  { "name": "b", "type": "kotlin.String" }
              ] },
            { "name": "com.example.Outer",
              "fields": [
                  { "name": "a", "type": "kotlin.Int" },
                  { "name": "b", "type": "kotlin.String" },
                  { "name": "c", "type": "com.example.Inner" }
              ] },
            { "name": "com.example.Inner",
              "fields": [ { "name": "d", "type": "kotlin.Int" } ] },
            { "name": "com.example.Node",
              "fields": [ { "name": "next", "type": "com.example.Node" } ] },
            { "name": "com.example.Parent",
              "fields": [
                  { "name": "name", "type": "kotlin.String" },
                  { "name": "child", "type": "com.example.Child" }
              ] },
            { "name": "com.example.Child",
              "fields": [
                  { "name": "parent", "type": "com.example.Parent" },
                  { "name": "age", "type": "int" }
              ] },
            { "name": "com.example.Twins",
              "fields": [
                  { "name": "left", "type": "com.example.Inner" },
                  { "name": "right", "type": "com.example.Inner" }
              ] },
            { "name": "com.example.WithStatics",
              "fields": [
                  { "name": "CACHE", "type": "com.example.Inner", "static": true },
                  { "name": "value", "type": "kotlin.Int" },
                  { "name": "DEFAULT", "type": "com.example.WithStatics", "static": true }
              ] },
            { "name": "com.example.Status",
              "fields": [
                  { "name": "ACTIVE", "type": "com.example.Status", "static": true, "enumConstant": true },
                  { "name": "BANNED", "type": "com.example.Status", "static": true, "enumConstant": true },
                  { "name": "label", "type": "kotlin.String" }
              ] },
            { "name": "com.example.Holder", "typeParameters": ["T"],
              "fields": [ { "name": "item", "type": "T" } ] },
            { "name": "com.example.Upload",
              "fields": [
                  { "name": "data", "type": "byte[]" },
                  { "name": "parts", "type": "com.example.Inner[]" },
                  { "name": "owner", "type": "com.example.Inner" }
              ] },
            { "name": "com.example.UnitPrice",
              "fields": [ { "name": "cents", "type": "long" } ] }
        ],
        "methods": [
            method("getDto", "com.example.Dto"),
            method("getOuter", "com.example.Outer"),
            method("getResponse", "retrofit2.Response<com.example.Dto>"),
            method("getResponseList", "retrofit2.Response<java.util.List<com.example.Dto>>"),
            method("getEnvelope", "retrofit2.Call<com.example.Envelope<com.example.Dto>>"),
            method("getWildcard", "java.util.List<? extends com.example.Dto>"),
            method("getUnbounded", "java.util.List<?>"),
            method("getPrimitiveArg", "java.util.List<int>"),
            method("getEither", "arrow.core.Either<com.example.ApiError, com.example.Dto>"),
            method("getNode", "com.example.Node"),
            method("getUnit", "kotlin.Unit"),
            method("getVoid", "java.lang.Void"),
            method("getCallUnit", "retrofit2.Call<kotlin.Unit>"),
            method("getUnitPrice", "com.example.UnitPrice"),
            method("getPrimitive", "int"),
            method("getArray", "com.example.Dto[]"),
            method("getUpload", "retrofit2.Response<com.example.Upload>"),
            {
                "id": "com.example.Api#loadDto",
                "containingType": { "name": "com.example.Api", "isInterface": true },
                "returnType": "java.lang.Object",
                "callShape": { "kind": "suspending", "continuationArg": "com.example.Dto" },
                "annotations": ["retrofit2.http.GET"]
            },
            {
                "id": "com.example.Api#loadResponse",
                "containingType": { "name": "com.example.Api", "isInterface": true },
                "returnType": "java.lang.Object",
                "callShape": { "kind": "suspending", "continuationArg": "retrofit2.Response<com.example.Outer>" },
                "annotations": ["GET"]
            },
            {
                "id": "com.example.Api#unannotated",
                "containingType": { "name": "com.example.Api", "isInterface": true },
                "returnType": "com.example.Dto",
                "annotations": ["kotlin.Deprecated"]
            },
            {
                "id": "com.example.ApiImpl#getDto",
                "containingType": { "name": "com.example.ApiImpl", "isInterface": false },
                "returnType": "com.example.Dto",
                "annotations": ["retrofit2.http.GET"]
            },
            {
                "id": "com.example.Api#create",
                "containingType": { "name": "com.example.Api", "isInterface": true },
                "returnType": "retrofit2.Response<com.example.Dto>",
                "annotations": ["retrofit2.http.POST"],
                "parameters": [
                    { "name": "token", "type": "kotlin.String", "annotations": ["retrofit2.http.Header"] },
                    { "name": "body", "type": "com.example.Outer", "annotations": ["retrofit2.http.Body"] },
                    { "name": "extra", "type": "com.example.Dto", "annotations": ["Body"] }
                ]
            },
            {
                "id": "com.example.Api#update",
                "containingType": { "name": "com.example.Api", "isInterface": true },
                "annotations": ["PUT"],
                "parameters": [
                    { "name": "id", "type": "long", "annotations": ["Path"] }
                ]
            },
            {
                "id": "com.example.Api#patchNode",
                "containingType": { "name": "com.example.Api", "isInterface": true },
                "annotations": ["PATCH"],
                "parameters": [
                    { "name": "node", "type": "com.example.Node", "annotations": ["Body"] }
                ]
            }
        ]
    }))
    .expect("fixture snapshot should load")
}

/// Direct `@GET` method on `com.example.Api` returning `return_type`
fn method(name: &str, return_type: &str) -> serde_json::Value {
    json!({
        "id": format!("com.example.Api#{name}"),
        "containingType": { "name": "com.example.Api", "isInterface": true },
        "returnType": return_type,
        "annotations": ["retrofit2.http.GET"]
    })
}

/// Signature of a fixture method
#[allow(clippy::expect_used, reason = "tests")]
pub fn signature(registry: &TypeRegistry, id: &str) -> MethodSignature {
    registry
        .method(id)
        .cloned()
        .expect("fixture method should exist")
}

/// Field names in output order
pub fn names(records: &[FieldRecord]) -> Vec<&str> {
    records.iter().map(FieldRecord::name).collect()
}
