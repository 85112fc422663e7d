//! A newtype wrapper for nominal type names
//!
//! This module provides the `TypeName` type which represents fully-qualified
//! class names (e.g., "com.example.api.UserDto") as reported by the host.

use serde::{Deserialize, Serialize};

/// A newtype wrapper for fully-qualified type names used as map keys
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the short name (last segment after `.`)
    /// For example: `com.example.UserDto` returns `UserDto`
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Package part of the name, if any
    /// For example: `retrofit2.http.GET` returns `Some("retrofit2.http")`
    pub fn package(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(package, _)| package)
    }

    /// True if `other` names this type either fully qualified or by its short name
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other || self.short_name() == other
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for TypeName {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<TypeName> for String {
    fn from(type_name: TypeName) -> Self {
        type_name.0
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_and_package() {
        let name = TypeName::from("com.example.api.UserDto");
        assert_eq!(name.short_name(), "UserDto");
        assert_eq!(name.package(), Some("com.example.api"));

        let bare = TypeName::from("UserDto");
        assert_eq!(bare.short_name(), "UserDto");
        assert_eq!(bare.package(), None);
    }

    #[test]
    fn test_matches_full_or_short() {
        let name = TypeName::from("kotlin.Unit");
        assert!(name.matches("kotlin.Unit"));
        assert!(name.matches("Unit"));
        assert!(!name.matches("UnitPrice"));
    }
}
