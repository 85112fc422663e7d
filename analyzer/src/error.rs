use thiserror::Error;

// Error message prefixes
const MSG_FAILED_TO_PREFIX: &str = "Failed to";
const MSG_INVALID_PREFIX: &str = "Invalid";
const MSG_DUPLICATE_PREFIX: &str = "Duplicate";

/// Result type for the `endpoint_fields` library
pub type Result<T> = core::result::Result<T, error_stack::Report<Error>>;

/// Errors raised while loading host metadata or configuration
///
/// The analysis queries themselves never fail: ineligible methods and unresolvable
/// types produce empty results. Only the ambient loading paths return these.
#[derive(Error)]
pub enum Error {
    /// A type argument list does not match the formal parameters of the class it names
    #[error("Arity mismatch for {type_name}: expected {expected} type arguments, found {found}")]
    ArityMismatch {
        /// Class named by the offending reference
        type_name: String,
        /// Formal parameter count of the class
        expected:  usize,
        /// Argument count at the use site
        found:     usize,
    },

    /// Analyzer configuration could not be read or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a file from disk failed
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Catch-all with a preformatted message
    #[error("{0}")]
    General(String),

    /// A caller-supplied value was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The snapshot parsed but describes an inconsistent symbol table
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// The snapshot is not well-formed JSON for the expected shape
    #[error("Snapshot parse error: {0}")]
    SnapshotParse(String),

    /// A type expression could not be parsed
    #[error("Type syntax error in '{input}': {reason}")]
    TypeSyntax {
        /// The rejected type expression
        input:  String,
        /// What the parser expected
        reason: String,
    },
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch {
                type_name,
                expected,
                found,
            } => f
                .debug_struct("ArityMismatch")
                .field("type_name", type_name)
                .field("expected", expected)
                .field("found", found)
                .finish(),
            Self::Config(s) => f.debug_tuple("Config").field(s).finish(),
            Self::FileOperation(s) => f.debug_tuple("FileOperation").field(s).finish(),
            Self::General(s) => f.debug_tuple("General").field(s).finish(),
            Self::InvalidArgument(s) => f.debug_tuple("InvalidArgument").field(s).finish(),
            Self::InvalidSnapshot(s) => f.debug_tuple("InvalidSnapshot").field(s).finish(),
            Self::SnapshotParse(s) => f.debug_tuple("SnapshotParse").field(s).finish(),
            Self::TypeSyntax { input, reason } => f
                .debug_struct("TypeSyntax")
                .field("input", input)
                .field("reason", reason)
                .finish(),
        }
    }
}

impl Error {
    /// Create a "Failed to X" error
    pub fn failed_to(action: &str, details: impl std::fmt::Display) -> Self {
        Self::General(format!("{MSG_FAILED_TO_PREFIX} {action}: {details}"))
    }

    /// Create an "Invalid X" error
    pub fn invalid(what: &str, details: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("{MSG_INVALID_PREFIX} {what}: {details}"))
    }

    /// Create a "Duplicate X" snapshot error
    pub fn duplicate(what: &str, name: impl std::fmt::Display) -> Self {
        Self::InvalidSnapshot(format!("{MSG_DUPLICATE_PREFIX} {what} '{name}'"))
    }

    /// Create error for IO operations
    pub fn io_failed(
        operation: &str,
        path: &std::path::Path,
        error: impl std::fmt::Display,
    ) -> Self {
        Self::FileOperation(format!(
            "{MSG_FAILED_TO_PREFIX} {operation} {}: {error}",
            path.display()
        ))
    }

    /// Create error for a type expression the parser rejected
    pub fn type_syntax(input: &str, reason: impl std::fmt::Display) -> Self {
        Self::TypeSyntax {
            input:  input.to_string(),
            reason: reason.to_string(),
        }
    }
}
