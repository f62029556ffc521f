//! Schema error types
//!
//! Error codes:
//! - NX_SCHEMA_FORMAT (FATAL) — malformed schema document
//! - NX_RESERVED_FIELD (FATAL) — schema declares a reserved attribute name
//! - NX_UNKNOWN_FIELD (REJECT) — record carries a field the schema lacks
//! - NX_TYPE_MISMATCH (REJECT) — field value disagrees with declared type
//!
//! Schema loading happens once at startup, so format errors are fatal;
//! field validation errors reject the offending record.

use std::fmt;

/// Severity levels for schema errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The offending input is rejected
    Reject,
    /// Startup cannot proceed
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema document is malformed
    SchemaFormat,
    /// Schema declares a reserved field name
    ReservedField,
    /// Field not declared in the schema
    UnknownField,
    /// Value shape disagrees with the declared type
    TypeMismatch,
}

impl SchemaErrorCode {
    /// Returns the string code.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::SchemaFormat => "NX_SCHEMA_FORMAT",
            SchemaErrorCode::ReservedField => "NX_RESERVED_FIELD",
            SchemaErrorCode::UnknownField => "NX_UNKNOWN_FIELD",
            SchemaErrorCode::TypeMismatch => "NX_TYPE_MISMATCH",
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::SchemaFormat | SchemaErrorCode::ReservedField => Severity::Fatal,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error with the offending field in the message.
#[derive(Debug)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    field: Option<String>,
}

impl SchemaError {
    /// Create a malformed-schema error.
    pub fn format(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::SchemaFormat,
            message: format!("Invalid schema in {}: {}", origin.into(), reason.into()),
            field: None,
        }
    }

    /// Create a reserved-field error.
    pub fn reserved_field(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::ReservedField,
            message: format!(
                "Field \"{}\" is reserved and cannot be used in the schema.",
                name
            ),
            field: Some(name),
        }
    }

    /// Create an unknown-field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::UnknownField,
            message: format!("Unknown field \"{}\" in fields.", name),
            field: Some(name),
        }
    }

    /// Create a type-mismatch error for a scalar field.
    pub fn type_mismatch(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::TypeMismatch,
            message: format!(
                "Field \"{}\" should be of type \"{}\", but received \"{}\".",
                name,
                expected.into(),
                actual.into()
            ),
            field: Some(name),
        }
    }

    /// Create a type-mismatch error for a default value.
    pub fn default_mismatch(name: impl Into<String>, expected: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::TypeMismatch,
            message: format!(
                "Default value for \"{}\" must be of type \"{}\".",
                name,
                expected.into()
            ),
            field: Some(name),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level.
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending field, if applicable.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchemaErrorCode::SchemaFormat.code(), "NX_SCHEMA_FORMAT");
        assert_eq!(SchemaErrorCode::ReservedField.code(), "NX_RESERVED_FIELD");
        assert_eq!(SchemaErrorCode::UnknownField.code(), "NX_UNKNOWN_FIELD");
        assert_eq!(SchemaErrorCode::TypeMismatch.code(), "NX_TYPE_MISMATCH");
    }

    #[test]
    fn test_severity_levels() {
        assert_eq!(SchemaErrorCode::SchemaFormat.severity(), Severity::Fatal);
        assert_eq!(SchemaErrorCode::UnknownField.severity(), Severity::Reject);
    }

    #[test]
    fn test_display_names_field() {
        let err = SchemaError::type_mismatch("owner", "string", "number");
        let rendered = err.to_string();
        assert!(rendered.contains("owner"));
        assert!(rendered.contains("NX_TYPE_MISMATCH"));
        assert_eq!(err.field(), Some("owner"));
    }
}
