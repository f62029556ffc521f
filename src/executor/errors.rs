//! Executor error types
//!
//! Error codes:
//! - NX_UNSUPPORTED_SOURCE (REJECT) — query names an unknown table
//! - NX_UNSUPPORTED_CONDITION (REJECT) — condition shape the engine cannot run
//! - NX_EMPTY_SELECTION (REJECT) — explicit selection with zero fields
//! - NX_FIELD_NOT_FOUND (REJECT) — condition references a field a record lacks
//! - NX_INVALID_SELECTION_KEY (REJECT) — projection references an absent field
//! - NX_TYPE_ERROR (REJECT) — operand types disagree with the operator
//!
//! Every failure aborts the whole query; there are no partial results.

use std::fmt;

/// Executor-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorCode {
    /// Query source is not a supported table
    UnsupportedSource,
    /// Condition shape is not executable
    UnsupportedCondition,
    /// Selection list has zero entries
    EmptySelection,
    /// Condition field absent from a record
    FieldNotFound,
    /// Selection key absent from a record
    InvalidSelectionKey,
    /// Operand type disagreement
    TypeError,
}

impl ExecutorErrorCode {
    /// Returns the string code.
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorErrorCode::UnsupportedSource => "NX_UNSUPPORTED_SOURCE",
            ExecutorErrorCode::UnsupportedCondition => "NX_UNSUPPORTED_CONDITION",
            ExecutorErrorCode::EmptySelection => "NX_EMPTY_SELECTION",
            ExecutorErrorCode::FieldNotFound => "NX_FIELD_NOT_FOUND",
            ExecutorErrorCode::InvalidSelectionKey => "NX_INVALID_SELECTION_KEY",
            ExecutorErrorCode::TypeError => "NX_TYPE_ERROR",
        }
    }
}

impl fmt::Display for ExecutorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Executor error with full context.
#[derive(Debug)]
pub struct ExecutorError {
    code: ExecutorErrorCode,
    message: String,
}

impl ExecutorError {
    /// Create an unsupported-source error.
    pub fn unsupported_source(source: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::UnsupportedSource,
            message: format!(
                "Unsupported source: {}. Currently only 'projects' is supported.",
                source.into()
            ),
        }
    }

    /// Create an unsupported-condition error (AND/OR chains).
    pub fn unsupported_condition(detail: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::UnsupportedCondition,
            message: format!(
                "Unsupported condition: {}. Only a single comparison or membership test is evaluated.",
                detail.into()
            ),
        }
    }

    /// Create an empty-selection error.
    pub fn empty_selection() -> Self {
        Self {
            code: ExecutorErrorCode::EmptySelection,
            message: "Selection list is empty. Select '*' or at least one field.".into(),
        }
    }

    /// Create a field-not-found error naming the record and field.
    pub fn field_not_found(record: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::FieldNotFound,
            message: format!(
                "Invalid condition field '{}': record '{}' does not have this field.",
                field.into(),
                record.into()
            ),
        }
    }

    /// Create an invalid-selection-key error enumerating the valid keys.
    pub fn invalid_selection_key(key: impl Into<String>, available: &[&str]) -> Self {
        Self {
            code: ExecutorErrorCode::InvalidSelectionKey,
            message: format!(
                "Invalid selection key: {}. Available keys are: {}",
                key.into(),
                available.join(", ")
            ),
        }
    }

    /// Create a type error for an ordering comparison over non-numbers.
    pub fn non_numeric_comparison(
        left: impl fmt::Display,
        op: impl fmt::Display,
        right: impl fmt::Display,
    ) -> Self {
        Self {
            code: ExecutorErrorCode::TypeError,
            message: format!(
                "Invalid comparison: {} {} {}. Both sides must be numbers.",
                left, op, right
            ),
        }
    }

    /// Create a type error for a non-string primary-key lookup.
    pub fn non_string_name(value: impl fmt::Display) -> Self {
        Self {
            code: ExecutorErrorCode::TypeError,
            message: format!(
                "Invalid condition right value: {}. Expected a string.",
                value
            ),
        }
    }

    /// Create a type error for a membership test against a scalar field.
    pub fn not_a_sequence(field: impl Into<String>, type_name: &str) -> Self {
        Self {
            code: ExecutorErrorCode::TypeError,
            message: format!(
                "Invalid IN target '{}': expected a sequence-valued field, got {}.",
                field.into(),
                type_name
            ),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> ExecutorErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ExecutorError {}

/// Result type for executor operations.
pub type ExecutorResult<T> = Result<T, ExecutorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ExecutorErrorCode::UnsupportedSource.code(),
            "NX_UNSUPPORTED_SOURCE"
        );
        assert_eq!(
            ExecutorErrorCode::InvalidSelectionKey.code(),
            "NX_INVALID_SELECTION_KEY"
        );
        assert_eq!(ExecutorErrorCode::TypeError.code(), "NX_TYPE_ERROR");
    }

    #[test]
    fn test_invalid_selection_key_lists_fields() {
        let err = ExecutorError::invalid_selection_key("bogus", &["name", "root", "tags"]);
        assert!(err.message().contains("bogus"));
        assert!(err.message().contains("name, root, tags"));
    }

    #[test]
    fn test_field_not_found_names_record() {
        let err = ExecutorError::field_not_found("client", "churn");
        assert!(err.message().contains("client"));
        assert!(err.message().contains("churn"));
    }
}
