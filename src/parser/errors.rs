//! Parser error types
//!
//! Error codes:
//! - NX_SYNTAX_ERROR (REJECT)
//! - NX_QUERY_FILE_NOT_FOUND (REJECT)
//! - NX_QUERY_FILE_TYPE (REJECT)
//! - NX_QUERY_FILE_UNREADABLE (REJECT)

use std::fmt;

/// Parser-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorCode {
    /// Query text does not match the grammar
    SyntaxError,
    /// Query file does not exist
    QueryFileNotFound,
    /// Query file does not carry the .nxql extension
    QueryFileType,
    /// Query file exists but could not be read
    QueryFileUnreadable,
}

impl ParserErrorCode {
    /// Returns the string code.
    pub fn code(&self) -> &'static str {
        match self {
            ParserErrorCode::SyntaxError => "NX_SYNTAX_ERROR",
            ParserErrorCode::QueryFileNotFound => "NX_QUERY_FILE_NOT_FOUND",
            ParserErrorCode::QueryFileType => "NX_QUERY_FILE_TYPE",
            ParserErrorCode::QueryFileUnreadable => "NX_QUERY_FILE_UNREADABLE",
        }
    }
}

impl fmt::Display for ParserErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parser error with the offending fragment in the message.
#[derive(Debug)]
pub struct ParserError {
    code: ParserErrorCode,
    message: String,
}

impl ParserError {
    /// Create a syntax error. The message carries the grammar diagnostic,
    /// including the offending fragment and position.
    pub fn syntax(detail: impl Into<String>) -> Self {
        Self {
            code: ParserErrorCode::SyntaxError,
            message: format!("Failed to parse query: {}", detail.into()),
        }
    }

    /// Create a file-not-found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self {
            code: ParserErrorCode::QueryFileNotFound,
            message: format!("File not found: {}", path.into()),
        }
    }

    /// Create an invalid-file-type error.
    pub fn invalid_file_type(path: impl Into<String>) -> Self {
        Self {
            code: ParserErrorCode::QueryFileType,
            message: format!(
                "Invalid file type: {}. Expected a .nxql file.",
                path.into()
            ),
        }
    }

    /// Create an unreadable-file error.
    pub fn file_unreadable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: ParserErrorCode::QueryFileUnreadable,
            message: format!(
                "Failed to read query file {}: {}",
                path.into(),
                reason.into()
            ),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> ParserErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ParserError {}

/// Result type for parser operations.
pub type ParserResult<T> = Result<T, ParserError>;
