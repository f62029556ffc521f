//! NXQL front-end for nxdb
//!
//! Turns query text into a [`Query`] AST:
//!
//! ```text
//! SELECT <selection> FROM <source> [WHERE <condition>]
//! ```
//!
//! The grammar accepts a superset of what the executor evaluates: AND/OR
//! chains parse into a compound condition that execution rejects with its own
//! error code. Nothing the parser accepts is ever silently dropped.

mod ast;
mod errors;
mod parse;

pub use ast::{
    CompareOp, ComparisonExpression, Condition, InExpression, LogicalOp, Query, Selection,
};
pub use errors::{ParserError, ParserErrorCode, ParserResult};
pub use parse::{parse, parse_file, QUERY_FILE_EXTENSION};
