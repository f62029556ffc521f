//! Query AST
//!
//! The parsed representation consumed by the executor. The AST narrows the
//! condition shapes to what the grammar produces: a single comparison or
//! membership test, or an AND/OR chain the executor rejects at run time.
//! `Display` renders canonical NXQL text that re-parses to the same AST.

use std::fmt;

use crate::dataset::Value;

/// The fields a query wants projected.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// `*` — all fields present on the record
    All,
    /// An explicit, ordered field list
    List(Vec<String>),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "*"),
            Selection::List(fields) => write!(f, "{}", fields.join(", ")),
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
}

impl CompareOp {
    /// Returns the operator as written in NXQL.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Neq => "!=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Lte => "<=",
            CompareOp::Gte => ">=",
        }
    }

    /// Returns true for `<`, `>`, `<=`, `>=`, which require numeric operands.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            CompareOp::Lt | CompareOp::Gt | CompareOp::Lte | CompareOp::Gte
        )
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `<field> <op> <literal>`
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonExpression {
    /// Field name on the left
    pub left: String,
    /// Comparison operator
    pub op: CompareOp,
    /// Literal on the right
    pub right: Value,
}

impl ComparisonExpression {
    pub fn new(left: impl Into<String>, op: CompareOp, right: Value) -> Self {
        Self {
            left: left.into(),
            op,
            right,
        }
    }
}

impl fmt::Display for ComparisonExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

/// `<literal> IN <field>` — does the record's sequence field contain the literal?
#[derive(Debug, Clone, PartialEq)]
pub struct InExpression {
    /// The literal to look for
    pub value: Value,
    /// The sequence-valued field to search
    pub target: String,
}

impl InExpression {
    pub fn new(value: Value, target: impl Into<String>) -> Self {
        Self {
            value,
            target: target.into(),
        }
    }
}

impl fmt::Display for InExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IN {}", self.value, self.target)
    }
}

/// Boolean connective between conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The filter condition of a query.
///
/// `Compound` is parse-time representable but rejected by the executor; the
/// grammar accepts AND/OR chains so that composition fails at execution time
/// with a precise error instead of a generic parse failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// A single comparison
    Comparison(ComparisonExpression),
    /// A single membership test
    Membership(InExpression),
    /// An AND/OR chain (not executable)
    Compound {
        op: LogicalOp,
        left: Box<Condition>,
        right: Box<Condition>,
    },
}

impl Condition {
    /// Builds an equality comparison.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Condition::Comparison(ComparisonExpression::new(field, CompareOp::Eq, value.into()))
    }

    /// Builds a membership test.
    pub fn within(value: impl Into<Value>, target: impl Into<String>) -> Self {
        Condition::Membership(InExpression::new(value.into(), target))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Comparison(cmp) => write!(f, "{}", cmp),
            Condition::Membership(ix) => write!(f, "{}", ix),
            Condition::Compound { op, left, right } => {
                write!(f, "{} {} {}", left, op, right)
            }
        }
    }
}

/// A parsed NXQL query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Fields to project
    pub selection: Selection,
    /// Table name (`projects` is the only supported source)
    pub source: String,
    /// Optional filter condition
    pub condition: Option<Condition>,
}

impl Query {
    /// Creates a query with no condition.
    pub fn new(selection: Selection, source: impl Into<String>) -> Self {
        Self {
            selection,
            source: source.into(),
            condition: None,
        }
    }

    /// Creates a `SELECT * FROM <source>` query.
    pub fn select_all(source: impl Into<String>) -> Self {
        Self::new(Selection::All, source)
    }

    /// Sets the filter condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", self.selection, self.source)?;
        if let Some(condition) = &self.condition {
            write!(f, " WHERE {}", condition)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = Query::select_all("projects").with_condition(Condition::eq("name", "client"));
        assert_eq!(query.source, "projects");
        assert_eq!(query.selection, Selection::All);
        assert!(query.condition.is_some());
    }

    #[test]
    fn test_canonical_text() {
        let query = Query::select_all("projects").with_condition(Condition::within("lib", "tags"));
        assert_eq!(
            query.to_string(),
            "SELECT * FROM projects WHERE 'lib' IN tags"
        );

        let query = Query::new(
            Selection::List(vec!["name".into(), "root".into()]),
            "projects",
        );
        assert_eq!(query.to_string(), "SELECT name, root FROM projects");
    }

    #[test]
    fn test_compound_renders_flat() {
        let query = Query::select_all("projects").with_condition(Condition::Compound {
            op: LogicalOp::And,
            left: Box::new(Condition::eq("type", "lib")),
            right: Box::new(Condition::within("lib", "tags")),
        });
        assert_eq!(
            query.to_string(),
            "SELECT * FROM projects WHERE type = 'lib' AND 'lib' IN tags"
        );
    }

    #[test]
    fn test_ordering_ops() {
        assert!(CompareOp::Lt.is_ordering());
        assert!(CompareOp::Gte.is_ordering());
        assert!(!CompareOp::Eq.is_ordering());
        assert_eq!(CompareOp::Neq.as_str(), "!=");
    }
}
