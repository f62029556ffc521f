//! Query executor for nxdb
//!
//! Evaluates one parsed query against one dataset, producing a result
//! envelope. Execution flow (strict order):
//!
//! 1. Validate the source table
//! 2. Normalize the selection
//! 3. Apply the condition (keyed lookup, scan comparison, or membership)
//! 4. Project each retained record through the selection
//! 5. Return rows + total + selection echo
//!
//! Evaluation is read-only and deterministic: the dataset iterates in name
//! order, and the same query over the same dataset yields identical results.

use crate::dataset::{Dataset, Record, Row, Value};
use crate::parser::{ComparisonExpression, Condition, InExpression, CompareOp, Query};

use super::errors::{ExecutorError, ExecutorResult};
use super::result::QueryResult;
use super::selection::{normalize_selection, project_by_selection};

/// The sole supported source table.
pub const SOURCE_PROJECTS: &str = "projects";

/// Evaluates queries against a borrowed dataset snapshot.
pub struct QueryExecutor<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryExecutor<'a> {
    /// Creates an executor over the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Executes a query and returns its result envelope.
    ///
    /// Any failure aborts the whole query; partial results are never
    /// returned. A record missing a filtered field is an error, not a skip,
    /// so data-quality problems surface early.
    pub fn execute(&self, query: &Query) -> ExecutorResult<QueryResult> {
        if query.source != SOURCE_PROJECTS {
            return Err(ExecutorError::unsupported_source(&query.source));
        }

        let selection = normalize_selection(&query.selection)?;

        let rows = match &query.condition {
            None => self.dataset.records().map(Record::flatten).collect(),
            Some(condition) => self.filter(condition)?,
        };

        let results = rows
            .into_iter()
            .map(|row| project_by_selection(row, &selection))
            .collect::<ExecutorResult<Vec<Row>>>()?;

        Ok(QueryResult::new(results, selection))
    }

    fn filter(&self, condition: &Condition) -> ExecutorResult<Vec<Row>> {
        match condition {
            Condition::Comparison(cmp) if is_name_lookup(cmp) => self.lookup_by_name(&cmp.right),
            Condition::Comparison(cmp) => self.scan_comparison(cmp),
            Condition::Membership(ix) => self.scan_membership(ix),
            Condition::Compound { op, .. } => Err(ExecutorError::unsupported_condition(format!(
                "conditions joined with {}",
                op
            ))),
        }
    }

    /// Fast path: `name = <literal>` is a direct primary-key lookup.
    ///
    /// Cardinality of the result is 0 or 1. The literal must be a string.
    fn lookup_by_name(&self, right: &Value) -> ExecutorResult<Vec<Row>> {
        let name = match right {
            Value::Str(name) => name,
            other => return Err(ExecutorError::non_string_name(other)),
        };

        Ok(self
            .dataset
            .get(name)
            .map(Record::flatten)
            .into_iter()
            .collect())
    }

    /// General path: flatten every record and compare the named field.
    fn scan_comparison(&self, cmp: &ComparisonExpression) -> ExecutorResult<Vec<Row>> {
        let mut rows = Vec::new();

        for record in self.dataset.records() {
            let row = record.flatten();
            let left = row
                .get(&cmp.left)
                .ok_or_else(|| ExecutorError::field_not_found(&record.name, &cmp.left))?;

            if evaluate_comparison(left, cmp)? {
                rows.push(row);
            }
        }

        Ok(rows)
    }

    /// Membership path: retain records whose sequence field contains the literal.
    fn scan_membership(&self, ix: &InExpression) -> ExecutorResult<Vec<Row>> {
        let mut rows = Vec::new();

        for record in self.dataset.records() {
            let row = record.flatten();
            let target = row
                .get(&ix.target)
                .ok_or_else(|| ExecutorError::field_not_found(&record.name, &ix.target))?;

            let contained = target
                .sequence_contains(&ix.value)
                .ok_or_else(|| ExecutorError::not_a_sequence(&ix.target, target.type_name()))?;

            if contained {
                rows.push(row);
            }
        }

        Ok(rows)
    }
}

fn is_name_lookup(cmp: &ComparisonExpression) -> bool {
    cmp.op == CompareOp::Eq && cmp.left == "name"
}

/// Applies the operator to `(left, right)`.
///
/// Equality is structural over any primitive; ordering requires numbers on
/// both sides and never coerces.
fn evaluate_comparison(left: &Value, cmp: &ComparisonExpression) -> ExecutorResult<bool> {
    match cmp.op {
        CompareOp::Eq => Ok(left == &cmp.right),
        CompareOp::Neq => Ok(left != &cmp.right),
        CompareOp::Lt | CompareOp::Gt | CompareOp::Lte | CompareOp::Gte => {
            let (a, b) = match (left.as_num(), cmp.right.as_num()) {
                (Some(a), Some(b)) => (a, b),
                _ => {
                    return Err(ExecutorError::non_numeric_comparison(
                        left, cmp.op, &cmp.right,
                    ))
                }
            };
            Ok(match cmp.op {
                CompareOp::Lt => a < b,
                CompareOp::Gt => a > b,
                CompareOp::Lte => a <= b,
                CompareOp::Gte => a >= b,
                _ => unreachable!(),
            })
        }
    }
}
