//! NXQL parsing
//!
//! Grammar lives in `nxql.pest`; this module walks the parse tree into the
//! AST. Parsing is pure: identical input text always yields the identical
//! `Query` or the identical failure.

use std::fs;
use std::path::Path;

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::dataset::Value;

use super::ast::{
    ComparisonExpression, CompareOp, Condition, InExpression, LogicalOp, Query, Selection,
};
use super::errors::{ParserError, ParserResult};

#[derive(Parser)]
#[grammar = "parser/nxql.pest"]
struct NxqlParser;

/// File extension queries must carry when loaded from disk.
pub const QUERY_FILE_EXTENSION: &str = "nxql";

/// Parses NXQL source text into a [`Query`].
pub fn parse(input: &str) -> ParserResult<Query> {
    let mut pairs = NxqlParser::parse(Rule::query, input)
        .map_err(|e| ParserError::syntax(e.to_string()))?;

    let query_pair = pairs
        .next()
        .ok_or_else(|| ParserError::syntax("empty input"))?;

    build_query(query_pair)
}

/// Reads and parses a query file.
///
/// The file must exist and carry the `.nxql` extension.
pub fn parse_file(path: &Path) -> ParserResult<Query> {
    if !path.exists() {
        return Err(ParserError::file_not_found(path.display().to_string()));
    }

    if path
        .extension()
        .map_or(true, |ext| ext != QUERY_FILE_EXTENSION)
    {
        return Err(ParserError::invalid_file_type(path.display().to_string()));
    }

    let text = fs::read_to_string(path).map_err(|e| {
        ParserError::file_unreadable(path.display().to_string(), e.to_string())
    })?;

    parse(&text)
}

fn build_query(pair: Pair<Rule>) -> ParserResult<Query> {
    let mut selection = None;
    let mut source = None;
    let mut condition = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::selection => selection = Some(build_selection(inner)?),
            Rule::identifier => source = Some(inner.as_str().to_string()),
            Rule::where_clause => condition = Some(build_where_clause(inner)?),
            // Keyword tokens and EOI carry no information
            _ => {}
        }
    }

    Ok(Query {
        selection: selection.ok_or_else(|| ParserError::syntax("missing selection"))?,
        source: source.ok_or_else(|| ParserError::syntax("missing FROM source"))?,
        condition,
    })
}

fn build_selection(pair: Pair<Rule>) -> ParserResult<Selection> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParserError::syntax("empty selection"))?;

    match inner.as_rule() {
        Rule::wildcard => Ok(Selection::All),
        Rule::field_list => {
            let fields = inner
                .into_inner()
                .filter(|p| p.as_rule() == Rule::identifier)
                .map(|p| p.as_str().trim().to_string())
                .collect();
            Ok(Selection::List(fields))
        }
        rule => Err(ParserError::syntax(format!(
            "unexpected selection rule: {:?}",
            rule
        ))),
    }
}

/// Folds `cond (AND|OR cond)*` left-associatively. A single condition stays
/// bare; chains become `Compound` nodes the executor refuses to evaluate.
fn build_where_clause(pair: Pair<Rule>) -> ParserResult<Condition> {
    let mut result: Option<Condition> = None;
    let mut pending_op: Option<LogicalOp> = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::condition => {
                let next = build_condition(inner)?;
                result = Some(match (result.take(), pending_op.take()) {
                    (None, _) => next,
                    (Some(left), Some(op)) => Condition::Compound {
                        op,
                        left: Box::new(left),
                        right: Box::new(next),
                    },
                    (Some(_), None) => {
                        return Err(ParserError::syntax("conditions without a connective"))
                    }
                });
            }
            Rule::logical_op => {
                pending_op = Some(if inner.as_str().eq_ignore_ascii_case("and") {
                    LogicalOp::And
                } else {
                    LogicalOp::Or
                });
            }
            _ => {}
        }
    }

    result.ok_or_else(|| ParserError::syntax("empty WHERE clause"))
}

fn build_condition(pair: Pair<Rule>) -> ParserResult<Condition> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParserError::syntax("empty condition"))?;

    match inner.as_rule() {
        Rule::comparison => build_comparison(inner),
        Rule::in_expression => build_in_expression(inner),
        rule => Err(ParserError::syntax(format!(
            "unexpected condition rule: {:?}",
            rule
        ))),
    }
}

fn build_comparison(pair: Pair<Rule>) -> ParserResult<Condition> {
    let mut left = None;
    let mut op = None;
    let mut right = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::identifier => left = Some(inner.as_str().to_string()),
            Rule::comparator => op = Some(parse_comparator(inner.as_str())?),
            Rule::literal => right = Some(build_literal(inner)?),
            _ => {}
        }
    }

    Ok(Condition::Comparison(ComparisonExpression {
        left: left.ok_or_else(|| ParserError::syntax("comparison missing field"))?,
        op: op.ok_or_else(|| ParserError::syntax("comparison missing operator"))?,
        right: right.ok_or_else(|| ParserError::syntax("comparison missing literal"))?,
    }))
}

fn build_in_expression(pair: Pair<Rule>) -> ParserResult<Condition> {
    let mut value = None;
    let mut target = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::literal => value = Some(build_literal(inner)?),
            Rule::identifier => target = Some(inner.as_str().to_string()),
            _ => {}
        }
    }

    Ok(Condition::Membership(InExpression {
        value: value.ok_or_else(|| ParserError::syntax("IN expression missing literal"))?,
        target: target.ok_or_else(|| ParserError::syntax("IN expression missing field"))?,
    }))
}

fn parse_comparator(text: &str) -> ParserResult<CompareOp> {
    match text {
        "=" => Ok(CompareOp::Eq),
        "!=" => Ok(CompareOp::Neq),
        "<" => Ok(CompareOp::Lt),
        ">" => Ok(CompareOp::Gt),
        "<=" => Ok(CompareOp::Lte),
        ">=" => Ok(CompareOp::Gte),
        other => Err(ParserError::syntax(format!("unknown operator: {}", other))),
    }
}

fn build_literal(pair: Pair<Rule>) -> ParserResult<Value> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParserError::syntax("empty literal"))?;

    match inner.as_rule() {
        Rule::string => Ok(Value::Str(unquote(inner.as_str()))),
        Rule::number => inner
            .as_str()
            .parse::<f64>()
            .map(Value::Num)
            .map_err(|_| ParserError::syntax(format!("invalid number: {}", inner.as_str()))),
        Rule::boolean => Ok(Value::Bool(inner.as_str().eq_ignore_ascii_case("true"))),
        rule => Err(ParserError::syntax(format!(
            "unexpected literal rule: {:?}",
            rule
        ))),
    }
}

/// Strips the surrounding quotes and resolves `\'` and `\\` escapes.
fn unquote(raw: &str) -> String {
    let body = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}
