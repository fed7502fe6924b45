//! Compact, prefix-keyed predicate input expanded into canonical
//! [`Criteria`] trees at construction time. No renderer ever sees this form.
//!
//! Grammar: a term list whose entries are either `column -> scalar`
//! (Equal), `column -> sequence` (In), `"%column" -> scalar` (Like),
//! `"@column" -> value(s)` (In, explicit), or a nested group
//! `("and"/"or", terms…)`. Siblings of one term list combine under AND;
//! groups combine their terms under their own operator.

use std::str::FromStr;

use model::core::value::Value;

use crate::ast::criteria::{Criteria, InSet, Logic, LogicOp};
use crate::error::{QueryError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum ShorthandValue {
    One(Value),
    Many(Vec<Value>),
}

impl From<Value> for ShorthandValue {
    fn from(v: Value) -> Self {
        ShorthandValue::One(v)
    }
}

impl From<&str> for ShorthandValue {
    fn from(v: &str) -> Self {
        ShorthandValue::One(v.into())
    }
}

impl From<String> for ShorthandValue {
    fn from(v: String) -> Self {
        ShorthandValue::One(v.into())
    }
}

impl From<i32> for ShorthandValue {
    fn from(v: i32) -> Self {
        ShorthandValue::One(v.into())
    }
}

impl From<i64> for ShorthandValue {
    fn from(v: i64) -> Self {
        ShorthandValue::One(v.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for ShorthandValue {
    fn from(values: Vec<T>) -> Self {
        ShorthandValue::Many(values.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShorthandTerm {
    /// A prefix-keyed predicate: `col`, `%col`, or `@col`.
    Entry {
        key: String,
        value: ShorthandValue,
    },
    /// A nested combinator group; the operator is `"and"` or `"or"`.
    Group {
        op: String,
        terms: Vec<ShorthandTerm>,
    },
}

impl ShorthandTerm {
    pub fn entry(key: impl Into<String>, value: impl Into<ShorthandValue>) -> Self {
        ShorthandTerm::Entry {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn group(op: impl Into<String>, terms: Vec<ShorthandTerm>) -> Self {
        ShorthandTerm::Group {
            op: op.into(),
            terms,
        }
    }
}

/// Expands a term list into its canonical predicate tree. The root is
/// always a Logic node combining the siblings with AND.
pub fn expand(terms: &[ShorthandTerm]) -> Result<Criteria> {
    expand_group(LogicOp::And, terms)
}

/// Parses the JSON form of the shorthand grammar and expands it.
///
/// Accepted shapes:
/// - an object: entries in document order, e.g.
///   `{"column1": "value", "@column3": [1, 2, 3]}`;
/// - an array starting with `"and"`/`"or"`: a single group;
/// - any other array: a term list, each element an object or a group array,
///   e.g. `[{"column1": "value"}, ["or", {"%column2": "value"}]]`.
pub fn from_json(value: &serde_json::Value) -> Result<Criteria> {
    let terms = parse_terms(value)?;
    expand(&terms)
}

fn expand_group(op: LogicOp, terms: &[ShorthandTerm]) -> Result<Criteria> {
    let mut operands = Vec::with_capacity(terms.len());
    for term in terms {
        operands.push(expand_term(term)?);
    }
    Ok(Criteria::Logic(Logic::new(op, operands)))
}

fn expand_term(term: &ShorthandTerm) -> Result<Criteria> {
    match term {
        ShorthandTerm::Entry { key, value } => expand_entry(key, value),
        ShorthandTerm::Group { op, terms } => expand_group(LogicOp::from_str(op)?, terms),
    }
}

fn expand_entry(key: &str, value: &ShorthandValue) -> Result<Criteria> {
    if let Some(column) = key.strip_prefix('%') {
        let column = non_empty(column, key)?;
        match value {
            ShorthandValue::One(pattern) => Ok(Criteria::like(column, pattern.clone())),
            ShorthandValue::Many(_) => Err(QueryError::InvalidArgument(format!(
                "LIKE pattern for '{column}' must be a scalar"
            ))),
        }
    } else if let Some(column) = key.strip_prefix('@') {
        let column = non_empty(column, key)?;
        let set = match value {
            ShorthandValue::One(v) => InSet::One(v.clone()),
            ShorthandValue::Many(vs) => InSet::Many(vs.clone()),
        };
        Ok(Criteria::is_in(column, set))
    } else {
        let column = non_empty(key, key)?;
        match value {
            ShorthandValue::One(v) => Ok(Criteria::equal(column, v.clone())),
            ShorthandValue::Many(vs) => Ok(Criteria::is_in(column, InSet::Many(vs.clone()))),
        }
    }
}

fn non_empty<'a>(column: &'a str, key: &str) -> Result<&'a str> {
    if column.is_empty() {
        return Err(QueryError::InvalidArgument(format!(
            "empty column name in shorthand key '{key}'"
        )));
    }
    Ok(column)
}

fn parse_terms(value: &serde_json::Value) -> Result<Vec<ShorthandTerm>> {
    match value {
        serde_json::Value::Object(entries) => entries
            .iter()
            .map(|(key, value)| parse_entry(key, value))
            .collect(),
        serde_json::Value::Array(elements) => match group_operator(elements) {
            Some(op) => Ok(vec![parse_group(op, &elements[1..])?]),
            None => {
                let mut terms = Vec::new();
                for element in elements {
                    terms.extend(parse_element(element)?);
                }
                Ok(terms)
            }
        },
        other => Err(QueryError::InvalidArgument(format!(
            "shorthand input must be an object or array, got {other}"
        ))),
    }
}

fn parse_element(element: &serde_json::Value) -> Result<Vec<ShorthandTerm>> {
    match element {
        serde_json::Value::Object(entries) => entries
            .iter()
            .map(|(key, value)| parse_entry(key, value))
            .collect(),
        serde_json::Value::Array(inner) => match group_operator(inner) {
            Some(op) => Ok(vec![parse_group(op, &inner[1..])?]),
            None => Err(QueryError::InvalidArgument(
                "shorthand group must start with \"and\" or \"or\"".to_string(),
            )),
        },
        other => Err(QueryError::InvalidArgument(format!(
            "shorthand term must be an object or group array, got {other}"
        ))),
    }
}

fn parse_group(op: &str, elements: &[serde_json::Value]) -> Result<ShorthandTerm> {
    let mut terms = Vec::new();
    for element in elements {
        terms.extend(parse_element(element)?);
    }
    Ok(ShorthandTerm::group(op, terms))
}

fn group_operator(elements: &[serde_json::Value]) -> Option<&str> {
    match elements.first() {
        Some(serde_json::Value::String(op)) if LogicOp::from_str(op).is_ok() => Some(op),
        _ => None,
    }
}

fn parse_entry(key: &str, value: &serde_json::Value) -> Result<ShorthandTerm> {
    let value = match value {
        serde_json::Value::Array(elements) => ShorthandValue::Many(
            elements
                .iter()
                .map(parse_scalar)
                .collect::<Result<Vec<Value>>>()?,
        ),
        scalar => ShorthandValue::One(parse_scalar(scalar)?),
    };
    Ok(ShorthandTerm::Entry {
        key: key.to_string(),
        value,
    })
}

fn parse_scalar(value: &serde_json::Value) -> Result<Value> {
    match value {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Uint(u))
            } else {
                Ok(Value::Float(n.as_f64().unwrap_or_default()))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        other => Err(QueryError::InvalidArgument(format!(
            "unsupported shorthand value {other}"
        ))),
    }
}
