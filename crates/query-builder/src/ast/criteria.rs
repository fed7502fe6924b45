//! Defines the AST for filter predicates usable in `WHERE` and `HAVING`.

use std::str::FromStr;

use model::core::value::Value;

use crate::ast::select::Select;
use crate::error::QueryError;

/// A node of the predicate tree.
///
/// The set of variants is closed: every renderer matches exhaustively, so
/// adding a variant is a compile-time-checked change rather than a runtime
/// fallthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum Criteria {
    /// `column = value`
    Equal { column: String, value: Operand },

    /// `column <op> value`, e.g. `price < 100`.
    Compare {
        column: String,
        op: CompareOp,
        value: Operand,
    },

    /// `column LIKE pattern`
    Like { column: String, pattern: Operand },

    /// `column REGEXP pattern`
    Regexp { column: String, pattern: Operand },

    /// `column BETWEEN 'min' AND 'max'`. The bounds are numeric; coercion
    /// happens at construction and rendering bypasses the escaper.
    Between { column: String, min: f64, max: f64 },

    /// `column IN (…)` over a scalar, a sequence, or a sub-select.
    In { column: String, set: InSet },

    /// AND/OR combinator over child predicates.
    Logic(Logic),
}

impl Criteria {
    pub fn equal(column: impl Into<String>, value: impl Into<Operand>) -> Self {
        Criteria::Equal {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn compare(column: impl Into<String>, op: CompareOp, value: impl Into<Operand>) -> Self {
        Criteria::Compare {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    pub fn like(column: impl Into<String>, pattern: impl Into<Operand>) -> Self {
        Criteria::Like {
            column: column.into(),
            pattern: pattern.into(),
        }
    }

    pub fn regexp(column: impl Into<String>, pattern: impl Into<Operand>) -> Self {
        Criteria::Regexp {
            column: column.into(),
            pattern: pattern.into(),
        }
    }

    pub fn between(column: impl Into<String>, min: f64, max: f64) -> Self {
        Criteria::Between {
            column: column.into(),
            min,
            max,
        }
    }

    pub fn is_in(column: impl Into<String>, set: impl Into<InSet>) -> Self {
        Criteria::In {
            column: column.into(),
            set: set.into(),
        }
    }

    pub fn and(operands: Vec<Criteria>) -> Self {
        Criteria::Logic(Logic::new(LogicOp::And, operands))
    }

    pub fn or(operands: Vec<Criteria>) -> Self {
        Criteria::Logic(Logic::new(LogicOp::Or, operands))
    }
}

/// The right-hand side of a comparison: a literal, or a nested sub-select
/// rendered in parentheses.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(Value),
    Subquery(Box<Select>),
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

impl From<Select> for Operand {
    fn from(q: Select) -> Self {
        Operand::Subquery(Box::new(q))
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Value(v.into())
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Value(v.into())
    }
}

impl From<u64> for Operand {
    fn from(v: u64) -> Self {
        Operand::Value(v.into())
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Value(v.into())
    }
}

impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Operand::Value(v.into())
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Operand::Value(v.into())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Operand::Value(v.into())
    }
}

/// The operand set of an `IN` predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum InSet {
    /// A single scalar, escaped once and inlined bare.
    One(Value),
    /// A sequence; each element is escaped and the list joined with `, `.
    Many(Vec<Value>),
    /// A nested sub-select rendered inside the `IN (…)` parentheses.
    Subquery(Box<Select>),
}

impl From<Value> for InSet {
    fn from(v: Value) -> Self {
        InSet::One(v)
    }
}

impl From<&str> for InSet {
    fn from(v: &str) -> Self {
        InSet::One(v.into())
    }
}

impl From<String> for InSet {
    fn from(v: String) -> Self {
        InSet::One(v.into())
    }
}

impl From<Select> for InSet {
    fn from(q: Select) -> Self {
        InSet::Subquery(Box::new(q))
    }
}

impl<T: Into<Value>> From<Vec<T>> for InSet {
    fn from(values: Vec<T>) -> Self {
        InSet::Many(values.into_iter().map(Into::into).collect())
    }
}

/// Comparison operators accepted by [`Criteria::Compare`]. Equality has its
/// own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    LtEq,
    Gt,
    GtEq,
    NotEq,
}

impl CompareOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
            CompareOp::NotEq => "<>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            LogicOp::And => "AND",
            LogicOp::Or => "OR",
        }
    }
}

impl FromStr for LogicOp {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("and") {
            Ok(LogicOp::And)
        } else if s.eq_ignore_ascii_case("or") {
            Ok(LogicOp::Or)
        } else {
            Err(QueryError::InvalidArgument(format!(
                "unknown logic operator '{s}'"
            )))
        }
    }
}

/// AND/OR combinator node. Operands keep their insertion order; a node with
/// no operands renders to an empty fragment and must not be installed as the
/// sole `WHERE`/`HAVING` root.
#[derive(Debug, Clone, PartialEq)]
pub struct Logic {
    pub op: LogicOp,
    pub operands: Vec<Criteria>,
}

impl Logic {
    pub fn new(op: LogicOp, operands: Vec<Criteria>) -> Self {
        Self { op, operands }
    }

    pub fn push(&mut self, criteria: Criteria) {
        self.operands.push(criteria);
    }
}
