//! Defines the Abstract Syntax Tree (AST) for a SELECT statement.

use crate::ast::common::JoinKind;
use crate::ast::criteria::Criteria;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The list of columns or expressions to be returned.
    pub projection: Projection,

    /// Whether `DISTINCT` is emitted after `SELECT`.
    pub distinct: bool,

    /// The statement source(s). A statement must name a source by render
    /// time; `None` is a render error.
    pub from: Option<SourceList>,

    /// JOIN clauses in insertion order.
    pub joins: Vec<JoinClause>,

    /// The WHERE predicate tree.
    pub where_clause: Option<Criteria>,

    /// Raw `GROUP BY` text, passed through verbatim.
    pub group_by: Option<String>,

    /// The HAVING predicate tree.
    pub having: Option<Criteria>,

    /// Raw `ORDER BY` text, passed through verbatim.
    pub order_by: Option<String>,

    /// Row limit; `offset` is only meaningful when this is set.
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// The select list: the wildcard, verbatim expression text, or an ordered
/// item list.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Projection {
    #[default]
    Wildcard,
    Raw(String),
    Items(Vec<ListItem>),
}

impl From<&str> for Projection {
    fn from(text: &str) -> Self {
        Projection::Raw(text.to_string())
    }
}

impl From<String> for Projection {
    fn from(text: String) -> Self {
        Projection::Raw(text)
    }
}

impl From<Vec<ListItem>> for Projection {
    fn from(items: Vec<ListItem>) -> Self {
        Projection::Items(items)
    }
}

/// The from list: verbatim text or an ordered item list.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceList {
    Raw(String),
    Items(Vec<ListItem>),
}

impl From<&str> for SourceList {
    fn from(text: &str) -> Self {
        SourceList::Raw(text.to_string())
    }
}

impl From<String> for SourceList {
    fn from(text: String) -> Self {
        SourceList::Raw(text)
    }
}

impl From<Vec<ListItem>> for SourceList {
    fn from(items: Vec<ListItem>) -> Self {
        SourceList::Items(items)
    }
}

/// One entry of a select or from list. Without an alias the value renders
/// alone; with one it renders as `<value> AS <quoted-alias>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub alias: Option<String>,
    pub value: ItemValue,
}

/// An identifier, or a nested sub-select rendered in parentheses.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValue {
    Name(String),
    Subquery(Box<Select>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub table: String,
    /// The join condition text after `ON`, raw and never escaped.
    pub on: String,
}
