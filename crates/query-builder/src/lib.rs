pub mod ast;
pub mod build;
pub mod dialect;
pub mod error;
pub mod macros;
pub mod render;

pub use ast::common::JoinKind;
pub use ast::criteria::{CompareOp, Criteria, InSet, Logic, LogicOp, Operand};
pub use ast::select::{ItemValue, ListItem, Projection, Select, SourceList};
pub use build::select::SelectBuilder;
pub use build::shorthand::{ShorthandTerm, ShorthandValue};
pub use dialect::{Dialect, Escaper, MySql, Postgres};
pub use error::{QueryError, Result};
pub use render::{Render, Renderer, render, render_criteria};

/// A positional select- or from-list entry, e.g. `` `users` ``.
pub fn item(name: &str) -> ListItem {
    ListItem {
        alias: None,
        value: ItemValue::Name(name.to_string()),
    }
}

/// An aliased entry, e.g. `` `users` AS `u` ``.
pub fn item_as(name: &str, alias: &str) -> ListItem {
    ListItem {
        alias: Some(alias.to_string()),
        value: ItemValue::Name(name.to_string()),
    }
}

/// A positional sub-select entry, e.g. `(SELECT * FROM users)`.
pub fn subquery(query: Select) -> ListItem {
    ListItem {
        alias: None,
        value: ItemValue::Subquery(Box::new(query)),
    }
}

/// An aliased sub-select entry, e.g. `` (SELECT * FROM users) AS `u` ``.
pub fn subquery_as(query: Select, alias: &str) -> ListItem {
    ListItem {
        alias: Some(alias.to_string()),
        value: ItemValue::Subquery(Box::new(query)),
    }
}
