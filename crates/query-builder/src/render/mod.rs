//! Defines the core rendering trait and context for converting AST to SQL.

use model::core::value::Value;
use tracing::debug;

use crate::ast::criteria::Criteria;
use crate::ast::select::Select;
use crate::dialect::{Dialect, Escaper};
use crate::error::Result;

pub mod criteria;
pub mod select;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, r: &mut Renderer) -> Result<()>;
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and provides access to the dialect for
/// syntax-specific details and to the driver's escaping primitive. Values
/// are inlined after escaping; there is no bind-parameter protocol.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
    pub escaper: &'a dyn Escaper,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, escaper: &'a dyn Escaper) -> Self {
        Self {
            sql: String::new(),
            dialect,
            escaper,
        }
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Appends `name` wrapped in the dialect's identifier quotes.
    pub fn push_ident(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
    }

    /// Escapes the value through the driver primitive and appends it
    /// wrapped in single quotes.
    pub fn push_literal(&mut self, value: &Value) {
        let escaped = self.escaper.escape(&value.to_string());
        self.sql.push('\'');
        self.sql.push_str(&escaped);
        self.sql.push('\'');
    }

    /// Escapes the value and appends it bare. IN lists keep their elements
    /// unquoted.
    pub fn push_escaped(&mut self, value: &Value) {
        let escaped = self.escaper.escape(&value.to_string());
        self.sql.push_str(&escaped);
    }
}

/// Renders one statement to SQL text for the given dialect.
pub fn render(query: &Select, dialect: &dyn Dialect, escaper: &dyn Escaper) -> Result<String> {
    let mut renderer = Renderer::new(dialect, escaper);
    query.render(&mut renderer)?;
    let sql = renderer.finish();
    debug!("Generated SQL: {}", sql);
    Ok(sql)
}

/// Renders one predicate tree to a boolean-expression fragment.
pub fn render_criteria(
    criteria: &Criteria,
    dialect: &dyn Dialect,
    escaper: &dyn Escaper,
) -> Result<String> {
    let mut renderer = Renderer::new(dialect, escaper);
    criteria.render(&mut renderer)?;
    let sql = renderer.finish();
    debug!("Generated SQL fragment: {}", sql);
    Ok(sql)
}
