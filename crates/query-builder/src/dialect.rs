//! Defines the `Dialect` trait for database-specific SQL syntax and the
//! `Escaper` seam to the driver's escaping primitive.

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    ///
    /// The name is wrapped as-is; a name containing the quote character is
    /// a caller error.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

/// The driver's value-escaping primitive, e.g. a `mysql_real_escape_string`
/// equivalent.
///
/// The renderer never escapes values itself, and no default implementation
/// ships: constructing a renderer requires a live escaper for the target
/// driver.
pub trait Escaper: Send + Sync {
    fn escape(&self, raw: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident)
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident)
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}
