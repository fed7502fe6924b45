use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Debug, Error)]
pub enum QueryError {
    /// A construction-time input had an unsupported shape, e.g. a shorthand
    /// group with an unknown operator. Never raised while rendering.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A statement (outer or nested) reached the renderer without a FROM
    /// source. The whole render aborts; partial SQL is never returned.
    #[error("SELECT statement has no FROM source")]
    MissingFrom,
}
