#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum SieveError {
    /// The requested limit is negative, not an integer, or too large to index a table.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
