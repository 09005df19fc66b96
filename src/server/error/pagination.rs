use thiserror::Error;

/// Rejected pagination input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaginationError {
    /// Page size was zero or negative.
    ///
    /// Results in 400 Bad Request.
    #[error("Page limit must be a positive integer, got {0}")]
    NonPositiveLimit(i64),
}
