//! Error vocabulary shared by every layer of the service.

use thiserror::Error;

use crate::quote::QuoteId;

/// Result type alias for quote operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Errors that can occur while creating, querying, or deleting quotes.
///
/// Every variant except [`QuoteError::Internal`] is a recoverable,
/// user-input-class error that the HTTP layer surfaces as a 4xx status.
/// `Internal` covers unexpected infrastructure failures and surfaces as a
/// 500 with no detail leaked to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Author field blank on create or filter.
    #[error("author cannot be empty")]
    EmptyAuthor,

    /// Quote text blank on create.
    #[error("quote text cannot be empty")]
    EmptyText,

    /// Random quote requested on an empty store.
    #[error("no quotes available")]
    NoQuotesAvailable,

    /// Delete target id absent from the store.
    #[error("quote not found: {0}")]
    QuoteNotFound(QuoteId),

    /// Non-positive id passed to delete.
    #[error("invalid quote id: {0}")]
    InvalidId(QuoteId),

    /// Unexpected infrastructure failure, e.g. a poisoned store lock.
    #[error("internal error: {0}")]
    Internal(String),
}
