//! Capability contract for quote storage backends.

use quotes_core::{NewQuote, Quote, QuoteId, QuoteResult};

/// Storage capability consumed by the use-case layer.
///
/// Implementations own the authoritative quote collection, assign ids and
/// creation timestamps, and bring their own concurrency discipline. The
/// contract is deliberately narrow so an alternative backend can be
/// substituted without touching the layers above.
pub trait QuoteRepository: Send + Sync {
    /// Validate and persist a draft, assigning its id and `created_at`.
    ///
    /// Fails with [`QuoteError::EmptyAuthor`] or [`QuoteError::EmptyText`]
    /// when the corresponding field is blank; the author check runs first.
    ///
    /// [`QuoteError::EmptyAuthor`]: quotes_core::QuoteError::EmptyAuthor
    /// [`QuoteError::EmptyText`]: quotes_core::QuoteError::EmptyText
    fn create(&self, draft: NewQuote) -> QuoteResult<Quote>;

    /// Snapshot of every stored quote, in current collection order.
    ///
    /// Never fails on an empty store; returns an empty vec instead.
    fn get_all(&self) -> QuoteResult<Vec<Quote>>;

    /// One quote chosen uniformly at random.
    ///
    /// Fails with [`QuoteError::NoQuotesAvailable`] on an empty store.
    ///
    /// [`QuoteError::NoQuotesAvailable`]: quotes_core::QuoteError::NoQuotesAvailable
    fn get_random(&self) -> QuoteResult<Quote>;

    /// Every quote whose author exactly equals `author`.
    ///
    /// Fails with [`QuoteError::EmptyAuthor`] on blank input. No match is
    /// an empty vec, not an error.
    ///
    /// [`QuoteError::EmptyAuthor`]: quotes_core::QuoteError::EmptyAuthor
    fn get_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>>;

    /// Remove the quote with the given id.
    ///
    /// Fails with [`QuoteError::InvalidId`] for non-positive ids and
    /// [`QuoteError::QuoteNotFound`] when no quote carries the id.
    ///
    /// [`QuoteError::InvalidId`]: quotes_core::QuoteError::InvalidId
    /// [`QuoteError::QuoteNotFound`]: quotes_core::QuoteError::QuoteNotFound
    fn delete(&self, id: QuoteId) -> QuoteResult<()>;
}
