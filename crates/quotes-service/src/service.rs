//! Orchestration of quote use cases over a storage backend.

use quotes_core::{NewQuote, Quote, QuoteError, QuoteId, QuoteResult};
use quotes_store::QuoteRepository;

/// Use-case capability consumed by the HTTP layer.
///
/// The second of the two narrow contracts in the service: the HTTP
/// adapter depends on this trait alone, so the whole stack below it can
/// be swapped without touching request handling.
pub trait QuoteUseCases: Send + Sync {
    /// Create a quote from a draft.
    fn create_quote(&self, draft: NewQuote) -> QuoteResult<Quote>;

    /// All stored quotes.
    fn get_all_quotes(&self) -> QuoteResult<Vec<Quote>>;

    /// One quote chosen uniformly at random.
    fn get_random_quote(&self) -> QuoteResult<Quote>;

    /// All quotes by the given author.
    fn get_quotes_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>>;

    /// Delete the quote with the given id.
    fn delete_quote(&self, id: QuoteId) -> QuoteResult<()>;
}

/// Orchestrator over any [`QuoteRepository`] backend.
///
/// Pure pass-through with pre-validation: input sanity checks run before
/// the repository is touched, so a misbehaving caller never reaches the
/// storage layer. It holds no lock of its own.
#[derive(Debug)]
pub struct QuoteService<R> {
    repo: R,
}

impl<R> QuoteService<R> {
    /// Wraps a storage backend.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: QuoteRepository> QuoteUseCases for QuoteService<R> {
    fn create_quote(&self, draft: NewQuote) -> QuoteResult<Quote> {
        self.repo.create(draft)
    }

    fn get_all_quotes(&self) -> QuoteResult<Vec<Quote>> {
        self.repo.get_all()
    }

    fn get_random_quote(&self) -> QuoteResult<Quote> {
        self.repo.get_random()
    }

    fn get_quotes_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>> {
        // Also enforced by the store; checked here so the storage contract
        // holds independent of caller discipline.
        if author.is_empty() {
            return Err(QuoteError::EmptyAuthor);
        }
        self.repo.get_by_author(author)
    }

    fn delete_quote(&self, id: QuoteId) -> QuoteResult<()> {
        if !id.is_valid() {
            return Err(QuoteError::InvalidId(id));
        }
        self.repo.delete(id)
    }
}
