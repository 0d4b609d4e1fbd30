//! In-memory quote storage guarded by a reader-writer lock.

use std::sync::RwLock;

use chrono::Utc;
use rand::seq::SliceRandom;

use quotes_core::{NewQuote, Quote, QuoteError, QuoteId, QuoteResult};

use crate::repository::QuoteRepository;

/// State behind the lock: the collection plus the id counter.
#[derive(Debug)]
struct Inner {
    quotes: Vec<Quote>,
    next_id: i64,
}

/// In-memory quote store.
///
/// A single `RwLock` guards the collection and the id counter: reads take
/// shared access, `create` and `delete` take exclusive access. Ids start
/// at 1, increase monotonically for the lifetime of the store, and are
/// never reused, even after deletion. Lock hold times are bounded by the
/// in-memory scan cost; no operation blocks on I/O while holding it.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                quotes: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRepository for MemoryStore {
    fn create(&self, draft: NewQuote) -> QuoteResult<Quote> {
        if draft.author.is_empty() {
            return Err(QuoteError::EmptyAuthor);
        }
        if draft.text.is_empty() {
            return Err(QuoteError::EmptyText);
        }

        let mut inner = self.inner.write().map_err(poisoned)?;

        let quote = Quote {
            id: QuoteId::from_i64(inner.next_id),
            author: draft.author,
            text: draft.text,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.quotes.push(quote.clone());

        tracing::debug!(id = %quote.id, author = %quote.author, "quote stored");
        Ok(quote)
    }

    fn get_all(&self) -> QuoteResult<Vec<Quote>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.quotes.clone())
    }

    fn get_random(&self) -> QuoteResult<Quote> {
        let inner = self.inner.read().map_err(poisoned)?;
        inner
            .quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(QuoteError::NoQuotesAvailable)
    }

    fn get_by_author(&self, author: &str) -> QuoteResult<Vec<Quote>> {
        if author.is_empty() {
            return Err(QuoteError::EmptyAuthor);
        }

        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner
            .quotes
            .iter()
            .filter(|quote| quote.author == author)
            .cloned()
            .collect())
    }

    fn delete(&self, id: QuoteId) -> QuoteResult<()> {
        if !id.is_valid() {
            return Err(QuoteError::InvalidId(id));
        }

        let mut inner = self.inner.write().map_err(poisoned)?;
        match inner.quotes.iter().position(|quote| quote.id == id) {
            Some(index) => {
                // O(1) removal; relative order of the remainder is not preserved.
                inner.quotes.swap_remove(index);
                tracing::debug!(id = %id, "quote removed");
                Ok(())
            }
            None => Err(QuoteError::QuoteNotFound(id)),
        }
    }
}

/// A poisoned lock means a writer panicked mid-update; surface it as an
/// internal error instead of propagating the panic.
fn poisoned<T>(_: std::sync::PoisonError<T>) -> QuoteError {
    QuoteError::Internal("quote store lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn draft(author: &str, text: &str) -> NewQuote {
        NewQuote::new(author, text)
    }

    #[test]
    fn create_assigns_sequential_ids_from_one() {
        let store = MemoryStore::new();

        for expected in 1..=5 {
            let quote = store.create(draft("Ada", "On engines")).unwrap();
            assert_eq!(quote.id.get(), expected);
        }
    }

    #[test]
    fn create_stamps_creation_time() {
        let store = MemoryStore::new();
        let before = Utc::now();

        let quote = store.create(draft("Ada", "On engines")).unwrap();

        assert!(quote.created_at >= before);
        assert!(quote.created_at <= Utc::now());
    }

    #[test]
    fn create_rejects_empty_author_before_text() {
        let store = MemoryStore::new();

        assert_eq!(store.create(draft("", "")), Err(QuoteError::EmptyAuthor));
        assert_eq!(
            store.create(draft("", "some text")),
            Err(QuoteError::EmptyAuthor)
        );
        assert_eq!(store.create(draft("Ada", "")), Err(QuoteError::EmptyText));
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn get_all_returns_snapshot_in_insertion_order() {
        let store = MemoryStore::new();
        store.create(draft("Ada", "first")).unwrap();
        store.create(draft("Alan", "second")).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].text, "first");
        assert_eq!(all[1].text, "second");

        // No intervening mutation: two reads observe the same sequence.
        assert_eq!(all, store.get_all().unwrap());
    }

    #[test]
    fn get_random_fails_on_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get_random(), Err(QuoteError::NoQuotesAvailable));
    }

    #[test]
    fn get_random_returns_a_stored_quote() {
        let store = MemoryStore::new();
        store.create(draft("Ada", "first")).unwrap();
        store.create(draft("Alan", "second")).unwrap();

        let all = store.get_all().unwrap();
        for _ in 0..20 {
            let quote = store.get_random().unwrap();
            assert!(all.contains(&quote));
        }
    }

    #[test]
    fn get_by_author_matches_exactly() {
        let store = MemoryStore::new();
        store.create(draft("Ada Lovelace", "first")).unwrap();
        store.create(draft("Alan Turing", "second")).unwrap();
        store.create(draft("Ada Lovelace", "third")).unwrap();

        let matched = store.get_by_author("Ada Lovelace").unwrap();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|quote| quote.author == "Ada Lovelace"));

        // Prefixes and different casing do not match.
        assert!(store.get_by_author("Ada").unwrap().is_empty());
        assert!(store.get_by_author("ada lovelace").unwrap().is_empty());
    }

    #[test]
    fn get_by_author_rejects_empty_input() {
        let store = MemoryStore::new();
        assert_eq!(store.get_by_author(""), Err(QuoteError::EmptyAuthor));
    }

    #[test]
    fn delete_swaps_last_element_into_place() {
        let store = MemoryStore::new();
        for text in ["first", "second", "third"] {
            store.create(draft("Ada", text)).unwrap();
        }

        store.delete(QuoteId::from_i64(1)).unwrap();

        let ids: Vec<i64> = store
            .get_all()
            .unwrap()
            .iter()
            .map(|quote| quote.id.get())
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn delete_missing_id_leaves_collection_intact() {
        let store = MemoryStore::new();
        store.create(draft("Ada", "first")).unwrap();

        assert_eq!(
            store.delete(QuoteId::from_i64(999)),
            Err(QuoteError::QuoteNotFound(QuoteId::from_i64(999)))
        );
        assert_eq!(
            store.delete(QuoteId::from_i64(0)),
            Err(QuoteError::InvalidId(QuoteId::from_i64(0)))
        );
        assert_eq!(
            store.delete(QuoteId::from_i64(-3)),
            Err(QuoteError::InvalidId(QuoteId::from_i64(-3)))
        );
        assert_eq!(store.get_all().unwrap().len(), 1);
    }

    #[test]
    fn deleted_ids_are_never_reassigned() {
        let store = MemoryStore::new();
        store.create(draft("Ada", "first")).unwrap();
        store.create(draft("Alan", "second")).unwrap();

        store.delete(QuoteId::from_i64(2)).unwrap();
        let quote = store.create(draft("Grace", "third")).unwrap();

        assert_eq!(quote.id.get(), 3);
        let ids: Vec<i64> = store
            .get_all()
            .unwrap()
            .iter()
            .map(|q| q.id.get())
            .collect();
        assert!(!ids.contains(&2));
    }

    #[test]
    fn concurrent_creates_assign_distinct_sequential_ids() {
        let store = Arc::new(MemoryStore::new());
        let threads = 8;
        let per_thread = 25;

        let handles: Vec<_> = (0..threads)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for n in 0..per_thread {
                        store
                            .create(NewQuote::new(
                                format!("author-{t}"),
                                format!("quote-{n}"),
                            ))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<i64> = store
            .get_all()
            .unwrap()
            .iter()
            .map(|quote| quote.id.get())
            .collect();
        ids.sort_unstable();
        let expected: Vec<i64> = (1..=(threads * per_thread) as i64).collect();
        assert_eq!(ids, expected);
    }
}
