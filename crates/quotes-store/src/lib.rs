//! quotes-store: storage layer for the quotes service.
//!
//! This crate provides:
//! - The [`QuoteRepository`] capability trait consumed by the use-case layer
//! - [`MemoryStore`], an in-memory implementation guarded by a
//!   reader-writer lock
//!
//! # Architecture
//!
//! The store owns the authoritative quote collection and its concurrency
//! discipline. It assigns identifiers and creation timestamps; nothing
//! above it mutates the collection directly.
//!
//! # Usage
//!
//! ```rust
//! use quotes_core::NewQuote;
//! use quotes_store::{MemoryStore, QuoteRepository};
//!
//! let store = MemoryStore::new();
//! let quote = store.create(NewQuote::new("Ada", "Hello"))?;
//! assert_eq!(quote.id.get(), 1);
//! # Ok::<(), quotes_core::QuoteError>(())
//! ```

pub mod memory;
pub mod repository;

pub use memory::MemoryStore;
pub use repository::QuoteRepository;

// Re-export quotes-core for downstream crates
pub use quotes_core;
