//! quotes-core: shared data model and error vocabulary for the quotes service.
//!
//! This crate provides:
//! - The [`Quote`] entity and its [`QuoteId`] identifier
//! - The [`NewQuote`] creation draft
//! - The [`QuoteError`] vocabulary shared by every layer
//!
//! # Architecture
//!
//! Every layer of the service (storage, use cases, HTTP) speaks in these
//! types. Errors carry a stable, inspectable kind so upper layers can
//! pattern-match on the variant rather than on message text.

pub mod error;
pub mod quote;

pub use error::{QuoteError, QuoteResult};
pub use quote::{NewQuote, Quote, QuoteId};
