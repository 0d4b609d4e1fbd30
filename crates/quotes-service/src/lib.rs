//! quotes-service: use-case layer for the quotes service.
//!
//! This crate provides:
//! - The [`QuoteUseCases`] capability trait consumed by the HTTP layer
//! - [`QuoteService`], the orchestrator over any [`QuoteRepository`]
//!   backend
//!
//! # Architecture
//!
//! One method per endpoint. The orchestrator adds only the validation the
//! storage contract does not already enforce, never retries, and forwards
//! storage errors unchanged in kind so the HTTP layer can dispatch on the
//! variant.
//!
//! [`QuoteRepository`]: quotes_store::QuoteRepository

pub mod service;

pub use service::{QuoteService, QuoteUseCases};
