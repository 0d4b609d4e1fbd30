//! quotes-server: HTTP API server for the quotes service.
//!
//! This crate provides:
//! - REST endpoints for creating, listing, filtering, and deleting quotes
//! - JSON error responses with stable error codes
//! - Request tracing and CORS handling
//!
//! # Architecture
//!
//! The server is built on Axum. Handlers depend only on the
//! [`QuoteUseCases`] trait held in [`AppState`]; the concrete store and
//! orchestrator are composed once in `main` and injected — no ambient
//! singletons.
//!
//! # Usage
//!
//! ```rust,ignore
//! use quotes_server::{config::ServerConfig, routes, state::AppState};
//! use quotes_service::QuoteService;
//! use quotes_store::MemoryStore;
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(QuoteService::new(MemoryStore::new()), config);
//! let app = routes::build_router(state);
//! ```
//!
//! [`QuoteUseCases`]: quotes_service::QuoteUseCases
//! [`AppState`]: state::AppState

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use quotes_core;
pub use quotes_service;
pub use quotes_store;
