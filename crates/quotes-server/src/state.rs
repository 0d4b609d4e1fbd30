//! Application state shared across handlers.

use std::fmt;
use std::sync::Arc;

use quotes_service::QuoteUseCases;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using
/// `State<AppState>`. Handlers see the use-case layer only through the
/// [`QuoteUseCases`] trait, so the storage backend can be swapped without
/// touching any route.
#[derive(Clone)]
pub struct AppState {
    /// Use-case layer.
    service: Arc<dyn QuoteUseCases>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(service: impl QuoteUseCases + 'static, config: ServerConfig) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the use-case layer.
    pub fn service(&self) -> &dyn QuoteUseCases {
        self.service.as_ref()
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
