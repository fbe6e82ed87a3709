//! Application state for the HTTP server.

use samosa_gateway::DataGateway;
use std::sync::Arc;

/// State shared across all HTTP handlers.
///
/// Cloned (cheaply via `Arc`) for each request. The gateway is constructed
/// once at startup and lives for the whole process.
#[derive(Clone)]
pub struct AppState {
    /// Remote data gateway every handler proxies to
    pub gateway: Arc<dyn DataGateway>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }
}
