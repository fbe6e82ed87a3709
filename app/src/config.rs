//! Configuration management for the booking service.
//!
//! Loads configuration from environment variables with sensible defaults.
//! There is no validation beyond presence defaults: a missing variable
//! falls back, a malformed one falls back too.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hosted auth/database service
    pub remote: RemoteConfig,
    /// HTTP server
    pub server: ServerConfig,
    /// Simulated payment
    pub payment: PaymentConfig,
}

/// Hosted service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Service base URL
    pub url: String,
    /// Public (anon) API key
    pub anon_key: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Simulated payment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Settlement delay in milliseconds
    pub settle_ms: u64,
}

impl PaymentConfig {
    /// Settlement delay as a [`Duration`]
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            remote: RemoteConfig {
                url: env::var("SUPABASE_URL")
                    .unwrap_or_else(|_| "https://xyzcompany.supabase.co".to_string()),
                anon_key: env::var("SUPABASE_ANON_KEY")
                    .unwrap_or_else(|_| "public-anon-key".to_string()),
            },
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5000),
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "samosa=info".to_string()),
            },
            payment: PaymentConfig {
                settle_ms: env::var("PAYMENT_SETTLE_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(2000),
            },
        }
    }
}
