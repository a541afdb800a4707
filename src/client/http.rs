//! HTTP client abstraction for Solana RPC requests.

use reqwest::Client;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for RPC requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Timeout for health check requests in seconds.
pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 2;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with a custom timeout.
    #[must_use]
    #[allow(dead_code)] // Part of the client API
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper with connection pooling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    /// Create a new HTTP client with custom configuration.
    #[must_use]
    pub fn with_config(config: HttpConfig) -> Self {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { inner, config }
    }

    /// Get the configuration.
    #[must_use]
    #[allow(dead_code)] // Part of the client API
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a JSON POST request with standard headers.
    pub fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .post(url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .timeout(self.config.timeout)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
