//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into relay handlers via the `State` extractor. It
//! holds the parsed configuration and one pooled HTTP client for the backend.
//! The host keeps no other state.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::routes::relay::RelayError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the backend client. Redirects are passed through to the browser
    /// rather than followed, so OAuth hand-offs reach the storefront routes.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ClientBuild`] if the TLS backend cannot start.
    pub fn new(config: ServerConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| RelayError::ClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
