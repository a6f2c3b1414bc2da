//! API server configuration.

use brightpath_core::relay::config::UpstreamConfig;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:4000").
    pub bind_addr: String,
    /// Upstream conversational service settings.
    pub upstream: UpstreamConfig,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable    | Default      |
    /// |-------------|--------------|
    /// | `HOST`      | `127.0.0.1`  |
    /// | `PORT`      | `4000`       |
    ///
    /// Upstream variables are documented on [`UpstreamConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = std::env::var("PORT").unwrap_or_else(|_| "4000".into());
        Self {
            bind_addr: format!("{host}:{port}"),
            upstream: UpstreamConfig::from_env(),
        }
    }
}
