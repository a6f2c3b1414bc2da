//! Upstream conversational service configuration.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use super::RelayError;

/// Default upstream API root.
pub const DEFAULT_BASE_URL: &str = "https://api.botpress.cloud";

/// Default bound on a single candidate attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Static settings for reaching the upstream service.
///
/// Read once at startup. A missing token is not an error: requests go out
/// unauthenticated and the upstream's rejection is handled like any other
/// failed candidate.
#[derive(Clone)]
pub struct UpstreamConfig {
    /// API root every candidate URL is built from.
    pub base_url: String,
    /// Bot identifier used by the bot-scoped endpoints.
    pub bot_id: String,
    /// Bearer token, `None` when unauthenticated.
    pub token: Option<String>,
    /// Per-candidate request timeout.
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(
        base_url: impl Into<String>,
        bot_id: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            bot_id: bot_id.into(),
            token: token.filter(|t| !t.trim().is_empty()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads configuration from environment variables.
    ///
    /// | Variable                | Default                       |
    /// |-------------------------|-------------------------------|
    /// | `UPSTREAM_BASE_URL`     | `https://api.botpress.cloud`  |
    /// | `BOT_ID`                | empty                         |
    /// | `BP_TOKEN`              | unset (unauthenticated)       |
    /// | `UPSTREAM_TIMEOUT_SECS` | `5`                           |
    pub fn from_env() -> Self {
        let timeout = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| parse_timeout_secs(&v))
            .unwrap_or(DEFAULT_TIMEOUT);

        Self::new(
            env::var("UPSTREAM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            env::var("BOT_ID").unwrap_or_default(),
            env::var("BP_TOKEN").ok(),
        )
        .with_timeout(timeout)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Rejects settings the relay cannot run with.
    pub(crate) fn validate(&self) -> Result<(), RelayError> {
        if self.timeout.is_zero() {
            return Err(RelayError::Config(
                "upstream timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates the base URL.
    pub(crate) fn base(&self) -> Result<Url, RelayError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| RelayError::Config(format!("invalid upstream base URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RelayError::Config(format!(
                "upstream base URL must be http or https, got {}",
                url.scheme()
            )));
        }
        Ok(url)
    }
}

/// A whole number of seconds, at least one.
fn parse_timeout_secs(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("bot_id", &self.bot_id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
