//! Chat relay: forwards one user message to the upstream conversational
//! service and normalizes whatever comes back.
//!
//! Candidates are tried strictly in order, one network round trip at a time.
//! The first 2xx with a usable reply wins; every other outcome (connect
//! error, timeout, 405, other non-2xx, empty body) moves on to the next
//! candidate. Only exhausting the list is reported to the caller.
//!
//! # Public API
//!
//! - [`Relay::relay`]: send one message, get one reply
//! - [`extract::extract_reply`]: the reply extraction policy
//! - [`config::UpstreamConfig`]: static upstream settings

pub mod candidates;
pub mod config;
pub mod extract;

use std::fmt;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use candidates::{Candidate, build_candidates};
use config::UpstreamConfig;
use extract::{extract_reply, parse_body};

/// Errors surfaced by [`Relay::relay`].
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No endpoint returned a valid response ({attempts} attempted)")]
    AllUpstreamsExhausted { attempts: usize },

    #[error("Config error: {0}")]
    Config(String),
}

/// Why a single candidate attempt produced no reply. Never surfaced to the
/// caller; the relay logs it and advances.
#[derive(Debug, Error)]
pub enum UpstreamUnavailable {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("upstream returned {0}")]
    Status(StatusCode),

    #[error("no reply text in upstream body")]
    EmptyReply,
}

/// A successful relay result.
#[derive(Debug, Clone)]
pub struct RelayReply {
    /// Normalized, displayable reply text.
    pub reply: String,
    /// The parsed upstream body (raw text as a JSON string if it was not JSON).
    pub raw: Value,
    /// Name of the candidate that answered.
    pub endpoint: &'static str,
}

/// Relay over a fixed candidate list. Cheap to share behind an `Arc`.
pub struct Relay {
    client: Client,
    candidates: Vec<Candidate>,
    token: Option<String>,
}

impl Relay {
    /// Builds the candidate list and HTTP client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, RelayError> {
        config.validate()?;
        let candidates = build_candidates(config)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Config(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            candidates,
            token: config.token.clone(),
        })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Relays `message` and returns the first usable reply.
    ///
    /// A blank message fails with [`RelayError::InvalidRequest`] before any
    /// outbound call is made.
    pub async fn relay(
        &self,
        message: &str,
        conversation_id: &str,
    ) -> Result<RelayReply, RelayError> {
        if message.trim().is_empty() {
            return Err(RelayError::InvalidRequest("missing message".into()));
        }

        for candidate in &self.candidates {
            match self.attempt(candidate, message, conversation_id).await {
                Ok(reply) => {
                    info!(
                        endpoint = candidate.name,
                        conversation_id, "upstream reply accepted"
                    );
                    return Ok(reply);
                }
                Err(e) => {
                    warn!(
                        endpoint = candidate.name,
                        error = %e,
                        "upstream attempt failed, trying next"
                    );
                }
            }
        }

        error!(
            attempts = self.candidates.len(),
            conversation_id, "all upstream candidates exhausted"
        );
        Err(RelayError::AllUpstreamsExhausted {
            attempts: self.candidates.len(),
        })
    }

    async fn attempt(
        &self,
        candidate: &Candidate,
        message: &str,
        conversation_id: &str,
    ) -> Result<RelayReply, UpstreamUnavailable> {
        let mut request = self
            .client
            .post(candidate.url.clone())
            .json(&candidate.body(message, conversation_id));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let raw = response.text().await?;
        let parsed = parse_body(&raw);

        info!(endpoint = candidate.name, status = status.as_u16(), "upstream attempt");
        debug!(endpoint = candidate.name, body = %parsed, "upstream body");

        if status == StatusCode::METHOD_NOT_ALLOWED {
            return Err(UpstreamUnavailable::MethodNotAllowed);
        }
        if !status.is_success() {
            return Err(UpstreamUnavailable::Status(status));
        }

        let reply = extract_reply(&parsed).ok_or(UpstreamUnavailable::EmptyReply)?;
        Ok(RelayReply {
            reply,
            raw: parsed,
            endpoint: candidate.name,
        })
    }
}

impl fmt::Debug for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay")
            .field("candidates", &self.candidates)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
