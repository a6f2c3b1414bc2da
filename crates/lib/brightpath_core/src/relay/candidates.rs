//! Candidate upstream endpoints, in the order they are tried.

use serde_json::{Value, json};
use url::Url;

use super::RelayError;
use super::config::UpstreamConfig;

/// Request body layout expected by a candidate endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    /// Generic chat: `{ "message": ... }`.
    Chat,
    /// Bot-scoped converse: `{ "type": "text", "text": ... }`.
    Converse,
    /// Webchat messages: `{ "type": "text", "text": ... }`.
    WebchatMessages,
}

/// One upstream URL paired with the body shape it expects.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: &'static str,
    pub url: Url,
    pub shape: BodyShape,
}

impl Candidate {
    /// Builds the JSON request body for `message`.
    pub fn body(&self, message: &str, conversation_id: &str) -> Value {
        match self.shape {
            BodyShape::Chat => json!({
                "message": message,
                "conversationId": conversation_id,
            }),
            BodyShape::Converse | BodyShape::WebchatMessages => json!({
                "type": "text",
                "text": message,
                "conversationId": conversation_id,
            }),
        }
    }
}

/// Builds the fixed, ordered candidate list from configuration.
pub fn build_candidates(config: &UpstreamConfig) -> Result<Vec<Candidate>, RelayError> {
    let base = config.base()?;
    let bot = config.bot_id.as_str();

    Ok(vec![
        Candidate {
            name: "generic-chat",
            url: endpoint(&base, &["v1", "chat"])?,
            shape: BodyShape::Chat,
        },
        Candidate {
            name: "bot-converse",
            url: endpoint(&base, &["v1", "bots", bot, "converse"])?,
            shape: BodyShape::Converse,
        },
        Candidate {
            name: "webchat-messages",
            url: endpoint(&base, &["v1", "bots", bot, "mod", "webchat", "messages"])?,
            shape: BodyShape::WebchatMessages,
        },
    ])
}

// Segments are percent-encoded, so an odd bot id cannot escape its path slot.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, RelayError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| RelayError::Config(format!("upstream base URL cannot be a base: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
