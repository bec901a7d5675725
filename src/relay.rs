use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::RelayConfig;
use crate::error::{RelayError, Result};
use crate::transport::{GenerateTransport, HttpTransport};

/// Most recent history entries forwarded upstream; older turns are dropped
/// to bound payload size and latency.
pub const MAX_HISTORY_TURNS: usize = 10;

const MAX_OUTPUT_TOKENS: u32 = 1000;
const TEMPERATURE: f64 = 0.7;

// -- Caller-facing types ----------------------------------------------------

/// One prior exchange entry as received on the wire.
///
/// Fields are optional because callers may send partial entries; anything
/// missing a sender or message is skipped during payload construction
/// rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurn {
    pub sender: Option<String>,
    pub message: Option<String>,
}

/// A parsed chat invocation: the new utterance plus prior turns in
/// chronological order, oldest first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
}

/// Uniform outcome of one relay attempt. Exactly one of `reply`/`error` is
/// populated, discriminated by `success`.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayResult {
    pub success: bool,
    pub status_code: u16,
    pub reply: Option<String>,
    pub error: Option<String>,
}

impl RelayResult {
    pub fn ok(reply: impl Into<String>) -> Self {
        Self {
            success: true,
            status_code: 200,
            reply: Some(reply.into()),
            error: None,
        }
    }

    pub fn fail(status_code: u16, error: &str) -> Self {
        Self {
            success: false,
            status_code,
            reply: None,
            error: Some(error.to_string()),
        }
    }
}

impl From<&RelayError> for RelayResult {
    fn from(err: &RelayError) -> Self {
        Self::fail(err.status_code(), err.public_message())
    }
}

// -- Upstream wire types ----------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// -- Relay ------------------------------------------------------------------

/// Forwards one chat turn to the generative-language API and normalizes the
/// outcome. Single best-effort attempt per call: no retries, no caching.
pub struct ChatRelay {
    transport: Arc<dyn GenerateTransport>,
}

impl ChatRelay {
    pub fn new(transport: Arc<dyn GenerateTransport>) -> Self {
        Self { transport }
    }

    /// Relay over the real HTTP transport.
    pub fn over_http() -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new()?)))
    }

    /// Validate, forward, and interpret one chat turn. Never fails: every
    /// error is folded into the returned [`RelayResult`], with the
    /// underlying cause logged rather than exposed.
    pub async fn relay(&self, request: &ChatRequest, config: &RelayConfig) -> RelayResult {
        match self.try_relay(request, config).await {
            Ok(reply) => RelayResult::ok(reply),
            Err(err) => {
                warn!(error = %err, "chat relay failed");
                RelayResult::from(&err)
            }
        }
    }

    async fn try_relay(&self, request: &ChatRequest, config: &RelayConfig) -> Result<String> {
        if config.api_key.trim().is_empty() {
            return Err(RelayError::Config("GEMINI_API_KEY is not set".into()));
        }
        if request.message.trim().is_empty() {
            return Err(RelayError::Validation("message is empty".into()));
        }

        let payload = GenerateRequest {
            contents: build_contents(&request.message, &request.chat_history),
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                temperature: TEMPERATURE,
            },
        };

        debug!(
            model = %config.model,
            turns = payload.contents.len(),
            "invoking generate API"
        );

        let reply = self
            .transport
            .post_generate(&config.model, &config.api_key, &payload)
            .await?;

        if !reply.status.is_success() {
            return Err(RelayError::Upstream {
                status: reply.status.as_u16(),
                body: reply.body,
            });
        }

        extract_reply(&reply.body)
    }
}

/// Map bounded history plus the new utterance into the upstream content
/// list. History is bounded to the last [`MAX_HISTORY_TURNS`] entries
/// before partial entries are skipped; the new message is always the final
/// `user` entry.
fn build_contents(message: &str, history: &[ChatTurn]) -> Vec<Content> {
    let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
    let mut contents: Vec<Content> = history[start..]
        .iter()
        .filter_map(|turn| {
            let sender = turn.sender.as_deref()?;
            let text = turn.message.as_deref()?;
            let role = if sender == "user" { "user" } else { "model" };
            Some(Content {
                role: role.to_string(),
                parts: vec![Part {
                    text: text.to_string(),
                }],
            })
        })
        .collect();

    contents.push(Content {
        role: "user".to_string(),
        parts: vec![Part {
            text: message.to_string(),
        }],
    });

    contents
}

/// Pull the reply text out of a success-status upstream body.
///
/// A body that is not JSON at all is an internal fault; JSON without an
/// extractable `candidates[0].content.parts[0].text` is an invalid AI
/// response. The two surface as different caller-facing messages.
fn extract_reply(body: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let response: GenerateResponse = serde_json::from_value(value)
        .map_err(|e| RelayError::ResponseShape(format!("unexpected body shape: {e}")))?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| RelayError::ResponseShape("no candidate text in body".into()))
}
