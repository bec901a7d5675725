use serde_json::Value;

use crate::error::{RelayError, Result};
use crate::relay::ChatRequest;

/// A request body as handed over by the platform dispatcher, before
/// normalization. Platforms disagree on whether a body arrives as text,
/// raw bytes, or an already-parsed value; the variants make that explicit.
pub enum RawBody {
    Text(String),
    Binary(Vec<u8>),
    Structured(Value),
}

/// Normalize a raw body of unknown shape into a [`ChatRequest`].
///
/// Binary bodies are decoded as UTF-8 and then go through the same parse
/// step as text. No side effects.
pub fn parse_request(body: RawBody) -> Result<ChatRequest> {
    match body {
        RawBody::Text(text) => serde_json::from_str(&text)
            .map_err(|e| RelayError::MalformedBody(format!("invalid JSON: {e}"))),
        RawBody::Binary(bytes) => {
            let text = String::from_utf8(bytes)
                .map_err(|e| RelayError::MalformedBody(format!("invalid UTF-8: {e}")))?;
            parse_request(RawBody::Text(text))
        }
        RawBody::Structured(value) => serde_json::from_value(value)
            .map_err(|e| RelayError::MalformedBody(format!("unexpected body shape: {e}"))),
    }
}
