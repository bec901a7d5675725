use std::env;

/// Model used when `GEMINI_MODEL_NAME` is unset or empty.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Per-call settings for the relay.
///
/// Built fresh on every invocation (`from_env`) so a changed environment
/// takes effect without a restart, and passed explicitly into
/// [`ChatRelay::relay`](crate::relay::ChatRelay::relay) so tests never have
/// to mutate the process environment.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Upstream API key. Empty means not configured; the relay rejects the
    /// call before any network I/O.
    pub api_key: String,
    pub model: String,
}

impl RelayConfig {
    pub fn new(api_key: impl Into<String>, model: Option<String>) -> Self {
        let model = model
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self {
            api_key: api_key.into(),
            model,
        }
    }

    /// Read `GEMINI_API_KEY` and `GEMINI_MODEL_NAME` from the environment.
    pub fn from_env() -> Self {
        Self::new(
            env::var("GEMINI_API_KEY").unwrap_or_default(),
            env::var("GEMINI_MODEL_NAME").ok(),
        )
    }
}
