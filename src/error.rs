use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("config error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("invalid upstream response: {0}")]
    ResponseShape(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RelayError {
    /// Status code surfaced to the caller for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Validation(_) | RelayError::MalformedBody(_) => 400,
            _ => 500,
        }
    }

    /// Fixed message surfaced to the caller. Upstream detail stays in the
    /// `Display` output, which is logged and never crosses the boundary.
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::Config(_) => "API key not configured",
            RelayError::Validation(_) => "Message is required",
            RelayError::MalformedBody(_) => "Invalid request body",
            RelayError::Upstream { .. } => "AI service unavailable",
            RelayError::ResponseShape(_) => "Invalid AI response",
            RelayError::Http(_) | RelayError::Json(_) => "Internal server error",
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
