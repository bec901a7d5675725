use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::Result;
use crate::relay::GenerateRequest;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client-level bound on one upstream call. The relay itself imposes no
/// timeout; callers substituting their own transport choose their own.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Raw outcome of one upstream call, before any interpretation.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: StatusCode,
    pub body: String,
}

/// The single upstream capability the relay depends on.
///
/// Abstracting the call behind a trait keeps the relay free of network
/// concerns and lets tests substitute deterministic fakes.
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    /// POST the payload to the model's `generateContent` endpoint and hand
    /// back the raw status and body.
    async fn post_generate(
        &self,
        model: &str,
        api_key: &str,
        payload: &GenerateRequest,
    ) -> Result<TransportReply>;
}

/// Transport backed by a real HTTP client.
///
/// Owns the upstream addressing scheme, so the API key appears only in the
/// request URL and never in anything the relay logs.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl GenerateTransport for HttpTransport {
    async fn post_generate(
        &self,
        model: &str,
        api_key: &str,
        payload: &GenerateRequest,
    ) -> Result<TransportReply> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, api_key
        );

        debug!(model, "posting to generate endpoint");

        let resp = self.client.post(&url).json(payload).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        Ok(TransportReply { status, body })
    }
}
