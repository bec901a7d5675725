use tracing::warn;

use crate::body::{self, RawBody};
use crate::config::RelayConfig;
use crate::relay::{ChatRelay, RelayResult};
use crate::response::{self, HttpResponse};

/// Run one request through the full parse, relay, respond flow.
///
/// Platform entry code wraps its native request/response envelope around
/// this call, typically passing `RelayConfig::from_env()` so settings are
/// re-read on every invocation.
pub async fn handle(raw: RawBody, config: &RelayConfig, relay: &ChatRelay) -> HttpResponse {
    let result = match body::parse_request(raw) {
        Ok(request) => relay.relay(&request, config).await,
        Err(err) => {
            warn!(error = %err, "request body rejected");
            RelayResult::from(&err)
        }
    };

    response::build(&result)
}
