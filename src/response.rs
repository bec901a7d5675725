use serde_json::json;

use crate::relay::RelayResult;

/// Headers attached to every response, success or failure.
pub const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Content-Type", "application/json"),
];

/// Transport-level response for the platform dispatcher to copy into its
/// native envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

/// Map a relay outcome onto the wire: status passed through unchanged,
/// fixed headers, JSON body keyed by outcome.
pub fn build(result: &RelayResult) -> HttpResponse {
    let body = if result.success {
        json!({ "reply": result.reply })
    } else {
        json!({ "error": result.error })
    };

    HttpResponse {
        status_code: result.status_code,
        headers: RESPONSE_HEADERS.to_vec(),
        body: body.to_string(),
    }
}
