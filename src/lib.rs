pub mod body;
pub mod config;
pub mod error;
pub mod handler;
pub mod relay;
pub mod response;
pub mod transport;

pub use body::{RawBody, parse_request};
pub use config::RelayConfig;
pub use error::{RelayError, Result};
pub use handler::handle;
pub use relay::{ChatRelay, ChatRequest, ChatTurn, RelayResult};
pub use response::HttpResponse;
pub use transport::{GenerateTransport, HttpTransport, TransportReply};
