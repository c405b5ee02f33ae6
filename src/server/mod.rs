pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{serve, serve_ephemeral, RunningServer};
pub use request::{parse_form, parse_query, split_path, ParsedRequest};
pub use response::{status_reason, write_context_response};
pub use service::EngineService;
