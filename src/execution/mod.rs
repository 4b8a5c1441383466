//! Execution Module
//!
//! The request/response pipeline behind every lookup:
//! - `request`: argument validation and query construction
//! - `http`: identification headers and the injectable transport
//! - `response`: buffering the transport's body into a `ResponseEnvelope`

pub mod http;
pub mod request;
pub mod response;

pub use request::{PendingRequest, build_request};
pub use response::ResponseEnvelope;
