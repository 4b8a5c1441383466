//! HTTP transport abstraction.
//!
//! The client never talks to `reqwest` directly: it hands a fully built GET
//! request to an injectable `HttpTransport` and gets back the status, headers
//! and an unread body stream. `ReqwestTransport` is the default; tests and
//! embedders can supply their own.

use crate::error::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::{self, BoxStream};
use reqwest::Url;
use reqwest::header::HeaderMap;
use std::fmt;

/// Response body as delivered by the transport, chunk by chunk.
pub type BodyStream = BoxStream<'static, Result<Bytes, TransportError>>;

/// Context describing a single lookup, shared with the transport for logging.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub request_id: String,
    pub domain_name: String,
}

impl HttpRequestContext {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            request_id: generate_request_id(),
            domain_name: domain_name.into(),
        }
    }
}

/// Generate a unique request id.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Transport-level request data. The method is always GET.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub ctx: HttpRequestContext,
    /// Full URL including the encoded query.
    pub url: Url,
    pub headers: HeaderMap,
}

/// Transport-level response data.
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: BodyStream,
}

impl TransportResponse {
    /// A response whose body is already in memory.
    pub fn from_bytes(status: u16, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        let body: Bytes = body.into();
        Self {
            status,
            headers,
            body: stream::iter([Ok(body)]).boxed(),
        }
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Executes lookup requests.
///
/// Implementations must not interpret the status code; classification happens
/// in the client. Implementations shared between tasks must be safe to call
/// concurrently.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let resp = self
            .client
            .get(request.url)
            .headers(request.headers)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp
            .bytes_stream()
            .map(|chunk| chunk.map_err(TransportError::from))
            .boxed();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;

    #[tokio::test]
    async fn from_bytes_yields_single_chunk() {
        let resp = TransportResponse::from_bytes(201, HeaderMap::new(), "abc");
        assert_eq!(resp.status, 201);
        let chunks: Vec<Bytes> = resp.body.try_collect().await.unwrap();
        assert_eq!(chunks, vec![Bytes::from_static(b"abc")]);
    }

    #[test]
    fn request_ids_are_unique() {
        let a = HttpRequestContext::new("example.com");
        let b = HttpRequestContext::new("example.com");
        assert_ne!(a.request_id, b.request_id);
        assert_eq!(a.domain_name, "example.com");
    }

    #[tokio::test]
    async fn reqwest_transport_reports_connect_failures() {
        let transport = ReqwestTransport::default();
        let request = TransportRequest {
            ctx: HttpRequestContext::new("example.com"),
            url: Url::parse("http://127.0.0.1:1/api").unwrap(),
            headers: HeaderMap::new(),
        };
        let err = transport.execute(request).await.unwrap_err();
        assert!(matches!(err, TransportError::Connect(_)));
    }
}
