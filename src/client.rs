//! Client Module
//!
//! Defines the Domain Reputation service interface and the client that
//! implements it on top of an `HttpTransport`.
//!
//! The two lookups classify failures in a different order:
//!
//! - `get` decodes the body first and only then looks at the service error
//!   fields. A non-2xx response whose body is not JSON is a parse error.
//! - `get_raw` never decodes. Any non-2xx status is a status error, and any
//!   2xx body is returned as is.

use crate::builder::ClientBuilder;
use crate::context::RequestContext;
use crate::defaults::LOG_TARGET;
use crate::error::Error;
use crate::execution::http::{HttpRequestContext, HttpTransport, TransportRequest};
use crate::execution::request::build_request;
use crate::execution::response::ResponseEnvelope;
use crate::params::{OutputFormat, QueryOption};
use crate::types::{Lookup, WireResponse};
use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::HeaderMap;
use secrecy::SecretString;
use std::fmt;
use std::sync::Arc;

/// Domain Reputation API interface.
#[async_trait]
pub trait DomainReputationService: Send + Sync {
    /// Look up `domain_name` and decode the result.
    ///
    /// The request always asks for JSON: an output format set through
    /// `options` is overridden because the decoder only understands JSON.
    async fn get(
        &self,
        ctx: &RequestContext,
        domain_name: &str,
        options: &[QueryOption],
    ) -> Result<Lookup, Error>;

    /// Look up `domain_name` and return the buffered response undecoded.
    async fn get_raw(
        &self,
        ctx: &RequestContext,
        domain_name: &str,
        options: &[QueryOption],
    ) -> Result<ResponseEnvelope, Error>;
}

/// Client settings, fixed once the client is built.
pub(crate) struct ClientConfig {
    pub api_key: SecretString,
    pub base_url: Url,
    pub headers: HeaderMap,
}

/// Domain Reputation API client.
///
/// Cheap to clone; clones share the configuration and transport.
#[derive(Clone)]
pub struct DomainReputationClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl DomainReputationClient {
    /// Create a client with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_parts(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Validate, send and buffer a lookup.
    async fn request(
        &self,
        ctx: &RequestContext,
        domain_name: &str,
        options: &[QueryOption],
    ) -> Result<ResponseEnvelope, Error> {
        let pending = build_request(
            &self.config.base_url,
            domain_name,
            &self.config.api_key,
            options,
        )?;

        let http_ctx = HttpRequestContext::new(pending.domain_name.clone());
        tracing::debug!(
            target: LOG_TARGET,
            request_id = %http_ctx.request_id,
            domain = %http_ctx.domain_name,
            path = %self.config.base_url.path(),
            "sending request"
        );

        let request = TransportRequest {
            ctx: http_ctx.clone(),
            url: pending.url(),
            headers: self.config.headers.clone(),
        };
        let response = ctx.run(self.transport.execute(request)).await?;
        let envelope = ResponseEnvelope::drain(ctx, response).await?;

        tracing::debug!(
            target: LOG_TARGET,
            request_id = %http_ctx.request_id,
            status = envelope.status,
            bytes = envelope.body.len(),
            "response received"
        );
        Ok(envelope)
    }
}

#[async_trait]
impl DomainReputationService for DomainReputationClient {
    async fn get(
        &self,
        ctx: &RequestContext,
        domain_name: &str,
        options: &[QueryOption],
    ) -> Result<Lookup, Error> {
        let mut json_options = Vec::with_capacity(options.len() + 1);
        json_options.extend_from_slice(options);
        json_options.push(QueryOption::output_format(OutputFormat::Json));

        let response = self.request(ctx, domain_name, &json_options).await?;

        let wire = match WireResponse::decode(&response.body) {
            Ok(wire) => wire,
            Err(e) => return Err(Error::parse(e.to_string(), response)),
        };

        if let Some(api_error) = wire.api_error() {
            return Err(api_error.into());
        }

        Ok(Lookup {
            result: wire.into_result(),
            response,
        })
    }

    async fn get_raw(
        &self,
        ctx: &RequestContext,
        domain_name: &str,
        options: &[QueryOption],
    ) -> Result<ResponseEnvelope, Error> {
        let response = self.request(ctx, domain_name, options).await?;

        if !response.is_success() {
            return Err(Error::status(response));
        }

        Ok(response)
    }
}

impl fmt::Debug for DomainReputationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainReputationClient")
            .field("base_url", &self.config.base_url.as_str())
            .finish_non_exhaustive()
    }
}
