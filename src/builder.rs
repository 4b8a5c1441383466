//! Client builder.
//!
//! Collects HTTP and credential settings and produces an immutable
//! `DomainReputationClient`. Precedence for the transport:
//! custom transport > custom `reqwest::Client` > client built from the
//! timeout/connect-timeout settings.

use crate::client::{ClientConfig, DomainReputationClient};
use crate::defaults;
use crate::error::Error;
use crate::execution::http::{HttpHeaderBuilder, HttpTransport, ReqwestTransport};
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Builder for `DomainReputationClient`.
#[derive(Clone, Default)]
pub struct ClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    headers: Vec<(String, String)>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Credential and Endpoint
    // ========================================================================

    /// Set the API key. When unset, `DOMAIN_REPUTATION_API_KEY` is read at build time.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Override the API endpoint.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    // ========================================================================
    // HTTP Configuration Methods
    // ========================================================================

    /// Set request timeout. Ignored when a custom HTTP client or transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set connection timeout. Ignored when a custom HTTP client or transport is supplied.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Replace the default `User-Agent`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header sent with every request. A later header with the same name wins.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set custom HTTP client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set custom transport (takes precedence over all other HTTP settings).
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<DomainReputationClient, Error> {
        // Step 1: API key (priority: builder > environment variable)
        let api_key = match self.api_key {
            Some(key) if !key.expose_secret().is_empty() => key,
            _ => std::env::var(defaults::API_KEY_ENV)
                .ok()
                .filter(|k| !k.is_empty())
                .map(SecretString::from)
                .ok_or_else(|| {
                    Error::Configuration(format!(
                        "API key is required (set it on the builder or via {})",
                        defaults::API_KEY_ENV
                    ))
                })?,
        };

        // Step 2: Endpoint
        let raw_url = self.base_url.as_deref().unwrap_or(defaults::BASE_URL);
        let base_url = Url::parse(raw_url)
            .map_err(|e| Error::Configuration(format!("Invalid base URL '{raw_url}': {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Configuration(format!(
                "Unsupported base URL scheme '{}'",
                base_url.scheme()
            )));
        }

        // Step 3: Identification headers
        let headers = HttpHeaderBuilder::new()
            .with_user_agent(self.user_agent.as_deref().unwrap_or(defaults::USER_AGENT))?
            .with_headers(self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str())))?
            .build();

        // Step 4: Transport
        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                let client = builder.build().map_err(|e| {
                    Error::Configuration(format!("Failed to build HTTP client: {e}"))
                })?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(DomainReputationClient::from_parts(
            ClientConfig {
                api_key,
                base_url,
                headers,
            },
            transport,
        ))
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .field("headers", &self.headers)
            .field("custom_http_client", &self.http_client.is_some())
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = ClientBuilder::new().api_key("test-key").build().unwrap();
        assert_eq!(client.base_url().as_str(), defaults::BASE_URL);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ClientBuilder::new()
            .api_key("test-key")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = ClientBuilder::new()
            .api_key("test-key")
            .base_url("ftp://example.com/api")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported base URL scheme"));
    }

    #[test]
    fn test_invalid_header() {
        let err = ClientBuilder::new()
            .api_key("test-key")
            .header("bad header", "v")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let builder = ClientBuilder::new().api_key("super-secret");
        let printed = format!("{builder:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
