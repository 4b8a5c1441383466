//! Default configuration values

/// Domain Reputation API endpoint.
pub const BASE_URL: &str = "https://domain-reputation.whoisxmlapi.com/api/v2";

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "DOMAIN_REPUTATION_API_KEY";

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("domain-reputation-rs/", env!("CARGO_PKG_VERSION"));

/// Target for this crate's `tracing` events.
pub const LOG_TARGET: &str = "domain_reputation::http";
