//! domain-reputation
//!
//! Async client for the Domain Reputation API: look up a domain name and get
//! back either a typed reputation result or the raw response bytes, with every
//! failure classified into a distinct error kind.
//!
//! ```rust,no_run
//! use domain_reputation::prelude::*;
//!
//! # async fn example() -> Result<(), domain_reputation::Error> {
//! let client = DomainReputationClient::new("at_...")?;
//! let ctx = RequestContext::background();
//!
//! let lookup = client
//!     .get(&ctx, "whoisxmlapi.com", &[QueryOption::mode(Mode::Full)])
//!     .await?;
//! println!("{} {}", lookup.result.mode, lookup.result.reputation_score);
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod builder;
pub mod client;
pub mod context;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod params;
pub mod types;

pub use builder::ClientBuilder;
pub use client::{DomainReputationClient, DomainReputationService};
pub use context::RequestContext;
pub use error::{ApiError, Error, TransportError};
pub use execution::ResponseEnvelope;
pub use params::{Mode, OutputFormat, ParameterSet, QueryOption};
pub use types::{DomainReputationResult, Lookup, TestResult, Warning};

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::builder::ClientBuilder;
    pub use crate::client::{DomainReputationClient, DomainReputationService};
    pub use crate::context::RequestContext;
    pub use crate::error::{ApiError, Error, TransportError};
    pub use crate::execution::ResponseEnvelope;
    pub use crate::params::{Mode, OutputFormat, QueryOption};
    pub use crate::types::{DomainReputationResult, Lookup, TestResult, Warning};
}
