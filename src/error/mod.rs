//! Error Handling Module
//!
//! This module provides the error taxonomy shared by every stage of a lookup:
//! - Call-level errors (`Error`) with their display contracts
//! - Transport failures (`TransportError`) reported by an `HttpTransport`
//! - Service-reported failures (`ApiError`)
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_reputation::error::{ApiError, Error};
//!
//! let error = Error::from(ApiError::new(499, "Test error message."));
//! assert_eq!(error.to_string(), "API error: [499] Test error message.");
//! assert!(error.response().is_none());
//! ```

// Module declarations
mod conversions;
pub mod types;

// Re-exports for public API
pub use types::*;
