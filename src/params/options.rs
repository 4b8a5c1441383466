//! Query options.
//!
//! A `QueryOption` mutates the `ParameterSet` of a single request. Options are
//! applied in the order given, so a later option wins over an earlier one that
//! sets the same parameter.

use super::ParameterSet;
use std::fmt;
use std::sync::Arc;

pub const OUTPUT_FORMAT_PARAM: &str = "outputFormat";
pub const MODE_PARAM: &str = "mode";

/// Response output format accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Xml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
        }
    }
}

impl AsRef<str> for OutputFormat {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Check mode.
///
/// `Fast` runs only a selected set of tests (WHOIS domain status, malware
/// databases, SSL certificate validity, WHOIS domain check). `Full` runs every
/// test and data collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Fast,
    Full,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Full => "full",
        }
    }
}

impl AsRef<str> for Mode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A query parameter mutator.
#[derive(Clone)]
pub struct QueryOption(Arc<dyn Fn(&mut ParameterSet) + Send + Sync>);

impl QueryOption {
    /// Wrap a custom mutator.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut ParameterSet) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Set the response output format (`JSON` | `XML`). The value is uppercased.
    ///
    /// Ignored by `get`, which always requests JSON.
    pub fn output_format(format: impl AsRef<str>) -> Self {
        let value = format.as_ref().to_uppercase();
        Self::new(move |params| params.set(OUTPUT_FORMAT_PARAM, value.clone()))
    }

    /// Set the check mode (`fast` | `full`). The value is passed through as is.
    pub fn mode(mode: impl AsRef<str>) -> Self {
        let value = mode.as_ref().to_string();
        Self::new(move |params| params.set(MODE_PARAM, value.clone()))
    }

    pub fn apply(&self, params: &mut ParameterSet) {
        (self.0)(params)
    }
}

impl fmt::Debug for QueryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QueryOption").finish_non_exhaustive()
    }
}
