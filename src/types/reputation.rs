//! Domain reputation result types and the wire record they are decoded from

use crate::error::ApiError;
use serde::{Deserialize, Deserializer, Serialize};

/// Warning detected while running a test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    #[serde(rename = "warningDescription", default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Unique numeric warning code
    #[serde(rename = "warningCode", default, deserialize_with = "null_as_default")]
    pub code: i64,
}

/// Result of a single test that reduced the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Test name
    #[serde(default, deserialize_with = "null_as_default")]
    pub test: String,
    /// Unique numeric test identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub test_code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warnings: Vec<Warning>,
}

/// Domain Reputation API response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainReputationResult {
    /// Selected check mode
    pub mode: String,
    /// Composite safety score based on numerous security data sources
    pub reputation_score: f64,
    pub test_results: Vec<TestResult>,
}

/// Typed lookup result together with the envelope it was decoded from.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub result: DomainReputationResult,
    pub response: crate::execution::response::ResponseEnvelope,
}

/// Wire record carrying both the success fields and the service error fields.
///
/// The service puts either set into the same JSON object, so a single decode
/// covers both outcomes.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    mode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    reputation_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    test_results: Vec<TestResult>,
    #[serde(default, deserialize_with = "null_as_default")]
    code: i64,
    #[serde(rename = "messages", default, deserialize_with = "null_as_default")]
    message: String,
}

impl WireResponse {
    /// Decode the first JSON value of a fully received body.
    ///
    /// Anything after that value is ignored.
    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_slice(bytes);
        Self::deserialize(&mut de)
    }

    /// The service error, when either error field is populated.
    pub(crate) fn api_error(&self) -> Option<ApiError> {
        if !self.message.is_empty() || self.code != 0 {
            Some(ApiError::new(self.code, self.message.clone()))
        } else {
            None
        }
    }

    pub(crate) fn into_result(self) -> DomainReputationResult {
        DomainReputationResult {
            mode: self.mode,
            reputation_score: self.reputation_score,
            test_results: self.test_results,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
