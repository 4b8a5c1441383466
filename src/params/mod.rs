//! Query Parameter Module
//!
//! Handles the per-request query parameters sent to the Domain Reputation API:
//! - `ParameterSet`: an insertion-ordered name/value map
//! - `QueryOption`: composable mutators applied to a `ParameterSet`

pub mod options;

pub use options::*;

/// Insertion-ordered mapping from query parameter name to value.
///
/// Setting an existing name replaces its value in place, so the encoded query
/// keeps the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, overriding any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Apply options left to right.
    pub fn apply_all<'a>(&mut self, options: impl IntoIterator<Item = &'a QueryOption>) {
        for option in options {
            option.apply(self);
        }
    }

    /// Percent-encode as a URL query string (`a=1&b=2`).
    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
