//! Request construction.

use crate::error::Error;
use crate::params::{ParameterSet, QueryOption};
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};

pub const API_KEY_PARAM: &str = "apiKey";
pub const DOMAIN_NAME_PARAM: &str = "domainName";

/// A validated lookup request that has not been sent yet.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub domain_name: String,
    pub params: ParameterSet,
    base_url: Url,
}

impl PendingRequest {
    /// Endpoint URL with the encoded query.
    ///
    /// Any query already present on the base URL is replaced.
    pub fn url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(Some(&self.params.encode()));
        url
    }
}

/// Validate `domain_name` and build the query for a lookup.
///
/// The credential and domain name are set first, then `options` are applied in
/// order so later options override earlier ones.
pub fn build_request(
    base_url: &Url,
    domain_name: &str,
    credential: &SecretString,
    options: &[QueryOption],
) -> Result<PendingRequest, Error> {
    if domain_name.is_empty() {
        return Err(Error::Argument {
            name: DOMAIN_NAME_PARAM,
            message: "can not be empty",
        });
    }

    let mut params = ParameterSet::new();
    params.set(API_KEY_PARAM, credential.expose_secret());
    params.set(DOMAIN_NAME_PARAM, domain_name);
    params.apply_all(options);

    Ok(PendingRequest {
        domain_name: domain_name.to_string(),
        params,
        base_url: base_url.clone(),
    })
}
