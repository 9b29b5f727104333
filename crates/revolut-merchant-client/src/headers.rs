//! Per-method header templates.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;

use crate::error::ClientError;

/// Name of the API version header.
pub const API_VERSION_HEADER: HeaderName = HeaderName::from_static("revolut-api-version");

/// Header sets built once per client.
///
/// - GET: `Accept`, `Revolut-Api-Version`, `Authorization`
/// - POST/PUT: the GET headers plus `Content-Type: application/json`
/// - DELETE: `Authorization` only
#[derive(Debug, Clone)]
pub struct HeaderSet {
    get: HeaderMap,
    post: HeaderMap,
    delete: HeaderMap,
}

impl HeaderSet {
    /// Build the header sets for a secret key and API version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if either value contains bytes
    /// that are not allowed in a header.
    pub fn new(secret_key: &str, api_version: &str) -> Result<Self, ClientError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {secret_key}"))
            .map_err(|_| ClientError::Configuration("secret key is not a valid header value".into()))?;
        authorization.set_sensitive(true);

        let version = HeaderValue::from_str(api_version)
            .map_err(|_| ClientError::Configuration(format!("invalid API version: {api_version}")))?;

        let mut get = HeaderMap::new();
        get.insert(ACCEPT, HeaderValue::from_static("application/json"));
        get.insert(API_VERSION_HEADER, version);
        get.insert(AUTHORIZATION, authorization.clone());

        let mut post = get.clone();
        post.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut delete = HeaderMap::new();
        delete.insert(AUTHORIZATION, authorization);

        Ok(Self { get, post, delete })
    }

    /// Headers for GET requests.
    #[must_use]
    pub fn get(&self) -> &HeaderMap {
        &self.get
    }

    /// Headers for POST and PUT requests.
    #[must_use]
    pub fn post(&self) -> &HeaderMap {
        &self.post
    }

    /// Headers for DELETE requests.
    #[must_use]
    pub fn delete(&self) -> &HeaderMap {
        &self.delete
    }

    /// Headers for an arbitrary method. Anything other than GET, HEAD and
    /// DELETE is treated as body-bearing.
    #[must_use]
    pub fn for_method(&self, method: &Method) -> &HeaderMap {
        match *method {
            Method::GET | Method::HEAD => &self.get,
            Method::DELETE => &self.delete,
            _ => &self.post,
        }
    }
}
