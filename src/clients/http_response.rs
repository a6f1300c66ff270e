//! HTTP response types for the Cumulocity API SDK.
//!
//! This module provides the [`HttpResponse`] type, a transport-level view of
//! a platform response: status code, headers, the parsed JSON body, and the
//! raw body bytes for endpoints with no meaningful typed representation.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::errors::HttpError;

/// An HTTP response received from the platform.
///
/// Most callers never see this type: resource clients decode responses into
/// typed models. It is exposed for callers using [`HttpClient`] directly,
/// and to keep the raw body bytes reachable for DELETE/PUT endpoints where
/// the platform sends an empty or untyped body.
///
/// [`HttpClient`]: crate::clients::HttpClient
///
/// # Example
///
/// ```rust
/// use cumulocity_api::clients::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(
///     200,
///     std::collections::HashMap::new(),
///     json!({"id": "123", "text": "Tamper sensor triggered"}),
///     br#"{"id": "123", "text": "Tamper sensor triggered"}"#.to_vec(),
/// );
///
/// assert!(response.is_ok());
/// assert_eq!(response.body["id"], "123");
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers with lowercase names. Multi-valued headers keep
    /// every value.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body parsed as JSON, or `{}` for empty/non-JSON bodies.
    pub body: Value,
    /// The raw response body bytes.
    pub raw: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: Value,
        raw: Vec<u8>,
    ) -> Self {
        Self {
            code,
            headers,
            body,
            raw,
        }
    }

    /// Returns `true` if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of the given header (name matched
    /// case-insensitively).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Deserializes the JSON body into the given type.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Json`] if the body does not match the expected
    /// shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_value(self.body.clone()).map_err(HttpError::Json)
    }
}
