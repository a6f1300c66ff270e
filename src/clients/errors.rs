//! HTTP-specific error types for the Cumulocity API SDK.
//!
//! This module contains error types for HTTP operations, including platform
//! error responses and request validation failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the platform
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! There is no local recovery or retry: any non-success status surfaces as an
//! error and callers decide how to handle the platform error response.
//!
//! # Example
//!
//! ```rust,ignore
//! use cumulocity_api::clients::HttpError;
//!
//! match client.alarms().get("12345").await {
//!     Ok(alarm) => println!("Alarm: {:?}", alarm.text),
//!     Err(HttpError::Response(e)) => {
//!         println!("Platform error {}: {:?}", e.code, e.message);
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The platform reports errors with its error media type
/// (`application/vnd.com.nsn.cumulocity.error+json`), a JSON object with an
/// `error` code of the form `<group>/<name>`, a human-readable `message`,
/// and an `info` link to the documentation. All three are optional here
/// because proxies and gateways can answer with arbitrary bodies.
///
/// # Example
///
/// ```rust
/// use cumulocity_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     error: Some("inventory/notFound".to_string()),
///     message: Some("Finding device data from database failed.".to_string()),
///     info: None,
/// };
///
/// assert!(error.to_string().contains("inventory/notFound"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {}", describe(.error, .message))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The platform error code (e.g., `inventory/notFound`).
    pub error: Option<String>,
    /// The human-readable error message.
    pub message: Option<String>,
    /// A link to documentation for this error.
    pub info: Option<String>,
}

/// Wire shape of the platform error media type.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    info: Option<String>,
}

impl HttpResponseError {
    /// Builds an error from a response status code and body.
    ///
    /// Bodies that do not match the platform error media type produce an
    /// error carrying only the status code.
    #[must_use]
    pub fn from_body(code: u16, body: &Value) -> Self {
        let parsed: Option<ErrorBody> = serde_json::from_value(body.clone()).ok();
        let parsed = parsed.unwrap_or(ErrorBody {
            error: None,
            message: None,
            info: None,
        });
        Self {
            code,
            error: parsed.error,
            message: parsed.message,
            info: parsed.info,
        }
    }
}

fn describe(error: &Option<String>, message: &Option<String>) -> String {
    match (error, message) {
        (Some(error), Some(message)) => format!("{error}: {message}"),
        (Some(error), None) => error.clone(),
        (None, Some(message)) => message.clone(),
        (None, None) => "no error details in response".to_string(),
    }
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as:
/// - Missing body for POST/PUT requests
/// - Body provided without a `Content-Type` media type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the content media type.
    #[error("Cannot set a body without also setting its content type.")]
    MissingContentType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body, query filter, or response body could not be
    /// (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
