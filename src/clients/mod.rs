//! Transport layer for platform API communication.
//!
//! This module provides the HTTP plumbing shared by every resource client:
//!
//! - [`HttpClient`]: authenticated transport over the configured base URL
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: request construction with
//!   pre-send validation
//! - [`HttpResponse`]: status, headers, parsed JSON body, raw bytes
//! - [`MediaType`]: the vendor media types used in `Accept`/`Content-Type`
//! - Error types: [`HttpError`], [`HttpResponseError`],
//!   [`InvalidHttpRequestError`]
//!
//! Resource clients in [`crate::api`] are thin wrappers over this layer;
//! use it directly only for endpoints the SDK does not model.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, MediaType};
pub use http_response::HttpResponse;
