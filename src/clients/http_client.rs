//! HTTP client for platform API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the platform REST API.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::CumulocityConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the platform REST API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers: `Authorization`, `User-Agent`, and the optional
///   `X-Cumulocity-Application-Key`
/// - Vendor media-type `Accept`/`Content-Type` headers per request
/// - Raising [`HttpError::Response`] for non-2xx responses
///
/// Each call is a single awaited round trip. There is no retry, backoff,
/// or caching; callers handle platform error responses themselves.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use cumulocity_api::clients::{HttpClient, HttpMethod, HttpRequest, MediaType};
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/alarm/alarms")
///     .accept(MediaType::AlarmCollection)
///     .query_param("status", "ACTIVE")
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://acme.cumulocity.com`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &CumulocityConfig) -> Self {
        let base_url = config.base_url().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Cumulocity API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert(
            "Authorization".to_string(),
            config.credentials().authorization_header(),
        );
        if let Some(key) = config.application_key() {
            default_headers.insert("X-Cumulocity-Application-Key".to_string(), key.to_string());
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the platform.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction from the base URL and request path
    /// - Header merging (`Accept`/`Content-Type` from the request's media
    ///   types on top of the default headers)
    /// - Response parsing into [`HttpResponse`]
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`), carrying the parsed
    ///   platform error body
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}{}", self.base_url, request.path);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            "sending platform request"
        );

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
            crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
        };

        // Add default headers
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        // Accept defaults to plain JSON when the caller did not declare an
        // expected representation.
        let accept = request
            .accept
            .map_or("application/json", |media_type| media_type.as_mime());
        req_builder = req_builder.header("Accept", accept);

        if let Some(content_type) = request.content_type {
            req_builder = req_builder.header("Content-Type", content_type.as_mime());
        }

        // Add query params
        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        // Send request
        let res = req_builder.send().await?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let raw = res.bytes().await.map(|bytes| bytes.to_vec())?;

        // Parse body as JSON; empty and non-JSON bodies become `{}`
        let body = if raw.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_slice(&raw).unwrap_or_else(|_| serde_json::json!({}))
        };

        let response = HttpResponse::new(code, res_headers, body, raw);

        if response.is_ok() {
            return Ok(response);
        }

        let error = HttpResponseError::from_body(response.code, &response.body);
        tracing::warn!(
            code = response.code,
            path = %request.path,
            error = error.error.as_deref().unwrap_or("<none>"),
            "platform returned error response"
        );
        Err(HttpError::Response(error))
    }

    /// Parses response headers into a `HashMap` with lowercase names.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, Credentials, CumulocityConfig, Password, TenantId, Username};

    fn create_test_config() -> CumulocityConfig {
        CumulocityConfig::builder()
            .base_url(BaseUrl::new("https://acme.cumulocity.com").unwrap())
            .credentials(Credentials::basic(
                TenantId::new("t12345").unwrap(),
                Username::new("admin").unwrap(),
                Password::new("s3cret").unwrap(),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(client.base_url(), "https://acme.cumulocity.com");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Cumulocity API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = CumulocityConfig::builder()
            .base_url(BaseUrl::new("https://acme.cumulocity.com").unwrap())
            .credentials(Credentials::bearer("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Cumulocity API Library"));
    }

    #[test]
    fn test_basic_authorization_header_injection() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Basic dDEyMzQ1L2FkbWluOnMzY3JldA==".to_string())
        );
    }

    #[test]
    fn test_application_key_header_when_configured() {
        let config = CumulocityConfig::builder()
            .base_url(BaseUrl::new("https://acme.cumulocity.com").unwrap())
            .credentials(Credentials::bearer("token").unwrap())
            .application_key("my-application")
            .build()
            .unwrap();

        let client = HttpClient::new(&config);
        assert_eq!(
            client.default_headers().get("X-Cumulocity-Application-Key"),
            Some(&"my-application".to_string())
        );
    }

    #[test]
    fn test_no_application_key_header_by_default() {
        let client = HttpClient::new(&create_test_config());
        assert!(client
            .default_headers()
            .get("X-Cumulocity-Application-Key")
            .is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
