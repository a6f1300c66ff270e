//! HTTP request types for the Cumulocity API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the platform, along with [`MediaType`], the
//! enumeration of vendor media types used in `Accept` and `Content-Type`
//! headers.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the platform REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Vendor media types identifying platform resource representations.
///
/// The platform uses custom MIME types of the form
/// `application/vnd.com.nsn.cumulocity.<representation>+json` to identify
/// the representation carried in a request or response body. Endpoints with
/// no vendor representation (e.g., trusted certificates) use plain
/// [`MediaType::Json`].
///
/// # Example
///
/// ```rust
/// use cumulocity_api::clients::MediaType;
///
/// assert_eq!(
///     MediaType::Alarm.as_mime(),
///     "application/vnd.com.nsn.cumulocity.alarm+json"
/// );
/// assert_eq!(MediaType::Json.as_mime(), "application/json");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MediaType {
    /// Plain `application/json`.
    Json,
    /// The platform error representation.
    Error,
    /// A single alarm.
    Alarm,
    /// A page of alarms.
    AlarmCollection,
    /// A single event.
    Event,
    /// A page of events.
    EventCollection,
    /// A single measurement.
    Measurement,
    /// A page of measurements; also used to POST several measurements at once.
    MeasurementCollection,
    /// A single managed object.
    ManagedObject,
    /// A page of managed objects.
    ManagedObjectCollection,
    /// A reference to a managed object (child device/asset/addition).
    ManagedObjectReference,
    /// A page of managed object references.
    ManagedObjectReferenceCollection,
    /// A single device control operation.
    Operation,
    /// A page of device control operations.
    OperationCollection,
    /// A single user.
    User,
    /// A page of users.
    UserCollection,
    /// The currently authenticated user.
    CurrentUser,
    /// A reference to a user, used for group membership.
    UserReference,
    /// A single user group.
    Group,
    /// A page of user groups.
    GroupCollection,
    /// A page of roles.
    RoleCollection,
    /// A reference to a role, used for role assignment.
    RoleReference,
    /// A single tenant.
    Tenant,
    /// A page of tenants.
    TenantCollection,
    /// The tenant the request was authenticated against.
    CurrentTenant,
    /// A single application.
    Application,
    /// A page of applications.
    ApplicationCollection,
}

impl MediaType {
    /// Returns the MIME type string for this media type.
    #[must_use]
    pub const fn as_mime(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Error => "application/vnd.com.nsn.cumulocity.error+json",
            Self::Alarm => "application/vnd.com.nsn.cumulocity.alarm+json",
            Self::AlarmCollection => "application/vnd.com.nsn.cumulocity.alarmCollection+json",
            Self::Event => "application/vnd.com.nsn.cumulocity.event+json",
            Self::EventCollection => "application/vnd.com.nsn.cumulocity.eventCollection+json",
            Self::Measurement => "application/vnd.com.nsn.cumulocity.measurement+json",
            Self::MeasurementCollection => {
                "application/vnd.com.nsn.cumulocity.measurementCollection+json"
            }
            Self::ManagedObject => "application/vnd.com.nsn.cumulocity.managedObject+json",
            Self::ManagedObjectCollection => {
                "application/vnd.com.nsn.cumulocity.managedObjectCollection+json"
            }
            Self::ManagedObjectReference => {
                "application/vnd.com.nsn.cumulocity.managedObjectReference+json"
            }
            Self::ManagedObjectReferenceCollection => {
                "application/vnd.com.nsn.cumulocity.managedObjectReferenceCollection+json"
            }
            Self::Operation => "application/vnd.com.nsn.cumulocity.operation+json",
            Self::OperationCollection => {
                "application/vnd.com.nsn.cumulocity.operationCollection+json"
            }
            Self::User => "application/vnd.com.nsn.cumulocity.user+json",
            Self::UserCollection => "application/vnd.com.nsn.cumulocity.userCollection+json",
            Self::CurrentUser => "application/vnd.com.nsn.cumulocity.currentUser+json",
            Self::UserReference => "application/vnd.com.nsn.cumulocity.userReference+json",
            Self::Group => "application/vnd.com.nsn.cumulocity.group+json",
            Self::GroupCollection => "application/vnd.com.nsn.cumulocity.groupCollection+json",
            Self::RoleCollection => "application/vnd.com.nsn.cumulocity.roleCollection+json",
            Self::RoleReference => "application/vnd.com.nsn.cumulocity.roleReference+json",
            Self::Tenant => "application/vnd.com.nsn.cumulocity.tenant+json",
            Self::TenantCollection => "application/vnd.com.nsn.cumulocity.tenantCollection+json",
            Self::CurrentTenant => "application/vnd.com.nsn.cumulocity.currentTenant+json",
            Self::Application => "application/vnd.com.nsn.cumulocity.application+json",
            Self::ApplicationCollection => {
                "application/vnd.com.nsn.cumulocity.applicationCollection+json"
            }
        }
    }
}

/// An HTTP request to be sent to the platform.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use cumulocity_api::clients::{HttpMethod, HttpRequest, MediaType};
/// use serde_json::json;
///
/// // GET request with query parameters
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/alarm/alarms")
///     .accept(MediaType::AlarmCollection)
///     .query_param("status", "ACTIVE")
///     .build()
///     .unwrap();
///
/// // POST request with a vendor-typed JSON body
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/alarm/alarms")
///     .body(json!({"type": "c8y_TemperatureAlarm", "text": "too hot"}))
///     .content_type(MediaType::Alarm)
///     .accept(MediaType::Alarm)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute resource path (e.g., `/alarm/alarms/12345`).
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The media type of the body, sent as `Content-Type`.
    pub content_type: Option<MediaType>,
    /// The expected response media type, sent as `Accept`.
    pub accept: Option<MediaType>,
    /// Query parameters to append to the URL, in insertion order.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `content_type` is `None`
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.content_type.is_none() {
            return Err(InvalidHttpRequestError::MissingContentType);
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    content_type: Option<MediaType>,
    accept: Option<MediaType>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    /// Creates a new builder with the required method and path.
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            content_type: None,
            accept: None,
            query: Vec::new(),
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set its media type via
    /// [`content_type`](Self::content_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the media type of the request body.
    #[must_use]
    pub const fn content_type(mut self, media_type: MediaType) -> Self {
        self.content_type = Some(media_type);
        self
    }

    /// Sets the expected response media type.
    #[must_use]
    pub const fn accept(mut self, media_type: MediaType) -> Self {
        self.accept = Some(media_type);
        self
    }

    /// Appends all given query parameters.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            content_type: self.content_type,
            accept: self.accept,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_media_type_vendor_mimes() {
        assert_eq!(
            MediaType::ManagedObject.as_mime(),
            "application/vnd.com.nsn.cumulocity.managedObject+json"
        );
        assert_eq!(
            MediaType::MeasurementCollection.as_mime(),
            "application/vnd.com.nsn.cumulocity.measurementCollection+json"
        );
        assert_eq!(
            MediaType::ManagedObjectReferenceCollection.as_mime(),
            "application/vnd.com.nsn.cumulocity.managedObjectReferenceCollection+json"
        );
        assert_eq!(MediaType::Json.as_mime(), "application/json");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/alarm/alarms")
            .accept(MediaType::AlarmCollection)
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/alarm/alarms");
        assert!(request.body.is_none());
        assert_eq!(request.accept, Some(MediaType::AlarmCollection));
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "/event/events")
            .body(json!({"type": "c8y_DoorOpened", "text": "Door opened"}))
            .content_type(MediaType::Event)
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert!(request.body.is_some());
        assert_eq!(request.content_type, Some(MediaType::Event));
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, "/alarm/alarms").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_requires_body_for_put() {
        let result = HttpRequest::builder(HttpMethod::Put, "/alarm/alarms/1").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_verify_requires_content_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Post, "/alarm/alarms")
            .body(json!({"text": "no content type"}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingContentType)
        ));
    }

    #[test]
    fn test_builder_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "/alarm/alarms")
            .query_param("status", "ACTIVE")
            .query_param("pageSize", "10")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("status".to_string(), "ACTIVE".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_delete_request_needs_no_body() {
        let request = HttpRequest::builder(HttpMethod::Delete, "/alarm/alarms")
            .query_param("resolved", "true")
            .build()
            .unwrap();
        assert!(request.verify().is_ok());
    }
}
