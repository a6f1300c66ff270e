//! # Cumulocity API Rust SDK
//!
//! A Rust client for the Cumulocity IoT platform REST API, providing
//! type-safe configuration, authenticated HTTP transport, and typed
//! clients for the platform's resource endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`CumulocityConfig`] and [`CumulocityConfigBuilder`]
//! - Validated newtypes for the base URL and credentials
//! - Basic and bearer authentication with tenant-scoped usernames
//! - An async HTTP client speaking the platform's vendor media types
//! - Typed resource clients for alarms, events, measurements, inventory,
//!   device control, users, groups, tenants, applications, and trusted
//!   certificates
//! - Fragment-preserving models: custom fragments survive a fetch-modify-update
//!   round trip untouched
//!
//! ## Quick Start
//!
//! ```rust
//! use cumulocity_api::{
//!     BaseUrl, Credentials, CumulocityConfig, Password, TenantId, Username,
//! };
//!
//! // Create configuration using the builder pattern
//! let config = CumulocityConfig::builder()
//!     .base_url(BaseUrl::new("https://acme.cumulocity.com").unwrap())
//!     .credentials(Credentials::basic(
//!         TenantId::new("t12345").unwrap(),
//!         Username::new("admin").unwrap(),
//!         Password::new("s3cret").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use cumulocity_api::api::CumulocityClient;
//! use cumulocity_api::api::alarms::AlarmFilter;
//! use cumulocity_api::models::{Alarm, AlarmSeverity, AlarmStatus, Source};
//!
//! let client = CumulocityClient::new(&config);
//!
//! // List active alarms
//! let active = client
//!     .alarms()
//!     .list(&AlarmFilter {
//!         status: Some(AlarmStatus::Active),
//!         ..AlarmFilter::default()
//!     })
//!     .await?;
//!
//! // Raise an alarm for a device
//! let alarm = Alarm {
//!     alarm_type: Some("c8y_TemperatureAlarm".to_string()),
//!     text: Some("Temperature exceeded threshold".to_string()),
//!     source: Some(Source::by_id("4711")),
//!     severity: Some(AlarmSeverity::Major),
//!     status: Some(AlarmStatus::Active),
//!     ..Alarm::default()
//! };
//! let created = client.alarms().create(&alarm).await?;
//! ```
//!
//! ## Making Raw Requests
//!
//! The typed clients cover the common endpoints; anything else can be
//! reached through the HTTP layer directly:
//!
//! ```rust,ignore
//! use cumulocity_api::clients::{HttpClient, HttpMethod, HttpRequest, MediaType};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/inventory/managedObjects")
//!     .accept(MediaType::ManagedObjectCollection)
//!     .query_param("fragmentType", "c8y_IsDevice")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Each call is one round trip; errors surface
//!   to the caller

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use api::CumulocityClient;
pub use config::{
    BaseUrl, Credentials, CumulocityConfig, CumulocityConfigBuilder, Password, TenantId, Username,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MediaType,
};
