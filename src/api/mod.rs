//! Typed resource clients over the platform REST API.
//!
//! [`CumulocityClient`] is the entry point: it owns a shared
//! [`HttpClient`] and hands out per-resource clients that borrow it. The
//! per-resource clients are cheap to create and clone, so fetching one
//! per call is fine.
//!
//! # Example
//!
//! ```rust,ignore
//! use cumulocity_api::api::CumulocityClient;
//! use cumulocity_api::api::alarms::AlarmFilter;
//! use cumulocity_api::models::AlarmStatus;
//!
//! let client = CumulocityClient::new(&config);
//!
//! let active = client
//!     .alarms()
//!     .list(&AlarmFilter {
//!         status: Some(AlarmStatus::Active),
//!         ..AlarmFilter::default()
//!     })
//!     .await?;
//! ```

pub mod alarms;
pub mod applications;
pub mod body;
pub mod events;
pub mod groups;
pub mod managed_objects;
pub mod measurements;
pub mod operations;
pub mod query;
pub mod tenants;
pub mod trusted_certificates;
pub mod users;

use std::sync::Arc;

use crate::clients::HttpClient;
use crate::config::CumulocityConfig;

pub use alarms::{AlarmFilter, AlarmsApi};
pub use applications::ApplicationsApi;
pub use events::{EventFilter, EventsApi};
pub use groups::GroupsApi;
pub use managed_objects::{ManagedObjectFilter, ManagedObjectsApi};
pub use measurements::{MeasurementFilter, MeasurementsApi};
pub use operations::{OperationFilter, OperationsApi};
pub use query::PagingParams;
pub use tenants::TenantsApi;
pub use trusted_certificates::TrustedCertificatesApi;
pub use users::{UserFilter, UsersApi};

/// The top-level platform client.
///
/// Wraps a single [`HttpClient`] shared by all resource clients, so one
/// connection pool and one set of credentials serve the whole API.
#[derive(Debug, Clone)]
pub struct CumulocityClient {
    http_client: Arc<HttpClient>,
}

impl CumulocityClient {
    /// Creates a client for the given configuration.
    #[must_use]
    pub fn new(config: &CumulocityConfig) -> Self {
        Self {
            http_client: Arc::new(HttpClient::new(config)),
        }
    }

    /// Wraps an existing HTTP client, e.g. one built for tests.
    #[must_use]
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Returns the underlying HTTP client for raw requests.
    #[must_use]
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// The alarm endpoints.
    #[must_use]
    pub fn alarms(&self) -> AlarmsApi {
        AlarmsApi::new(Arc::clone(&self.http_client))
    }

    /// The event endpoints.
    #[must_use]
    pub fn events(&self) -> EventsApi {
        EventsApi::new(Arc::clone(&self.http_client))
    }

    /// The measurement endpoints.
    #[must_use]
    pub fn measurements(&self) -> MeasurementsApi {
        MeasurementsApi::new(Arc::clone(&self.http_client))
    }

    /// The inventory endpoints.
    #[must_use]
    pub fn managed_objects(&self) -> ManagedObjectsApi {
        ManagedObjectsApi::new(Arc::clone(&self.http_client))
    }

    /// The device control endpoints.
    #[must_use]
    pub fn operations(&self) -> OperationsApi {
        OperationsApi::new(Arc::clone(&self.http_client))
    }

    /// The user management endpoints.
    #[must_use]
    pub fn users(&self) -> UsersApi {
        UsersApi::new(Arc::clone(&self.http_client))
    }

    /// The group and role endpoints.
    #[must_use]
    pub fn groups(&self) -> GroupsApi {
        GroupsApi::new(Arc::clone(&self.http_client))
    }

    /// The tenant endpoints.
    #[must_use]
    pub fn tenants(&self) -> TenantsApi {
        TenantsApi::new(Arc::clone(&self.http_client))
    }

    /// The application endpoints.
    #[must_use]
    pub fn applications(&self) -> ApplicationsApi {
        ApplicationsApi::new(Arc::clone(&self.http_client))
    }

    /// The trusted certificate endpoints.
    #[must_use]
    pub fn trusted_certificates(&self) -> TrustedCertificatesApi {
        TrustedCertificatesApi::new(Arc::clone(&self.http_client))
    }
}

// Verify CumulocityClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CumulocityClient>();
};
