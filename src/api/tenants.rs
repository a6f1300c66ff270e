//! Tenant management API client.

use std::sync::Arc;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{CurrentTenant, Tenant, TenantCollection};

/// Client for the tenant endpoints under `/tenant`.
///
/// Listing, creating, and deleting tenants needs management tenant
/// credentials; [`current`](Self::current) works for everyone.
///
/// Obtained from [`CumulocityClient::tenants`](crate::api::CumulocityClient::tenants).
#[derive(Debug, Clone)]
pub struct TenantsApi {
    http_client: Arc<HttpClient>,
}

impl TenantsApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of subtenants.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response,
    /// including 403 for non-management credentials.
    pub async fn list(&self, paging: &PagingParams) -> Result<TenantCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/tenant/tenants")
            .accept(MediaType::TenantCollection)
            .query(serialize_query(paging)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single tenant by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, id: &str) -> Result<Tenant, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/tenant/tenants/{id}"))
            .accept(MediaType::Tenant)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Creates a new subtenant.
    ///
    /// `domain` is required; the platform generates the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn create(&self, tenant: &Tenant) -> Result<Tenant, HttpError> {
        let body = to_transmission_json(tenant, Tenant::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Post, "/tenant/tenants")
            .body(body)
            .content_type(MediaType::Tenant)
            .accept(MediaType::Tenant)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates an existing subtenant's contact or company data.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update(&self, id: &str, tenant: &Tenant) -> Result<Tenant, HttpError> {
        let body = to_transmission_json(tenant, Tenant::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Put, format!("/tenant/tenants/{id}"))
            .body(body)
            .content_type(MediaType::Tenant)
            .accept(MediaType::Tenant)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Deletes a subtenant and all its data.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, format!("/tenant/tenants/{id}")).build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Retrieves the tenant the request was authenticated against.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn current(&self) -> Result<CurrentTenant, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/tenant/currentTenant")
            .accept(MediaType::CurrentTenant)
            .build()?;

        self.http_client.request(request).await?.decode()
    }
}
