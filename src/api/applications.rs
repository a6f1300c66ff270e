//! Application API client.

use std::sync::Arc;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{Application, ApplicationCollection};

/// Client for the application endpoints under `/application`.
///
/// Obtained from
/// [`CumulocityClient::applications`](crate::api::CumulocityClient::applications).
#[derive(Debug, Clone)]
pub struct ApplicationsApi {
    http_client: Arc<HttpClient>,
}

impl ApplicationsApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of applications visible to the tenant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn list(&self, paging: &PagingParams) -> Result<ApplicationCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/application/applications")
            .accept(MediaType::ApplicationCollection)
            .query(serialize_query(paging)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single application by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, id: &str) -> Result<Application, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("/application/applications/{id}"))
                .accept(MediaType::Application)
                .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Registers a new application.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn create(&self, application: &Application) -> Result<Application, HttpError> {
        let body = to_transmission_json(application, Application::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Post, "/application/applications")
            .body(body)
            .content_type(MediaType::Application)
            .accept(MediaType::Application)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates an existing application.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update(
        &self,
        id: &str,
        application: &Application,
    ) -> Result<Application, HttpError> {
        let body = to_transmission_json(application, Application::READ_ONLY_FIELDS)?;
        let request =
            HttpRequest::builder(HttpMethod::Put, format!("/application/applications/{id}"))
                .body(body)
                .content_type(MediaType::Application)
                .accept(MediaType::Application)
                .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Deletes an application.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/application/applications/{id}"),
        )
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Clones an application owned by another tenant into the current
    /// tenant, returning the copy.
    ///
    /// The clone's name and key are prefixed with `clone` by the
    /// platform to avoid collisions.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn copy(&self, id: &str) -> Result<Application, HttpError> {
        // The clone endpoint takes no body despite being a POST.
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("/application/applications/{id}/clone"),
        )
        .body(serde_json::json!({}))
        .content_type(MediaType::Json)
        .accept(MediaType::Application)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves applications with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn by_name(&self, name: &str) -> Result<ApplicationCollection, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/application/applicationsByName/{name}"),
        )
        .accept(MediaType::ApplicationCollection)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves applications owned by the given tenant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn by_tenant(&self, tenant_id: &str) -> Result<ApplicationCollection, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/application/applicationsByTenant/{tenant_id}"),
        )
        .accept(MediaType::ApplicationCollection)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves applications available to the given user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn by_user(&self, username: &str) -> Result<ApplicationCollection, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/application/applicationsByUser/{username}"),
        )
        .accept(MediaType::ApplicationCollection)
        .build()?;

        self.http_client.request(request).await?.decode()
    }
}
