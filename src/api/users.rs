//! User management API client.

use std::sync::Arc;

use serde::Serialize;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{CurrentUser, User, UserCollection};

/// Filter criteria for user collection requests.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    /// Restrict to users whose login name contains this text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Restrict to members of these groups, by group identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,

    /// Restrict to users owned by this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Restrict to device users (those prefixed `device_`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_devices: Option<bool>,

    /// Include the number of subusers per user in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_subusers_count: Option<bool>,

    /// Paging controls.
    #[serde(flatten)]
    pub paging: PagingParams,
}

/// Client for the user endpoints under `/user`.
///
/// Most operations are scoped to a tenant, mirroring the platform's
/// `/user/{tenantId}/users` paths; management tenant credentials can
/// address subtenants this way. The current-user endpoints need no tenant.
///
/// Obtained from [`CumulocityClient::users`](crate::api::CumulocityClient::users).
#[derive(Debug, Clone)]
pub struct UsersApi {
    http_client: Arc<HttpClient>,
}

impl UsersApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of users of a tenant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn list(
        &self,
        tenant_id: &str,
        filter: &UserFilter,
    ) -> Result<UserCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/user/{tenant_id}/users"))
            .accept(MediaType::UserCollection)
            .query(serialize_query(filter)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, tenant_id: &str, user_id: &str) -> Result<User, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/user/{tenant_id}/users/{user_id}"),
        )
        .accept(MediaType::User)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Creates a new user in a tenant.
    ///
    /// `user_name` and `password` are required by the platform.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response,
    /// including 409 when the login name is taken.
    pub async fn create(&self, tenant_id: &str, user: &User) -> Result<User, HttpError> {
        let body = to_transmission_json(user, User::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Post, format!("/user/{tenant_id}/users"))
            .body(body)
            .content_type(MediaType::User)
            .accept(MediaType::User)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates an existing user. Setting `password` changes it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update(
        &self,
        tenant_id: &str,
        user_id: &str,
        user: &User,
    ) -> Result<User, HttpError> {
        let body = to_transmission_json(user, User::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(
            HttpMethod::Put,
            format!("/user/{tenant_id}/users/{user_id}"),
        )
        .body(body)
        .content_type(MediaType::User)
        .accept(MediaType::User)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Deletes a user from a tenant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete(&self, tenant_id: &str, user_id: &str) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/user/{tenant_id}/users/{user_id}"),
        )
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Retrieves the user the request was authenticated as, including the
    /// effective roles.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn current(&self) -> Result<CurrentUser, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/user/currentUser")
            .accept(MediaType::CurrentUser)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates the currently authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update_current(&self, user: &CurrentUser) -> Result<CurrentUser, HttpError> {
        let body = to_transmission_json(user, CurrentUser::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Put, "/user/currentUser")
            .body(body)
            .content_type(MediaType::CurrentUser)
            .accept(MediaType::CurrentUser)
            .build()?;

        self.http_client.request(request).await?.decode()
    }
}
