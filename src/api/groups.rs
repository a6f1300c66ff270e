//! User group and role management API client.

use std::sync::Arc;

use serde_json::json;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{Group, GroupCollection, RoleCollection};

/// Client for the group and role endpoints under `/user`.
///
/// Group operations are scoped to a tenant like user operations. Roles
/// are platform-defined and global; they can only be listed and assigned.
///
/// Obtained from [`CumulocityClient::groups`](crate::api::CumulocityClient::groups).
#[derive(Debug, Clone)]
pub struct GroupsApi {
    http_client: Arc<HttpClient>,
}

impl GroupsApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of groups of a tenant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn list(
        &self,
        tenant_id: &str,
        paging: &PagingParams,
    ) -> Result<GroupCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/user/{tenant_id}/groups"))
            .accept(MediaType::GroupCollection)
            .query(serialize_query(paging)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single group by its numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, tenant_id: &str, group_id: u64) -> Result<Group, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/user/{tenant_id}/groups/{group_id}"),
        )
        .accept(MediaType::Group)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a group by its name.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get_by_name(&self, tenant_id: &str, name: &str) -> Result<Group, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/user/{tenant_id}/groupByName/{name}"),
        )
        .accept(MediaType::Group)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Creates a new group in a tenant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn create(&self, tenant_id: &str, group: &Group) -> Result<Group, HttpError> {
        let body = to_transmission_json(group, Group::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Post, format!("/user/{tenant_id}/groups"))
            .body(body)
            .content_type(MediaType::Group)
            .accept(MediaType::Group)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Renames an existing group.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update(
        &self,
        tenant_id: &str,
        group_id: u64,
        group: &Group,
    ) -> Result<Group, HttpError> {
        let body = to_transmission_json(group, Group::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(
            HttpMethod::Put,
            format!("/user/{tenant_id}/groups/{group_id}"),
        )
        .body(body)
        .content_type(MediaType::Group)
        .accept(MediaType::Group)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Deletes a group. Its members keep existing.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete(&self, tenant_id: &str, group_id: u64) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/user/{tenant_id}/groups/{group_id}"),
        )
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Adds a user to a group.
    ///
    /// The platform expects a user reference body carrying the user's
    /// `self` link, as returned by the user endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn add_user(
        &self,
        tenant_id: &str,
        group_id: u64,
        user_self_url: &str,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("/user/{tenant_id}/groups/{group_id}/users"),
        )
        .body(json!({ "user": { "self": user_self_url } }))
        .content_type(MediaType::UserReference)
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Removes a user from a group.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn remove_user(
        &self,
        tenant_id: &str,
        group_id: u64,
        user_id: &str,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/user/{tenant_id}/groups/{group_id}/users/{user_id}"),
        )
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Retrieves a page of the platform's permission roles.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn roles(&self, paging: &PagingParams) -> Result<RoleCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/user/roles")
            .accept(MediaType::RoleCollection)
            .query(serialize_query(paging)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Grants a role to a user directly.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn assign_role_to_user(
        &self,
        tenant_id: &str,
        user_id: &str,
        role_self_url: &str,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("/user/{tenant_id}/users/{user_id}/roles"),
        )
        .body(json!({ "role": { "self": role_self_url } }))
        .content_type(MediaType::RoleReference)
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Revokes a directly granted role from a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn unassign_role_from_user(
        &self,
        tenant_id: &str,
        user_id: &str,
        role_id: &str,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/user/{tenant_id}/users/{user_id}/roles/{role_id}"),
        )
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Grants a role to every member of a group.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn assign_role_to_group(
        &self,
        tenant_id: &str,
        group_id: u64,
        role_self_url: &str,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("/user/{tenant_id}/groups/{group_id}/roles"),
        )
        .body(json!({ "role": { "self": role_self_url } }))
        .content_type(MediaType::RoleReference)
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Revokes a role from a group.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn unassign_role_from_group(
        &self,
        tenant_id: &str,
        group_id: u64,
        role_id: &str,
    ) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/user/{tenant_id}/groups/{group_id}/roles/{role_id}"),
        )
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }
}
