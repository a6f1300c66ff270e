//! Inventory (managed object) API client.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{
    ManagedObject, ManagedObjectCollection, ManagedObjectReference,
    ManagedObjectReferenceCollection,
};

/// Filter criteria for inventory collection requests.
///
/// `ids` is exclusive with the other criteria on the platform side; when
/// present it selects exactly the named objects.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManagedObjectFilter {
    /// Select exactly these objects by identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,

    /// Restrict to objects of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    /// Restrict to objects carrying this fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_type: Option<String>,

    /// Restrict to objects whose name or other text fields match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Restrict to objects owned by this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// An inventory query language expression, overriding the other
    /// criteria when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Whether to embed the child reference collections in each result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_children: Option<bool>,

    /// Omit child object names when embedding references, reducing
    /// payload size for large hierarchies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_children_names: Option<bool>,

    /// Paging controls.
    #[serde(flatten)]
    pub paging: PagingParams,
}

/// The child relation kinds of a managed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildRelation {
    Devices,
    Assets,
    Additions,
}

impl ChildRelation {
    const fn path_segment(self) -> &'static str {
        match self {
            Self::Devices => "childDevices",
            Self::Assets => "childAssets",
            Self::Additions => "childAdditions",
        }
    }
}

/// Client for the inventory endpoints under `/inventory`.
///
/// Obtained from
/// [`CumulocityClient::managed_objects`](crate::api::CumulocityClient::managed_objects).
#[derive(Debug, Clone)]
pub struct ManagedObjectsApi {
    http_client: Arc<HttpClient>,
}

impl ManagedObjectsApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of managed objects matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn list(
        &self,
        filter: &ManagedObjectFilter,
    ) -> Result<ManagedObjectCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/inventory/managedObjects")
            .accept(MediaType::ManagedObjectCollection)
            .query(serialize_query(filter)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single managed object by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, id: &str) -> Result<ManagedObject, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("/inventory/managedObjects/{id}"))
                .accept(MediaType::ManagedObject)
                .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Creates a new managed object and returns the created representation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn create(&self, object: &ManagedObject) -> Result<ManagedObject, HttpError> {
        let body = to_transmission_json(object, ManagedObject::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Post, "/inventory/managedObjects")
            .body(body)
            .content_type(MediaType::ManagedObject)
            .accept(MediaType::ManagedObject)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates a managed object. Absent fields are left untouched;
    /// fragments set to `null` in the body are removed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update(&self, id: &str, object: &ManagedObject) -> Result<ManagedObject, HttpError> {
        let body = to_transmission_json(object, ManagedObject::READ_ONLY_FIELDS)?;
        let request =
            HttpRequest::builder(HttpMethod::Put, format!("/inventory/managedObjects/{id}"))
                .body(body)
                .content_type(MediaType::ManagedObject)
                .accept(MediaType::ManagedObject)
                .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Deletes a managed object.
    ///
    /// With `cascade` set, child devices and child assets referenced only
    /// by this object are deleted along with it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete(&self, id: &str, cascade: bool) -> Result<(), HttpError> {
        let mut builder = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/inventory/managedObjects/{id}"),
        );
        if cascade {
            builder = builder.query_param("cascade", "true");
        }

        self.http_client.request(builder.build()?).await?;
        Ok(())
    }

    /// Retrieves a page of child device references of a managed object.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn child_devices(
        &self,
        id: &str,
        paging: &PagingParams,
    ) -> Result<ManagedObjectReferenceCollection, HttpError> {
        self.list_children(id, ChildRelation::Devices, paging).await
    }

    /// Retrieves a page of child asset references of a managed object.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn child_assets(
        &self,
        id: &str,
        paging: &PagingParams,
    ) -> Result<ManagedObjectReferenceCollection, HttpError> {
        self.list_children(id, ChildRelation::Assets, paging).await
    }

    /// Retrieves a page of child addition references of a managed object.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn child_additions(
        &self,
        id: &str,
        paging: &PagingParams,
    ) -> Result<ManagedObjectReferenceCollection, HttpError> {
        self.list_children(id, ChildRelation::Additions, paging)
            .await
    }

    /// Registers an existing managed object as a child device.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn assign_child_device(
        &self,
        parent_id: &str,
        child_id: &str,
    ) -> Result<ManagedObjectReference, HttpError> {
        self.assign_child(parent_id, ChildRelation::Devices, child_id)
            .await
    }

    /// Registers an existing managed object as a child asset.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn assign_child_asset(
        &self,
        parent_id: &str,
        child_id: &str,
    ) -> Result<ManagedObjectReference, HttpError> {
        self.assign_child(parent_id, ChildRelation::Assets, child_id)
            .await
    }

    /// Registers an existing managed object as a child addition.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn assign_child_addition(
        &self,
        parent_id: &str,
        child_id: &str,
    ) -> Result<ManagedObjectReference, HttpError> {
        self.assign_child(parent_id, ChildRelation::Additions, child_id)
            .await
    }

    /// Removes a child device reference. The child object itself survives.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn unassign_child_device(
        &self,
        parent_id: &str,
        child_id: &str,
    ) -> Result<(), HttpError> {
        self.unassign_child(parent_id, ChildRelation::Devices, child_id)
            .await
    }

    /// Removes a child asset reference. The child object itself survives.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn unassign_child_asset(
        &self,
        parent_id: &str,
        child_id: &str,
    ) -> Result<(), HttpError> {
        self.unassign_child(parent_id, ChildRelation::Assets, child_id)
            .await
    }

    /// Removes a child addition reference. The child object itself survives.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn unassign_child_addition(
        &self,
        parent_id: &str,
        child_id: &str,
    ) -> Result<(), HttpError> {
        self.unassign_child(parent_id, ChildRelation::Additions, child_id)
            .await
    }

    async fn list_children(
        &self,
        id: &str,
        relation: ChildRelation,
        paging: &PagingParams,
    ) -> Result<ManagedObjectReferenceCollection, HttpError> {
        let segment = relation.path_segment();
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/inventory/managedObjects/{id}/{segment}"),
        )
        .accept(MediaType::ManagedObjectReferenceCollection)
        .query(serialize_query(paging)?)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    async fn assign_child(
        &self,
        parent_id: &str,
        relation: ChildRelation,
        child_id: &str,
    ) -> Result<ManagedObjectReference, HttpError> {
        let segment = relation.path_segment();
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("/inventory/managedObjects/{parent_id}/{segment}"),
        )
        .body(json!({ "managedObject": { "id": child_id } }))
        .content_type(MediaType::ManagedObjectReference)
        .accept(MediaType::ManagedObjectReference)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    async fn unassign_child(
        &self,
        parent_id: &str,
        relation: ChildRelation,
        child_id: &str,
    ) -> Result<(), HttpError> {
        let segment = relation.path_segment();
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/inventory/managedObjects/{parent_id}/{segment}/{child_id}"),
        )
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }
}
