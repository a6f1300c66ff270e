//! Device control (operation) API client.

use std::sync::Arc;

use serde::Serialize;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{Operation, OperationCollection, OperationStatus};

/// Filter criteria for operation collection requests.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationFilter {
    /// Restrict to operations addressed to devices of this agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,

    /// Restrict to operations addressed to this device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// Restrict to operations in this execution status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OperationStatus>,

    /// Restrict to operations carrying this fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_type: Option<String>,

    /// Restrict to operations created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,

    /// Restrict to operations created before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,

    /// Return oldest operations first instead of newest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert: Option<bool>,

    /// Paging controls.
    #[serde(flatten)]
    pub paging: PagingParams,
}

/// Client for the device control endpoints under `/devicecontrol`.
///
/// Obtained from
/// [`CumulocityClient::operations`](crate::api::CumulocityClient::operations).
#[derive(Debug, Clone)]
pub struct OperationsApi {
    http_client: Arc<HttpClient>,
}

impl OperationsApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of operations matching the filter.
    ///
    /// Agents typically poll with `device_id` and `status: PENDING` to
    /// pick up work addressed to their devices.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn list(&self, filter: &OperationFilter) -> Result<OperationCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/devicecontrol/operations")
            .accept(MediaType::OperationCollection)
            .query(serialize_query(filter)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single operation by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, id: &str) -> Result<Operation, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("/devicecontrol/operations/{id}"))
                .accept(MediaType::Operation)
                .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Creates a new operation addressed to a device.
    ///
    /// The operation starts in `PENDING` status; `device_id` and at least
    /// one instruction fragment are required.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn create(&self, operation: &Operation) -> Result<Operation, HttpError> {
        let body = to_transmission_json(operation, Operation::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Post, "/devicecontrol/operations")
            .body(body)
            .content_type(MediaType::Operation)
            .accept(MediaType::Operation)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates an operation, typically to report execution progress by
    /// moving its status to `EXECUTING`, `SUCCESSFUL`, or `FAILED`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update(&self, id: &str, operation: &Operation) -> Result<Operation, HttpError> {
        let body = to_transmission_json(operation, Operation::READ_ONLY_FIELDS)?;
        let request =
            HttpRequest::builder(HttpMethod::Put, format!("/devicecontrol/operations/{id}"))
                .body(body)
                .content_type(MediaType::Operation)
                .accept(MediaType::Operation)
                .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Deletes every operation matching the filter.
    ///
    /// An empty filter deletes all operations of the tenant, so callers
    /// should pass at least one restriction.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete_all(&self, filter: &OperationFilter) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, "/devicecontrol/operations")
            .query(serialize_query(filter)?)
            .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_status_serializes_uppercase() {
        let filter = OperationFilter {
            device_id: Some("4711".to_string()),
            status: Some(OperationStatus::Pending),
            ..OperationFilter::default()
        };

        let params = serialize_query(&filter).unwrap();
        assert!(params.contains(&("deviceId".to_string(), "4711".to_string())));
        assert!(params.contains(&("status".to_string(), "PENDING".to_string())));
    }

    #[test]
    fn test_agent_filter_param() {
        let filter = OperationFilter {
            agent_id: Some("2480".to_string()),
            ..OperationFilter::default()
        };

        let params = serialize_query(&filter).unwrap();
        assert_eq!(params, vec![("agentId".to_string(), "2480".to_string())]);
    }
}
