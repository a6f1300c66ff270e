//! Event API client.

use std::sync::Arc;

use serde::Serialize;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{Event, EventCollection};

/// Filter criteria for event collection requests.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    /// Restrict to events of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// Restrict to events originating from this managed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Restrict to events carrying this fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_type: Option<String>,

    /// Restrict to events occurring at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,

    /// Restrict to events occurring before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,

    /// Restrict to events created in the database at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<String>,

    /// Restrict to events created in the database before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<String>,

    /// Return oldest events first instead of newest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert: Option<bool>,

    /// Paging controls.
    #[serde(flatten)]
    pub paging: PagingParams,
}

/// Client for the event endpoints under `/event`.
///
/// Obtained from [`CumulocityClient::events`](crate::api::CumulocityClient::events).
#[derive(Debug, Clone)]
pub struct EventsApi {
    http_client: Arc<HttpClient>,
}

impl EventsApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of events matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn list(&self, filter: &EventFilter) -> Result<EventCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/event/events")
            .accept(MediaType::EventCollection)
            .query(serialize_query(filter)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single event by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, id: &str) -> Result<Event, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/event/events/{id}"))
            .accept(MediaType::Event)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Creates a new event and returns the created representation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn create(&self, event: &Event) -> Result<Event, HttpError> {
        let body = to_transmission_json(event, Event::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Post, "/event/events")
            .body(body)
            .content_type(MediaType::Event)
            .accept(MediaType::Event)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates an existing event's text or custom fragments.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update(&self, id: &str, event: &Event) -> Result<Event, HttpError> {
        let body = to_transmission_json(event, Event::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Put, format!("/event/events/{id}"))
            .body(body)
            .content_type(MediaType::Event)
            .accept(MediaType::Event)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Deletes a single event.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, format!("/event/events/{id}")).build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Deletes every event matching the filter.
    ///
    /// An empty filter deletes all events of the tenant, so callers should
    /// pass at least one restriction.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete_all(&self, filter: &EventFilter) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, "/event/events")
            .query(serialize_query(filter)?)
            .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }
}
