//! Alarm API client.

use std::sync::Arc;

use serde::Serialize;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{Alarm, AlarmCollection, AlarmSeverity, AlarmStatus};

/// Filter criteria for alarm collection requests.
///
/// All fields are optional; absent fields place no restriction on the
/// result. Times are ISO 8601 date-time strings.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlarmFilter {
    /// Restrict to alarms with this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AlarmStatus>,

    /// Restrict to alarms with this severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AlarmSeverity>,

    /// Restrict to alarms originating from this managed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Restrict to alarms of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub alarm_type: Option<String>,

    /// Restrict to alarms created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,

    /// Restrict to alarms created before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,

    /// Restrict by whether the alarm has been cleared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,

    /// Also match alarms from child assets of `source`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_source_assets: Option<bool>,

    /// Also match alarms from child devices of `source`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_source_devices: Option<bool>,

    /// Paging controls.
    #[serde(flatten)]
    pub paging: PagingParams,
}

/// Client for the alarm endpoints under `/alarm`.
///
/// Obtained from [`CumulocityClient::alarms`](crate::api::CumulocityClient::alarms).
#[derive(Debug, Clone)]
pub struct AlarmsApi {
    http_client: Arc<HttpClient>,
}

impl AlarmsApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of alarms matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn list(&self, filter: &AlarmFilter) -> Result<AlarmCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/alarm/alarms")
            .accept(MediaType::AlarmCollection)
            .query(serialize_query(filter)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single alarm by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response,
    /// including 404 when no such alarm exists.
    pub async fn get(&self, id: &str) -> Result<Alarm, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, format!("/alarm/alarms/{id}"))
            .accept(MediaType::Alarm)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Creates a new alarm and returns the created representation.
    ///
    /// The platform deduplicates: posting an alarm whose type and source
    /// match an existing active alarm increments that alarm's `count`
    /// instead of creating a new one.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response,
    /// including 422 when required fields are missing.
    pub async fn create(&self, alarm: &Alarm) -> Result<Alarm, HttpError> {
        let body = to_transmission_json(alarm, Alarm::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Post, "/alarm/alarms")
            .body(body)
            .content_type(MediaType::Alarm)
            .accept(MediaType::Alarm)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates an existing alarm, typically to change its status or text.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update(&self, id: &str, alarm: &Alarm) -> Result<Alarm, HttpError> {
        let body = to_transmission_json(alarm, Alarm::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Put, format!("/alarm/alarms/{id}"))
            .body(body)
            .content_type(MediaType::Alarm)
            .accept(MediaType::Alarm)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates every alarm matching the filter in one request, e.g. to
    /// clear all active alarms of a device.
    ///
    /// The platform processes bulk updates asynchronously and may answer
    /// 202 when the update is still in progress.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update_all(&self, filter: &AlarmFilter, changes: &Alarm) -> Result<(), HttpError> {
        let body = to_transmission_json(changes, Alarm::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Put, "/alarm/alarms")
            .body(body)
            .content_type(MediaType::Alarm)
            .query(serialize_query(filter)?)
            .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Deletes every alarm matching the filter.
    ///
    /// An empty filter deletes all alarms of the tenant, so callers should
    /// pass at least one restriction.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete_all(&self, filter: &AlarmFilter) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, "/alarm/alarms")
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
    fn test_filter_serializes_enum_values_uppercase() {
        let filter = AlarmFilter {
            status: Some(AlarmStatus::Active),
            severity: Some(AlarmSeverity::Critical),
            ..AlarmFilter::default()
        };

        let params = serialize_query(&filter).unwrap();
        assert!(params.contains(&("status".to_string(), "ACTIVE".to_string())));
        assert!(params.contains(&("severity".to_string(), "CRITICAL".to_string())));
    }

    #[test]
    fn test_filter_renames_alarm_type_to_type() {
        let filter = AlarmFilter {
            alarm_type: Some("c8y_TemperatureAlarm".to_string()),
            ..AlarmFilter::default()
        };

        let params = serialize_query(&filter).unwrap();
        assert_eq!(
            params,
            vec![("type".to_string(), "c8y_TemperatureAlarm".to_string())]
        );
    }

    #[test]
    fn test_empty_filter_produces_no_params() {
        let params = serialize_query(&AlarmFilter::default()).unwrap();
        assert!(params.is_empty());
    }
}
