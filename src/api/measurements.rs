//! Measurement API client.

use std::sync::Arc;

use serde::Serialize;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{Measurement, MeasurementCollection};

/// Filter criteria for measurement collection requests.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementFilter {
    /// Restrict to measurements of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub measurement_type: Option<String>,

    /// Restrict to measurements originating from this managed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Restrict to measurements carrying this value fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_fragment_type: Option<String>,

    /// Restrict to measurements carrying this series within the fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_fragment_series: Option<String>,

    /// Restrict to measurements taken at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,

    /// Restrict to measurements taken before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,

    /// Return oldest measurements first instead of newest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert: Option<bool>,

    /// Paging controls.
    #[serde(flatten)]
    pub paging: PagingParams,
}

/// Client for the measurement endpoints under `/measurement`.
///
/// Obtained from
/// [`CumulocityClient::measurements`](crate::api::CumulocityClient::measurements).
#[derive(Debug, Clone)]
pub struct MeasurementsApi {
    http_client: Arc<HttpClient>,
}

impl MeasurementsApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of measurements matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn list(
        &self,
        filter: &MeasurementFilter,
    ) -> Result<MeasurementCollection, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/measurement/measurements")
            .accept(MediaType::MeasurementCollection)
            .query(serialize_query(filter)?)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single measurement by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(&self, id: &str) -> Result<Measurement, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("/measurement/measurements/{id}"))
                .accept(MediaType::Measurement)
                .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Creates a single measurement and returns the created representation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn create(&self, measurement: &Measurement) -> Result<Measurement, HttpError> {
        let body = to_transmission_json(measurement, Measurement::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(HttpMethod::Post, "/measurement/measurements")
            .body(body)
            .content_type(MediaType::Measurement)
            .accept(MediaType::Measurement)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Creates several measurements in one request.
    ///
    /// Uses the collection media type as `Content-Type`, which the
    /// platform interprets as a bulk insert. The response echoes the
    /// created measurements.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn create_many(
        &self,
        measurements: &[Measurement],
    ) -> Result<MeasurementCollection, HttpError> {
        let stripped = measurements
            .iter()
            .map(|m| to_transmission_json(m, Measurement::READ_ONLY_FIELDS))
            .collect::<Result<Vec<_>, _>>()?;

        let request = HttpRequest::builder(HttpMethod::Post, "/measurement/measurements")
            .body(serde_json::json!({ "measurements": stripped }))
            .content_type(MediaType::MeasurementCollection)
            .accept(MediaType::MeasurementCollection)
            .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Deletes a single measurement.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete(&self, id: &str) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/measurement/measurements/{id}"),
        )
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Deletes every measurement matching the filter.
    ///
    /// An empty filter deletes all measurements of the tenant, so callers
    /// should pass at least one restriction.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete_all(&self, filter: &MeasurementFilter) -> Result<(), HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, "/measurement/measurements")
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
    fn test_filter_value_fragment_params() {
        let filter = MeasurementFilter {
            source: Some("4711".to_string()),
            value_fragment_type: Some("c8y_Temperature".to_string()),
            value_fragment_series: Some("T".to_string()),
            ..MeasurementFilter::default()
        };

        let params = serialize_query(&filter).unwrap();
        assert!(params.contains(&("source".to_string(), "4711".to_string())));
        assert!(params.contains(&(
            "valueFragmentType".to_string(),
            "c8y_Temperature".to_string()
        )));
        assert!(params.contains(&("valueFragmentSeries".to_string(), "T".to_string())));
    }
}
