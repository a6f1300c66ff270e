//! Measurement resource representations.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::{PageStatistics, Source};

/// A measurement sampled by a managed object.
///
/// The actual readings live in value fragments (e.g., `c8y_TemperatureMeasurement`
/// with nested series), which the SDK keeps as raw JSON in `fragments` since
/// their shape is device-specific.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Measurement {
    /// The unique identifier of the measurement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this measurement.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// When the measurement was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<FixedOffset>>,

    /// The measurement type (e.g., `c8y_TemperatureMeasurement`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub measurement_type: Option<String>,

    /// The managed object the measurement originates from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    /// Value fragments with the actual readings.
    #[serde(flatten)]
    pub fragments: Map<String, Value>,
}

impl Measurement {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    pub const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "self"];
}

/// A page of measurements.
///
/// Also used as the request body when posting several measurements at once.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MeasurementCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The measurements on this page.
    #[serde(default)]
    pub measurements: Vec<Measurement>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}
