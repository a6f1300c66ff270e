//! Event resource representations.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::{PageStatistics, Source};

/// An event reported by or for a managed object.
///
/// Events record things that happened on a device (a door opened, a
/// geofence was crossed) without the alarm lifecycle. Arbitrary fragments
/// ride along in `fragments`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Event {
    /// The unique identifier of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this event.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// When the event was created in the database.
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<FixedOffset>>,

    /// When the event was last updated.
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<FixedOffset>>,

    /// When the event occurred on the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<FixedOffset>>,

    /// The event type (e.g., `c8y_LocationUpdate`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// Human-readable event description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// The managed object the event originates from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    /// Custom fragments carried alongside the standard fields.
    #[serde(flatten)]
    pub fragments: Map<String, Value>,
}

impl Event {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    pub const READ_ONLY_FIELDS: &'static [&'static str] =
        &["id", "self", "creationTime", "lastUpdated"];
}

/// A page of events.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The events on this page.
    #[serde(default)]
    pub events: Vec<Event>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}
