//! Alarm resource representations.
//!
//! Alarms signal conditions on a device that require human intervention
//! (e.g., a battery running low). They carry a lifecycle [`AlarmStatus`],
//! a [`AlarmSeverity`], and a de-duplication `count`: posting an alarm with
//! the same `type` and `source` as an active alarm increments the existing
//! alarm's count instead of creating a new one.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::{PageStatistics, Source};

/// The lifecycle status of an alarm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlarmStatus {
    /// The alarm condition is present and unhandled.
    Active,
    /// An operator has acknowledged the alarm.
    Acknowledged,
    /// The alarm condition is gone.
    Cleared,
}

/// The severity of an alarm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlarmSeverity {
    /// The highest severity.
    Critical,
    /// A major problem.
    Major,
    /// A minor problem.
    Minor,
    /// A warning.
    Warning,
}

/// An alarm raised by or for a managed object.
///
/// When writing, only `type`, `time`, `text`, `source`, `status`,
/// `severity`, and custom fragments are transmitted; server-managed fields
/// are stripped (see [`Alarm::READ_ONLY_FIELDS`]). On update, the platform
/// additionally ignores everything but `text`, `status`, and `severity`.
///
/// # Example
///
/// ```rust
/// use cumulocity_api::models::{Alarm, AlarmSeverity, AlarmStatus, Source};
///
/// let alarm = Alarm {
///     alarm_type: Some("c8y_UnavailabilityAlarm".to_string()),
///     text: Some("No data received from device".to_string()),
///     source: Some(Source::by_id("4711")),
///     severity: Some(AlarmSeverity::Major),
///     status: Some(AlarmStatus::Active),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Alarm {
    /// The unique identifier of the alarm.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this alarm.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// When the alarm was created in the database.
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<FixedOffset>>,

    /// When the alarm condition occurred on the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<FixedOffset>>,

    /// The alarm type, used for de-duplication (e.g., `c8y_TamperAlarm`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub alarm_type: Option<String>,

    /// Human-readable alarm description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// The managed object the alarm originates from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    /// The lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AlarmStatus>,

    /// The severity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AlarmSeverity>,

    /// How many times this alarm occurred while active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// When the first occurrence of this alarm was recorded.
    #[serde(
        rename = "firstOccurrenceTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_occurrence_time: Option<DateTime<FixedOffset>>,

    /// Custom fragments carried alongside the standard fields.
    #[serde(flatten)]
    pub fragments: Map<String, Value>,
}

impl Alarm {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    pub const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "id",
        "self",
        "creationTime",
        "count",
        "firstOccurrenceTime",
    ];
}

/// A page of alarms.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlarmCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The alarms on this page.
    #[serde(default)]
    pub alarms: Vec<Alarm>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}
