//! Device control operation representations.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::PageStatistics;

/// The execution status of a device control operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationStatus {
    /// The operation is queued for the device.
    Pending,
    /// The device is executing the operation.
    Executing,
    /// The device completed the operation.
    Successful,
    /// The device failed to execute the operation.
    Failed,
}

/// An operation to be executed on a device.
///
/// The actual instruction is a fragment (e.g., `c8y_Restart`,
/// `c8y_Command`) kept as raw JSON in `fragments`. Agents poll for
/// `PENDING` operations addressed to their devices and report progress by
/// updating `status`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Operation {
    /// The unique identifier of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this operation.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// When the operation was created in the database.
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<FixedOffset>>,

    /// The ID of the device the operation is addressed to.
    #[serde(rename = "deviceId", skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// The execution status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OperationStatus>,

    /// Why the operation failed, when `status` is `FAILED`.
    #[serde(rename = "failureReason", skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,

    /// The instruction fragments.
    #[serde(flatten)]
    pub fragments: Map<String, Value>,
}

impl Operation {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    pub const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "self", "creationTime"];
}

/// A page of operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OperationCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The operations on this page.
    #[serde(default)]
    pub operations: Vec<Operation>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_deserialization() {
        let json = json!({
            "id": "9901",
            "deviceId": "4711",
            "status": "PENDING",
            "creationTime": "2024-03-01T10:00:00.000Z",
            "c8y_Restart": {}
        });

        let operation: Operation = serde_json::from_value(json).unwrap();
        assert_eq!(operation.device_id.as_deref(), Some("4711"));
        assert_eq!(operation.status, Some(OperationStatus::Pending));
        assert!(operation.fragments.contains_key("c8y_Restart"));
    }

    #[test]
    fn test_operation_status_wire_format() {
        assert_eq!(
            serde_json::to_value(OperationStatus::Successful).unwrap(),
            json!("SUCCESSFUL")
        );
    }

    #[test]
    fn test_operation_collection_array_key() {
        let json = json!({"operations": [{"id": "1"}]});
        let collection: OperationCollection = serde_json::from_value(json).unwrap();
        assert_eq!(collection.operations.len(), 1);
    }
}
