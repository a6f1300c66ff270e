//! Managed object (inventory) resource representations.
//!
//! A managed object is the platform's generic representation of a device or
//! asset. Devices carry marker fragments (`c8y_IsDevice`) and capability
//! fragments (`c8y_Hardware`, supported operations, ...) which the SDK keeps
//! as raw JSON since their shape is open-ended. Parent/child relations are
//! expressed through reference collections.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::PageStatistics;

/// A managed object in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ManagedObject {
    /// The unique identifier of the managed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this managed object.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// When the managed object was created in the database.
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<FixedOffset>>,

    /// When the managed object was last updated.
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<FixedOffset>>,

    /// The name of the managed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The type of the managed object (e.g., `c8y_Linux`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    /// The username that owns this managed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Child devices of this managed object.
    #[serde(rename = "childDevices", skip_serializing_if = "Option::is_none")]
    pub child_devices: Option<ManagedObjectReferenceCollection>,

    /// Child assets of this managed object.
    #[serde(rename = "childAssets", skip_serializing_if = "Option::is_none")]
    pub child_assets: Option<ManagedObjectReferenceCollection>,

    /// Child additions of this managed object.
    #[serde(rename = "childAdditions", skip_serializing_if = "Option::is_none")]
    pub child_additions: Option<ManagedObjectReferenceCollection>,

    /// Custom fragments carried alongside the standard fields
    /// (including the parent reference collections on read).
    #[serde(flatten)]
    pub fragments: Map<String, Value>,
}

impl ManagedObject {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    ///
    /// Child and parent references are maintained through the dedicated
    /// reference endpoints, never by writing the object itself.
    pub const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "id",
        "self",
        "creationTime",
        "lastUpdated",
        "owner",
        "childDevices",
        "childAssets",
        "childAdditions",
        "deviceParents",
        "assetParents",
        "additionParents",
    ];
}

/// A reference to a managed object, used for child relations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ManagedObjectReference {
    /// Link to this reference.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// The referenced managed object.
    #[serde(rename = "managedObject", skip_serializing_if = "Option::is_none")]
    pub managed_object: Option<ManagedObject>,
}

/// A page of managed object references.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ManagedObjectReferenceCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The references on this page.
    #[serde(default)]
    pub references: Vec<ManagedObjectReference>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}

/// A page of managed objects.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ManagedObjectCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The managed objects on this page.
    #[serde(rename = "managedObjects", default)]
    pub managed_objects: Vec<ManagedObject>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_managed_object_deserialization() {
        let json = json!({
            "id": "4711",
            "self": "https://acme.cumulocity.com/inventory/managedObjects/4711",
            "name": "Pump #3",
            "type": "c8y_Linux",
            "owner": "device_pump3",
            "creationTime": "2024-01-15T09:00:00.000Z",
            "c8y_IsDevice": {},
            "c8y_Hardware": {"model": "RPi4", "serialNumber": "A1B2"},
            "childDevices": {
                "references": [
                    {"managedObject": {"id": "4712", "name": "Valve"}}
                ]
            }
        });

        let object: ManagedObject = serde_json::from_value(json).unwrap();
        assert_eq!(object.id.as_deref(), Some("4711"));
        assert_eq!(object.object_type.as_deref(), Some("c8y_Linux"));
        assert!(object.fragments.contains_key("c8y_IsDevice"));
        assert_eq!(object.fragments["c8y_Hardware"]["model"], "RPi4");

        let children = object.child_devices.unwrap();
        assert_eq!(children.references.len(), 1);
        assert_eq!(
            children.references[0]
                .managed_object
                .as_ref()
                .unwrap()
                .id
                .as_deref(),
            Some("4712")
        );
    }

    #[test]
    fn test_managed_object_collection_array_key() {
        let json = json!({
            "managedObjects": [{"id": "1"}, {"id": "2"}],
            "statistics": {"pageSize": 2, "currentPage": 1}
        });

        let collection: ManagedObjectCollection = serde_json::from_value(json).unwrap();
        assert_eq!(collection.managed_objects.len(), 2);
    }

    #[test]
    fn test_reference_serializes_object_id() {
        let reference = ManagedObjectReference {
            self_url: None,
            managed_object: Some(ManagedObject {
                id: Some("4712".to_string()),
                ..Default::default()
            }),
        };

        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json, json!({"managedObject": {"id": "4712"}}));
    }
}
