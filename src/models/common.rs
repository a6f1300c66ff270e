//! Shared wire types used across resource representations.

use serde::{Deserialize, Serialize};

/// Paging statistics reported inside every collection representation.
///
/// The platform pages collections server-side; the SDK passes
/// `pageSize`/`currentPage` through and reports back whatever the server
/// includes here. `totalPages`/`totalElements` are only present when the
/// caller asked for them (`withTotalPages`/`withTotalElements`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageStatistics {
    /// Maximum number of items on a page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// The current page number (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,

    /// Total number of pages, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,

    /// Total number of elements, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
}

/// The managed object an alarm, event, or measurement refers to.
///
/// Only `id` is required when writing; the platform fills in `name` and the
/// self link when reading.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Source {
    /// The managed object ID.
    pub id: String,

    /// The name of the managed object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Link to this source.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}

impl Source {
    /// Creates a source reference to the managed object with the given ID.
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            self_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_statistics_deserialization() {
        let json = json!({
            "pageSize": 5,
            "currentPage": 2,
            "totalPages": 10
        });

        let stats: PageStatistics = serde_json::from_value(json).unwrap();
        assert_eq!(stats.page_size, Some(5));
        assert_eq!(stats.current_page, Some(2));
        assert_eq!(stats.total_pages, Some(10));
        assert_eq!(stats.total_elements, None);
    }

    #[test]
    fn test_source_by_id_serializes_only_id() {
        let source = Source::by_id("4711");
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(json, json!({"id": "4711"}));
    }

    #[test]
    fn test_source_deserializes_server_fields() {
        let json = json!({
            "id": "4711",
            "name": "Pump #3",
            "self": "https://acme.cumulocity.com/inventory/managedObjects/4711"
        });

        let source: Source = serde_json::from_value(json).unwrap();
        assert_eq!(source.id, "4711");
        assert_eq!(source.name.as_deref(), Some("Pump #3"));
        assert!(source.self_url.unwrap().ends_with("/4711"));
    }
}
