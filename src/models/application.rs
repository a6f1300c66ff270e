//! Application resource representations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::common::PageStatistics;

/// An application hosted on or registered with the platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Application {
    /// The unique identifier of the application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this application.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// The application name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The application key used to identify requests from this application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The application type (`HOSTED`, `EXTERNAL`, `MICROSERVICE`, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,

    /// Who may subscribe: `MARKET` or `PRIVATE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// The context path the application is served under.
    #[serde(rename = "contextPath", skip_serializing_if = "Option::is_none")]
    pub context_path: Option<String>,

    /// The tenant that owns this application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Value>,
}

impl Application {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    pub const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "self", "owner"];
}

/// A page of applications.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApplicationCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The applications on this page.
    #[serde(default)]
    pub applications: Vec<Application>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_application_deserialization() {
        let json = json!({
            "id": "105",
            "name": "cockpit",
            "key": "cockpit-application-key",
            "type": "HOSTED",
            "availability": "MARKET",
            "contextPath": "cockpit",
            "owner": {"tenant": {"id": "management"}}
        });

        let application: Application = serde_json::from_value(json).unwrap();
        assert_eq!(application.name.as_deref(), Some("cockpit"));
        assert_eq!(application.application_type.as_deref(), Some("HOSTED"));
        assert_eq!(application.owner.unwrap()["tenant"]["id"], "management");
    }

    #[test]
    fn test_application_collection_array_key() {
        let json = json!({"applications": [{"id": "1"}, {"id": "2"}]});
        let collection: ApplicationCollection = serde_json::from_value(json).unwrap();
        assert_eq!(collection.applications.len(), 2);
    }
}
