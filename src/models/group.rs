//! User group and role representations.

use serde::{Deserialize, Serialize};

use crate::models::common::PageStatistics;

/// A user group within a tenant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Group {
    /// The unique identifier of the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Link to this group.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// The group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Group {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    pub const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "self"];

    /// Creates a group with the given name, ready to be created.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            self_url: None,
            name: Some(name.into()),
        }
    }
}

/// A permission role (e.g., `ROLE_ALARM_READ`).
///
/// Roles are defined by the platform and cannot be created or modified;
/// they are only assigned to users and groups.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Role {
    /// The role identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this role.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// The role name, identical to the identifier in practice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A page of groups.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GroupCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The groups on this page.
    #[serde(default)]
    pub groups: Vec<Group>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}

/// A page of roles.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoleCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The roles on this page.
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_named_serializes_only_name() {
        let group = Group::named("operators");
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json, json!({"name": "operators"}));
    }

    #[test]
    fn test_group_deserialization() {
        let json = json!({
            "id": 12,
            "self": "https://acme.cumulocity.com/user/t12345/groups/12",
            "name": "operators"
        });

        let group: Group = serde_json::from_value(json).unwrap();
        assert_eq!(group.id, Some(12));
        assert_eq!(group.name.as_deref(), Some("operators"));
    }

    #[test]
    fn test_role_collection_array_key() {
        let json = json!({
            "roles": [
                {"id": "ROLE_ALARM_READ", "name": "ROLE_ALARM_READ"},
                {"id": "ROLE_ALARM_ADMIN", "name": "ROLE_ALARM_ADMIN"}
            ]
        });

        let collection: RoleCollection = serde_json::from_value(json).unwrap();
        assert_eq!(collection.roles.len(), 2);
    }
}
