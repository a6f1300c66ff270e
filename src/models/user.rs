//! User resource representations.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::common::PageStatistics;
use crate::models::group::Role;

/// A user of a tenant.
///
/// `password` is write-only: it is sent when creating or updating a user
/// and never returned by the platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct User {
    /// The unique identifier of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this user.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// The login name.
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// The password, only meaningful on create/update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// The user's first name.
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The user's last name.
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The user's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The user's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the user may log in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Whether the user must reset the password at next login.
    #[serde(
        rename = "shouldResetPassword",
        skip_serializing_if = "Option::is_none"
    )]
    pub should_reset_password: Option<bool>,

    /// When the password was last changed.
    #[serde(rename = "lastPasswordChange", skip_serializing_if = "Option::is_none")]
    pub last_password_change: Option<DateTime<FixedOffset>>,
}

impl User {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    pub const READ_ONLY_FIELDS: &'static [&'static str] = &["id", "self", "lastPasswordChange"];
}

/// The currently authenticated user.
///
/// Distinct representation from [`User`]: the platform reports the
/// effective roles here and addresses it without a tenant prefix.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CurrentUser {
    /// The unique identifier of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this user.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// The login name.
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// The password, only meaningful on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// The user's first name.
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The user's last name.
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The user's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The user's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the password was last changed.
    #[serde(rename = "lastPasswordChange", skip_serializing_if = "Option::is_none")]
    pub last_password_change: Option<DateTime<FixedOffset>>,

    /// The roles this user holds, directly or through groups.
    #[serde(rename = "effectiveRoles", skip_serializing_if = "Option::is_none")]
    pub effective_roles: Option<Vec<Role>>,
}

impl CurrentUser {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    pub const READ_ONLY_FIELDS: &'static [&'static str] =
        &["id", "self", "lastPasswordChange", "effectiveRoles"];
}

/// A page of users.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The users on this page.
    #[serde(default)]
    pub users: Vec<User>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_deserialization() {
        let json = json!({
            "id": "jdoe",
            "self": "https://acme.cumulocity.com/user/t12345/users/jdoe",
            "userName": "jdoe",
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "enabled": true,
            "lastPasswordChange": "2024-01-01T00:00:00.000Z"
        });

        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.user_name.as_deref(), Some("jdoe"));
        assert_eq!(user.enabled, Some(true));
        assert!(user.password.is_none());
    }

    #[test]
    fn test_current_user_effective_roles() {
        let json = json!({
            "userName": "jdoe",
            "effectiveRoles": [
                {"id": "ROLE_ALARM_READ", "name": "ROLE_ALARM_READ"}
            ]
        });

        let current: CurrentUser = serde_json::from_value(json).unwrap();
        let roles = current.effective_roles.unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].id.as_deref(), Some("ROLE_ALARM_READ"));
    }

    #[test]
    fn test_user_collection_array_key() {
        let json = json!({"users": [{"userName": "a"}, {"userName": "b"}]});
        let collection: UserCollection = serde_json::from_value(json).unwrap();
        assert_eq!(collection.users.len(), 2);
    }
}
