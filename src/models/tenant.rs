//! Tenant resource representations.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::common::PageStatistics;

/// A tenant of the platform.
///
/// Only management tenants may list or create tenants; regular credentials
/// can still read the current tenant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Tenant {
    /// The unique identifier of the tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to this tenant.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// The activation state (`ACTIVE` or `SUSPENDED`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The subdomain the tenant is served under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// The company the tenant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The username of the tenant administrator.
    #[serde(rename = "adminName", skip_serializing_if = "Option::is_none")]
    pub admin_name: Option<String>,

    /// The email address of the tenant administrator.
    #[serde(rename = "adminEmail", skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,

    /// The contact person for the tenant.
    #[serde(rename = "contactName", skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    /// The contact phone number.
    #[serde(rename = "contactPhone", skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    /// When the tenant was created.
    #[serde(rename = "creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<FixedOffset>>,
}

impl Tenant {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    pub const READ_ONLY_FIELDS: &'static [&'static str] =
        &["id", "self", "creationTime", "status"];
}

/// The tenant the request was authenticated against.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CurrentTenant {
    /// The tenant name (identifier).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Link to this tenant.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// The full domain the tenant is served under.
    #[serde(rename = "domainName", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    /// Whether this tenant may create subtenants.
    #[serde(
        rename = "allowedToCreateTenants",
        skip_serializing_if = "Option::is_none"
    )]
    pub allowed_to_create_tenants: Option<bool>,
}

/// A page of tenants.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TenantCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The tenants on this page.
    #[serde(default)]
    pub tenants: Vec<Tenant>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}
