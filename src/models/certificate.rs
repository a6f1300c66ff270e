//! Trusted device certificate representations.

use serde::{Deserialize, Serialize};

use crate::models::common::PageStatistics;

/// A trusted CA certificate registered for device authentication.
///
/// Devices presenting client certificates signed by a trusted certificate
/// can authenticate against the platform without per-device credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TrustedCertificate {
    /// The certificate fingerprint, used as its identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Link to this certificate.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// A human readable name for the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the certificate is `ENABLED` or `DISABLED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether devices may auto-register through this certificate.
    #[serde(
        rename = "autoRegistrationEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_registration_enabled: Option<bool>,

    /// The certificate in PEM format, without the BEGIN/END markers.
    #[serde(rename = "certInPemFormat", skip_serializing_if = "Option::is_none")]
    pub cert_in_pem_format: Option<String>,

    /// The signature algorithm.
    #[serde(rename = "algorithmName", skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,

    /// The certificate issuer distinguished name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// The certificate subject distinguished name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// The start of the validity period.
    #[serde(rename = "notBefore", skip_serializing_if = "Option::is_none")]
    pub not_before: Option<String>,

    /// The end of the validity period.
    #[serde(rename = "notAfter", skip_serializing_if = "Option::is_none")]
    pub not_after: Option<String>,

    /// The certificate serial number.
    #[serde(rename = "serialNumber", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// The X.509 version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl TrustedCertificate {
    /// Top-level fields managed by the server, removed from outgoing bodies.
    ///
    /// Everything derived from the PEM content is read-only; only `name`,
    /// `status`, `autoRegistrationEnabled`, and the PEM itself are writable.
    pub const READ_ONLY_FIELDS: &'static [&'static str] = &[
        "self",
        "fingerprint",
        "algorithmName",
        "issuer",
        "subject",
        "notBefore",
        "notAfter",
        "serialNumber",
        "version",
    ];
}

/// A page of trusted certificates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrustedCertificateCollection {
    /// Link to this page.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,

    /// Link to the next page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// Link to the previous page, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// The certificates on this page.
    #[serde(default)]
    pub certificates: Vec<TrustedCertificate>,

    /// Paging statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<PageStatistics>,
}
