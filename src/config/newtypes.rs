//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated platform base URL.
///
/// This newtype ensures the URL is an absolute http(s) URL and normalizes it
/// by stripping any trailing slash, so request paths can be appended directly.
///
/// # Accepted Formats
///
/// - `https://tenant.cumulocity.com`
/// - `https://tenant.cumulocity.com/` - normalized to drop the trailing slash
/// - `http://localhost:8111` - plain http, mostly useful for tests
///
/// # Example
///
/// ```rust
/// use cumulocity_api::BaseUrl;
///
/// let url = BaseUrl::new("https://acme.cumulocity.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://acme.cumulocity.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not start with
    /// `http://` or `https://`, or has no host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(url.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated tenant identifier.
///
/// Tenant IDs appear both in the Basic authorization header
/// (`tenant/user:password`) and in user-management resource paths
/// (`/user/{tenantId}/users`), so they must not contain path or credential
/// separators.
///
/// # Example
///
/// ```rust
/// use cumulocity_api::TenantId;
///
/// let tenant = TenantId::new("t12345").unwrap();
/// assert_eq!(tenant.as_ref(), "t12345");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a new validated tenant ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTenantId`] if the tenant ID is empty or
    /// contains `/`, `:` or whitespace.
    pub fn new(tenant: impl Into<String>) -> Result<Self, ConfigError> {
        let tenant = tenant.into();
        let invalid = tenant.is_empty()
            || tenant
                .chars()
                .any(|c| c == '/' || c == ':' || c.is_whitespace());
        if invalid {
            return Err(ConfigError::InvalidTenantId { tenant });
        }
        Ok(Self(tenant))
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TenantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TenantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated platform username.
///
/// # Example
///
/// ```rust
/// use cumulocity_api::Username;
///
/// let user = Username::new("device-bootstrap").unwrap();
/// assert_eq!(user.as_ref(), "device-bootstrap");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated platform password.
///
/// This newtype ensures the password is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the password value, displaying only
/// `Password(*****)` instead of the actual password.
///
/// # Example
///
/// ```rust
/// use cumulocity_api::Password;
///
/// let password = Password::new("s3cret").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}
