//! Configuration types for the Cumulocity API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with a Cumulocity tenant.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CumulocityConfig`]: The main configuration struct holding all SDK settings
//! - [`CumulocityConfigBuilder`]: A builder for constructing [`CumulocityConfig`] instances
//! - [`Credentials`]: HTTP Basic (tenant/user/password) or Bearer token credentials
//! - [`BaseUrl`]: A validated platform base URL
//! - [`TenantId`]: A validated tenant identifier
//! - [`Username`] / [`Password`]: Validated credential newtypes
//!
//! # Example
//!
//! ```rust
//! use cumulocity_api::{BaseUrl, Credentials, CumulocityConfig, Password, TenantId, Username};
//!
//! let config = CumulocityConfig::builder()
//!     .base_url(BaseUrl::new("https://acme.cumulocity.com").unwrap())
//!     .credentials(Credentials::basic(
//!         TenantId::new("t12345").unwrap(),
//!         Username::new("admin").unwrap(),
//!         Password::new("s3cret").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Password, TenantId, Username};

use crate::error::ConfigError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fmt;

/// Credentials used to authenticate against the platform.
///
/// The platform accepts HTTP Basic authentication with the tenant-qualified
/// user (`tenant/user:password`) and OAuth bearer tokens. The SDK does not
/// obtain tokens itself; callers supply whichever credential they hold.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP Basic authentication with a tenant-qualified username.
    Basic {
        /// The tenant the user belongs to.
        tenant: TenantId,
        /// The platform username.
        username: Username,
        /// The platform password.
        password: Password,
    },
    /// An OAuth bearer access token obtained elsewhere.
    Bearer(String),
}

impl Credentials {
    /// Convenience constructor for Basic credentials.
    #[must_use]
    pub const fn basic(tenant: TenantId, username: Username, password: Password) -> Self {
        Self::Basic {
            tenant,
            username,
            password,
        }
    }

    /// Creates Bearer credentials from an access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn bearer(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self::Bearer(token))
    }

    /// Renders the `Authorization` header value for these credentials.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::Basic {
                tenant,
                username,
                password,
            } => {
                let raw = format!("{tenant}/{username}:{}", password.as_ref());
                format!("Basic {}", BASE64.encode(raw))
            }
            Self::Bearer(token) => format!("Bearer {token}"),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic {
                tenant, username, ..
            } => f
                .debug_struct("Basic")
                .field("tenant", tenant)
                .field("username", username)
                .field("password", &"*****")
                .finish(),
            Self::Bearer(_) => f.write_str("Bearer(*****)"),
        }
    }
}

/// Configuration for the Cumulocity API SDK.
///
/// This struct holds all configuration needed for SDK operations: the
/// platform base URL, credentials, and optional request decoration.
///
/// # Thread Safety
///
/// `CumulocityConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use cumulocity_api::{BaseUrl, Credentials, CumulocityConfig};
///
/// let config = CumulocityConfig::builder()
///     .base_url(BaseUrl::new("https://acme.cumulocity.com").unwrap())
///     .credentials(Credentials::bearer("eyJ...").unwrap())
///     .application_key("my-app-key")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.application_key(), Some("my-app-key"));
/// ```
#[derive(Clone, Debug)]
pub struct CumulocityConfig {
    base_url: BaseUrl,
    credentials: Credentials,
    application_key: Option<String>,
    user_agent_prefix: Option<String>,
}

impl CumulocityConfig {
    /// Creates a new builder for constructing a `CumulocityConfig`.
    #[must_use]
    pub fn builder() -> CumulocityConfigBuilder {
        CumulocityConfigBuilder::new()
    }

    /// Returns the platform base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the configured credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the application key sent as `X-Cumulocity-Application-Key`,
    /// if configured.
    ///
    /// Requests carrying an application key are not billed against the
    /// tenant's device count.
    #[must_use]
    pub fn application_key(&self) -> Option<&str> {
        self.application_key.as_deref()
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`CumulocityConfig`] instances.
///
/// # Required Fields
///
/// - `base_url`
/// - `credentials`
#[derive(Clone, Debug, Default)]
pub struct CumulocityConfigBuilder {
    base_url: Option<BaseUrl>,
    credentials: Option<Credentials>,
    application_key: Option<String>,
    user_agent_prefix: Option<String>,
}

impl CumulocityConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the application key sent with every request.
    #[must_use]
    pub fn application_key(mut self, key: impl Into<String>) -> Self {
        self.application_key = Some(key.into());
        self
    }

    /// Sets a prefix prepended to the SDK User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `credentials` was not set.
    pub fn build(self) -> Result<CumulocityConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;

        Ok(CumulocityConfig {
            base_url,
            credentials,
            application_key: self.application_key,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_credentials() -> Credentials {
        Credentials::basic(
            TenantId::new("t12345").unwrap(),
            Username::new("admin").unwrap(),
            Password::new("s3cret").unwrap(),
        )
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = CumulocityConfig::builder()
            .credentials(basic_credentials())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = CumulocityConfig::builder()
            .base_url(BaseUrl::new("https://acme.cumulocity.com").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = CumulocityConfig::builder()
            .base_url(BaseUrl::new("https://acme.cumulocity.com").unwrap())
            .credentials(basic_credentials())
            .application_key("app-key")
            .user_agent_prefix("MyAgent/2.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://acme.cumulocity.com");
        assert_eq!(config.application_key(), Some("app-key"));
        assert_eq!(config.user_agent_prefix(), Some("MyAgent/2.0"));
    }

    #[test]
    fn test_basic_authorization_header() {
        // base64("t12345/admin:s3cret")
        let header = basic_credentials().authorization_header();
        assert_eq!(header, "Basic dDEyMzQ1L2FkbWluOnMzY3JldA==");
    }

    #[test]
    fn test_bearer_authorization_header() {
        let credentials = Credentials::bearer("token-abc").unwrap();
        assert_eq!(credentials.authorization_header(), "Bearer token-abc");
    }

    #[test]
    fn test_bearer_rejects_empty_token() {
        assert!(matches!(
            Credentials::bearer(""),
            Err(ConfigError::EmptyToken)
        ));
    }

    #[test]
    fn test_credentials_debug_masks_secrets() {
        let debug = format!("{:?}", basic_credentials());
        assert!(debug.contains("t12345"));
        assert!(debug.contains("admin"));
        assert!(!debug.contains("s3cret"));

        let debug = format!("{:?}", Credentials::bearer("token-abc").unwrap());
        assert!(!debug.contains("token-abc"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CumulocityConfig>();
    }
}
