//! Error types for the Cumulocity API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use cumulocity_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not-a-url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL (e.g., 'https://tenant.cumulocity.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Tenant ID is invalid.
    #[error("Invalid tenant ID '{tenant}'. Tenant IDs must be non-empty and must not contain '/' or whitespace.")]
    InvalidTenantId {
        /// The invalid tenant ID that was provided.
        tenant: String,
    },

    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide a valid platform username.")]
    EmptyUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide a valid platform password.")]
    EmptyPassword,

    /// Bearer token cannot be empty.
    #[error("Bearer token cannot be empty. Please provide a valid access token.")]
    EmptyToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://example.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://example.com"));
        assert!(message.contains("absolute http(s) URL"));
    }

    #[test]
    fn test_invalid_tenant_id_error_message() {
        let error = ConfigError::InvalidTenantId {
            tenant: "bad/tenant".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad/tenant"));
        assert!(message.contains("must not contain"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyUsername;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
