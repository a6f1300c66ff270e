//! Trusted certificate API client.

use std::sync::Arc;

use crate::api::body::to_transmission_json;
use crate::api::query::{serialize_query, PagingParams};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, MediaType};
use crate::models::{TrustedCertificate, TrustedCertificateCollection};

/// Client for the trusted certificate endpoints under
/// `/tenant/tenants/{tenantId}/trusted-certificates`.
///
/// These endpoints predate the vendor media types and speak plain
/// `application/json`.
///
/// Obtained from
/// [`CumulocityClient::trusted_certificates`](crate::api::CumulocityClient::trusted_certificates).
#[derive(Debug, Clone)]
pub struct TrustedCertificatesApi {
    http_client: Arc<HttpClient>,
}

impl TrustedCertificatesApi {
    pub(crate) fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Retrieves a page of trusted certificates of a tenant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn list(
        &self,
        tenant_id: &str,
        paging: &PagingParams,
    ) -> Result<TrustedCertificateCollection, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/tenant/tenants/{tenant_id}/trusted-certificates"),
        )
        .accept(MediaType::Json)
        .query(serialize_query(paging)?)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Retrieves a single certificate by its fingerprint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn get(
        &self,
        tenant_id: &str,
        fingerprint: &str,
    ) -> Result<TrustedCertificate, HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            format!("/tenant/tenants/{tenant_id}/trusted-certificates/{fingerprint}"),
        )
        .accept(MediaType::Json)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Uploads a new trusted certificate.
    ///
    /// `name`, `status`, and `cert_in_pem_format` are required; the
    /// platform derives the fingerprint and the X.509 metadata.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response,
    /// including 409 when the certificate is already trusted.
    pub async fn upload(
        &self,
        tenant_id: &str,
        certificate: &TrustedCertificate,
    ) -> Result<TrustedCertificate, HttpError> {
        let body = to_transmission_json(certificate, TrustedCertificate::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(
            HttpMethod::Post,
            format!("/tenant/tenants/{tenant_id}/trusted-certificates"),
        )
        .body(body)
        .content_type(MediaType::Json)
        .accept(MediaType::Json)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Updates a certificate's name, status, or auto-registration flag.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn update(
        &self,
        tenant_id: &str,
        fingerprint: &str,
        certificate: &TrustedCertificate,
    ) -> Result<TrustedCertificate, HttpError> {
        let body = to_transmission_json(certificate, TrustedCertificate::READ_ONLY_FIELDS)?;
        let request = HttpRequest::builder(
            HttpMethod::Put,
            format!("/tenant/tenants/{tenant_id}/trusted-certificates/{fingerprint}"),
        )
        .body(body)
        .content_type(MediaType::Json)
        .accept(MediaType::Json)
        .build()?;

        self.http_client.request(request).await?.decode()
    }

    /// Removes a certificate from the trust store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on network failure or a non-2xx response.
    pub async fn delete(&self, tenant_id: &str, fingerprint: &str) -> Result<(), HttpError> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/tenant/tenants/{tenant_id}/trusted-certificates/{fingerprint}"),
        )
        .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }
}
