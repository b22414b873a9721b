// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! PowerDNS management via its administrative HTTP API.
//!
//! This module provides the client used by the reconcilers. It handles:
//!
//! - Probing zone existence
//! - Creating zones (primary, secondary, native)
//! - Replacing and deleting rrsets
//! - Deleting zones
//!
//! # Architecture
//!
//! [`DnsApi`] is the seam between the reconcilers and the server. [`PdnsClient`]
//! implements it over HTTP; every request carries the API key header and is
//! bounded by the configured timeout.
//!
//! # Example
//!
//! ```rust,no_run
//! use pdns_data_manager::pdns::{ApiConfig, DnsApi, PdnsClient};
//!
//! # async fn example() -> Result<(), pdns_data_manager::dns_errors::ApiError> {
//! let config = ApiConfig::new("http://127.0.0.1:8081", "secret");
//! let client = PdnsClient::new(&config)?;
//!
//! let outcome = client.probe_zone("example.com.").await;
//! println!("exists: {}", outcome.exists());
//! # Ok(())
//! # }
//! ```

pub mod types;
pub mod zone_ops;

#[cfg(test)]
mod types_tests;

pub use types::{
    ChangeType, CreateZoneRequest, DeleteZoneRequest, ProbeOutcome, Rrset, RrsetPatch,
    RrsetRecord,
};
pub use zone_ops::{build_endpoint, zone_id};

use crate::constants::{DEFAULT_API_KEY_HEADER, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_ID};
use crate::dns_errors::ApiError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Operations the reconcilers need from a DNS server.
#[async_trait::async_trait]
pub trait DnsApi: Send + Sync {
    /// Probe whether a zone exists.
    async fn probe_zone(&self, zone_name: &str) -> ProbeOutcome;

    /// Create a zone.
    async fn create_zone(&self, request: &CreateZoneRequest) -> Result<(), ApiError>;

    /// Apply rrset changes to an existing zone.
    async fn patch_rrsets(&self, zone_name: &str, patch: &RrsetPatch) -> Result<(), ApiError>;

    /// Delete a zone.
    async fn delete_zone(&self, zone_name: &str) -> Result<(), ApiError>;
}

/// Connection settings for [`PdnsClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base endpoint, e.g. `http://127.0.0.1:8081`
    pub endpoint: String,
    /// Server id in API paths
    pub server_id: String,
    /// API key value
    pub api_key: String,
    /// Header carrying the API key
    pub api_key_header: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ApiConfig {
    /// Settings with the default server id, header name, and timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            server_id: DEFAULT_SERVER_ID.to_string(),
            api_key: api_key.into(),
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for one PowerDNS server.
///
/// # Examples
///
/// ```rust
/// use pdns_data_manager::pdns::{ApiConfig, PdnsClient};
///
/// let client = PdnsClient::new(&ApiConfig::new("http://pdns:8081", "key")).unwrap();
/// assert_eq!(
///     client.zone_url("example.com."),
///     "http://pdns:8081/api/v1/servers/localhost/zones/example.com."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PdnsClient {
    /// HTTP client with the API key installed as a default header
    client: Arc<HttpClient>,
    /// `<endpoint>/api/v1/servers/<id>/zones`
    zones_url: String,
    timeout: Duration,
}

impl PdnsClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] when the header name or key value is
    /// not a valid HTTP header, or the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let header_name = HeaderName::from_bytes(config.api_key_header.as_bytes()).map_err(|e| {
            ApiError::InvalidConfig(format!(
                "invalid API key header name '{}': {e}",
                config.api_key_header
            ))
        })?;
        let mut header_value = HeaderValue::from_str(&config.api_key)
            .map_err(|e| ApiError::InvalidConfig(format!("invalid API key value: {e}")))?;
        header_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header_name, header_value);

        let client = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        let zones_url = zone_ops::zones_url(&config.endpoint, &config.server_id);
        debug!(
            zones_url = %zones_url,
            api_key_header = %config.api_key_header,
            timeout = ?config.timeout,
            "PowerDNS client created"
        );

        Ok(Self {
            client: Arc::new(client),
            zones_url,
            timeout: config.timeout,
        })
    }

    /// Zone collection URL.
    #[must_use]
    pub fn zones_url(&self) -> &str {
        &self.zones_url
    }

    /// URL of a single zone, with the name encoded as a PowerDNS zone id.
    #[must_use]
    pub fn zone_url(&self, zone_name: &str) -> String {
        format!("{}/{}", self.zones_url, zone_ops::zone_id(zone_name))
    }
}

#[async_trait::async_trait]
impl DnsApi for PdnsClient {
    async fn probe_zone(&self, zone_name: &str) -> ProbeOutcome {
        zone_ops::probe_zone(&self.client, &self.zone_url(zone_name), self.timeout).await
    }

    async fn create_zone(&self, request: &CreateZoneRequest) -> Result<(), ApiError> {
        zone_ops::create_zone(&self.client, &self.zones_url, request, self.timeout).await
    }

    async fn patch_rrsets(&self, zone_name: &str, patch: &RrsetPatch) -> Result<(), ApiError> {
        zone_ops::patch_rrsets(&self.client, &self.zone_url(zone_name), patch, self.timeout).await
    }

    async fn delete_zone(&self, zone_name: &str) -> Result<(), ApiError> {
        zone_ops::delete_zone(
            &self.client,
            &self.zone_url(zone_name),
            zone_name,
            self.timeout,
        )
        .await
    }
}
