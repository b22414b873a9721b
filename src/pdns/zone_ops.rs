// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone and rrset HTTP API operations for PowerDNS.
//!
//! Every function here issues exactly one request. There is no retry logic:
//! a failed call is reported to the caller, which records it against the
//! item being reconciled.

use super::types::{CreateZoneRequest, DeleteZoneRequest, ProbeOutcome, RrsetPatch};
use crate::constants::API_PREFIX;
use crate::dns_errors::ApiError;
use crate::http_errors::describe_api_error;
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Build the API endpoint from protocol, host, and port.
///
/// Bare IPv6 hosts are wrapped in brackets. The returned string never ends
/// with a slash.
///
/// # Errors
///
/// Returns [`ApiError::InvalidConfig`] when the result is not an absolute
/// `http`/`https` URL with a host.
pub fn build_endpoint(protocol: &str, host: &str, port: u16) -> Result<String, ApiError> {
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]")
    } else {
        host.to_string()
    };

    let url = Url::parse(&format!("{protocol}://{host}:{port}"))
        .map_err(|e| ApiError::InvalidConfig(format!("invalid API endpoint: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidConfig(format!(
            "unsupported protocol '{}', expected http or https",
            url.scheme()
        )));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ApiError::InvalidConfig("API endpoint has no host".into()));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Zone collection URL for a server: `<endpoint>/api/v1/servers/<id>/zones`.
#[must_use]
pub fn zones_url(endpoint: &str, server_id: &str) -> String {
    format!(
        "{}{API_PREFIX}/servers/{server_id}/zones",
        endpoint.trim_end_matches('/')
    )
}

/// Zone id used in API paths.
///
/// PowerDNS keeps ASCII letters, digits, `.`, `-`, and `_`, and encodes every
/// other byte as `=XX` (uppercase hex), so `a/b.example.` becomes
/// `a=2Fb.example.`.
#[must_use]
pub fn zone_id(zone_name: &str) -> String {
    let mut id = String::with_capacity(zone_name.len());
    for byte in zone_name.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'-' | b'_') {
            id.push(char::from(byte));
        } else {
            let _ = write!(id, "={byte:02X}");
        }
    }
    id
}

/// Execute one request against the PowerDNS API.
///
/// Returns the HTTP status code on any 2xx answer.
///
/// # Errors
///
/// - [`ApiError::Http`] with the response body on a non-2xx answer
/// - [`ApiError::Timeout`] when no answer arrived within `timeout`
/// - [`ApiError::Transport`] for any other send failure
pub(crate) async fn pdns_request<T: Serialize + std::fmt::Debug>(
    client: &HttpClient,
    method: Method,
    url: &str,
    body: Option<&T>,
    timeout: Duration,
) -> Result<u16, ApiError> {
    debug!(
        method = %method,
        url = %url,
        body = ?body,
        "HTTP API request to PowerDNS"
    );

    let mut request = client.request(method.clone(), url);
    if let Some(body_data) = body {
        request = request.json(body_data);
    }

    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            ApiError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(
            method = %method,
            url = %url,
            status = %status,
            error = %error_text,
            "HTTP API request failed"
        );
        return Err(ApiError::Http {
            url: url.to_string(),
            status: status.as_u16(),
            message: error_text,
        });
    }

    debug!(
        method = %method,
        url = %url,
        status = %status,
        "HTTP API request successful"
    );

    Ok(status.as_u16())
}

/// Probe whether a zone exists with a single GET.
///
/// 2xx is [`ProbeOutcome::Present`], 404 is [`ProbeOutcome::Absent`], and
/// everything else is [`ProbeOutcome::Indeterminate`].
pub async fn probe_zone(client: &HttpClient, zone_url: &str, timeout: Duration) -> ProbeOutcome {
    match pdns_request(client, Method::GET, zone_url, None::<&()>, timeout).await {
        Ok(_) => {
            debug!(url = %zone_url, "Zone exists");
            ProbeOutcome::Present
        }
        Err(ApiError::Http { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
            debug!(url = %zone_url, "Zone does not exist");
            ProbeOutcome::Absent
        }
        Err(e) => {
            let reason = describe_api_error(&e);
            warn!(url = %zone_url, reason = %reason, "Cannot determine whether zone exists");
            ProbeOutcome::Indeterminate { reason }
        }
    }
}

/// Create a zone. Only HTTP 201 counts as success.
///
/// # Errors
///
/// Returns [`ApiError::UnexpectedStatus`] for any other 2xx, or the request error.
pub async fn create_zone(
    client: &HttpClient,
    zones_url: &str,
    request: &CreateZoneRequest,
    timeout: Duration,
) -> Result<(), ApiError> {
    let status = pdns_request(client, Method::POST, zones_url, Some(request), timeout).await?;

    if status == StatusCode::CREATED.as_u16() {
        Ok(())
    } else {
        Err(ApiError::UnexpectedStatus {
            url: zones_url.to_string(),
            expected: StatusCode::CREATED.as_u16(),
            status,
        })
    }
}

/// Apply rrset changes to a zone.
///
/// # Errors
///
/// Returns the request error on a non-2xx answer or transport failure.
pub async fn patch_rrsets(
    client: &HttpClient,
    zone_url: &str,
    patch: &RrsetPatch,
    timeout: Duration,
) -> Result<(), ApiError> {
    pdns_request(client, Method::PATCH, zone_url, Some(patch), timeout).await?;
    Ok(())
}

/// Delete a zone.
///
/// # Errors
///
/// Returns the request error on a non-2xx answer or transport failure.
pub async fn delete_zone(
    client: &HttpClient,
    zone_url: &str,
    zone_name: &str,
    timeout: Duration,
) -> Result<(), ApiError> {
    let body = DeleteZoneRequest {
        name: zone_name.to_string(),
    };
    pdns_request(client, Method::DELETE, zone_url, Some(&body), timeout).await?;
    Ok(())
}
