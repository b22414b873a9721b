// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP error code mapping to failure reasons.
//!
//! This module maps HTTP status codes from the PowerDNS API to short reason
//! codes and human-readable messages. Both end up in the per-item failure
//! recorded by the reconciler and in the structured log line for that item.
//!
//! # Usage
//!
//! ```rust
//! use pdns_data_manager::http_errors::map_http_error_to_reason;
//!
//! let (reason, message) = map_http_error_to_reason(404);
//! assert_eq!(reason, "NotFound");
//!
//! let (reason, message) = map_http_error_to_reason(500);
//! assert_eq!(reason, "ServerError");
//! ```

use crate::dns_errors::ApiError;

/// Malformed payload or invalid zone/record data (400)
pub const REASON_BAD_REQUEST: &str = "BadRequest";
/// API key missing, wrong, or not permitted (401/403)
pub const REASON_AUTH_FAILED: &str = "AuthFailed";
/// Zone or server id does not exist (404)
pub const REASON_NOT_FOUND: &str = "NotFound";
/// Zone already exists or conflicting rrset (409)
pub const REASON_CONFLICT: &str = "Conflict";
/// Semantically invalid request, e.g. CNAME next to other data (422)
pub const REASON_UNPROCESSABLE: &str = "Unprocessable";
/// Internal server error (500)
pub const REASON_SERVER_ERROR: &str = "ServerError";
/// Proxy or gateway in front of the API failed (502/503/504)
pub const REASON_GATEWAY_ERROR: &str = "GatewayError";
/// No HTTP response at all (connection refused, DNS failure, timeout)
pub const REASON_UNREACHABLE: &str = "Unreachable";
/// Success status other than the one the call requires
pub const REASON_UNEXPECTED_STATUS: &str = "UnexpectedStatus";
/// Anything else
pub const REASON_UNEXPECTED: &str = "Unexpected";

/// Map HTTP status code to reason and message.
///
/// # HTTP Code Mapping
///
/// | HTTP Code | Reason |
/// |-----------|--------|
/// | 400 | `BadRequest` |
/// | 401, 403 | `AuthFailed` |
/// | 404 | `NotFound` |
/// | 409 | `Conflict` |
/// | 422 | `Unprocessable` |
/// | 500 | `ServerError` |
/// | 502, 503, 504 | `GatewayError` |
/// | Other | `Unexpected` |
#[must_use]
pub fn map_http_error_to_reason(status_code: u16) -> (&'static str, String) {
    match status_code {
        400 => (
            REASON_BAD_REQUEST,
            "Invalid request to PowerDNS API (400)".into(),
        ),
        401 => (
            REASON_AUTH_FAILED,
            "PowerDNS API authentication required, check the API key (401)".into(),
        ),
        403 => (
            REASON_AUTH_FAILED,
            "PowerDNS API authorization failed (403)".into(),
        ),
        404 => (
            REASON_NOT_FOUND,
            "Zone or server not found in PowerDNS (404)".into(),
        ),
        409 => (
            REASON_CONFLICT,
            "Conflicting zone or rrset in PowerDNS (409)".into(),
        ),
        422 => (
            REASON_UNPROCESSABLE,
            "PowerDNS rejected the zone or rrset data (422)".into(),
        ),
        500 => (
            REASON_SERVER_ERROR,
            "PowerDNS API internal error (500)".into(),
        ),
        502 => (
            REASON_GATEWAY_ERROR,
            "Bad gateway reaching PowerDNS (502)".into(),
        ),
        503 => (
            REASON_GATEWAY_ERROR,
            "PowerDNS service unavailable (503)".into(),
        ),
        504 => (
            REASON_GATEWAY_ERROR,
            "Gateway timeout reaching PowerDNS (504)".into(),
        ),
        _ => (
            REASON_UNEXPECTED,
            format!("Unexpected HTTP status from PowerDNS ({status_code})"),
        ),
    }
}

/// Map an [`ApiError`] to reason and message.
///
/// Errors without a status code (transport failures, timeouts) map to
/// [`REASON_UNREACHABLE`].
#[must_use]
pub fn map_api_error(error: &ApiError) -> (&'static str, String) {
    match error {
        ApiError::Http { status, .. } => map_http_error_to_reason(*status),
        ApiError::UnexpectedStatus {
            expected, status, ..
        } => (
            REASON_UNEXPECTED_STATUS,
            format!("PowerDNS answered {status}, expected {expected}"),
        ),
        ApiError::Timeout { timeout_ms, .. } => (
            REASON_UNREACHABLE,
            format!("PowerDNS API did not answer within {timeout_ms}ms"),
        ),
        ApiError::Transport { .. } => (
            REASON_UNREACHABLE,
            "Cannot connect to PowerDNS API".into(),
        ),
        ApiError::InvalidConfig(_) => (REASON_UNEXPECTED, "Invalid API client setup".into()),
    }
}

/// One-line description of an API failure: mapped message followed by the raw error.
#[must_use]
pub fn describe_api_error(error: &ApiError) -> String {
    let (_, message) = map_api_error(error);
    format!("{message}: {error}")
}
