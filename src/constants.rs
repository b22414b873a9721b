// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the PowerDNS data manager.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// Version prefix of the PowerDNS HTTP API
pub const API_PREFIX: &str = "/api/v1";

/// Server identifier used in API paths when none is configured
pub const DEFAULT_SERVER_ID: &str = "localhost";

/// Header carrying the API key when none is configured
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Default URL scheme for the API endpoint
pub const DEFAULT_PROTOCOL: &str = "http";

/// Default per-request timeout (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Zone Kind Wire Names
// ============================================================================

/// Wire name for a primary zone
pub const ZONE_KIND_MASTER: &str = "MASTER";

/// Wire name for a secondary zone
pub const ZONE_KIND_SLAVE: &str = "SLAVE";

/// Wire name for a native zone (replicated by the backend, not by AXFR)
pub const ZONE_KIND_NATIVE: &str = "NATIVE";

// ============================================================================
// Logging Constants
// ============================================================================

/// Default log file name, created in the working directory
pub const DEFAULT_LOG_FILE: &str = "pdns-data-manager.log";

/// Environment variable selecting the log output format (`text` or `json`)
pub const LOG_FORMAT_ENV: &str = "RUST_LOG_FORMAT";

// ============================================================================
// Process Exit Codes
// ============================================================================

/// The requested operation completed and was reported successful
pub const EXIT_SUCCESS: u8 = 0;

/// The requested operation ran but was reported failed
pub const EXIT_OPERATION_FAILED: u8 = 1;

/// Configuration, validation, or setup failed before any API call
pub const EXIT_CONFIG_ERROR: u8 = 2;
