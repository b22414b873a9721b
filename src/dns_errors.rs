// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Configuration, HTTP API, and DNS operation error types.
//!
//! This module provides specialized error types for:
//! - Configuration loading and validation (fatal, abort before any API call)
//! - PowerDNS HTTP API transport and status failures
//! - Zone create/delete failures (isolated to one zone)
//! - Record upsert/delete failures (isolated to one record)
//!
//! Per-item errors are never propagated past the reconciler; they are recorded
//! in the [`crate::reconcilers::OperationOutcome`] and logged with the item identifier.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the desired-state document.
///
/// Any of these aborts the whole run before the first HTTP request is sent.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read from disk
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML/JSON or does not match the schema
    #[error("failed to parse config file {path}: {reason}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Parser error message (includes line/column when available)
        reason: String,
    },

    /// The document parsed to nothing at all
    #[error("no config settings loaded from {path}")]
    EmptyDocument {
        /// Path that was parsed
        path: PathBuf,
    },

    /// A primary zone was declared without any nameserver
    #[error("nameserver required for primary zone {zone}")]
    NameserverRequired {
        /// Offending zone name
        zone: String,
    },

    /// A secondary zone was declared without any upstream master
    #[error("master required for secondary zone {zone}")]
    MasterRequired {
        /// Offending zone name
        zone: String,
    },

    /// A record declared a zero TTL
    #[error("ttl must be positive for record {name} {record_type} in zone {zone}")]
    InvalidTtl {
        /// Zone owning the record
        zone: String,
        /// Record owner name
        name: String,
        /// Record type (e.g. "A")
        record_type: String,
    },
}

/// Errors returned by a single call against the PowerDNS HTTP API.
///
/// The HTTP status code is preserved so callers can log a precise reason
/// without parsing error strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        /// Request URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Response body, or a placeholder when it could not be read
        message: String,
    },

    /// The server answered with a success status other than the one the call requires
    #[error("unexpected HTTP {status} from {url} (expected {expected})")]
    UnexpectedStatus {
        /// Request URL
        url: String,
        /// Status the call requires
        expected: u16,
        /// Status actually received
        status: u16,
    },

    /// The request never produced a response within the configured timeout
    #[error("request to {url} timed out after {timeout_ms}ms")]
    Timeout {
        /// Request URL
        url: String,
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// Connection refused, DNS failure, TLS failure, and similar
    #[error("failed to send request to {url}: {reason}")]
    Transport {
        /// Request URL
        url: String,
        /// Transport error message
        reason: String,
    },

    /// Client construction failed (bad endpoint, bad header name or value)
    #[error("invalid API client configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// HTTP status code carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Timeout { .. } | Self::Transport { .. } | Self::InvalidConfig(_) => None,
        }
    }
}

/// Errors for zone-level operations.
///
/// On the create path a zone error skips every record of that zone; on the
/// delete path it is only logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// Zone creation was attempted and rejected, or did not return 201
    #[error("failed to create zone '{zone}': {reason}")]
    CreationFailed {
        /// Zone name
        zone: String,
        /// Failure reason (status mapping plus API message)
        reason: String,
    },

    /// Zone deletion was attempted and failed
    #[error("failed to delete zone '{zone}': {reason}")]
    DeletionFailed {
        /// Zone name
        zone: String,
        /// Failure reason
        reason: String,
    },
}

/// Errors for record (rrset) operations. Each one is isolated to a single rrset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// REPLACE changetype was rejected
    #[error("failed to create/update record {name} {record_type} in zone '{zone}': {reason}")]
    UpsertFailed {
        /// Zone owning the record
        zone: String,
        /// Record owner name
        name: String,
        /// Record type
        record_type: String,
        /// Failure reason
        reason: String,
    },

    /// DELETE changetype was rejected
    #[error("failed to delete record {name} {record_type} in zone '{zone}': {reason}")]
    DeletionFailed {
        /// Zone owning the record
        zone: String,
        /// Record owner name
        name: String,
        /// Record type
        record_type: String,
        /// Failure reason
        reason: String,
    },
}

/// Composite error for any per-item failure recorded during a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// Zone-level failure
    #[error(transparent)]
    Zone(#[from] ZoneError),

    /// Record-level failure
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl DnsError {
    /// Short machine-friendly reason, used as a structured log field.
    #[must_use]
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Zone(ZoneError::CreationFailed { .. }) => "ZoneCreationFailed",
            Self::Zone(ZoneError::DeletionFailed { .. }) => "ZoneDeletionFailed",
            Self::Record(RecordError::UpsertFailed { .. }) => "RecordUpsertFailed",
            Self::Record(RecordError::DeletionFailed { .. }) => "RecordDeletionFailed",
        }
    }

    /// Returns true when the failure belongs to a zone rather than a record.
    #[must_use]
    pub fn is_zone_level(&self) -> bool {
        matches!(self, Self::Zone(_))
    }
}
