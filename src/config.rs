// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Desired-state document: zones and records to reconcile.
//!
//! The document is read once at start-up and stays immutable for the whole run.
//!
//! # Example
//!
//! ```yaml
//! zones:
//!   - name: example.com.
//!     kind: MASTER
//!     nameservers:
//!       - ns1.example.com.
//!     records:
//!       - name: www.example.com.
//!         type: A
//!         ttl: 300
//!         disabled: false
//!         content:
//!           - 192.0.2.10
//!           - 192.0.2.11
//! ```

use crate::constants::{ZONE_KIND_MASTER, ZONE_KIND_NATIVE, ZONE_KIND_SLAVE};
use crate::dns_errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Role of a zone on the PowerDNS server.
///
/// Determines whether `nameservers` (primary, native) or `masters` (secondary)
/// is meaningful. Config files may use either the PowerDNS names or the
/// primary/secondary names, in any letter case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ZoneKind {
    /// Authoritative source for the zone; sends NOTIFY to secondaries.
    Primary,

    /// Replica pulling the zone from one or more masters via AXFR.
    Secondary,

    /// Standalone zone; replication is left to the database backend.
    Native,
}

impl ZoneKind {
    /// The kind name the PowerDNS API expects.
    #[must_use]
    pub fn api_name(self) -> &'static str {
        match self {
            Self::Primary => ZONE_KIND_MASTER,
            Self::Secondary => ZONE_KIND_SLAVE,
            Self::Native => ZONE_KIND_NATIVE,
        }
    }

    /// Whether this kind pulls its data from upstream masters.
    #[must_use]
    pub fn uses_masters(self) -> bool {
        matches!(self, Self::Secondary)
    }
}

impl TryFrom<String> for ZoneKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase().as_str() {
            "MASTER" | "PRIMARY" => Ok(Self::Primary),
            "SLAVE" | "SECONDARY" => Ok(Self::Secondary),
            "NATIVE" => Ok(Self::Native),
            _ => Err(format!(
                "unknown zone kind '{value}', expected one of MASTER, SLAVE, NATIVE"
            )),
        }
    }
}

impl From<ZoneKind> for String {
    fn from(kind: ZoneKind) -> Self {
        kind.api_name().to_string()
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

/// A named, typed rrset owned by a zone.
///
/// Identity on the API is the `(name, type)` pair. All `content` entries are
/// bundled into one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSpec {
    /// Fully-qualified owner name (e.g. "www.example.com.")
    pub name: String,

    /// Record type (e.g. "A", "MX", "TXT")
    #[serde(rename = "type")]
    pub record_type: String,

    /// Time to live in seconds; must be positive
    pub ttl: u32,

    /// Whether every record in the rrset is served disabled
    #[serde(default)]
    pub disabled: bool,

    /// One resource-record value per entry, in order
    #[serde(default)]
    pub content: Vec<String>,
}

/// A zone and the rrsets it should contain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSpec {
    /// Fully-qualified zone name, unique within a run (e.g. "example.com.")
    pub name: String,

    /// Zone role
    pub kind: ZoneKind,

    /// Authoritative nameservers; required for primary zones
    #[serde(default)]
    pub nameservers: Vec<String>,

    /// Upstream masters; required for secondary zones
    #[serde(default)]
    pub masters: Vec<String>,

    /// Rrsets to create/update or delete, in order
    #[serde(default)]
    pub records: Vec<RecordSpec>,
}

/// Top-level document shape: `{ zones: [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDocument {
    /// Absent or `null` means no zones
    #[serde(default)]
    pub zones: Option<Vec<ZoneSpec>>,
}

impl DataDocument {
    /// Consume the document and return its zones; absent or null yields an empty list.
    #[must_use]
    pub fn into_zones(self) -> Vec<ZoneSpec> {
        self.zones.unwrap_or_default()
    }
}

/// Parse a desired-state document from YAML (or JSON) text.
///
/// `path` is only used for error messages.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyDocument`] when the text holds no document at all,
/// and [`ConfigError::Parse`] when it does not match the expected shape.
pub fn parse_document(text: &str, path: &Path) -> Result<DataDocument, ConfigError> {
    let parsed: Option<DataDocument> =
        serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    parsed.ok_or_else(|| ConfigError::EmptyDocument {
        path: path.to_path_buf(),
    })
}

/// Read and parse the desired-state document, returning its zones.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] when the file cannot be read, otherwise see
/// [`parse_document`].
pub fn load_zones(path: &Path) -> Result<Vec<ZoneSpec>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let zones = parse_document(&text, path)?.into_zones();
    debug!(
        path = %path.display(),
        zones = zones.len(),
        records = zones.iter().map(|z| z.records.len()).sum::<usize>(),
        "Loaded desired-state document"
    );

    Ok(zones)
}
