// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Request payloads and probe results for the PowerDNS HTTP API.

use crate::config::{RecordSpec, ZoneKind, ZoneSpec};
use serde::Serialize;

/// Body of `POST /servers/<id>/zones`.
///
/// Both `masters` and `nameservers` are always sent. The side the zone kind
/// does not use is sent as an empty list, never omitted.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateZoneRequest {
    /// Fully-qualified zone name
    pub name: String,
    /// Zone kind, serialized with its PowerDNS name
    pub kind: ZoneKind,
    /// Upstream masters (secondary zones only)
    pub masters: Vec<String>,
    /// Authoritative nameservers (primary and native zones only)
    pub nameservers: Vec<String>,
}

impl CreateZoneRequest {
    /// Build the creation payload for a zone.
    #[must_use]
    pub fn from_spec(zone: &ZoneSpec) -> Self {
        let (masters, nameservers) = if zone.kind.uses_masters() {
            (zone.masters.clone(), Vec::new())
        } else {
            (Vec::new(), zone.nameservers.clone())
        };

        Self {
            name: zone.name.clone(),
            kind: zone.kind,
            masters,
            nameservers,
        }
    }
}

/// Rrset change type understood by `PATCH /servers/<id>/zones/<zone>`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    /// Replace the whole rrset with the given records
    Replace,
    /// Remove the whole rrset
    Delete,
}

/// One resource-record value inside an rrset.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RrsetRecord {
    /// Record data in presentation format
    pub content: String,
    /// Served disabled when true
    pub disabled: bool,
}

/// One rrset change.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Rrset {
    /// Owner name
    pub name: String,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: String,
    /// TTL, only sent with REPLACE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Change to apply
    pub changetype: ChangeType,
    /// Full replacement set, only sent with REPLACE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<RrsetRecord>>,
}

/// Body of `PATCH /servers/<id>/zones/<zone>`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RrsetPatch {
    /// Rrset changes, applied together
    pub rrsets: Vec<Rrset>,
}

impl RrsetPatch {
    /// Full-replace patch: one API record per content entry, in input order,
    /// each sharing the rrset's `disabled` flag.
    #[must_use]
    pub fn replace(record: &RecordSpec) -> Self {
        let records = record
            .content
            .iter()
            .map(|content| RrsetRecord {
                content: content.clone(),
                disabled: record.disabled,
            })
            .collect();

        Self {
            rrsets: vec![Rrset {
                name: record.name.clone(),
                record_type: record.record_type.clone(),
                ttl: Some(record.ttl),
                changetype: ChangeType::Replace,
                records: Some(records),
            }],
        }
    }

    /// Patch removing the `(name, type)` rrset.
    #[must_use]
    pub fn delete(record: &RecordSpec) -> Self {
        Self {
            rrsets: vec![Rrset {
                name: record.name.clone(),
                record_type: record.record_type.clone(),
                ttl: None,
                changetype: ChangeType::Delete,
                records: None,
            }],
        }
    }
}

/// Body of `DELETE /servers/<id>/zones/<zone>`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeleteZoneRequest {
    /// Zone name
    pub name: String,
}

/// Result of an existence probe.
///
/// `Indeterminate` covers every answer that is neither a 2xx nor a 404:
/// server errors, auth failures, transport errors, and timeouts. Callers
/// decide how to treat it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered 2xx
    Present,
    /// The server answered 404
    Absent,
    /// Anything else; the reason is suitable for logging
    Indeterminate {
        /// Why existence could not be decided
        reason: String,
    },
}

impl ProbeOutcome {
    /// True only when the resource is known to exist.
    #[must_use]
    pub fn exists(&self) -> bool {
        matches!(self, Self::Present)
    }
}
