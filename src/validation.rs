// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Validation of the desired-state document.
//!
//! Runs entirely before any network call. The first violation in input order
//! aborts the run.

use crate::config::{ZoneKind, ZoneSpec};
use crate::dns_errors::ConfigError;
use tracing::debug;

/// Check domain invariants on every zone and record.
///
/// An empty zone list is valid.
///
/// # Errors
///
/// - [`ConfigError::NameserverRequired`] for a primary zone with no nameservers
/// - [`ConfigError::MasterRequired`] for a secondary zone with no masters
/// - [`ConfigError::InvalidTtl`] for a record with a zero TTL
pub fn validate(zones: &[ZoneSpec]) -> Result<(), ConfigError> {
    for zone in zones {
        validate_zone(zone)?;
    }

    debug!(zones = zones.len(), "Desired-state document passed validation");
    Ok(())
}

fn validate_zone(zone: &ZoneSpec) -> Result<(), ConfigError> {
    match zone.kind {
        ZoneKind::Primary if zone.nameservers.is_empty() => {
            return Err(ConfigError::NameserverRequired {
                zone: zone.name.clone(),
            });
        }
        ZoneKind::Secondary if zone.masters.is_empty() => {
            return Err(ConfigError::MasterRequired {
                zone: zone.name.clone(),
            });
        }
        _ => {}
    }

    if let Some(record) = zone.records.iter().find(|r| r.ttl == 0) {
        return Err(ConfigError::InvalidTtl {
            zone: zone.name.clone(),
            name: record.name.clone(),
            record_type: record.record_type.clone(),
        });
    }

    Ok(())
}
