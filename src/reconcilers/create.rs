// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Create path: ensure each zone exists, then replace each of its rrsets.
//!
//! Per zone:
//!
//! ```text
//! NotChecked -> Exists  -------------------+
//!            -> Missing -> Created --------+-> RecordsReconciled
//!                       -> CreateFailed ----> RecordsSkipped
//! ```
//!
//! A failed zone skips only its own records. A failed rrset never stops the
//! rrsets or zones after it.

use super::outcome::{ItemStatus, ItemTarget, OperationOutcome};
use super::types::Operation;
use crate::config::{RecordSpec, ZoneSpec};
use crate::context::ExecutionContext;
use crate::dns_errors::{DnsError, RecordError, ZoneError};
use crate::http_errors::{describe_api_error, map_api_error};
use crate::pdns::{CreateZoneRequest, DnsApi, ProbeOutcome, RrsetPatch};
use tracing::{debug, error, info, warn};

/// Reconcile every zone and rrset in input order.
///
/// Never returns early: every zone is attempted. The returned outcome fails
/// when any zone could not be created.
pub async fn reconcile_create(ctx: &ExecutionContext, zones: &[ZoneSpec]) -> OperationOutcome {
    let mut outcome =
        OperationOutcome::new(Operation::Create, ctx.failure_policy(Operation::Create));

    for zone in zones {
        let zone_target = ItemTarget::Zone {
            zone: zone.name.clone(),
        };

        match ensure_zone(ctx.api(), zone).await {
            Ok(status) => {
                outcome.record(zone_target, status);
                for record in &zone.records {
                    let status = upsert_record(ctx.api(), zone, record).await;
                    outcome.record(record_target(zone, record), status);
                }
            }
            Err(e) => {
                error!(
                    zone = %zone.name,
                    error = %e,
                    skipped_records = zone.records.len(),
                    "Zone {} creation failed. Skipping record creation",
                    zone.name
                );
                outcome.record(zone_target, ItemStatus::Failed { error: e.into() });
                for record in &zone.records {
                    outcome.record(
                        record_target(zone, record),
                        ItemStatus::Skipped {
                            reason: format!("zone {} could not be created", zone.name),
                        },
                    );
                }
            }
        }
    }

    outcome.finish()
}

/// Make sure a zone exists, creating it when the probe does not find it.
///
/// Returns [`ItemStatus::AlreadyPresent`] when the probe short-circuits and
/// [`ItemStatus::Created`] after a 201. An indeterminate probe is treated
/// like a missing zone.
///
/// # Errors
///
/// Returns [`ZoneError::CreationFailed`] when creation was attempted and failed.
pub async fn ensure_zone(api: &dyn DnsApi, zone: &ZoneSpec) -> Result<ItemStatus, ZoneError> {
    match api.probe_zone(&zone.name).await {
        ProbeOutcome::Present => {
            debug!(zone = %zone.name, "Zone already exists, skipping creation");
            return Ok(ItemStatus::AlreadyPresent);
        }
        ProbeOutcome::Absent => {}
        ProbeOutcome::Indeterminate { reason } => {
            warn!(
                zone = %zone.name,
                reason = %reason,
                "Zone existence unknown, attempting creation anyway"
            );
        }
    }

    info!(zone = %zone.name, kind = %zone.kind, "Request to create zone {}", zone.name);
    let request = CreateZoneRequest::from_spec(zone);

    match api.create_zone(&request).await {
        Ok(()) => {
            info!(zone = %zone.name, "Successfully created zone {}", zone.name);
            Ok(ItemStatus::Created)
        }
        Err(e) => {
            let (reason_code, _) = map_api_error(&e);
            error!(
                zone = %zone.name,
                reason = reason_code,
                status = ?e.status(),
                error = %e,
                "Failed to create zone {}",
                zone.name
            );
            Err(ZoneError::CreationFailed {
                zone: zone.name.clone(),
                reason: describe_api_error(&e),
            })
        }
    }
}

/// Replace one rrset with the full content list. No diffing: the same
/// payload is sent on every run.
pub async fn upsert_record(api: &dyn DnsApi, zone: &ZoneSpec, record: &RecordSpec) -> ItemStatus {
    info!(
        zone = %zone.name,
        record = %record.name,
        record_type = %record.record_type,
        values = record.content.len(),
        "Sending request to create record {}",
        record.name
    );

    match api
        .patch_rrsets(&zone.name, &RrsetPatch::replace(record))
        .await
    {
        Ok(()) => {
            info!(
                zone = %zone.name,
                record = %record.name,
                record_type = %record.record_type,
                "Successfully created/updated record {}",
                record.name
            );
            ItemStatus::Updated
        }
        Err(e) => {
            let error = DnsError::from(RecordError::UpsertFailed {
                zone: zone.name.clone(),
                name: record.name.clone(),
                record_type: record.record_type.clone(),
                reason: describe_api_error(&e),
            });
            error!(
                zone = %zone.name,
                record = %record.name,
                record_type = %record.record_type,
                reason = error.reason_code(),
                status = ?e.status(),
                "{error}"
            );
            ItemStatus::Failed { error }
        }
    }
}

pub(crate) fn record_target(zone: &ZoneSpec, record: &RecordSpec) -> ItemTarget {
    ItemTarget::Record {
        zone: zone.name.clone(),
        name: record.name.clone(),
        record_type: record.record_type.clone(),
    }
}
