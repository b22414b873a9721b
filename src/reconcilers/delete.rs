// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Delete path: remove each listed rrset, then the zone itself.
//!
//! Every step is existence-checked so repeated runs are no-ops. Every item is
//! best effort: a failed rrset deletion never stops its siblings or the zone
//! deletion that follows.

use super::create::record_target;
use super::outcome::{ItemStatus, ItemTarget, OperationOutcome};
use super::types::Operation;
use crate::config::{RecordSpec, ZoneSpec};
use crate::context::ExecutionContext;
use crate::dns_errors::{DnsError, RecordError, ZoneError};
use crate::http_errors::describe_api_error;
use crate::pdns::{DnsApi, ProbeOutcome, RrsetPatch};
use tracing::{error, info, warn};

/// Delete every listed rrset and zone in input order.
///
/// The outcome is reported successful unless the context asks for delete
/// failures to fail the run.
pub async fn reconcile_delete(ctx: &ExecutionContext, zones: &[ZoneSpec]) -> OperationOutcome {
    let mut outcome =
        OperationOutcome::new(Operation::Delete, ctx.failure_policy(Operation::Delete));

    for zone in zones {
        for record in &zone.records {
            let status = delete_record(ctx.api(), zone, record).await;
            outcome.record(record_target(zone, record), status);
        }

        let status = delete_zone(ctx.api(), zone).await;
        outcome.record(
            ItemTarget::Zone {
                zone: zone.name.clone(),
            },
            status,
        );
    }

    outcome.finish()
}

/// Delete one `(name, type)` rrset if its zone exists.
pub async fn delete_record(api: &dyn DnsApi, zone: &ZoneSpec, record: &RecordSpec) -> ItemStatus {
    info!(
        zone = %zone.name,
        record = %record.name,
        record_type = %record.record_type,
        "Request to delete record {}",
        record.name
    );

    match api.probe_zone(&zone.name).await {
        ProbeOutcome::Present => {}
        ProbeOutcome::Absent => {
            info!(
                zone = %zone.name,
                record = %record.name,
                "Zone {} for record {} does not exist, skipping",
                zone.name,
                record.name
            );
            return ItemStatus::Skipped {
                reason: format!("zone {} does not exist", zone.name),
            };
        }
        ProbeOutcome::Indeterminate { reason } => {
            warn!(
                zone = %zone.name,
                record = %record.name,
                reason = %reason,
                "Zone existence unknown, not deleting record {}",
                record.name
            );
            return ItemStatus::Unresolved { reason };
        }
    }

    match api
        .patch_rrsets(&zone.name, &RrsetPatch::delete(record))
        .await
    {
        Ok(()) => {
            info!(
                zone = %zone.name,
                record = %record.name,
                record_type = %record.record_type,
                "Successfully deleted DNS record {}",
                record.name
            );
            ItemStatus::Deleted
        }
        Err(e) => {
            let error = DnsError::from(RecordError::DeletionFailed {
                zone: zone.name.clone(),
                name: record.name.clone(),
                record_type: record.record_type.clone(),
                reason: describe_api_error(&e),
            });
            error!(
                zone = %zone.name,
                record = %record.name,
                reason = error.reason_code(),
                status = ?e.status(),
                "{error}"
            );
            ItemStatus::Failed { error }
        }
    }
}

/// Delete a zone if it exists.
pub async fn delete_zone(api: &dyn DnsApi, zone: &ZoneSpec) -> ItemStatus {
    info!(zone = %zone.name, "Request to delete zone {}", zone.name);

    match api.probe_zone(&zone.name).await {
        ProbeOutcome::Present => {}
        ProbeOutcome::Absent => {
            info!(
                zone = %zone.name,
                "Zone {} requested to be deleted does not exist",
                zone.name
            );
            return ItemStatus::Skipped {
                reason: format!("zone {} does not exist", zone.name),
            };
        }
        ProbeOutcome::Indeterminate { reason } => {
            warn!(
                zone = %zone.name,
                reason = %reason,
                "Zone existence unknown, not deleting zone {}",
                zone.name
            );
            return ItemStatus::Unresolved { reason };
        }
    }

    match api.delete_zone(&zone.name).await {
        Ok(()) => {
            info!(zone = %zone.name, "Successfully deleted zone {}", zone.name);
            ItemStatus::Deleted
        }
        Err(e) => {
            let error = DnsError::from(ZoneError::DeletionFailed {
                zone: zone.name.clone(),
                reason: describe_api_error(&e),
            });
            error!(
                zone = %zone.name,
                reason = error.reason_code(),
                status = ?e.status(),
                "{error}"
            );
            ItemStatus::Failed { error }
        }
    }
}
