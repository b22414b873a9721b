// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reconciliation of the desired-state document against a PowerDNS server.
//!
//! # Reconciliation Architecture
//!
//! 1. **Probe** - Ask the API whether the zone exists
//! 2. **Apply** - Create the zone and replace its rrsets, or delete them
//! 3. **Record** - Store the result of every zone and rrset in an [`OperationOutcome`]
//!
//! Zones and rrsets are processed strictly one at a time in input order. A
//! failure is caught at the item that caused it, logged with the item's
//! identifier, and recorded; the run always continues with the next item.
//!
//! # Available Reconcilers
//!
//! - [`reconcile_create`] - Creates missing zones and replaces rrsets
//! - [`reconcile_delete`] - Deletes rrsets, then zones
//!
//! # Example
//!
//! ```rust,no_run
//! use pdns_data_manager::context::ExecutionContext;
//! use pdns_data_manager::pdns::{ApiConfig, PdnsClient};
//! use pdns_data_manager::reconcilers::{reconcile, Operation};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = PdnsClient::new(&ApiConfig::new("http://127.0.0.1:8081", "secret"))?;
//! let ctx = ExecutionContext::new(Arc::new(client));
//! let zones = pdns_data_manager::config::load_zones("dnsdata.yaml".as_ref())?;
//!
//! let outcome = reconcile(&ctx, Operation::Create, &zones).await;
//! println!("{}", outcome.summary());
//! # Ok(())
//! # }
//! ```

pub mod create;
pub mod delete;
pub mod outcome;
pub mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use create::reconcile_create;
pub use delete::reconcile_delete;
pub use outcome::{ItemResult, ItemStatus, ItemTarget, OperationOutcome};
pub use types::{FailurePolicy, Operation};

use crate::config::ZoneSpec;
use crate::context::ExecutionContext;
use tracing::info;

/// Run one operation over every zone.
pub async fn reconcile(
    ctx: &ExecutionContext,
    operation: Operation,
    zones: &[ZoneSpec],
) -> OperationOutcome {
    info!(
        operation = %operation,
        zones = zones.len(),
        "Starting {operation} operation"
    );

    match operation {
        Operation::Create => reconcile_create(ctx, zones).await,
        Operation::Delete => reconcile_delete(ctx, zones).await,
    }
}
