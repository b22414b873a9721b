// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Per-item results and the run-level outcome they aggregate into.

use super::types::{FailurePolicy, Operation};
use crate::dns_errors::DnsError;
use chrono::{DateTime, Utc};
use std::fmt;

/// The zone or rrset an item result belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemTarget {
    /// A whole zone
    Zone {
        /// Zone name
        zone: String,
    },
    /// One `(name, type)` rrset inside a zone
    Record {
        /// Zone name
        zone: String,
        /// Owner name
        name: String,
        /// Record type
        record_type: String,
    },
}

impl ItemTarget {
    /// Whether the target is a zone.
    #[must_use]
    pub fn is_zone(&self) -> bool {
        matches!(self, Self::Zone { .. })
    }
}

impl fmt::Display for ItemTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zone { zone } => write!(f, "zone {zone}"),
            Self::Record {
                zone,
                name,
                record_type,
            } => write!(f, "record {name} {record_type} in zone {zone}"),
        }
    }
}

/// What happened to one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Zone was created
    Created,
    /// Zone existed already; creation was not attempted
    AlreadyPresent,
    /// Rrset was replaced
    Updated,
    /// Zone or rrset was deleted
    Deleted,
    /// Nothing to do, or not attempted because a prerequisite failed
    Skipped {
        /// Why the item was skipped
        reason: String,
    },
    /// The existence probe could not decide; nothing was sent
    Unresolved {
        /// Probe failure description
        reason: String,
    },
    /// The API call failed
    Failed {
        /// The failure
        error: DnsError,
    },
}

impl ItemStatus {
    /// Whether the item counts as a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::Created | Self::AlreadyPresent | Self::Updated | Self::Deleted
        )
    }
}

/// Result for one zone or rrset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    /// Item the result belongs to
    pub target: ItemTarget,
    /// What happened
    pub status: ItemStatus,
}

/// Accumulator for a single create or delete pass.
///
/// Created at the start of the pass and finalized when it completes; never persisted.
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    operation: Operation,
    policy: FailurePolicy,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    results: Vec<ItemResult>,
}

impl OperationOutcome {
    /// Start a new pass.
    #[must_use]
    pub fn new(operation: Operation, policy: FailurePolicy) -> Self {
        Self {
            operation,
            policy,
            started_at: Utc::now(),
            finished_at: None,
            results: Vec::new(),
        }
    }

    /// Append one item result, preserving processing order.
    pub fn record(&mut self, target: ItemTarget, status: ItemStatus) {
        self.results.push(ItemResult { target, status });
    }

    /// Mark the pass as complete.
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    /// Operation this outcome belongs to.
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Item results in processing order.
    #[must_use]
    pub fn results(&self) -> &[ItemResult] {
        &self.results
    }

    fn count(&self, zone: bool, pred: impl Fn(&ItemStatus) -> bool) -> usize {
        self.results
            .iter()
            .filter(|r| r.target.is_zone() == zone && pred(&r.status))
            .count()
    }

    /// Zones created or already present, or deleted.
    #[must_use]
    pub fn zones_succeeded(&self) -> usize {
        self.count(true, ItemStatus::is_success)
    }

    /// Zone operations that failed.
    #[must_use]
    pub fn zones_failed(&self) -> usize {
        self.count(true, |s| matches!(s, ItemStatus::Failed { .. }))
    }

    /// Rrsets replaced or deleted.
    #[must_use]
    pub fn records_succeeded(&self) -> usize {
        self.count(false, ItemStatus::is_success)
    }

    /// Rrset operations that failed.
    #[must_use]
    pub fn records_failed(&self) -> usize {
        self.count(false, |s| matches!(s, ItemStatus::Failed { .. }))
    }

    /// Items skipped, zones and rrsets together.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, ItemStatus::Skipped { .. }))
            .count()
    }

    /// Items whose existence probe could not decide.
    #[must_use]
    pub fn unresolved(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, ItemStatus::Unresolved { .. }))
            .count()
    }

    /// Failures in processing order.
    pub fn failures(&self) -> impl Iterator<Item = (&ItemTarget, &DnsError)> {
        self.results.iter().filter_map(|r| match &r.status {
            ItemStatus::Failed { error } => Some((&r.target, error)),
            _ => None,
        })
    }

    /// Run-level verdict under the pass's failure policy.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self.policy {
            FailurePolicy::ZoneFailures => !self.failures().any(|(_, e)| e.is_zone_level()),
            FailurePolicy::AnyFailure => {
                self.zones_failed() + self.records_failed() + self.unresolved() == 0
            }
            FailurePolicy::BestEffort => true,
        }
    }

    /// Wall-clock duration of the pass in milliseconds; zero until finished.
    #[must_use]
    pub fn elapsed_ms(&self) -> i64 {
        self.finished_at
            .map_or(0, |end| (end - self.started_at).num_milliseconds())
    }

    /// "Create operation successful", "Delete operation failed", and so on.
    #[must_use]
    pub fn headline(&self) -> String {
        let verdict = if self.is_success() {
            "successful"
        } else {
            "failed"
        };
        format!("{} operation {verdict}", self.operation.title())
    }

    /// Headline followed by the counters.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} (zones: {} ok, {} failed; records: {} ok, {} failed; {} skipped",
            self.headline(),
            self.zones_succeeded(),
            self.zones_failed(),
            self.records_succeeded(),
            self.records_failed(),
            self.skipped(),
        );
        if self.unresolved() > 0 {
            line.push_str(&format!("; {} unresolved", self.unresolved()));
        }
        line.push(')');
        line
    }
}
