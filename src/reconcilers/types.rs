// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Types used across the create and delete reconcilers.

use std::fmt;

/// Operation requested for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Operation {
    /// Create missing zones and replace every listed rrset
    Create,
    /// Delete every listed rrset, then the zone
    Delete,
}

impl Operation {
    /// Capitalized name for summary lines.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Delete => "Delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// Rule turning per-item results into the run-level verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail when any zone-level item failed; record failures are reported only.
    ZoneFailures,
    /// Fail when any item failed or could not be resolved.
    AnyFailure,
    /// Always report success; failures are logged and counted only.
    BestEffort,
}
