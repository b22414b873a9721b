// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Execution context shared by the reconcilers.
//!
//! The context is built once by the binary and passed by reference into every
//! reconciler call. It carries:
//! - The DNS API client (HTTP client, endpoint, and credentials)
//! - Run settings that decide how per-item failures roll up
//!
//! Log output goes through the `tracing` subscriber installed by
//! [`crate::logging::init_logging`].

use crate::pdns::DnsApi;
use crate::reconcilers::{FailurePolicy, Operation};
use std::sync::Arc;

/// Everything a reconciliation pass needs besides the desired state.
#[derive(Clone)]
pub struct ExecutionContext {
    /// API used for every probe and mutation
    api: Arc<dyn DnsApi>,

    /// Whether failed delete-path items fail the run
    fail_on_delete_errors: bool,
}

impl ExecutionContext {
    /// Context over an API client with the default settings.
    #[must_use]
    pub fn new(api: Arc<dyn DnsApi>) -> Self {
        Self {
            api,
            fail_on_delete_errors: false,
        }
    }

    /// Make failed or unresolved delete-path items fail the run.
    #[must_use]
    pub fn with_fail_on_delete_errors(mut self, enabled: bool) -> Self {
        self.fail_on_delete_errors = enabled;
        self
    }

    /// API client.
    #[must_use]
    pub fn api(&self) -> &dyn DnsApi {
        self.api.as_ref()
    }

    /// Failure policy for an operation.
    ///
    /// Create fails on any zone-level failure. Delete is best effort unless
    /// `fail_on_delete_errors` is set.
    #[must_use]
    pub fn failure_policy(&self, operation: Operation) -> FailurePolicy {
        match operation {
            Operation::Create => FailurePolicy::ZoneFailures,
            Operation::Delete if self.fail_on_delete_errors => FailurePolicy::AnyFailure,
            Operation::Delete => FailurePolicy::BestEffort,
        }
    }
}
