// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! One complete run: load, validate, connect, reconcile, report.
//!
//! Nothing touches the network until the document has loaded and passed
//! validation. The returned value is the process exit code.

use crate::cli::Cli;
use crate::config::load_zones;
use crate::constants::{EXIT_CONFIG_ERROR, EXIT_OPERATION_FAILED, EXIT_SUCCESS};
use crate::context::ExecutionContext;
use crate::pdns::PdnsClient;
use crate::reconcilers::{reconcile, OperationOutcome};
use crate::validation::validate;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Run the operation selected on the command line.
///
/// Returns [`EXIT_SUCCESS`], [`EXIT_OPERATION_FAILED`], or
/// [`EXIT_CONFIG_ERROR`] for an unreadable or invalid document or an
/// unusable endpoint.
pub async fn run(cli: &Cli) -> u8 {
    info!(
        config = %cli.config.display(),
        operation = %cli.operation,
        host = %cli.host,
        port = cli.port,
        "Starting PowerDNS data manager"
    );

    let zones = match load_zones(&cli.config) {
        Ok(zones) => zones,
        Err(e) => return setup_failure(&e),
    };
    debug!(zones = zones.len(), "Loaded desired state");

    if let Err(e) = validate(&zones) {
        return setup_failure(&e);
    }

    let client = match cli.api_config().and_then(|config| PdnsClient::new(&config)) {
        Ok(client) => client,
        Err(e) => return setup_failure(&e),
    };
    info!(zones_url = %client.zones_url(), "Using PowerDNS API");

    let ctx = ExecutionContext::new(Arc::new(client))
        .with_fail_on_delete_errors(cli.fail_on_delete_errors);

    let outcome = reconcile(&ctx, cli.operation, &zones).await;
    report(&outcome)
}

fn setup_failure(err: &dyn std::error::Error) -> u8 {
    error!(error = %err, "Setup failed");
    eprintln!("Error: {err}");
    EXIT_CONFIG_ERROR
}

fn report(outcome: &OperationOutcome) -> u8 {
    for (target, err) in outcome.failures() {
        warn!(
            item = %target,
            reason = err.reason_code(),
            zone_level = err.is_zone_level(),
            error = %err,
            "Item failed"
        );
    }

    let summary = outcome.summary();
    println!("{summary}");

    if outcome.is_success() {
        info!(
            operation = %outcome.operation(),
            duration_ms = outcome.elapsed_ms(),
            "{summary}"
        );
        EXIT_SUCCESS
    } else {
        error!(
            operation = %outcome.operation(),
            duration_ms = outcome.elapsed_ms(),
            "{summary}"
        );
        EXIT_OPERATION_FAILED
    }
}
