// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Common utilities for integration tests against a mock PowerDNS API.

#![allow(dead_code)]

use clap::Parser;
use pdns_data_manager::cli::Cli;
use pdns_data_manager::config::{load_zones, ZoneSpec};
use pdns_data_manager::context::ExecutionContext;
use pdns_data_manager::pdns::{ApiConfig, PdnsClient};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::MockServer;

pub const API_KEY: &str = "integration-key";
pub const ZONES_PATH: &str = "/api/v1/servers/localhost/zones";

/// Path of a single zone on the mock server.
pub fn zone_path(zone: &str) -> String {
    format!("{ZONES_PATH}/{zone}")
}

/// Execution context talking to the mock server through the real HTTP client.
pub fn context_for(server: &MockServer) -> ExecutionContext {
    let mut config = ApiConfig::new(server.uri(), API_KEY);
    config.timeout = Duration::from_secs(5);

    let client = PdnsClient::new(&config).expect("client builds for mock server");
    ExecutionContext::new(Arc::new(client))
}

/// Write `yaml` to a temporary file kept alive by the returned handle.
pub fn write_document(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(yaml.as_bytes()).expect("write document");
    file
}

/// Write `yaml` to a temporary file and load it the way the binary does.
pub fn load_document(yaml: &str) -> Vec<ZoneSpec> {
    let file = write_document(yaml);
    load_zones(file.path()).expect("document loads")
}

/// Command line pointing at the mock server and a document on disk.
pub fn cli_for(server: &MockServer, config: &Path, operation: &str, extra: &[&str]) -> Cli {
    let address = server.address();
    let host = address.ip().to_string();
    let port = address.port().to_string();

    let mut args = vec![
        "pdns-data-manager",
        "--config",
        config.to_str().expect("temp path is UTF-8"),
        "--key",
        API_KEY,
        "--host",
        host.as_str(),
        "--port",
        port.as_str(),
        "--operation",
        operation,
        "--timeout",
        "5",
    ];
    args.extend_from_slice(extra);

    Cli::try_parse_from(args).expect("arguments parse")
}
