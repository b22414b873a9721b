// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command-line arguments.

use crate::constants::{
    DEFAULT_API_KEY_HEADER, DEFAULT_LOG_FILE, DEFAULT_PROTOCOL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVER_ID,
};
use crate::dns_errors::ApiError;
use crate::logging::level_from_flags;
use crate::pdns::{build_endpoint, ApiConfig};
use crate::reconcilers::Operation;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "pdns-data-manager")]
#[command(version)]
#[command(about = "Create or delete PowerDNS zones and records from a YAML document", long_about = None)]
pub struct Cli {
    /// YAML (or JSON) document listing zones and records
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// PowerDNS API key
    #[arg(long, value_name = "KEY")]
    pub key: String,

    /// PowerDNS API host
    #[arg(long)]
    pub host: String,

    /// PowerDNS API port
    #[arg(long)]
    pub port: u16,

    /// Operation to run
    #[arg(long, value_enum)]
    pub operation: Operation,

    /// URL scheme for the API endpoint
    #[arg(long, default_value = DEFAULT_PROTOCOL)]
    pub protocol: String,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug output, including request payloads
    #[arg(short, long)]
    pub verbose: bool,

    /// Log file path
    #[arg(short = 'L', long, value_name = "FILE", default_value = DEFAULT_LOG_FILE)]
    pub logfile: PathBuf,

    /// PowerDNS server id used in API paths
    #[arg(long, default_value = DEFAULT_SERVER_ID)]
    pub server_id: String,

    /// Header carrying the API key
    #[arg(long, default_value = DEFAULT_API_KEY_HEADER)]
    pub api_key_header: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Exit non-zero when any delete-path item fails or stays unresolved
    #[arg(long)]
    pub fail_on_delete_errors: bool,
}

impl Cli {
    /// Log level selected by `--quiet` / `--verbose`.
    #[must_use]
    pub fn log_level(&self) -> Level {
        level_from_flags(self.quiet, self.verbose)
    }

    /// API settings derived from the endpoint flags.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` when protocol, host, and port do not
    /// form a usable base URL.
    pub fn api_config(&self) -> Result<ApiConfig, ApiError> {
        let endpoint = build_endpoint(&self.protocol, &self.host, self.port)?;

        let mut config = ApiConfig::new(endpoint, self.key.clone());
        config.server_id.clone_from(&self.server_id);
        config.api_key_header.clone_from(&self.api_key_header);
        config.timeout = Duration::from_secs(self.timeout);
        Ok(config)
    }
}
