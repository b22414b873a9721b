// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # pdns-data-manager - PowerDNS zone and record reconciler
//!
//! Reads a YAML document describing DNS zones and their records and drives a
//! PowerDNS Authoritative server towards it through the HTTP API.
//!
//! ## Overview
//!
//! A run performs one of two operations:
//!
//! - **create** - ensure every listed zone exists, then replace each listed rrset
//! - **delete** - delete each listed rrset, then the zone itself
//!
//! Both are idempotent. Each zone and record is reported individually, and a
//! failure in one never stops work on the others.
//!
//! ## Modules
//!
//! - [`config`] - Desired-state document and loader
//! - [`validation`] - Structural checks run before any network call
//! - [`pdns`] - PowerDNS API client and wire types
//! - [`reconcilers`] - Create and delete reconciliation and per-item outcomes
//! - [`context`] - Execution context shared by reconcilers
//! - [`runner`] - One complete run and its exit code
//! - [`cli`] - Command-line arguments
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use pdns_data_manager::config::load_zones;
//! use pdns_data_manager::context::ExecutionContext;
//! use pdns_data_manager::pdns::{ApiConfig, PdnsClient};
//! use pdns_data_manager::reconcilers::{reconcile, Operation};
//! use pdns_data_manager::validation::validate;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let zones = load_zones(Path::new("zones.yaml"))?;
//! validate(&zones)?;
//!
//! let client = PdnsClient::new(&ApiConfig::new("http://127.0.0.1:8081", "secret"))?;
//! let ctx = ExecutionContext::new(Arc::new(client));
//!
//! let outcome = reconcile(&ctx, Operation::Create, &zones).await;
//! println!("{}", outcome.summary());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod dns_errors;
pub mod http_errors;
pub mod logging;
pub mod pdns;
pub mod reconcilers;
pub mod runner;
pub mod validation;

#[cfg(test)]
mod context_tests;
#[cfg(test)]
mod dns_errors_tests;
