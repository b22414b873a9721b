// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::Parser;
use pdns_data_manager::{cli::Cli, logging::init_logging, runner::run};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.log_level(), Some(cli.logfile.as_path()));

    // Requests are strictly sequential; one thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .thread_name("pdns-data-manager")
        .enable_all()
        .build()?;

    let code = runtime.block_on(run(&cli));
    Ok(ExitCode::from(code))
}
