// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::{debug, info};

use map_matcher_repro::ReproConfig;

mod args;
mod session;
mod util;

/// Run the reproduction once with the built-in constants.
///
/// A memory checker that catches an invalid access aborts the process before this returns.
fn main() -> ExitCode {
    let args = args::ReproArgs::parse();
    let quiet = args.common_opts.quiet;

    if let Err(error) = repro_main(args) {
        debug!(?error, "main_failure");
        if !quiet {
            util::error(&format!("{error:#}"));
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn repro_main(args: args::ReproArgs) -> Result<()> {
    session::init_logger(&args.common_opts)?;

    let config = ReproConfig::default();
    info!(?config, expected = ?config.expected_invocations(), "start");
    let summary = map_matcher_repro::run_with(&config);
    info!(retained = summary.garbage.len(), invocations = summary.invocations, "finish");

    if summary.mismatches > 0 {
        bail!(
            "{} of {} formatter calls rejected an entry",
            summary.mismatches,
            summary.invocations
        );
    }
    Ok(())
}
