// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Command line arguments. These only control diagnostics; the reproduction itself is fixed.
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Stress the hash map iteration and predicate formatter path")]
pub struct ReproArgs {
    #[command(flatten)]
    pub common_opts: CommonArgs,
}

/// Logging controls shared by every invocation.
#[derive(Debug, clap::Args)]
pub struct CommonArgs {
    /// Produce full debug information
    #[arg(long)]
    pub debug: bool,
    /// Produces no output, just an exit code; overrides --verbose and --debug
    #[arg(long, short)]
    pub quiet: bool,
    /// Output processing stages along with minor debug information
    #[arg(long, short, default_value_if("debug", "true", Some("true")))]
    pub verbose: bool,
    /// Extra log filter directive, e.g. `map_matcher_repro=trace`
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,
    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}
