// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Module used to configure the logger of a reproduction run.

use crate::args::CommonArgs;
use anyhow::{Context, Result};
use std::str::FromStr;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Environment variable used to control the log filter.
const LOG_ENV_VAR: &str = "REPRO_LOG";

/// Initialize the logger using the REPRO_LOG environment variable and the logging arguments.
///
/// Logs always go to stderr. With `--quiet` no logger is installed at all.
pub fn init_logger(args: &CommonArgs) -> Result<()> {
    if args.quiet {
        return Ok(());
    }
    let filter = log_filter(args)?;
    if args.json_logs { json_logs(filter) } else { fmt_logs(filter) }
}

fn log_filter(args: &CommonArgs) -> Result<EnvFilter> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env()
        .with_context(|| format!("invalid `{LOG_ENV_VAR}` filter"))?;

    if args.debug {
        filter = filter.add_directive(LevelFilter::DEBUG.into());
    } else if args.verbose {
        filter = filter.add_directive(LevelFilter::INFO.into());
    }

    if let Some(log_level) = &args.log_level {
        let directive = Directive::from_str(log_level)
            .with_context(|| format!("invalid log directive `{log_level}`"))?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

/// Configure global logger to use a json logger.
fn json_logs(filter: EnvFilter) -> Result<()> {
    let subscriber = Registry::default().with(filter).with(layer().json().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber).context("failed to install the logger")
}

/// Configure global logger to use the plain text formatter.
fn fmt_logs(filter: EnvFilter) -> Result<()> {
    let subscriber =
        Registry::default().with(filter).with(layer().with_writer(std::io::stderr).with_target(true));
    tracing::subscriber::set_global_default(subscriber).context("failed to install the logger")
}
