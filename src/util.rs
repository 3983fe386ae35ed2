// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic output for the binary. Everything goes to stderr so that stdout stays empty.

/// Print an error message. This will add an "error:" tag before the message and style accordingly.
pub fn error(msg: &str) {
    let error = console::style("error:").for_stderr().bold().red();
    let msg_fmt = console::style(msg).for_stderr().bold();
    eprintln!("{error} {msg_fmt}")
}
