// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reproduction driver for the hash map iteration and predicate formatter path.
//!
//! The crate builds hash maps, walks each one again after every insertion, and checks every entry
//! with a single long-lived predicate formatter. It is meant to run under a memory checker
//! (AddressSanitizer, Miri or Kani), which turns any invalid access on this path into an abort.
//!
//! - [`matcher`]: generic value matchers (`An`, `Anything`, `Eq`, `Pair`).
//! - [`assertion`]: the predicate formatter and its assertion results.
//! - [`driver`]: the reproduction loop itself.

pub mod assertion;
pub mod driver;
pub mod matcher;

pub use driver::{ITERATIONS, REPEATS, ReproConfig, RunSummary, run, run_with};
