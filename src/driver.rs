// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reproduction driver.
//!
//! Builds many short-lived hash maps, re-iterates each one from scratch after every insertion,
//! and applies one long-lived predicate formatter to every entry. Finished maps are moved into an
//! append-only [`Garbage`] so their allocations stay alive for the whole run. Nothing in the loop
//! catches or suppresses failures; under a memory checker, any invalid access aborts the process.

use crate::assertion::{PredicateFormatter, make_predicate_formatter_from_matcher};
use crate::matcher::{An, Pair, an, pair};
use std::collections::HashMap;
use tracing::debug;

/// Number of working containers created, and number of keys each one reaches.
pub const ITERATIONS: u16 = 100;

/// Number of back-to-back formatter calls per entry view.
pub const REPEATS: usize = 8;

/// The working container type.
pub type Container = HashMap<i32, i32>;

/// The formatter applied to every entry view.
pub type EntryFormatter = PredicateFormatter<Pair<An<i32>, An<i32>>>;

/// How hard the driver pushes. The binary always runs with the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReproConfig {
    /// Working containers created (outer loop).
    pub containers: usize,
    /// Keys inserted into each container (inner loop). Every key in `0..keys` converts to `i32`
    /// without loss.
    pub keys: u16,
    /// Formatter calls per entry view on every pass.
    pub repeats: usize,
}

impl Default for ReproConfig {
    fn default() -> Self {
        ReproConfig { containers: usize::from(ITERATIONS), keys: ITERATIONS, repeats: REPEATS }
    }
}

impl ReproConfig {
    /// Number of formatter calls a run with this configuration performs, or `None` if that does
    /// not fit in a `u64`.
    pub fn expected_invocations(&self) -> Option<u64> {
        let keys = u64::from(self.keys);
        let entries_per_container = keys * (keys + 1) / 2;
        u64::try_from(self.containers)
            .ok()?
            .checked_mul(entries_per_container)?
            .checked_mul(u64::try_from(self.repeats).ok()?)
    }
}

/// Append-only owner of every finished working container.
#[derive(Debug, Default)]
pub struct Garbage {
    containers: Vec<Container>,
}

impl Garbage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a finished container. It is never touched again.
    pub fn retain(&mut self, container: Container) {
        self.containers.push(container);
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Container> {
        self.containers.iter()
    }

    pub fn into_inner(self) -> Vec<Container> {
        self.containers
    }
}

impl<'a> IntoIterator for &'a Garbage {
    type Item = &'a Container;
    type IntoIter = std::slice::Iter<'a, Container>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// What a run leaves behind.
#[derive(Debug)]
pub struct RunSummary {
    pub garbage: Garbage,
    /// Total formatter calls.
    pub invocations: u64,
    /// Formatter calls whose assertion failed.
    pub mismatches: u64,
}

/// Build the formatter that accepts any `(i32, i32)` entry.
pub fn entry_formatter() -> EntryFormatter {
    make_predicate_formatter_from_matcher(pair(an::<i32>(), an::<i32>()))
}

/// Run the reproduction with the built-in constants.
pub fn run() -> RunSummary {
    run_with(&ReproConfig::default())
}

pub fn run_with(config: &ReproConfig) -> RunSummary {
    debug!(?config, "run_with");
    let formatter = entry_formatter();
    let mut garbage = Garbage::new();
    let mut invocations = 0u64;
    let mut mismatches = 0u64;

    for i in 0..config.containers {
        let mut t = Container::new();
        for j in 0..config.keys {
            t.entry(i32::from(j)).or_default();
            for (&key, &value) in &t {
                let p = (key, value);
                for _ in 0..config.repeats {
                    if !formatter.call("p", &p).is_success() {
                        mismatches += 1;
                    }
                    invocations += 1;
                }
            }
        }
        debug!(container = i, len = t.len(), "retain");
        garbage.retain(t);
    }

    debug!(retained = garbage.len(), invocations, mismatches, "run_with");
    RunSummary { garbage, invocations, mismatches }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_filled(container: &Container, keys: u16) {
        assert_eq!(container.len(), usize::from(keys));
        for key in 0..i32::from(keys) {
            assert_eq!(container.get(&key), Some(&0), "key {key}");
        }
    }

    #[test]
    fn check_default_config() {
        let config = ReproConfig::default();
        assert_eq!(config, ReproConfig { containers: 100, keys: 100, repeats: 8 });
        assert_eq!(config.expected_invocations(), Some(100 * 5050 * 8));
    }

    #[test]
    fn largest_key_count_stays_in_range() {
        let config = ReproConfig { containers: 1, keys: u16::MAX, repeats: 1 };
        assert_eq!(config.expected_invocations(), Some(65535 * 65536 / 2));
    }

    #[test]
    fn expected_invocations_reports_overflow() {
        let config = ReproConfig { containers: usize::MAX, keys: u16::MAX, repeats: REPEATS };
        assert_eq!(config.expected_invocations(), None);
        let config = ReproConfig { containers: 1, keys: 2, repeats: usize::MAX };
        assert_eq!(config.expected_invocations(), None);
    }

    #[test]
    fn single_container_single_key() {
        let config = ReproConfig { containers: 1, keys: 1, ..Default::default() };
        let summary = run_with(&config);
        assert_eq!(summary.garbage.len(), 1);
        let only = summary.garbage.into_inner().pop().unwrap();
        assert_eq!(only, HashMap::from([(0, 0)]));
        assert_eq!(summary.invocations, REPEATS as u64);
        assert_eq!(summary.mismatches, 0);
    }

    #[test]
    fn empty_runs_retain_nothing() {
        let summary = run_with(&ReproConfig { containers: 0, ..Default::default() });
        assert!(summary.garbage.is_empty());
        assert_eq!(summary.invocations, 0);

        let summary = run_with(&ReproConfig { containers: 3, keys: 0, repeats: 8 });
        assert_eq!(summary.garbage.len(), 3);
        assert!(summary.garbage.iter().all(HashMap::is_empty));
        assert_eq!(summary.invocations, 0);
    }

    #[test]
    fn invocations_follow_quadratic_growth() {
        let config = ReproConfig { containers: 3, keys: 10, repeats: 2 };
        let summary = run_with(&config);
        assert_eq!(Some(summary.invocations), config.expected_invocations());
        assert_eq!(summary.invocations, 3 * 55 * 2);
        for container in &summary.garbage {
            assert_filled(container, 10);
        }
    }

    #[test]
    fn full_run_retains_every_container() {
        let summary = run();
        assert_eq!(summary.garbage.len(), usize::from(ITERATIONS));
        for container in &summary.garbage {
            assert_filled(container, ITERATIONS);
        }
        assert_eq!(Some(summary.invocations), ReproConfig::default().expected_invocations());
        assert_eq!(summary.mismatches, 0);
    }
}
