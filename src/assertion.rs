// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assertion results and the predicate formatter built from a matcher.

use crate::matcher::{MatchResultListener, Matcher};
use std::fmt::{self, Debug, Display};

/// Outcome of applying a predicate formatter to a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertionResult {
    success: bool,
    message: String,
}

impl AssertionResult {
    pub fn success() -> Self {
        AssertionResult { success: true, message: String::new() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        AssertionResult { success: false, message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The failure message. Empty for a successful assertion.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Convert into an error carrying the failure message.
    pub fn into_result(self) -> anyhow::Result<()> {
        if self.success { Ok(()) } else { Err(anyhow::anyhow!(self.message)) }
    }
}

impl Display for AssertionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A callable built once from a matcher and applied to many values.
///
/// Each call borrows the value only for its own duration. The formatter holds nothing but the
/// matcher, so it cannot alias a value across calls.
#[derive(Clone, Debug)]
pub struct PredicateFormatter<M> {
    matcher: M,
}

/// Build a predicate formatter that checks values against `matcher`.
pub fn make_predicate_formatter_from_matcher<M>(matcher: M) -> PredicateFormatter<M> {
    PredicateFormatter { matcher }
}

impl<M> PredicateFormatter<M> {
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Check `actual`, whose source text is `expr`.
    ///
    /// The success path only asks the matcher for a verdict. The explanation and the message
    /// are built only when the value does not match. A matcher that rejects the value and then
    /// accepts it while explaining still fails the assertion.
    pub fn call<T>(&self, expr: &str, actual: &T) -> AssertionResult
    where
        T: Debug + ?Sized,
        M: Matcher<T>,
    {
        if self.matcher.matches(actual) {
            return AssertionResult::success();
        }

        let mut message = format!("Value of: {expr}\nExpected: ");
        self.matcher.describe_to(&mut message);

        let mut listener = MatchResultListener::new();
        if self.matcher.match_and_explain(actual, &mut listener) {
            message.push_str(
                "\n  The matcher failed on the initial attempt; \
                 but passed when rerunning to generate the explanation.",
            );
            return AssertionResult::failure(message);
        }

        message.push_str(&format!("\n  Actual: {actual:?}"));
        let explanation = listener.into_explanation();
        if !explanation.is_empty() {
            message.push_str(", ");
            message.push_str(&explanation);
        }
        AssertionResult::failure(message)
    }
}
