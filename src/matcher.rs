// Copyright Kani Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value matchers used by the predicate formatter.
//!
//! A [`Matcher`] answers two questions about a value: does it match, and why (or why not).
//! Matchers are generic over the value they inspect and are resolved at compile time, so a
//! single [`Pair`] definition serves any key/value types whose component matchers apply.
//!
//! Matchers only ever receive a shared reference for the duration of one call. None of them keep
//! anything derived from the inspected value once the call returns.

use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Sink for the explanation a matcher produces while matching.
///
/// An ignoring listener drops everything written to it, which lets callers that only need a
/// yes/no answer skip the formatting work altogether.
#[derive(Debug, Default)]
pub struct MatchResultListener {
    explanation: Option<String>,
}

impl MatchResultListener {
    /// A listener that records the explanation.
    pub fn new() -> Self {
        MatchResultListener { explanation: Some(String::new()) }
    }

    /// A listener that discards the explanation.
    pub fn ignoring() -> Self {
        MatchResultListener { explanation: None }
    }

    /// Whether anything written to this listener will be kept.
    pub fn is_interested(&self) -> bool {
        self.explanation.is_some()
    }

    pub fn push_str(&mut self, text: &str) {
        if let Some(explanation) = &mut self.explanation {
            explanation.push_str(text);
        }
    }

    /// The explanation collected so far. Always empty for an ignoring listener.
    pub fn explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or("")
    }

    pub fn into_explanation(self) -> String {
        self.explanation.unwrap_or_default()
    }
}

impl fmt::Write for MatchResultListener {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

/// A predicate over values of type `T` that can describe itself and explain its verdict.
pub trait Matcher<T: ?Sized> {
    /// Check `actual`, writing an explanation of the verdict to `listener` if it is interested.
    fn match_and_explain(&self, actual: &T, listener: &mut MatchResultListener) -> bool;

    /// Append a description of the values this matcher accepts, e.g. "is equal to 5".
    fn describe_to(&self, out: &mut String);

    /// Append a description of the values this matcher rejects.
    fn describe_negation_to(&self, out: &mut String);

    /// Check `actual` without collecting an explanation.
    fn matches(&self, actual: &T) -> bool {
        self.match_and_explain(actual, &mut MatchResultListener::ignoring())
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_to(&mut out);
        out
    }

    fn describe_negation(&self) -> String {
        let mut out = String::new();
        self.describe_negation_to(&mut out);
        out
    }
}

/// Matches any value of type `T`, or anything that borrows as a `T`.
pub struct An<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

/// Create a matcher that accepts any value of type `T`.
pub fn an<T: ?Sized>() -> An<T> {
    An { _marker: PhantomData }
}

impl<T: ?Sized> Clone for An<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for An<T> {}

impl<T: ?Sized> Debug for An<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "An<{}>", std::any::type_name::<T>())
    }
}

impl<T: ?Sized, U: Borrow<T> + ?Sized> Matcher<U> for An<T> {
    fn match_and_explain(&self, actual: &U, _listener: &mut MatchResultListener) -> bool {
        // Any value that borrows as `T` is accepted.
        let _: &T = Borrow::<T>::borrow(actual);
        true
    }

    fn describe_to(&self, out: &mut String) {
        out.push_str("is anything");
    }

    fn describe_negation_to(&self, out: &mut String) {
        out.push_str("never matches");
    }
}

/// Matches every value, of any type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Anything;

pub fn anything() -> Anything {
    Anything
}

impl<T: ?Sized> Matcher<T> for Anything {
    fn match_and_explain(&self, _actual: &T, _listener: &mut MatchResultListener) -> bool {
        true
    }

    fn describe_to(&self, out: &mut String) {
        out.push_str("is anything");
    }

    fn describe_negation_to(&self, out: &mut String) {
        out.push_str("never matches");
    }
}

/// Matches values equal to the expected one.
#[derive(Clone, Copy, Debug)]
pub struct EqMatcher<T> {
    expected: T,
}

pub fn eq<T>(expected: T) -> EqMatcher<T> {
    EqMatcher { expected }
}

impl<T: Debug, U: PartialEq<T>> Matcher<U> for EqMatcher<T> {
    fn match_and_explain(&self, actual: &U, _listener: &mut MatchResultListener) -> bool {
        *actual == self.expected
    }

    fn describe_to(&self, out: &mut String) {
        out.push_str(&format!("is equal to {:?}", self.expected));
    }

    fn describe_negation_to(&self, out: &mut String) {
        out.push_str(&format!("isn't equal to {:?}", self.expected));
    }
}

/// Matches a 2-tuple whose first component matches `first` and second matches `second`.
#[derive(Clone, Copy, Debug)]
pub struct Pair<K, V> {
    first: K,
    second: V,
}

pub fn pair<K, V>(first: K, second: V) -> Pair<K, V> {
    Pair { first, second }
}

impl<K, V> Pair<K, V> {
    /// Write the explanation for a successful match, given what each component matcher said.
    fn explain_success(first: &str, second: &str, listener: &mut MatchResultListener) {
        listener.push_str("whose both fields match");
        if !first.is_empty() {
            listener.push_str(", where the first field is a value ");
            listener.push_str(first);
        }
        if !second.is_empty() {
            listener.push_str(if first.is_empty() { ", where " } else { ", and " });
            listener.push_str("the second field is a value ");
            listener.push_str(second);
        }
    }

    fn explain_mismatch(field: &str, inner: &str, listener: &mut MatchResultListener) {
        listener.push_str("whose ");
        listener.push_str(field);
        listener.push_str(" field does not match");
        if !inner.is_empty() {
            listener.push_str(", ");
            listener.push_str(inner);
        }
    }
}

impl<A, B, K, V> Matcher<(A, B)> for Pair<K, V>
where
    K: Matcher<A>,
    V: Matcher<B>,
{
    fn match_and_explain(&self, actual: &(A, B), listener: &mut MatchResultListener) -> bool {
        if !listener.is_interested() {
            return self.first.matches(&actual.0) && self.second.matches(&actual.1);
        }

        let mut first = MatchResultListener::new();
        if !self.first.match_and_explain(&actual.0, &mut first) {
            Self::explain_mismatch("first", first.explanation(), listener);
            return false;
        }
        let mut second = MatchResultListener::new();
        if !self.second.match_and_explain(&actual.1, &mut second) {
            Self::explain_mismatch("second", second.explanation(), listener);
            return false;
        }
        Self::explain_success(first.explanation(), second.explanation(), listener);
        true
    }

    fn describe_to(&self, out: &mut String) {
        out.push_str("has a first field that ");
        self.first.describe_to(out);
        out.push_str(", and has a second field that ");
        self.second.describe_to(out);
    }

    fn describe_negation_to(&self, out: &mut String) {
        out.push_str("has a first field that ");
        self.first.describe_negation_to(out);
        out.push_str(", or has a second field that ");
        self.second.describe_negation_to(out);
    }
}


#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn pair_of_an_accepts_any_entry() {
        let key: i32 = kani::any();
        let value: i32 = kani::any();
        assert!(pair(an::<i32>(), an::<i32>()).matches(&(key, value)));
    }
}
