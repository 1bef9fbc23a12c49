//! Alternation: ordered, short-circuiting attempt of several parsers
//! against the same input.

use serde_json::Value;

use crate::foundation::{BoxParser, ErrorList, ErrorValue, Parse, ParseError};

// ============================================================================
// ANY OF
// ============================================================================

/// Tries each branch in order against the same input, returning the first
/// success and skipping the remaining branches.
///
/// If every branch fails, the failure is a flat
/// `MultipleErrors([...])` holding one entry per branch, in attempt order.
/// Branch attempts are fully isolated — parsers are pure, so a failed
/// attempt leaves no trace and backtracking is safe by construction.
///
/// The branch set is non-empty by construction (`first` plus `rest`). A
/// single-branch alternation is legal and behaves exactly as its branch:
/// its failure propagates unaggregated. The [`any_of!`](crate::any_of)
/// macro is the usual front end and requires at least two branches.
///
/// # Examples
///
/// ```rust,ignore
/// use decant::{any_of, prelude::*};
/// use serde_json::json;
///
/// let id = any_of![
///     is_int().map(|n| n.to_string()),
///     is_str(),
/// ];
/// assert_eq!(id.parse(&json!(7)).unwrap(), "7");
/// assert_eq!(id.parse(&json!("x7")).unwrap(), "x7");
/// ```
pub struct AnyOf<T> {
    first: BoxParser<T>,
    rest: Vec<BoxParser<T>>,
}

impl<T> AnyOf<T> {
    /// Creates an alternation over `first` and any further branches.
    pub fn new(first: BoxParser<T>, rest: Vec<BoxParser<T>>) -> Self {
        Self { first, rest }
    }

    /// Number of branches, always ≥ 1.
    pub fn branch_count(&self) -> usize {
        1 + self.rest.len()
    }
}

impl<T> std::fmt::Debug for AnyOf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyOf")
            .field("branches", &self.branch_count())
            .finish()
    }
}

impl<T> Parse for AnyOf<T> {
    type Output = T;

    fn parse(&self, input: &Value) -> Result<T, ParseError> {
        let first_failure = match self.first.parse(input) {
            Ok(value) => return Ok(value),
            Err(failure) => failure,
        };
        let mut later_failures = Vec::with_capacity(self.rest.len());
        for branch in &self.rest {
            match branch.parse(input) {
                Ok(value) => return Ok(value),
                Err(failure) => later_failures.push(failure.into_error()),
            }
        }
        let mut later_failures = later_failures.into_iter();
        match later_failures.next() {
            // Degenerate single-branch alternation: no aggregate to build.
            None => Err(first_failure),
            Some(second) => Err(ParseError::new(ErrorValue::multiple(ErrorList::new(
                first_failure.into_error(),
                second,
                later_failures.collect(),
            )))),
        }
    }
}

/// Tries each branch in order, returning the first success. See [`AnyOf`].
pub fn is_any_of<T>(first: BoxParser<T>, rest: Vec<BoxParser<T>>) -> AnyOf<T> {
    AnyOf::new(first, rest)
}

// ============================================================================
// ANY OF, DESCRIBED
// ============================================================================

/// [`AnyOf`] with a label per branch: on exhaustion, each branch's error is
/// wrapped as `Note(label, branchError)` before aggregation, so the
/// resulting `MultipleErrors` names which branch produced each entry.
///
/// # Examples
///
/// ```rust,ignore
/// use decant::{any_of_described, prelude::*};
///
/// let peer = any_of_described![
///     ("as channel", has_field("channel_id", is_int())),
///     ("as user", has_field("user_id", is_int())),
/// ];
/// ```
pub struct AnyOfDescribed<T> {
    first: (String, BoxParser<T>),
    rest: Vec<(String, BoxParser<T>)>,
}

impl<T> AnyOfDescribed<T> {
    /// Creates a labeled alternation over `first` and any further branches.
    pub fn new(first: (String, BoxParser<T>), rest: Vec<(String, BoxParser<T>)>) -> Self {
        Self { first, rest }
    }

    /// Number of branches, always ≥ 1.
    pub fn branch_count(&self) -> usize {
        1 + self.rest.len()
    }
}

impl<T> std::fmt::Debug for AnyOfDescribed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut labels = Vec::with_capacity(self.branch_count());
        labels.push(self.first.0.as_str());
        labels.extend(self.rest.iter().map(|(label, _)| label.as_str()));
        f.debug_struct("AnyOfDescribed")
            .field("branches", &labels)
            .finish()
    }
}

impl<T> Parse for AnyOfDescribed<T> {
    type Output = T;

    fn parse(&self, input: &Value) -> Result<T, ParseError> {
        let (first_label, first_branch) = &self.first;
        let first_failure = match first_branch.parse(input) {
            Ok(value) => return Ok(value),
            Err(failure) => failure.noted(first_label.as_str()),
        };
        let mut later_failures = Vec::with_capacity(self.rest.len());
        for (label, branch) in &self.rest {
            match branch.parse(input) {
                Ok(value) => return Ok(value),
                Err(failure) => later_failures.push(failure.noted(label.as_str()).into_error()),
            }
        }
        let mut later_failures = later_failures.into_iter();
        match later_failures.next() {
            None => Err(first_failure),
            Some(second) => Err(ParseError::new(ErrorValue::multiple(ErrorList::new(
                first_failure.into_error(),
                second,
                later_failures.collect(),
            )))),
        }
    }
}

/// Labeled alternation. See [`AnyOfDescribed`].
pub fn is_any_of_described<T>(
    first: (String, BoxParser<T>),
    rest: Vec<(String, BoxParser<T>)>,
) -> AnyOfDescribed<T> {
    AnyOfDescribed::new(first, rest)
}

// ============================================================================
// TESTS
// ============================================================================
