//! The structured error model for failed parses.
//!
//! A failed parse produces a [`ParseError`] carrying exactly one
//! [`ErrorValue`] — an immutable tree describing why the input was rejected
//! and where. Location wrappers ([`ErrorValue::AtKey`],
//! [`ErrorValue::AtIndex`]) are applied bottom-up, once per navigation step,
//! so a deeply nested error encodes the exact path from the root input to
//! the failing sub-value.
//!
//! Two renderings exist:
//!
//! - `Display` (on both types) produces the human diagnostic text, e.g.
//!   `at key 'from': at key 'first_name': expected string, got integer`.
//! - [`ErrorValue::to_value`] produces a `serde_json::Value` mirror of the
//!   tree for structured logging.

use std::fmt;

use serde_json::{Value, json};

// ============================================================================
// ERROR VALUE
// ============================================================================

/// Why (and where) a parse failed.
///
/// The variants split into failure *reasons* (`Verbose`, `Expectation`,
/// `MultipleErrors`) and failure *context* (`AtIndex`, `AtKey`, `Note`) —
/// context never constitutes a new reason, it relocates or annotates an
/// existing one.
///
/// # Examples
///
/// ```rust,ignore
/// use decant::foundation::ErrorValue;
///
/// let error = ErrorValue::at_key(
///     "age",
///     ErrorValue::expectation("integer", "string"),
/// );
/// assert_eq!(error.to_string(), "at key 'age': expected integer, got string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValue {
    /// A free-form description with no structural information.
    Verbose(String),

    /// A type or shape mismatch: `expected` names the required shape,
    /// `actual` names what was observed.
    Expectation {
        expected: String,
        actual: String,
    },

    /// Aggregated failures from trying two or more alternatives, in the
    /// order the alternatives were attempted. The [`ErrorList`] payload
    /// cannot hold fewer than two entries.
    MultipleErrors(ErrorList),

    /// The wrapped error occurred at `index` of a sequence.
    AtIndex {
        index: usize,
        error: Box<ErrorValue>,
    },

    /// The wrapped error occurred at `key` of a mapping.
    AtKey {
        key: String,
        error: Box<ErrorValue>,
    },

    /// Annotates a wrapped error with a descriptive label without adding a
    /// location.
    Note {
        note: String,
        original: Box<ErrorValue>,
    },
}

impl ErrorValue {
    /// Creates a [`ErrorValue::Verbose`] error.
    pub fn verbose(message: impl Into<String>) -> Self {
        Self::Verbose(message.into())
    }

    /// Creates an [`ErrorValue::Expectation`] error.
    pub fn expectation(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Expectation {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Wraps an error as having occurred at `index` of a sequence.
    pub fn at_index(index: usize, error: ErrorValue) -> Self {
        Self::AtIndex {
            index,
            error: Box::new(error),
        }
    }

    /// Wraps an error as having occurred at `key` of a mapping.
    pub fn at_key(key: impl Into<String>, error: ErrorValue) -> Self {
        Self::AtKey {
            key: key.into(),
            error: Box::new(error),
        }
    }

    /// Annotates an error with a label.
    pub fn note(note: impl Into<String>, original: ErrorValue) -> Self {
        Self::Note {
            note: note.into(),
            original: Box::new(original),
        }
    }

    /// Creates an [`ErrorValue::MultipleErrors`] aggregate.
    pub fn multiple(errors: ErrorList) -> Self {
        Self::MultipleErrors(errors)
    }

    /// Converts the tree into a `serde_json::Value` mirror, for callers that
    /// want structured diagnostics in logs instead of rendered text.
    ///
    /// Child ordering matches the `Display` rendering, so the two forms stay
    /// reproducible with respect to each other.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Verbose(message) => json!(message),
            Self::Expectation { expected, actual } => {
                json!({ "expected": expected, "actual": actual })
            }
            Self::MultipleErrors(errors) => {
                let errors: Vec<Value> = errors.iter().map(Self::to_value).collect();
                json!({ "multiple_errors": errors })
            }
            Self::AtIndex { index, error } => {
                json!({ "at_index": index, "error": error.to_value() })
            }
            Self::AtKey { key, error } => {
                json!({ "at_key": key, "error": error.to_value() })
            }
            Self::Note { note, original } => {
                json!({ "note": note, "error": original.to_value() })
            }
        }
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbose(message) => f.write_str(message),
            Self::Expectation { expected, actual } => {
                write!(f, "expected {expected}, got {actual}")
            }
            Self::AtIndex { index, error } => write!(f, "at index {index}: {error}"),
            Self::AtKey { key, error } => write!(f, "at key '{key}': {error}"),
            Self::Note { note, original } => write!(f, "{note}: {original}"),
            Self::MultipleErrors(errors) => {
                f.write_str("all possibilities failed:")?;
                for error in errors {
                    let rendered = error.to_string();
                    if rendered.is_empty() {
                        write!(f, "\n    - ")?;
                        continue;
                    }
                    // A nested aggregate renders over several lines; keep its
                    // continuation lines indented under the bullet.
                    let mut lines = rendered.lines();
                    if let Some(first) = lines.next() {
                        write!(f, "\n    - {first}")?;
                    }
                    for line in lines {
                        write!(f, "\n    {line}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ErrorValue {}

// ============================================================================
// ERROR LIST
// ============================================================================

/// The payload of [`ErrorValue::MultipleErrors`]: an ordered aggregate of at
/// least two errors.
///
/// The minimum length is enforced by construction — [`ErrorList::new`] takes
/// the first two entries as separate arguments, and the fallible
/// `TryFrom<Vec<ErrorValue>>` rejects shorter vectors — so an undersized
/// aggregate is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorList(Vec<ErrorValue>);

impl ErrorList {
    /// Creates an aggregate from its first two entries and any further ones.
    pub fn new(first: ErrorValue, second: ErrorValue, rest: Vec<ErrorValue>) -> Self {
        let mut errors = Vec::with_capacity(2 + rest.len());
        errors.push(first);
        errors.push(second);
        errors.extend(rest);
        Self(errors)
    }

    /// Number of aggregated errors, always ≥ 2.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API completeness.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the aggregated errors in attempt order.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorValue> {
        self.0.iter()
    }

    /// The aggregated errors as a slice, in attempt order.
    pub fn as_slice(&self) -> &[ErrorValue] {
        &self.0
    }
}

impl TryFrom<Vec<ErrorValue>> for ErrorList {
    type Error = TooFewErrors;

    fn try_from(errors: Vec<ErrorValue>) -> Result<Self, TooFewErrors> {
        if errors.len() < 2 {
            return Err(TooFewErrors {
                actual: errors.len(),
            });
        }
        Ok(Self(errors))
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ErrorValue;
    type IntoIter = std::slice::Iter<'a, ErrorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ErrorList {
    type Item = ErrorValue;
    type IntoIter = std::vec::IntoIter<ErrorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Rejection raised when building an [`ErrorList`] from fewer than two
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("an error aggregate needs at least two entries, got {actual}")]
pub struct TooFewErrors {
    /// How many entries were actually supplied.
    pub actual: usize,
}

// ============================================================================
// PARSE ERROR
// ============================================================================

/// The failure signal of a parse attempt, carrying the root-cause
/// [`ErrorValue`] for that attempt.
///
/// A `ParseError` is a normal, statically-expected outcome — it travels in
/// the `Err` arm of every parser's `Result`, never via unwinding. The
/// [`at_key`](Self::at_key), [`at_index`](Self::at_index) and
/// [`noted`](Self::noted) helpers relocate or annotate the carried error as
/// it propagates out through composed parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(transparent)]
pub struct ParseError {
    error: ErrorValue,
}

impl ParseError {
    /// Creates a failure from its root cause.
    pub fn new(error: ErrorValue) -> Self {
        Self { error }
    }

    /// The carried error value.
    pub fn error(&self) -> &ErrorValue {
        &self.error
    }

    /// Extracts the carried error value.
    pub fn into_error(self) -> ErrorValue {
        self.error
    }

    /// Relocates the failure one mapping level up, under `key`.
    #[must_use = "returns the relocated error rather than mutating in place"]
    pub fn at_key(self, key: impl Into<String>) -> Self {
        Self {
            error: ErrorValue::at_key(key, self.error),
        }
    }

    /// Relocates the failure one sequence level up, under `index`.
    #[must_use = "returns the relocated error rather than mutating in place"]
    pub fn at_index(self, index: usize) -> Self {
        Self {
            error: ErrorValue::at_index(index, self.error),
        }
    }

    /// Annotates the failure with a label.
    #[must_use = "returns the annotated error rather than mutating in place"]
    pub fn noted(self, note: impl Into<String>) -> Self {
        Self {
            error: ErrorValue::note(note, self.error),
        }
    }
}

impl From<ErrorValue> for ParseError {
    fn from(error: ErrorValue) -> Self {
        Self::new(error)
    }
}

// ============================================================================
// TESTS
// ============================================================================
