//! Null tolerance: accept a shape or an explicit null.

use serde_json::Value;

use crate::foundation::{ErrorList, ErrorValue, Parse, ParseError};
use crate::guards::tag_name;

// ============================================================================
// NULLABLE
// ============================================================================

/// Accepts the inner parser's shape (yielding `Some`) or an explicit null
/// (yielding `None`).
///
/// This is the alternation `inner | null` spelled out, and it fails the
/// same way: when the input is neither, the failure is
/// `MultipleErrors([innerError, Expectation("null", tag)])` in that attempt
/// order.
///
/// Note the difference from
/// [`has_optional_field`](crate::combinators::has_optional_field): this
/// combinator handles present-but-null values, the other handles absent
/// keys. A field that may be missing *or* null composes both:
/// `has_optional_field(key, inner.nullable())`.
#[derive(Debug, Clone)]
pub struct Nullable<P> {
    inner: P,
}

impl<P> Nullable<P> {
    /// Creates the null-tolerant parser.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// A reference to the inner parser.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Parse> Parse for Nullable<P> {
    type Output = Option<P::Output>;

    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError> {
        let failure = match self.inner.parse(input) {
            Ok(value) => return Ok(Some(value)),
            Err(failure) => failure,
        };
        if matches!(input, Value::Null) {
            return Ok(None);
        }
        Err(ParseError::new(ErrorValue::multiple(ErrorList::new(
            failure.into_error(),
            ErrorValue::expectation("null", tag_name(input)),
            vec![],
        ))))
    }
}

/// Accepts `inner`'s shape or an explicit null.
pub fn is_optional<P>(inner: P) -> Nullable<P> {
    Nullable::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================
