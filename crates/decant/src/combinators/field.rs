//! Field navigation: look up a key in a mapping, delegate to an inner
//! parser, and relocate any failure with `AtKey`.

use serde_json::Value;

use crate::foundation::{ErrorValue, Parse, ParseError};
use crate::guards::mismatch;

// ============================================================================
// HAS FIELD
// ============================================================================

/// Requires a mapping containing `key`, then parses the value at `key`.
///
/// Three distinct failures, in order of checking:
///
/// - non-mapping input fails with the mapping guard's `Expectation`;
/// - a missing key fails with the fixed not-found error
///   `at key '<key>': key '<key>' not found`, which is distinguishable from
///   any `Expectation`;
/// - a failure of the inner parser comes back wrapped as
///   `AtKey(key, innerError)`.
///
/// # Examples
///
/// ```rust,ignore
/// use decant::prelude::*;
/// use serde_json::json;
///
/// let parser = has_field("id", is_int());
/// assert_eq!(parser.parse(&json!({"id": 7})).unwrap(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct HasField<P> {
    key: String,
    inner: P,
}

impl<P> HasField<P> {
    /// Creates the field parser.
    pub fn new(key: impl Into<String>, inner: P) -> Self {
        Self {
            key: key.into(),
            inner,
        }
    }

    /// The key this parser navigates into.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// A reference to the inner parser.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Parse> Parse for HasField<P> {
    type Output = P::Output;

    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError> {
        let entries = match input {
            Value::Object(entries) => entries,
            other => return Err(mismatch("mapping", other)),
        };
        match entries.get(&self.key) {
            Some(value) => self
                .inner
                .parse(value)
                .map_err(|failure| failure.at_key(self.key.as_str())),
            None => Err(ParseError::new(ErrorValue::verbose(format!(
                "key '{}' not found",
                self.key
            )))
            .at_key(self.key.as_str())),
        }
    }
}

/// Requires a mapping containing `key`, then parses the value at `key`.
pub fn has_field<P>(key: impl Into<String>, inner: P) -> HasField<P> {
    HasField::new(key, inner)
}

// ============================================================================
// HAS OPTIONAL FIELD
// ============================================================================

/// Like [`HasField`], but an absent key succeeds with `None` instead of
/// failing — and the inner parser is never invoked for it.
///
/// Absence and present-but-null are distinct cases: an explicit null at
/// `key` is handed to the inner parser exactly like any other value. Pair
/// this with [`nullable`](crate::foundation::ParseExt::nullable) when both
/// should collapse to `None`.
#[derive(Debug, Clone)]
pub struct HasOptionalField<P> {
    key: String,
    inner: P,
}

impl<P> HasOptionalField<P> {
    /// Creates the optional-field parser.
    pub fn new(key: impl Into<String>, inner: P) -> Self {
        Self {
            key: key.into(),
            inner,
        }
    }

    /// The key this parser navigates into.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// A reference to the inner parser.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Parse> Parse for HasOptionalField<P> {
    type Output = Option<P::Output>;

    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError> {
        let entries = match input {
            Value::Object(entries) => entries,
            other => return Err(mismatch("mapping", other)),
        };
        match entries.get(&self.key) {
            None => Ok(None),
            Some(value) => self
                .inner
                .parse(value)
                .map(Some)
                .map_err(|failure| failure.at_key(self.key.as_str())),
        }
    }
}

/// Like [`has_field`], but an absent key yields `None`.
pub fn has_optional_field<P>(key: impl Into<String>, inner: P) -> HasOptionalField<P> {
    HasOptionalField::new(key, inner)
}

// ============================================================================
// TESTS
// ============================================================================
