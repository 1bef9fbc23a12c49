//! Annotation: label a parser's failures without adding a location.

use serde_json::Value;

use crate::foundation::{Parse, ParseError};

// ============================================================================
// NOTED
// ============================================================================

/// Wraps any failure of the inner parser in `Note(note, error)`.
///
/// Successes pass through unchanged. Usually written via
/// [`ParseExt::noted`](crate::foundation::ParseExt::noted).
#[derive(Debug, Clone)]
pub struct Noted<P> {
    note: String,
    inner: P,
}

impl<P> Noted<P> {
    /// Creates the annotating parser.
    pub fn new(note: impl Into<String>, inner: P) -> Self {
        Self {
            note: note.into(),
            inner,
        }
    }

    /// The label attached to failures.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// A reference to the inner parser.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Parse> Parse for Noted<P> {
    type Output = P::Output;

    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError> {
        self.inner
            .parse(input)
            .map_err(|failure| failure.noted(self.note.as_str()))
    }
}

/// Wraps any failure of `inner` in `Note(note, error)`.
pub fn noted<P>(note: impl Into<String>, inner: P) -> Noted<P> {
    Noted::new(note, inner)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorValue;
    use crate::guards::is_int;
    use serde_json::json;

    #[test]
    fn success_is_untouched() {
        let parser = noted("retry count", is_int());
        assert_eq!(parser.parse(&json!(3)).unwrap(), 3);
    }

    #[test]
    fn failure_gains_the_note() {
        let parser = noted("retry count", is_int());
        let failure = parser.parse(&json!("x")).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::note("retry count", ErrorValue::expectation("integer", "string"))
        );
        assert_eq!(
            ErrorValue::note("retry count", ErrorValue::expectation("integer", "string"))
                .to_string(),
            "retry count: expected integer, got string"
        );
    }
}
