//! Guards for the scalar members of the alphabet.

use serde_json::Value;

use crate::foundation::{ErrorValue, Parse, ParseError};
use crate::guards::mismatch;

// ============================================================================
// NULL
// ============================================================================

/// Matches exactly null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Null;

impl Parse for Null {
    type Output = ();

    fn parse(&self, input: &Value) -> Result<(), ParseError> {
        match input {
            Value::Null => Ok(()),
            other => Err(mismatch("null", other)),
        }
    }
}

/// Matches exactly null.
pub fn is_null() -> Null {
    Null
}

// ============================================================================
// BOOLEAN
// ============================================================================

/// Matches a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boolean;

impl Parse for Boolean {
    type Output = bool;

    fn parse(&self, input: &Value) -> Result<bool, ParseError> {
        match input {
            Value::Bool(value) => Ok(*value),
            other => Err(mismatch("boolean", other)),
        }
    }
}

/// Matches a boolean.
pub fn is_bool() -> Boolean {
    Boolean
}

// ============================================================================
// INTEGER
// ============================================================================

/// Matches an integer-tagged number.
///
/// Only numbers the decoder tagged as integers are accepted — a float is
/// rejected even when it happens to be whole, and a numeric string is a
/// string. An unsigned value above `i64::MAX` is an integer the output type
/// cannot hold; it is rejected with a dedicated `actual` so the caller can
/// tell it apart from a plain tag mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int;

impl Parse for Int {
    type Output = i64;

    fn parse(&self, input: &Value) -> Result<i64, ParseError> {
        if let Value::Number(number) = input {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            if number.is_u64() {
                return Err(ParseError::new(ErrorValue::expectation(
                    "integer",
                    "out-of-range integer",
                )));
            }
        }
        Err(mismatch("integer", input))
    }
}

/// Matches an integer-tagged number.
pub fn is_int() -> Int {
    Int
}

// ============================================================================
// FLOAT
// ============================================================================

/// Matches a float-tagged number.
///
/// Integer-tagged numbers are rejected; the engine never widens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float;

impl Parse for Float {
    type Output = f64;

    fn parse(&self, input: &Value) -> Result<f64, ParseError> {
        if let Value::Number(number) = input {
            if number.is_f64() {
                if let Some(float) = number.as_f64() {
                    return Ok(float);
                }
            }
        }
        Err(mismatch("float", input))
    }
}

/// Matches a float-tagged number.
pub fn is_float() -> Float {
    Float
}

// ============================================================================
// STRING
// ============================================================================

/// Matches a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Str;

impl Parse for Str {
    type Output = String;

    fn parse(&self, input: &Value) -> Result<String, ParseError> {
        match input {
            Value::String(text) => Ok(text.clone()),
            other => Err(mismatch("string", other)),
        }
    }
}

/// Matches a string.
pub fn is_str() -> Str {
    Str
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorValue;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn null_accepts_null() {
        assert!(is_null().parse(&json!(null)).is_ok());
    }

    #[test]
    fn bool_is_identity_on_booleans() {
        assert!(is_bool().parse(&json!(true)).unwrap());
        assert!(!is_bool().parse(&json!(false)).unwrap());
    }

    #[test]
    fn int_is_identity_on_integers() {
        assert_eq!(is_int().parse(&json!(-3)).unwrap(), -3);
        assert_eq!(is_int().parse(&json!(i64::MAX)).unwrap(), i64::MAX);
    }

    #[test]
    fn int_rejects_floats_even_when_whole() {
        let failure = is_int().parse(&json!(3.0)).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::expectation("integer", "float")
        );
    }

    #[test]
    fn int_reports_unsigned_overflow_distinctly() {
        let failure = is_int().parse(&json!(u64::MAX)).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::expectation("integer", "out-of-range integer")
        );
    }

    #[test]
    fn float_rejects_integers() {
        assert_eq!(is_float().parse(&json!(2.5)).unwrap(), 2.5);
        let failure = is_float().parse(&json!(2)).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::expectation("float", "integer")
        );
    }

    #[test]
    fn str_clones_out_the_text() {
        assert_eq!(is_str().parse(&json!("hi")).unwrap(), "hi");
    }

    #[rstest]
    #[case(json!(null), "null")]
    #[case(json!(true), "boolean")]
    #[case(json!(1.5), "float")]
    #[case(json!([1]), "sequence")]
    #[case(json!({"k": 1}), "mapping")]
    fn str_mismatch_names_observed_tag(#[case] input: Value, #[case] observed: &str) {
        let failure = is_str().parse(&input).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::expectation("string", observed)
        );
    }

    #[rstest]
    #[case(json!(null), "null")]
    #[case(json!("1"), "string")]
    #[case(json!([1]), "sequence")]
    fn int_mismatch_names_observed_tag(#[case] input: Value, #[case] observed: &str) {
        let failure = is_int().parse(&input).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::expectation("integer", observed)
        );
    }
}
