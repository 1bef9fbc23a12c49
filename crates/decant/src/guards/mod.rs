//! Primitive type-guards.
//!
//! One guard per member of the untyped-value alphabet: null, boolean,
//! integer, float, string, sequence, mapping — plus the trivial parsers
//! that accept anything or ignore their input entirely.
//!
//! Every tag-matching guard follows the same contract: if the input's
//! runtime tag matches the target type, the input is returned reinterpreted
//! at that static type, identity on representation (a numeric string is
//! never accepted as an integer); otherwise the guard fails with
//! `Expectation(expected = <type name>, actual = <observed tag name>)`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use decant::prelude::*;
//! use serde_json::json;
//!
//! assert_eq!(is_int().parse(&json!(7)).unwrap(), 7);
//! assert_eq!(
//!     is_int().parse(&json!("7")).unwrap_err().to_string(),
//!     "expected integer, got string",
//! );
//! ```

pub mod scalar;
pub mod tree;
pub mod trivial;

pub use scalar::{Boolean, Float, Int, Null, Str, is_bool, is_float, is_int, is_null, is_str};
pub use tree::{Mapping, Sequence, is_mapping, is_sequence};
pub use trivial::{Always, Anything, is_always, is_anything};

use serde_json::Value;

use crate::foundation::{ErrorValue, ParseError};

/// The diagnostic name of a value's runtime tag.
///
/// These are the names every guard uses on both sides of an `Expectation`.
/// Numbers are `integer` when the decoder tagged them as i64/u64 and
/// `float` when it tagged them f64 — the engine never widens or truncates.
pub fn tag_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) => {
            if number.is_f64() {
                "float"
            } else {
                "integer"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// A mismatch failure naming the observed tag.
pub(crate) fn mismatch(expected: &str, observed: &Value) -> ParseError {
    ParseError::new(ErrorValue::expectation(expected, tag_name(observed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_names_cover_the_alphabet() {
        assert_eq!(tag_name(&json!(null)), "null");
        assert_eq!(tag_name(&json!(true)), "boolean");
        assert_eq!(tag_name(&json!(1)), "integer");
        assert_eq!(tag_name(&json!(1.5)), "float");
        assert_eq!(tag_name(&json!("x")), "string");
        assert_eq!(tag_name(&json!([])), "sequence");
        assert_eq!(tag_name(&json!({})), "mapping");
    }
}
