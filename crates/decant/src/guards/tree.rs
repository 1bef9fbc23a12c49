//! Guards for the two tree-shaped members of the alphabet.
//!
//! These guards hand back the raw, still-untyped children. To validate the
//! children too, reach for the traversal combinators
//! ([`is_list_of`](crate::combinators::is_list_of),
//! [`is_map_of`](crate::combinators::is_map_of)) or field navigation
//! ([`has_field`](crate::combinators::has_field)).

use serde_json::{Map, Value};

use crate::foundation::{Parse, ParseError};
use crate::guards::mismatch;

// ============================================================================
// SEQUENCE
// ============================================================================

/// Matches a sequence, yielding its elements untyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence;

impl Parse for Sequence {
    type Output = Vec<Value>;

    fn parse(&self, input: &Value) -> Result<Vec<Value>, ParseError> {
        match input {
            Value::Array(items) => Ok(items.clone()),
            other => Err(mismatch("sequence", other)),
        }
    }
}

/// Matches a sequence, yielding its elements untyped.
pub fn is_sequence() -> Sequence {
    Sequence
}

// ============================================================================
// MAPPING
// ============================================================================

/// Matches a mapping, yielding its entries untyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping;

impl Parse for Mapping {
    type Output = Map<String, Value>;

    fn parse(&self, input: &Value) -> Result<Map<String, Value>, ParseError> {
        match input {
            Value::Object(entries) => Ok(entries.clone()),
            other => Err(mismatch("mapping", other)),
        }
    }
}

/// Matches a mapping, yielding its entries untyped.
pub fn is_mapping() -> Mapping {
    Mapping
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorValue;
    use serde_json::json;

    #[test]
    fn sequence_is_identity_on_sequences() {
        let items = is_sequence().parse(&json!([1, "two", null])).unwrap();
        assert_eq!(items, vec![json!(1), json!("two"), json!(null)]);
    }

    #[test]
    fn sequence_rejects_mappings() {
        let failure = is_sequence().parse(&json!({"a": 1})).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::expectation("sequence", "mapping")
        );
    }

    #[test]
    fn mapping_is_identity_on_mappings() {
        let entries = is_mapping().parse(&json!({"a": 1, "b": null})).unwrap();
        assert_eq!(entries.get("a"), Some(&json!(1)));
        assert_eq!(entries.get("b"), Some(&json!(null)));
    }

    #[test]
    fn mapping_rejects_sequences() {
        let failure = is_mapping().parse(&json!([])).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::expectation("mapping", "sequence")
        );
    }
}
