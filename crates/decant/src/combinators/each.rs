//! Traversal: apply an inner parser to every element of a sequence or every
//! entry of a mapping.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::foundation::{Parse, ParseError};
use crate::guards::mismatch;

// ============================================================================
// LIST OF
// ============================================================================

/// Requires a sequence and parses every element with the inner parser, in
/// order.
///
/// The first failing element short-circuits the traversal; its error comes
/// back wrapped as `AtIndex(index, elementError)`.
///
/// # Examples
///
/// ```rust,ignore
/// use decant::prelude::*;
/// use serde_json::json;
///
/// let tags = is_list_of(is_str());
/// assert_eq!(
///     tags.parse(&json!(["a", "b"])).unwrap(),
///     vec!["a".to_string(), "b".to_string()],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ListOf<P> {
    inner: P,
}

impl<P> ListOf<P> {
    /// Creates the element-wise parser.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// A reference to the inner parser.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Parse> Parse for ListOf<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError> {
        let items = match input {
            Value::Array(items) => items,
            other => return Err(mismatch("sequence", other)),
        };
        let mut parsed = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            parsed.push(
                self.inner
                    .parse(item)
                    .map_err(|failure| failure.at_index(index))?,
            );
        }
        Ok(parsed)
    }
}

/// Requires a sequence, parsing every element with `inner`.
pub fn is_list_of<P>(inner: P) -> ListOf<P> {
    ListOf::new(inner)
}

// ============================================================================
// MAP OF
// ============================================================================

/// Requires a mapping and parses every entry's value with the inner parser.
///
/// The first failing entry short-circuits; its error comes back wrapped as
/// `AtKey(key, entryError)`. Entries are visited in the mapping's own
/// order; the output is keyed on the original string keys.
#[derive(Debug, Clone)]
pub struct MapOf<P> {
    inner: P,
}

impl<P> MapOf<P> {
    /// Creates the entry-wise parser.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// A reference to the inner parser.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Parse> Parse for MapOf<P> {
    type Output = BTreeMap<String, P::Output>;

    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError> {
        let entries = match input {
            Value::Object(entries) => entries,
            other => return Err(mismatch("mapping", other)),
        };
        let mut parsed = BTreeMap::new();
        for (key, value) in entries {
            let typed = self
                .inner
                .parse(value)
                .map_err(|failure| failure.at_key(key.as_str()))?;
            parsed.insert(key.clone(), typed);
        }
        Ok(parsed)
    }
}

/// Requires a mapping, parsing every entry's value with `inner`.
pub fn is_map_of<P>(inner: P) -> MapOf<P> {
    MapOf::new(inner)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorValue;
    use crate::guards::is_int;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn list_of_parses_every_element_in_order() {
        let parser = is_list_of(is_int());
        assert_eq!(parser.parse(&json!([3, 1, 2])).unwrap(), vec![3, 1, 2]);
        assert_eq!(parser.parse(&json!([])).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn list_of_requires_a_sequence() {
        let parser = is_list_of(is_int());
        let failure = parser.parse(&json!({"0": 1})).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::expectation("sequence", "mapping")
        );
    }

    #[test]
    fn list_of_locates_the_first_bad_element() {
        let parser = is_list_of(is_int());
        let failure = parser.parse(&json!([1, "two", "three"])).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::at_index(1, ErrorValue::expectation("integer", "string"))
        );
    }

    #[test]
    fn map_of_parses_every_entry() {
        let parser = is_map_of(is_int());
        let parsed = parser.parse(&json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(parsed, BTreeMap::from([("a".into(), 1), ("b".into(), 2)]));
    }

    #[test]
    fn map_of_locates_the_bad_entry() {
        let parser = is_map_of(is_int());
        let failure = parser.parse(&json!({"a": 1, "b": true})).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::at_key("b", ErrorValue::expectation("integer", "boolean"))
        );
    }

    #[test]
    fn nested_traversal_composes_locations() {
        let parser = is_map_of(is_list_of(is_int()));
        let failure = parser.parse(&json!({"xs": [0, null]})).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::at_key(
                "xs",
                ErrorValue::at_index(1, ErrorValue::expectation("integer", "null")),
            )
        );
    }
}
