//! Tag dispatch: pick a parser based on a discriminating tag extracted from
//! the input itself.

use std::fmt;

use serde_json::Value;

use crate::foundation::{BoxParser, ErrorValue, Parse, ParseError};

// ============================================================================
// VARIANT
// ============================================================================

/// Extracts a tag from the input, then runs the parser registered for that
/// tag against the whole input.
///
/// Without a fallback, tag-extraction failures and unknown tags fail under
/// the note `Unknown variant`, the latter with an `Expectation` listing the
/// known tags. With a fallback, tag-extraction failures are noted
/// `Variant tag` and unknown tags are handed to the fallback to build a
/// branch instead of failing. Either way, the chosen branch's failures are
/// noted with the tag's display form.
///
/// # Examples
///
/// ```rust,ignore
/// use decant::prelude::*;
///
/// let event = is_variant(
///     has_field("kind", is_str()).boxed(),
///     vec![
///         ("joined".to_string(), joined_parser.boxed()),
///         ("left".to_string(), left_parser.boxed()),
///     ],
/// );
/// ```
pub struct Variant<K, T> {
    tag: BoxParser<K>,
    table: Vec<(K, BoxParser<T>)>,
    fallback: Option<FallbackFn<K, T>>,
}

type FallbackFn<K, T> = Box<dyn Fn(&K) -> BoxParser<T>>;

impl<K, T> Variant<K, T> {
    /// Creates a dispatcher that rejects unknown tags.
    pub fn new(tag: BoxParser<K>, table: Vec<(K, BoxParser<T>)>) -> Self {
        Self {
            tag,
            table,
            fallback: None,
        }
    }

    /// Creates a dispatcher that builds a branch for unknown tags.
    pub fn with_fallback(
        tag: BoxParser<K>,
        table: Vec<(K, BoxParser<T>)>,
        fallback: impl Fn(&K) -> BoxParser<T> + 'static,
    ) -> Self {
        Self {
            tag,
            table,
            fallback: Some(Box::new(fallback)),
        }
    }

    /// Number of registered tags.
    pub fn tag_count(&self) -> usize {
        self.table.len()
    }
}

impl<K: fmt::Debug, T> fmt::Debug for Variant<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&K> = self.table.iter().map(|(tag, _)| tag).collect();
        f.debug_struct("Variant")
            .field("tags", &tags)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<K, T> Parse for Variant<K, T>
where
    K: PartialEq + fmt::Display,
{
    type Output = T;

    fn parse(&self, input: &Value) -> Result<T, ParseError> {
        match &self.fallback {
            None => {
                let tag = self
                    .tag
                    .parse(input)
                    .map_err(|failure| failure.noted("Unknown variant"))?;
                let known = self.table.iter().find(|(candidate, _)| *candidate == tag);
                match known {
                    Some((_, branch)) => branch
                        .parse(input)
                        .map_err(|failure| failure.noted(tag.to_string())),
                    None => {
                        let expected = self
                            .table
                            .iter()
                            .map(|(candidate, _)| format!("'{candidate}'"))
                            .collect::<Vec<_>>()
                            .join(" or ");
                        Err(
                            ParseError::new(ErrorValue::expectation(expected, format!("'{tag}'")))
                                .noted("Unknown variant"),
                        )
                    }
                }
            }
            Some(fallback) => {
                let tag = self
                    .tag
                    .parse(input)
                    .map_err(|failure| failure.noted("Variant tag"))?;
                let built;
                let branch = match self.table.iter().find(|(candidate, _)| *candidate == tag) {
                    Some((_, branch)) => branch,
                    None => {
                        built = fallback(&tag);
                        &built
                    }
                };
                branch
                    .parse(input)
                    .map_err(|failure| failure.noted(tag.to_string()))
            }
        }
    }
}

/// Dispatches on an extracted tag, rejecting unknown tags. See [`Variant`].
pub fn is_variant<K, T>(tag: BoxParser<K>, table: Vec<(K, BoxParser<T>)>) -> Variant<K, T> {
    Variant::new(tag, table)
}

/// Dispatches on an extracted tag, building a branch for unknown tags.
/// See [`Variant`].
pub fn is_variant_with_fallback<K, T>(
    tag: BoxParser<K>,
    table: Vec<(K, BoxParser<T>)>,
    fallback: impl Fn(&K) -> BoxParser<T> + 'static,
) -> Variant<K, T> {
    Variant::with_fallback(tag, table, fallback)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::has_field;
    use crate::foundation::ParseExt;
    use crate::guards::{is_always, is_int, is_str};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn kinds() -> Variant<String, i64> {
        is_variant(
            has_field("kind", is_str()).boxed(),
            vec![
                ("count".to_string(), has_field("n", is_int()).boxed()),
                ("unit".to_string(), is_always(1_i64).boxed()),
            ],
        )
    }

    #[test]
    fn dispatches_on_the_tag() {
        let parser = kinds();
        assert_eq!(
            parser.parse(&json!({"kind": "count", "n": 5})).unwrap(),
            5
        );
        assert_eq!(parser.parse(&json!({"kind": "unit"})).unwrap(), 1);
    }

    #[test]
    fn unknown_tag_lists_the_known_ones() {
        let parser = kinds();
        let failure = parser.parse(&json!({"kind": "other"})).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::note(
                "Unknown variant",
                ErrorValue::expectation("'count' or 'unit'", "'other'"),
            )
        );
    }

    #[test]
    fn tag_extraction_failure_is_noted() {
        let parser = kinds();
        let failure = parser.parse(&json!({"n": 5})).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::note(
                "Unknown variant",
                ErrorValue::at_key("kind", ErrorValue::verbose("key 'kind' not found")),
            )
        );
    }

    #[test]
    fn branch_failures_are_noted_with_the_tag() {
        let parser = kinds();
        let failure = parser
            .parse(&json!({"kind": "count", "n": "five"}))
            .unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::note(
                "count",
                ErrorValue::at_key("n", ErrorValue::expectation("integer", "string")),
            )
        );
    }

    #[test]
    fn fallback_handles_unknown_tags() {
        let parser = is_variant_with_fallback(
            has_field("kind", is_str()).boxed(),
            vec![("count".to_string(), has_field("n", is_int()).boxed())],
            |_tag: &String| is_always(0_i64).boxed(),
        );
        assert_eq!(
            parser.parse(&json!({"kind": "count", "n": 5})).unwrap(),
            5
        );
        assert_eq!(parser.parse(&json!({"kind": "mystery"})).unwrap(), 0);
    }

    #[test]
    fn fallback_notes_tag_extraction_differently() {
        let parser = is_variant_with_fallback(
            has_field("kind", is_str()).boxed(),
            vec![("count".to_string(), has_field("n", is_int()).boxed())],
            |_tag: &String| is_always(0_i64).boxed(),
        );
        let failure = parser.parse(&json!({})).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::note(
                "Variant tag",
                ErrorValue::at_key("kind", ErrorValue::verbose("key 'kind' not found")),
            )
        );
    }
}
