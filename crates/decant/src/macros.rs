//! Macros for composing alternations without boxing noise.
//!
//! # Available Macros
//!
//! - [`any_of!`](crate::any_of) — ordered alternation over ≥2 branches
//! - [`any_of_described!`](crate::any_of_described) — the same, with a
//!   label per branch
//!
//! # Examples
//!
//! ```rust,ignore
//! use decant::{any_of, prelude::*};
//!
//! let sender = any_of![
//!     has_field("sender_chat", chat_parser),
//!     has_field("from", user_parser),
//! ];
//! ```

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Builds an [`AnyOf`](crate::combinators::AnyOf) alternation, boxing each
/// branch.
///
/// Requires at least two branches; a degenerate single-branch alternation
/// has to be spelled out via `AnyOf::new` deliberately.
#[macro_export]
macro_rules! any_of {
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::AnyOf::new(
            ::std::boxed::Box::new($first),
            ::std::vec![$(::std::boxed::Box::new($rest) as _),+],
        )
    };
}

// ============================================================================
// ANY_OF_DESCRIBED MACRO
// ============================================================================

/// Builds an [`AnyOfDescribed`](crate::combinators::AnyOfDescribed)
/// alternation from `(label, parser)` pairs, boxing each branch.
///
/// Requires at least two branches.
#[macro_export]
macro_rules! any_of_described {
    (($first_label:expr, $first:expr), $(($label:expr, $parser:expr)),+ $(,)?) => {
        $crate::combinators::AnyOfDescribed::new(
            (
                ::std::convert::Into::into($first_label),
                ::std::boxed::Box::new($first) as _,
            ),
            ::std::vec![$((
                ::std::convert::Into::into($label),
                ::std::boxed::Box::new($parser) as _,
            )),+],
        )
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{ErrorList, ErrorValue, Parse, ParseExt};
    use crate::guards::{is_int, is_str};
    use serde_json::json;

    #[test]
    fn any_of_takes_heterogeneous_branches() {
        let parser = any_of![is_int().map(|n| n.to_string()), is_str()];
        assert_eq!(parser.parse(&json!(7)).unwrap(), "7");
        assert_eq!(parser.parse(&json!("x")).unwrap(), "x");
        assert_eq!(parser.branch_count(), 2);
    }

    #[test]
    fn any_of_tolerates_trailing_comma() {
        let parser = any_of![
            is_int(),
            is_str().map(|text| text.len() as i64),
        ];
        assert_eq!(parser.parse(&json!("four")).unwrap(), 4);
    }

    #[test]
    fn any_of_described_labels_branches() {
        let parser = any_of_described![
            ("as number", is_int()),
            ("as text", is_str().map(|text| text.len() as i64)),
        ];
        let failure = parser.parse(&json!(null)).unwrap_err();
        assert_eq!(
            failure.into_error(),
            ErrorValue::multiple(ErrorList::new(
                ErrorValue::note("as number", ErrorValue::expectation("integer", "null")),
                ErrorValue::note("as text", ErrorValue::expectation("string", "null")),
                vec![],
            ))
        );
    }
}
