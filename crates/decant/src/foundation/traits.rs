//! The parser contract.
//!
//! Every validator in this crate implements [`Parse`]: a pure function from
//! a borrowed untyped value to either a typed result or a [`ParseError`].
//! Parsers hold no mutable state and perform no I/O, so a failed attempt
//! leaves no trace — which is exactly what makes alternation's backtracking
//! safe, and what makes any parser trivially shareable across threads.

use serde_json::Value;

use crate::combinators::{Mapped, Noted, Nullable};
use crate::foundation::ParseError;

// ============================================================================
// PARSE TRAIT
// ============================================================================

/// A pure capability turning an untyped value into a typed one.
///
/// # Examples
///
/// ```rust,ignore
/// use decant::prelude::*;
/// use serde_json::json;
///
/// struct Exact(String);
///
/// impl Parse for Exact {
///     type Output = String;
///
///     fn parse(&self, input: &Value) -> Result<String, ParseError> {
///         let text = is_str().parse(input)?;
///         if text == self.0 {
///             Ok(text)
///         } else {
///             Err(ParseError::new(ErrorValue::expectation(
///                 format!("'{}'", self.0),
///                 format!("'{text}'"),
///             )))
///         }
///     }
/// }
///
/// assert!(Exact("ok".into()).parse(&json!("ok")).is_ok());
/// ```
pub trait Parse {
    /// The statically-typed result of a successful parse.
    type Output;

    /// Validates `input` and converts it, or signals why it was rejected.
    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError>;
}

impl<P> Parse for Box<P>
where
    P: Parse + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, input: &Value) -> Result<Self::Output, ParseError> {
        (**self).parse(input)
    }
}

/// A boxed parser. This is the uniform branch type wherever a statically
/// heterogeneous set of parsers must share one type: alternation branches,
/// variant tables, recursive schemas.
pub type BoxParser<T> = Box<dyn Parse<Output = T>>;

// ============================================================================
// FUNCTION ADAPTER
// ============================================================================

/// Adapts a plain function or closure into a parser.
///
/// Besides ad-hoc one-off parsers, this is the recursion escape hatch: a
/// named `fn` can parse a recursive schema by calling itself, and `from_fn`
/// makes it composable with every combinator.
///
/// # Examples
///
/// ```rust,ignore
/// use decant::prelude::*;
///
/// fn tree(input: &Value) -> Result<Vec<i64>, ParseError> {
///     is_any_of(
///         is_int().map(|leaf| vec![leaf]).boxed(),
///         vec![is_list_of(from_fn(tree)).map(|forests| forests.concat()).boxed()],
///     )
///     .parse(input)
/// }
/// ```
pub struct FromFn<F> {
    function: F,
}

impl<F> FromFn<F> {
    /// Wraps `function` as a parser.
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<T, F> Parse for FromFn<F>
where
    F: Fn(&Value) -> Result<T, ParseError>,
{
    type Output = T;

    fn parse(&self, input: &Value) -> Result<T, ParseError> {
        (self.function)(input)
    }
}

impl<F: Clone> Clone for FromFn<F> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
        }
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("function", &"<fn>").finish()
    }
}

/// Adapts a function into a parser. See [`FromFn`].
pub fn from_fn<T, F>(function: F) -> FromFn<F>
where
    F: Fn(&Value) -> Result<T, ParseError>,
{
    FromFn::new(function)
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Extension methods for composing parsers, automatically implemented for
/// every [`Parse`] type.
pub trait ParseExt: Parse + Sized {
    /// Applies `transform` to this parser's successful result. Failures
    /// propagate untouched and `transform` is never invoked for them.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let words = is_str().map(|s| s.split_whitespace().count());
    /// ```
    fn map<U, F>(self, transform: F) -> Mapped<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Mapped::new(transform, self)
    }

    /// Annotates any failure of this parser with `note`.
    fn noted(self, note: impl Into<String>) -> Noted<Self> {
        Noted::new(note, self)
    }

    /// Accepts this parser's shape (`Some`) or an explicit null (`None`).
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Boxes this parser for use where a [`BoxParser`] is required.
    fn boxed(self) -> BoxParser<Self::Output>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<P: Parse> ParseExt for P {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorValue;
    use serde_json::json;

    struct AlwaysFortyTwo;

    impl Parse for AlwaysFortyTwo {
        type Output = i64;

        fn parse(&self, _input: &Value) -> Result<i64, ParseError> {
            Ok(42)
        }
    }

    #[test]
    fn boxed_parser_delegates() {
        let parser: BoxParser<i64> = AlwaysFortyTwo.boxed();
        assert_eq!(parser.parse(&json!(null)).unwrap(), 42);
    }

    #[test]
    fn from_fn_lifts_closures() {
        let parser = from_fn(|input: &Value| match input {
            Value::Bool(true) => Ok("yes"),
            _ => Err(ParseError::new(ErrorValue::verbose("not true"))),
        });
        assert_eq!(parser.parse(&json!(true)).unwrap(), "yes");
        assert!(parser.parse(&json!(false)).is_err());
    }

    #[test]
    fn map_transforms_success() {
        let parser = AlwaysFortyTwo.map(|n| n * 2);
        assert_eq!(parser.parse(&json!(null)).unwrap(), 84);
    }
}
