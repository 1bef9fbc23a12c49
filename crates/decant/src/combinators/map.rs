//! Transformation: post-process a successful parse.

use serde_json::Value;

use crate::foundation::{Parse, ParseError};

// ============================================================================
// MAPPED
// ============================================================================

/// Runs the inner parser, then applies a pure transformation to its result.
///
/// On failure the inner error propagates untouched and the transformation
/// is never invoked. The transformation must be total over the inner
/// parser's output type.
///
/// Usually written via [`ParseExt::map`](crate::foundation::ParseExt::map);
/// the [`map_parser`] factory mirrors the transformation-first argument
/// order some call sites read better with.
pub struct Mapped<P, F> {
    transform: F,
    inner: P,
}

impl<P, F> Mapped<P, F> {
    /// Creates the transforming parser.
    pub fn new(transform: F, inner: P) -> Self {
        Self { transform, inner }
    }

    /// A reference to the inner parser.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P, F> std::fmt::Debug for Mapped<P, F>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapped")
            .field("inner", &self.inner)
            .field("transform", &"<fn>")
            .finish()
    }
}

impl<P, F> Clone for Mapped<P, F>
where
    P: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            transform: self.transform.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<P, F, U> Parse for Mapped<P, F>
where
    P: Parse,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, input: &Value) -> Result<U, ParseError> {
        self.inner.parse(input).map(&self.transform)
    }
}

/// Runs `inner`, applying `transform` to its successful result.
pub fn map_parser<P, F, U>(transform: F, inner: P) -> Mapped<P, F>
where
    P: Parse,
    F: Fn(P::Output) -> U,
{
    Mapped::new(transform, inner)
}

// ============================================================================
// TESTS
// ============================================================================
