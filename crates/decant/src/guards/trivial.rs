//! The two parsers that never inspect a tag.

use serde_json::Value;

use crate::foundation::{Parse, ParseError};

// ============================================================================
// ANYTHING
// ============================================================================

/// Accepts any input unchanged, still untyped.
///
/// Useful as a placeholder while a schema is being built out, or for fields
/// a caller deliberately passes through uninspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anything;

impl Parse for Anything {
    type Output = Value;

    fn parse(&self, input: &Value) -> Result<Value, ParseError> {
        Ok(input.clone())
    }
}

/// Accepts any input unchanged.
pub fn is_anything() -> Anything {
    Anything
}

// ============================================================================
// ALWAYS
// ============================================================================

/// Ignores the input and succeeds with a pre-supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Always<T> {
    value: T,
}

impl<T> Always<T> {
    /// Creates the constant parser.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Parse for Always<T> {
    type Output = T;

    fn parse(&self, _input: &Value) -> Result<T, ParseError> {
        Ok(self.value.clone())
    }
}

/// Ignores the input and succeeds with `value`.
pub fn is_always<T: Clone>(value: T) -> Always<T> {
    Always::new(value)
}

// ============================================================================
// TESTS
// ============================================================================
