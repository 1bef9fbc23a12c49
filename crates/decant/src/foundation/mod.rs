//! Core types of the engine.
//!
//! This module contains the fundamental building blocks everything else is
//! composed from:
//!
//! - **Contract**: [`Parse`], [`ParseExt`], [`BoxParser`], [`FromFn`]
//! - **Failure**: [`ParseError`], [`ErrorValue`], [`ErrorList`]
//!
//! # Architecture
//!
//! A parser is a pure function from a borrowed untyped value to a typed
//! result. Failure is an ordinary value: every signature returns `Result`,
//! propagation is `?`, and nothing unwinds. Composition is purely by
//! nesting — there is no registry, no global configuration, and no state
//! retained between invocations, which is why a composed parser can be
//! called concurrently from any number of threads without locking.

pub mod error;
pub mod traits;

pub use error::{ErrorList, ErrorValue, ParseError, TooFewErrors};
pub use traits::{BoxParser, FromFn, Parse, ParseExt, from_fn};
