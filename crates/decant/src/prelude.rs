//! Prelude module for convenient imports.
//!
//! A single `use decant::prelude::*;` brings in the parser contract, the
//! error model, every guard and every combinator factory.
//!
//! # Examples
//!
//! ```rust,ignore
//! use decant::prelude::*;
//!
//! let port = has_field("port", is_int());
//! let host = has_optional_field("host", is_str());
//! ```

// ============================================================================
// FOUNDATION: contract and failure signal
// ============================================================================

pub use crate::foundation::{
    BoxParser, ErrorList, ErrorValue, FromFn, Parse, ParseError, ParseExt, TooFewErrors, from_fn,
};

// ============================================================================
// GUARDS: one per alphabet member
// ============================================================================

pub use crate::guards::{
    Always, Anything, Boolean, Float, Int, Mapping, Null, Sequence, Str, is_always, is_anything,
    is_bool, is_float, is_int, is_mapping, is_null, is_sequence, is_str, tag_name,
};

// ============================================================================
// COMBINATORS: composition types and factories
// ============================================================================

pub use crate::combinators::{
    AnyOf, AnyOfDescribed, HasField, HasOptionalField, ListOf, MapOf, Mapped, Noted, Nullable,
    Variant, has_field, has_optional_field, is_any_of, is_any_of_described, is_list_of, is_map_of,
    is_optional, is_variant, is_variant_with_fallback, map_parser, noted,
};
