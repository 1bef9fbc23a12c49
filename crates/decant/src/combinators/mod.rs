//! Combinators: everything that wraps another parser.
//!
//! - **Field navigation**: [`HasField`], [`HasOptionalField`]
//! - **Alternation**: [`AnyOf`], [`AnyOfDescribed`]
//! - **Transformation**: [`Mapped`]
//! - **Annotation**: [`Noted`]
//! - **Traversal**: [`ListOf`], [`MapOf`]
//! - **Null tolerance**: [`Nullable`]
//! - **Tag dispatch**: [`Variant`]
//!
//! Each combinator is a plain struct with a snake_case factory function;
//! the most common ones also hang off
//! [`ParseExt`](crate::foundation::ParseExt) as methods. Composition is the
//! whole interface — there is no registry and no configuration.

pub mod any_of;
pub mod each;
pub mod field;
pub mod map;
pub mod note;
pub mod optional;
pub mod variant;

pub use any_of::{AnyOf, AnyOfDescribed, is_any_of, is_any_of_described};
pub use each::{ListOf, MapOf, is_list_of, is_map_of};
pub use field::{HasField, HasOptionalField, has_field, has_optional_field};
pub use map::{Mapped, map_parser};
pub use note::{Noted, noted};
pub use optional::{Nullable, is_optional};
pub use variant::{Variant, is_variant, is_variant_with_fallback};
