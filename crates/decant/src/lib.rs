//! # decant
//!
//! Validate and convert untyped, dynamically-shaped data — the decoded form
//! of JSON/YAML-like payloads — into precisely-typed domain values, with
//! diagnostics that pinpoint the exact failing location.
//!
//! The input is a [`serde_json::Value`] produced by whatever decoder the
//! caller already runs; this crate never touches bytes, performs no I/O,
//! and holds no state. Every validator is a pure [`Parse`] implementation,
//! composed with combinators into a tree matching the expected shape of a
//! domain type.
//!
//! ## Quick Start
//!
//! ```rust
//! use decant::{any_of, prelude::*};
//! use serde_json::json;
//!
//! // An update carries its sender either as a chat or as a user.
//! let sender_id = any_of![
//!     has_field("sender_chat", has_field("id", is_int())),
//!     has_field("from", has_field("id", is_int())),
//! ];
//!
//! let update = json!({"message_id": 100, "sender_chat": {"id": 666}});
//! assert_eq!(sender_id.parse(&update).unwrap(), 666);
//!
//! // Failures read as a path from the root to the offending value.
//! let bad = json!({"from": {"id": "11111"}});
//! let failure = sender_id.parse(&bad).unwrap_err();
//! assert_eq!(
//!     failure.to_string(),
//!     "all possibilities failed:\n    \
//!      - at key 'sender_chat': key 'sender_chat' not found\n    \
//!      - at key 'from': at key 'id': expected integer, got string",
//! );
//! ```
//!
//! ## Building Blocks
//!
//! - **Guards** recognize one alphabet member each: [`is_int`](guards::is_int),
//!   [`is_float`](guards::is_float), [`is_str`](guards::is_str),
//!   [`is_bool`](guards::is_bool), [`is_null`](guards::is_null),
//!   [`is_sequence`](guards::is_sequence), [`is_mapping`](guards::is_mapping),
//!   plus [`is_anything`](guards::is_anything) and
//!   [`is_always`](guards::is_always).
//! - **Field navigation**: [`has_field`](combinators::has_field),
//!   [`has_optional_field`](combinators::has_optional_field).
//! - **Combinators**: alternation ([`any_of!`], [`any_of_described!`]),
//!   transformation ([`map_parser`](combinators::map_parser) / `.map()`),
//!   traversal ([`is_list_of`](combinators::is_list_of),
//!   [`is_map_of`](combinators::is_map_of)), null tolerance
//!   ([`is_optional`](combinators::is_optional)), tag dispatch
//!   ([`is_variant`](combinators::is_variant)).
//!
//! Failure is an ordinary value: a [`ParseError`](foundation::ParseError)
//! carrying an [`ErrorValue`](foundation::ErrorValue) tree. Callers either
//! drop the rejected item or fold the tree into an "invalid" variant of
//! their own domain type — the engine never logs, retries, or recovers.

pub mod combinators;
pub mod foundation;
pub mod guards;
mod macros;
pub mod prelude;

pub use foundation::{ErrorList, ErrorValue, Parse, ParseError, ParseExt};
