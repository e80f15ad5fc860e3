#![forbid(unsafe_code)]
//! seqflow-core: the lazy `Sequence` abstraction and its supporting types.
//!
//! Design intent:
//! - A `Sequence` is a description of how to produce values, never a
//!   container. Chaining allocates nothing and pulls nothing; traversal
//!   starts when a cursor obtained from `produce()` is first advanced.
//! - Cursors are owned values, so one `Sequence` can be traversed any
//!   number of times and downstream stages can hold cursors of
//!   sequences they created themselves.
//! - Equality is a pluggable strategy (`Equality`) shared read-only by
//!   every dedup/group/join consumer.

pub mod equality;
pub mod error;
pub mod grouping;
pub mod index;
pub mod prelude;
pub mod sequence;

pub use equality::{by_fn, by_key, Equality, Natural};
pub use error::{Error, Result};
pub use grouping::Grouping;
pub use sequence::{empty, generate, integers, integers_from, items, Items, Sequence};
