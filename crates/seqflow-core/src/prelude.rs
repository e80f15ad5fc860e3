//! Convenient re-exports for downstream crates.

pub use crate::equality::{by_fn, by_key, Equality, FnEquality, KeyEquality, Natural};
pub use crate::error::{Error, Result};
pub use crate::grouping::Grouping;
pub use crate::index::{DistinctSet, KeyIndex};
pub use crate::sequence::{
    empty, generate, integers, integers_from, items, Empty, Generate, Integers, Items, Sequence,
};
