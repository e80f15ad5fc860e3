#![forbid(unsafe_code)]
//! seqflow: a deferred-execution sequence-query engine.
//!
//! Facade over the workspace crates: the `Sequence` abstraction and
//! sources from `seqflow-core`, and the `Query` operator surface from
//! `seqflow-ops`.
//!
//! ```
//! use seqflow::{items, Query};
//!
//! let evens = items(vec![1, 2, 3, 4]).filter(|n| n % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4]);
//! ```

pub use seqflow_core::prelude::*;
pub use seqflow_ops::Query;
