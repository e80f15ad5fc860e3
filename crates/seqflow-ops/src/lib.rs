#![forbid(unsafe_code)]
//! seqflow-ops: deferred operator adapters over `seqflow-core`.
//!
//! Design intent:
//! - Every adapter wraps its upstream by value and is itself a
//!   `Sequence`; chaining builds a description, traversal does the work.
//! - Streaming stages (filter/project/partition/set) hold one element
//!   at a time. Materializing stages (`order_by`, `group_by`, and the
//!   inner side of `join`/`group_join`) buffer at the first cursor
//!   pull and therefore require finite input; everything else is safe
//!   over infinite sources.
//! - Cursors own their state, so a consumer that stops pulling simply
//!   drops the chain; there is no cancellation signal to thread.

pub mod filter;
pub mod group;
pub mod join;
pub mod partition;
pub mod project;
pub mod query;
pub mod set;
pub mod sort;

pub use query::Query;
