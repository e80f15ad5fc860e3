use thiserror::Error;

/// Canonical result for terminal sequence operators.
pub type Result<T> = std::result::Result<T, Error>;

/// Data-dependent failures of terminal operators.
///
/// These are deterministic outcomes of the input data, not transient
/// faults: no operator retries or swallows them. The `*_or` operator
/// variants convert `Empty`, `NoMatch`, and `OutOfRange` into a
/// fallback value; `MultipleMatches` is never converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("sequence contains no elements")]
    Empty,

    #[error("no element satisfies the predicate")]
    NoMatch,

    #[error("more than one element satisfies the predicate")]
    MultipleMatches,

    #[error("index {index} is out of range for a sequence of {len} elements")]
    OutOfRange { index: usize, len: usize },
}
