//! Shared helpers for the integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use seqflow_core::Sequence;

/// Wraps a sequence and counts cursor pulls across all traversals,
/// making laziness and short-circuiting observable.
#[derive(Clone)]
pub struct Counted<S> {
    source: S,
    pulls: Arc<AtomicUsize>,
}

impl<S> Counted<S> {
    pub fn new(source: S) -> Self {
        Counted {
            source,
            pulls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle onto the pull counter, usable after the wrapper has been
    /// consumed by a chain.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.pulls)
    }
}

impl<S: Sequence> Sequence for Counted<S> {
    type Item = S::Item;
    type Cursor = CountedCursor<S::Cursor>;

    fn produce(&self) -> Self::Cursor {
        CountedCursor {
            input: self.source.produce(),
            pulls: Arc::clone(&self.pulls),
        }
    }
}

pub struct CountedCursor<C> {
    input: C,
    pulls: Arc<AtomicUsize>,
}

impl<C: Iterator> Iterator for CountedCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        self.pulls.fetch_add(1, Ordering::SeqCst);
        self.input.next()
    }
}
