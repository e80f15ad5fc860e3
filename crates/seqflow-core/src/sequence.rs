//! The `Sequence` trait and the built-in sources.
//!
//! A `Sequence` describes how to produce a succession of values. It is
//! re-enterable: every call to `produce()` starts an independent
//! traversal, and a sequence over a deterministic source replays the
//! same elements in the same order each time. Cardinality is unbounded;
//! the counting source below is infinite by design and must be bounded
//! by a short-circuiting consumer (`take`, `any`, `first`, ...).

use std::sync::Arc;

/// A lazy, possibly-infinite, re-enterable producer of values.
///
/// Constructing or chaining sequences performs no work. Work happens
/// when a cursor obtained from [`produce`](Sequence::produce) is
/// advanced; exhaustion is the cursor returning `None`.
pub trait Sequence {
    type Item;

    /// The traversal state for one pass over this sequence.
    ///
    /// Cursors are owned: they keep the backing data (or upstream
    /// cursors) alive themselves and never borrow from the sequence
    /// value that produced them.
    type Cursor: Iterator<Item = Self::Item>;

    /// Start one traversal. Cheap; no elements are produced until the
    /// returned cursor is advanced.
    fn produce(&self) -> Self::Cursor;
}

/// A finite in-memory source. Restartable and cheap to clone: all
/// clones and all cursors share one backing buffer.
#[derive(Debug, Clone)]
pub struct Items<T> {
    data: Arc<Vec<T>>,
}

/// Wrap a vector as a restartable sequence.
pub fn items<T: Clone>(data: Vec<T>) -> Items<T> {
    Items {
        data: Arc::new(data),
    }
}

impl<T: Clone> Sequence for Items<T> {
    type Item = T;
    type Cursor = ItemsCursor<T>;

    fn produce(&self) -> Self::Cursor {
        ItemsCursor::new(Arc::clone(&self.data))
    }
}

/// Cursor over a shared buffer, yielding clones in order.
#[derive(Debug)]
pub struct ItemsCursor<T> {
    data: Arc<Vec<T>>,
    pos: usize,
}

impl<T> ItemsCursor<T> {
    pub(crate) fn new(data: Arc<Vec<T>>) -> Self {
        ItemsCursor { data, pos: 0 }
    }
}

impl<T: Clone> Iterator for ItemsCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.data.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }
}

/// A sequence that yields nothing.
#[derive(Debug, Clone, Default)]
pub struct Empty<T> {
    marker: std::marker::PhantomData<T>,
}

/// The empty sequence.
pub fn empty<T>() -> Empty<T> {
    Empty {
        marker: std::marker::PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor = std::iter::Empty<T>;

    fn produce(&self) -> Self::Cursor {
        std::iter::empty()
    }
}

/// A sequence backed by a cursor factory.
///
/// Restartable exactly when the factory is: each `produce()` re-invokes
/// it, so a factory returning a fresh iterator every time yields a
/// restartable sequence even for stateful generators.
#[derive(Debug, Clone)]
pub struct Generate<F> {
    start: F,
}

/// Build a sequence from a cursor factory.
pub fn generate<F, C>(start: F) -> Generate<F>
where
    F: Fn() -> C,
    C: Iterator,
{
    Generate { start }
}

impl<F, C> Sequence for Generate<F>
where
    F: Fn() -> C,
    C: Iterator,
{
    type Item = C::Item;
    type Cursor = C;

    fn produce(&self) -> Self::Cursor {
        (self.start)()
    }
}

/// The infinite counting source: 0, 1, 2, ... wrapping back to 0 after
/// `i32::MAX`.
///
/// The wraparound is contractual, not an overflow accident. Consuming
/// this source without a bounding operator runs forever by design.
pub fn integers() -> Integers {
    Integers { start: 0 }
}

/// The counting source starting from an arbitrary value. Wraps to 0
/// after `i32::MAX` like [`integers`].
pub fn integers_from(start: i64) -> Integers {
    Integers { start }
}

#[derive(Debug, Clone, Copy)]
pub struct Integers {
    start: i64,
}

impl Sequence for Integers {
    type Item = i64;
    type Cursor = IntegersCursor;

    fn produce(&self) -> Self::Cursor {
        IntegersCursor { next: self.start }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntegersCursor {
    next: i64,
}

impl Iterator for IntegersCursor {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next;
        self.next = if current < i64::from(i32::MAX) {
            current + 1
        } else {
            0
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_is_restartable() {
        let seq = items(vec![1, 2, 3]);
        assert_eq!(seq.produce().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(seq.produce().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn generate_restarts_by_reinvocation() {
        let seq = generate(|| (0..4).map(|n| n * n));
        assert_eq!(seq.produce().collect::<Vec<_>>(), vec![0, 1, 4, 9]);
        assert_eq!(seq.produce().collect::<Vec<_>>(), vec![0, 1, 4, 9]);
    }

    #[test]
    fn integers_wrap_past_i32_max() {
        let seq = integers_from(i64::from(i32::MAX) - 1);
        let head: Vec<i64> = seq.produce().take(4).collect();
        assert_eq!(
            head,
            vec![i64::from(i32::MAX) - 1, i64::from(i32::MAX), 0, 1]
        );
    }
}
