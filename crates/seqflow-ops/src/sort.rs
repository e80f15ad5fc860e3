//! Stable multi-key ordering.
//!
//! A comparator is composed left-to-right from (key, direction) pairs
//! with tie-break fallthrough; the sort itself is `slice::sort_by`,
//! which is stable, so elements with fully equal keys keep their
//! original relative order.
//!
//! `Ordered` buffers its whole input on the first cursor pull (finite
//! input required) and re-materializes from upstream on every new
//! traversal; it never caches results across traversals.

use std::cmp::Ordering;

use seqflow_core::Sequence;

/// Sort direction for one key of the comparator chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A composable comparator over elements.
pub trait Compare<T>: Clone {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Comparator ordering by one extracted key.
#[derive(Debug, Clone)]
pub struct ByKey<F> {
    key: F,
    direction: Direction,
}

impl<F> ByKey<F> {
    pub(crate) fn new(key: F, direction: Direction) -> Self {
        ByKey { key, direction }
    }
}

impl<T, K, F> Compare<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K + Clone,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let ordering = (self.key)(a).cmp(&(self.key)(b));
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Two comparators chained with tie-break fallthrough.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Compare<T> for Chain<A, B>
where
    A: Compare<T>,
    B: Compare<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first.compare(a, b).then_with(|| self.second.compare(a, b))
    }
}

/// Fully materializing stable sort stage.
#[derive(Debug, Clone)]
pub struct Ordered<S, C> {
    source: S,
    compare: C,
}

impl<S, C> Ordered<S, C> {
    pub(crate) fn new(source: S, compare: C) -> Self {
        Ordered { source, compare }
    }
}

impl<S, C> Ordered<S, C>
where
    S: Sequence,
    C: Compare<S::Item>,
{
    /// Subordinate ascending key, applied where all prior keys tie.
    pub fn then_by<K, F>(self, key: F) -> Ordered<S, Chain<C, ByKey<F>>>
    where
        K: Ord,
        F: Fn(&S::Item) -> K + Clone,
    {
        Ordered {
            source: self.source,
            compare: Chain {
                first: self.compare,
                second: ByKey::new(key, Direction::Ascending),
            },
        }
    }

    /// Subordinate descending key, applied where all prior keys tie.
    pub fn then_by_desc<K, F>(self, key: F) -> Ordered<S, Chain<C, ByKey<F>>>
    where
        K: Ord,
        F: Fn(&S::Item) -> K + Clone,
    {
        Ordered {
            source: self.source,
            compare: Chain {
                first: self.compare,
                second: ByKey::new(key, Direction::Descending),
            },
        }
    }
}

impl<S, C> Sequence for Ordered<S, C>
where
    S: Sequence,
    C: Compare<S::Item>,
{
    type Item = S::Item;
    type Cursor = OrderedCursor<S::Cursor, C>;

    fn produce(&self) -> Self::Cursor {
        OrderedCursor {
            input: Some(self.source.produce()),
            compare: self.compare.clone(),
            sorted: Vec::new().into_iter(),
        }
    }
}

pub struct OrderedCursor<C: Iterator, F> {
    input: Option<C>,
    compare: F,
    sorted: std::vec::IntoIter<C::Item>,
}

impl<C, F> Iterator for OrderedCursor<C, F>
where
    C: Iterator,
    F: Compare<C::Item>,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if let Some(input) = self.input.take() {
            let mut buffer: Vec<C::Item> = input.collect();
            buffer.sort_by(|a, b| self.compare.compare(a, b));
            #[cfg(feature = "tracing")]
            tracing::trace!(rows = buffer.len(), "sort buffer materialized");
            self.sorted = buffer.into_iter();
        }
        self.sorted.next()
    }
}
