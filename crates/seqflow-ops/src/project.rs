//! Projection stages: 1:1 transforms and flattening.

use seqflow_core::Sequence;

/// Lazy 1:1 transform.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        Map { source, transform }
    }
}

impl<S, F, R> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> R + Clone,
{
    type Item = R;
    type Cursor = MapCursor<S::Cursor, F>;

    fn produce(&self) -> Self::Cursor {
        MapCursor {
            input: self.source.produce(),
            transform: self.transform.clone(),
        }
    }
}

#[derive(Debug)]
pub struct MapCursor<C, F> {
    input: C,
    transform: F,
}

impl<C, F, R> Iterator for MapCursor<C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.input.next().map(&self.transform)
    }
}

/// Index-aware 1:1 transform; the index counts input elements 0-based.
#[derive(Debug, Clone)]
pub struct MapIndexed<S, F> {
    source: S,
    transform: F,
}

impl<S, F> MapIndexed<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        MapIndexed { source, transform }
    }
}

impl<S, F, R> Sequence for MapIndexed<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> R + Clone,
{
    type Item = R;
    type Cursor = MapIndexedCursor<S::Cursor, F>;

    fn produce(&self) -> Self::Cursor {
        MapIndexedCursor {
            input: self.source.produce(),
            transform: self.transform.clone(),
            index: 0,
        }
    }
}

#[derive(Debug)]
pub struct MapIndexedCursor<C, F> {
    input: C,
    transform: F,
    index: usize,
}

impl<C, F, R> Iterator for MapIndexedCursor<C, F>
where
    C: Iterator,
    F: Fn(C::Item, usize) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let item = self.input.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.transform)(item, index))
    }
}

/// Flattening projection: one inner sequence per outer element, drained
/// fully before the outer cursor advances (outer-major order). Lazy at
/// the outer level.
#[derive(Debug, Clone)]
pub struct FlatMap<S, F> {
    source: S,
    to_inner: F,
}

impl<S, F> FlatMap<S, F> {
    pub(crate) fn new(source: S, to_inner: F) -> Self {
        FlatMap { source, to_inner }
    }
}

impl<S, F, Inner> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> Inner + Clone,
    Inner: Sequence,
{
    type Item = Inner::Item;
    type Cursor = FlatMapCursor<S::Cursor, F, Inner>;

    fn produce(&self) -> Self::Cursor {
        FlatMapCursor {
            outer: self.source.produce(),
            to_inner: self.to_inner.clone(),
            inner: None,
        }
    }
}

pub struct FlatMapCursor<C, F, Inner: Sequence> {
    outer: C,
    to_inner: F,
    inner: Option<Inner::Cursor>,
}

impl<C, F, Inner> Iterator for FlatMapCursor<C, F, Inner>
where
    C: Iterator,
    F: Fn(&C::Item) -> Inner,
    Inner: Sequence,
{
    type Item = Inner::Item;

    fn next(&mut self) -> Option<Inner::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            let outer = self.outer.next()?;
            self.inner = Some((self.to_inner)(&outer).produce());
        }
    }
}

/// Flattening projection with a combiner over (outer, inner) pairs.
#[derive(Debug, Clone)]
pub struct FlatMapWith<S, F, C> {
    source: S,
    to_inner: F,
    combine: C,
}

impl<S, F, C> FlatMapWith<S, F, C> {
    pub(crate) fn new(source: S, to_inner: F, combine: C) -> Self {
        FlatMapWith {
            source,
            to_inner,
            combine,
        }
    }
}

impl<S, F, C, Inner, R> Sequence for FlatMapWith<S, F, C>
where
    S: Sequence,
    S::Item: Clone,
    F: Fn(&S::Item) -> Inner + Clone,
    Inner: Sequence,
    C: Fn(&S::Item, Inner::Item) -> R + Clone,
{
    type Item = R;
    type Cursor = FlatMapWithCursor<S::Cursor, F, C, Inner>;

    fn produce(&self) -> Self::Cursor {
        FlatMapWithCursor {
            outer: self.source.produce(),
            to_inner: self.to_inner.clone(),
            combine: self.combine.clone(),
            current: None,
        }
    }
}

pub struct FlatMapWithCursor<C: Iterator, F, G, Inner: Sequence> {
    outer: C,
    to_inner: F,
    combine: G,
    current: Option<(C::Item, Inner::Cursor)>,
}

impl<C, F, G, Inner, R> Iterator for FlatMapWithCursor<C, F, G, Inner>
where
    C: Iterator,
    C::Item: Clone,
    F: Fn(&C::Item) -> Inner,
    Inner: Sequence,
    G: Fn(&C::Item, Inner::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some((outer, inner)) = &mut self.current {
                if let Some(item) = inner.next() {
                    return Some((self.combine)(outer, item));
                }
                self.current = None;
            }
            let outer = self.outer.next()?;
            let inner = (self.to_inner)(&outer).produce();
            self.current = Some((outer, inner));
        }
    }
}
