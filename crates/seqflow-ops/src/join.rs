//! Hash equi-join, group join, and the default-fill operator.
//!
//! Both joins index the inner sequence by key in one pass before any
//! output (finite inner required), then stream the outer side. The
//! index lives in the cursor, so every traversal re-indexes from the
//! inner sequence.
//!
//! Left-outer join is not a primitive: compose
//! `group_join(..)` + `default_if_empty(sentinel)` + `flat_map_with(..)`
//! so outer elements without matches still appear, paired with the
//! sentinel.

use seqflow_core::prelude::{Equality, Grouping, KeyIndex, Sequence};

/// Inner hash equi-join.
///
/// For each outer element, emits one combined value per matching inner
/// element, in the order the inner elements were indexed; outer
/// elements with no match emit nothing.
#[derive(Debug, Clone)]
pub struct Join<O, I, KO, KI, C, E> {
    outer: O,
    inner: I,
    outer_key: KO,
    inner_key: KI,
    combine: C,
    eq: E,
}

impl<O, I, KO, KI, C, E> Join<O, I, KO, KI, C, E> {
    pub(crate) fn new(outer: O, inner: I, outer_key: KO, inner_key: KI, combine: C, eq: E) -> Self {
        Join {
            outer,
            inner,
            outer_key,
            inner_key,
            combine,
            eq,
        }
    }
}

impl<O, I, KO, KI, C, E, K, R> Sequence for Join<O, I, KO, KI, C, E>
where
    O: Sequence,
    I: Sequence,
    I::Item: Clone,
    KO: Fn(&O::Item) -> K + Clone,
    KI: Fn(&I::Item) -> K + Clone,
    C: Fn(&O::Item, I::Item) -> R + Clone,
    E: Equality<K> + Clone,
{
    type Item = R;
    type Cursor = JoinCursor<O::Cursor, I::Cursor, KO, KI, C, E, K>;

    fn produce(&self) -> Self::Cursor {
        JoinCursor {
            outer: self.outer.produce(),
            pending_inner: Some(self.inner.produce()),
            index: None,
            outer_key: self.outer_key.clone(),
            inner_key: self.inner_key.clone(),
            combine: self.combine.clone(),
            eq: Some(self.eq.clone()),
            current: None,
        }
    }
}

pub struct JoinCursor<OC: Iterator, IC: Iterator, KO, KI, C, E, K> {
    outer: OC,
    pending_inner: Option<IC>,
    index: Option<KeyIndex<K, IC::Item, E>>,
    outer_key: KO,
    inner_key: KI,
    combine: C,
    eq: Option<E>,
    current: Option<(OC::Item, usize)>,
}

impl<OC, IC, KO, KI, C, E, K, R> Iterator for JoinCursor<OC, IC, KO, KI, C, E, K>
where
    OC: Iterator,
    IC: Iterator,
    IC::Item: Clone,
    KO: Fn(&OC::Item) -> K,
    KI: Fn(&IC::Item) -> K,
    C: Fn(&OC::Item, IC::Item) -> R,
    E: Equality<K>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let (Some(inner), Some(eq)) = (self.pending_inner.take(), self.eq.take()) {
            self.index = Some(build_index(inner, &self.inner_key, eq));
        }
        let index = self.index.as_ref()?;
        loop {
            if let Some((outer, pos)) = &mut self.current {
                let matches = index.get(&(self.outer_key)(outer));
                if let Some(item) = matches.get(*pos) {
                    *pos += 1;
                    return Some((self.combine)(outer, item.clone()));
                }
                self.current = None;
            }
            let outer = self.outer.next()?;
            self.current = Some((outer, 0));
        }
    }
}

/// Group join: one output per outer element, combining it with the
/// (possibly empty) group of matching inner elements.
#[derive(Debug, Clone)]
pub struct GroupJoin<O, I, KO, KI, C, E> {
    outer: O,
    inner: I,
    outer_key: KO,
    inner_key: KI,
    combine: C,
    eq: E,
}

impl<O, I, KO, KI, C, E> GroupJoin<O, I, KO, KI, C, E> {
    pub(crate) fn new(outer: O, inner: I, outer_key: KO, inner_key: KI, combine: C, eq: E) -> Self {
        GroupJoin {
            outer,
            inner,
            outer_key,
            inner_key,
            combine,
            eq,
        }
    }
}

impl<O, I, KO, KI, C, E, K, R> Sequence for GroupJoin<O, I, KO, KI, C, E>
where
    O: Sequence,
    I: Sequence,
    I::Item: Clone,
    KO: Fn(&O::Item) -> K + Clone,
    KI: Fn(&I::Item) -> K + Clone,
    C: Fn(O::Item, Grouping<K, I::Item>) -> R + Clone,
    E: Equality<K> + Clone,
{
    type Item = R;
    type Cursor = GroupJoinCursor<O::Cursor, I::Cursor, KO, KI, C, E, K>;

    fn produce(&self) -> Self::Cursor {
        GroupJoinCursor {
            outer: self.outer.produce(),
            pending_inner: Some(self.inner.produce()),
            index: None,
            outer_key: self.outer_key.clone(),
            inner_key: self.inner_key.clone(),
            combine: self.combine.clone(),
            eq: Some(self.eq.clone()),
        }
    }
}

pub struct GroupJoinCursor<OC, IC: Iterator, KO, KI, C, E, K> {
    outer: OC,
    pending_inner: Option<IC>,
    index: Option<KeyIndex<K, IC::Item, E>>,
    outer_key: KO,
    inner_key: KI,
    combine: C,
    eq: Option<E>,
}

impl<OC, IC, KO, KI, C, E, K, R> Iterator for GroupJoinCursor<OC, IC, KO, KI, C, E, K>
where
    OC: Iterator,
    IC: Iterator,
    IC::Item: Clone,
    KO: Fn(&OC::Item) -> K,
    KI: Fn(&IC::Item) -> K,
    C: Fn(OC::Item, Grouping<K, IC::Item>) -> R,
    E: Equality<K>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let (Some(inner), Some(eq)) = (self.pending_inner.take(), self.eq.take()) {
            self.index = Some(build_index(inner, &self.inner_key, eq));
        }
        let index = self.index.as_ref()?;
        let outer = self.outer.next()?;
        let key = (self.outer_key)(&outer);
        let members = index.get(&key).to_vec();
        // Empty group, not an absent one, when nothing matched.
        let group = Grouping::new(key, members);
        Some((self.combine)(outer, group))
    }
}

fn build_index<IC, KI, E, K>(inner: IC, inner_key: &KI, eq: E) -> KeyIndex<K, IC::Item, E>
where
    IC: Iterator,
    KI: Fn(&IC::Item) -> K,
    E: Equality<K>,
{
    let mut index = KeyIndex::new(eq);
    for item in inner {
        index.insert(inner_key(&item), item);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(keys = index.len(), "join index built");
    index
}

/// Yield the input unchanged, or a single fallback value when the
/// input is empty.
pub struct DefaultIfEmpty<S: Sequence> {
    source: S,
    fallback: S::Item,
}

impl<S: Sequence> DefaultIfEmpty<S> {
    pub(crate) fn new(source: S, fallback: S::Item) -> Self {
        DefaultIfEmpty { source, fallback }
    }
}

impl<S> Sequence for DefaultIfEmpty<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor = DefaultIfEmptyCursor<S::Cursor>;

    fn produce(&self) -> Self::Cursor {
        DefaultIfEmptyCursor {
            input: self.source.produce(),
            fallback: Some(self.fallback.clone()),
        }
    }
}

pub struct DefaultIfEmptyCursor<C: Iterator> {
    input: C,
    fallback: Option<C::Item>,
}

impl<C: Iterator> Iterator for DefaultIfEmptyCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        match self.input.next() {
            Some(item) => {
                self.fallback = None;
                Some(item)
            }
            None => self.fallback.take(),
        }
    }
}
