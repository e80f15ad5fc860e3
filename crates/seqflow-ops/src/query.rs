//! The `Query` surface: every operator, chaining and terminal, as
//! extension methods on any `Sequence`.
//!
//! Chaining methods consume `self` and return a new `Sequence`
//! describing the composed pipeline; nothing is pulled until a cursor
//! is advanced. Terminal methods take `&self` and drive one traversal,
//! so a finished chain can be consumed any number of times.

use std::hash::Hash;

use seqflow_core::prelude::{Equality, Error, Grouping, Natural, Result, Sequence};

use crate::filter::{Filter, FilterIndexed};
use crate::group::GroupBy;
use crate::join::{DefaultIfEmpty, GroupJoin, Join};
use crate::partition::{Skip, Take, TakeWhile};
use crate::project::{FlatMap, FlatMapWith, Map, MapIndexed};
use crate::set::{Union, ZipWith};
use crate::sort::{ByKey, Direction, Ordered};

/// Operator surface over any [`Sequence`].
pub trait Query: Sequence + Sized {
    // ----- filtering -----

    /// Keep the elements satisfying `predicate`. Lazy, one pass.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        Filter::new(self, predicate)
    }

    /// Index-aware filter. The 0-based index counts every input
    /// element seen so far, including rejected ones.
    fn filter_indexed<P>(self, predicate: P) -> FilterIndexed<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool + Clone,
    {
        FilterIndexed::new(self, predicate)
    }

    // ----- projection -----

    /// 1:1 lazy transform.
    fn map<R, F>(self, transform: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> R + Clone,
    {
        Map::new(self, transform)
    }

    /// 1:1 lazy transform receiving the 0-based element index.
    fn map_indexed<R, F>(self, transform: F) -> MapIndexed<Self, F>
    where
        F: Fn(Self::Item, usize) -> R + Clone,
    {
        MapIndexed::new(self, transform)
    }

    /// Flatten: one inner sequence per element, drained fully before
    /// the outer side advances (outer-major, inner-minor order).
    fn flat_map<Inner, F>(self, to_inner: F) -> FlatMap<Self, F>
    where
        F: Fn(&Self::Item) -> Inner + Clone,
        Inner: Sequence,
    {
        FlatMap::new(self, to_inner)
    }

    /// Flatten and combine each (outer, inner) pair.
    fn flat_map_with<Inner, R, F, C>(self, to_inner: F, combine: C) -> FlatMapWith<Self, F, C>
    where
        Self::Item: Clone,
        F: Fn(&Self::Item) -> Inner + Clone,
        Inner: Sequence,
        C: Fn(&Self::Item, Inner::Item) -> R + Clone,
    {
        FlatMapWith::new(self, to_inner, combine)
    }

    // ----- ordering -----

    /// Stable sort by an ascending key. Materializes the whole input
    /// on first pull (finite input required); chain
    /// [`then_by`](Ordered::then_by) for subordinate keys.
    fn order_by<K, F>(self, key: F) -> Ordered<Self, ByKey<F>>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K + Clone,
    {
        Ordered::new(self, ByKey::new(key, Direction::Ascending))
    }

    /// Stable sort by a descending key.
    fn order_by_desc<K, F>(self, key: F) -> Ordered<Self, ByKey<F>>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K + Clone,
    {
        Ordered::new(self, ByKey::new(key, Direction::Descending))
    }

    // ----- grouping and joins -----

    /// Group by key under natural equality. One full pass at first
    /// pull (finite input required); groups appear in first-seen key
    /// order.
    fn group_by<K, F>(self, key: F) -> GroupBy<Self, F, Natural>
    where
        K: Eq + Hash,
        F: Fn(&Self::Item) -> K + Clone,
    {
        GroupBy::new(self, key, Natural)
    }

    /// Group by key under an explicit equality strategy.
    fn group_by_with<K, F, E>(self, key: F, eq: E) -> GroupBy<Self, F, E>
    where
        F: Fn(&Self::Item) -> K + Clone,
        E: Equality<K> + Clone,
    {
        GroupBy::new(self, key, eq)
    }

    /// Hash equi-join under natural key equality. The inner side is
    /// indexed in one pass before any output (finite inner required);
    /// outer elements stream, emitting one combined value per matching
    /// inner element and nothing when unmatched.
    fn join<I, K, KO, KI, C, R>(
        self,
        inner: I,
        outer_key: KO,
        inner_key: KI,
        combine: C,
    ) -> Join<Self, I, KO, KI, C, Natural>
    where
        I: Sequence,
        I::Item: Clone,
        K: Eq + Hash,
        KO: Fn(&Self::Item) -> K + Clone,
        KI: Fn(&I::Item) -> K + Clone,
        C: Fn(&Self::Item, I::Item) -> R + Clone,
    {
        Join::new(self, inner, outer_key, inner_key, combine, Natural)
    }

    /// Hash equi-join under an explicit equality strategy.
    fn join_with<I, K, KO, KI, C, E, R>(
        self,
        inner: I,
        outer_key: KO,
        inner_key: KI,
        combine: C,
        eq: E,
    ) -> Join<Self, I, KO, KI, C, E>
    where
        I: Sequence,
        I::Item: Clone,
        KO: Fn(&Self::Item) -> K + Clone,
        KI: Fn(&I::Item) -> K + Clone,
        C: Fn(&Self::Item, I::Item) -> R + Clone,
        E: Equality<K> + Clone,
    {
        Join::new(self, inner, outer_key, inner_key, combine, eq)
    }

    /// Group join: one output per outer element, combined with the
    /// (possibly empty) group of matching inner elements. Compose with
    /// [`default_if_empty`](Query::default_if_empty) and
    /// [`flat_map_with`](Query::flat_map_with) for a left-outer join.
    fn group_join<I, K, KO, KI, C, R>(
        self,
        inner: I,
        outer_key: KO,
        inner_key: KI,
        combine: C,
    ) -> GroupJoin<Self, I, KO, KI, C, Natural>
    where
        I: Sequence,
        I::Item: Clone,
        K: Eq + Hash,
        KO: Fn(&Self::Item) -> K + Clone,
        KI: Fn(&I::Item) -> K + Clone,
        C: Fn(Self::Item, Grouping<K, I::Item>) -> R + Clone,
    {
        GroupJoin::new(self, inner, outer_key, inner_key, combine, Natural)
    }

    /// Group join under an explicit equality strategy.
    fn group_join_with<I, K, KO, KI, C, E, R>(
        self,
        inner: I,
        outer_key: KO,
        inner_key: KI,
        combine: C,
        eq: E,
    ) -> GroupJoin<Self, I, KO, KI, C, E>
    where
        I: Sequence,
        I::Item: Clone,
        KO: Fn(&Self::Item) -> K + Clone,
        KI: Fn(&I::Item) -> K + Clone,
        C: Fn(Self::Item, Grouping<K, I::Item>) -> R + Clone,
        E: Equality<K> + Clone,
    {
        GroupJoin::new(self, inner, outer_key, inner_key, combine, eq)
    }

    /// Yield the input unchanged, or the single `fallback` when the
    /// input is empty.
    fn default_if_empty(self, fallback: Self::Item) -> DefaultIfEmpty<Self>
    where
        Self::Item: Clone,
    {
        DefaultIfEmpty::new(self, fallback)
    }

    // ----- partitioning -----

    /// At most the first `count` elements; never over-pulls upstream,
    /// so it bounds infinite sources.
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }

    /// Elements while `predicate` holds; stops permanently at the
    /// first failure.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        TakeWhile::new(self, predicate)
    }

    /// Everything after the first `count` elements.
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }

    /// Page `number` (1-indexed) of size `size`:
    /// `skip((number - 1) * size).take(size)`.
    fn page(self, number: usize, size: usize) -> Take<Skip<Self>> {
        self.skip(number.saturating_sub(1) * size).take(size)
    }

    // ----- set combination -----

    /// Stream `self` then `other`, dropping elements already emitted
    /// under natural equality; first-seen order preserved.
    fn union<B>(self, other: B) -> Union<Self, B, Natural>
    where
        Self::Item: Eq + Hash + Clone,
        B: Sequence<Item = Self::Item>,
    {
        Union::new(self, other, Natural)
    }

    /// Union deduplicated by an explicit equality strategy.
    fn union_with<B, E>(self, other: B, eq: E) -> Union<Self, B, E>
    where
        Self::Item: Clone,
        B: Sequence<Item = Self::Item>,
        E: Equality<Self::Item> + Clone,
    {
        Union::new(self, other, eq)
    }

    /// Pair elements positionally; stops at the shorter side.
    fn zip<B>(self, other: B) -> ZipWith<Self, B, fn(Self::Item, B::Item) -> (Self::Item, B::Item)>
    where
        B: Sequence,
    {
        ZipWith::new(self, other, |a, b| (a, b))
    }

    /// Pair elements positionally through a combiner.
    fn zip_with<B, R, F>(self, other: B, combine: F) -> ZipWith<Self, B, F>
    where
        B: Sequence,
        F: Fn(Self::Item, B::Item) -> R + Clone,
    {
        ZipWith::new(self, other, combine)
    }

    // ----- aggregation -----

    /// Drain one traversal into a vector.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.produce().collect()
    }

    /// Number of elements; full pass.
    fn count(&self) -> usize {
        self.produce().count()
    }

    /// Number of elements satisfying `predicate`; full pass.
    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.produce().filter(|item| predicate(item)).count()
    }

    /// Smallest element; `Error::Empty` on an empty sequence.
    fn min(&self) -> Result<Self::Item>
    where
        Self::Item: Ord,
    {
        self.produce().min().ok_or(Error::Empty)
    }

    /// Smallest selected value; `Error::Empty` on an empty sequence.
    fn min_of<K, F>(&self, selector: F) -> Result<K>
    where
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        self.produce()
            .map(|item| selector(&item))
            .min()
            .ok_or(Error::Empty)
    }

    /// Arithmetic mean of the elements as `f64`; `Error::Empty` on an
    /// empty sequence.
    fn average(&self) -> Result<f64>
    where
        Self::Item: Into<f64> + Clone,
    {
        self.average_of(|item| item.clone().into())
    }

    /// Arithmetic mean of the selected values as `f64`; `Error::Empty`
    /// on an empty sequence.
    fn average_of<F>(&self, selector: F) -> Result<f64>
    where
        F: Fn(&Self::Item) -> f64,
    {
        let mut sum = 0.0;
        let mut count: usize = 0;
        for item in self.produce() {
            sum += selector(&item);
            count += 1;
        }
        if count == 0 {
            return Err(Error::Empty);
        }
        Ok(sum / count as f64)
    }

    // ----- quantifiers -----

    /// True when the sequence has at least one element; pulls at most
    /// one.
    fn any(&self) -> bool {
        self.produce().next().is_some()
    }

    /// True on the first element satisfying `predicate`;
    /// short-circuits.
    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.produce().any(|item| predicate(&item))
    }

    /// True when every element satisfies `predicate`; short-circuits
    /// false on the first failure.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.produce().all(|item| predicate(&item))
    }

    /// True on the first element equal to `value` under natural
    /// equality; short-circuits.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.produce().any(|item| &item == value)
    }

    /// True on the first element equal to `value` under the supplied
    /// strategy; short-circuits.
    fn contains_with<E>(&self, value: &Self::Item, eq: &E) -> bool
    where
        E: Equality<Self::Item>,
    {
        self.produce().any(|item| eq.equal(&item, value))
    }

    // ----- element access -----

    /// First element; `Error::Empty` when there is none.
    fn first(&self) -> Result<Self::Item> {
        self.produce().next().ok_or(Error::Empty)
    }

    /// First element satisfying `predicate`; `Error::NoMatch` when
    /// none does.
    fn first_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.produce()
            .find(|item| predicate(item))
            .ok_or(Error::NoMatch)
    }

    /// First element, or `fallback` when the sequence is empty. Never
    /// fails.
    fn first_or(&self, fallback: Self::Item) -> Self::Item {
        self.produce().next().unwrap_or(fallback)
    }

    /// First element satisfying `predicate`, or `fallback`. Never
    /// fails.
    fn first_where_or<P>(&self, predicate: P, fallback: Self::Item) -> Self::Item
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.produce()
            .find(|item| predicate(item))
            .unwrap_or(fallback)
    }

    /// First element, or the type default when the sequence is empty.
    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.first_or(Self::Item::default())
    }

    /// The only element. `Error::Empty` on an empty sequence,
    /// `Error::MultipleMatches` when there is more than one.
    fn single(&self) -> Result<Self::Item> {
        let mut cursor = self.produce();
        let first = cursor.next().ok_or(Error::Empty)?;
        match cursor.next() {
            Some(_) => Err(Error::MultipleMatches),
            None => Ok(first),
        }
    }

    /// The only element satisfying `predicate`. `Error::NoMatch` on
    /// zero matches, `Error::MultipleMatches` on more than one.
    fn single_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut matches = self.produce().filter(|item| predicate(item));
        let first = matches.next().ok_or(Error::NoMatch)?;
        match matches.next() {
            Some(_) => Err(Error::MultipleMatches),
            None => Ok(first),
        }
    }

    /// The only element, or `fallback` when the sequence is empty.
    /// Still fails with `Error::MultipleMatches` on more than one
    /// element: too many is never downgraded to the fallback.
    fn single_or(&self, fallback: Self::Item) -> Result<Self::Item> {
        let mut cursor = self.produce();
        let first = match cursor.next() {
            Some(item) => item,
            None => return Ok(fallback),
        };
        match cursor.next() {
            Some(_) => Err(Error::MultipleMatches),
            None => Ok(first),
        }
    }

    /// The only element satisfying `predicate`, or `fallback` on zero
    /// matches. Still fails with `Error::MultipleMatches` on more than
    /// one match.
    fn single_where_or<P>(&self, predicate: P, fallback: Self::Item) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut matches = self.produce().filter(|item| predicate(item));
        let first = match matches.next() {
            Some(item) => item,
            None => return Ok(fallback),
        };
        match matches.next() {
            Some(_) => Err(Error::MultipleMatches),
            None => Ok(first),
        }
    }

    /// The only element, or the type default when the sequence is
    /// empty. Still fails on more than one element.
    fn single_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        self.single_or(Self::Item::default())
    }

    /// Element at `index` (0-based); `Error::OutOfRange` when the
    /// sequence is shorter.
    fn element_at(&self, index: usize) -> Result<Self::Item> {
        let mut len = 0;
        for item in self.produce() {
            if len == index {
                return Ok(item);
            }
            len += 1;
        }
        Err(Error::OutOfRange { index, len })
    }

    /// Element at `index`, or `fallback` when the sequence is shorter.
    /// Never fails.
    fn element_at_or(&self, index: usize, fallback: Self::Item) -> Self::Item {
        self.produce().nth(index).unwrap_or(fallback)
    }

    /// Element at `index`, or the type default when the sequence is
    /// shorter.
    fn element_at_or_default(&self, index: usize) -> Self::Item
    where
        Self::Item: Default,
    {
        self.element_at_or(index, Self::Item::default())
    }
}

impl<S: Sequence> Query for S {}
