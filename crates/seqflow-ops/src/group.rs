//! Grouping stage.

use seqflow_core::prelude::{Equality, Grouping, KeyIndex, Sequence};

/// Partition the input into keyed groups.
///
/// A single full pass over the input (finite input required) builds the
/// key buckets at the first cursor pull; groups come out in first-seen
/// key order, not sorted. Callers wanting sorted groups compose an
/// explicit `order_by` over the group keys.
#[derive(Debug, Clone)]
pub struct GroupBy<S, F, E> {
    source: S,
    key: F,
    eq: E,
}

impl<S, F, E> GroupBy<S, F, E> {
    pub(crate) fn new(source: S, key: F, eq: E) -> Self {
        GroupBy { source, key, eq }
    }
}

impl<S, F, E, K> Sequence for GroupBy<S, F, E>
where
    S: Sequence,
    F: Fn(&S::Item) -> K + Clone,
    E: Equality<K> + Clone,
{
    type Item = Grouping<K, S::Item>;
    type Cursor = GroupByCursor<S::Cursor, F, E, K>;

    fn produce(&self) -> Self::Cursor {
        GroupByCursor {
            input: Some((self.source.produce(), self.key.clone(), self.eq.clone())),
            groups: Vec::new().into_iter(),
        }
    }
}

pub struct GroupByCursor<C: Iterator, F, E, K> {
    input: Option<(C, F, E)>,
    groups: std::vec::IntoIter<Grouping<K, C::Item>>,
}

impl<C, F, E, K> Iterator for GroupByCursor<C, F, E, K>
where
    C: Iterator,
    F: Fn(&C::Item) -> K,
    E: Equality<K>,
{
    type Item = Grouping<K, C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((input, key, eq)) = self.input.take() {
            let mut index = KeyIndex::new(eq);
            for item in input {
                index.insert(key(&item), item);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(groups = index.len(), "group partition built");
            let groups: Vec<Grouping<K, C::Item>> = index
                .into_entries()
                .into_iter()
                .map(|(key, members)| Grouping::new(key, members))
                .collect();
            self.groups = groups.into_iter();
        }
        self.groups.next()
    }
}
