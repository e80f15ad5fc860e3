//! Keyed groups produced by grouping and group-join stages.

use std::sync::Arc;

use serde::Serialize;

use crate::sequence::{ItemsCursor, Sequence};

/// A key paired with the elements sharing it.
///
/// Members are materialized once when the producing stage partitions
/// its input, then exposed as a restartable sequence sharing one
/// buffer across clones and traversals.
#[derive(Debug, Clone, Serialize)]
pub struct Grouping<K, T> {
    key: K,
    elements: Arc<Vec<T>>,
}

impl<K, T> Grouping<K, T> {
    pub fn new(key: K, elements: Vec<T>) -> Self {
        Grouping {
            key,
            elements: Arc::new(elements),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<K, T: Clone> Sequence for Grouping<K, T> {
    type Item = T;
    type Cursor = ItemsCursor<T>;

    fn produce(&self) -> Self::Cursor {
        ItemsCursor::new(Arc::clone(&self.elements))
    }
}
