//! Stable multi-key ordering tests.

mod test_support;

use std::sync::atomic::Ordering;

use seqflow_core::items;
use seqflow_ops::Query;
use test_support::Counted;

/// (group, rank, tag): tag records the original position so stability
/// is observable.
fn dataset() -> Vec<(u32, u32, &'static str)> {
    vec![
        (2, 1, "a"),
        (1, 2, "b"),
        (2, 1, "c"),
        (1, 1, "d"),
        (2, 2, "e"),
        (1, 2, "f"),
    ]
}

#[test]
fn order_by_is_stable_across_equal_keys() {
    let sorted = items(dataset()).order_by(|row| row.0);
    let tags: Vec<&str> = sorted.to_vec().into_iter().map(|row| row.2).collect();
    // Within each group the original order b, d, f / a, c, e survives.
    assert_eq!(tags, vec!["b", "d", "f", "a", "c", "e"]);
}

#[test]
fn then_by_breaks_ties_and_stays_stable() {
    let sorted = items(dataset()).order_by(|row| row.0).then_by(|row| row.1);
    let tags: Vec<&str> = sorted.to_vec().into_iter().map(|row| row.2).collect();
    // Equal (group, rank) pairs keep original relative order: b before
    // f, a before c.
    assert_eq!(tags, vec!["d", "b", "f", "a", "c", "e"]);
}

#[test]
fn then_by_desc_reverses_only_the_subordinate_key() {
    let sorted = items(dataset())
        .order_by(|row| row.0)
        .then_by_desc(|row| row.1);
    let tags: Vec<&str> = sorted.to_vec().into_iter().map(|row| row.2).collect();
    assert_eq!(tags, vec!["b", "f", "d", "e", "a", "c"]);
}

#[test]
fn order_by_desc_sorts_descending() {
    let sorted = items(vec![3, 1, 4, 1, 5]).order_by_desc(|n| *n);
    assert_eq!(sorted.to_vec(), vec![5, 4, 3, 1, 1]);
}

#[test]
fn ordering_rematerializes_from_upstream_per_traversal() {
    let source = Counted::new(items(vec![3, 1, 2]));
    let pulls = source.counter();
    let sorted = source.order_by(|n| *n);

    assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
    let after_first = pulls.load(Ordering::SeqCst);
    assert!(after_first > 0);

    assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
    // No cross-traversal cache: the second run drains upstream again.
    assert_eq!(pulls.load(Ordering::SeqCst), 2 * after_first);
}

#[test]
fn ordering_yields_nothing_for_empty_input() {
    let sorted = items(Vec::<i32>::new()).order_by(|n| *n);
    assert!(sorted.to_vec().is_empty());
}
