//! End-to-end pipeline tests: deferred execution, restartability, and
//! the filtering/projection stages.

mod test_support;

use std::sync::atomic::Ordering;

use seqflow_core::{generate, integers, items, Sequence};
use seqflow_ops::Query;
use test_support::Counted;

#[test]
fn construction_is_deferred() {
    let source = Counted::new(items(vec![3, 1, 2]));
    let pulls = source.counter();

    let query = source
        .filter(|n| n % 2 == 1)
        .map(|n| n * 10)
        .order_by(|n| *n);
    assert_eq!(pulls.load(Ordering::SeqCst), 0, "chaining must not pull");

    let mut cursor = query.produce();
    assert_eq!(pulls.load(Ordering::SeqCst), 0, "produce must not pull");

    assert_eq!(cursor.next(), Some(10));
    assert!(pulls.load(Ordering::SeqCst) > 0);
}

#[test]
fn chains_are_restartable() {
    let query = items(vec![5, 8, 13, 21]).filter(|n| n % 2 == 1).map(|n| n + 1);
    assert_eq!(query.to_vec(), vec![6, 14, 22]);
    assert_eq!(query.to_vec(), vec![6, 14, 22]);
}

#[test]
fn filter_count_matches_count_where() {
    let source = items(vec![4, 8, 15, 16, 23, 42]);
    let even = |n: &i32| n % 2 == 0;
    assert_eq!(
        source.clone().filter(even).count(),
        source.count_where(even)
    );
}

#[test]
fn filter_indexed_counts_rejected_elements() {
    // Indexes 0..6 over every input element; keep odd indexes > 10.
    let query = items(vec![11, 12, 2, 13, 14, 3])
        .filter_indexed(|n, idx| *n > 10 && idx % 2 == 1);
    assert_eq!(query.to_vec(), vec![12, 13]);
}

#[test]
fn map_indexed_is_zero_based() {
    let query = items(vec!["a", "b", "c"]).map_indexed(|s, idx| format!("{idx}:{s}"));
    assert_eq!(query.to_vec(), vec!["0:a", "1:b", "2:c"]);
}

#[test]
fn flat_map_is_outer_major() {
    let query = items(vec![1i64, 2, 3, 4]).flat_map(|n| {
        let n = *n;
        items(vec![n, n * n, n * n * n])
    });
    assert_eq!(
        query.to_vec(),
        vec![1, 1, 1, 2, 4, 8, 3, 9, 27, 4, 16, 64]
    );
}

#[test]
fn flat_map_with_pairs_outer_and_inner() {
    let seconds = items(vec![4i32, 5]);
    let query = items(vec![1i32, 2, 3, 4])
        .flat_map_with(move |_| seconds.clone(), |a, b| (*a, b))
        .filter(|(a, b)| (a - b).abs() == 1);
    assert_eq!(query.to_vec(), vec![(3, 4), (4, 5)]);
}

#[test]
fn generate_source_restarts_per_traversal() {
    let squares = generate(|| (1..=3).map(|n| n * n));
    assert_eq!(squares.to_vec(), vec![1, 4, 9]);
    assert_eq!(squares.to_vec(), vec![1, 4, 9]);
}

#[test]
fn infinite_source_streams_through_lazy_stages() {
    let query = integers().map(|n| n * 2).skip(3).take(4);
    assert_eq!(query.to_vec(), vec![6, 8, 10, 12]);
}

#[test]
fn zip_stops_at_shorter_side() {
    let labels = items(vec!["label", "test", "hello", "another"]);
    let query = items(vec![1, 2, 3]).zip_with(labels, |n, label| format!("{label}{n}"));
    assert_eq!(query.to_vec(), vec!["label1", "test2", "hello3"]);
}

#[test]
fn zip_pairs_positionally() {
    let query = items(vec![1, 2]).zip(items(vec!["a", "b", "c"]));
    assert_eq!(query.to_vec(), vec![(1, "a"), (2, "b")]);
}

#[test]
fn default_if_empty_passes_elements_through() {
    let query = items(vec![7, 9]).default_if_empty(0);
    assert_eq!(query.to_vec(), vec![7, 9]);
}

#[test]
fn default_if_empty_yields_sentinel_once() {
    let query = items(Vec::<i32>::new()).default_if_empty(-1);
    assert_eq!(query.to_vec(), vec![-1]);
    // Restartable: the sentinel reappears on a fresh traversal.
    assert_eq!(query.to_vec(), vec![-1]);
}
