//! Partitioning tests: take, take-while, skip, pagination, and the
//! no-over-pull guarantee.

mod test_support;

use std::sync::atomic::Ordering;

use seqflow_core::{integers, items};
use seqflow_ops::Query;
use test_support::Counted;

#[test]
fn take_bounds_the_infinite_counting_source() {
    for n in 0..6 {
        let query = integers().filter(|v| v % 2 == 0).take(n);
        let expected: Vec<i64> = (0..n as i64).map(|i| 2 * i).collect();
        assert_eq!(query.to_vec(), expected);
    }
}

#[test]
fn take_pulls_the_minimum_from_upstream() {
    let source = Counted::new(integers());
    let pulls = source.counter();
    let query = source.filter(|v| v % 2 == 0).take(3);

    assert_eq!(query.to_vec(), vec![0, 2, 4]);
    // 0, 1, 2, 3, 4 cross the counter; nothing more is pulled once
    // three elements were delivered.
    assert_eq!(pulls.load(Ordering::SeqCst), 5);
}

#[test]
fn take_zero_never_pulls() {
    let source = Counted::new(items(vec![1, 2, 3]));
    let pulls = source.counter();
    assert!(source.take(0).to_vec().is_empty());
    assert_eq!(pulls.load(Ordering::SeqCst), 0);
}

#[test]
fn take_while_stops_permanently_at_first_failure() {
    let query = items(vec![1, 2, 5, 1, 2]).take_while(|n| *n < 3);
    assert_eq!(query.to_vec(), vec![1, 2]);
}

#[test]
fn take_while_does_not_pull_past_the_failure() {
    let source = Counted::new(items(vec![1, 5, 1, 1, 1]));
    let pulls = source.counter();
    assert_eq!(source.take_while(|n| *n < 3).to_vec(), vec![1]);
    // One accepted element, one failing element, nothing after.
    assert_eq!(pulls.load(Ordering::SeqCst), 2);
}

#[test]
fn skip_discards_then_streams() {
    let query = items(vec![10, 20, 30, 40]).skip(2);
    assert_eq!(query.to_vec(), vec![30, 40]);
}

#[test]
fn skip_past_the_end_is_empty() {
    assert!(items(vec![1, 2]).skip(5).to_vec().is_empty());
}

#[test]
fn page_composes_skip_and_take() {
    let source = items((1..=9).collect::<Vec<i32>>());
    assert_eq!(source.clone().page(2, 4).to_vec(), vec![5, 6, 7, 8]);
    assert_eq!(
        source.clone().page(2, 4).to_vec(),
        source.skip(4).take(4).to_vec()
    );
}

#[test]
fn pagination_covers_a_sorted_sequence_without_gaps_or_overlap() {
    // 23 elements, page size 10: pages of 10, 10, and 3.
    let sorted = items((0..23).map(|n| (n * 7) % 23).collect::<Vec<i32>>()).order_by(|n| *n);
    let page_size = 10;

    let mut sizes = Vec::new();
    let mut combined = Vec::new();
    for number in 1..=3 {
        let page = sorted.clone().page(number, page_size).to_vec();
        sizes.push(page.len());
        combined.extend(page);
    }

    assert_eq!(sizes, vec![10, 10, 3]);
    assert_eq!(combined, sorted.to_vec());
    assert_eq!(combined, (0..23).collect::<Vec<i32>>());
}
