//! Aggregation, quantifier, and element-access tests, including the
//! error contract of the non-fallback accessors.

mod test_support;

use std::sync::atomic::Ordering;

use seqflow_core::{by_fn, empty, items, Error};
use seqflow_ops::Query;
use test_support::Counted;

#[test]
fn count_and_count_where() {
    let source = items(vec![1, 2, 3, 4, 5]);
    assert_eq!(source.count(), 5);
    assert_eq!(source.count_where(|n| n % 2 == 0), 2);
}

#[test]
fn min_and_min_of() {
    assert_eq!(items(vec![5, 4, 3, 2, 1]).min(), Ok(1));
    let pairs = items(vec![("a", 4), ("b", 2), ("c", 9)]);
    assert_eq!(pairs.min_of(|pair| pair.1), Ok(2));
}

#[test]
fn min_fails_on_empty_input() {
    assert_eq!(empty::<i32>().min(), Err(Error::Empty));
    assert_eq!(empty::<i32>().min_of(|n| *n), Err(Error::Empty));
}

#[test]
fn average_is_a_float_regardless_of_input_type() {
    assert_eq!(items(vec![5, 4, 3, 2, 1]).average(), Ok(3.0));
    assert_eq!(items(vec![1, 2]).average(), Ok(1.5));
    assert_eq!(
        items(vec!["xx", "yyyy"]).average_of(|s| s.len() as f64),
        Ok(3.0)
    );
}

#[test]
fn average_fails_on_empty_input() {
    assert_eq!(empty::<i32>().average(), Err(Error::Empty));
}

#[test]
fn any_and_all_short_circuit() {
    let source = Counted::new(items(vec![1, 2, 3, 4]));
    let pulls = source.counter();
    assert!(source.any_where(|n| n % 2 == 0));
    // 1 rejected, 2 accepted; 3 and 4 never pulled.
    assert_eq!(pulls.load(Ordering::SeqCst), 2);

    let source = Counted::new(items(vec![2, 3, 4, 5]));
    let pulls = source.counter();
    assert!(!source.all(|n| n % 2 == 0));
    assert_eq!(pulls.load(Ordering::SeqCst), 2);
}

#[test]
fn any_without_predicate_checks_emptiness() {
    assert!(items(vec![0]).any());
    assert!(!empty::<i32>().any());
}

#[test]
fn contains_uses_natural_equality_by_default() {
    let source = items(vec![1, 2, 3, 4, 5]);
    assert!(source.contains(&3));
    assert!(!source.contains(&13));
}

#[test]
fn contains_with_accepts_a_comparison_only_strategy() {
    let source = items(vec![1, -2, 3]);
    let by_magnitude = by_fn(|a: &i32, b: &i32| a.abs() == b.abs());
    assert!(source.contains_with(&2, &by_magnitude));
    assert!(!source.contains_with(&4, &by_magnitude));
}

#[test]
fn first_family() {
    let source = items(vec![5, 3, 1]);
    assert_eq!(source.first(), Ok(5));
    assert_eq!(source.first_where(|n| n % 2 == 0), Err(Error::NoMatch));
    assert_eq!(source.first_where_or(|n| n % 2 == 0, 0), 0);
    assert_eq!(source.first_where_or(|n| *n < 4, 0), 3);
    assert_eq!(empty::<i32>().first(), Err(Error::Empty));
    assert_eq!(empty::<i32>().first_or(7), 7);
    assert_eq!(empty::<i32>().first_or_default(), 0);
}

#[test]
fn single_family() {
    let source = items(vec![5, 4, 3]);
    assert_eq!(source.single_where(|n| n % 2 == 0), Ok(4));
    assert_eq!(items(vec![9]).single(), Ok(9));
    assert_eq!(empty::<i32>().single(), Err(Error::Empty));
    assert_eq!(
        items(vec![1, 2]).single(),
        Err(Error::MultipleMatches)
    );
    assert_eq!(
        items(vec![5, 4, 2]).single_where(|n| n % 2 == 0),
        Err(Error::MultipleMatches)
    );
    assert_eq!(
        items(vec![5, 3, 1]).single_where(|n| n % 6 == 0),
        Err(Error::NoMatch)
    );
}

#[test]
fn single_or_converts_too_few_but_never_too_many() {
    assert_eq!(items(vec![5, 3, 1]).single_where_or(|n| n % 6 == 0, 0), Ok(0));
    assert_eq!(empty::<i32>().single_or(42), Ok(42));
    assert_eq!(empty::<i32>().single_or_default(), Ok(0));
    // Too many matches still fails, even with a fallback at hand.
    assert_eq!(
        items(vec![4, 2]).single_where_or(|n| n % 2 == 0, 0),
        Err(Error::MultipleMatches)
    );
    assert_eq!(items(vec![1, 2]).single_or(0), Err(Error::MultipleMatches));
}

#[test]
fn single_stops_pulling_at_the_second_match() {
    let source = Counted::new(items(vec![2, 4, 6, 8]));
    let pulls = source.counter();
    assert_eq!(source.single_where(|n| n % 2 == 0), Err(Error::MultipleMatches));
    assert_eq!(pulls.load(Ordering::SeqCst), 2);
}

#[test]
fn element_at_family() {
    let source = items(vec![5, 4, 3]);
    assert_eq!(source.element_at(2), Ok(3));
    assert_eq!(
        source.element_at(20),
        Err(Error::OutOfRange { index: 20, len: 3 })
    );
    assert_eq!(source.element_at_or(20, -1), -1);
    assert_eq!(source.element_at_or_default(20), 0);
    assert_eq!(source.element_at_or(1, -1), 4);
}
