use pullflow::testing::*;
use pullflow::{from_iter, from_vec, DataStream, DataStreamExt};

#[test]
fn filter_even_and_square() {
    let result = from_vec(vec![1, 2, 3, 4, 5, 6, 7, 8])
        .filter(|x: &i32| x % 2 == 0)
        .map(|x: i32| x * x)
        .collect();
    assert_collections_equal(&result, &[4, 16, 36, 64]);
}

#[test]
fn transform_then_filter() {
    let result = from_vec(vec![1, 2, 3, 4, 5])
        .map(|x: i32| x + 10)
        .filter(|x: &i32| x % 2 != 0)
        .collect();
    assert_collections_equal(&result, &[11, 13, 15]);
}

#[test]
fn filter_preserves_relative_order() {
    let result = from_vec(vec![5, 1, 4, 2, 3])
        .filter(|x: &i32| *x < 4)
        .collect();
    assert_collections_equal(&result, &[1, 2, 3]);
}

#[test]
fn map_generalizes_element_type() {
    let result = from_vec(vec![1, 22, 333])
        .map(|x: i32| x.to_string())
        .collect();
    assert_collections_equal(
        &result,
        &["1".to_string(), "22".to_string(), "333".to_string()],
    );
}

#[test]
fn running_total_through_side_effecting_map() {
    let mut total = 0;
    let result = from_vec(vec![1, 2, 3, 4, 5])
        .map(|x: i32| {
            total += x;
            total
        })
        .collect();
    assert_collections_equal(&result, &[1, 3, 6, 10, 15]);
}

#[test]
fn map_runs_exactly_once_per_element_in_order() {
    let mut seen = Vec::new();
    let result = from_vec(vec![1, 2, 3])
        .map(|x: i32| {
            seen.push(x);
            x * 10
        })
        .collect();
    assert_collections_equal(&result, &[10, 20, 30]);
    assert_collections_equal(&seen, &[1, 2, 3]);
}

#[test]
fn drop_none_keeps_present_values() {
    let result = from_vec(vec![Some(1), None, Some(3), None, None, Some(6)])
        .drop_none()
        .collect();
    assert_collections_equal(&result, &[1, 3, 6]);
}

#[test]
fn end_is_monotone_after_exhaustion() {
    let mut s = from_vec(vec![1, 2]);
    assert_eq!(s.next(), Some(1));
    assert_eq!(s.next(), Some(2));
    assert_eq!(s.next(), None);
    assert!(s.is_end());
    for _ in 0..3 {
        assert_eq!(s.next(), None);
        assert!(s.is_end());
    }
}

#[test]
fn end_is_monotone_through_a_rejecting_filter() {
    // upstream still holds elements, but none can ever be emitted
    let mut s = from_vec(vec![1, 2, 9, 9, 9]).filter(|x: &i32| *x < 3);
    assert_eq!(s.next(), Some(1));
    assert_eq!(s.next(), Some(2));
    assert_eq!(s.next(), None);
    assert!(s.is_end());
    assert_eq!(s.next(), None);
    assert!(s.is_end());
}

#[test]
fn from_iter_collects_the_iterator() {
    let result = from_iter(1..=4).map(|x: i32| x * 2).collect();
    assert_collections_equal(&result, &[2, 4, 6, 8]);
}

#[test]
fn collect_on_empty_source_is_empty() {
    let result = from_vec(Vec::<i32>::new()).collect();
    assert!(result.is_empty());
}
