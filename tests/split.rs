use pullflow::testing::*;
use pullflow::{from_vec, DataStreamExt};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn splits_on_multiple_delimiters() {
    let result = from_vec(strings(&["1,2,3,4,5", "6;7;8;9;10"]))
        .split(",;")
        .collect();
    assert_collections_equal(
        &result,
        &strings(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]),
    );
}

#[test]
fn consecutive_delimiters_emit_no_empty_tokens() {
    let result = from_vec(strings(&[",,a,,,b,,"])).split(",").collect();
    assert_collections_equal(&result, &strings(&["a", "b"]));
}

#[test]
fn delimiter_only_elements_emit_nothing() {
    let result = from_vec(strings(&[",,,", ";;;"])).split(",;").collect();
    assert!(result.is_empty());
}

#[test]
fn tokens_never_cross_element_boundaries() {
    // "12" and "34" stay separate records even with no delimiter in sight
    let result = from_vec(strings(&["12", "34"])).split(",").collect();
    assert_collections_equal(&result, &strings(&["12", "34"]));
}

#[test]
fn trailing_token_is_emitted_at_end() {
    let result = from_vec(strings(&["a,b,c"])).split(",").collect();
    assert_collections_equal(&result, &strings(&["a", "b", "c"]));
}

#[test]
fn empty_elements_are_ignored() {
    let result = from_vec(strings(&["", "x", ""])).split(",").collect();
    assert_collections_equal(&result, &strings(&["x"]));
}

#[test]
fn split_then_filter() {
    let result = from_vec(strings(&[
        "hello,world",
        "test,data,processing",
        "one,two,three,four",
    ]))
    .split(",")
    .filter(|s: &String| s.len() > 3)
    .collect();
    assert_collections_equal(
        &result,
        &strings(&["hello", "world", "test", "data", "processing", "three", "four"]),
    );
}

#[test]
fn tokens_are_nonempty_and_delimiter_free() {
    let result = from_vec(strings(&["a b\tc", "\t \t", " d e "]))
        .split(" \t")
        .collect();
    assert_all(&result, |t| !t.is_empty());
    assert_all(&result, |t| !t.contains(' ') && !t.contains('\t'));
    assert_collections_equal(&result, &strings(&["a", "b", "c", "d", "e"]));
}
