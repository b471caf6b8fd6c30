use pullflow::testing::*;
use pullflow::{from_vec, DataStreamExt, WriteTo};

#[derive(Debug, Clone, PartialEq)]
struct Department {
    name: String,
}

fn make_department(name: &str) -> Result<Department, String> {
    if name.is_empty() {
        return Err("Department name is empty".to_string());
    }
    if name.contains(' ') {
        return Err("Department name contains space".to_string());
    }
    Ok(Department { name: name.to_string() })
}

#[test]
fn department_names_split_into_failures_and_successes() -> anyhow::Result<()> {
    let departments: Vec<Result<Department, String>> = [
        "good-department",
        "bad department",
        "",
        "another-good-department",
    ]
    .iter()
    .map(|name| make_department(name))
    .collect();

    let parts = from_vec(departments).split_result();

    let mut failures = Vec::new();
    (parts.failures | WriteTo(&mut failures, '.'))?;
    assert_eq!(
        String::from_utf8(failures)?,
        "Department name contains space.Department name is empty."
    );

    let names: Vec<String> = parts
        .successes
        .map(|d: Department| d.name)
        .collect();
    assert_collections_equal(
        &names,
        &[
            "good-department".to_string(),
            "another-good-department".to_string(),
        ],
    );
    Ok(())
}

#[test]
fn both_streams_preserve_encounter_order() {
    let parts = from_vec(vec![Ok(1), Err("a"), Ok(2), Err("b"), Ok(3)]).split_result();
    assert_collections_equal(&parts.successes.collect(), &[1, 2, 3]);
    assert_collections_equal(&parts.failures.collect(), &["a", "b"]);
}

#[test]
fn partition_is_total_over_the_input() {
    let input: Vec<Result<u32, u32>> = (0..20)
        .map(|i| if i % 3 == 0 { Err(i) } else { Ok(i) })
        .collect();
    let expected_failures = input.iter().filter(|r| r.is_err()).count();
    let expected_successes = input.len() - expected_failures;

    let parts = from_vec(input).split_result();
    let failures = parts.failures.collect();
    let successes = parts.successes.collect();

    assert_eq!(failures.len(), expected_failures);
    assert_eq!(successes.len(), expected_successes);
    assert_all(&failures, |f| f % 3 == 0);
    assert_all(&successes, |s| s % 3 != 0);
}

#[test]
fn either_side_may_be_consumed_first() {
    let parts = from_vec(vec![Ok("yes"), Err("no")]).split_result();
    // successes first this time
    assert_collections_equal(&parts.successes.collect(), &["yes"]);
    assert_collections_equal(&parts.failures.collect(), &["no"]);
}

#[test]
fn all_failures_leaves_success_stream_empty() {
    let parts = from_vec(vec![Err::<u8, _>("x"), Err("y")]).split_result();
    assert!(parts.successes.collect().is_empty());
    assert_collections_equal(&parts.failures.collect(), &["x", "y"]);
}
