//! End-to-end tests for `shadesmith random`.

mod common;
use common::*;

#[test]
fn test_random_json_has_base_at_500() {
    let output = run_isolated(&["random", "--format", "json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "random should succeed. stderr: {}",
        stderr(&output)
    );

    let result = stdout_json(&output);
    assert_eq!(result["base"], result["shades"]["500"]);
    assert_eq!(result["shades"].as_object().unwrap().len(), 11);
}

#[test]
fn test_random_seed_is_reproducible() {
    let first = run_isolated(&["random", "--seed", "42", "--format", "json"]);
    let second = run_isolated(&["random", "--seed", "42", "--format", "json"]);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(stdout(&first), stdout(&second));

    let other = run_isolated(&["random", "--seed", "43", "--format", "json"]);
    assert_ne!(stdout_json(&first)["base"], stdout_json(&other)["base"]);
}

#[test]
fn test_random_text_starts_with_base() {
    let output = run_isolated(&["random", "--seed", "7"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12);

    let base = lines[0].strip_prefix("base ").expect("base line");
    assert_eq!(lines[6], format!("500  {base}"));
}

#[test]
fn test_random_config_format() {
    let output = run_isolated(&["random", "--seed", "1", "--format", "config", "--group", "brand"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    assert!(text.starts_with("// base #"));
    assert!(text.contains("'brand': {"));
}

#[test]
fn test_random_invalid_format() {
    let output = run_isolated(&["random", "--format", "xml"]);
    assert_eq!(output.status.code(), Some(1));
}
