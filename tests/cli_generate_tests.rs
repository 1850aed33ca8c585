//! End-to-end tests for `shadesmith generate`.

mod common;
use common::*;

const SHADES: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

#[test]
fn test_generate_text_lists_all_shades() {
    let output = run_isolated(&["generate", "#2563eb"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "generate should succeed. stderr: {}",
        stderr(&output)
    );

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11, "one line per shade:\n{text}");
    for (line, shade) in lines.iter().zip(SHADES) {
        assert_eq!(line.split_whitespace().next(), Some(shade));
    }
    assert_eq!(lines[5], "500  #2563EB");
}

#[test]
fn test_generate_accepts_unprefixed_and_short_hex() {
    let full = run_isolated(&["generate", "2563EB", "--format", "json"]);
    assert_eq!(full.status.code(), Some(0));
    assert_eq!(stdout_json(&full)["shades"]["500"], "#2563EB");

    let short = run_isolated(&["generate", "#f0a", "--format", "json"]);
    assert_eq!(short.status.code(), Some(0));
    assert_eq!(stdout_json(&short)["shades"]["500"], "#FF00AA");
}

#[test]
fn test_generate_json_schema() {
    let output = run_isolated(&["generate", "#e63946", "--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let result = stdout_json(&output);
    assert_eq!(result["base"], "#E63946");
    assert_eq!(result["group"], "primary");

    let shades = result["shades"].as_object().expect("shades object");
    assert_eq!(shades.len(), 11);
    for shade in SHADES {
        let hex = shades[shade].as_str().expect("hex string");
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
        assert_eq!(hex, hex.to_uppercase(), "{shade} should be uppercase");
    }

    // Shades come out in ascending order
    let raw = stdout(&output);
    let positions: Vec<usize> = SHADES
        .iter()
        .map(|s| raw.find(&format!("\"{s}\":")).expect("shade key present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_generate_is_idempotent_through_500() {
    let first = stdout_json(&run_isolated(&["generate", "#10b981", "--format", "json"]));
    let base = first["shades"]["500"].as_str().unwrap().to_string();
    let second = stdout_json(&run_isolated(&["generate", &base, "--format", "json"]));
    assert_eq!(first["shades"], second["shades"]);
}

#[test]
fn test_generate_config_snippet() {
    let output = run_isolated(&["generate", "#2563eb", "--format", "config"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.first(), Some(&"'primary': {"));
    assert_eq!(lines.last(), Some(&"},"));
    assert_eq!(lines.len(), 13);
    assert!(lines.contains(&"    '500': '#2563EB',"));
}

#[test]
fn test_generate_config_snippet_custom_group() {
    let output = run_isolated(&["generate", "#2563eb", "--format", "config", "--group", "brand"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("'brand': {"));
}

#[test]
fn test_generate_uses_configured_group() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();

    let set = isolated_command(&["config", "set", "--group", "accent"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0), "stderr: {}", stderr(&set));

    let output = isolated_command(&["generate", "#2563eb", "--format", "config"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert!(stdout(&output).starts_with("'accent': {"));
}

#[test]
fn test_generate_rejects_corrupt_config_instead_of_default_group() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();
    std::fs::write(
        config_dir.join("config.toml"),
        "[palette]\ndefault_color = \"#12\"\ngroup_name = \"brand\"\n",
    )
    .unwrap();

    let output = isolated_command(&["generate", "#2563eb", "--format", "config"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
    assert!(!stdout(&output).contains("'primary'"));
}

#[test]
fn test_generate_group_flag_skips_config_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();
    std::fs::write(config_dir.join("config.toml"), "[palette]\ngroup_name = 7\n").unwrap();

    let output = isolated_command(
        &["generate", "#2563eb", "--format", "config", "--group", "brand"],
        config_dir,
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("'brand': {"));
}

#[test]
fn test_generate_rejects_padded_configured_group() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path();
    std::fs::write(
        config_dir.join("config.toml"),
        "[palette]\ngroup_name = \"  brand  \"\n",
    )
    .unwrap();

    let output = isolated_command(&["generate", "#2563eb", "--format", "config"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("whitespace"));
    assert!(!stdout(&output).contains("'  brand  '"));
}

#[test]
fn test_generate_invalid_color() {
    for bad in ["zz1234", "#1", "#12345"] {
        let output = run_isolated(&["generate", bad]);
        assert_eq!(
            output.status.code(),
            Some(1),
            "'{bad}' should fail with exit code 1 (validation)"
        );
        assert!(stderr(&output).contains("Invalid color"));
        assert!(stdout(&output).is_empty());
    }
}

#[test]
fn test_generate_invalid_format() {
    let output = run_isolated(&["generate", "#2563eb", "--format", "yaml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid format"));
}

#[test]
fn test_generate_rejects_quoted_group() {
    let output = run_isolated(&["generate", "#2563eb", "--group", "it's"]);
    assert_eq!(output.status.code(), Some(1));
}
