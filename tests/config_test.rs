mod fixtures;

use fixtures::{SAMPLE_JSON, write_file};
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn serplens() -> Command {
    Command::new(env!("CARGO_BIN_EXE_serplens"))
}

#[test]
fn test_cli_with_json_config() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "competitors.json", SAMPLE_JSON);
    let config_path = write_file(
        dir.path(),
        "config.json",
        r#"{ "keyword": "hubspot", "output": "json" }"#,
    );

    let output = serplens()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // config keyword beats the keyword stored in the input file
    assert_eq!(value["keyword"], "hubspot");
}

#[test]
fn test_cli_with_toml_config() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "competitors.json", SAMPLE_JSON);
    let config_path = write_file(dir.path(), "config.toml", "output = \"csv\"\n");

    let output = serplens()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Position,Domain,URL"));
}

#[test]
fn test_cli_with_yaml_config_saves_csv() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "competitors.json", SAMPLE_JSON);
    let csv_path = dir.path().join("out.csv");
    let config_path = write_file(
        dir.path(),
        "config.yaml",
        &format!("output: json\ncsv: \"{}\"\n", csv_path.display()),
    );

    let output = serplens()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn test_cli_args_override_config() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "competitors.json", SAMPLE_JSON);
    let config_path = write_file(
        dir.path(),
        "config.json",
        r#"{ "keyword": "hubspot", "output": "csv" }"#,
    );

    let output = serplens()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .arg("--keyword")
        .arg("webfx")
        .arg("--output")
        .arg("json")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["keyword"], "webfx");
}

#[test]
fn test_cli_with_invalid_config_format() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "competitors.json", SAMPLE_JSON);
    let config_path = write_file(dir.path(), "config.txt", "invalid content");

    let output = serplens()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported config file format"));
}

#[test]
fn test_cli_with_invalid_json_config() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "competitors.json", SAMPLE_JSON);
    let config_path = write_file(dir.path(), "config.json", r#"{ invalid json }"#);

    let output = serplens()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse JSON config"));
}

#[test]
fn test_cli_with_nonexistent_config() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "competitors.json", SAMPLE_JSON);

    let output = serplens()
        .arg(&input)
        .arg("--config")
        .arg("/nonexistent/path/config.json")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_config_verbose_enables_debug_logging() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "competitors.json", SAMPLE_JSON);
    let config_path = write_file(
        dir.path(),
        "config.json",
        r#"{ "output": "json", "verbose": true }"#,
    );

    let output = serplens()
        .arg(&input)
        .arg("--config")
        .arg(&config_path)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains("Competitor added"));
}
