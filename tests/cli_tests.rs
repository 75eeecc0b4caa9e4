//! Binary-level tests: argument handling, exit codes, and error output.

use std::process::{Command, Output};

use tempfile::TempDir;

const CHE_VARS: [&str; 3] = ["CHE_WORKSPACE_ID", "CHE_API", "CHE_MACHINE_TOKEN"];

/// Run the `che` binary in `cwd` with a clean Che environment plus `vars`.
fn che(cwd: &std::path::Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_che"));
    cmd.current_dir(cwd).args(args).env_remove("RUST_LOG");
    for var in CHE_VARS {
        cmd.env_remove(var);
    }
    for (k, v) in vars {
        cmd.env(k, v);
    }
    cmd.output().expect("Failed to run che binary")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_lists_open_command() {
    let dir = TempDir::new().unwrap();
    let output = che(dir.path(), &["--help"], &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("open"));
    assert!(stdout.contains("Open a file in Eclipse Che"));
}

#[test]
fn open_without_file_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let output = che(dir.path(), &["open"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim(), "error: The filename argument is required");
    assert!(output.stdout.is_empty());
}

#[test]
fn open_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = che(dir.path(), &["open", "ghost.md"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ghost.md does not exist"));
}

#[test]
fn open_without_workspace_env_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();

    let output = che(dir.path(), &["open", "notes.txt"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output).trim(),
        "error: CHE_WORKSPACE_ID is not defined as environment variable"
    );
}

#[test]
fn open_without_che_api_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();

    let output = che(
        dir.path(),
        &["open", "notes.txt"],
        &[("CHE_WORKSPACE_ID", "workspace42"), ("CHE_MACHINE_TOKEN", "t")],
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output).trim(),
        "error: CHE_API is not defined as environment variable"
    );
}

#[test]
fn unreachable_che_api_is_network_error_without_token() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();

    // Bind then drop to get a port with nothing listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let api = format!("http://127.0.0.1:{port}/api");
    let output = che(
        dir.path(),
        &["open", "notes.txt"],
        &[
            ("CHE_WORKSPACE_ID", "workspace42"),
            ("CHE_API", api.as_str()),
            ("CHE_MACHINE_TOKEN", "TOPSECRET123"),
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: Unable to get workspace details:"));
    assert!(!stderr(&output).contains("TOPSECRET123"));
}
