//! Black-box tests for the `xh` binary, run as an external process.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Locate the `xh` binary produced by Cargo for this test run.
fn xh_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_xh") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // test binary
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("xh");
    p
}

fn make_temp_input(contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.bin");
    fs::write(&input_path, contents).unwrap();
    (dir, input_path)
}

#[test]
fn compress_file_to_file() {
    let (dir, input) = make_temp_input(b"Hello, Xpress!\n".repeat(200).as_slice());
    let output = dir.path().join("output.xh");

    let status = Command::new(xh_bin())
        .args(["compress", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .status()
        .expect("failed to run xh compress");

    assert!(status.success(), "compress should exit 0");
    assert!(output.exists(), "output file should exist");
    let compressed = fs::read(&output).unwrap();
    assert!(!compressed.is_empty());
}

#[test]
fn compress_reads_stdin_and_writes_stdout_by_default() {
    let mut child = Command::new(xh_bin())
        .arg("compress")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn xh compress");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"data piped through stdin")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn bound_prints_a_number_at_least_as_large_as_the_input() {
    let output = Command::new(xh_bin())
        .args(["bound", "65536"])
        .output()
        .expect("failed to run xh bound");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let bound: usize = stdout.trim().parse().expect("bound output should be a plain integer");
    assert!(bound >= 65536);
}

#[test]
fn help_mentions_the_compress_subcommand() {
    let output = Command::new(xh_bin())
        .arg("--help")
        .output()
        .expect("failed to run xh --help");

    assert!(output.status.success());
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(combined.to_lowercase().contains("compress"));
}

#[test]
fn missing_input_file_reports_an_error_and_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.bin");

    let output = Command::new(xh_bin())
        .args(["compress", missing.to_str().unwrap()])
        .output()
        .expect("failed to run xh compress");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.to_lowercase().contains("error"));
}

#[test]
fn verbose_flag_emits_progress_to_stderr() {
    let (dir, input) = make_temp_input(b"verbose logging test payload");
    let output_path = dir.path().join("out.xh");

    let output = Command::new(xh_bin())
        .args([
            "-v",
            "compress",
            input.to_str().unwrap(),
            "-o",
            output_path.to_str().unwrap(),
        ])
        .output()
        .expect("failed to run xh compress -v");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("compressing") || stderr.contains("wrote"));
}
