// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `codecbench` binary as a black-box CLI tool using std::process::Command.
// Covers argument errors, codec selection, file naming, report output, and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `codecbench` binary produced by Cargo.
fn codecbench_bin() -> PathBuf {
    // CARGO_BIN_EXE_codecbench is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_codecbench") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("codecbench");
    p
}

/// Create a TempDir containing a text file with ~4 KB of content.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let content = "Hello, codecbench!\n".repeat(215); // ~4 KB
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(codecbench_bin())
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run codecbench")
}

fn assert_report(stdout: &str) {
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "expected three report lines, got: {stdout}");
    assert!(lines[0].starts_with("Mean compression ratio: ") && lines[0].ends_with('%'));
    assert!(lines[1].starts_with("Mean compression time: ") && lines[1].ends_with(" ms"));
    assert!(lines[2].starts_with("Mean decompression time: ") && lines[2].ends_with(" ms"));
}

// ── 1. Argument errors ────────────────────────────────────────────────────────

#[test]
fn test_cli_no_arguments_exits_1_with_usage() {
    let dir = TempDir::new().unwrap();
    let out = run(&[], dir.path());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stderr.contains("Too few arguments"), "stderr: {stderr}");
    assert!(stdout.contains("Usage:"), "stdout: {stdout}");
}

#[test]
fn test_cli_unknown_option_exits_1() {
    let (dir, input) = make_temp_input();
    let out = run(&["--lzma", input.to_str().unwrap()], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("bad usage"));
}

#[test]
fn test_cli_missing_input_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = run(&["does-not-exist.bin"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot open"));
}

#[test]
fn test_cli_empty_input_exits_1() {
    let dir = TempDir::new().unwrap();
    let empty = dir.path().join("empty.bin");
    fs::write(&empty, b"").unwrap();
    let out = run(&[empty.to_str().unwrap()], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("no data to bench"));
}

// ── 2. --help / --version ─────────────────────────────────────────────────────

#[test]
fn test_cli_help_exits_0() {
    let dir = TempDir::new().unwrap();
    let out = run(&["--help"], dir.path());
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("source_path"));
}

#[test]
fn test_cli_version_exits_0() {
    let dir = TempDir::new().unwrap();
    let out = run(&["--version"], dir.path());
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

// ── 3. Benchmark runs ─────────────────────────────────────────────────────────

#[test]
fn test_cli_default_codec_is_zlib() {
    let (dir, input) = make_temp_input();
    let out = run(&[input.to_str().unwrap()], dir.path());
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_report(&String::from_utf8_lossy(&out.stdout));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Iterations set to 1"));
    assert!(stderr.contains("Compression level set to high."));
    assert!(stderr.contains("Library set to zlib"));

    let archive = dir.path().join("input.txt.zlib");
    let decoded = dir.path().join("input.txt.zlib_dec");
    assert!(archive.exists());
    assert_eq!(fs::read(&decoded).unwrap(), fs::read(&input).unwrap());
}

#[test]
fn test_cli_every_codec_writes_named_files() {
    for (flag, ext) in [("--zlib", "zlib"), ("--bzip2", "bz2"), ("--snappy", "snappy"), ("--lz4", "lz4")] {
        let (dir, input) = make_temp_input();
        let out = run(&["-l", "-t", "2", flag, input.to_str().unwrap()], dir.path());
        assert!(out.status.success(), "{flag}: {}", String::from_utf8_lossy(&out.stderr));
        assert_report(&String::from_utf8_lossy(&out.stdout));

        let decoded = dir.path().join(format!("input.txt.{ext}_dec"));
        assert!(dir.path().join(format!("input.txt.{ext}")).exists(), "{flag}: archive missing");
        assert_eq!(fs::read(&decoded).unwrap(), fs::read(&input).unwrap(), "{flag}: decoded differs");
    }
}

#[test]
fn test_cli_lzo_flag_runs_lz4_and_says_so() {
    let (dir, input) = make_temp_input();
    let out = run(&["--lzo", input.to_str().unwrap()], dir.path());
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("lzo is not available; using lz4 instead"), "stderr: {stderr}");
    assert!(stderr.contains("Library set to lz4"));
    assert!(dir.path().join("input.txt.lz4").exists());
    assert_report(&String::from_utf8_lossy(&out.stdout));
}

#[test]
fn test_cli_quiet_suppresses_configuration() {
    let (dir, input) = make_temp_input();
    let out = run(&["-q", input.to_str().unwrap()], dir.path());
    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stderr).contains("Iterations set to"));
    assert_report(&String::from_utf8_lossy(&out.stdout));
}

#[test]
fn test_cli_verbose_logs_iterations() {
    let (dir, input) = make_temp_input();
    let out = run(&["-vv", "-t3", input.to_str().unwrap()], dir.path());
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("compress   #").count(), 3, "stderr: {stderr}");
    assert_eq!(stderr.matches("decompress #").count(), 3, "stderr: {stderr}");
}
