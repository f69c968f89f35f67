//! CLI integration tests for base-r
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn base_r() -> Command {
    Command::cargo_bin("base-r").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base_r()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-N codec variants"));
}

#[test]
fn test_version() {
    base_r()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-r"));
}

#[test]
fn test_list_variants() {
    base_r()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("z85"))
        .stdout(predicate::str::contains("base64"))
        .stdout(predicate::str::contains("base32-crockford"));
}

#[test]
fn test_unknown_codec_fails() {
    base_r()
        .args(["--codec", "base99"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ============================================================================
// Encode/Decode Round-trips
// ============================================================================

#[test]
fn test_encode_base64() {
    base_r()
        .args(["--codec", "base64"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=\n");
}

#[test]
fn test_decode_base64() {
    base_r()
        .args(["--codec", "base64", "--decode"])
        .write_stdin("aGVsbG8gd29ybGQ=")
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn test_encode_z85_default_codec() {
    base_r()
        .write_stdin(&b"\x86\x4F\xD2\x6F\xB5\x59\xF7\x5B"[..])
        .assert()
        .success()
        .stdout("HelloWorld\n");
}

#[test]
fn test_roundtrip_z85() {
    let encoded = base_r()
        .write_stdin("test data 123")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base_r()
        .arg("--decode")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("test data 123");
}

#[test]
fn test_roundtrip_crockford() {
    let encoded = base_r()
        .args(["--codec", "base32-crockford"])
        .write_stdin("crockford round trip")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base_r()
        .args(["--codec", "base32-crockford", "--decode"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("crockford round trip");
}

// ============================================================================
// Error reporting
// ============================================================================

#[test]
fn test_decode_invalid_input_fails() {
    base_r()
        .args(["--codec", "base64", "--decode"])
        .write_stdin("not*base64")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character"));
}

#[test]
fn test_decode_bad_padding_fails() {
    base_r()
        .args(["--codec", "base64", "--decode"])
        .write_stdin("=QQQ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("padding"));
}
