//! CLI integration tests for sid
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn sid() -> Command {
    Command::cargo_bin("sid").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    sid()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("non-sequential ids"));
}

#[test]
fn test_version() {
    sid()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sid"));
}

#[test]
fn test_list() {
    sid()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("canonical"))
        .stdout(predicate::str::contains("base-53"));
}

// ============================================================================
// Encode / Decode
// ============================================================================

#[test]
fn test_encode_reference() {
    sid()
        .args(["encode", "12"])
        .assert()
        .success()
        .stdout("yNvD\n");
}

#[test]
fn test_decode_reference() {
    sid()
        .args(["decode", "yNvD"])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn test_encode_many_from_stdin() {
    sid()
        .arg("encode")
        .write_stdin("1 2\n3\n")
        .assert()
        .success()
        .stdout("eRASX\nH2Yn\neQumP\n");
}

#[test]
fn test_decode_many_from_stdin() {
    sid()
        .arg("decode")
        .write_stdin("eRASX H2Yn eQumP 000J")
        .assert()
        .success()
        .stdout("1\n2\n3\n0\n");
}

#[test]
fn test_encode_negative() {
    sid()
        .args(["encode", "-1"])
        .assert()
        .success()
        .stdout("eEaSNLK3fJ4h\n");
}

#[test]
fn test_canonical_profile() {
    sid()
        .args(["--profile", "canonical", "encode", "12"])
        .assert()
        .success()
        .stdout("jy7yj\n");
}

#[test]
fn test_overrides() {
    sid()
        .args(["-b", "0", "-n", "6", "--pad", "_", "encode", "53"])
        .assert()
        .success()
        .stdout("____eJ\n");
}

#[test]
fn test_shuffle_unshuffle() {
    sid()
        .args(["shuffle", "12"])
        .assert()
        .success()
        .stdout("3145728\n");
    sid()
        .args(["unshuffle", "3145728"])
        .assert()
        .success()
        .stdout("12\n");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_decode_invalid_character() {
    sid()
        .args(["decode", "yNv!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid character '!' at position 3"));
}

#[test]
fn test_encode_rejects_non_integer() {
    sid().args(["encode", "twelve"]).assert().failure();
}

#[test]
fn test_unknown_profile() {
    sid()
        .args(["--profile", "nope", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("codec profile 'nope' not found"));
}

#[test]
fn test_bit_width_out_of_range() {
    sid()
        .args(["-b", "64", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bit width 64"));
}

#[test]
fn test_pad_colliding_with_alphabet() {
    sid()
        .args(["--pad", "e", "encode", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid alphabet: contains pad character 'e' as digit 1"));
}
