//! CLI argument tests for the linkstats command.
//!
//! These tests exercise argument handling and name resolution only, so
//! they need neither network access nor root privileges.

use assert_cmd::Command;
use predicates::prelude::*;

fn linkstats_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_linkstats"))
}

mod arguments {
    use super::*;

    #[test]
    fn test_help() {
        linkstats_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Show link statistics"))
            .stdout(predicate::str::contains("--timeout"));
    }

    #[test]
    fn test_version() {
        linkstats_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("linkstats"));
    }

    #[test]
    fn test_missing_interface() {
        linkstats_cmd()
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_too_many_arguments() {
        linkstats_cmd()
            .args(["eth0", "eth1"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_invalid_timeout() {
        linkstats_cmd()
            .args(["--timeout", "soon", "lo"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("error"));
    }
}

mod interface {
    use super::*;

    #[test]
    fn test_unknown_interface() {
        linkstats_cmd()
            .arg("nosuchif0")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Error: Invalid interface name: nosuchif0",
            ));
    }

    #[test]
    fn test_malformed_interface_name() {
        linkstats_cmd()
            .arg("eth 0")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid interface name"));
    }

    #[test]
    fn test_index_zero() {
        linkstats_cmd()
            .arg("0")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid interface name: 0"));
    }
}
