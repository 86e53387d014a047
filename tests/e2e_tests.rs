//! End-to-end tests for the bump-bedrock CLI
//!
//! These tests verify:
//! - getversion prints the latest tag from the endpoint
//! - bump rewrites composer.json and CHANGELOG.md, or reports nothing to update
//! - Dry-run mode leaves files unchanged
//! - Exit codes are correct for usage, filesystem and network failures
//!
//! Every run points `--endpoint` at a one-shot local HTTP server, so no test
//! reaches the network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;
use tempfile::TempDir;

const COMPOSER_JSON: &str = r#"{
  "name": "roots/bedrock",
  "type": "project",
  "require": {
    "php": ">=5.4",
    "composer/installers": "~1.0.12",
    "johnpbloch/wordpress": "4.2.1"
  },
  "extra": {
    "wordpress-install-dir": "web/wp"
  }
}
"#;

const CHANGELOG: &str = "### 1.3.7: 2015-04-27
* Update to WordPress 4.2.1

### 1.3.6: 2015-04-23
* Update to WordPress 4.2
";

const TAGS: &str = r#"[
  {"name": "4.2.2", "commit": {"sha": "0a4b1b5e", "url": ""}},
  {"name": "4.2.1", "commit": {"sha": "c1cefa55", "url": ""}}
]"#;

/// Answer a single request with `body` and return the endpoint URL
fn serve_once(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap_or(0) > 0 {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes());
    });

    format!("http://{}/repos/johnpbloch/wordpress/tags", addr)
}

/// An endpoint nothing is listening on
fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/tags", addr)
}

fn create_test_project(composer: &str, changelog: &str) -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("composer.json"), composer).unwrap();
    fs::write(temp_dir.path().join("CHANGELOG.md"), changelog).unwrap();
    temp_dir
}

fn bump_bedrock() -> Command {
    let mut cmd = Command::cargo_bin("bump-bedrock").expect("binary should be built");
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .env("NO_COLOR", "1");
    cmd
}

mod getversion {
    use super::*;

    #[test]
    fn test_prints_latest_tag() {
        bump_bedrock()
            .args(["getversion", "--endpoint", &serve_once(TAGS)])
            .assert()
            .success()
            .stdout("4.2.2\n");
    }

    #[test]
    fn test_short_alias() {
        bump_bedrock()
            .args(["getv", "--endpoint", &serve_once(TAGS)])
            .assert()
            .success()
            .stdout("4.2.2\n");
    }

    #[test]
    fn test_json_output() {
        let output = bump_bedrock()
            .args(["getv", "--json", "--endpoint", &serve_once(TAGS)])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["name"], "4.2.2");
        assert_eq!(json["commit"]["sha"], "0a4b1b5e");
    }

    #[test]
    fn test_empty_tag_list_fails() {
        bump_bedrock()
            .args(["getv", "--endpoint", &serve_once("[]")])
            .assert()
            .failure()
            .stderr(predicate::str::starts_with("Error:"));
    }

    #[test]
    fn test_network_failure() {
        bump_bedrock()
            .args(["getv", "--timeout", "5", "--endpoint", &unreachable_endpoint()])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::starts_with("Error:"));
    }
}

mod bump {
    use super::*;

    #[test]
    fn test_updates_both_files() {
        let dir = create_test_project(COMPOSER_JSON, CHANGELOG);

        bump_bedrock()
            .arg("bump")
            .arg(dir.path())
            .args(["--endpoint", &serve_once(TAGS)])
            .assert()
            .success()
            .stdout("updated successfully\n");

        let composer = fs::read_to_string(dir.path().join("composer.json")).unwrap();
        assert_eq!(composer, COMPOSER_JSON.replace("\"4.2.1\"", "\"4.2.2\""));

        let changelog = fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap();
        let lines: Vec<&str> = changelog.split('\n').collect();
        assert!(lines[0].starts_with("### 1.3.8: "));
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "* Update to WordPress 4.2.2");
        assert_eq!(lines[3], "");
        assert!(changelog.ends_with(CHANGELOG));
    }

    #[test]
    fn test_nothing_to_update() {
        let composer = COMPOSER_JSON.replace("\"4.2.1\"", "\"100.2.1\"");
        let dir = create_test_project(&composer, CHANGELOG);

        bump_bedrock()
            .arg("bump")
            .arg(dir.path())
            .args(["--endpoint", &serve_once(TAGS)])
            .assert()
            .success()
            .stdout("nothing to update\n");

        assert_eq!(
            fs::read_to_string(dir.path().join("composer.json")).unwrap(),
            composer
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
            CHANGELOG
        );
    }

    #[test]
    fn test_dry_run_leaves_files_unchanged() {
        let dir = create_test_project(COMPOSER_JSON, CHANGELOG);

        bump_bedrock()
            .arg("bump")
            .arg(dir.path())
            .args(["--dry-run", "--endpoint", &serve_once(TAGS)])
            .assert()
            .success()
            .stdout(predicate::str::contains("would update"));

        assert_eq!(
            fs::read_to_string(dir.path().join("composer.json")).unwrap(),
            COMPOSER_JSON
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
            CHANGELOG
        );
    }

    #[test]
    fn test_json_output_schema() {
        let dir = create_test_project(COMPOSER_JSON, CHANGELOG);

        let output = bump_bedrock()
            .arg("bump")
            .arg(dir.path())
            .args(["-n", "--json", "--endpoint", &serve_once(TAGS)])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["message"], "updated successfully");
        assert_eq!(json["result"]["status"], "updated");
        assert_eq!(json["result"]["previous"], "4.2.1");
        assert_eq!(json["result"]["wordpress"], "4.2.2");
        assert_eq!(json["result"]["release"], "1.3.8");
    }

    #[test]
    fn test_verbose_details() {
        let dir = create_test_project(COMPOSER_JSON, CHANGELOG);

        bump_bedrock()
            .arg("bump")
            .arg(dir.path())
            .args(["-n", "--verbose", "--endpoint", &serve_once(TAGS)])
            .assert()
            .success()
            .stdout(predicate::str::contains("4.2.1 -> 4.2.2"))
            .stderr(predicate::str::contains("Dependency: johnpbloch/wordpress"));
    }

    #[test]
    fn test_missing_path_prints_usage() {
        bump_bedrock()
            .arg("bump")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Usage: bump-bedrock bump <PATH>"));
    }

    #[test]
    fn test_nonexistent_path() {
        bump_bedrock()
            .args(["bump", "/nonexistent/path/that/does/not/exist"])
            .args(["--endpoint", &unreachable_endpoint()])
            .assert()
            .failure()
            .stderr(predicate::str::starts_with("Error:"));
    }

    #[test]
    fn test_changelog_without_header_writes_nothing() {
        let dir = create_test_project(COMPOSER_JSON, "# Changelog\n\nNothing yet.\n");

        bump_bedrock()
            .arg("bump")
            .arg(dir.path())
            .args(["--endpoint", &serve_once(TAGS)])
            .assert()
            .failure()
            .stderr(predicate::str::starts_with("Error:"));

        assert_eq!(
            fs::read_to_string(dir.path().join("composer.json")).unwrap(),
            COMPOSER_JSON
        );
    }

    #[test]
    fn test_network_failure_writes_nothing() {
        let dir = create_test_project(COMPOSER_JSON, CHANGELOG);

        bump_bedrock()
            .arg("bump")
            .arg(dir.path())
            .args(["--timeout", "5", "--endpoint", &unreachable_endpoint()])
            .assert()
            .failure()
            .stderr(predicate::str::starts_with("Error:"));

        assert_eq!(
            fs::read_to_string(dir.path().join("composer.json")).unwrap(),
            COMPOSER_JSON
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
            CHANGELOG
        );
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn test_help() {
        bump_bedrock()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("getversion"))
            .stdout(predicate::str::contains("bump"));
    }

    #[test]
    fn test_version() {
        bump_bedrock()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_unknown_subcommand() {
        bump_bedrock().arg("frobnicate").assert().failure();
    }
}
