//! End-to-end CLI tests for chatclean.
//!
//! These tests run the actual binary and check its output files and
//! console report.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with test exports.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let telegram = r#"{
  "name": "Test Chat",
  "type": "personal_chat",
  "id": 42,
  "messages": [
    {"id": 3, "type": "message", "date": "2024-01-15T10:32:00", "from": "Alice", "from_id": "user1",
     "text": "How are you?", "reply_to_message_id": 2},
    {"id": 1, "type": "message", "date": "2024-01-15T10:30:00", "from": "Alice", "from_id": "user1",
     "text": ["Hello ", {"type": "mention", "text": "@bob"}],
     "reactions": [
       {"type": "emoji", "count": 1, "emoji": "👋", "recent": [{"from": "Bob", "from_id": "user2", "date": "2024-01-15T10:30:30"}]},
       {"type": "emoji", "count": 7, "emoji": "🔥"}
     ]},
    {"id": 2, "type": "message", "date": "2024-01-15T10:31:00", "from": "Bob", "from_id": "user2", "text": "Hi Alice!"},
    {"id": 4, "type": "service", "date": "2024-01-15T10:33:00", "actor": "Bob", "action": "pin_message", "text": ""}
  ]
}"#;
    fs::write(dir.path().join("result.json"), telegram).unwrap();

    let empty = r#"{"name": "Empty", "type": "personal_chat", "messages": []}"#;
    fs::write(dir.path().join("empty.json"), empty).unwrap();

    fs::write(dir.path().join("broken.json"), r#"{"name": "Broken", "messages": ["#).unwrap();
    fs::write(dir.path().join("array.json"), "[1, 2, 3]").unwrap();

    dir
}

fn chatclean_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatclean"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn read_json(path: &PathBuf) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_clean_with_explicit_output() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("result.json");
        let output = output_path(&fixtures, "clean.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("Messages:     3"));

        let json = read_json(&output);
        assert_eq!(json["name"], "Test Chat");
        assert_eq!(json["type"], "personal_chat");
        assert_eq!(json["messages"].as_array().unwrap().len(), 3);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_default_output_path() {
        let fixtures = setup_fixtures();

        chatclean_cmd()
            .current_dir(fixtures.path())
            .arg("result.json")
            .assert()
            .success()
            .stdout(predicate::str::contains("clean_chat.json"));

        assert!(fixtures.path().join("clean_chat.json").exists());
    }

    #[test]
    fn test_output_is_sorted_and_cleaned() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("result.json");
        let output = output_path(&fixtures, "clean.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .success();

        let json = read_json(&output);
        assert_eq!(
            json["messages"][0],
            json!({
                "id": 1,
                "date": "2024-01-15T10:30:00",
                "from": "Alice",
                "text": "Hello \n@bob",
                "reactions": [
                    {"emoji": "👋", "users": [{"name": "Bob", "id": "user2", "date": "2024-01-15T10:30:30"}]},
                    {"emoji": "🔥", "users": [], "count": 7}
                ]
            })
        );
        assert_eq!(json["messages"][1]["id"], 2);
        assert_eq!(json["messages"][2]["reply_to_message_id"], 2);
        assert!(json["messages"][1].get("reply_to_message_id").is_none());
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_pretty_by_default() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("result.json");
        let output = output_path(&fixtures, "pretty.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("{\n  \"name\": \"Test Chat\""));
    }

    #[test]
    fn test_compact_flag() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("result.json");
        let output = output_path(&fixtures, "compact.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap(), "--compact"])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(!content.contains('\n'));
        assert_eq!(read_json(&output)["messages"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_unicode_preserved() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("unicode.json");
        fs::write(
            &input,
            r#"{"name": "Чат", "type": "personal_chat", "messages": [
                {"id": 1, "type": "message", "date": "2024-01-15T10:30:00", "from": "Алиса", "text": "Привет! 🎉"}
            ]}"#,
        )
        .unwrap();
        let output = output_path(&fixtures, "unicode_out.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Привет! 🎉"));
        assert!(content.contains("\"Чат\""));
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("result.json");
        let output = output_path(&fixtures, "clean.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Participants: 2"))
            .stdout(predicate::str::contains("Replies:      1"))
            .stdout(predicate::str::contains("Reactions:    2 (1 with user info)"));
    }

    #[test]
    fn test_reaction_sample() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("result.json");
        let output = output_path(&fixtures, "clean.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Sample reactions:"))
            .stdout(predicate::str::contains("  👋: Bob"))
            .stdout(predicate::str::contains("  🔥: "));
    }

    #[test]
    fn test_no_sample_without_reactions() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("empty.json");
        let output = output_path(&fixtures, "clean.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:     0"))
            .stdout(predicate::str::contains("Sample reactions").not());

        assert_eq!(
            read_json(&output),
            json!({"name": "Empty", "type": "personal_chat", "messages": []})
        );
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("result.json");
        let output = output_path(&fixtures, "clean.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap(), "--verbose"])
            .assert()
            .success()
            .stderr(predicate::str::contains("filtered export entries"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_input_file() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "clean.json");

        chatclean_cmd()
            .args(["does_not_exist.json", output.to_str().unwrap()])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Input file not found"));

        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_json() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("broken.json");
        let output = output_path(&fixtures, "clean.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Malformed chat export"))
            .stderr(predicate::str::contains("broken.json"));
    }

    #[test]
    fn test_non_object_root() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("array.json");
        let output = output_path(&fixtures, "clean.json");

        chatclean_cmd()
            .args([input.to_str().unwrap(), output.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected a JSON object"));
    }

    #[test]
    fn test_no_arguments() {
        chatclean_cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_help() {
        chatclean_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("EXAMPLES"));
    }
}
