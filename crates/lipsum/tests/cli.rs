//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use std::collections::HashMap;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Runs from an empty temp dir so no stray project config is discovered.
#[allow(deprecated)]
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("LIPSUM_SEED");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success();
    String::from_utf8(output.get_output().stdout.clone()).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn version_only_prints_bare_version() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn info_json_outputs_valid_json() {
    let tmp = TempDir::new().unwrap();
    let stdout = stdout_of(cmd(&tmp).args(["info", "--json"]));
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["paragraphs"], "5");
}

// =============================================================================
// Generate
// =============================================================================

#[test]
fn generate_defaults_to_five_paragraphs_with_lead_in() {
    let tmp = TempDir::new().unwrap();
    let stdout = stdout_of(cmd(&tmp).args(["generate", "--seed", "1"]));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Lorem ipsum dolor amet "));
    assert!(lines.iter().all(|l| l.ends_with('.')));
}

#[test]
fn generate_with_fixed_counts() {
    let tmp = TempDir::new().unwrap();
    let stdout = stdout_of(cmd(&tmp).args([
        "generate",
        "--paragraphs",
        "3",
        "--sentences",
        "2",
        "--words",
        "5",
        "--start",
        "",
        "--seed",
        "9",
    ]));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.matches('.').count(), 2, "{line}");
        assert_eq!(line.split_whitespace().count(), 10, "{line}");
        assert!(line.chars().next().unwrap().is_uppercase());
    }
}

#[test]
fn generate_include_newline_separates_paragraphs() {
    let tmp = TempDir::new().unwrap();
    let stdout = stdout_of(cmd(&tmp).args([
        "generate",
        "--paragraphs",
        "2",
        "--include_newline",
        "--seed",
        "3",
    ]));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].is_empty() && lines[3].is_empty());
    assert!(stdout.ends_with(".\n\n"));
}

#[test]
fn generate_same_seed_is_reproducible() {
    let tmp = TempDir::new().unwrap();
    let args = ["generate", "--paragraphs", "2:4", "--seed", "1234"];
    let first = stdout_of(cmd(&tmp).args(args));
    let second = stdout_of(cmd(&tmp).args(args));
    assert_eq!(first, second);
}

#[test]
fn generate_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("lorem.txt");
    cmd(&tmp)
        .args(["generate", "--paragraphs", "4", "--seed", "5", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 4);
}

#[test]
fn generate_json_lists_paragraphs() {
    let tmp = TempDir::new().unwrap();
    let stdout = stdout_of(cmd(&tmp).args(["--json", "generate", "--paragraphs", "2"]));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["paragraphs"].as_array().unwrap().len(), 2);
}

#[test]
fn generate_rejects_malformed_bounds() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["generate", "--words", "four"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bounds"));
}

#[test]
fn generate_rejects_inverted_range() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["generate", "--sentences", "7:2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end must be >= start"));
}

#[test]
fn generate_rejects_zero_paragraphs() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["generate", "--paragraphs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("paragraphs must be at least 1"));
}

#[test]
fn generate_fails_on_unwritable_output() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("missing").join("out.txt");
    cmd(&tmp)
        .args(["generate", "--output"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to create"));
}

// =============================================================================
// Scan
// =============================================================================

fn write_input(tmp: &TempDir, text: &str) -> std::path::PathBuf {
    let path = tmp.path().join("input.txt");
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn scan_ranks_words_by_count() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "Hello, hello world.\n");
    cmd(&tmp)
        .arg("scan")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::diff("hello\nworld\n"));
}

#[test]
fn scan_top_and_reverse() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "a a b\n");
    cmd(&tmp)
        .arg("scan")
        .arg(&input)
        .args(["--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("a\n"));
    cmd(&tmp)
        .arg("scan")
        .arg(&input)
        .arg("--reverse")
        .assert()
        .success()
        .stdout(predicate::str::diff("b\na\n"));
}

#[test]
fn scan_include_count_prints_summary() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "a a b\n");
    cmd(&tmp)
        .arg("scan")
        .arg(&input)
        .arg("--include_count")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "a (2)\nb (1)\n\n3 total words read\n2 unique words read\n",
        ));
}

#[test]
fn scan_custom_separator() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "a a b\n");
    cmd(&tmp)
        .arg("scan")
        .arg(&input)
        .args(["--include_count", "--sep", ":"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("a:2\nb:1\n"));
}

#[test]
fn scan_reads_stdin() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["scan", "-"])
        .write_stdin("one two two\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("two\none\n"));
    cmd(&tmp)
        .arg("scan")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::diff("x\n"));
}

#[test]
fn scan_json_report() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "a a b\n");
    let stdout = stdout_of(cmd(&tmp).arg("--json").arg("scan").arg(&input));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["unique"], 2);
    assert_eq!(json["words"][0]["word"], "a");
    assert_eq!(json["words"][0]["count"], 2);
}

#[test]
fn scan_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["scan", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn scan_respects_input_limit() {
    let tmp = TempDir::new().unwrap();
    let input = write_input(&tmp, "lorem ipsum dolor sit amet\n");
    std::fs::write(tmp.path().join("lipsum.toml"), "max_input_bytes = 4\n").unwrap();
    cmd(&tmp)
        .arg("scan")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Generate → Scan round trip
// =============================================================================

#[test]
fn scanning_generated_text_recovers_its_words() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("generated.txt");
    cmd(&tmp)
        .args([
            "generate",
            "--start",
            "",
            "--paragraphs",
            "3",
            "--seed",
            "77",
            "--output",
        ])
        .arg(&out)
        .assert()
        .success();

    let generated = std::fs::read_to_string(&out).unwrap();
    let mut expected: HashMap<String, usize> = HashMap::new();
    let mut total = 0;
    for sentence in generated.split(". ").flat_map(|s| s.split(".\n")) {
        for word in sentence.split_whitespace() {
            let word = word.trim_end_matches(['.', ',', ';']).to_lowercase();
            if !word.is_empty() {
                *expected.entry(word).or_insert(0) += 1;
                total += 1;
            }
        }
    }

    let stdout = stdout_of(cmd(&tmp).arg("--json").arg("scan").arg(&out));
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["total"], total);
    assert_eq!(json["unique"], expected.len());
    for entry in json["words"].as_array().unwrap() {
        let word = entry["word"].as_str().unwrap();
        assert_eq!(entry["count"], expected[word], "{word}");
        assert_eq!(word, word.to_lowercase());
    }
}
