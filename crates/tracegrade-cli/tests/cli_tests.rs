//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracegrade() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("tracegrade").unwrap()
}

#[test]
fn validate_basics_batch() {
    tracegrade()
        .arg("validate")
        .arg("--attempts")
        .arg("../../attempt-sets/basics.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basics (7 attempts)"))
        .stdout(predicate::str::contains("All attempt batches valid"));
}

#[test]
fn validate_directory() {
    tracegrade()
        .arg("validate")
        .arg("--attempts")
        .arg("../../attempt-sets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basics"))
        .stdout(predicate::str::contains("Spoken Words (3 attempts)"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"
[batch]
id = "broken"
name = "Broken"

[[attempts]]
id = "dot"
kind = "trace"
reference = []
student = [[1, 1]]
"#,
    )
    .unwrap();

    tracegrade()
        .arg("validate")
        .arg("--attempts")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[dot] WARNING: reference stroke is empty"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    tracegrade()
        .arg("validate")
        .arg("--attempts")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn grade_table_output() {
    tracegrade()
        .arg("grade")
        .arg("--attempts")
        .arg("../../attempt-sets/basics.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("letter-l"))
        .stdout(predicate::str::contains("Keep practicing!"))
        .stdout(predicate::str::contains("Points: 4  Accepted: 4/7"));
}

#[test]
fn grade_json_output() {
    let output = tracegrade()
        .arg("grade")
        .arg("--attempts")
        .arg("../../attempt-sets/basics.toml")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["batch"]["id"], "basics");
    assert_eq!(report["summary"]["points"], 4);

    let outcomes = report["outcomes"].as_array().unwrap();
    let find = |id: &str| {
        outcomes
            .iter()
            .find(|o| o["attempt_id"] == id)
            .unwrap_or_else(|| panic!("missing outcome {id}"))
    };
    assert_eq!(find("diagonal")["passed"], true);
    assert!(find("diagonal")["similarity"].as_u64().unwrap() >= 90);
    assert_eq!(find("line-backwards")["passed"], false);
    assert_eq!(find("word-cat")["passed"], true);
    assert_eq!(find("word-dog")["passed"], false);
    assert_eq!(find("tiles-sunset")["passed"], true);
    assert_eq!(find("tiles-swapped")["passed"], false);
}

#[test]
fn grade_markdown_output() {
    tracegrade()
        .arg("grade")
        .arg("--attempts")
        .arg("../../attempt-sets/words.json")
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Spoken Words"))
        .stdout(predicate::str::contains("| rainbow | word | Correct! | 1 |"))
        .stdout(predicate::str::contains("| frog | word | Try again! | 0 |"));
}

#[test]
fn grade_saves_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    tracegrade()
        .arg("grade")
        .arg("--attempts")
        .arg("../../attempt-sets/words.json")
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["summary"]["points"], 2);
}

#[test]
fn grade_fail_below_threshold() {
    tracegrade()
        .arg("grade")
        .arg("--attempts")
        .arg("../../attempt-sets/basics.toml")
        .arg("--fail-below")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("below 5"));

    tracegrade()
        .arg("grade")
        .arg("--attempts")
        .arg("../../attempt-sets/basics.toml")
        .arg("--fail-below")
        .arg("4")
        .assert()
        .success();
}

#[test]
fn grade_rejects_unknown_format() {
    tracegrade()
        .arg("grade")
        .arg("--attempts")
        .arg("../../attempt-sets/basics.toml")
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn grade_with_lenient_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("lenient.toml");
    std::fs::write(&config, "[curve]\nallow_reversed = true\n").unwrap();

    let output = tracegrade()
        .arg("grade")
        .arg("--attempts")
        .arg("../../attempt-sets/basics.toml")
        .arg("--format")
        .arg("json")
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["summary"]["points"], 5);
}

#[test]
fn trace_identical_strokes() {
    tracegrade()
        .arg("trace")
        .arg("--reference")
        .arg("0,0 0,100 60,100")
        .arg("--student")
        .arg("0,0 0,100 60,100")
        .assert()
        .success()
        .stdout(predicate::str::contains("Similarity: 100/100"))
        .stdout(predicate::str::contains("Perfect!"))
        .stdout(predicate::str::contains("Point awarded: yes"));
}

#[test]
fn trace_negative_coordinates() {
    tracegrade()
        .arg("trace")
        .arg("--reference")
        .arg("-10,-10 10,10")
        .arg("--student")
        .arg("-20,-20 20,20")
        .assert()
        .success()
        .stdout(predicate::str::contains("Similarity: 100/100"));
}

#[test]
fn trace_rejects_bad_points() {
    tracegrade()
        .arg("trace")
        .arg("--reference")
        .arg("0,0 banana")
        .arg("--student")
        .arg("0,0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --reference"));
}

#[test]
fn word_match() {
    tracegrade()
        .arg("word")
        .arg("--spoken")
        .arg("Sun Set")
        .arg("--target")
        .arg("sun-set")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit distance: 0"))
        .stdout(predicate::str::contains("Match: yes"));

    tracegrade()
        .arg("word")
        .arg("--spoken")
        .arg("dog")
        .arg("--target")
        .arg("cat")
        .assert()
        .success()
        .stdout(predicate::str::contains("Match: no"));
}

#[test]
fn syllables_order_matters() {
    tracegrade()
        .arg("syllables")
        .arg("--selected")
        .arg("sun,set")
        .arg("--expected")
        .arg("sun,set")
        .arg("--target")
        .arg("sunset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Match: yes"));

    tracegrade()
        .arg("syllables")
        .arg("--selected")
        .arg("set,sun")
        .arg("--expected")
        .arg("sun,set")
        .arg("--target")
        .arg("sunset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Match: no"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    tracegrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created tracegrade.toml"))
        .stdout(predicate::str::contains("Created attempt-sets/example.toml"));

    assert!(dir.path().join("tracegrade.toml").exists());
    assert!(dir.path().join("attempt-sets/example.toml").exists());

    // The generated files are usable as-is.
    tracegrade()
        .current_dir(dir.path())
        .arg("grade")
        .arg("--attempts")
        .arg("attempt-sets/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Points: 3  Accepted: 3/3"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    tracegrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    tracegrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
