//! Integration tests for external rule files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Test generating a rule file template
#[test]
fn test_generate_config_command() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("custom.toml");

    let mut cmd = Command::cargo_bin("clitica").unwrap();
    cmd.args([
        "generate-config",
        "--code",
        "custom",
        "--output",
        output_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Rule template generated successfully",
    ));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("code = \"custom\""));
    assert!(content.contains("[corpus]"));
    assert!(content.contains("[clitics]"));
    assert!(content.contains("[[gaps]]"));
}

/// A freshly generated template validates as-is
#[test]
fn test_generated_template_validates() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("custom.toml");

    Command::cargo_bin("clitica")
        .unwrap()
        .args(["generate-config", "-c", "custom", "-o"])
        .arg(&output_path)
        .assert()
        .success();

    Command::cargo_bin("clitica")
        .unwrap()
        .args(["validate", "--rules"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule file is valid"))
        .stdout(predicate::str::contains("Code: custom"));
}

/// Test validating an invalid rule file
#[test]
fn test_validate_invalid_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("invalid.toml");

    fs::write(
        &rules_path,
        r#"
[metadata]
code = "bad"
name = "Bad Rules"

[clitics]
forms = ["me", "lo"]

[[gaps]]
length = 1
sequences = ["a a"]
"#,
    )
    .unwrap();

    Command::cargo_bin("clitica")
        .unwrap()
        .args(["validate", "--rules"])
        .arg(&rules_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Rule file is invalid"));
}

/// Test validating a file that does not exist
#[test]
fn test_validate_missing_file() {
    Command::cargo_bin("clitica")
        .unwrap()
        .args(["validate", "--rules", "nonexistent_rules.toml"])
        .assert()
        .failure();
}

/// Custom prefix, delimiter and clitic forms drive the analysis
#[test]
fn test_analyze_with_external_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("tag_rules.toml");
    let corpus = temp_dir.path().join("corpus");
    fs::create_dir(&corpus).unwrap();

    fs::write(
        &rules_path,
        r#"
[metadata]
code = "es-tag"
name = "Slash-tagged Spanish"

[corpus]
line_prefix = "%tag:"
delimiter = "/"
extensions = ["pos"]

[clitics]
forms = ["lo", "la"]
combine = false

[[gaps]]
length = 1
sequences = ["a"]
"#,
    )
    .unwrap();

    fs::write(
        corpus.join("s1.pos"),
        "%tag:\tla/PRON voy/VERB a/ADP ver/VERB\n%pos:\tme.PRON voy.VERB a.ADP duchar.VERB\n",
    )
    .unwrap();
    // Not a corpus file under these rules
    fs::write(
        corpus.join("s2.cha"),
        "%tag:\tlo/PRON quiero/VERB hacer/VERB\n",
    )
    .unwrap();

    let output_file = temp_dir.path().join("report.csv");

    Command::cargo_bin("clitica")
        .unwrap()
        .arg("analyze")
        .arg(&corpus)
        .arg("--rules")
        .arg(&rules_path)
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 1 files in the directory."));

    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "ID,Sentence,Clitic,Clitic Position\r\ns1,la voy a ver,la,proclitic\r\n"
    );
}

/// Listing commands accept an external rule file
#[test]
fn test_list_with_external_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("rules.toml");

    fs::write(
        &rules_path,
        r#"
[metadata]
code = "min"
name = "Minimal"

[clitics]
forms = ["se"]
combine = false
"#,
    )
    .unwrap();

    Command::cargo_bin("clitica")
        .unwrap()
        .args(["list", "clitics", "--rules"])
        .arg(&rules_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Clitic forms (Minimal):"))
        .stdout(predicate::str::contains("Combined suffixes: 0"));

    Command::cargo_bin("clitica")
        .unwrap()
        .args(["list", "gaps", "-r"])
        .arg(&rules_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));
}

/// A broken rule file stops the analysis before any report is written
#[test]
fn test_analyze_with_broken_rules() {
    let temp_dir = TempDir::new().unwrap();
    let rules_path = temp_dir.path().join("broken.toml");
    fs::write(&rules_path, "[metadata\ncode = ").unwrap();

    Command::cargo_bin("clitica")
        .unwrap()
        .arg("analyze")
        .arg(temp_dir.path())
        .arg("--rules")
        .arg(&rules_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load rules"));

    assert!(!temp_dir.path().join("variable_clitic_results.csv").exists());
}
