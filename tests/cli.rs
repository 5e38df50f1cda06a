use assert_cmd::Command;
use predicates::prelude::*;

fn camelsplit() -> Command {
    Command::cargo_bin("camelsplit").unwrap()
}

#[test]
fn splits_positional_inputs() {
    camelsplit()
        .args(["PDFLoader", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PDFLoader: PDF Loader"));
}

#[test]
fn splits_stdin_when_no_inputs_given() {
    camelsplit()
        .arg("--no-color")
        .write_stdin("GL11Version 5May2000")
        .assert()
        .success()
        .stdout(predicate::str::contains("GL11Version: GL 11 Version"))
        .stdout(predicate::str::contains("5May2000: 5 May 2000"));
}

#[test]
fn respects_no_split_words() {
    camelsplit()
        .args([
            "1Tls2IsSecure",
            "--no-split",
            "Tls2",
            "--no-color",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Tls2 Is Secure"));
}

#[test]
fn honors_custom_delimiter() {
    camelsplit()
        .args(["MultipleWords", "--delimiter", "/", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple/Words"));
}

#[test]
fn emits_json_output() {
    camelsplit()
        .args(["10Validators", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"inputs_split\": 1"))
        .stdout(predicate::str::contains("\"10\""))
        .stdout(predicate::str::contains("\"Validators\""));
}

#[test]
fn fails_without_inputs() {
    camelsplit()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No inputs given"));
}

#[test]
fn rejects_unknown_format() {
    camelsplit()
        .args(["Word", "-o", "yaml"])
        .assert()
        .failure();
}
