//! End-to-end tests for the `deck` binary
//!
//! Runs the built binary against the fixtures in `test_imports/` and checks
//! stdout and the exit status.

use similar_asserts::assert_eq;
use std::process::{Command, Output};

fn run_deck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deck"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(args)
        .args(["--verbosity", "silent"])
        .output()
        .expect("Failed to run deck binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("Invalid UTF-8 in stdout")
}

#[test]
fn test_export_canonical_text() {
    let output = run_deck(&["export", "test_imports/valid/interleaved_meta.txt"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "name: Late Name\npower: Rainbow\n4 dune courser\n2 mirage\n"
    );
}

#[test]
fn test_export_with_sideboard() {
    let output = run_deck(&["export", "test_imports/valid/with_sideboard.txt"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "name: Sideboarded\ncoverart: Cataphract\n4 dune courser\n4 mirage\n2 aimless vessel\n\n[sideboard]\n2 cataphract\n1 card name\n"
    );
}

#[test]
fn test_import_reports_errors() {
    let output = run_deck(&["import", "test_imports/invalid/bladiblah.txt"]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Import failed:\n  - Invalid input for main deck\n"
    );
}

#[test]
fn test_import_json() {
    let output = run_deck(&["import", "test_imports/valid/new_deck.txt", "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["deckName"], "New Deck");
    assert_eq!(json["deckPath"], "");
    assert_eq!(json["mainDeck"].as_object().unwrap().len(), 4);
}

#[test]
fn test_check_many_files() {
    let output = run_deck(&[
        "check",
        "test_imports/valid/full_meta.txt",
        "test_imports/invalid/empty.txt",
    ]);
    assert!(!output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ok     test_imports/valid/full_meta.txt (6 cards)"));
    assert!(lines[1].contains("Deck must have cards"));
}

#[test]
fn test_resolve_with_catalog() {
    let output = run_deck(&[
        "resolve",
        "test_imports/valid/new_deck.txt",
        "--catalog",
        "test_imports/catalog.json",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["name"], "New Deck");
    assert_eq!(json["cardIds"], serde_json::json!([101, 102, 103, 103, 104]));
}

#[test]
fn test_resolve_unknown_cards_fails() {
    let output = run_deck(&[
        "resolve",
        "test_imports/valid/interleaved_meta.txt",
        "--catalog",
        "test_imports/catalog.json",
        "--name",
        "Renamed",
    ]);
    assert!(output.status.success());

    let output = run_deck(&[
        "resolve",
        "test_imports/valid/full_meta.txt",
        "--catalog",
        "test_imports/catalog.json",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("other card name"));
}
