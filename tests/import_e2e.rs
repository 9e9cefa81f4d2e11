//! End-to-end import tests over deck text fixtures
//!
//! Tests are generated for each `.txt` file under `test_imports/valid/` and
//! `test_imports/invalid/` using the `dir-test` procedural macro. Add a file
//! to either directory to add a test.

use dir_test::{dir_test, Fixture};
use mythgard_deck_rs::{
    core::{ImportError, MetaKey},
    loader::{convert_import_to_deck, export_deck_file, ImportLoader},
};
use similar_asserts::assert_eq;

/// Every valid fixture imports cleanly and survives export/re-import unchanged
#[dir_test(
    dir: "$CARGO_MANIFEST_DIR/test_imports/valid",
    glob: "*.txt",
)]
fn test_valid_import_round_trip(fixture: Fixture<&str>) {
    let deck = ImportLoader::parse(fixture.content());
    assert!(
        deck.is_valid(),
        "{} failed to import: {:?}",
        fixture.path(),
        deck.errors
    );
    assert!(deck.total_cards() + deck.sideboard_size() > 0);

    let exported = export_deck_file(&deck);
    let reparsed = ImportLoader::parse(&exported);
    assert_eq!(deck, reparsed, "round trip changed {}", fixture.path());

    // Exported text is canonical, so exporting again changes nothing
    assert_eq!(export_deck_file(&reparsed), exported);
}

/// Every invalid fixture yields errors and nothing else
#[dir_test(
    dir: "$CARGO_MANIFEST_DIR/test_imports/invalid",
    glob: "*.txt",
)]
fn test_invalid_import_is_error_only(fixture: Fixture<&str>) {
    let deck = ImportLoader::parse(fixture.content());
    assert!(!deck.is_valid(), "{} imported without errors", fixture.path());
    for key in MetaKey::ALL {
        assert_eq!(deck.meta(key), "");
    }
    assert!(deck.main_deck.is_empty());
    assert!(deck.sideboard.is_empty());
    assert_eq!(deck.as_text, "");
    assert_eq!(deck.sideboard_as_text, "");
}

#[test]
fn test_full_meta_import() {
    let input = [
        "name: my deck",
        "path: my path",
        "power: my power",
        "coverart: ",
        "1 card name",
    ]
    .join("\n");

    let deck = convert_import_to_deck(Some(input.as_str()), Some(""));

    assert!(deck.errors.is_empty());
    assert_eq!(deck.deck_name, "my deck");
    assert_eq!(deck.deck_path, "my path");
    assert_eq!(deck.deck_power, "my power");
    assert_eq!(deck.deck_cover_art, "");
    assert_eq!(deck.main_deck.len(), 1);
    assert_eq!(
        deck.as_text,
        "name: my deck\npath: my path\npower: my power\n1 card name"
    );
}

#[test]
fn test_invalid_main_reports_single_error() {
    let deck = convert_import_to_deck(Some("1 card name\n2 other card name\nbladiblah"), Some(""));

    assert_eq!(deck.error_messages(), vec!["Invalid input for main deck".to_string()]);
    assert_eq!(deck.errors.to_vec(), vec![ImportError::InvalidMainDeck]);
    assert!(deck.main_deck.is_empty());
}

#[test]
fn test_deck_json_shape() {
    let deck = ImportLoader::parse("name: Json\n2 mirage\n[sideboard]\n1 cataphract");
    let json = serde_json::to_value(&deck).unwrap();

    assert_eq!(json["errors"], serde_json::json!([]));
    assert_eq!(json["deckName"], "Json");
    assert_eq!(json["deckCoverArt"], "");
    assert_eq!(json["mainDeck"]["0"]["quantity"], 2);
    assert_eq!(json["mainDeck"]["0"]["name"], "mirage");
    assert_eq!(json["mainDeck"]["0"]["id"]["state"], "unresolved");
    assert_eq!(json["sideboard"]["0"]["name"], "cataphract");
    assert_eq!(json["asText"], "name: Json\n2 mirage");
}
