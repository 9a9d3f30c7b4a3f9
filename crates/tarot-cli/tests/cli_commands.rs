//! End-to-end tests for the `tarot-reader` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn tarot() -> Command {
    let mut cmd = Command::cargo_bin("tarot-reader").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// version / usage
// ---------------------------------------------------------------------------

#[test]
fn version_exits_zero() {
    tarot()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tarot-reader"));
}

#[test]
fn unknown_type_is_usage_error() {
    tarot()
        .args(["--type", "horoscope"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unknown_style_is_usage_error() {
    tarot()
        .args(["--style", "fancy"])
        .assert()
        .failure()
        .code(2);
}

// ---------------------------------------------------------------------------
// readings
// ---------------------------------------------------------------------------

#[test]
fn default_is_decorated_single_card() {
    tarot()
        .assert()
        .success()
        .stdout(
            predicate::str::contains("DAILY CARD READING")
                .and(predicate::str::contains("▸ "))
                .and(predicate::str::contains("guidance for today")),
        );
}

#[test]
fn single_with_seed_shows_seed_in_box() {
    tarot()
        .args(["--type", "single", "--seed", "INFP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seed: INFP"));
}

#[test]
fn three_card_compact_labels_positions() {
    let output = tarot()
        .args(["-t", "three", "-s", "INFP", "--style", "compact"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(
        "Three Card Tarot Reading (Past, Present, Future) (Personal Seed: INFP):"
    ));
    let card_lines: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("Past: ") || l.starts_with("Present: ") || l.starts_with("Future: "))
        .collect();
    assert_eq!(card_lines.len(), 3);
    assert!(card_lines[0].starts_with("Past: "));
    assert!(card_lines[1].starts_with("Present: "));
    assert!(card_lines[2].starts_with("Future: "));
}

#[test]
fn celtic_cross_decorated_has_all_positions() {
    tarot()
        .args(["--type", "celtic"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CELTIC CROSS SPREAD")
                .and(predicate::str::contains(" 1. PRESENT SITUATION:"))
                .and(predicate::str::contains(" 3. DISTANT PAST/FOUNDATION:"))
                .and(predicate::str::contains("10. FINAL OUTCOME:")),
        );
}

#[test]
fn random_draw_numbers_each_card() {
    let output = tarot()
        .args(["--type", "random", "--count", "5", "--style", "compact"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("5-Card Tarot Reading:"));
    for i in 1..=5 {
        assert!(
            stdout.lines().any(|l| l.starts_with(&format!("{i}. "))),
            "missing card {i}: {stdout}"
        );
    }
    assert!(!stdout.lines().any(|l| l.starts_with("6. ")));
}

#[test]
fn random_draw_rejects_zero() {
    tarot()
        .args(["--type", "random", "--count", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("between 1 and 78"));
}

#[test]
fn random_draw_rejects_negative_and_too_many() {
    for count in ["-1", "79"] {
        tarot()
            .args(["--type", "random", "-n", count])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("between 1 and 78"));
    }
}

#[test]
fn json_output_is_structured() {
    let output = tarot()
        .args(["--type", "three", "--seed", "O+", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["spread"], "three_card");
    assert_eq!(value["seed"], "O+");
    let cards = value["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["position"], "Past");
    assert_eq!(cards[2]["position"], "Future");
}

#[test]
fn json_random_drop_carries_timestamps() {
    let output = tarot()
        .args(["--type", "random", "-n", "2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["spread"], "random_drop");
    for card in value["cards"].as_array().unwrap() {
        assert!(card["drawn_at"].is_string());
    }
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[test]
fn search_by_alias() {
    tarot()
        .args(["--search", "s1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ace of Swords")
                .and(predicate::str::contains("1 card matching")),
        );
}

#[test]
fn search_by_name_lists_matches() {
    tarot()
        .args(["--search", "king"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("King of Wands")
                .and(predicate::str::contains("King of Pentacles"))
                .and(predicate::str::contains("4 cards matching")),
        );
}

#[test]
fn search_without_match_fails() {
    tarot()
        .args(["--search", "joker"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no card found matching 'joker'"));
}

#[test]
fn search_conflicts_with_reading_flags() {
    tarot()
        .args(["--search", "fool", "--type", "three"])
        .assert()
        .failure()
        .code(2);
}
