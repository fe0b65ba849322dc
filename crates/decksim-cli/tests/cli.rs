use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn decksim() -> Command {
    Command::cargo_bin("decksim").expect("binary built")
}

#[test]
fn certain_combo_prints_probability_one() {
    let deck = write_temp("3 card a\n");
    let combo = write_temp("card a\n");
    decksim()
        .arg("--deck")
        .arg(deck.path())
        .arg("--combo")
        .arg(combo.path())
        .args(["--hand-size", "3", "--trials", "500", "--workers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 1"));
}

#[test]
fn json_output_carries_the_probability() {
    let deck = write_temp("3 card a\n");
    let combo = write_temp("card a\n");
    decksim()
        .arg("--deck")
        .arg(deck.path())
        .arg("--combo")
        .arg(combo.path())
        .args(["--hand-size", "3", "--trials", "200", "--workers", "2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"probability\":1.0"))
        .stdout(predicate::str::contains("\"deck_size\":3"));
}

#[test]
fn dump_cache_prints_fingerprint_probability_pairs() {
    let deck = write_temp("3 card a\n");
    let combo = write_temp("card a\n");
    decksim()
        .arg("--deck")
        .arg(deck.path())
        .arg("--combo")
        .arg(combo.path())
        .args(["--hand-size", "3", "--trials", "200", "--workers", "1", "--dump-cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"trials\":200"))
        .stdout(predicate::str::contains("\"groups\""))
        .stdout(predicate::str::contains("1.0]]"));
}

#[test]
fn malformed_lines_warn_but_do_not_fail() {
    let deck = write_temp("not a count\n3 card a\n");
    let combo = write_temp("card a\n");
    decksim()
        .arg("--deck")
        .arg(deck.path())
        .arg("--combo")
        .arg(combo.path())
        .args(["--hand-size", "3", "--trials", "100", "--workers", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring malformed deck line"))
        .stdout(predicate::str::contains("Result: 1"));
}

#[test]
fn empty_deck_is_an_error() {
    let deck = write_temp("# nothing but comments\n");
    let combo = write_temp("card a\n");
    decksim()
        .arg("--deck")
        .arg(deck.path())
        .arg("--combo")
        .arg(combo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("deck is empty"));
}

#[test]
fn missing_deck_file_reports_path() {
    let combo = write_temp("card a\n");
    decksim()
        .args(["--deck", "/nonexistent/deck.txt"])
        .arg("--combo")
        .arg(combo.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading deck"));
}

#[test]
fn zero_trials_is_rejected() {
    let deck = write_temp("3 card a\n");
    let combo = write_temp("card a\n");
    decksim()
        .arg("--deck")
        .arg(deck.path())
        .arg("--combo")
        .arg(combo.path())
        .args(["--trials", "0"])
        .assert()
        .failure();
}

#[test]
fn total_padding_reaches_declared_size() {
    let deck = write_temp("40 total\n3 card a\n");
    let combo = write_temp("card a\n");
    decksim()
        .arg("--deck")
        .arg(deck.path())
        .arg("--combo")
        .arg(combo.path())
        .args(["--hand-size", "5", "--trials", "100", "--workers", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deck_size\":40"));
}
