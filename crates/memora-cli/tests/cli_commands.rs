//! Integration tests for the memora CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn memora() -> Command {
    let mut cmd = Command::cargo_bin("memora").unwrap();
    cmd.env_remove("MEMORA_LOG");
    cmd
}

/// Write a session config into a fresh temp directory.
fn config_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memora.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// exercises
// ---------------------------------------------------------------------------

#[test]
fn exercises_lists_catalog() {
    memora()
        .arg("exercises")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Visual N-Back")
                .and(predicate::str::contains("Word Pairing"))
                .and(predicate::str::contains("Name-Face Link"))
                .and(predicate::str::contains("Timed Flash"))
                .and(predicate::str::contains("speed-recall (soon)")),
        );
}

#[test]
fn exercises_json() {
    let value = json_stdout(memora().args(["exercises", "--json"]));
    let catalog = value.as_array().unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog[0]["id"], "n-back");
    assert_eq!(catalog[1]["id"], "paired-associates");
}

// ---------------------------------------------------------------------------
// progress
// ---------------------------------------------------------------------------

#[test]
fn progress_crosses_level_boundary() {
    memora()
        .args(["progress", "--xp", "480", "--score", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("530").and(predicate::str::contains("Level up")));
}

#[test]
fn progress_json() {
    let value = json_stdout(memora().args([
        "progress", "--xp", "480", "--score", "50", "--accuracy", "0.8", "--json",
    ]));
    assert_eq!(value["after"]["xp"], 530);
    assert_eq!(value["after"]["level"], 2);
    assert_eq!(value["after"]["total_sessions"], 1);
    let accuracy = value["after"]["memory_profile"]["accuracy"].as_f64().unwrap();
    assert!((accuracy - 0.77).abs() < 1e-9);
}

#[test]
fn progress_clamps_score() {
    let value = json_stdout(memora().args(["progress", "--score", "250", "--json"]));
    assert_eq!(value["after"]["xp"], 100);
}

#[test]
fn progress_saturates_at_max_xp() {
    let value = json_stdout(memora().args([
        "progress",
        "--xp",
        "18446744073709551615",
        "--score",
        "50",
        "--json",
    ]));
    assert_eq!(value["after"]["xp"], u64::MAX);
    assert_eq!(value["after"]["total_sessions"], 1);
}

#[test]
fn progress_rejects_bad_accuracy() {
    memora()
        .args(["progress", "--score", "10", "--accuracy", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_is_deterministic_per_seed() {
    let first = memora().args(["simulate", "--seed", "9"]).output().unwrap();
    let second = memora().args(["simulate", "--seed", "9"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn simulate_without_presses_scores_zero() {
    let value = json_stdout(memora().args(["simulate", "--seed", "3", "--json"]));
    assert_eq!(value["score"], 0);
    assert_eq!(value["attempts"], 0);
    assert_eq!(value["sequence"].as_array().unwrap().len(), 15);
    assert_eq!(value["stats"]["total_sessions"], 1);
}

#[test]
fn simulate_counts_every_press() {
    let value = json_stdout(memora().args(["simulate", "--press", "0,0,1", "--json"]));
    assert_eq!(value["attempts"], 3);
    // The first item can never match.
    assert!(value["correct"].as_u64().unwrap() <= 1);
    assert!(value["score"].as_u64().unwrap() <= 33);
}

#[test]
fn simulate_verbose_marks_items() {
    memora()
        .args(["simulate", "--verbose", "--press", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false alarm").and(predicate::str::contains("[14]")));
}

#[test]
fn simulate_runs_share_one_session() {
    let value = json_stdout(memora().args(["simulate", "--runs", "3", "--press", "1,2", "--json"]));
    let history = value["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2]["ordinal"], 3);
    assert_eq!(history[0]["outcome"], "completed");
    assert_eq!(value["stats"]["total_sessions"], 3);
    let average = value["average_score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&average));
}

#[test]
fn simulate_runs_print_history() {
    memora()
        .args(["simulate", "--runs", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Run 2")
                .and(predicate::str::contains("Average score: 0.0")),
        );
}

#[test]
fn simulate_rejects_zero_runs() {
    memora()
        .args(["simulate", "--runs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn simulate_rejects_press_past_end() {
    memora()
        .args(["simulate", "--press", "15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the end"));
}

#[test]
fn simulate_reads_config_file() {
    let (_dir, path) = config_file("[nback]\nlength = 5\nn = 2\n");
    let value = json_stdout(
        memora()
            .args(["simulate", "--json", "--config"])
            .arg(&path),
    );
    assert_eq!(value["n"], 2);
    assert_eq!(value["sequence"].as_array().unwrap().len(), 5);
}

#[test]
fn simulate_rejects_invalid_config() {
    let (_dir, path) = config_file("[nback]\nn = 0\n");
    memora()
        .args(["simulate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn simulate_logs_when_asked() {
    memora()
        .env("MEMORA_LOG", "debug")
        .args(["simulate", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("n-back finished"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_home_recommends_first_exercises() {
    memora()
        .args(["show", "home", "--xp", "730"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("230 / 500 XP to Level 3")
                .and(predicate::str::contains("Recommended for You"))
                .and(predicate::str::contains("Visual N-Back"))
                .and(predicate::str::contains("Word Pairing"))
                .and(predicate::str::contains("Timed Flash").not()),
        );
}

#[test]
fn show_stats_lists_every_domain() {
    memora()
        .args(["show", "stats"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Working Memory")
                .and(predicate::str::contains("Speed & Recall Fluency"))
                .and(predicate::str::contains("55%"))
                .and(predicate::str::contains("1200ms")),
        );
}

#[test]
fn show_stats_json() {
    let value = json_stdout(memora().args(["show", "stats", "--json", "--xp", "1000"]));
    assert_eq!(value["stats"]["level"], 3);
    let domains = value["domains"].as_array().unwrap();
    assert_eq!(domains.len(), 4);
    assert_eq!(domains[0]["strength"], 85);
}

#[test]
fn show_review_is_clear() {
    memora()
        .args(["show", "review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Review Queue"));
}

#[test]
fn show_rejects_unknown_screen() {
    memora().args(["show", "chat"]).assert().failure();
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_paired_perfect_recall() {
    memora()
        .args(["play", "paired-associates"])
        .write_stdin("\nCloud\nwater\n FOREST \nsandwich\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Study these pairs")
                .and(predicate::str::contains("with score 100"))
                .and(predicate::str::contains("100 / 500 XP to Level 2")),
        );
}

#[test]
fn play_paired_custom_pairs() {
    let (_dir, path) = config_file("[paired]\npairs = [{ cue = \"Sun\", target = \"Chair\" }]\n");
    memora()
        .args(["play", "paired-associates", "--config"])
        .arg(&path)
        .write_stdin("\nchair\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun").and(predicate::str::contains("with score 100")));
}

#[test]
fn play_paired_cancelled_by_end_of_input() {
    memora()
        .args(["play", "paired-associates"])
        .write_stdin("\ncloud\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game cancelled"));
}

#[test]
fn play_unplayable_exercise_fails() {
    memora()
        .args(["play", "name-face"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not playable yet"));
}

#[test]
fn play_unknown_exercise_fails() {
    memora()
        .args(["play", "chess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown exercise"));
}
