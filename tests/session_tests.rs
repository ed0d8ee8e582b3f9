//! Interactive session tests
//!
//! Drives the command loop with scripted input and checks both the printed
//! output and the resulting log file.

use std::io::Cursor;
use std::sync::Arc;

use chrono::Duration;
use tempfile::TempDir;

use notr::session::{Session, SessionState};
use notr::store::{LogStore, StoreConfig};
use notr::utils::FixedClock;

struct Harness {
    _temp_dir: TempDir,
    clock: Arc<FixedClock>,
    store: LogStore,
}

impl Harness {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let clock = Arc::new(FixedClock::at(2024, 3, 15, 10, 0).unwrap());
        let store = LogStore::open(StoreConfig::new(temp_dir.path()), clock.clone())
            .expect("Failed to open store");
        Self {
            _temp_dir: temp_dir,
            clock,
            store,
        }
    }

    fn run(&self, input: &str) -> String {
        let mut session = Session::new(&self.store, Cursor::new(input.to_string()), Vec::new());
        session.run().expect("session failed");
        assert_eq!(session.state(), SessionState::Terminated);
        String::from_utf8(session.into_output()).unwrap()
    }
}

#[test]
fn test_notes_are_logged_and_echoed() {
    let h = Harness::new();
    let out = h.run("  Deployed service #deploy  \n/q\n");

    assert!(out.contains("[2024-03-15 10:00] Deployed service #deploy\n"));
    assert_eq!(
        h.store.read_all().unwrap(),
        vec!["[2024-03-15 10:00] Deployed service #deploy"]
    );
}

#[test]
fn test_list_three_after_five_appends() {
    let h = Harness::new();
    let out = h.run("one\ntwo\nthree\nfour\nfive\n/list 3\n/q\n");

    let listed: Vec<&str> = out
        .split("--- Last entries ---\n")
        .nth(1)
        .unwrap()
        .lines()
        .collect();
    assert_eq!(
        listed,
        vec![
            "[2024-03-15 10:00] three",
            "[2024-03-15 10:00] four",
            "[2024-03-15 10:00] five"
        ]
    );
}

#[test]
fn test_list_with_invalid_count_uses_default() {
    let h = Harness::new();
    let input: String = (1..=12).map(|i| format!("n{}\n", i)).collect::<String>() + "/list -3\n";
    let out = h.run(&input);

    let listed = out.split("--- Last entries ---\n").nth(1).unwrap();
    assert_eq!(listed.lines().count(), 10);
    assert!(listed.starts_with("[2024-03-15 10:00] n3\n"));
}

#[test]
fn test_list_without_file() {
    let h = Harness::new();
    let out = h.run("/list\n");
    assert!(out.contains("No log file found.\n"));
    assert!(!out.contains("--- Last entries ---"));
}

#[test]
fn test_edit_replaces_last_entry() {
    let h = Harness::new();
    h.run("first\nsecnod\n");

    h.clock.advance(Duration::minutes(7));
    let out = h.run("/edit\nsecond\n/q\n");

    assert!(out.contains("Editing last entry: [2024-03-15 10:00] secnod\n"));
    assert!(out.contains("New text: Updated: [2024-03-15 10:07] (edit) second\n"));
    assert_eq!(
        h.store.read_all().unwrap(),
        vec!["[2024-03-15 10:00] first", "[2024-03-15 10:07] (edit) second"]
    );
}

#[test]
fn test_edit_and_delete_on_empty_state_continue_loop() {
    let h = Harness::new();
    let out = h.run("/edit\n/delete\nstill running\n");
    assert!(out.contains("No log file found to edit.\n"));
    assert!(out.contains("No log file found to delete from.\n"));
    assert_eq!(h.store.read_all().unwrap().len(), 1);

    let out = h.run("/delete\n/delete\n/edit\n");
    assert!(out.contains("Deleted: [2024-03-15 10:00] still running\n"));
    assert!(out.contains("No entries to delete.\n"));
    assert!(out.contains("No entries to edit.\n"));
}

#[test]
fn test_delete_reports_removed_line() {
    let h = Harness::new();
    let out = h.run("keep\noops\n/delete\n/q\n");
    assert!(out.contains("Deleted: [2024-03-15 10:00] oops\n"));
    assert_eq!(h.store.read_all().unwrap(), vec!["[2024-03-15 10:00] keep"]);
}

#[test]
fn test_step_by_step_states() {
    let h = Harness::new();
    let mut session = Session::new(
        &h.store,
        Cursor::new("note\n\n/q\n".to_string()),
        Vec::new(),
    );

    assert_eq!(session.state(), SessionState::Prompting);
    assert_eq!(session.step().unwrap(), SessionState::Prompting);
    assert_eq!(session.step().unwrap(), SessionState::Prompting);
    assert_eq!(session.step().unwrap(), SessionState::Terminated);
    assert_eq!(session.step().unwrap(), SessionState::Terminated);
}
