#![cfg(unix)]

mod common;

use std::time::{Duration, Instant};

use common::{stderr, stdout, Workspace};

#[test]
fn status_passes_queue_output_through() {
    let ws = Workspace::new().with_fake_queue();

    let output = ws.run(&["status"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(ws.calls(), ["status"]);
    let text = stdout(&output);
    assert!(text.contains("[QUEUE]"));
    assert!(text.contains("pending: 2"));
}

#[test]
fn status_needs_no_source_roots() {
    let ws = Workspace::new().with_fake_queue();
    let missing = ws.path().join("nowhere");

    let output = ws.run(&["--root", missing.to_str().unwrap(), "status"]);

    assert!(output.status.success());
    assert_eq!(ws.calls(), ["status"]);
}

#[test]
fn process_runs_process_command() {
    let ws = Workspace::new().with_fake_queue();

    let output = ws.run(&["process"]);

    assert!(output.status.success());
    assert_eq!(ws.calls(), ["process"]);
    assert!(stdout(&output).contains("processed 2 files"));
}

#[test]
fn full_runs_transfer_status_process_in_order() {
    let ws = Workspace::new().with_fake_queue();
    ws.touch("TX_deaths.csv");

    let output = ws.run(&["full"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let calls = ws.calls();
    assert_eq!(calls.len(), 3, "{calls:?}");
    assert!(calls[0].starts_with("add "));
    assert_eq!(calls[1], "status");
    assert_eq!(calls[2], "process");
    assert!(!stdout(&output).contains("Next:"));
}

#[test]
fn full_continues_after_a_failed_file() {
    let ws = Workspace::new().with_fake_queue();
    ws.touch("TX_deaths.csv");
    ws.touch("UT_reject_deaths.csv");

    let output = ws.run(&["full"]);

    assert_eq!(output.status.code(), Some(1));
    let calls = ws.calls();
    assert_eq!(calls.len(), 4, "{calls:?}");
    assert_eq!(&calls[2..], ["status", "process"]);
}

#[test]
fn full_stops_when_no_root_exists() {
    let ws = Workspace::new().with_fake_queue();
    let missing = ws.path().join("nowhere");

    let output = ws.run(&["--root", missing.to_str().unwrap(), "full"]);

    assert!(!output.status.success());
    assert!(ws.calls().is_empty());
}

#[test]
fn json_full_emits_queue_step_events() {
    let ws = Workspace::new().with_fake_queue();

    let output = ws.run(&["--json", "full"]);

    assert!(output.status.success());
    let events: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let steps: Vec<(&str, &str)> = events
        .iter()
        .filter(|e| e["command"] != "transfer")
        .map(|e| (e["event"].as_str().unwrap(), e["command"].as_str().unwrap()))
        .collect();
    assert_eq!(
        steps,
        [
            ("start", "status"),
            ("complete", "status"),
            ("start", "process"),
            ("complete", "process"),
        ]
    );
    let last = events.last().unwrap();
    assert!(last["stdout"].as_str().unwrap().contains("processed 2 files"));
}

#[test]
fn hung_enqueue_is_killed_and_batch_continues() {
    let ws = Workspace::new().with_fake_queue();
    ws.touch("AK_hang_deaths.csv");
    ws.touch("TX_deaths.csv");

    let started = Instant::now();
    let output = ws.run(&["--timeout", "1", "transfer"]);

    assert!(started.elapsed() < Duration::from_secs(20));
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(ws.calls().len(), 2);
    let text = stdout(&output);
    assert!(text.contains("timed out after 1s"), "stdout:\n{text}");
    assert!(text.contains("Successfully queued: 1"));
}

#[test]
fn process_is_not_bound_by_enqueue_timeout() {
    let ws = Workspace::new().with_fake_queue();

    let output = ws
        .relay()
        .env("FAKE_QUEUE_SLOW", "1")
        .args(["--timeout", "1", "process"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stdout:\n{}", stdout(&output));
    assert!(stdout(&output).contains("processed 2 files"));
}

#[test]
fn process_timeout_flag_bounds_process() {
    let ws = Workspace::new().with_fake_queue();

    let output = ws
        .relay()
        .env("FAKE_QUEUE_SLOW", "1")
        .args(["--process-timeout", "1", "process"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("timed out after 1s"));
}

#[test]
fn missing_queue_program_fails_each_file() {
    let ws = Workspace::new().with_fake_queue();
    ws.touch("TX_deaths.csv");
    std::fs::remove_file(ws.queue_dir().join("fake-queue")).unwrap();

    let output = ws.run(&["transfer"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("could not start"));
}
