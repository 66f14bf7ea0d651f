//! Exit codes and console output of the `lotsim` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn lotsim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lotsim"))
        .args(args)
        .output()
        .unwrap()
}

fn design(name: &str) -> String {
    data(name).to_str().unwrap().to_string()
}

// ── Usage errors: status 2 ─────────────────────────────────────────

#[test]
fn zero_rate_exits_2() {
    let out = lotsim(&[&design("one_row.inf"), "0"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("The hourly rate of arrival should be a positive integer!"));
    assert!(!stderr.contains("Usage:"));
    assert!(out.stdout.is_empty());
}

#[test]
fn negative_rate_exits_2() {
    let out = lotsim(&[&design("one_row.inf"), "-5"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn single_argument_exits_2_with_usage() {
    let out = lotsim(&[&design("one_row.inf")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}

#[test]
fn help_exits_0() {
    let out = lotsim(&["--help"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("Usage:"));
}

// ── Run errors: status 1 ───────────────────────────────────────────

#[test]
fn missing_design_exits_1() {
    let out = lotsim(&[&design("no_such_lot.inf"), "11"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("error: cannot load lot design"));
}

#[test]
fn ragged_design_exits_1() {
    let out = lotsim(&[&design("ragged.inf"), "11"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn zero_max_duration_exits_1() {
    let out = lotsim(&[&design("one_row.inf"), "11", "--max-duration", "0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("error: invalid configuration"));
}

// ── Successful run ─────────────────────────────────────────────────

#[test]
fn run_prints_sections_in_order() {
    let out = lotsim(&[&design("one_row.inf"), "3600", "--steps", "20", "--seed", "3"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], "Total number of parkable spots (capacity): 4");
    assert_eq!(lines[1], "=== SIMULATION START ===");
    assert!(lines[2].ends_with(" ENTERED at timestep 0; occupancy is at 1"));
    let end = lines
        .iter()
        .position(|l| *l == "=== SIMULATION END ===")
        .unwrap();
    assert_eq!(lines[end + 1], "");
    assert!(lines[end + 2].starts_with("Simulation took "));
    assert_eq!(lines[end + 3], "");
    assert!(lines[end + 4]
        .starts_with("Length of car queue at the front at the end of simulation: "));
    assert_eq!(lines.len(), end + 5);
}

#[test]
fn same_seed_same_events() {
    let lot = design("one_row.inf");
    let args = [lot.as_str(), "900", "--steps", "500", "--seed", "8"];
    let events = |out: Output| -> Vec<String> {
        String::from_utf8(out.stdout)
            .unwrap()
            .lines()
            .filter(|l| l.contains(" at timestep "))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(events(lotsim(&args)), events(lotsim(&args)));
}
