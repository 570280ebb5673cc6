//! End-to-end runs of the `sort-check` binary.

use std::process::{Command, Output};

use serde_json::Value;
use sort_check::datasets::DatasetSuite;

fn sort_check(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sort-check"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sort-check")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

#[test]
fn test_text_report_for_all() {
    let output = sort_check(&["--algo", "all"]);
    assert_eq!(output.status.code(), Some(0));

    let total = DatasetSuite::standard().len();
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4 * total + 4);
    assert!(lines[..4 * total].iter().all(|l| l.ends_with("RESULT=PASS")));
    assert_eq!(lines[0], "ALGO=bubble RESULT=PASS");
    for (line, name) in lines[4 * total..].iter().zip(["bubble", "selection", "merge", "quick"]) {
        assert_eq!(*line, format!("SUMMARY ALGO={name} PASSED={total} TOTAL={total}"));
    }
}

#[test]
fn test_json_report_for_one() {
    let output = sort_check(&["--algo", "selection", "--report", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let value: Value = serde_json::from_str(&stdout(&output)).expect("invalid JSON");
    assert_eq!(value["status"], "OK");

    let algorithms = value["algorithms"].as_array().unwrap();
    assert_eq!(algorithms.len(), 1);
    assert_eq!(algorithms[0]["name"], "selection");
    assert_eq!(
        algorithms[0]["results"].as_array().unwrap().len(),
        DatasetSuite::standard().len()
    );
    assert_eq!(algorithms[0]["summary"]["passed"], algorithms[0]["summary"]["total"]);
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let output = sort_check(&["--algo", "heap"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown algorithm 'heap'"));
}

#[test]
fn test_visualize_keeps_stdout_clean() {
    let output = sort_check(&["--algo", "quick", "--report", "json", "--visualize"]);
    assert_eq!(output.status.code(), Some(0));

    let _: Value = serde_json::from_str(&stdout(&output)).expect("trace leaked into stdout");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Testing quick on reverse dataset"));
}

#[test]
fn test_adhoc_array() {
    let output = sort_check(&["--algo", "merge", "--array", "3,-1,2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "ALGO=merge OUTPUT=[-1, 2, 3] RESULT=PASS\n");
}

#[test]
fn test_malformed_array_uses_default() {
    let output = sort_check(&["--algo", "bubble", "--array", "3;x"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "ALGO=bubble OUTPUT=[1, 2, 3, 4, 5, 6, 7, 8, 9] RESULT=PASS\n"
    );
    // Default log level is warn, so the fallback is announced
    assert!(String::from_utf8_lossy(&output.stderr).contains("using default array"));
}

#[test]
fn test_list() {
    let output = sort_check(&["--list"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("selection"));
    assert!(text.contains("large_magnitudes"));
}

#[test]
fn test_failfast_with_passing_algorithms_runs_everything() {
    let output = sort_check(&["--algo", "all", "--failfast"]);
    assert_eq!(output.status.code(), Some(0));

    // Nothing fails, so fail-fast never cuts the run short
    let total = DatasetSuite::standard().len();
    let text = stdout(&output);
    let summaries: Vec<&str> = text.lines().filter(|l| l.starts_with("SUMMARY")).collect();
    assert_eq!(summaries.len(), 4);
    for (line, name) in summaries.iter().zip(["bubble", "selection", "merge", "quick"]) {
        assert_eq!(*line, format!("SUMMARY ALGO={name} PASSED={total} TOTAL={total}"));
    }
}

#[test]
fn test_failfast_json_reports_ok() {
    let output = sort_check(&["--algo", "merge", "--failfast", "--report", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let value: Value = serde_json::from_str(&stdout(&output)).expect("invalid JSON");
    assert_eq!(value["status"], "OK");
    assert_eq!(
        value["algorithms"][0]["summary"]["total"],
        DatasetSuite::standard().len()
    );
}
