use predicates::prelude::*;
use std::fs;
use test_env::TestEnv;

#[test]
fn test_session_cycle_and_stats() {
    let env = TestEnv::new();
    env.session()
        .write_stdin("cycle Design Review\ncycle mockup\ncycle mockup\nstats\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Garment Production Tracker: 5 phases, 20 tasks"))
        .stdout(predicate::str::contains("\"Design Review\" is now In Progress"))
        .stdout(predicate::str::contains("\"Mockup Creation\" is now Completed"))
        .stdout(predicate::str::contains("Overall Progress: 5%"))
        .stdout(predicate::str::contains("Completed: 1  In Progress: 1  Pending: 18  Total: 20"));
}

#[test]
fn test_session_errors_do_not_end_session() {
    let env = TestEnv::new();
    env.session()
        .write_stdin("cycle Desgn Reveiw\nst\ncycle design\nstatus design\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Task 'Desgn Reveiw' not found in Development. Did you mean: Design Review?"))
        .stderr(predicate::str::contains("Ambiguous command 'st'"))
        .stdout(predicate::str::contains("Development / Design Review: In Progress"));
}

#[test]
fn test_session_phase_select_and_reset() {
    let env = TestEnv::new();
    env.session()
        .args(["--phase", "prod"])
        .write_stdin("cycle batch\ncycle Sampling / Cost Analysis\nreset\nstatus batch\nstatus Sampling / cost\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phase: Production"))
        .stdout(predicate::str::contains("All tasks in Production have been reset to Pending."))
        .stdout(predicate::str::contains("Production / Batch Processing: Pending"))
        .stdout(predicate::str::contains("Sampling / Cost Analysis: In Progress"));
}

#[test]
fn test_session_unknown_start_phase() {
    let env = TestEnv::new();
    env.session()
        .args(["--phase", "Shipping"])
        .write_stdin("quit\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Phase 'Shipping' not found"));
}

#[test]
fn test_session_analytics_and_info() {
    let env = TestEnv::new();
    env.session()
        .write_stdin("phase dist\ninfo\nanalytics\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Confirm delivery schedules with carriers"))
        .stdout(predicate::str::contains("Production Analytics"))
        .stdout(predicate::str::contains("(100% of total)"))
        .stdout(predicate::str::contains("Estimated Completion: Monday, January 15, 2024"));
}

#[test]
fn test_session_export() {
    let env = TestEnv::new();
    let out_dir = env.path().join("reports");
    env.session()
        .args(["--out", out_dir.to_str().unwrap()])
        .write_stdin("cycle Design Review\ncycle Design Review\nexport\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Production data has been exported to"));

    let csv = fs::read_to_string(out_dir.join("production_report_2024-01-01.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "Phase,Task,Status,Date");
    assert_eq!(lines[1], "\"Development\",\"Design Review\",\"Completed\",\"2024-01-01\"");
    assert_eq!(lines[20], "\"Distribution\",\"Customer Feedback\",\"Pending\",\"2024-01-01\"");
    assert!(!csv.ends_with('\n'));
}

#[test]
fn test_statuses_do_not_survive_session() {
    let env = TestEnv::new();
    env.session()
        .write_stdin("cycle Design Review\n")
        .assert()
        .success();

    env.session()
        .write_stdin("status Design Review\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Development / Design Review: Pending"));
}
