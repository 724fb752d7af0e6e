use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "eduzoo-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_eduzoo-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("corrupt-save"));
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_runs_all_scenarios_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_eduzoo-tester");
    let output_path = temp_path("report");
    let state_path = temp_path("state");
    let status = Command::new(exe)
        .args(["--scenarios", "all", "--report", "json", "--state-file"])
        .arg(&state_path)
        .arg("--output")
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());

    let content = std::fs::read_to_string(&output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report["total"], 6);
    assert_eq!(report["failed"], 0);
    let _ = std::fs::remove_file(output_path);
    let _ = std::fs::remove_file(state_path);
}

#[test]
fn cli_rejects_unknown_report_format() {
    let exe = env!("CARGO_BIN_EXE_eduzoo-tester");
    let output = Command::new(exe)
        .args(["--report", "csv"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}

#[test]
fn cli_warns_about_unknown_scenarios() {
    let exe = env!("CARGO_BIN_EXE_eduzoo-tester");
    let output = Command::new(exe)
        .args(["--scenarios", "boss-fight", "--report", "markdown"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stderr.contains("Unknown scenario"));
    assert!(stdout.contains("_No scenarios executed._"));
}
