use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "polyparade-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_showcases_writes_output() {
    let exe = env!("CARGO_BIN_EXE_polyparade");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-showcases", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available showcases"));
}

#[test]
fn cli_default_run_prints_both_showcases() {
    let exe = env!("CARGO_BIN_EXE_polyparade");
    let output = Command::new(exe)
        .env("NO_COLOR", "1")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Animals in motion:"));
    assert!(stdout.contains("Dog: Running 🐕"));
    assert!(stdout.contains("Superman flies to 10000 feet!"));
    assert!(stdout.contains("Batman uses grappling gun! Battery: 80%"));
}

#[test]
fn cli_json_report_for_custom_roster() {
    let exe = env!("CARGO_BIN_EXE_polyparade");
    let roster_path = temp_path("roster");
    std::fs::write(
        &roster_path,
        r#"{
            "movers": { "animals": ["fish"] },
            "heroes": [{
                "kind": "flying",
                "name": "Kite",
                "secret_identity": "Mira Sol",
                "powers": ["gust"],
                "max_altitude": 5000
            }]
        }"#,
    )
    .expect("write roster");
    let output_path = temp_path("report");

    let status = Command::new(exe)
        .args(["--report", "json", "--showcases", "heroes", "--roster"])
        .arg(&roster_path)
        .arg("--output")
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());

    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let sections = value["sections"].as_array().expect("sections");
    assert_eq!(sections[0]["title"], "Heroes in action");
    assert_eq!(
        sections[1]["lines"][0],
        "Kite can't fly that high! Max altitude is 5000 feet."
    );
}

#[test]
fn cli_fails_for_missing_roster() {
    let exe = env!("CARGO_BIN_EXE_polyparade");
    let output = Command::new(exe)
        .arg("--roster")
        .arg(temp_path("absent"))
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read roster"));
}

#[test]
fn cli_warns_about_unknown_showcases() {
    let exe = env!("CARGO_BIN_EXE_polyparade");
    let output = Command::new(exe)
        .args(["--showcases", "dragons,movement"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stderr.contains("Unknown showcase"));
    assert!(stdout.contains("Vehicles in motion:"));
    assert!(!stdout.contains("Heroes in action"));
}
