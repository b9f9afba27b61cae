use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(config_home: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = cargo_bin_cmd!("relationdex");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    cmd.output().expect("run command")
}

fn run_cmd(config_home: &Path, args: &[&str]) -> String {
    let output = run_raw(config_home, args, None);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(config_home: &Path, args: &[&str], stdin: Option<&str>) -> Value {
    let output = run_raw(config_home, args, stdin);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn write_grace(dir: &Path) -> String {
    let path = dir.join("grace.json");
    let doc = json!({
        "id": "c3",
        "name": "Grace Hopper",
        "notes": "mentor",
        "lastTalkedDate": "2024-01-01T00:00:00Z",
        "lastSeenDate": null,
        "desiredTalkFrequency": 7,
        "desiredSeeFrequency": 60
    });
    fs::write(&path, doc.to_string()).expect("write contact");
    path.to_str().expect("path").to_string()
}

#[test]
fn new_uses_default_frequencies_and_null_dates() {
    let temp = TempDir::new().expect("temp dir");
    let contact = run_cmd_json(temp.path(), &["new", "--name", "Ada Lovelace"], None);

    assert_eq!(contact["name"], "Ada Lovelace");
    assert_eq!(contact["notes"], "");
    assert!(contact["lastTalkedDate"].is_null());
    assert!(contact["lastSeenDate"].is_null());
    assert_eq!(contact["desiredTalkFrequency"], 30);
    assert_eq!(contact["desiredSeeFrequency"], 90);
    assert!(!contact["id"].as_str().expect("id").is_empty());
}

#[test]
fn new_reads_config_defaults_and_flags() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("relationdex");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("config.toml"),
        "default_talk_frequency_days = 14\ndefault_see_frequency_days = 0\n",
    )
    .expect("write config");

    let contact = run_cmd_json(
        temp.path(),
        &[
            "new",
            "--id",
            "c1",
            "--name",
            "Ada Lovelace",
            "--see-every",
            "45d",
            "--last-talked",
            "2024-01-01T00:00:00Z",
        ],
        None,
    );
    assert_eq!(contact["id"], "c1");
    assert_eq!(contact["desiredTalkFrequency"], 14);
    assert_eq!(contact["desiredSeeFrequency"], 45);
    assert_eq!(contact["lastTalkedDate"], "2024-01-01T00:00:00Z");
    assert!(contact["lastSeenDate"].is_null());
}

#[test]
fn new_rejects_blank_name() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(temp.path(), &["new", "--name", "  "], None);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("contact name is required"));
}

#[test]
fn check_summarizes_interactions() {
    let temp = TempDir::new().expect("temp dir");
    let path = write_grace(temp.path());

    let summary = run_cmd(temp.path(), &["check", &path]);
    assert!(summary.starts_with("c3 Grace Hopper\n"));
    assert!(summary.contains("  talk: last "));
    assert!(summary.contains("every 7d"));
    assert!(summary.contains("  see: last never, every 60d"));
    assert!(summary.contains("  notes: mentor"));
}

#[test]
fn check_reports_invalid_and_missing_documents() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("bad.json");
    fs::write(
        &path,
        r#"{"id":"c2","name":"","desiredTalkFrequency":1,"desiredSeeFrequency":1}"#,
    )
    .expect("write contact");

    let output = run_raw(temp.path(), &["check", path.to_str().expect("path")], None);
    assert_eq!(output.status.code(), Some(3));

    let missing = temp.path().join("missing.json");
    let output = run_raw(
        temp.path(),
        &["check", missing.to_str().expect("path")],
        None,
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn log_records_interaction_without_moving_backwards() {
    let temp = TempDir::new().expect("temp dir");
    let path = write_grace(temp.path());

    let seen = run_cmd_json(
        temp.path(),
        &["log", &path, "see", "--at", "2024-02-10T18:30:00Z"],
        None,
    );
    assert_eq!(seen["lastSeenDate"], "2024-02-10T18:30:00Z");
    assert_eq!(seen["lastTalkedDate"], "2024-01-01T00:00:00Z");

    let stale = run_cmd_json(
        temp.path(),
        &["log", &path, "talk", "--at", "2023-06-01T00:00:00Z"],
        None,
    );
    assert_eq!(stale["lastTalkedDate"], "2024-01-01T00:00:00Z");
}

#[test]
fn log_and_edit_read_stdin() {
    let temp = TempDir::new().expect("temp dir");
    let doc = json!({
        "id": "c1",
        "name": "Ada Lovelace",
        "notes": "",
        "lastTalkedDate": null,
        "lastSeenDate": null,
        "desiredTalkFrequency": 30,
        "desiredSeeFrequency": 90
    })
    .to_string();

    let talked = run_cmd_json(temp.path(), &["log", "-", "call"], Some(&doc));
    assert!(talked["lastTalkedDate"].is_string());
    assert!(talked["lastSeenDate"].is_null());

    let edited = run_cmd_json(
        temp.path(),
        &["edit", "-", "--notes", "analytical engine", "--talk-every", "0"],
        Some(&doc),
    );
    assert_eq!(edited["notes"], "analytical engine");
    assert_eq!(edited["desiredTalkFrequency"], 0);
    assert_eq!(edited["id"], "c1");
}

#[test]
fn edit_without_changes_is_invalid() {
    let temp = TempDir::new().expect("temp dir");
    let path = write_grace(temp.path());
    let output = run_raw(temp.path(), &["edit", &path], None);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn check_json_prints_normalized_document() {
    let temp = TempDir::new().expect("temp dir");
    let doc = json!({
        "id": "c3",
        "name": "Grace Hopper",
        "notes": "mentor",
        "lastTalkedDate": "2024-01-01T00:00:00Z",
        "lastSeenDate": null,
        "desiredTalkFrequency": 7,
        "desiredSeeFrequency": 60
    });

    let checked = run_cmd_json(
        temp.path(),
        &["--json", "check", "-"],
        Some(&doc.to_string()),
    );
    assert_eq!(checked, doc);
}

#[test]
fn completions_emit_bash_script() {
    let temp = TempDir::new().expect("temp dir");
    let script = run_cmd(temp.path(), &["completions", "bash"]);
    assert!(script.contains("relationdex"));
    assert!(script.contains("complete"));
}
