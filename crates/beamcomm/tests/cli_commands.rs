#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn beamcomm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_beamcomm"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("beamcomm should run")
}

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "beamcomm-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

#[test]
fn encode_raw_prints_frame() {
    let output = beamcomm(&["--format", "raw", "encode", "--tag", "[tx]", "ping"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[tx] [msg:ping]\n");
}

#[test]
fn decode_text_outputs_payload_json() {
    let output = beamcomm(&[
        "--format",
        "json",
        "decode",
        "--text",
        "Type: Laser Antenna\nCurrent Input: 2.00 MW\nConnected to [rx] [msg:pong]",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("decode output should be json");
    assert_eq!(json["ok"], true);
    assert_eq!(json["payload"], "pong");
    assert_eq!(json["lines"], 3);
}

#[test]
fn decode_wrong_line_count_exits_60() {
    let output = beamcomm(&["--format", "json", "decode", "--text", "only one line"]);
    assert_eq!(output.status.code(), Some(60));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("decode output should be json");
    assert_eq!(json["ok"], false);
    assert_eq!(json["reason"], "status has 1 lines (expected 3)");
}

#[test]
fn decode_file_tolerates_final_newline() {
    let dir = unique_temp_dir("decode-file");
    let path = dir.join("status.txt");
    std::fs::write(&path, "a\nb\nRotating towards [rx] [msg:hi]\n").expect("status file");

    let output = beamcomm(&[
        "--format",
        "raw",
        "decode",
        "--file",
        path.to_str().expect("utf-8 temp path"),
    ]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hi\n");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn decode_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_beamcomm"))
        .args(["--log-level", "error", "--format", "raw", "decode"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("decode should start");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"a\nb\n[rx] [msg:from stdin]")
        .expect("stdin should accept status");

    let output = child.wait_with_output().expect("decode should finish");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "from stdin\n");
}

#[test]
fn simulate_emits_one_record_per_endpoint_per_tick() {
    let output = beamcomm(&[
        "--format", "json", "simulate", "--ticks", "3", "--interval", "1ms",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be json"))
        .collect();

    assert_eq!(records.len(), 6);
    assert!(records
        .iter()
        .all(|record| record["outcome"] == "dispatched"));
    assert_eq!(records[0]["endpoint"], "[rx]");
    assert_eq!(records[0]["payload"], "ping");
    assert_eq!(records[5]["endpoint"], "[tx]");
    assert_eq!(records[5]["payload"], "pong 5");
}

#[test]
fn simulate_echo_writes_log_lines_to_stderr() {
    let output = beamcomm(&[
        "--format", "raw", "simulate", "--ticks", "1", "--interval", "1ms", "--echo",
    ]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[rx] New Message: ping"));
    assert!(stderr.contains("[tx] New Message: pong 1"));
}
