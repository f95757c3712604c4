use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_zodiac-extract"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_extract_from_stdin() {
    let doc = r#"{"items": [
        {"itemKey": "DRAGON", "id": "C"},
        {"itemKey": "MOUSE", "id": "B"},
        {"itemKey": "MONKEY", "id": "A"}
    ]}"#;
    let output = run(&["extract", "--reward", "UPOINT_200K"], doc);
    assert_eq!(output.status.code(), Some(0));

    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        printed,
        json!({"rewardType": "UPOINT_200K", "materialIds": ["A", "B", "C"], "campaignId": "TCB_ZODIAC"})
    );
}

#[test]
fn test_extract_failure_exits_one() {
    let doc = r#"{"items": [{"itemKey": "OX", "id": "o1"}]}"#;
    let output = run(&["extract", "-r", "UPOINT_68686", "-a", "OX"], doc);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Only found 1 out of 3 OX items"));
}

#[test]
fn test_invalid_utf8_stdin_exits_one() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_zodiac-extract"))
        .args(["extract", "-r", "UPOINT_100K_1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"{\"items\":[{\"itemKey\":\"MOUSE\",\"id\":\"m\xffx\"}]}")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_rewards_lists_registry() {
    let output = run(&["rewards"], "");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.contains("UPOINT_100K_3"));
    assert!(stdout.contains("DRAGON, ROOSTER"));
}

#[test]
fn test_bad_arguments_exit_two() {
    let output = run(&["extract"], "");
    assert_eq!(output.status.code(), Some(2));
}
