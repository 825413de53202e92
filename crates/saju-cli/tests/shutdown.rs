//! `saju serve` must exit cleanly when the client closes stdin.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn spawn_serve(home: &TempDir) -> std::process::Child {
    Command::new(assert_cmd::cargo::cargo_bin!("saju"))
        .arg("serve")
        .env("HOME", home.path())
        .env_remove("SAJU_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn saju serve")
}

/// Newline-delimited JSON-RPC, as rmcp's stdio transport expects.
fn send_jsonrpc(stdin: &mut impl Write, msg: &serde_json::Value) {
    let line = serde_json::to_string(msg).unwrap();
    writeln!(stdin, "{line}").unwrap();
    stdin.flush().unwrap();
}

fn mcp_handshake(child: &mut std::process::Child) {
    let stdin = child.stdin.as_mut().expect("stdin pipe");
    send_jsonrpc(
        stdin,
        &serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "test", "version": "0.1.0" }
            }
        }),
    );
    std::thread::sleep(Duration::from_millis(300));
    send_jsonrpc(
        stdin,
        &serde_json::json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }),
    );
    std::thread::sleep(Duration::from_millis(200));
}

#[test]
fn serve_exits_on_early_stdin_eof() {
    let home = TempDir::new().unwrap();
    let mut child = spawn_serve(&home);
    std::thread::sleep(Duration::from_millis(300));

    drop(child.stdin.take());

    let start = Instant::now();
    let output = child.wait_with_output().expect("wait");
    assert!(
        output.status.success(),
        "early stdin EOF should exit 0, got {}",
        output.status
    );
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn serve_exits_on_stdin_eof_after_handshake() {
    let home = TempDir::new().unwrap();
    let mut child = spawn_serve(&home);
    mcp_handshake(&mut child);

    drop(child.stdin.take());

    let start = Instant::now();
    let output = child.wait_with_output().expect("wait");
    assert!(
        output.status.success(),
        "saju serve should exit 0 on stdin EOF, got {}",
        output.status
    );
    assert!(start.elapsed() < Duration::from_secs(2));
}
