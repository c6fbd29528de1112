use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Captured chat-completions body with an unterminated final record.
const CAPTURED_BODY: &str = "\
: keepalive\n\
\n\
id: 1\n\
event: delta\n\
data: {\"content\":\"Hel\"}\n\
\n\
id: 2\n\
event: delta\n\
data: {\"content\":\"lo\"}\n\
\n\
data: trailing";

/// Helper to create an `sse-frame` command isolated from the caller's env.
fn sse_frame_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("sse-frame");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("SSE_FRAME_MAX_BUFFER_BYTES");
    cmd.env_remove("SSE_FRAME_CHUNK_SIZE");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_capture(tmp: &TempDir, body: &str) -> std::path::PathBuf {
    let path = tmp.path().join("body.sse");
    fs::write(&path, body).unwrap();
    path
}

// ============================================================================
// Happy path tests
// ============================================================================

#[test]
fn help_flag() {
    sse_frame_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-buffer-bytes"))
        .stdout(predicate::str::contains("--flush-on-close"));
}

#[test]
fn json_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_capture(&tmp, CAPTURED_BODY);

    sse_frame_cmd()
        .arg("-f")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "{\"id\":\"1\",\"event\":\"delta\",\"data\":\"{\\\"content\\\":\\\"Hel\\\"}\"}\n\
             {\"id\":\"2\",\"event\":\"delta\",\"data\":\"{\\\"content\\\":\\\"lo\\\"}\"}\n",
        );
}

#[test]
fn json_from_stdin() {
    sse_frame_cmd()
        .write_stdin("data: a\n\nretry: 1500\n\ndata: [DONE]\n\n")
        .assert()
        .success()
        .stdout("{\"data\":\"a\"}\n{\"data\":\"\",\"retry\":1500}\n{\"data\":\"[DONE]\"}\n");
}

#[test]
fn dash_reads_stdin_in_small_chunks() {
    sse_frame_cmd()
        .args(["-f", "-", "--chunk-size", "3"])
        .write_stdin("id: 7\r\ndata: one\r\n\r\ndata: two\r\n\r\n")
        .assert()
        .success()
        .stdout("{\"id\":\"7\",\"data\":\"one\"}\n{\"data\":\"two\"}\n");
}

#[test]
fn text_output_discards_tail_by_default() {
    let tmp = TempDir::new().unwrap();
    let path = write_capture(&tmp, CAPTURED_BODY);

    sse_frame_cmd()
        .arg("-f")
        .arg(&path)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(
            "id: 1\nevent: delta\ndata: {\"content\":\"Hel\"}\n\n\
             id: 2\nevent: delta\ndata: {\"content\":\"lo\"}\n\n",
        );
}

#[test]
fn text_output_flushes_tail_on_close() {
    let tmp = TempDir::new().unwrap();
    let path = write_capture(&tmp, CAPTURED_BODY);

    sse_frame_cmd()
        .arg("-f")
        .arg(&path)
        .args(["--format", "text", "--flush-on-close"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "data: {\"content\":\"lo\"}\n\ndata: trailing\n\n",
        ));
}

#[test]
fn zero_limit_is_unbounded() {
    let long = format!("data: {}\n\n", "x".repeat(64));
    sse_frame_cmd()
        .args(["--max-buffer-bytes", "0", "--chunk-size", "4"])
        .write_stdin(long)
        .assert()
        .success()
        .stdout(predicate::str::contains("xxxx"));
}

// ============================================================================
// Error tests
// ============================================================================

#[test]
fn overflow_exits_with_error_and_hint() {
    let tmp = TempDir::new().unwrap();
    let path = write_capture(&tmp, "data: a\n\ndata: way too long");

    sse_frame_cmd()
        .arg("-f")
        .arg(&path)
        .args(["--max-buffer-bytes", "8"])
        .assert()
        .code(1)
        .stdout("{\"data\":\"a\"}\n")
        .stderr(predicate::str::contains(
            "error: SSE buffer overflow: 18 pending bytes exceed limit of 8 bytes",
        ))
        .stderr(predicate::str::contains("help:"))
        .stderr(predicate::str::contains("--max-buffer-bytes"));
}

#[test]
fn overflow_limit_from_env() {
    sse_frame_cmd()
        .env("SSE_FRAME_MAX_BUFFER_BYTES", "8")
        .write_stdin("data: way too long")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exceed limit of 8 bytes"));
}

#[test]
fn zero_chunk_size_is_usage_error() {
    sse_frame_cmd()
        .args(["--chunk-size", "0"])
        .write_stdin("data: a\n\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("read_chunk_size must be > 0"));
}

#[test]
fn missing_file_is_input_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.sse");

    sse_frame_cmd()
        .arg("-f")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn verbose_quiet_conflict() {
    sse_frame_cmd()
        .args(["--verbose", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
