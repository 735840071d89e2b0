use std::io::Write;
use std::process::{Command, Stdio};

fn run_shell(lines: &[&str]) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_hyzen"))
        .env("HOME", std::env::temp_dir())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hyzen");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        for line in lines {
            writeln!(stdin, "{line}").expect("write line");
        }
    }

    child.wait_with_output().expect("wait output")
}

#[cfg(unix)]
#[test]
fn pipe_feeds_stdout_into_next_stdin() {
    let output = run_shell(&["printf abc | wc -c"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains('3'), "stdout was: {stdout}");
}

#[cfg(unix)]
#[test]
fn three_stage_pipeline_flows_end_to_end() {
    let output = run_shell(&["echo once | cat | wc -l"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains('1'), "stdout was: {stdout}");
}

// `head` exits after one line and `yes` must die of the broken pipe rather
// than spin forever; the shell then reads the next line normally.
#[cfg(unix)]
#[test]
fn broken_pipe_tears_down_pipeline() {
    let output = run_shell(&["yes | head -1", "echo AFTER"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains('y'), "stdout was: {stdout}");
    assert!(stdout.contains("AFTER"), "stdout was: {stdout}");
}

#[cfg(unix)]
#[test]
fn failed_first_stage_keeps_later_stages_running() {
    let output = run_shell(&["definitely-not-a-command-xyz | echo STILL"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("command not found"), "stderr was: {stderr}");
    assert!(stdout.contains("STILL"), "stdout was: {stdout}");
}

#[cfg(unix)]
#[test]
fn failed_last_stage_keeps_shell_running() {
    let output = run_shell(&["echo once | definitely-not-a-command-xyz", "echo NEXT"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("command not found"), "stderr was: {stderr}");
    assert!(stdout.contains("NEXT"), "stdout was: {stdout}");
}

#[cfg(unix)]
#[test]
fn failing_pipeline_does_not_stop_the_shell() {
    let output = run_shell(&["true | false", "echo NEXT"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NEXT"), "stdout was: {stdout}");
}

#[test]
fn empty_stage_is_a_syntax_error() {
    let output = run_shell(&["echo once | | wc -l", "echo STILL"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("syntax error"), "stderr was: {stderr}");
    assert!(stdout.contains("STILL"), "stdout was: {stdout}");
}
