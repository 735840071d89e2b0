use std::path::Path;
use std::process::{Child, ChildStdout, Stdio};

#[cfg(unix)]
use std::os::unix::process::CommandExt;

use anyhow::{Context, Result};

use crate::builtins::registry;
use crate::parser::{self, Command, Connector, LinePlan, Pipeline, Segment};
#[cfg(unix)]
use crate::signals;

use super::path::find_executable;
use super::state::{ExecutionResult, Session};

// ── Line evaluation ───────────────────────────────────────────────────────

/// Evaluate one input line against the session.
///
/// Returns the loop-continuation signal plus the line's effective status:
/// the exit status of the last command that actually ran (0 if nothing
/// ran). Syntax errors and failing commands are reported here and keep the
/// shell alive; `Err` is reserved for resource failures that end it.
pub fn evaluate_line(input: &str, session: &mut Session) -> Result<(ExecutionResult, i32)> {
    let plan = match parser::parse_line(input) {
        Ok(plan) => plan,
        Err(message) => {
            eprintln!("{message}");
            return Ok((ExecutionResult::KeepRunning, 2));
        }
    };

    match plan {
        LinePlan::Pipeline(pipeline) => {
            let code = run_pipeline(&pipeline, session)?;
            Ok((ExecutionResult::KeepRunning, code))
        }
        LinePlan::Segments(segments) => run_segments(&segments, session),
    }
}

/// Run `;`-separated segments left to right; `;` never short-circuits.
/// Within a segment, `&&` runs its command only after success and `||` only
/// after failure, judged on the effective status: a skipped command leaves
/// the previous status in force. Status bookkeeping is segment-local.
fn run_segments(segments: &[Segment], session: &mut Session) -> Result<(ExecutionResult, i32)> {
    let mut line_status = 0;

    for segment in segments {
        let mut status = 0;
        for entry in &segment.entries {
            let skip = match entry.connector {
                None => false,
                Some(Connector::And) => status != 0,
                Some(Connector::Or) => status == 0,
            };
            if skip {
                continue;
            }

            let (result, code) = run_command(&entry.command, session)?;
            status = code;
            line_status = code;
            if let ExecutionResult::Exit = result {
                return Ok((ExecutionResult::Exit, line_status));
            }
        }
    }

    Ok((ExecutionResult::KeepRunning, line_status))
}

/// Dispatch one command: builtins are intercepted before any process is
/// spawned; everything else becomes a child process.
fn run_command(command: &Command, session: &mut Session) -> Result<(ExecutionResult, i32)> {
    if let Some(info) = registry::find_command(&command.name) {
        return Ok((info.run)(&command.args, session));
    }
    let code = run_external(command, session)?;
    Ok((ExecutionResult::KeepRunning, code))
}

// ── Single external commands ──────────────────────────────────────────────

/// Spawn one external command and block until it finishes.
fn run_external(command: &Command, session: &Session) -> Result<i32> {
    let Some(program) = find_executable(session, &command.name) else {
        eprintln!("hyzen: command not found: {}", command.name);
        return Ok(127);
    };

    match os_command(&program, command, session).spawn() {
        Ok(mut child) => match child.wait() {
            Ok(status) => Ok(exit_code(status)),
            Err(e) => {
                eprintln!("hyzen: failed to wait for '{}': {}", command.name, e);
                Ok(1)
            }
        },
        Err(e) if fatal_spawn_error(&e) => {
            Err(e).with_context(|| format!("failed to spawn '{}'", command.name))
        }
        Err(e) => {
            report_spawn_error(&command.name, &e);
            Ok(spawn_failure_code(&e))
        }
    }
}

// ── Pipeline execution ────────────────────────────────────────────────────

/// What became of one pipeline stage at spawn time.
enum Stage {
    Spawned(Child),
    Failed(i32),
}

/// Run every stage of a pipeline concurrently, stdout of each feeding stdin
/// of the next, then wait for all of them. The pipeline's status is the
/// last stage's status.
///
/// A stage that cannot be resolved or spawned is reported and skipped
/// without aborting the rest: its downstream neighbour reads end-of-input
/// (`Stdio::null`), and dropping the orphaned upstream handle closes the
/// read end so a writing upstream takes EPIPE, just as it would against a
/// child that died at exec. Pipe ends travel by ownership: each captured
/// stdout is moved into exactly one stdin or dropped here, so no write end
/// outlives its stage to keep a reader blocked.
fn run_pipeline(pipeline: &Pipeline, session: &Session) -> Result<i32> {
    let last_idx = pipeline.commands.len() - 1;
    let mut stages: Vec<Stage> = Vec::with_capacity(pipeline.commands.len());
    let mut prev_stdout: Option<ChildStdout> = None;

    for (i, command) in pipeline.commands.iter().enumerate() {
        let upstream = prev_stdout.take();

        let Some(program) = find_executable(session, &command.name) else {
            eprintln!("hyzen: command not found: {}", command.name);
            stages.push(Stage::Failed(127));
            continue;
        };

        let mut invocation = os_command(&program, command, session);
        if i > 0 {
            match upstream {
                Some(stdout) => {
                    invocation.stdin(Stdio::from(stdout));
                }
                None => {
                    invocation.stdin(Stdio::null());
                }
            }
        }
        if i != last_idx {
            invocation.stdout(Stdio::piped());
        }

        match invocation.spawn() {
            Ok(mut child) => {
                if i != last_idx {
                    prev_stdout = child.stdout.take();
                }
                stages.push(Stage::Spawned(child));
            }
            Err(e) if fatal_spawn_error(&e) => {
                return Err(e).with_context(|| format!("failed to spawn '{}'", command.name));
            }
            Err(e) => {
                report_spawn_error(&command.name, &e);
                stages.push(Stage::Failed(spawn_failure_code(&e)));
            }
        }
    }

    // Every stage gets waited for before the prompt comes back.
    let mut last_status = 127;
    for (stage, command) in stages.into_iter().zip(&pipeline.commands) {
        last_status = match stage {
            Stage::Spawned(mut child) => match child.wait() {
                Ok(status) => exit_code(status),
                Err(e) => {
                    eprintln!("hyzen: failed to wait for '{}': {}", command.name, e);
                    1
                }
            },
            Stage::Failed(code) => code,
        };
    }
    Ok(last_status)
}

// ── Spawn plumbing ────────────────────────────────────────────────────────

/// Build the OS-level invocation for one resolved command: arguments, the
/// session directory as the child's working directory, and (on unix)
/// default signal dispositions restored between fork and exec.
fn os_command(program: &Path, command: &Command, session: &Session) -> std::process::Command {
    let mut invocation = std::process::Command::new(program);
    invocation.args(&command.args);
    invocation.current_dir(&session.cwd);

    #[cfg(unix)]
    unsafe {
        invocation.pre_exec(|| {
            signals::restore_default();
            Ok(())
        });
    }

    invocation
}

/// Spawn failures that end the whole shell: the system refused to create a
/// process or has no descriptors left for its plumbing. Anything else —
/// exec-format problems included — is a failure of that one command and the
/// shell keeps running.
fn fatal_spawn_error(e: &std::io::Error) -> bool {
    if matches!(
        e.kind(),
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::OutOfMemory
    ) {
        return true;
    }
    #[cfg(unix)]
    {
        use nix::errno::Errno;
        if matches!(
            e.raw_os_error().map(Errno::from_raw),
            Some(Errno::EMFILE | Errno::ENFILE)
        ) {
            return true;
        }
    }
    false
}

fn spawn_failure_code(e: &std::io::Error) -> i32 {
    match e.kind() {
        std::io::ErrorKind::NotFound => 127,
        _ => 126,
    }
}

fn report_spawn_error(name: &str, e: &std::io::Error) {
    match e.kind() {
        std::io::ErrorKind::NotFound => eprintln!("hyzen: command not found: {name}"),
        std::io::ErrorKind::PermissionDenied => eprintln!("hyzen: permission denied: {name}"),
        _ => eprintln!("hyzen: cannot execute '{name}': {e}"),
    }
}

/// Shell-convention exit code for a finished child: 128+N for signal N.
fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

// ── Tests ──────────────────────────────────────────────────────────────────
