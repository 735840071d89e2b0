use std::path::Path;

use crate::builtins::registry::CommandInfo;
use crate::engine::path::normalize_path;
use crate::engine::{ExecutionResult, Session};

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "cd",
    description: "Change the shell working directory.",
    usage: "cd <dir>",
    run: cd_runner,
};

pub fn cd_runner(args: &[String], session: &mut Session) -> (ExecutionResult, i32) {
    let Some(target) = args.first() else {
        eprintln!("hyzen: expected argument to \"cd\"");
        return (ExecutionResult::KeepRunning, 1);
    };

    // Arguments past the first are ignored.
    match run(target, session) {
        Ok(()) => (ExecutionResult::KeepRunning, 0),
        Err(e) => {
            eprintln!("hyzen: cd: {}", e);
            (ExecutionResult::KeepRunning, 1)
        }
    }
}

/// Change the session directory. Relative targets resolve against the
/// session's own directory, not the shell process's; on any error the
/// session is left untouched.
pub fn run(target: &str, session: &mut Session) -> Result<(), String> {
    let requested = Path::new(target);
    let candidate = if requested.is_absolute() {
        normalize_path(requested)
    } else {
        normalize_path(&session.cwd.join(requested))
    };

    if !candidate.exists() {
        return Err(format!("no such file or directory: {}", candidate.display()));
    }
    if !candidate.is_dir() {
        return Err(format!("not a directory: {}", candidate.display()));
    }

    session.cwd = candidate;
    Ok(())
}
