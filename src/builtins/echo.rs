use crate::builtins::registry::CommandInfo;
use crate::engine::{ExecutionResult, Session};

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "echo",
    description: "Write arguments to the standard output.",
    usage: "echo [arg ...]",
    run,
};

/// Arguments joined by single spaces, then a newline; bare `echo` prints
/// just the newline. No flags, no escapes.
pub fn run(args: &[String], _session: &mut Session) -> (ExecutionResult, i32) {
    println!("{}", args.join(" "));
    (ExecutionResult::KeepRunning, 0)
}
