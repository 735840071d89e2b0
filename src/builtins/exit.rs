use crate::builtins::registry::CommandInfo;
use crate::engine::{ExecutionResult, Session};

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "exit",
    description: "Exit the shell.",
    usage: "exit",
    run,
};

/// Signals the interactive loop to stop reading input. Arguments are
/// ignored.
pub fn run(_args: &[String], _session: &mut Session) -> (ExecutionResult, i32) {
    (ExecutionResult::Exit, 0)
}
