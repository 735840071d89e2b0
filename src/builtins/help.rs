use crate::builtins::registry::{CommandInfo, BUILTINS};
use crate::engine::{ExecutionResult, Session};

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "help",
    description: "Display information about builtin commands.",
    usage: "help",
    run: help_runner,
};

/// Static usage summary assembled from the dispatch table. Arguments are
/// ignored; no side effects.
pub fn help_runner(_args: &[String], _session: &mut Session) -> (ExecutionResult, i32) {
    let mut help_text = String::new();
    help_text.push_str("hyzen, version 0.1.0\n");
    help_text.push_str("These commands are handled by the shell itself:\n\n");

    let max_len = BUILTINS.iter().map(|b| b.usage.len()).max().unwrap_or(0);
    for builtin in BUILTINS {
        help_text.push_str(&format!(" {:<width$}  {}\n", builtin.usage, builtin.description, width = max_len));
    }

    help_text.push_str("\nAnything else is resolved from PATH and run as a child process.\n");
    print!("{}", help_text);
    (ExecutionResult::KeepRunning, 0)
}
