use crate::builtins;
use crate::engine::{ExecutionResult, Session};

pub type BuiltinRunner = fn(&[String], &mut Session) -> (ExecutionResult, i32);

pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub run: BuiltinRunner,
}

/// Dispatch table, checked in order before any process is spawned. Only an
/// exact argv[0] match counts; `/bin/echo` is not the builtin.
pub const BUILTINS: &[CommandInfo] = &[
    builtins::exit::COMMAND_INFO,
    builtins::cd::COMMAND_INFO,
    builtins::help::COMMAND_INFO,
    builtins::echo::COMMAND_INFO,
    builtins::hystat::COMMAND_INFO,
];

pub fn find_command(name: &str) -> Option<&'static CommandInfo> {
    BUILTINS.iter().find(|cmd| cmd.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_builtins_by_exact_name() {
        assert!(find_command("cd").is_some());
        assert!(find_command("hystat").is_some());
        assert!(find_command("/bin/echo").is_none());
        assert!(find_command("ls").is_none());
    }
}
