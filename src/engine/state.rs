use std::path::PathBuf;

/// Working state threaded through every evaluation. Keeping the directory
/// and search path here, instead of in process-wide globals, means `cd`
/// never calls `chdir` and the evaluator never reads the live environment:
/// children get the session directory via `Command::current_dir`.
pub struct Session {
    /// Logical working directory. `cd` mutates it; every spawn and the
    /// prompt read it.
    pub cwd: PathBuf,
    /// Directories searched, in order, to resolve external program names.
    /// Parsed from `PATH` once at startup.
    pub path_dirs: Vec<PathBuf>,
}

impl Session {
    /// Capture the starting directory and `PATH` from the process
    /// environment.
    pub fn from_env() -> Session {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let path_dirs = match std::env::var_os("PATH") {
            Some(paths) => std::env::split_paths(&paths).collect(),
            #[cfg(not(windows))]
            None => vec![
                PathBuf::from("/usr/local/bin"),
                PathBuf::from("/usr/bin"),
                PathBuf::from("/bin"),
            ],
            #[cfg(windows)]
            None => Vec::new(),
        };
        Session { cwd, path_dirs }
    }
}

/// What the interactive loop should do after a line has been evaluated.
/// Deliberately separate from the line's exit status: `exit` succeeds *and*
/// stops the loop.
pub enum ExecutionResult {
    KeepRunning,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_captures_cwd_and_path() {
        let session = Session::from_env();
        assert_eq!(session.cwd, std::env::current_dir().unwrap());
        // PATH is always set in a test environment.
        assert!(!session.path_dirs.is_empty());
    }
}
