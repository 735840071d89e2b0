use std::path::{Component, Path, PathBuf};

use super::state::Session;

/// Normalize a path logically (resolving `.` and `..`) without hitting the
/// disk. Symlinks are left alone, so the session keeps the directory name
/// the user navigated through.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {
                    // At root, .. does nothing
                }
                _ => normalized.push(Component::ParentDir),
            },
            _ => normalized.push(component),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(Component::CurDir);
    }

    normalized
}

/// Resolve a program name against the session.
///
/// Names containing a path separator are taken literally: absolute ones
/// as-is, relative ones against the session directory. Bare names are
/// searched through `session.path_dirs` in order. Either way the result is
/// an absolute, normalized path, so spawning never depends on the shell
/// process's own working directory.
pub fn find_executable(session: &Session, name: &str) -> Option<PathBuf> {
    if name.contains('/') || (cfg!(windows) && name.contains('\\')) {
        let candidate = Path::new(name);
        let absolute = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            session.cwd.join(candidate)
        };
        let absolute = normalize_path(&absolute);
        return is_executable(&absolute).then_some(absolute);
    }

    session
        .path_dirs
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

/// A candidate must be a regular file, and on unix carry an execute bit.
fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = path.metadata() else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_resolves_dots() {
        assert_eq!(normalize_path(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize_path(Path::new("/a/./b")), PathBuf::from("/a/b"));
        assert_eq!(normalize_path(Path::new("/../x")), PathBuf::from("/x"));
        assert_eq!(normalize_path(Path::new("")), PathBuf::from("."));
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        fn session_with_dirs(dirs: Vec<PathBuf>) -> Session {
            Session { cwd: PathBuf::from("/"), path_dirs: dirs }
        }

        #[test]
        fn test_finds_sh_on_standard_path() {
            let session = session_with_dirs(vec![PathBuf::from("/bin"), PathBuf::from("/usr/bin")]);
            let found = find_executable(&session, "sh").expect("sh should resolve");
            assert!(found.is_absolute());
            assert_eq!(found.file_name().unwrap(), "sh");
        }

        #[test]
        fn test_unknown_name_does_not_resolve() {
            let session = session_with_dirs(vec![PathBuf::from("/bin")]);
            assert!(find_executable(&session, "definitely-not-a-real-binary-4471").is_none());
        }

        #[test]
        fn test_absolute_path_resolves_directly() {
            let session = session_with_dirs(Vec::new());
            assert_eq!(find_executable(&session, "/bin/sh"), Some(PathBuf::from("/bin/sh")));
        }

        #[test]
        fn test_relative_path_resolves_against_session_cwd() {
            let dir = tempfile::tempdir().unwrap();
            let script = dir.path().join("run.sh");
            fs::write(&script, "#!/bin/sh\n").unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

            let session = Session { cwd: dir.path().to_path_buf(), path_dirs: Vec::new() };
            let found = find_executable(&session, "./run.sh").expect("script should resolve");
            assert_eq!(found, normalize_path(&script));
        }

        #[test]
        fn test_non_executable_file_is_rejected() {
            let dir = tempfile::tempdir().unwrap();
            let plain = dir.path().join("data");
            fs::write(&plain, "not a program").unwrap();
            fs::set_permissions(&plain, fs::Permissions::from_mode(0o644)).unwrap();

            let session = session_with_dirs(vec![dir.path().to_path_buf()]);
            assert!(find_executable(&session, "data").is_none());
        }
    }
}
