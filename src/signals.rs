#[cfg(unix)]
use nix::sys::signal::{signal, SigHandler, Signal};

/// Initialize shell signal handlers
#[cfg(unix)]
pub fn init() {
    unsafe {
        // Ignore SIGINT and SIGQUIT so a Ctrl+C / Ctrl+\ aimed at a child
        // never takes the shell down with it.
        // Note: Rustyline will override SIGINT during readline() calls, which is fine.
        signal(Signal::SIGINT, SigHandler::SigIgn).expect("Failed to ignore SIGINT");
        signal(Signal::SIGQUIT, SigHandler::SigIgn).expect("Failed to ignore SIGQUIT");
    }
}

/// Restore default dispositions in a forked child, between fork and exec.
/// SIGPIPE is included: Rust starts processes with it ignored and the
/// ignored disposition survives exec, which would leave pipeline children
/// writing into closed pipes instead of dying.
#[cfg(unix)]
pub fn restore_default() {
    // Runs on the child side of fork: keep it async-signal-safe, no panics.
    unsafe {
        let _ = signal(Signal::SIGINT, SigHandler::SigDfl);
        let _ = signal(Signal::SIGQUIT, SigHandler::SigDfl);
        let _ = signal(Signal::SIGPIPE, SigHandler::SigDfl);
    }
}

#[cfg(windows)]
pub fn init() {
    // Basic Windows console handling is handled by rustyline for Ctrl-C
}

#[cfg(windows)]
#[allow(dead_code)]
pub fn restore_default() {
    // No-op on Windows
}
