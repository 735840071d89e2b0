use std::ffi::OsStr;
use std::path::Path;

use sysinfo::{ProcessesToUpdate, System};

use crate::builtins::registry::CommandInfo;
use crate::engine::path::find_executable;
use crate::engine::{ExecutionResult, Session};

pub const COMMAND_INFO: CommandInfo = CommandInfo {
    name: "hystat",
    description: "Show resource usage of a program's running processes.",
    usage: "hystat <program>",
    run: hystat_runner,
};

pub fn hystat_runner(args: &[String], session: &mut Session) -> (ExecutionResult, i32) {
    let Some(name) = args.first() else {
        eprintln!("hyzen: expected argument to \"hystat\"");
        return (ExecutionResult::KeepRunning, 1);
    };

    // The name has to resolve to something launchable before the process
    // table is consulted.
    if find_executable(session, name).is_none() {
        eprintln!("hyzen: '{}' is not installed or not in PATH.", name);
        return (ExecutionResult::KeepRunning, 1);
    }

    (ExecutionResult::KeepRunning, print_stats(name))
}

/// List every running process whose executable base name matches, with
/// `ps`-like columns.
fn print_stats(name: &str) -> i32 {
    let mut system = System::new_all();
    // cpu_usage needs a second sample after a short delay to mean anything.
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    system.refresh_processes(ProcessesToUpdate::All, true);

    let filter = Path::new(name).file_name().unwrap_or_else(|| OsStr::new(name));
    let mut processes: Vec<_> = system.processes_by_exact_name(filter).collect();
    processes.sort_by_key(|process| process.pid());

    if processes.is_empty() {
        eprintln!("hyzen: no running process matches '{}'", name);
        return 1;
    }

    let total_memory = system.total_memory().max(1);
    println!("{:>8} {:>6} {:>6} {:>12}  NAME", "PID", "%CPU", "%MEM", "ELAPSED");
    for process in processes {
        let mem_pct = process.memory() as f64 / total_memory as f64 * 100.0;
        println!(
            "{:>8} {:>6.1} {:>6.1} {:>12}  {}",
            process.pid().as_u32(),
            process.cpu_usage(),
            mem_pct,
            format_elapsed(process.run_time()),
            process.name().to_string_lossy(),
        );
    }
    0
}

/// Render a run time in seconds the way `ps` renders etime:
/// `[[dd-]hh:]mm:ss`.
fn format_elapsed(secs: u64) -> String {
    let (days, rem) = (secs / 86_400, secs % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let (minutes, seconds) = (rem / 60, rem % 60);
    if days > 0 {
        format!("{days}-{hours:02}:{minutes:02}:{seconds:02}")
    } else if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}
