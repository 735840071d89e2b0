mod builtins;
mod engine;
mod parser;
mod signals;

use std::path::PathBuf;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use engine::{ExecutionResult, Session};

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".hyzen_history"))
}

/// `Hy-shell:<dir>$ ` with the session directory shortened to `~` under
/// the user's home. Display only: no tilde handling happens on input.
fn get_prompt(session: &Session) -> String {
    let cwd = &session.cwd;
    let path_str = if let Some(home) = dirs::home_dir() {
        match cwd.strip_prefix(&home) {
            Ok(relative) if relative.as_os_str().is_empty() => "~".to_string(),
            Ok(relative) => format!("~/{}", relative.display()),
            Err(_) => cwd.display().to_string(),
        }
    } else {
        cwd.display().to_string()
    };

    format!("\x1b[1;36mHy-shell\x1b[0m:\x1b[1;34m{}\x1b[0m$ ", path_str)
}

fn print_banner() {
    println!("\x1b[1;36m=========================================");
    println!("         Welcome to HYZEN shell");
    println!("      Type 'help' to list builtins");
    println!("=========================================\x1b[0m");
}

fn main() -> Result<()> {
    signals::init();
    print_banner();

    let mut rl = DefaultEditor::new()?;
    if let Some(path) = history_path() {
        let _ = rl.load_history(&path);
    }

    let mut session = Session::from_env();

    loop {
        let prompt = get_prompt(&session);
        match rl.readline(&prompt) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);

                let (result, _status) = engine::evaluate_line(input, &mut session)?;
                if let ExecutionResult::Exit = result {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("hyzen: {err}");
                break;
            }
        }
    }

    if let Some(path) = history_path() {
        let _ = rl.save_history(&path);
    }
    Ok(())
}
