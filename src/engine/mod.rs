mod execution;
pub mod path;
mod state;

// Re-export the public API so that external code (`main.rs`, `builtins/`)
// can use `engine::Session`, `engine::ExecutionResult`, etc.
pub use execution::evaluate_line;
pub use state::{ExecutionResult, Session};
