//! Console adapters for the agent loop

pub mod human_intervention;
pub mod progress;
pub mod repl;

pub use human_intervention::{CONFIRMATION_PROMPT, ConsoleConfirmation};
pub use progress::ConsoleProgress;
pub use repl::{ConsoleInput, print_welcome};
