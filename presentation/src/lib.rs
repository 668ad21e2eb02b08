//! Presentation layer for sysprobe
//!
//! This crate contains the CLI definition and the console adapters for the
//! agent loop: line input, the confirmation prompt and progress output.

pub mod agent;
pub mod cli;

// Re-export commonly used types
pub use agent::{ConsoleConfirmation, ConsoleInput, ConsoleProgress, print_welcome};
pub use cli::commands::Cli;
