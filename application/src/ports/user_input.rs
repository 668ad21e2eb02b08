//! User input port: where the agent loop gets the next request from.

use thiserror::Error;

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// A line of text, without its line terminator
    Line(String),
    /// The user interrupted the current line (Ctrl-C)
    Interrupted,
    /// End of input (Ctrl-D or closed stdin)
    EndOfInput,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(String),
}

/// Port for reading user turns.
///
/// Reads block the session; it is strictly sequential.
pub trait UserInputPort {
    fn read_input(&mut self) -> Result<UserInput, InputError>;
}
