//! Conversation domain.
//!
//! - [`entities::Message`] / [`entities::ToolCall`] — what the model reads and writes
//! - [`state::Conversation`] — the append-only message log owned by the agent loop

pub mod entities;
pub mod state;

pub use entities::{Message, Role, ToolCall};
pub use state::Conversation;
