//! Model Client adapter for OpenAI-compatible chat-completions APIs.

mod client;
mod protocol;

pub use client::OpenAiCompatibleClient;
