//! Model Client port
//!
//! Defines the interface for talking to a chat-completions style language
//! model. The model sees the whole conversation and the tool catalog on
//! every call and answers with the next assistant message.

use async_trait::async_trait;
use sysprobe_domain::{Message, ToolSpec};
use thiserror::Error;

/// Errors that can occur while calling the model provider.
///
/// None of these end the session: the agent loop reports them and waits for
/// new user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model returned no choices")]
    EmptyChoices,
}

/// Candidate assistant messages returned by one model call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelResponse {
    pub choices: Vec<Message>,
}

impl ModelResponse {
    pub fn new(choices: Vec<Message>) -> Self {
        Self { choices }
    }

    /// A response with a single choice.
    pub fn single(message: Message) -> Self {
        Self {
            choices: vec![message],
        }
    }

    /// The first choice, or [`ModelError::EmptyChoices`].
    pub fn into_first_choice(self) -> Result<Message, ModelError> {
        self.choices.into_iter().next().ok_or(ModelError::EmptyChoices)
    }
}

/// Port for model completion.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Name of the model requests are sent to
    fn model(&self) -> &str;

    /// Send the full conversation plus the tool catalog and return the reply.
    async fn complete(
        &self,
        messages: &[Message],
        tools: &ToolSpec,
    ) -> Result<ModelResponse, ModelError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_first_choice() {
        let response = ModelResponse::new(vec![Message::assistant("a"), Message::assistant("b")]);
        assert_eq!(response.into_first_choice().unwrap().text_content(), "a");
        assert_eq!(
            ModelResponse::default().into_first_choice(),
            Err(ModelError::EmptyChoices)
        );
    }
}
