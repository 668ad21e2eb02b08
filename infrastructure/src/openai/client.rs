//! OpenAI-compatible Model Client over `reqwest`.

use super::protocol::{ChatRequest, ChatResponse, WireMessage};
use crate::tools::JsonSchemaToolConverter;
use async_trait::async_trait;
use std::time::Instant;
use sysprobe_application::{AgentSettings, ModelClient, ModelError, ModelResponse};
use sysprobe_domain::{Message, ToolSpec};
use tracing::{debug, error};

/// Error bodies longer than this are cut before being reported.
const MAX_ERROR_BODY: usize = 2000;

/// Sends the conversation to `<base_url>/chat/completions` with bearer auth.
///
/// No retries and no request timeout.
pub struct OpenAiCompatibleClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiCompatibleClient {
    pub fn new(settings: &AgentSettings) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sysprobe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ModelError::Transport(e.to_string()))?;
        Ok(Self::with_http_client(
            http,
            &settings.api_key,
            &settings.base_url,
            &settings.model,
        ))
    }

    pub fn with_http_client(
        http: reqwest::Client,
        api_key: &str,
        base_url: &str,
        model: &str,
    ) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request<'a>(&'a self, messages: &[Message], tools: &ToolSpec) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: messages.iter().map(WireMessage::from).collect(),
            tools: JsonSchemaToolConverter.all_tools_schema(tools),
        }
    }
}

#[async_trait]
impl ModelClient for OpenAiCompatibleClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        messages: &[Message],
        tools: &ToolSpec,
    ) -> Result<ModelResponse, ModelError> {
        let start = Instant::now();
        let request = self.build_request(messages, tools);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Model request failed");
                ModelError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Model provider returned an error");
            return Err(ModelError::Status {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        debug!(
            model = %self.model,
            messages = messages.len(),
            choices = parsed.choices.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Model call finished"
        );

        Ok(ModelResponse::new(
            parsed
                .choices
                .into_iter()
                .map(|choice| Message::from(choice.message))
                .collect(),
        ))
    }
}

fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body;
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
