//! Confirmation gate port.
//!
//! Every tool call the model requests is shown to a human before it runs.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ConfirmationPort`] - defined here in application layer
//! - **Adapter**: `ConsoleConfirmation` - implemented in presentation layer

use async_trait::async_trait;
use sysprobe_domain::{HumanDecision, ToolCall};
use thiserror::Error;

/// Error type for the confirmation gate.
///
/// These are failures to obtain an answer, not a "no" from the user. The
/// agent loop treats either one as a decline for every call still pending.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationError {
    /// Input stream reached end-of-file.
    #[error("Input closed")]
    Closed,
    /// Input/output error (e.g., terminal read failure).
    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for asking the human whether a tool call may run.
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    async fn confirm(&self, call: &ToolCall) -> Result<HumanDecision, ConfirmationError>;
}
