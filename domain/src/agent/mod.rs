//! Agent domain module
//!
//! The states of the interactive loop and the small pure rules it applies
//! to human input and model output.

pub mod answer;
pub mod input;
pub mod loop_state;

pub use answer::strip_scaffolding;
pub use input::{HumanDecision, is_exit_keyword};
pub use loop_state::AgentLoopState;
