//! Final-answer cleanup.

const THOUGHT_PREFIX: &str = "Thought:";
const FINAL_ANSWER_PREFIX: &str = "Final Answer:";

/// Remove leading ReAct scaffolding from a final answer.
///
/// The text is trimmed, then a literal leading `Thought:` is removed, then a
/// literal leading `Final Answer:`, trimming after each step.
pub fn strip_scaffolding(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix(THOUGHT_PREFIX).unwrap_or(text).trim();
    text.strip_prefix(FINAL_ANSWER_PREFIX).unwrap_or(text).trim()
}
