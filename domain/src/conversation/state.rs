//! Conversation state: the model's working memory for one session.

use super::entities::{Message, Role, ToolCall};

/// Append-only, ordered log of messages for a single session.
///
/// Insertion order is temporal order. Messages are never reordered,
/// removed or edited once appended. The only mutators are the four
/// `append_*` methods, none of which can fail.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a conversation that starts with the given system prompt.
    pub fn with_system_prompt(prompt: impl Into<String>) -> Self {
        let mut conversation = Self::new();
        conversation.append_system(prompt);
        conversation
    }

    /// Append the system message.
    ///
    /// A conversation holds at most one system message; later calls are ignored.
    pub fn append_system(&mut self, content: impl Into<String>) {
        if self.has_system_message() {
            return;
        }
        self.messages.push(Message::system(content));
    }

    pub fn append_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Append a fully assembled assistant message. The role is forced to
    /// `assistant` regardless of what the caller supplied.
    pub fn append_assistant(&mut self, mut message: Message) {
        message.role = Role::Assistant;
        message.tool_call_id = None;
        self.messages.push(message);
    }

    /// Record the observation for a tool call issued by the latest assistant message.
    pub fn append_tool_observation(
        &mut self,
        tool_call_id: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.messages.push(Message::tool(tool_call_id, content));
    }

    /// Read-only view of every message, in order.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn has_system_message(&self) -> bool {
        self.messages.iter().any(|m| m.role == Role::System)
    }

    /// Tool calls of the most recent assistant message that have no tool
    /// message yet, in issue order.
    pub fn pending_tool_calls(&self) -> &[ToolCall] {
        let Some(index) = self
            .messages
            .iter()
            .rposition(|m| m.role == Role::Assistant)
        else {
            return &[];
        };
        let calls = &self.messages[index].tool_calls;
        let answered = self.messages[index + 1..]
            .iter()
            .filter(|m| m.role == Role::Tool)
            .count();
        &calls[answered.min(calls.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant_calling(ids: &[&str]) -> Message {
        Message::assistant_with_tool_calls(
            Some("Thought: checking".to_string()),
            ids.iter()
                .map(|id| ToolCall::new(*id, "ps", "{}"))
                .collect(),
        )
    }

    #[test]
    fn test_only_one_system_message() {
        let mut conversation = Conversation::with_system_prompt("first");
        conversation.append_system("second");

        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.snapshot()[0].text_content(), "first");
    }

    #[test]
    fn test_append_assistant_forces_role() {
        let mut conversation = Conversation::new();
        let mut message = Message::user("pretending");
        message.tool_call_id = Some("bogus".to_string());

        conversation.append_assistant(message);

        let last = conversation.last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert!(last.tool_call_id.is_none());
    }

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut conversation = Conversation::with_system_prompt("sys");
        conversation.append_user("list processes");
        conversation.append_assistant(assistant_calling(&["call_1"]));
        conversation.append_tool_observation("call_1", "PID TTY");
        conversation.append_assistant(Message::assistant("done"));

        let roles: Vec<Role> = conversation.snapshot().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::System,
                Role::User,
                Role::Assistant,
                Role::Tool,
                Role::Assistant
            ]
        );
    }

    #[test]
    fn test_pending_tool_calls_shrink_in_issue_order() {
        let mut conversation = Conversation::new();
        conversation.append_user("two things");
        conversation.append_assistant(assistant_calling(&["a", "b"]));

        let pending: Vec<&str> = conversation
            .pending_tool_calls()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(pending, vec!["a", "b"]);

        conversation.append_tool_observation("a", "ok");
        assert_eq!(conversation.pending_tool_calls()[0].id, "b");

        conversation.append_tool_observation("b", "ok");
        assert!(conversation.pending_tool_calls().is_empty());
    }

    #[test]
    fn test_pending_tool_calls_empty_without_assistant() {
        let conversation = Conversation::with_system_prompt("sys");
        assert!(conversation.pending_tool_calls().is_empty());
    }
}
