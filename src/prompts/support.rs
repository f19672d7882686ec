use rmcp::model::{PromptMessage, PromptMessageContent, PromptMessageRole};

/// A single user-role text message
pub fn user_text(text: impl Into<String>) -> Vec<PromptMessage> {
    vec![PromptMessage {
        role:    PromptMessageRole::User,
        content: PromptMessageContent::Text { text: text.into() },
    }]
}
