use std::sync::Arc;

use rmcp::Error as McpError;
use rmcp::model::{
    GetPromptRequestParam, GetPromptResult, JsonObject, ListPromptsResult, Prompt, PromptMessage,
};

use crate::config::Config;

mod f1_assistant;
mod support;

pub use f1_assistant::F1AssistantPrompt;

/// Registry for all available prompts
pub struct PromptRegistry {
    prompts: Vec<Box<dyn PromptHandler>>,
}

impl PromptRegistry {
    pub fn new(config: Arc<Config>) -> Self {
        let mut registry = Self {
            prompts: Vec::new(),
        };

        registry.register(Box::new(F1AssistantPrompt::new(config)));

        registry
    }

    fn register(&mut self, prompt: Box<dyn PromptHandler>) {
        self.prompts.push(prompt);
    }

    pub fn list_prompts(&self) -> ListPromptsResult {
        ListPromptsResult {
            prompts:     self.prompts.iter().map(|handler| handler.prompt()).collect(),
            next_cursor: None,
        }
    }

    /// Render a prompt by name with the caller's arguments
    pub fn get_prompt(&self, request: &GetPromptRequestParam) -> Result<GetPromptResult, McpError> {
        let (prompt, handler) = self
            .prompts
            .iter()
            .map(|handler| (handler.prompt(), handler))
            .find(|(prompt, _)| prompt.name == request.name)
            .ok_or_else(|| {
                McpError::invalid_params(format!("Prompt '{}' not found", request.name), None)
            })?;

        Ok(GetPromptResult {
            description: prompt.description,
            messages:    handler.render(request.arguments.as_ref())?,
        })
    }
}

/// A prompt the server can list and render
pub trait PromptHandler: Send + Sync {
    /// Name, description and declared arguments
    fn prompt(&self) -> Prompt;

    /// Produce the prompt messages for the given arguments
    fn render(&self, arguments: Option<&JsonObject>) -> Result<Vec<PromptMessage>, McpError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rmcp::model::PromptMessageRole;

    use super::*;
    use crate::constants::PROMPT_F1_ASSISTANT;

    fn registry() -> PromptRegistry {
        PromptRegistry::new(Arc::new(Config::default()))
    }

    #[test]
    fn test_lists_f1_assistant_with_optional_task() {
        let listed = registry().list_prompts();
        assert_eq!(listed.prompts.len(), 1);

        let prompt = &listed.prompts[0];
        assert_eq!(prompt.name, PROMPT_F1_ASSISTANT);
        let args = prompt.arguments.as_ref().unwrap();
        assert_eq!(args[0].name, "task");
        assert_eq!(args[0].required, Some(false));
    }

    #[test]
    fn test_get_prompt_returns_user_message() {
        let request = GetPromptRequestParam {
            name:      PROMPT_F1_ASSISTANT.to_string(),
            arguments: None,
        };
        let result = registry().get_prompt(&request).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].role, PromptMessageRole::User));
        assert!(result.description.is_some());
    }

    #[test]
    fn test_unknown_prompt_is_rejected() {
        let request = GetPromptRequestParam {
            name:      "pit-wall".to_string(),
            arguments: None,
        };
        let err = registry().get_prompt(&request).unwrap_err();
        assert!(err.message.contains("pit-wall"));
    }
}
