use std::sync::Arc;

use chrono::SecondsFormat;
use rmcp::Error as McpError;
use rmcp::model::{JsonObject, Prompt, PromptArgument, PromptMessage};
use serde_json::Value;

use crate::config::Config;
use crate::constants::{PARAM_TASK, PROMPT_F1_ASSISTANT, PROMPT_F1_ASSISTANT_TEXT};
use crate::prompts::PromptHandler;
use crate::prompts::support::user_text;

const REFERENCE_TIME_PLACEHOLDER: &str = "{reference_time}";

/// Race engineer system prompt, stamped with the configured "now"
pub struct F1AssistantPrompt {
    config: Arc<Config>,
}

impl F1AssistantPrompt {
    pub const fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn text(&self, task: Option<&str>) -> String {
        let now = self
            .config
            .now()
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        let prompt = PROMPT_F1_ASSISTANT_TEXT
            .trim_end()
            .replace(REFERENCE_TIME_PLACEHOLDER, &now);

        match task.map(str::trim).filter(|task| !task.is_empty()) {
            Some(task) => format!("{prompt}\n\nTask: {task}"),
            None => prompt,
        }
    }
}

impl PromptHandler for F1AssistantPrompt {
    fn prompt(&self) -> Prompt {
        Prompt {
            name:        PROMPT_F1_ASSISTANT.to_string(),
            description: Some(
                "Formula 1 assistant and race strategist instructions for the OpenF1 and \
                 championship tools"
                    .to_string(),
            ),
            arguments:   Some(vec![PromptArgument {
                name:        PARAM_TASK.to_string(),
                description: Some(
                    "Optional question or task appended after the instructions".to_string(),
                ),
                required:    Some(false),
            }]),
        }
    }

    fn render(&self, arguments: Option<&JsonObject>) -> Result<Vec<PromptMessage>, McpError> {
        let task = arguments
            .and_then(|args| args.get(PARAM_TASK))
            .and_then(Value::as_str);
        Ok(user_text(self.text(task)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rmcp::model::PromptMessageContent;
    use serde_json::json;

    use super::*;

    fn prompt_at_spanish_gp() -> F1AssistantPrompt {
        let config = Config {
            reference_time: Some(Utc.with_ymd_and_hms(2025, 6, 1, 13, 45, 0).unwrap()),
            ..Config::default()
        };
        F1AssistantPrompt::new(Arc::new(config))
    }

    fn body(messages: &[PromptMessage]) -> &str {
        match &messages[0].content {
            PromptMessageContent::Text { text } => text,
            other => panic!("expected text message, got {other:?}"),
        }
    }

    #[test]
    fn test_prompt_is_stamped_with_reference_time() {
        let messages = prompt_at_spanish_gp().render(None).unwrap();
        let text = body(&messages);
        assert!(text.ends_with("Current UTC time (ISO 8601): 2025-06-01T13:45:00Z"));
        assert!(text.contains("get_api_endpoints"));
        assert!(!text.contains(REFERENCE_TIME_PLACEHOLDER));
    }

    #[test]
    fn test_task_argument_is_appended() {
        let args = json!({"task": "Who won the 2021 title?"});
        let messages = prompt_at_spanish_gp().render(args.as_object()).unwrap();
        assert!(body(&messages).ends_with("\n\nTask: Who won the 2021 title?"));
    }

    #[test]
    fn test_blank_task_is_ignored() {
        let args = json!({"task": "   "});
        let messages = prompt_at_spanish_gp().render(args.as_object()).unwrap();
        assert!(!body(&messages).contains("Task:"));
    }
}
