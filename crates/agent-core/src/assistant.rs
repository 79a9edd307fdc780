//! Prompt Agent
//!
//! Single-shot agent: prepends a fixed system prompt describing the tools to
//! the user's message, sends it to the provider once and returns the raw text.
//! Model output is never parsed for tool calls.

use std::sync::Arc;

use crate::error::Result;
use crate::message::Message;
use crate::provider::{GenerationOptions, LlmProvider};

/// Agent configuration
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Text placed ahead of every user message
    pub system_prompt: String,

    /// Generation options
    pub generation: GenerationOptions,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            generation: GenerationOptions::default(),
        }
    }
}

impl AgentConfig {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.generation.model = model.into();
        self
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// LLM-backed agent that answers in free text
pub struct PromptAgent {
    provider: Arc<dyn LlmProvider>,
    config: AgentConfig,
}

impl PromptAgent {
    pub fn new(provider: Arc<dyn LlmProvider>, config: AgentConfig) -> Self {
        Self { provider, config }
    }

    /// Combine system prompt and user message into one prompt
    pub fn build_prompt(&self, user_message: &str) -> String {
        format!(
            "{}\n\nUser: {}\n\nAssistant:",
            self.config.system_prompt, user_message
        )
    }

    /// Send the combined prompt and return the model's text
    pub async fn try_ask(&self, user_message: &str) -> Result<String> {
        let messages = [Message::user(self.build_prompt(user_message))];

        let completion = self
            .provider
            .complete(&messages, &self.config.generation)
            .await?;

        if let Some(usage) = &completion.usage {
            tracing::debug!(
                provider = self.provider.name(),
                model = %completion.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "completion received"
            );
        }

        Ok(completion.content)
    }

    /// Like [`try_ask`](Self::try_ask), but a failure is logged and its text
    /// returned as the answer.
    pub async fn ask(&self, user_message: &str) -> String {
        match self.try_ask(user_message).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!(
                    provider = self.provider.name(),
                    error = ?e,
                    "prompt agent request failed"
                );
                e.to_string()
            }
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}
