//! # agent-runtime
//!
//! Runtime providers for the tool agent.
//!
//! ## Providers
//!
//! - **Gemini**: Google's hosted `generateContent` API
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_runtime::GeminiProvider;
//!
//! let provider = GeminiProvider::from_env()?;
//! let agent = PromptAgent::new(Arc::new(provider), AgentConfig::new(TOOL_PROMPT));
//! println!("{}", agent.ask("What is 25 multiplied by 4?").await);
//! ```

pub mod gemini;

pub use gemini::{GeminiConfig, GeminiProvider};

// Re-export core types for convenience
pub use agent_core::{AgentConfig, AgentError, LlmProvider, Message, PromptAgent, Result, Role};
