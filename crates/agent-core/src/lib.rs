//! # agent-core
//!
//! Tool abstraction, provider-agnostic LLM interface and the single-shot
//! prompt agent.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ToolRegistry ──▶ Tool (calculator, weather, time, ...)      │
//! │                                                              │
//! │  PromptAgent  ──▶ LlmProvider (Gemini, mocks in tests, ...)  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two halves never talk to each other: keyword dispatch drives the
//! registry, while `PromptAgent` only describes tools to a model in prose and
//! hands back whatever text the model returns.

pub mod assistant;
pub mod error;
pub mod message;
pub mod provider;
pub mod tool;

pub use assistant::{AgentConfig, PromptAgent};
pub use error::{AgentError, Result};
pub use message::{Message, Role};
pub use provider::LlmProvider;
pub use tool::{Tool, ToolCall, ToolResult, ToolRegistry, ToolSchema};
