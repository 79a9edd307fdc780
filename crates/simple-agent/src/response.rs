//! Agent responses

use std::fmt;

use agent_core::ToolResult;
use serde::{Deserialize, Serialize};

/// `(tool name, result text)`, serialized as a two-element array
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse(pub String, pub String);

impl ToolResponse {
    pub fn tool(&self) -> &str {
        &self.0
    }

    pub fn output(&self) -> &str {
        &self.1
    }
}

impl From<ToolResult> for ToolResponse {
    fn from(result: ToolResult) -> Self {
        Self(result.name, result.output)
    }
}

/// Everything the dispatcher decided and produced for one query
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub query: String,
    pub recognized_tools: Vec<String>,
    pub responses: Vec<ToolResponse>,
    pub final_answer: String,
}

impl AgentResponse {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            recognized_tools: Vec::new(),
            responses: Vec::new(),
            final_answer: String::new(),
        }
    }

    /// Fill `final_answer` from the collected responses
    pub fn finish(&mut self) {
        self.final_answer = if self.responses.is_empty() {
            help_text(&self.query)
        } else {
            self.responses
                .iter()
                .map(|r| format!("Using {}: {}", r.tool(), r.output()))
                .collect::<Vec<_>>()
                .join("\n")
        };
    }
}

/// Answer given when no tool produced a result
pub fn help_text(query: &str) -> String {
    format!(
        "I received your query: '{query}'. To help you better, I can use these tools:\n\
         - calculator: for math operations\n\
         - weather: for weather information\n\
         - time: for time in different timezones"
    )
}

/// Console transcript block
impl fmt::Display for AgentResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nUser Query: {}", self.query)?;
        writeln!(f, "{}", "-".repeat(60))?;

        if !self.recognized_tools.is_empty() {
            writeln!(f, "Tools Used: {}\n", self.recognized_tools.join(", "))?;
        }

        if !self.responses.is_empty() {
            writeln!(f, "Tool Results:")?;
            for r in &self.responses {
                writeln!(f, "  [{}]: {}", r.tool(), r.output())?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Agent Answer: {}", self.final_answer)?;
        write!(f, "{}", "=".repeat(60))
    }
}
