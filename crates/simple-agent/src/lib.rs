//! # simple-agent
//!
//! Keyword-dispatch agent over three mock tools.
//!
//! ```text
//! "Calculate 100 divided by 5 and tell me the weather in New York"
//!        │
//!        ▼
//! ┌──────────────┐   calculator(divide, 100, 5)  ──▶ "Result: 100 divide 5 = 20"
//! │ SimpleAgent  │── weather("New York")         ──▶ "Sunny, 72°F, Wind: 10 mph"
//! └──────────────┘   time(…)                     ──▶ (not triggered)
//!        │
//!        ▼
//! AgentResponse { query, recognized_tools, responses, final_answer }
//! ```
//!
//! Tool failures are reported inside the result text (`Error: Division by
//! zero`), never as Rust errors.

pub mod dispatcher;
pub mod error;
pub mod extract;
pub mod mock;
pub mod response;
pub mod svckit;

pub use dispatcher::SimpleAgent;
pub use error::{Result, ToolError};
pub use response::{AgentResponse, ToolResponse};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{default_registry, CalculatorTool, TimeTool, WeatherTool};
}

/// Queries run by the console demo
pub const EXAMPLE_QUERIES: &[&str] = &[
    "What is 25 multiplied by 4?",
    "Tell me the weather in London",
    "What time is it in EST?",
    "Calculate 100 divided by 5 and tell me the weather in New York",
    "What are the benefits of regular exercise?",
    "What's the time in Tokyo and weather in Sydney?",
    "Add 15 and 7",
];

/// System prompt for the LLM-backed variant
pub const TOOL_PROMPT: &str = "You are a helpful assistant with access to these tools:
1. calculator: Performs math operations (add, subtract, multiply, divide)
   - For '25 * 4', use calculator with operation='multiply', a=25, b=4
2. weather_lookup: Gets weather for cities (New York, London, Tokyo, Sydney)
   - For 'weather in London', use weather_lookup with location='London'
3. get_time: Gets time in timezones (UTC, EST, PST, IST)
   - For 'time in EST', use get_time with timezone='EST'
Answer questions directly when possible. When a tool would be useful, explain which tool would be used and why.";
