//! Error Types for the mock tools
//!
//! Tool failures never leave a tool as a Rust error: they are rendered into
//! the result text as `Error: {..}` so the caller sees them verbatim.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("Numeric overflow")]
    Overflow,

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

impl ToolError {
    /// Text embedded in a tool result
    pub fn to_output(&self) -> String {
        format!("Error: {self}")
    }
}
