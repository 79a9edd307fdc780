//! Calculator Tool
//!
//! Four-function arithmetic on exact decimals.
//!
//! Results are printed normalized, so whole quotients carry no fraction:
//! `Result: 100 divide 5 = 20`, not `20.0`.

use std::fmt;
use std::str::FromStr;

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};
use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::{Result, ToolError};

pub const NAME: &str = "calculator";

/// Supported arithmetic operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply to two operands
    pub fn apply(self, a: Decimal, b: Decimal) -> Result<Decimal> {
        let result = match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
            Operation::Multiply => a.checked_mul(b),
            Operation::Divide => {
                if b.is_zero() {
                    return Err(ToolError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        result.map(|r| r.normalize()).ok_or(ToolError::Overflow)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ToolError::UnknownOperation(s.to_string()))
    }
}

/// Run one operation and render the result line, or the error text
pub fn calculate(operation: &str, a: Decimal, b: Decimal) -> String {
    let outcome = operation
        .parse::<Operation>()
        .and_then(|op| op.apply(a, b).map(|r| (op, r)));

    match outcome {
        Ok((op, result)) => format!(
            "Result: {} {} {} = {}",
            a.normalize(),
            op,
            b.normalize(),
            result
        ),
        Err(e) => e.to_output(),
    }
}

/// Parse a decimal from text, accepting scientific notation
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    let text = text.trim();
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| ToolError::InvalidNumber(text.to_string()))
}

/// Operand from a JSON argument: a number or a numeric string
fn operand(value: &serde_json::Value) -> Result<Decimal> {
    match value {
        serde_json::Value::Number(n) => parse_decimal(&n.to_string()),
        serde_json::Value::String(s) => parse_decimal(s),
        other => Err(ToolError::InvalidNumber(other.to_string())),
    }
}

/// Tool wrapper around [`calculate`]
#[derive(Debug, Default)]
pub struct CalculatorTool;

#[async_trait]
impl Tool for CalculatorTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Performs math operations (add, subtract, multiply, divide)".into(),
            parameters: vec![
                ParameterSchema::required("operation", "string", "Operation to perform")
                    .with_enum(
                        Operation::ALL
                            .iter()
                            .map(|op| serde_json::json!(op.as_str()))
                            .collect(),
                    ),
                ParameterSchema::required("a", "number", "Left operand"),
                ParameterSchema::required("b", "number", "Right operand"),
            ],
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let operation = call.str_arg("operation").unwrap_or_default();

        let operands = call
            .arguments
            .get("a")
            .map_or(Err(ToolError::InvalidNumber("a".into())), operand)
            .and_then(|a| {
                call.arguments
                    .get("b")
                    .map_or(Err(ToolError::InvalidNumber("b".into())), operand)
                    .map(|b| (a, b))
            });

        let (a, b) = match operands {
            Ok(pair) => pair,
            Err(e) => return Ok(ToolResult::failure(NAME, e.to_output())),
        };

        let output = calculate(operation, a, b);
        if output.starts_with("Error:") {
            Ok(ToolResult::failure(NAME, output))
        } else {
            Ok(ToolResult::success(NAME, output))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exact_arithmetic() {
        assert_eq!(calculate("multiply", dec!(25), dec!(4)), "Result: 25 multiply 4 = 100");
        assert_eq!(calculate("add", dec!(15), dec!(7)), "Result: 15 add 7 = 22");
        assert_eq!(calculate("subtract", dec!(10), dec!(3)), "Result: 10 subtract 3 = 7");
        assert_eq!(calculate("divide", dec!(100), dec!(5)), "Result: 100 divide 5 = 20");
        assert_eq!(calculate("add", dec!(0.1), dec!(0.2)), "Result: 0.1 add 0.2 = 0.3");
        assert_eq!(calculate("multiply", dec!(2.50), dec!(-4)), "Result: 2.5 multiply -4 = -10");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(calculate("divide", dec!(5), dec!(0)), "Error: Division by zero");
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(calculate("modulo", dec!(5), dec!(2)), "Error: Unknown operation 'modulo'");
        assert_eq!("MULTIPLY".parse::<Operation>(), Ok(Operation::Multiply));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(calculate("multiply", Decimal::MAX, dec!(2)), "Error: Numeric overflow");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("42"), Ok(dec!(42)));
        assert_eq!(parse_decimal("1e3").map(|d| d.normalize()), Ok(dec!(1000)));
        assert!(parse_decimal("forty").is_err());
    }

    #[tokio::test]
    async fn test_tool_execute() {
        let call = ToolCall::new(NAME)
            .with_arg("operation", "multiply")
            .with_arg("a", 25)
            .with_arg("b", "4");
        let result = CalculatorTool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.output, "Result: 25 multiply 4 = 100");

        let call = ToolCall::new(NAME)
            .with_arg("operation", "divide")
            .with_arg("a", 1.5)
            .with_arg("b", 0);
        let result = CalculatorTool.execute(&call).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "Error: Division by zero");
    }

    #[tokio::test]
    async fn test_tool_rejects_non_numeric_operand() {
        let call = ToolCall::new(NAME)
            .with_arg("operation", "add")
            .with_arg("a", "x")
            .with_arg("b", 1);
        let result = CalculatorTool.execute(&call).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "Error: Invalid number 'x'");
    }
}
