//! Time Lookup Tool

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};
use async_trait::async_trait;

use crate::mock::{self, TIME};

pub const NAME: &str = "time";

/// Local time for a timezone abbreviation
pub fn time_in(timezone: &str) -> String {
    mock::lookup(TIME, timezone).map_or_else(
        || format!("Time data not available for timezone '{timezone}'"),
        str::to_string,
    )
}

#[derive(Debug, Default)]
pub struct TimeTool;

#[async_trait]
impl Tool for TimeTool {
    fn schema(&self) -> ToolSchema {
        let zones = TIME.iter().map(|(zone, _)| *zone).collect::<Vec<_>>().join(", ");
        ToolSchema {
            name: NAME.into(),
            description: format!("Gets time in timezones ({zones})"),
            parameters: vec![ParameterSchema::required(
                "timezone",
                "string",
                "Timezone abbreviation",
            )],
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let timezone = call.str_arg("timezone").unwrap_or_default();
        let output = time_in(timezone);

        if mock::lookup(TIME, timezone).is_some() {
            Ok(ToolResult::success(NAME, output))
        } else {
            Ok(ToolResult::failure(NAME, output))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_zone() {
        assert_eq!(time_in("EST"), "09:30 EST");
        assert_eq!(time_in("aest"), "00:30 AEST");
    }

    #[test]
    fn test_unknown_zone() {
        assert_eq!(time_in("CET"), "Time data not available for timezone 'CET'");
    }

    #[tokio::test]
    async fn test_tool_execute() {
        let call = ToolCall::new(NAME).with_arg("timezone", "IST");
        let result = TimeTool.execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.output, "20:00 IST");
    }
}
