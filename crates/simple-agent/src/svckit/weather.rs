//! Weather Lookup Tool

use agent_core::{
    tool::ParameterSchema, Result as CoreResult, Tool, ToolCall, ToolResult, ToolSchema,
};
use async_trait::async_trait;

use crate::mock::{self, WEATHER};

pub const NAME: &str = "weather";

/// Current conditions for a city, or a "not available" message naming it
pub fn weather_report(location: &str) -> String {
    mock::lookup(WEATHER, location).map_or_else(
        || format!("Weather data not available for {location}"),
        str::to_string,
    )
}

#[derive(Debug, Default)]
pub struct WeatherTool;

#[async_trait]
impl Tool for WeatherTool {
    fn schema(&self) -> ToolSchema {
        let cities = WEATHER.iter().map(|(city, _)| *city).collect::<Vec<_>>().join(", ");
        ToolSchema {
            name: NAME.into(),
            description: format!("Gets weather for cities ({cities})"),
            parameters: vec![ParameterSchema::required("location", "string", "City name")],
        }
    }

    async fn execute(&self, call: &ToolCall) -> CoreResult<ToolResult> {
        let location = call.str_arg("location").unwrap_or_default();
        let output = weather_report(location);

        if mock::lookup(WEATHER, location).is_some() {
            Ok(ToolResult::success(NAME, output))
        } else {
            Ok(ToolResult::failure(NAME, output))
        }
    }
}
