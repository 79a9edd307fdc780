//! Service Kit - Agent Tools
//!
//! The mock tools, each a plain function plus an `agent_core::Tool` wrapper.

pub mod calculator;
pub mod clock;
pub mod weather;

pub use calculator::{calculate, CalculatorTool, Operation};
pub use clock::{time_in, TimeTool};
pub use weather::{weather_report, WeatherTool};

use agent_core::ToolRegistry;

/// Registry holding calculator, weather and time
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(CalculatorTool);
    registry.register(WeatherTool);
    registry.register(TimeTool);
    registry
}
