//! Keyword Dispatcher
//!
//! Maps free text to tool calls with a fixed table of rules. Each rule has a
//! trigger (returns the position of the word that fired it) and an extractor
//! that builds a `ToolCall` from the query, or nothing when the arguments
//! cannot be found. Rules run in table order: calculator, weather, time.

use std::sync::Arc;

use agent_core::{ToolCall, ToolRegistry};

use crate::extract::QueryText;
use crate::mock::{CITY_ZONES, TIME, WEATHER};
use crate::response::{AgentResponse, ToolResponse};
use crate::svckit::{self, calculator, clock, weather, Operation};

/// How an operation can be asked for
struct OperationWords {
    op: Operation,
    /// Verb stems, matched as word prefixes ("multiplied", "dividing")
    stems: &'static [&'static str],
    /// Matched as whole words only, so "summer" is not "sum"
    words: &'static [&'static str],
    /// Operators between two numbers, with or without spaces (`25*4`)
    symbols: &'static [char],
    /// Operators that need spaces on both sides (`8 / 0`, `10 - 3`)
    spaced_symbols: &'static [char],
}

const OPERATIONS: &[OperationWords] = &[
    OperationWords {
        op: Operation::Multiply,
        stems: &["multipl"],
        words: &["times", "product"],
        symbols: &['*', '×'],
        spaced_symbols: &[],
    },
    OperationWords {
        op: Operation::Divide,
        stems: &["divid"],
        words: &["quotient"],
        symbols: &['÷'],
        spaced_symbols: &['/'],
    },
    OperationWords {
        op: Operation::Add,
        stems: &[],
        words: &["add", "adding", "added", "plus", "sum"],
        symbols: &['+'],
        spaced_symbols: &[],
    },
    OperationWords {
        op: Operation::Subtract,
        stems: &["subtract"],
        words: &["minus"],
        symbols: &[],
        spaced_symbols: &['-'],
    },
];

impl OperationWords {
    /// Earliest position at which this operation is asked for
    fn position(&self, text: &QueryText) -> Option<usize> {
        [
            text.word_starting_with(self.stems),
            text.word_equal_to(self.words),
            text.binary_symbol(self.symbols, false),
            text.binary_symbol(self.spaced_symbols, true),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

/// Words that ask for arithmetic without naming the operation
const CALCULATION_WORDS: &[&str] = &["calculat", "compute"];

/// What may separate the two operands of "add 15 and 7"
const OPERAND_JOINERS: &[&str] = &["and", "by", "from", "to", "with", ","];

const WEATHER_WORDS: &[&str] = &["weather", "forecast"];
const TIME_WORDS: &[&str] = &["time", "clock", "timestamp"];

struct Rule {
    tool: &'static str,
    trigger: fn(&QueryText) -> Option<usize>,
    extract: fn(&QueryText, usize) -> Option<ToolCall>,
}

const RULES: &[Rule] = &[
    Rule {
        tool: calculator::NAME,
        trigger: calculator_trigger,
        extract: calculator_call,
    },
    Rule {
        tool: weather::NAME,
        trigger: weather_trigger,
        extract: weather_call,
    },
    Rule {
        tool: clock::NAME,
        trigger: time_trigger,
        extract: time_call,
    },
];

/// Offline agent: keyword matching over the mock tools
pub struct SimpleAgent {
    tools: Arc<ToolRegistry>,
}

impl Default for SimpleAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleAgent {
    /// Agent over calculator, weather and time
    pub fn new() -> Self {
        Self::with_registry(Arc::new(svckit::default_registry()))
    }

    pub fn with_registry(tools: Arc<ToolRegistry>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Decide which tools apply, run them and assemble the answer
    pub async fn process_query(&self, query: &str) -> AgentResponse {
        let text = QueryText::new(query);
        let mut response = AgentResponse::new(query);

        for rule in RULES {
            let Some(anchor) = (rule.trigger)(&text) else {
                continue;
            };
            response.recognized_tools.push(rule.tool.to_string());

            let Some(call) = (rule.extract)(&text, anchor) else {
                tracing::debug!(tool = rule.tool, "recognized but no arguments found");
                continue;
            };

            match self.tools.execute(&call).await {
                Ok(result) => response.responses.push(ToolResponse::from(result)),
                Err(e) => tracing::warn!(tool = rule.tool, error = %e, "tool call failed"),
            }
        }

        response.finish();
        tracing::debug!(
            tools = ?response.recognized_tools,
            results = response.responses.len(),
            "query processed"
        );
        response
    }
}

fn calculator_trigger(text: &QueryText) -> Option<usize> {
    OPERATIONS
        .iter()
        .filter_map(|words| words.position(text))
        .chain(text.word_starting_with(CALCULATION_WORDS))
        .min()
}

/// The operation asked for first, with its position
fn detect_operation(text: &QueryText) -> Option<(Operation, usize)> {
    OPERATIONS
        .iter()
        .filter_map(|words| words.position(text).map(|pos| (words.op, pos)))
        .min_by_key(|(_, pos)| *pos)
}

/// Operands around the operation at `keyword_pos`.
///
/// Prefix form ("add 15 and 7") takes the two numbers after the keyword when
/// they are joined by a connective or nothing comes before. Otherwise infix
/// ("25 multiplied by 4"): the nearest number on each side.
fn operands(text: &QueryText, keyword_pos: usize) -> Option<(&str, &str)> {
    let (before, after): (Vec<_>, Vec<_>) =
        text.numbers().partition(|&(pos, _)| pos < keyword_pos);

    if let [(first_pos, first), (second_pos, second), ..] = after.as_slice() {
        let joiner = text.between(first_pos + first.len(), *second_pos).trim();
        if before.is_empty() || OPERAND_JOINERS.contains(&joiner) {
            return Some((*first, *second));
        }
    }

    let (_, a) = before.last()?;
    let (_, b) = after.first()?;
    Some((*a, *b))
}

fn calculator_call(text: &QueryText, _anchor: usize) -> Option<ToolCall> {
    let (operation, keyword_pos) = detect_operation(text)?;
    let (mut a, mut b) = operands(text, keyword_pos)?;

    // "subtract 3 from 10"
    if operation == Operation::Subtract
        && text
            .word_equal_to(&["from"])
            .is_some_and(|from| from > keyword_pos)
    {
        std::mem::swap(&mut a, &mut b);
    }

    Some(
        ToolCall::new(calculator::NAME)
            .with_arg("operation", operation.as_str())
            .with_arg("a", a)
            .with_arg("b", b),
    )
}

fn weather_trigger(text: &QueryText) -> Option<usize> {
    text.word_starting_with(WEATHER_WORDS)
}

fn weather_call(text: &QueryText, anchor: usize) -> Option<ToolCall> {
    let cities: Vec<&str> = WEATHER.iter().map(|(city, _)| *city).collect();
    let city = text.nearest_after(anchor, &cities)?;
    Some(ToolCall::new(weather::NAME).with_arg("location", city))
}

fn time_trigger(text: &QueryText) -> Option<usize> {
    text.word_equal_to(TIME_WORDS)
}

fn time_call(text: &QueryText, anchor: usize) -> Option<ToolCall> {
    let zones: Vec<&str> = TIME.iter().map(|(zone, _)| *zone).collect();
    let zone = text.nearest_after(anchor, &zones).or_else(|| {
        let cities: Vec<&str> = CITY_ZONES.iter().map(|(city, _)| *city).collect();
        let city = text.nearest_after(anchor, &cities)?;
        CITY_ZONES.iter().find(|(c, _)| *c == city).map(|(_, zone)| *zone)
    })?;
    Some(ToolCall::new(clock::NAME).with_arg("timezone", zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::help_text;

    async fn ask(query: &str) -> AgentResponse {
        SimpleAgent::new().process_query(query).await
    }

    fn pair(tool: &str, output: &str) -> ToolResponse {
        ToolResponse(tool.into(), output.into())
    }

    #[tokio::test]
    async fn test_multiplication() {
        let response = ask("What is 25 multiplied by 4?").await;
        assert_eq!(response.query, "What is 25 multiplied by 4?");
        assert_eq!(response.recognized_tools, vec!["calculator"]);
        assert_eq!(response.responses, vec![pair("calculator", "Result: 25 multiply 4 = 100")]);
        assert_eq!(response.final_answer, "Using calculator: Result: 25 multiply 4 = 100");
    }

    #[tokio::test]
    async fn test_weather() {
        let response = ask("Tell me the weather in London").await;
        assert_eq!(response.recognized_tools, vec!["weather"]);
        assert_eq!(response.responses, vec![pair("weather", "Cloudy, 55°F, Wind: 15 mph")]);
    }

    #[tokio::test]
    async fn test_time_by_zone() {
        let response = ask("What time is it in EST?").await;
        assert_eq!(response.recognized_tools, vec!["time"]);
        assert_eq!(response.responses, vec![pair("time", "09:30 EST")]);
    }

    #[tokio::test]
    async fn test_calculation_and_weather() {
        let response = ask("Calculate 100 divided by 5 and tell me the weather in New York").await;
        assert_eq!(response.recognized_tools, vec!["calculator", "weather"]);
        assert_eq!(
            response.final_answer,
            "Using calculator: Result: 100 divide 5 = 20\nUsing weather: Sunny, 72°F, Wind: 10 mph"
        );
    }

    #[tokio::test]
    async fn test_time_and_weather_pick_their_own_city() {
        let response = ask("What's the time in Tokyo and weather in Sydney?").await;
        assert_eq!(response.recognized_tools, vec!["weather", "time"]);
        assert_eq!(
            response.responses,
            vec![
                pair("weather", "Clear, 75°F, Wind: 12 mph"),
                pair("time", "23:30 JST"),
            ]
        );
    }

    #[tokio::test]
    async fn test_addition() {
        let response = ask("Add 15 and 7").await;
        assert_eq!(response.responses, vec![pair("calculator", "Result: 15 add 7 = 22")]);
    }

    #[tokio::test]
    async fn test_subtract_from() {
        let response = ask("Subtract 3 from 10").await;
        assert_eq!(response.responses, vec![pair("calculator", "Result: 10 subtract 3 = 7")]);
    }

    #[tokio::test]
    async fn test_symbolic_division_by_zero() {
        let response = ask("what is 8 / 0").await;
        assert_eq!(response.recognized_tools, vec!["calculator"]);
        assert_eq!(response.responses, vec![pair("calculator", "Error: Division by zero")]);
    }

    #[tokio::test]
    async fn test_no_trigger_returns_help() {
        let query = "What are the benefits of regular exercise?";
        let response = ask(query).await;
        assert!(response.recognized_tools.is_empty());
        assert!(response.responses.is_empty());
        assert_eq!(response.final_answer, help_text(query));
        assert!(response.final_answer.contains("- calculator: for math operations"));
        assert!(response.final_answer.contains("- weather: for weather information"));
        assert!(response.final_answer.contains("- time: for time in different timezones"));
    }

    #[tokio::test]
    async fn test_recognized_without_arguments() {
        let response = ask("What's the weather like on Mars?").await;
        assert_eq!(response.recognized_tools, vec!["weather"]);
        assert!(response.responses.is_empty());
        assert_eq!(response.final_answer, help_text("What's the weather like on Mars?"));

        let response = ask("Please multiply these for me").await;
        assert_eq!(response.recognized_tools, vec!["calculator"]);
        assert!(response.responses.is_empty());
    }

    #[tokio::test]
    async fn test_times_is_not_time() {
        let response = ask("7 times 6").await;
        assert_eq!(response.recognized_tools, vec!["calculator"]);
        assert_eq!(response.responses, vec![pair("calculator", "Result: 7 multiply 6 = 42")]);
    }

    #[tokio::test]
    async fn test_words_that_only_start_like_keywords() {
        let response = ask("What's the weather forecast for summer in London?").await;
        assert_eq!(response.recognized_tools, vec!["weather"]);
        assert_eq!(response.responses, vec![pair("weather", "Cloudy, 55°F, Wind: 15 mph")]);

        let response = ask("What's the timestamp in UTC?").await;
        assert_eq!(response.recognized_tools, vec!["time"]);
        assert_eq!(response.responses, vec![pair("time", "14:30 UTC")]);

        let response = ask("Is production up in Paris? Check the weather").await;
        assert_eq!(response.recognized_tools, vec!["weather"]);
    }

    #[tokio::test]
    async fn test_sum_of() {
        let response = ask("What is the sum of 3 and 4?").await;
        assert_eq!(response.responses, vec![pair("calculator", "Result: 3 add 4 = 7")]);
    }

    #[tokio::test]
    async fn test_date_is_not_division() {
        let response = ask("What time is it in EST on 10/12?").await;
        assert_eq!(response.recognized_tools, vec!["time"]);
        assert_eq!(response.responses, vec![pair("time", "09:30 EST")]);
    }

    #[tokio::test]
    async fn test_operands_sit_around_the_operation() {
        let response = ask("In 2024 what is 3 plus 4?").await;
        assert_eq!(response.responses, vec![pair("calculator", "Result: 3 add 4 = 7")]);

        let response = ask("In 2024, add 3 and 4").await;
        assert_eq!(response.responses, vec![pair("calculator", "Result: 3 add 4 = 7")]);

        let response = ask("Multiply 6 by 7").await;
        assert_eq!(response.responses, vec![pair("calculator", "Result: 6 multiply 7 = 42")]);
    }

    #[tokio::test]
    async fn test_spaced_minus() {
        let response = ask("Calculate 10 - 3").await;
        assert_eq!(response.recognized_tools, vec!["calculator"]);
        assert_eq!(response.responses, vec![pair("calculator", "Result: 10 subtract 3 = 7")]);

        let response = ask("Add 1.5 and -2").await;
        assert_eq!(response.responses, vec![pair("calculator", "Result: 1.5 add -2 = -0.5")]);
    }

    #[tokio::test]
    async fn test_missing_tool_is_skipped() {
        let mut registry = ToolRegistry::new();
        registry.register(svckit::WeatherTool);
        let agent = SimpleAgent::with_registry(Arc::new(registry));

        let response = agent.process_query("What is 2 plus 2 and the forecast in Paris?").await;
        assert_eq!(response.recognized_tools, vec!["calculator", "weather"]);
        assert_eq!(response.responses, vec![pair("weather", "Partly cloudy, 62°F, Wind: 7 mph")]);
    }
}
