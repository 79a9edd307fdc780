//! Transcript printers for both agents

use std::io::Write;

use agent_core::PromptAgent;
use simple_agent::SimpleAgent;

fn rule(ch: char) -> String {
    ch.to_string().repeat(60)
}

/// Run each query through the keyword dispatcher and print the response block
pub async fn run_offline<W: Write>(
    out: &mut W,
    agent: &SimpleAgent,
    queries: &[String],
) -> std::io::Result<()> {
    writeln!(out, "\n{}", rule('='))?;
    writeln!(out, "SIMPLE AI AGENT WITH TOOLS")?;
    writeln!(out, "Offline keyword dispatch over mock tools")?;
    writeln!(out, "{}", rule('='))?;

    for query in queries {
        let response = agent.process_query(query).await;
        writeln!(out, "{response}")?;
    }

    Ok(())
}

/// Send each query to the hosted model and print what comes back
pub async fn run_llm<W: Write>(
    out: &mut W,
    agent: &PromptAgent,
    queries: &[String],
) -> std::io::Result<()> {
    for query in queries {
        writeln!(out, "\n{}", rule('='))?;
        writeln!(out, "User: {query}")?;
        writeln!(out, "{}", rule('='))?;

        let answer = agent.ask(query).await;
        writeln!(out, "Agent: {answer}")?;
        writeln!(out, "\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::{
        provider::{Completion, GenerationOptions},
        AgentConfig, AgentError, LlmProvider, Message, Result,
    };
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StaticProvider(Option<&'static str>);

    #[async_trait]
    impl LlmProvider for StaticProvider {
        fn name(&self) -> &str {
            "static"
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        async fn complete(&self, _: &[Message], options: &GenerationOptions) -> Result<Completion> {
            let content = self.0.ok_or_else(|| AgentError::Auth("API key not valid".into()))?;
            Ok(Completion {
                content: content.into(),
                model: options.model.clone(),
                usage: None,
                finish_reason: None,
            })
        }
    }

    fn queries(items: &[&str]) -> Vec<String> {
        items.iter().map(|q| (*q).to_string()).collect()
    }

    #[tokio::test]
    async fn test_offline_transcript() {
        let mut out = Vec::new();
        run_offline(&mut out, &SimpleAgent::new(), &queries(&["What time is it in EST?"]))
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("SIMPLE AI AGENT WITH TOOLS"));
        assert!(text.contains("User Query: What time is it in EST?"));
        assert!(text.contains("  [time]: 09:30 EST"));
        assert!(text.contains("Agent Answer: Using time: 09:30 EST"));
    }

    #[tokio::test]
    async fn test_llm_transcript() {
        let agent = PromptAgent::new(
            Arc::new(StaticProvider(Some("I would use the weather_lookup tool."))),
            AgentConfig::new(simple_agent::TOOL_PROMPT),
        );

        let mut out = Vec::new();
        run_llm(&mut out, &agent, &queries(&["Tell me the weather in London"]))
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("User: Tell me the weather in London"));
        assert!(text.contains("Agent: I would use the weather_lookup tool."));
    }

    #[tokio::test]
    async fn test_llm_transcript_shows_errors() {
        let agent = PromptAgent::new(Arc::new(StaticProvider(None)), AgentConfig::default());

        let mut out = Vec::new();
        run_llm(&mut out, &agent, &queries(&["hi"])).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Agent: Authentication failed: API key not valid"));
    }
}
