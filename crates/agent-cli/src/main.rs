//! Console demo
//!
//! Runs the built-in example queries (or `--query` values) through the
//! offline keyword dispatcher, or through the Gemini-backed prompt agent
//! with `--llm`.

mod demo;

use std::sync::Arc;

use agent_core::{AgentConfig, LlmProvider, PromptAgent};
use agent_runtime::{gemini::API_KEY_VAR, GeminiConfig, GeminiProvider};
use clap::Parser;
use simple_agent::{SimpleAgent, EXAMPLE_QUERIES, TOOL_PROMPT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "agent-demo",
    version,
    about = "Simple AI agent with calculator, weather and time tools"
)]
struct Cli {
    /// Query to run instead of the built-in examples (repeatable)
    #[arg(short, long = "query", value_name = "TEXT")]
    queries: Vec<String>,

    /// Answer with the hosted Gemini model instead of keyword dispatch
    #[arg(long)]
    llm: bool,

    /// Gemini model (overrides GEMINI_MODEL)
    #[arg(short, long, value_name = "MODEL", requires = "llm")]
    model: Option<String>,
}

impl Cli {
    fn queries(&self) -> Vec<String> {
        if self.queries.is_empty() {
            EXAMPLE_QUERIES.iter().map(|q| (*q).to_string()).collect()
        } else {
            self.queries.clone()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let queries = cli.queries();
    let mut stdout = std::io::stdout().lock();

    if cli.llm {
        let mut config = GeminiConfig::from_env()?;
        if let Some(model) = cli.model {
            config.model = model;
        }

        let agent_config = AgentConfig::new(TOOL_PROMPT).with_model(config.model.clone());
        let provider = GeminiProvider::from_config(config)?;

        if !provider.health_check().await? {
            tracing::warn!(
                "{} did not answer the health check - requests will likely fail",
                provider.name()
            );
        }

        let agent = PromptAgent::new(Arc::new(provider), agent_config);
        tracing::info!(model = %agent.config().generation.model, "Using hosted model");
        demo::run_llm(&mut stdout, &agent, &queries).await?;
    } else {
        if std::env::var(API_KEY_VAR).map_or(true, |k| k.trim().is_empty()) {
            tracing::warn!("{API_KEY_VAR} not found in environment or .env file");
        }

        demo::run_offline(&mut stdout, &SimpleAgent::new(), &queries).await?;
    }

    Ok(())
}
