//! `hello-agent`: select a configured LLM provider and print one
//! normalized greeting as pretty JSON.
//!
//! Exit codes: 0 with the greeting on stdout, 1 with the error message on
//! stderr.

use anyhow::Result;
use hello_agent_core::{config, AgentConfig};
use hello_agent_providers::ProviderRouter;

#[tokio::main]
async fn main() {
    // Log to stderr; stdout carries nothing but the result JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    config::load_env();

    let config = AgentConfig::from_env();
    let router = ProviderRouter::from_config(&config);
    let greeting = router.select_and_greet().await?;

    println!("{}", serde_json::to_string_pretty(&greeting)?);
    Ok(())
}
