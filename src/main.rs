//! Chat Agent - Teachable Rule-Based Chat Bot
//!
//! A minimal chat agent with a persistent knowledge base and web API.

// Use the library crate for all modules
use chat_agent::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=info for debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into())
        )
        .init();

    // Run CLI
    cli::run().await
}
