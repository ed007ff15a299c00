//! CLI interface for chat-agent

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::knowledge::KnowledgeStore;
use crate::repl;
use crate::responder::Responder;
use crate::server;

#[derive(Parser)]
#[command(name = "chat-agent")]
#[command(about = "Teachable rule-based chat agent with persistent memory", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session (default when no command given)
    Chat,
    /// Ask a single question and print the reply
    Ask {
        /// The question text
        text: String,
    },
    /// Teach a new question/answer pair
    Teach {
        /// Question to learn
        question: String,
        /// Answer to give back
        answer: String,
    },
    /// Start the web server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
    },
    /// Inspect configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Print the configuration file path
        #[arg(long)]
        path: bool,
    },
}

/// Parse arguments and dispatch
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Chat) | None => {
            let store = KnowledgeStore::load(&config.store.path)?;
            let responder = Responder::new(store, config.locales.clone());
            repl::run(responder)
        }
        Some(Commands::Ask { text }) => {
            let store = KnowledgeStore::load(&config.store.path)?;
            let mut responder = Responder::new(store, config.locales.clone());
            println!("{}", responder.respond(&text));
            Ok(())
        }
        Some(Commands::Teach { question, answer }) => {
            let mut store = KnowledgeStore::load(&config.store.path)?;
            store.upsert(&question, &answer)?;
            println!("Learned: '{}' -> '{}'", question, answer);
            Ok(())
        }
        Some(Commands::Serve { port, host }) => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            server::start(&host, port, config).await
        }
        Some(Commands::Config { show, path }) => {
            if path {
                println!("{}", crate::config::config_path()?.display());
            }
            if show || !path {
                crate::config::show_config(&config);
            }
            Ok(())
        }
    }
}
