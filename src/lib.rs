//! Chat Agent - Teachable Rule-Based Chat Bot Library
//!
//! A minimal conversational responder with:
//! - Normalization and staged matching (exact, keyword, fuzzy overlap)
//! - A teachable knowledge store persisted as a flat text file
//! - Date/time intents driven by a per-locale trigger table
//! - Web server endpoint and interactive console
//!
//! # Example
//!
//! ```ignore
//! use chat_agent::knowledge::KnowledgeStore;
//! use chat_agent::locale::LocaleTable;
//! use chat_agent::responder::Responder;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = KnowledgeStore::load("conversations.txt")?;
//!     let mut responder = Responder::new(store, LocaleTable::default());
//!     println!("{}", responder.respond("hello"));
//!     Ok(())
//! }
//! ```

// Core modules (order matters for cross-module dependencies)
pub mod locale;
pub mod responder;
pub mod knowledge;
pub mod config;
pub mod server;
pub mod repl;
pub mod cli;

// Re-export commonly used types for convenience
pub use config::Config;
pub use knowledge::KnowledgeStore;
pub use locale::{LocalePack, LocaleTable};
pub use responder::Responder;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - Teachable Rule-Based Chat Bot", NAME, VERSION)
}
