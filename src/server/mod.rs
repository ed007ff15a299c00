//! Web server module
//!
//! Thin HTTP wrapper over the responder: the caller posts raw text and gets
//! the reply string back unmodified.

pub mod http;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::knowledge::KnowledgeStore;
use crate::responder::Responder;

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    /// Responder behind a mutex: teaching mutates the store, and the design
    /// assumes at most one logical writer at a time.
    pub responder: Arc<Mutex<Responder>>,
}

/// Build the application router around a responder.
pub fn app(responder: Responder, allowed_origins: &[String]) -> Result<Router> {
    let state = ServerState {
        responder: Arc::new(Mutex::new(responder)),
    };

    Ok(Router::new()
        .route("/", get(http::index_handler))
        .route("/status", get(http::status_handler))
        .route("/chat", post(http::chat_handler))
        .layer(cors_layer(allowed_origins)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Start the web server
pub async fn start(host: &str, port: u16, config: Config) -> Result<()> {
    let store = KnowledgeStore::load(&config.store.path)?;
    let entries = store.len();
    let responder = Responder::new(store, config.locales.clone());

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Invalid server address")?;

    let app = app(responder, &config.server.allowed_origins)?;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("     Chat Agent Server Starting");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    println!("✓ Server binding to: {}", addr);
    println!("✓ Knowledge file: {}", config.store.path.display());
    println!("✓ Knowledge entries: {}", entries);
    println!();
    println!("🚀 Listening on http://{}", addr);
    println!();

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}

/// Build the CORS layer from the configured origins; an empty list allows
/// any origin.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let values = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(values)))
}
