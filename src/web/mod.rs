// Web server — Axum single-form frontend for the matching pipeline.
//
// One page: GET renders the form, POST runs the pipeline (keywords →
// sequential per-source fetch → similarity → match list) synchronously
// within the request and re-renders the form with results. A missing
// `user_input` field is rejected by the Form extractor itself — there is
// no domain-specific handling for it.

use std::sync::Arc;

use anyhow::Result;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::fetch::FetchClient;
use crate::sources::{default_sources, Source};

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sources: Arc<Vec<Source>>,
    pub fetcher: Arc<FetchClient>,
}

impl AppState {
    /// State over the built-in source list.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_sources(config, default_sources())
    }

    /// State over an explicit source list — used by tests to avoid the
    /// live sites.
    pub fn with_sources(config: Config, sources: Vec<Source>) -> Result<Self> {
        let fetcher = FetchClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            sources: Arc::new(sources),
            fetcher: Arc::new(fetcher),
        })
    }
}

/// Start the web server and block until it exits.
pub async fn run_server(config: Config, bind: &str, port: u16) -> Result<()> {
    let state = AppState::new(config)?;
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("newsmatch listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router: the form page plus a health probe.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
