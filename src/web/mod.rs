// Web server: Axum-based summarization API.
//
// Serves a single upload form at / and the JSON API under /api. The form
// page is compiled into the binary, so the server has no asset directory.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::extract::fetch::build_http_client;
use crate::summarize::Summarizer;

pub mod handlers;

const INDEX_HTML: &str = include_str!("../../web/index.html");

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, summarizer: Summarizer) -> Result<Self> {
        Ok(Self {
            http: build_http_client(config.fetch_timeout)?,
            summarizer: Arc::new(summarizer),
            config: Arc::new(config),
        })
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(state: AppState, bind: &str, port: u16) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Gist listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    let api = Router::new()
        .route("/api/summarize", post(handlers::summarize::summarize))
        .route("/summarize", post(handlers::summarize::summarize))
        .layer(DefaultBodyLimit::max(upload_limit));

    Router::new()
        .route("/", get(index))
        .route("/health", get(handlers::health::health))
        .merge(api)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
