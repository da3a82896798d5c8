use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use titlecheck_common::{Config, MockVerdictGenerator, VerdictSource};

mod components;
mod pages;
mod rest;
mod templates;

pub struct AppState {
    pub source: Arc<dyn VerdictSource>,
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(|| async { "ok" }))
        // Form (Dioxus SSR)
        .route("/", get(pages::index_page))
        .route("/verify", post(pages::verify_submit))
        .route("/reset", get(pages::reset))
        // JSON API
        .route("/api/verify", get(rest::api_verify))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Verdicts are random; never cache them
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only (titles travel in the body or query)
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("titlecheck=info".parse()?))
        .init();

    let config = Config::from_env()?;

    let state = Arc::new(AppState {
        source: Arc::new(MockVerdictGenerator::from_config(&config)),
    });

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!(
        delay_ms = config.generator_delay.as_millis() as u64,
        blacklist_terms = config.blacklist.len(),
        "Title Check starting on {addr}"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
