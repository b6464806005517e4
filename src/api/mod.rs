//! HTTP layer serving the review form and JSON API.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{config::Settings, pipeline::ReviewPipeline};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ReviewPipeline>,
}

/// Routes without a listener, so tests can drive them directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/review", post(routes::review_form))
        .route("/api/review", post(routes::review_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let pipeline = ReviewPipeline::from_settings(&settings).await?;
    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving lit-review");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
