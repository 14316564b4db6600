//! HTTP endpoints.
//!
//! | Route | Serves |
//! |-------|--------|
//! | `GET /bbc`, `/guardian`, `/usatoday`, `/techcrunch` | one source |
//! | `GET /news` | every source, merged |
//! | `GET /healthz` | liveness probe |
//!
//! Failures are logged and answered with a 500 and a fixed message; error details
//! never reach the client.

use crate::aggregator::{retain_titled, scrape_all};
use crate::models::Source;
use crate::scrapers::Scraper;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<Scraper>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/news", get(news))
        .route("/healthz", get(health));

    for source in Source::ALL {
        router = router.route(
            &format!("/{}", source.slug()),
            get(move |State(state): State<AppState>| async move {
                headlines(&state, source).await
            }),
        );
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn headlines(state: &AppState, source: Source) -> Response {
    match state.scraper.scrape(source).await {
        Ok(articles) => {
            let articles = retain_titled(articles);
            info!(%source, count = articles.len(), "Serving headlines");
            (StatusCode::OK, Json(articles)).into_response()
        }
        Err(e) => {
            error!(%source, error = %e, "Scrape failed");
            internal_error(format!("Error fetching {} headlines", source.name()))
        }
    }
}

async fn news(State(state): State<AppState>) -> Response {
    match scrape_all(&state.scraper).await {
        Ok(articles) => {
            info!(count = articles.len(), "Serving combined headlines");
            (StatusCode::OK, Json(articles)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Combined scrape failed");
            internal_error("Error fetching headlines".to_string())
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn internal_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { message }),
    )
        .into_response()
}
