mod error;

use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::{Html, Json},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{domain::ClassifiedBuckets, pipeline::CommentAnalyzer};

use error::ApiError;

const DASHBOARD_HTML: &str = include_str!("dashboard.html");

pub struct AppState {
    pub analyzer: CommentAnalyzer,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub video_url: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/analyze", post(analyze))
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ClassifiedBuckets>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(target: "web", error = %rejection, "rejected analyze payload");
        ApiError(rejection.body_text())
    })?;

    let video_url = request.video_url.unwrap_or_default();
    match state.analyzer.analyze(&video_url).await {
        Ok(buckets) => Ok(Json(buckets)),
        Err(err) => {
            tracing::error!(target: "web", error = %err, video_url = %video_url, "analysis failed");
            Err(err.into())
        }
    }
}
