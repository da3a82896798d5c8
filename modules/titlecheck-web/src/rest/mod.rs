use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use titlecheck_common::{TitleCheckError, TitleSubmission, UNEXPECTED_ERROR_MESSAGE};

use crate::AppState;

#[derive(Deserialize)]
pub struct VerifyQuery {
    title: Option<String>,
}

/// `GET /api/verify?title=...` returning the raw verdict as JSON.
pub async fn api_verify(
    State(state): State<Arc<AppState>>,
    Query(q): Query<VerifyQuery>,
) -> Response {
    let raw = q.title.unwrap_or_default();

    let title = match TitleSubmission::parse(&raw) {
        Ok(t) => t,
        Err(e) => {
            let message = match e {
                TitleCheckError::InvalidInput(msg) => msg,
                other => other.to_string(),
            };
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": message})),
            )
                .into_response();
        }
    };

    match state.source.generate(&title).await {
        Ok(result) => {
            info!(
                title_len = title.len(),
                probability = result.probability,
                status = %result.status,
                "API verdict"
            );
            Json(result).into_response()
        }
        Err(e) => {
            warn!(error = %e, "API verification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": UNEXPECTED_ERROR_MESSAGE})),
            )
                .into_response()
        }
    }
}
