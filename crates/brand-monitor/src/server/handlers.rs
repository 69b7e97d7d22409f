//! Route handlers

use super::{API_VERSION, AppState};
use crate::models::{AnalysisRequest, AnalysisResponse};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::{error, info};

/// Error answered with an HTTP status and a `detail` message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Brand Monitor API",
        "docs": "/docs",
        "redoc_url": "/redoc"
    }))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "version": API_VERSION
    }))
}

/// `POST /api/v1/analyze-brand`
///
/// An empty competitor list is a 400. Anything that goes wrong while the
/// crew runs is a 200 with `status: "ERROR"`.
pub async fn analyze_brand(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    if request.competitors.is_empty() {
        return Err(ApiError::bad_request(
            "At least one competitor must be provided",
        ));
    }

    info!(
        brand = %request.brand_name,
        competitors = request.competitors.len(),
        "Brand analysis requested"
    );

    match state.analyzer.analyze(request).await {
        Ok(report) => Ok(Json(AnalysisResponse::success(report))),
        Err(e) => {
            error!(error = %e, "Brand analysis failed");
            Ok(Json(AnalysisResponse::failure(e.to_string())))
        }
    }
}
