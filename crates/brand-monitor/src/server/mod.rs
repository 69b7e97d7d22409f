//! HTTP API

mod handlers;

pub use handlers::{ApiError, analyze_brand, health, root};

use crate::crew::BrandAnalyzer;
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// API version reported by `/health`
pub const API_VERSION: &str = "1.0.0";

/// State shared by the handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn BrandAnalyzer>,
}

/// Any origin, method and header
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the application router
pub fn router(analyzer: Arc<dyn BrandAnalyzer>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/analyze-brand", post(analyze_brand))
        .with_state(AppState { analyzer })
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Serve the API on `addr` until Ctrl-C
pub async fn serve(addr: SocketAddr, analyzer: Arc<dyn BrandAnalyzer>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "Brand Monitor API listening");

    axum::serve(listener, router(analyzer))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::MockBrandAnalyzer;
    use crate::crew::testing::{NIKE_REPORT, RoleProvider, crew_with};
    use crate::error::BrandError;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn analyze_request(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze-brand")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_root() {
        let app = router(Arc::new(MockBrandAnalyzer::new()));
        let (status, body) = send(app, get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Welcome to Brand Monitor API",
                "docs": "/docs",
                "redoc_url": "/redoc"
            })
        );
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(Arc::new(MockBrandAnalyzer::new()));
        let (status, body) = send(app, get_request("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], API_VERSION);
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_empty_competitors_rejected_without_running() {
        let mut analyzer = MockBrandAnalyzer::new();
        analyzer.expect_analyze().times(0);
        let app = router(Arc::new(analyzer));

        let (status, body) = send(
            app,
            analyze_request(&json!({"brand_name": "Nike", "competitors": []})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "At least one competitor must be provided"}));
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let mut analyzer = MockBrandAnalyzer::new();
        analyzer
            .expect_analyze()
            .withf(|request| request.brand_name == "Nike" && request.competitors.len() == 1)
            .times(1)
            .returning(|_| Ok("# Report".to_string()));
        let app = router(Arc::new(analyzer));

        let (status, body) = send(
            app,
            analyze_request(&json!({
                "brand_name": "Nike",
                "competitors": [{"name": "Adidas", "ticker": "ADDYY"}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "status": "SUCCESS",
                "message": "Brand analysis completed successfully",
                "report": "# Report"
            })
        );
    }

    #[tokio::test]
    async fn test_failure_envelope() {
        let mut analyzer = MockBrandAnalyzer::new();
        analyzer
            .expect_analyze()
            .returning(|_| Err(BrandError::Config("boom".into())));
        let app = router(Arc::new(analyzer));

        let (status, body) = send(
            app,
            analyze_request(&json!({
                "brand_name": "Nike",
                "competitors": [{"name": "Adidas", "ticker": "ADDYY"}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ERROR");
        assert_eq!(body["message"], "Failed to generate brand analysis");
        assert_eq!(body["error"], "Configuration error: boom");
        assert!(body.get("report").is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let mut analyzer = MockBrandAnalyzer::new();
        analyzer.expect_analyze().times(0);
        let app = router(Arc::new(analyzer));

        let (status, _) = send(app, analyze_request(&json!({"brand_name": "Nike"}))).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_full_crew_report() {
        let app = router(Arc::new(crew_with(RoleProvider::new(None))));
        let (status, body) = send(
            app,
            analyze_request(&json!({
                "brand_name": "Nike",
                "competitors": [{"name": "Adidas", "ticker": "ADDYY"}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["report"], NIKE_REPORT);
        for heading in [
            "Public Sentiment Overview",
            "Financial Summary",
            "Competitor Comparison",
            "Key Insights",
            "Recommendations",
        ] {
            assert!(body["report"].as_str().unwrap().contains(heading), "{heading}");
        }
    }

    #[tokio::test]
    async fn test_full_crew_finance_failure() {
        let provider = RoleProvider::new(Some("Financial Intelligence Analyst"));
        let app = router(Arc::new(crew_with(provider)));
        let (status, body) = send(
            app,
            analyze_request(&json!({
                "brand_name": "Nike",
                "competitors": [{"name": "Adidas", "ticker": "ADDYY"}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ERROR");
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert!(body.get("report").is_none());
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = router(Arc::new(MockBrandAnalyzer::new()));
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://dashboard.example")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
