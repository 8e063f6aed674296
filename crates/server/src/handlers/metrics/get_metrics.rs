use axum::{http::StatusCode, response::IntoResponse};

/// Handler for the Prometheus metrics endpoint (text format)
pub async fn get_metrics() -> impl IntoResponse {
    match crate::metrics::gather_metrics() {
        Ok(metrics) => (
            StatusCode::OK,
            [("Content-Type", "text/plain; version=0.0.4")],
            metrics,
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Failed to gather metrics: {}", e),
        )
            .into_response(),
    }
}
