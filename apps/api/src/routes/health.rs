use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::content::models::SERVICE_VERSION;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "content_generation",
        "timestamp": Utc::now().to_rfc3339(),
        "version": SERVICE_VERSION
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_version() {
        let Json(body) = health_handler().await;
        assert_eq!(body["status"], json!("healthy"));
        assert_eq!(body["version"], json!(SERVICE_VERSION));
        assert!(body["timestamp"].is_string());
    }
}
