//! Health probe endpoint

use crate::client::NutrijamaClient;
use crate::error::ApiResult;
use serde::Deserialize;

/// Health check response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    /// Service status ("ok" when healthy)
    pub status: String,
    /// Deployed service version, if reported
    pub version: Option<String>,
}

impl HealthResponse {
    /// Whether the service reports itself healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "ok"
    }
}

/// Health probe API interface
#[derive(Clone)]
pub struct HealthApi {
    client: NutrijamaClient,
}

impl HealthApi {
    /// Create a new health API interface
    pub(crate) fn new(client: NutrijamaClient) -> Self {
        Self { client }
    }

    /// Probe the service
    ///
    /// GET /health
    pub async fn check(&self) -> ApiResult<HealthResponse> {
        self.client.get("health").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_deserialize() {
        let json = r#"{"status": "ok", "version": "0.4.0"}"#;
        let health: HealthResponse = serde_json::from_str(json).unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.version.as_deref(), Some("0.4.0"));
    }

    #[test]
    fn test_unhealthy_status() {
        let json = r#"{"status": "degraded"}"#;
        let health: HealthResponse = serde_json::from_str(json).unwrap();
        assert!(!health.is_healthy());
    }
}
