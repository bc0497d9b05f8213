use mongodb::{Client, bson::doc};
use serde::Serialize;
use std::time::Instant;

/// Outcome of a MongoDB `ping`
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Driver error text when unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Ping the deployment through the `admin` database and time the round-trip.
///
/// # Example
/// ```ignore
/// let status = database::mongodb::check_health(&client).await;
/// if !status.healthy {
///     tracing::warn!(error = ?status.message, "MongoDB unreachable");
/// }
/// ```
pub async fn check_health(client: &Client) -> HealthStatus {
    let start = Instant::now();
    let result = client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_omits_empty_message() {
        let status = HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: 3,
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json, serde_json::json!({ "healthy": true, "response_time_ms": 3 }));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let status = check_health(&client).await;
        assert!(status.healthy);
        assert!(status.message.is_none());
    }
}
