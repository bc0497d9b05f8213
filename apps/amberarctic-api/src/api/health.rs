//! Service status, diagnostics and readiness endpoints

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusMessage {
    pub message: &'static str,
}

/// Outcome of the `/test` probe. Always answered with 200.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum Diagnostics {
    Connected {
        backend: &'static str,
        database: &'static str,
        /// Connection string with credentials masked
        database_url: String,
        database_name: String,
        connection_status: &'static str,
        collections: Vec<String>,
    },
    Failed {
        backend: &'static str,
        database: &'static str,
        error: String,
    },
}

/// Create the status router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses((status = 200, description = "API is running", body = StatusMessage))
)]
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Amberarctic API is running",
    })
}

/// Backend and database diagnostics
#[utoipa::path(
    get,
    path = "/test",
    tag = "Service",
    responses((status = 200, description = "Diagnostics; `database` is `error` when MongoDB is unreachable", body = Diagnostics))
)]
pub async fn diagnostics(State(state): State<AppState>) -> Json<Diagnostics> {
    match state.db.list_collection_names().await {
        Ok(mut collections) => {
            collections.sort();
            Json(Diagnostics::Connected {
                backend: "ok",
                database: "ok",
                database_url: state.config.mongodb.redacted_url(),
                database_name: state.config.mongodb.database().to_string(),
                connection_status: "connected",
                collections,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "Diagnostics could not reach MongoDB");
            Json(Diagnostics::Failed {
                backend: "ok",
                database: "error",
                error: e.to_string(),
            })
        }
    }
}

/// Readiness: 503 while MongoDB does not answer a ping
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let client = state.mongo_client.clone();
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async move {
            let status = database::mongodb::check_health(&client).await;
            if status.healthy {
                Ok(())
            } else {
                Err(status
                    .message
                    .unwrap_or_else(|| "ping failed".to_string()))
            }
        }),
    )];

    run_health_checks(checks).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_banner() {
        let Json(body) = root().await;
        assert_eq!(body.message, "Amberarctic API is running");
    }

    #[test]
    fn test_diagnostics_shapes() {
        let failed = serde_json::to_value(Diagnostics::Failed {
            backend: "ok",
            database: "error",
            error: "connection refused".to_string(),
        })
        .unwrap();
        assert_eq!(
            failed,
            serde_json::json!({
                "backend": "ok",
                "database": "error",
                "error": "connection refused"
            })
        );

        let connected = serde_json::to_value(Diagnostics::Connected {
            backend: "ok",
            database: "ok",
            database_url: "mongodb://***@db:27017".to_string(),
            database_name: "amberarctic".to_string(),
            connection_status: "connected",
            collections: vec!["jacket".to_string(), "review".to_string()],
        })
        .unwrap();
        assert_eq!(connected["connection_status"], "connected");
        assert_eq!(connected["collections"][1], "review");
        assert!(connected.get("error").is_none());
    }
}
