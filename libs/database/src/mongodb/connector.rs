use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::{info, instrument};

use super::{MongoConfig, MongoError};
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Build a client from `config` and verify the deployment answers a `ping`.
///
/// The driver connects lazily, so without the ping a wrong URL would only surface on the
/// first request.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "amberarctic");
/// let client = connect_from_config(&config).await?;
/// let db = client.database(config.database());
/// ```
#[instrument(skip(config), fields(url = %config.redacted_url(), database = %config.database))]
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] wrapped in exponential backoff, for startup against a database
/// container that may still be booting. `None` uses the default policy.
///
/// # Example
/// ```ignore
/// use database::common::RetryConfig;
/// use database::mongodb::connect_from_config_with_retry;
///
/// let client =
///     connect_from_config_with_retry(&config, Some(RetryConfig::new().with_max_retries(5)))
///         .await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let config = MongoConfig::with_database("not-a-mongo-url", "amberarctic");
        let result = connect_from_config(&config).await;
        assert!(matches!(result, Err(MongoError::Mongo(_))));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect_from_config() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let config = MongoConfig::with_database(url, "amberarctic_test");
        assert!(connect_from_config(&config).await.is_ok());
    }
}
