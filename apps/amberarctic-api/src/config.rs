use axum::http::HeaderValue;
use core_config::{AppInfo, FromEnv, app_info, env_flag, server::ServerConfig};
use database::mongodb::MongoConfig;
use tower_http::cors::CorsLayer;

pub use core_config::Environment;

pub const DEFAULT_MONGODB_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "amberarctic";

/// Application configuration, composed from the shared config pieces
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Browser origin allowed to call the API with credentials (`FRONTEND_URL`)
    pub frontend_url: Option<String>,
    /// Insert the sample catalog on startup when it is empty (`SEED_SAMPLE_DATA`)
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env_with_defaults(DEFAULT_MONGODB_URL, DEFAULT_DATABASE)?;
        let server = ServerConfig::from_env()?;
        let frontend_url = std::env::var("FRONTEND_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty() && url != "*");
        let seed_sample_data = env_flag("SEED_SAMPLE_DATA", true)?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            frontend_url,
            seed_sample_data,
        })
    }

    /// CORS restricted to `frontend_url` when it is a valid header value, any origin otherwise.
    pub fn cors_layer(&self) -> CorsLayer {
        let Some(url) = self.frontend_url.as_deref() else {
            return axum_helpers::create_permissive_cors_layer();
        };

        match HeaderValue::from_str(url) {
            Ok(origin) => axum_helpers::create_cors_layer(origin),
            Err(e) => {
                tracing::warn!(frontend_url = url, error = %e, "Invalid FRONTEND_URL, allowing any origin");
                axum_helpers::create_permissive_cors_layer()
            }
        }
    }
}
