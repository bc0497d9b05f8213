#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first_of, env_or_default};

/// Variables consulted for the connection string, in order
pub const URL_VARS: [&str; 3] = ["MONGODB_URL", "MONGO_URL", "DATABASE_URL"];

/// Variables consulted for the database name, in order
pub const DATABASE_VARS: [&str; 3] = ["MONGODB_DATABASE", "MONGO_DATABASE", "DATABASE_NAME"];

/// MongoDB connection settings
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "amberarctic")
///     .with_app_name("amberarctic-api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,
    pub database: String,
    /// Reported to the server in its connection logs
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Connection string with any `user:password@` section masked, for logs.
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        match rest.rsplit_once('@') {
            Some((_, host)) => format!("{}://***@{}", scheme, host),
            None => self.url.clone(),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::with_database("mongodb://localhost:27017", "default")
    }
}

#[cfg(feature = "config")]
fn parse_var<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}

#[cfg(feature = "config")]
impl MongoConfig {
    /// Like [`FromEnv::from_env`], but falls back to `default_url` / `default_database` when
    /// none of [`URL_VARS`] / [`DATABASE_VARS`] are set.
    pub fn from_env_with_defaults(
        default_url: &str,
        default_database: &str,
    ) -> Result<Self, ConfigError> {
        let url = env_first_of(&URL_VARS).unwrap_or_else(|| default_url.to_string());
        let database =
            env_first_of(&DATABASE_VARS).unwrap_or_else(|| default_database.to_string());
        Self::tuned_from_env(url, database)
    }

    /// Pool and timeout knobs shared by both constructors:
    /// `MONGODB_APP_NAME`, `MONGODB_MAX_POOL_SIZE` (100), `MONGODB_MIN_POOL_SIZE` (5),
    /// `MONGODB_CONNECT_TIMEOUT_SECS` (10), `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (30).
    fn tuned_from_env(url: String, database: String) -> Result<Self, ConfigError> {
        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: parse_var("MONGODB_MAX_POOL_SIZE", "100")?,
            min_pool_size: parse_var("MONGODB_MIN_POOL_SIZE", "5")?,
            connect_timeout_secs: parse_var("MONGODB_CONNECT_TIMEOUT_SECS", "10")?,
            server_selection_timeout_secs: parse_var(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                "30",
            )?,
        })
    }
}

/// Strict loader: a connection string and a database name must both be present.
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_first_of(&URL_VARS)
            .ok_or_else(|| ConfigError::MissingEnvVar(URL_VARS.join(" or ")))?;
        let database = env_first_of(&DATABASE_VARS)
            .ok_or_else(|| ConfigError::MissingEnvVar(DATABASE_VARS.join(" or ")))?;
        Self::tuned_from_env(url, database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_with_database() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "amberarctic");
        assert_eq!(config.url(), "mongodb://localhost:27017");
        assert_eq!(config.database(), "amberarctic");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
        assert_eq!(config.app_name, None);
    }

    #[test]
    fn test_mongo_config_with_app_name() {
        let config = MongoConfig::default().with_app_name("amberarctic-api");
        assert_eq!(config.app_name.as_deref(), Some("amberarctic-api"));
    }

    #[test]
    fn test_redacted_url_masks_credentials() {
        let config = MongoConfig::with_database("mongodb://admin:s3cret@db:27017/?tls=true", "x");
        assert_eq!(config.redacted_url(), "mongodb://***@db:27017/?tls=true");

        let plain = MongoConfig::with_database("mongodb://localhost:27017", "x");
        assert_eq!(plain.redacted_url(), "mongodb://localhost:27017");
    }

    #[cfg(feature = "config")]
    const ALL_VARS: [&str; 6] = [
        "MONGODB_URL",
        "MONGO_URL",
        "DATABASE_URL",
        "MONGODB_DATABASE",
        "MONGO_DATABASE",
        "DATABASE_NAME",
    ];

    #[cfg(feature = "config")]
    fn only(set: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS
            .iter()
            .map(|key| {
                let value = set.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
                (*key, value)
            })
            .collect()
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env() {
        temp_env::with_vars(
            only(&[
                ("MONGODB_URL", "mongodb://primary:27017"),
                ("DATABASE_URL", "mongodb://ignored:27017"),
                ("MONGODB_DATABASE", "catalog"),
            ]),
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://primary:27017");
                assert_eq!(config.database, "catalog");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_legacy_names() {
        temp_env::with_vars(
            only(&[
                ("DATABASE_URL", "mongodb://legacy:27017"),
                ("DATABASE_NAME", "amberarctic"),
            ]),
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://legacy:27017");
                assert_eq!(config.database, "amberarctic");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_missing_url() {
        temp_env::with_vars(only(&[("MONGODB_DATABASE", "catalog")]), || {
            let err = MongoConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("MONGODB_URL"));
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_with_defaults() {
        temp_env::with_vars(only(&[]), || {
            let config =
                MongoConfig::from_env_with_defaults("mongodb://localhost:27017", "amberarctic")
                    .unwrap();
            assert_eq!(config.url, "mongodb://localhost:27017");
            assert_eq!(config.database, "amberarctic");
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_rejects_bad_pool_size() {
        temp_env::with_var("MONGODB_MAX_POOL_SIZE", Some("lots"), || {
            let err = MongoConfig::from_env_with_defaults("mongodb://localhost:27017", "x")
                .unwrap_err();
            assert!(err.to_string().contains("MONGODB_MAX_POOL_SIZE"));
        });
    }
}
