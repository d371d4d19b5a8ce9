//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use crate::error::config::ConfigError;

/// Application configuration.
///
/// Loaded once at startup via [`Config::from_env`]; `.env` files are honored when
/// the caller runs `dotenvy::dotenv()` beforehand.
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// Root directory of the character/relic catalog.
    pub catalog_path: PathBuf,
    /// Discord user ids permitted to run admin operations.
    pub admin_ids: Vec<i64>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - `ADMIN_IDS` contains a non-numeric entry
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            catalog_path: PathBuf::from(require_var("CATALOG_PATH")?),
            admin_ids: parse_admin_ids(&require_var("ADMIN_IDS")?)?,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses a comma-separated list of Discord user ids.
fn parse_admin_ids(raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: "ADMIN_IDS".to_string(),
                    reason: format!("{entry:?} is not a valid Discord user id"),
                })
        })
        .collect()
}
