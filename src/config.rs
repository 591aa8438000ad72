use crate::secure_config::SecureConfig;
use crate::tmdb::client::DEFAULT_BASE_URL as DEFAULT_TMDB_BASE_URL;
use tracing::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
/// In release builds: environment only
/// Secrets missing from the environment fall back to the system keychain.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the movie backend (`/movies` lives under it)
    pub api_base_url: String,
    /// Base URL of the TMDB v3 API
    pub tmdb_base_url: String,
    /// TMDB read access token used for searching
    pub tmdb_read_token: Option<String>,
    /// Access token that takes precedence over the stored session (dev only)
    pub access_token_override: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            tmdb_read_token: None,
            access_token_override: None,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load(secure_config: &SecureConfig) -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        let mut config = Self::from_lookup(|key| std::env::var(key).ok());

        if config.tmdb_read_token.is_none() {
            match secure_config.get() {
                Ok(data) => config.tmdb_read_token = data.tmdb_read_token.clone(),
                Err(e) => warn!("Config: Could not read keychain: {}", e),
            }
        }

        if config.tmdb_read_token.is_none() {
            warn!("Config: No TMDB read token configured, movie search will fail");
        }

        config
    }

    /// Build the configuration from a variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url =
            non_empty("MARQUEE_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let tmdb_base_url =
            non_empty("TMDB_API_BASE_URL").unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string());
        let tmdb_read_token = non_empty("TMDB_READ_TOKEN");

        // The override is only honoured in dev builds
        let access_token_override = if cfg!(debug_assertions) {
            non_empty("MARQUEE_ACCESS_TOKEN")
        } else {
            None
        };

        info!("Config: Backend at {}", api_base_url);

        Self {
            api_base_url,
            tmdb_base_url,
            tmdb_read_token,
            access_token_override,
        }
    }
}
