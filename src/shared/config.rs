//! Process-wide configuration, read once from the environment at startup.

use std::collections::HashMap;
use std::env::VarError;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_JUNK_KEYWORDS: &str = "edition|bluray|dvd";
pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_UPC_LOOKUP_URL: &str = "https://api.upcitemdb.com/prod/trial/lookup";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

const ENV_KEYS: [&str; 9] = [
    "PORT",
    "JELLYFIN_URL",
    "JELLYFIN_API_KEY",
    "TMDB_API_KEY",
    "TMDB_LANG",
    "JUNK_KEYWORDS",
    "UPC_LOOKUP_URL",
    "STATIC_DIR",
    "HTTP_TIMEOUT_SECS",
];

/// Library index connection settings.
#[derive(Debug, Clone)]
pub struct JellyfinConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Metadata service settings. Absent when no credential is configured.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jellyfin: JellyfinConfig,
    pub tmdb: Option<TmdbConfig>,
    /// Locale used when fetching the canonical title.
    pub locale: String,
    /// Case-insensitive regex of marketing keywords stripped from barcode titles.
    pub junk_keywords: String,
    pub upc_lookup_url: String,
    pub static_dir: String,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> AppResult<Self> {
        Self::from_vars(Self::read_vars(|key| std::env::var(key))?)
    }

    /// Collect the recognised variables through `lookup`; unrelated ones are never read.
    fn read_vars<F>(lookup: F) -> AppResult<HashMap<String, String>>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut vars = HashMap::new();
        for key in ENV_KEYS {
            match lookup(key) {
                Ok(value) => {
                    vars.insert(key.to_string(), value);
                }
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(_)) => {
                    return Err(AppError::ConfigError(format!("{} is not valid UTF-8", key)));
                }
            }
        }
        Ok(vars)
    }

    /// Build configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> AppResult<Self> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let require = |key: &str| {
            get(key).ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::ConfigError(format!("PORT: {}", e)))?,
            None => DEFAULT_PORT,
        };

        let http_timeout_secs = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| AppError::ConfigError(format!("HTTP_TIMEOUT_SECS: {}", e)))?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            jellyfin: JellyfinConfig {
                base_url: require("JELLYFIN_URL")?.trim_end_matches('/').to_string(),
                api_key: require("JELLYFIN_API_KEY")?,
            },
            tmdb: get("TMDB_API_KEY").map(|api_key| TmdbConfig { api_key }),
            locale: get("TMDB_LANG").unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            junk_keywords: get("JUNK_KEYWORDS")
                .unwrap_or_else(|| DEFAULT_JUNK_KEYWORDS.to_string()),
            upc_lookup_url: get("UPC_LOOKUP_URL")
                .unwrap_or_else(|| DEFAULT_UPC_LOOKUP_URL.to_string()),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }

    pub fn normalization_enabled(&self) -> bool {
        self.tmdb.is_some()
    }
}
