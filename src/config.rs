use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.valantis.store:41000/";
const DEFAULT_API_SECRET: &str = "Valantis";
const DEFAULT_PAGE_SIZE: u32 = 50;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration
/// In debug builds: loads overrides from a .env file if one is present
#[derive(Clone, Debug)]
pub struct Config {
    /// Catalog API endpoint (single URL, POST-only)
    pub api_url: String,
    /// Shared secret the catalog API derives its daily auth token from.
    /// Dictated by the remote API's contract, not a credential we own.
    pub api_secret: String,
    /// Products per identifier window
    pub page_size: u32,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_secret: DEFAULT_API_SECRET.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                tracing::debug!("Config: Dev mode - loaded .env file");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables, falling back to defaults
    fn from_env() -> Self {
        let defaults = Self::default();

        let api_url = std::env::var("VITRINE_API_URL").unwrap_or(defaults.api_url);
        let api_secret = std::env::var("VITRINE_API_SECRET").unwrap_or(defaults.api_secret);

        let page_size = std::env::var("VITRINE_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.page_size);

        let request_timeout = std::env::var("VITRINE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Self {
            api_url,
            api_secret,
            page_size,
            request_timeout,
        }
    }
}
