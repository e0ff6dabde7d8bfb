use crate::directory::MAX_RECORDS;
use crate::user_source::DEFAULT_USERS_URL;
use std::time::Duration;
#[cfg(any(debug_assertions, test))]
use tracing::{info, warn};

/// Delay before the fetch starts, so the loading state stays visible
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(2000);

/// Application configuration
/// In debug builds: defaults, overridable from a .env file or the environment
/// In release builds: the fixed defaults
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Endpoint returning a JSON array of users
    pub users_url: String,
    /// Artificial delay before the request is sent
    pub fetch_delay: Duration,
    /// How many records the directory keeps
    pub max_records: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_url: DEFAULT_USERS_URL.to_string(),
            fetch_delay: DEFAULT_FETCH_DELAY,
            max_records: MAX_RECORDS,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            }

            Self::from_env()
        }

        #[cfg(not(debug_assertions))]
        {
            Self::default()
        }
    }

    /// Apply ROSTER_* overrides on top of the defaults (dev mode)
    #[cfg(debug_assertions)]
    fn from_env() -> Self {
        Self::from_vars(
            std::env::var("ROSTER_API_URL").ok(),
            std::env::var("ROSTER_FETCH_DELAY_MS").ok(),
        )
    }

    #[cfg(any(debug_assertions, test))]
    fn from_vars(users_url: Option<String>, fetch_delay_ms: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = users_url.filter(|u| !u.trim().is_empty()) {
            info!("Using users endpoint override: {}", url);
            config.users_url = url;
        }

        if let Some(raw) = fetch_delay_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.fetch_delay = Duration::from_millis(ms),
                Err(e) => warn!("Ignoring invalid ROSTER_FETCH_DELAY_MS '{}': {}", raw, e),
            }
        }

        config
    }
}
