use crate::error::{FinderError, Result};
use crate::messages::Locale;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Results per page requested from the search provider
pub const PER_PAGE: u32 = 10;

/// The search API never exposes more than this many results
pub const MAX_VISIBLE_RESULTS: u64 = 1000;

/// Recent cities kept in history
pub const HISTORY_LIMIT: usize = 5;

/// Runtime configuration shared by both clients
#[derive(Debug, Clone)]
pub struct FinderConfig {
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub weather_api_url: String,
    pub weather_api_key: String,
    pub per_page: u32,
    pub max_visible_results: u64,
    pub history_limit: usize,
    pub history_path: PathBuf,
    pub locale: Locale,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            github_token: None,
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            weather_api_key: String::new(),
            per_page: PER_PAGE,
            max_visible_results: MAX_VISIBLE_RESULTS,
            history_limit: HISTORY_LIMIT,
            history_path: PathBuf::from("finder-storage.json"),
            locale: Locale::En,
            request_timeout: Duration::from_secs(30),
            user_agent: format!("finder/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FinderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(FinderError::Config("per_page must be greater than 0".into()));
        }
        if self.history_limit == 0 {
            return Err(FinderError::Config("history_limit must be greater than 0".into()));
        }
        if self.request_timeout.is_zero() {
            return Err(FinderError::Config("request_timeout must be greater than 0".into()));
        }
        for (name, value) in [
            ("github_api_url", &self.github_api_url),
            ("weather_api_url", &self.weather_api_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| FinderError::Config(format!("{} is not a valid URL: {}", name, e)))?;
        }
        Ok(())
    }
}
