use crate::config::{FinderConfig, DEFAULT_GITHUB_API_URL, DEFAULT_WEATHER_API_URL};
use crate::messages::Locale;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "finder")]
#[command(about = "Finder - Browse GitHub repositories and OpenWeather conditions from a local web page")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Address to bind the local web server to
    #[arg(long, env = "FINDER_BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port for the local web server
    #[arg(long, short = 'p', env = "FINDER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    pub github_api_url: String,

    /// Optional GitHub token, raises the search rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// OpenWeather API base URL
    #[arg(long, env = "OPENWEATHER_API_URL", default_value = DEFAULT_WEATHER_API_URL)]
    pub weather_api_url: String,

    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, default_value = "")]
    pub weather_api_key: String,

    /// File holding the recent-city history
    #[arg(long, env = "FINDER_STORAGE", default_value = "finder-storage.json")]
    pub storage_file: PathBuf,

    /// Language of user-visible messages
    #[arg(long, env = "FINDER_LOCALE", value_enum, default_value_t = Locale::En)]
    pub locale: Locale,

    /// Per-request timeout in seconds
    #[arg(long, env = "FINDER_REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,
}

impl Cli {
    pub fn to_config(&self) -> FinderConfig {
        FinderConfig {
            github_api_url: self.github_api_url.clone(),
            github_token: self.github_token.clone().filter(|t| !t.is_empty()),
            weather_api_url: self.weather_api_url.clone(),
            weather_api_key: self.weather_api_key.clone(),
            history_path: self.storage_file.clone(),
            locale: self.locale,
            request_timeout: Duration::from_secs(self.request_timeout),
            ..Default::default()
        }
    }
}
