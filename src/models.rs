use crate::types::{CurrentWeatherResponse, ForecastSlot, GitHubRepo};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_OWNER: &str = "unknown";

/// Sort option accepted by the repository search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Stars,
    Forks,
    Updated,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Stars, SortOrder::Forks, SortOrder::Updated];

    /// Anything outside the allow-list falls back to `Stars`.
    pub fn from_input(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("forks") => SortOrder::Forks,
            Some("updated") => SortOrder::Updated,
            _ => SortOrder::Stars,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Stars => "stars",
            SortOrder::Forks => "forks",
            SortOrder::Updated => "updated",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query, sort and paging position of the active repository search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub sort: SortOrder,
    pub page: u32,
    pub total_results: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortOrder::Stars,
            page: 1,
            total_results: 0,
        }
    }
}

/// One repository as rendered in the result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub primary_language: Option<String>,
    pub url: String,
}

impl From<GitHubRepo> for RepositorySummary {
    fn from(repo: GitHubRepo) -> Self {
        let owner = repo
            .owner
            .and_then(|o| o.login)
            .filter(|login| !login.is_empty())
            .unwrap_or_else(|| UNKNOWN_OWNER.to_string());

        Self {
            owner,
            name: repo
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
            description: repo.description.filter(|d| !d.is_empty()),
            star_count: repo.stargazers_count.unwrap_or(0),
            fork_count: repo.forks_count.unwrap_or(0),
            primary_language: repo.language.filter(|l| !l.is_empty()),
            url: repo.html_url.unwrap_or_default(),
        }
    }
}

/// A single page returned by the search provider
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub total_count: u64,
    pub items: Vec<RepositorySummary>,
    pub rate_limit: Option<RateLimitState>,
}

/// Current conditions for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city_name: String,
    pub country: String,
    pub condition_main: String,
    pub description: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
}

impl From<CurrentWeatherResponse> for WeatherSnapshot {
    fn from(data: CurrentWeatherResponse) -> Self {
        let (condition_main, description) = data
            .weather
            .into_iter()
            .next()
            .map(|w| {
                let description = w.description.unwrap_or_else(|| w.main.to_lowercase());
                (w.main, description)
            })
            .unwrap_or_default();

        Self {
            city_name: data.name,
            country: data.sys.and_then(|s| s.country).unwrap_or_default(),
            condition_main,
            description,
            temperature_c: data.main.temp,
            humidity_pct: data.main.humidity.unwrap_or(0),
            wind_speed: data.wind.map(|w| w.speed).unwrap_or(0.0),
        }
    }
}

/// One midday forecast slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub day_label: String,
    pub condition_main: String,
    pub temperature_c: f64,
}

impl ForecastEntry {
    /// Builds an entry from a raw slot, `None` when the timestamp does not parse.
    pub fn from_slot(slot: &ForecastSlot) -> Option<Self> {
        let timestamp =
            chrono::NaiveDateTime::parse_from_str(&slot.dt_txt, "%Y-%m-%d %H:%M:%S").ok()?;

        Some(Self {
            day_label: timestamp.format("%a").to_string(),
            condition_main: slot
                .weather
                .first()
                .map(|w| w.main.clone())
                .unwrap_or_default(),
            temperature_c: slot.main.temp,
        })
    }
}

/// Rate limit state reported by the search provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: chrono::DateTime<chrono::Utc>,
    pub is_limited: bool,
}

impl Default for RateLimitState {
    fn default() -> Self {
        Self {
            remaining: 60,
            limit: 60,
            reset_time: chrono::Utc::now() + chrono::Duration::hours(1),
            is_limited: false,
        }
    }
}
