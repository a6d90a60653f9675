//! Request construction for both providers.
//!
//! Inputs are trimmed and rejected when empty before any URL is built, and
//! every user-supplied value is percent-encoded on its way into the query
//! string.

use crate::error::{FinderError, Result};
use crate::models::SortOrder;
use url::Url;

/// Trims `raw` and rejects it when nothing is left.
pub fn validate_input(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FinderError::Validation("input is empty".to_string()));
    }
    Ok(trimmed.to_string())
}

pub fn build_search_url(
    base_url: &str,
    query: &str,
    sort: SortOrder,
    page: u32,
    per_page: u32,
) -> Result<Url> {
    let raw = format!(
        "{}/search/repositories?q={}&sort={}&page={}&per_page={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query),
        sort.as_str(),
        page.max(1),
        per_page
    );

    Url::parse(&raw).map_err(|e| FinderError::Config(format!("Invalid search URL {}: {}", raw, e)))
}

/// Which OpenWeather endpoint to hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherEndpoint {
    Current,
    Forecast,
}

impl WeatherEndpoint {
    fn path(&self) -> &'static str {
        match self {
            WeatherEndpoint::Current => "weather",
            WeatherEndpoint::Forecast => "forecast",
        }
    }
}

pub fn build_weather_url(
    base_url: &str,
    endpoint: WeatherEndpoint,
    city: &str,
    api_key: &str,
) -> Result<Url> {
    let raw = format!(
        "{}/{}?q={}&appid={}&units=metric",
        base_url.trim_end_matches('/'),
        endpoint.path(),
        urlencoding::encode(city),
        urlencoding::encode(api_key)
    );

    // The raw string embeds the API key, keep it out of the error text
    Url::parse(&raw).map_err(|e| {
        FinderError::Config(format!("Invalid weather URL for {}: {}", endpoint.path(), e))
    })
}
