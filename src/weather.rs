use crate::config::FinderConfig;
use crate::error::{FinderError, Result};
use crate::models::{ForecastEntry, WeatherSnapshot};
use crate::query::{build_weather_url, WeatherEndpoint};
use crate::types::{CurrentWeatherResponse, ForecastResponse, ForecastSlot};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Forecast slots are three hours apart; this one stands in for the whole day.
pub const MIDDAY_MARKER: &str = "12:00:00";

const DEFAULT_ICON: &str = "🌤️";

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(config: &FinderConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(WeatherClient {
            client,
            base_url: config.weather_api_url.clone(),
            api_key: config.weather_api_key.clone(),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: WeatherEndpoint, city: &str) -> Result<T> {
        let url = build_weather_url(&self.base_url, endpoint, city, &self.api_key)?;
        debug!(?endpoint, city, "Fetching weather");

        let response = self.client.get(url).send().await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| {
                    FinderError::Provider(format!("Malformed {:?} response: {}", endpoint, e))
                })
            }
            StatusCode::NOT_FOUND => Err(FinderError::NotFound(format!("{:?} for {}", endpoint, city))),
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => Err(FinderError::RateLimited(
                format!("OpenWeather refused {:?} request", endpoint),
            )),
            status => Err(FinderError::Provider(format!(
                "{:?} request failed with status {}",
                endpoint, status
            ))),
        }
    }

    /// Current conditions for `city`
    pub async fn current(&self, city: &str) -> Result<WeatherSnapshot> {
        let data: CurrentWeatherResponse = self.fetch(WeatherEndpoint::Current, city).await?;
        Ok(WeatherSnapshot::from(data))
    }

    /// Midday forecast entries for `city`, one per day
    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>> {
        let data: ForecastResponse = self.fetch(WeatherEndpoint::Forecast, city).await?;
        Ok(filter_midday(&data.list))
    }
}

/// Keeps only the slots stamped at midday.
pub fn filter_midday(slots: &[ForecastSlot]) -> Vec<ForecastEntry> {
    slots
        .iter()
        .filter(|slot| slot.dt_txt.contains(MIDDAY_MARKER))
        .filter_map(ForecastEntry::from_slot)
        .collect()
}

pub fn weather_icon(condition: &str) -> &'static str {
    match condition {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Snow" => "❄️",
        "Thunderstorm" => "⛈️",
        _ => DEFAULT_ICON,
    }
}
