use super::{escape_html, ErrorBanner};
use crate::messages::{MessageId, Messages};
use crate::models::{ForecastEntry, WeatherSnapshot};
use crate::weather::weather_icon;

/// Content of the current-conditions or forecast slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WeatherPanel {
    #[default]
    Empty,
    Loading,
    Ready(String),
}

impl WeatherPanel {
    pub fn render(&self, messages: &Messages) -> String {
        match self {
            WeatherPanel::Empty => String::new(),
            WeatherPanel::Loading => format!(
                r#"<div class="loading">{}</div>"#,
                escape_html(messages.get(MessageId::Loading))
            ),
            WeatherPanel::Ready(html) => html.clone(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, WeatherPanel::Ready(_))
    }
}

/// Weather panel state: input, both result slots, recent list and banner
#[derive(Debug, Clone, Default)]
pub struct WeatherDocument {
    pub input: String,
    pub current: WeatherPanel,
    pub forecast: WeatherPanel,
    pub recent: Vec<String>,
    pub banner: ErrorBanner,
}

/// Half-up rounding to whole degrees, so -2.5 becomes -2.
pub fn round_temperature(celsius: f64) -> i64 {
    (celsius + 0.5).floor() as i64
}

pub fn render_current(snapshot: &WeatherSnapshot, messages: &Messages) -> String {
    let location = if snapshot.country.is_empty() {
        escape_html(&snapshot.city_name)
    } else {
        format!(
            "{}, {}",
            escape_html(&snapshot.city_name),
            escape_html(&snapshot.country)
        )
    };

    format!(
        concat!(
            r#"<div class="weather-card"><div class="current-weather"><div>"#,
            "<h2>{location}</h2>",
            "<p>{description} {icon}</p>",
            r#"<p class="temp-display">{temp}°C</p>"#,
            "<p>{humidity_label}: {humidity}% | {wind_label}: {wind} m/s</p>",
            "</div></div></div>"
        ),
        location = location,
        description = escape_html(&snapshot.description),
        icon = weather_icon(&snapshot.condition_main),
        temp = round_temperature(snapshot.temperature_c),
        humidity_label = escape_html(messages.get(MessageId::Humidity)),
        humidity = snapshot.humidity_pct,
        wind_label = escape_html(messages.get(MessageId::Wind)),
        wind = snapshot.wind_speed,
    )
}

pub fn render_forecast(entries: &[ForecastEntry], messages: &Messages) -> String {
    let items: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="forecast-item"><p>{}</p><p>{}</p><p>{}°C</p></div>"#,
                escape_html(&entry.day_label),
                weather_icon(&entry.condition_main),
                round_temperature(entry.temperature_c)
            )
        })
        .collect();

    format!(
        r#"<div class="weather-card"><h2>{}</h2><div class="forecast-grid">{}</div></div>"#,
        escape_html(messages.get(MessageId::ForecastHeading)),
        items
    )
}

pub fn render_recent(cities: &[String], messages: &Messages) -> String {
    if cities.is_empty() {
        return String::new();
    }

    let links: String = cities
        .iter()
        .enumerate()
        .map(|(index, city)| {
            format!(
                r#"<a class="recent-city" href="/weather/recent/{}">{}</a>"#,
                index,
                escape_html(city)
            )
        })
        .collect();

    format!(
        r#"<div class="recent-searches"><h3>{}</h3>{}</div>"#,
        escape_html(messages.get(MessageId::RecentSearches)),
        links
    )
}
