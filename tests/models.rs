use finder::models::{ForecastEntry, RepositorySummary, SearchState, SortOrder, WeatherSnapshot};
use finder::types::{CurrentWeatherResponse, ForecastSlot, GitHubRepo};
use serde_json::json;

#[test]
fn test_sort_order_allow_list() {
    assert_eq!(SortOrder::from_input(Some("stars")), SortOrder::Stars);
    assert_eq!(SortOrder::from_input(Some("forks")), SortOrder::Forks);
    assert_eq!(SortOrder::from_input(Some("updated")), SortOrder::Updated);
    assert_eq!(SortOrder::from_input(Some(" forks ")), SortOrder::Forks);
}

#[test]
fn test_sort_order_coerces_unknown_values() {
    assert_eq!(SortOrder::from_input(Some("help-wanted-issues")), SortOrder::Stars);
    assert_eq!(SortOrder::from_input(Some("")), SortOrder::Stars);
    assert_eq!(SortOrder::from_input(Some("FORKS")), SortOrder::Stars);
    assert_eq!(SortOrder::from_input(None), SortOrder::Stars);
    assert_eq!(SortOrder::Updated.to_string(), "updated");
}

#[test]
fn test_search_state_defaults() {
    let state = SearchState::default();
    assert_eq!(state.page, 1);
    assert_eq!(state.total_results, 0);
    assert!(state.query.is_empty());
    assert_eq!(state.sort, SortOrder::Stars);
}

#[test]
fn test_repository_summary_from_full_repo() {
    let repo: GitHubRepo = serde_json::from_value(json!({
        "name": "tokio",
        "owner": { "login": "tokio-rs" },
        "description": "A runtime",
        "stargazers_count": 25000,
        "forks_count": 2300,
        "language": "Rust",
        "html_url": "https://github.com/tokio-rs/tokio",
    }))
    .unwrap();

    let summary = RepositorySummary::from(repo);
    assert_eq!(summary.owner, "tokio-rs");
    assert_eq!(summary.name, "tokio");
    assert_eq!(summary.description.as_deref(), Some("A runtime"));
    assert_eq!(summary.star_count, 25000);
    assert_eq!(summary.fork_count, 2300);
    assert_eq!(summary.primary_language.as_deref(), Some("Rust"));
    assert_eq!(summary.url, "https://github.com/tokio-rs/tokio");
}

#[test]
fn test_repository_summary_defaults() {
    let repo: GitHubRepo = serde_json::from_value(json!({
        "name": "orphan",
        "owner": null,
        "description": "",
        "language": null,
    }))
    .unwrap();

    let summary = RepositorySummary::from(repo);
    assert_eq!(summary.owner, "unknown");
    assert!(summary.description.is_none());
    assert!(summary.primary_language.is_none());
    assert_eq!(summary.star_count, 0);
    assert_eq!(summary.fork_count, 0);
    assert!(summary.url.is_empty());
}

#[test]
fn test_weather_snapshot_from_response() {
    let data: CurrentWeatherResponse = serde_json::from_value(json!({
        "name": "Tokyo",
        "sys": { "country": "JP" },
        "weather": [{ "main": "Rain", "description": "light rain" }],
        "main": { "temp": 18.4, "humidity": 82 },
        "wind": { "speed": 4.6 },
    }))
    .unwrap();

    let snapshot = WeatherSnapshot::from(data);
    assert_eq!(snapshot.city_name, "Tokyo");
    assert_eq!(snapshot.country, "JP");
    assert_eq!(snapshot.condition_main, "Rain");
    assert_eq!(snapshot.description, "light rain");
    assert_eq!(snapshot.humidity_pct, 82);
    assert!((snapshot.temperature_c - 18.4).abs() < f64::EPSILON);
    assert!((snapshot.wind_speed - 4.6).abs() < f64::EPSILON);
}

#[test]
fn test_forecast_entry_day_label() {
    let slot: ForecastSlot = serde_json::from_value(json!({
        "dt_txt": "2024-03-06 12:00:00",
        "weather": [{ "main": "Snow" }],
        "main": { "temp": -1.5 },
    }))
    .unwrap();

    let entry = ForecastEntry::from_slot(&slot).expect("Slot should parse");
    assert_eq!(entry.day_label, "Wed");
    assert_eq!(entry.condition_main, "Snow");
}

#[test]
fn test_forecast_entry_rejects_bad_timestamp() {
    let slot: ForecastSlot = serde_json::from_value(json!({
        "dt_txt": "tomorrow 12:00:00",
        "weather": [],
        "main": { "temp": 3.0 },
    }))
    .unwrap();

    assert!(ForecastEntry::from_slot(&slot).is_none());
}
