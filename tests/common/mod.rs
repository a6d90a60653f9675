#![allow(dead_code)]

use finder::config::FinderConfig;
use finder::controller::{SearchController, WeatherController};
use finder::github::GitHubClient;
use finder::history::{HistoryStore, MemoryStore};
use finder::messages::Messages;
use finder::weather::WeatherClient;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

/// Configuration pointing both providers at one mock server
pub fn config_for(server: &MockServer) -> FinderConfig {
    FinderConfig {
        github_api_url: server.uri(),
        weather_api_url: server.uri(),
        weather_api_key: "test-key".to_string(),
        request_timeout: Duration::from_secs(5),
        ..Default::default()
    }
}

/// A base URL nothing is listening on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn repo_json(index: usize) -> Value {
    json!({
        "name": format!("repo-{}", index),
        "owner": { "login": format!("owner-{}", index) },
        "description": format!("Repository number {}", index),
        "stargazers_count": 1000 + index,
        "forks_count": index,
        "language": "Rust",
        "html_url": format!("https://github.com/owner-{0}/repo-{0}", index),
    })
}

pub fn search_body(total_count: u64, items: usize) -> Value {
    json!({
        "total_count": total_count,
        "items": (0..items).map(repo_json).collect::<Vec<_>>(),
    })
}

pub fn current_weather_body(city: &str) -> Value {
    json!({
        "name": city,
        "sys": { "country": "JP" },
        "weather": [{ "main": "Clear", "description": "clear sky" }],
        "main": { "temp": 21.6, "humidity": 40 },
        "wind": { "speed": 3.1 },
    })
}

/// Five days of three-hourly slots starting at midnight on 2024-03-04 (a Monday)
pub fn forecast_body() -> Value {
    let mut list = Vec::new();
    for day in 0..5 {
        for slot in 0..8 {
            list.push(json!({
                "dt_txt": format!("2024-03-{:02} {:02}:00:00", 4 + day, slot * 3),
                "weather": [{ "main": if slot == 4 { "Rain" } else { "Clouds" } }],
                "main": { "temp": 10.0 + day as f64 },
            }));
        }
    }
    json!({ "list": list })
}

pub fn search_controller(config: &FinderConfig) -> SearchController {
    let client = GitHubClient::new(config).expect("Failed to create client");
    SearchController::new(client, config, Messages::default())
}

pub fn weather_controller(config: &FinderConfig) -> WeatherController {
    let client = WeatherClient::new(config).expect("Failed to create client");
    let history = HistoryStore::new(Box::new(MemoryStore::new()), config.history_limit);
    WeatherController::new(client, history, Messages::default())
}
