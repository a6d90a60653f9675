use crate::config::FinderConfig;
use crate::controller::{SearchController, WeatherController};
use crate::error::Result;
use crate::github::GitHubClient;
use crate::history::{HistoryStore, JsonFileStore};
use crate::messages::Messages;
use crate::view::render_page;
use crate::weather::WeatherClient;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchController>,
    pub weather: Arc<WeatherController>,
    pub messages: Messages,
}

impl AppState {
    /// Builds both controllers from one validated configuration
    pub fn from_config(config: &FinderConfig) -> Result<Self> {
        config.validate()?;

        let messages = Messages::new(config.locale);
        let history = HistoryStore::new(
            Box::new(JsonFileStore::new(&config.history_path)),
            config.history_limit,
        );

        Ok(AppState {
            search: Arc::new(SearchController::new(
                GitHubClient::new(config)?,
                config,
                messages,
            )),
            weather: Arc::new(WeatherController::new(
                WeatherClient::new(config)?,
                history,
                messages,
            )),
            messages,
        })
    }
}

/// Query parameters of the search form
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub sort: Option<String>,
}

/// Query parameters of the weather form
#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
    pub version: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .route("/search/more", post(load_more))
        .route("/weather", get(weather))
        .route("/weather/recent/:index", get(recent_city))
        .route("/healthz", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the browser client until the process is stopped
pub async fn start_server(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Finder listening on http://{}", addr);

    axum::serve(listener, app).await
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let search = state.search.document().await;
    let weather = state.weather.document().await;
    Html(render_page(&search, &weather, &state.messages))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let search = state
        .search
        .search(params.q.as_deref().unwrap_or_default(), params.sort.as_deref())
        .await;
    let weather = state.weather.document().await;
    Html(render_page(&search, &weather, &state.messages))
}

async fn load_more(State(state): State<AppState>) -> Html<String> {
    let search = state.search.load_more().await;
    let weather = state.weather.document().await;
    Html(render_page(&search, &weather, &state.messages))
}

async fn weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Html<String> {
    let weather = state
        .weather
        .search(params.city.as_deref().unwrap_or_default())
        .await;
    let search = state.search.document().await;
    Html(render_page(&search, &weather, &state.messages))
}

async fn recent_city(State(state): State<AppState>, Path(index): Path<usize>) -> Html<String> {
    let weather = state.weather.select_recent(index).await;
    let search = state.search.document().await;
    Html(render_page(&search, &weather, &state.messages))
}

async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
