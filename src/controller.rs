//! Controllers own the state of each panel and sequence every user action:
//! validate, fetch, update state, render.
//!
//! State lives behind a `tokio::sync::Mutex` that is released while a
//! request is on the wire. Each action takes a request id under the lock
//! and re-checks it before touching state again, so a response that lost
//! the race to a newer action is dropped.

use crate::config::FinderConfig;
use crate::error::{FinderError, Result};
use crate::github::GitHubClient;
use crate::history::{HistoryStore, RecentCities};
use crate::messages::{MessageId, Messages};
use crate::models::{SearchPage, SortOrder};
use crate::pagination::{Completion, Pagination, PendingRequest};
use crate::query::validate_input;
use crate::view::weather::{render_current, render_forecast};
use crate::view::{RenderMode, SearchDocument, WeatherDocument, WeatherPanel};
use crate::weather::WeatherClient;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Banner text for a failed repository fetch
pub fn search_error_message(error: &FinderError) -> MessageId {
    match error {
        FinderError::RateLimited(_) => MessageId::RateLimited,
        FinderError::Network(_) => MessageId::NetworkFailure,
        FinderError::Validation(_) => MessageId::EmptyQuery,
        _ => MessageId::ProviderFailure,
    }
}

/// Banner text for a failed weather fetch. `missing` is the fetch's own
/// not-found message.
pub fn weather_error_message(error: &FinderError, missing: MessageId) -> MessageId {
    match error {
        FinderError::RateLimited(_) => MessageId::WeatherRateLimited,
        FinderError::Network(_) => MessageId::NetworkFailure,
        _ => missing,
    }
}

struct SearchSession {
    pagination: Pagination,
    document: SearchDocument,
}

impl SearchSession {
    fn apply(
        &mut self,
        request: &PendingRequest,
        outcome: Result<SearchPage>,
        mode: RenderMode,
        messages: &Messages,
    ) {
        match outcome {
            Ok(page) => {
                let per_page = self.pagination.per_page() as usize;
                let items = &page.items[..page.items.len().min(per_page)];

                match self.pagination.complete(request, page.total_count, items.len()) {
                    Completion::Stale => {}
                    Completion::Applied { show_more } => {
                        info!(
                            page = request.page,
                            received = items.len(),
                            total = page.total_count,
                            show_more,
                            "Rendered repository page"
                        );
                        self.document.render_results(mode, Some(items), show_more, messages);
                    }
                }
            }
            Err(e) => {
                if self.pagination.fail(request) {
                    warn!(page = request.page, error = %e, "Repository search failed");
                    self.document.banner.show(messages.get(search_error_message(&e)));
                    self.document.render_results(mode, None, false, messages);
                }
            }
        }
    }
}

/// Repository search panel
pub struct SearchController {
    client: GitHubClient,
    messages: Messages,
    session: Mutex<SearchSession>,
}

impl SearchController {
    pub fn new(client: GitHubClient, config: &FinderConfig, messages: Messages) -> Self {
        Self {
            session: Mutex::new(SearchSession {
                pagination: Pagination::new(client.per_page(), config.max_visible_results),
                document: SearchDocument::default(),
            }),
            client,
            messages,
        }
    }

    pub async fn document(&self) -> SearchDocument {
        self.session.lock().await.document.clone()
    }

    pub async fn pagination(&self) -> Pagination {
        self.session.lock().await.pagination.clone()
    }

    /// Runs a fresh search, replacing any earlier results.
    pub async fn search(&self, input: &str, sort: Option<&str>) -> SearchDocument {
        let sort = SortOrder::from_input(sort);

        let request = {
            let mut session = self.session.lock().await;
            session.document.input = input.to_string();
            session.document.sort = sort;
            session.document.banner.clear();

            let query = match validate_input(input) {
                Ok(query) => query,
                Err(_) => {
                    session
                        .document
                        .banner
                        .show(self.messages.get(MessageId::EmptyQuery));
                    return session.document.clone();
                }
            };

            session.document.show_loading(&self.messages);
            session.document.load_more = false;
            session.pagination.begin_search(query, sort)
        };

        debug!(request_id = request.id, query = %request.query, %sort, "Starting search");
        let outcome = self
            .client
            .search_repositories(&request.query, request.sort, request.page)
            .await;

        let mut session = self.session.lock().await;
        session.apply(&request, outcome, RenderMode::Replace, &self.messages);
        session.document.clone()
    }

    /// Fetches the next page with the stored query and appends it.
    ///
    /// A no-op until the current query has displayed a page. A load-more
    /// still in flight is superseded by this one.
    pub async fn load_more(&self) -> SearchDocument {
        let request = {
            let mut session = self.session.lock().await;
            match session.pagination.begin_load_more() {
                Some(request) => {
                    session.document.banner.clear();
                    request
                }
                None => {
                    debug!("Ignoring load-more with nothing to continue");
                    return session.document.clone();
                }
            }
        };

        debug!(request_id = request.id, page = request.page, "Loading more repositories");
        let outcome = self
            .client
            .search_repositories(&request.query, request.sort, request.page)
            .await;

        let mut session = self.session.lock().await;
        session.apply(&request, outcome, RenderMode::Append, &self.messages);
        session.document.clone()
    }
}

struct WeatherSession {
    document: WeatherDocument,
    latest_request: u64,
}

/// Weather panel with its recent-city history
pub struct WeatherController {
    client: WeatherClient,
    history: Arc<HistoryStore>,
    messages: Messages,
    session: Mutex<WeatherSession>,
}

impl WeatherController {
    pub fn new(client: WeatherClient, history: HistoryStore, messages: Messages) -> Self {
        let document = WeatherDocument {
            recent: history.load().as_slice().to_vec(),
            ..Default::default()
        };

        Self {
            client,
            history: Arc::new(history),
            messages,
            session: Mutex::new(WeatherSession {
                document,
                latest_request: 0,
            }),
        }
    }

    pub async fn document(&self) -> WeatherDocument {
        self.session.lock().await.document.clone()
    }

    /// Fetches current conditions, then the forecast. Either may fail
    /// without hiding the other.
    pub async fn search(&self, input: &str) -> WeatherDocument {
        let (request_id, city) = {
            let mut session = self.session.lock().await;
            session.document.input = input.to_string();
            session.document.banner.clear();

            let city = match validate_input(input) {
                Ok(city) => city,
                Err(_) => {
                    session
                        .document
                        .banner
                        .show(self.messages.get(MessageId::EmptyCity));
                    return session.document.clone();
                }
            };

            session.document.current = WeatherPanel::Loading;
            session.document.forecast = WeatherPanel::Empty;
            session.latest_request += 1;
            (session.latest_request, city)
        };

        let current = self.client.current(&city).await;
        let found = {
            let mut session = self.session.lock().await;
            if session.latest_request != request_id {
                debug!(request_id, "Dropping stale weather response");
                return session.document.clone();
            }
            match current {
                Ok(snapshot) => {
                    info!(city = %snapshot.city_name, "Rendered current weather");
                    session.document.current =
                        WeatherPanel::Ready(render_current(&snapshot, &self.messages));
                    true
                }
                Err(e) => {
                    warn!(%city, error = %e, "Current weather failed");
                    session.document.current = WeatherPanel::Empty;
                    let id = weather_error_message(&e, MessageId::CityNotFound);
                    session.document.banner.push(self.messages.get(id));
                    false
                }
            }
        };

        let forecast = self.client.forecast(&city).await;
        let mut session = self.session.lock().await;
        if session.latest_request != request_id {
            debug!(request_id, "Dropping stale forecast response");
            return session.document.clone();
        }
        match forecast {
            Ok(entries) => {
                session.document.forecast =
                    WeatherPanel::Ready(render_forecast(&entries, &self.messages));
            }
            Err(e) => {
                warn!(%city, error = %e, "Forecast failed");
                let id = weather_error_message(&e, MessageId::ForecastNotFound);
                session.document.banner.push(self.messages.get(id));
            }
        }

        if found {
            match self.record_history(&city).await {
                Ok(recent) => session.document.recent = recent.as_slice().to_vec(),
                Err(e) => warn!(%city, error = %e, "Failed to persist recent city"),
            }
        }

        session.document.clone()
    }

    /// Re-runs the search for the history entry at `index`. Unknown indexes
    /// leave the panel as it is.
    pub async fn select_recent(&self, index: usize) -> WeatherDocument {
        let history = Arc::clone(&self.history);
        let city = match tokio::task::spawn_blocking(move || history.load()).await {
            Ok(recent) => recent.get(index).map(str::to_string),
            Err(e) => {
                warn!(error = %e, "Recent city lookup failed");
                None
            }
        };
        match city {
            Some(city) => self.search(&city).await,
            None => {
                debug!(index, "No recent city at index");
                self.document().await
            }
        }
    }

    /// Pushes `city` into the stored history on the blocking pool.
    async fn record_history(&self, city: &str) -> Result<RecentCities> {
        let history = Arc::clone(&self.history);
        let city = city.to_string();
        tokio::task::spawn_blocking(move || history.record(&city))
            .await
            .map_err(|e| FinderError::Io(std::io::Error::other(e)))?
    }
}
