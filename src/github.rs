use crate::config::FinderConfig;
use crate::error::{FinderError, Result};
use crate::models::{RateLimitState, RepositorySummary, SearchPage, SortOrder};
use crate::query::build_search_url;
use crate::types::{GitHubRepo, GitHubSearchResponse};
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &FinderConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: config.github_api_url.clone(),
            token: config.github_token.clone(),
            per_page: config.per_page,
        })
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::FORBIDDEN => {
                let rate_limit = get_rate_limit_state(&response);
                Err(FinderError::RateLimited(format!(
                    "API rate limit exceeded. Reset at: {}",
                    rate_limit.reset_time
                )))
            }
            StatusCode::NOT_FOUND => Err(FinderError::NotFound(format!("Resource not found: {}", url))),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(FinderError::Provider(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    /// Fetch one page of repositories matching `query`
    pub async fn search_repositories(
        &self,
        query: &str,
        sort: SortOrder,
        page: u32,
    ) -> Result<SearchPage> {
        let url = build_search_url(&self.base_url, query, sort, page, self.per_page)?;
        debug!(%url, "Searching repositories");

        let response = self.make_request(url.as_str()).await?;
        let rate_limit = get_rate_limit_state(&response);
        if rate_limit.remaining < 5 {
            warn!(
                remaining = rate_limit.remaining,
                limit = rate_limit.limit,
                "⚠️ Search rate limit almost exhausted"
            );
        }

        let body = response.text().await?;
        let mut search_page = parse_search_page(&body)?;
        search_page.rate_limit = Some(rate_limit);

        Ok(search_page)
    }
}

/// Decode a search response body, tolerating missing or malformed fields
pub fn parse_search_page(body: &str) -> Result<SearchPage> {
    let data: GitHubSearchResponse = serde_json::from_str(body)
        .map_err(|e| FinderError::Provider(format!("Malformed search response: {}", e)))?;

    let items = match data.items {
        Some(serde_json::Value::Array(values)) => values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<GitHubRepo>(value) {
                Ok(repo) => Some(RepositorySummary::from(repo)),
                Err(e) => {
                    warn!("Skipping malformed repository entry: {}", e);
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(SearchPage {
        total_count: data.total_count.unwrap_or(0),
        items,
        rate_limit: None,
    })
}

/// Get current rate limit state from a response
pub fn get_rate_limit_state(response: &Response) -> RateLimitState {
    let headers = response.headers();

    let limit = headers
        .get("X-RateLimit-Limit")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(60);

    // Missing header means the provider did not report a budget
    let remaining = headers
        .get("X-RateLimit-Remaining")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(limit);

    let reset = headers
        .get("X-RateLimit-Reset")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok())
        .map(|timestamp| DateTime::from_timestamp(timestamp, 0).unwrap_or_else(Utc::now))
        .unwrap_or_else(|| Utc::now() + chrono::Duration::hours(1));

    RateLimitState {
        remaining,
        limit,
        reset_time: reset,
        is_limited: remaining == 0,
    }
}
