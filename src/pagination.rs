//! Paging state for the repository search.
//!
//! Every fetch is issued under a [`PendingRequest`] carrying a monotonically
//! increasing id. Only the most recently issued request may change state;
//! anything older that completes afterwards is reported as stale and dropped.
//!
//! Load-more continues only a query that has shown at least one page. A
//! request that never resolves (its caller went away) is simply superseded
//! by the next one.

use crate::models::{SearchState, SortOrder};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Displayed,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Fresh,
    LoadMore,
}

/// A fetch that has been issued but not yet resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub kind: RequestKind,
    pub query: String,
    pub sort: SortOrder,
    pub page: u32,
}

/// Result of applying a successful response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied { show_more: bool },
    Stale,
}

#[derive(Debug, Clone)]
pub struct Pagination {
    state: SearchState,
    phase: Phase,
    per_page: u32,
    max_visible_results: u64,
    latest_request: u64,
    resumable: bool,
}

impl Pagination {
    pub fn new(per_page: u32, max_visible_results: u64) -> Self {
        Self {
            state: SearchState::default(),
            phase: Phase::Idle,
            per_page: per_page.max(1),
            max_visible_results,
            latest_request: 0,
            resumable: false,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    fn next_id(&mut self) -> u64 {
        self.latest_request += 1;
        self.latest_request
    }

    /// Starts a fresh search, superseding anything still in flight.
    pub fn begin_search(&mut self, query: String, sort: SortOrder) -> PendingRequest {
        self.state = SearchState {
            query: query.clone(),
            sort,
            page: 1,
            total_results: 0,
        };
        self.phase = Phase::Loading;
        self.resumable = false;

        PendingRequest {
            id: self.next_id(),
            kind: RequestKind::Fresh,
            query,
            sort,
            page: 1,
        }
    }

    /// Requests the page after the current one.
    ///
    /// Returns `None` until the stored query has displayed a page. An earlier
    /// load-more still in flight is superseded.
    pub fn begin_load_more(&mut self) -> Option<PendingRequest> {
        if self.state.query.is_empty() || !self.resumable {
            return None;
        }

        self.phase = Phase::Loading;
        Some(PendingRequest {
            id: self.next_id(),
            kind: RequestKind::LoadMore,
            query: self.state.query.clone(),
            sort: self.state.sort,
            page: self.state.page + 1,
        })
    }

    fn is_current(&self, request: &PendingRequest) -> bool {
        request.id == self.latest_request
    }

    /// Applies a successful response for `request`.
    pub fn complete(&mut self, request: &PendingRequest, total_count: u64, received: usize) -> Completion {
        if !self.is_current(request) {
            debug!(request_id = request.id, latest = self.latest_request, "Dropping stale search response");
            return Completion::Stale;
        }

        self.state.page = request.page;
        self.state.total_results = total_count;
        self.phase = Phase::Displayed;
        self.resumable = true;

        Completion::Applied {
            show_more: self.has_more(received),
        }
    }

    /// Records a failed fetch. The stored page is left untouched so the same
    /// load-more can be retried. Returns `false` for stale requests.
    pub fn fail(&mut self, request: &PendingRequest) -> bool {
        if !self.is_current(request) {
            debug!(request_id = request.id, latest = self.latest_request, "Dropping stale search failure");
            return false;
        }

        self.phase = Phase::Errored;
        true
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.state.total_results, self.max_visible_results, self.per_page)
    }

    /// Another page is offered only when the count allows it and the page just
    /// received was full.
    pub fn has_more(&self, received: usize) -> bool {
        self.state.page < self.total_pages() && received == self.per_page as usize
    }
}

pub fn total_pages(total_results: u64, max_visible_results: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let visible = total_results.min(max_visible_results);
    u32::try_from(visible.div_ceil(per_page)).unwrap_or(u32::MAX)
}
