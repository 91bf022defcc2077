//! Catalog session state.
//!
//! [`Session`] is the synchronous core of the orchestrator: it owns the current
//! [`ListQuery`], numbers every fetch it starts and accepts only the completion
//! of the most recent one. It performs no I/O and knows nothing about timers;
//! see [`crate::driver`] for that.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::models::{Movie, MoviePage};
use crate::pagination::{PageToken, page_window};
use crate::query::ListQuery;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight. `stale` is the page shown before it started.
    Loading { stale: Option<Arc<MoviePage>> },
    Success(Arc<MoviePage>),
    /// The request failed with a user-facing message
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    /// Page currently worth rendering, if any
    pub fn page(&self) -> Option<&Arc<MoviePage>> {
        match self {
            FetchState::Success(page) => Some(page),
            FetchState::Loading { stale } => stale.as_ref(),
            FetchState::Idle | FetchState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one started fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ListQuery,
}

/// What the presentation layer renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub query: ListQuery,
    pub state: FetchState,
    /// From the last successful response
    pub total_count: u64,
    /// From the last successful response, at least 1
    pub total_pages: u32,
    pub last_refreshed: Option<DateTime<Local>>,
}

impl CatalogSnapshot {
    pub fn movies(&self) -> &[Movie] {
        self.state
            .page()
            .map(|page| page.movies.as_slice())
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Settled with nothing to show (the "no movies found" state)
    pub fn is_empty_result(&self) -> bool {
        !self.is_loading() && self.movies().is_empty()
    }

    pub fn has_search_term(&self) -> bool {
        !self.query.search_term.is_empty()
    }

    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }

    pub fn page_tokens(&self) -> Vec<PageToken> {
        page_window(self.query.page, self.total_pages)
    }

    pub fn has_prev_page(&self) -> bool {
        self.query.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.query.page < self.total_pages
    }
}

#[derive(Debug)]
pub struct Session {
    query: ListQuery,
    state: FetchState,
    latest_seq: u64,
    total_count: u64,
    total_pages: u32,
    last_refreshed: Option<DateTime<Local>>,
}

impl Session {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            state: FetchState::Idle,
            latest_seq: 0,
            total_count: 0,
            total_pages: 1,
            last_refreshed: None,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Commit a debounced search term. Always goes back to the first page.
    /// Returns whether the query changed.
    pub fn commit_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        let changed = self.query.search_term != term || self.query.page != 1;
        debug!(term = %term, changed, "commit search term");
        self.query.search_term = term;
        self.query.page = 1;
        changed
    }

    /// Returns whether the query changed. Page 0 means page 1.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if self.query.page == page {
            return false;
        }
        self.query.page = page;
        true
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        let stale = self.state.page().cloned();
        self.state = FetchState::Loading { stale };
        FetchTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        }
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Apply the outcome of fetch `seq`. Outcomes of superseded fetches are
    /// dropped and `false` is returned.
    pub fn complete(&mut self, seq: u64, outcome: Result<MoviePage, FetchError>) -> bool {
        if !self.is_current(seq) {
            debug!(seq, latest = self.latest_seq, "dropping superseded response");
            return false;
        }

        match outcome {
            Ok(page) => {
                self.total_count = page.total_count;
                self.total_pages = page.total_pages();
                self.last_refreshed = Some(Local::now());
                self.state = FetchState::Success(Arc::new(page));
            }
            Err(e) => {
                warn!("Error fetching movies: {e:?}");
                self.state = FetchState::Failed(e.user_message());
            }
        }
        true
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            query: self.query.clone(),
            state: self.state.clone(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            last_refreshed: self.last_refreshed,
        }
    }
}
