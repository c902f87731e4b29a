// SPDX-License-Identifier: MPL-2.0
//! Cursor-paginated image feed.
//!
//! The feed is an append-only log of [`Page`]s threaded together by the
//! opaque `after` cursor each page carries. [`Feed`] owns the log and a small
//! state machine; the caller runs the actual HTTP fetches (described by
//! [`FetchRequest`]) and hands the results back through [`Feed::resolve`].
//!
//! Two rules from the protocol are enforced here rather than in the UI:
//!
//! - "load more" can only start from `Loaded` with a non-terminal last page,
//!   which also serializes overlapping triggers, and
//! - every fetch carries the feed generation it was started under, so a
//!   result that arrives after the feed was refreshed or torn down is dropped
//!   instead of resolving into stale state.

use crate::api::models::{ImageRecord, Page};
use crate::error::Error;

/// Lifecycle of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No fetch has been started yet.
    #[default]
    Idle,
    /// The initial page is being fetched; nothing is displayable yet.
    Loading,
    /// At least one page is present and no fetch is in flight.
    Loaded,
    /// A follow-up page is being fetched; prior pages stay displayable.
    LoadingMore,
    /// The initial fetch failed; the feed holds no pages.
    Error,
}

/// A fetch the caller must perform. `generation` ties the eventual result
/// back to the feed incarnation that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub cursor: Option<String>,
}

/// What happened when a completed fetch was handed back to the feed.
#[derive(Debug)]
pub enum Outcome {
    /// The page was appended; the feed is `Loaded`.
    Appended,
    /// The initial fetch failed; the feed is in the `Error` state.
    InitialFailed(Error),
    /// A "load more" fetch failed; prior pages were retained and the error
    /// should be surfaced transiently.
    LoadMoreFailed(Error),
    /// The result belonged to a superseded generation, or no fetch was in
    /// flight; it was dropped without touching the feed.
    Stale,
}

/// The session-scoped feed cache: an ordered page log plus fetch status.
#[derive(Debug, Default)]
pub struct Feed {
    pages: Vec<Page>,
    status: Status,
    generation: u64,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts the initial fetch. Valid from `Idle`, or from `Error` as a
    /// user-triggered retry; returns `None` in any other state.
    pub fn start_initial_load(&mut self) -> Option<FetchRequest> {
        match self.status {
            Status::Idle | Status::Error => {
                self.status = Status::Loading;
                Some(FetchRequest {
                    generation: self.generation,
                    cursor: None,
                })
            }
            _ => None,
        }
    }

    /// Whether the "load more" affordance should be offered: the feed is
    /// `Loaded` and the most recent page carries a continuation cursor.
    pub fn can_load_more(&self) -> bool {
        self.status == Status::Loaded && self.next_cursor().is_some()
    }

    pub fn is_loading_more(&self) -> bool {
        self.status == Status::LoadingMore
    }

    /// Starts fetching the next page. Returns `None` unless
    /// [`can_load_more`](Self::can_load_more) holds, which makes overlapping
    /// triggers a no-op.
    pub fn start_load_more(&mut self) -> Option<FetchRequest> {
        if !self.can_load_more() {
            return None;
        }
        let cursor = self.next_cursor().map(String::from);
        self.status = Status::LoadingMore;
        Some(FetchRequest {
            generation: self.generation,
            cursor,
        })
    }

    /// The explicit "images changed" invalidation: drops all pages, bumps the
    /// generation so in-flight results get ignored, and restarts from the
    /// first page.
    pub fn refresh(&mut self) -> FetchRequest {
        self.pages.clear();
        self.generation += 1;
        self.status = Status::Loading;
        FetchRequest {
            generation: self.generation,
            cursor: None,
        }
    }

    /// Hands a completed fetch back to the feed.
    ///
    /// Results from a superseded generation are dropped. A successful page is
    /// appended in fetch order; failure during the initial load moves to
    /// `Error`, failure during "load more" returns to `Loaded` with all prior
    /// pages retained.
    pub fn resolve(&mut self, generation: u64, result: Result<Page, Error>) -> Outcome {
        if generation != self.generation {
            return Outcome::Stale;
        }

        match (self.status, result) {
            (Status::Loading | Status::LoadingMore, Ok(page)) => {
                self.pages.push(page);
                self.status = Status::Loaded;
                Outcome::Appended
            }
            (Status::Loading, Err(error)) => {
                self.status = Status::Error;
                Outcome::InitialFailed(error)
            }
            (Status::LoadingMore, Err(error)) => {
                self.status = Status::Loaded;
                Outcome::LoadMoreFailed(error)
            }
            _ => Outcome::Stale,
        }
    }

    /// Flattens the page log into one display sequence, in fetch order.
    ///
    /// Pure and idempotent: repeated calls over the same log yield the same
    /// sequence, and no re-ordering or de-duplication happens here; ordering
    /// fidelity is the API's responsibility.
    pub fn flatten(&self) -> Vec<&ImageRecord> {
        self.pages.iter().flat_map(|page| page.data.iter()).collect()
    }

    /// Total records across all fetched pages.
    pub fn record_count(&self) -> usize {
        self.pages.iter().map(|page| page.data.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// Looks up a record by id, for the lightbox.
    pub fn find(&self, id: &str) -> Option<&ImageRecord> {
        self.pages
            .iter()
            .flat_map(|page| page.data.iter())
            .find(|record| record.id == id)
    }

    fn next_cursor(&self) -> Option<&str> {
        self.pages.last().and_then(|page| page.after.as_deref())
    }
}
