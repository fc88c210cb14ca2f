// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The render boundary: what the presentation layer reads and calls.
//!
//! ```text
//!  keystrokes ──set_query──▶ draft ──(quiet period)──┐
//!  filters/page ─────────────────────────────────────┤
//!  back/forward ──navigate───────────────────────────┴─▶ commit(QueryState)
//!                                                          │ issue generation
//!                                                          │ serialize location
//!                                                          ▼
//!                                              spawn: yield, search, apply
//!                                                          │
//!                               generation still latest? ──┴─▶ snapshot
//! ```
//!
//! All mutable state sits behind one lock that is never held across an await.

use super::debounce::Debouncer;
use super::generation::{Generation, GenerationCounter};
use crate::config::SearchConfig;
use crate::content::{fetch_collections, normalize, ContentSource};
use crate::error::ContentLoadError;
use crate::index::{build_index_parallel, SearchIndex};
use crate::search::{search_with, SearchPage};
use crate::state::{serialize, QueryState, TypeFilter};
use crate::types::SearchResult;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Everything the presenter renders from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    /// Results for `state`; empty while its search is still running.
    pub results: Vec<SearchResult>,
    pub is_loading: bool,
    /// A search for `state` has been dispatched and has not landed yet.
    pub is_searching: bool,
    /// `None` until a URL context is attached or the first change commits.
    pub state: Option<QueryState>,
    /// Query string for the committed state, without the leading `?`.
    pub location: Option<String>,
    /// Message of the last failed content load; cleared by a retry.
    pub error: Option<String>,
    pub total_matches: usize,
    pub page_count: u32,
}

/// Counters for observing the synchronizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStats {
    pub searches_executed: u64,
    pub stale_discarded: u64,
    pub latest_generation: Generation,
}

#[derive(Debug, Clone)]
enum IndexState {
    Idle,
    Loading,
    Ready(Arc<SearchIndex>),
    Failed(String),
}

#[derive(Debug)]
struct ViewState {
    index: IndexState,
    committed: Option<QueryState>,
    /// Typed text not yet committed.
    draft: Option<String>,
    debouncer: Debouncer,
    /// Always belongs to `committed`; reset whenever a new generation is issued.
    page: SearchPage,
    searching: bool,
}

impl ViewState {
    fn snapshot(&self) -> ViewSnapshot {
        let (is_loading, error) = match &self.index {
            IndexState::Idle | IndexState::Loading => (true, None),
            IndexState::Ready(_) => (self.committed.is_none(), None),
            IndexState::Failed(message) => (false, Some(message.clone())),
        };
        ViewSnapshot {
            results: self.page.results.clone(),
            is_loading,
            is_searching: self.searching,
            state: self.committed.clone(),
            location: self.committed.as_ref().map(serialize),
            error,
            total_matches: self.page.total_matches,
            page_count: self.page.page_count,
        }
    }

    /// The committed state with any pending draft folded in.
    ///
    /// Folding cancels the debounce; a changed query resets the page.
    fn take_base(&mut self) -> QueryState {
        if self.draft.is_some() {
            self.debouncer.cancel();
        }
        self.fold_draft()
    }

    fn fold_draft(&mut self) -> QueryState {
        let mut base = self.committed.clone().unwrap_or_default();
        if let Some(draft) = self.draft.take() {
            if draft != base.query {
                base.query = draft;
                base.page = 1;
            }
        }
        base
    }
}

struct Shared {
    config: SearchConfig,
    generations: GenerationCounter,
    view: Mutex<ViewState>,
    snapshots: watch::Sender<ViewSnapshot>,
    searches_executed: AtomicU64,
    stale_discarded: AtomicU64,
}

impl Shared {
    fn publish(&self, view: &ViewState) {
        self.snapshots.send_replace(view.snapshot());
    }

    /// Make `next` the committed state and search it if the index is ready.
    fn commit(self: &Arc<Self>, view: &mut ViewState, next: QueryState) {
        if view.committed.as_ref() == Some(&next) {
            self.publish(view);
            return;
        }
        let generation = self.generations.issue();
        debug!(
            generation = generation.0,
            location = %serialize(&next),
            "committed query state"
        );
        view.committed = Some(next.clone());
        view.page = SearchPage::default();
        view.searching = false;
        if let IndexState::Ready(index) = &view.index {
            let index = Arc::clone(index);
            view.searching = true;
            self.dispatch(index, next, generation);
        }
        self.publish(view);
    }

    /// Run a search on the next tick and apply it if still current.
    fn dispatch(self: &Arc<Self>, index: Arc<SearchIndex>, state: QueryState, generation: Generation) {
        let shared = Arc::clone(self);
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            let page = search_with(&index, &state, &shared.config);
            shared.searches_executed.fetch_add(1, Ordering::Relaxed);
            shared.apply(generation, page);
        });
    }

    fn apply(&self, generation: Generation, page: SearchPage) {
        let mut view = self.view.lock();
        if !self.generations.is_current(generation) {
            self.stale_discarded.fetch_add(1, Ordering::Relaxed);
            debug!(
                generation = generation.0,
                latest = self.generations.latest().0,
                "discarding stale search result"
            );
            return;
        }
        view.page = page;
        view.searching = false;
        self.publish(&view);
    }

    /// Debounce expiry: commit whatever draft is still pending.
    fn flush_draft(self: &Arc<Self>) {
        let mut view = self.view.lock();
        if view.draft.is_none() {
            return;
        }
        // Called from the debounce task itself, so no cancel here.
        let next = view.fold_draft();
        self.commit(&mut view, next);
    }
}

/// Search state for one mounted search view.
///
/// Cloning gives another handle to the same view. Mutating methods spawn
/// tasks and must be called from inside a tokio runtime.
#[derive(Clone)]
pub struct SearchView {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for SearchView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchView")
            .field("config", &self.shared.config)
            .field("snapshot", &*self.shared.snapshots.borrow())
            .finish()
    }
}

impl SearchView {
    pub fn new(config: SearchConfig) -> Self {
        let view = ViewState {
            index: IndexState::Idle,
            committed: None,
            draft: None,
            debouncer: Debouncer::new(config.debounce()),
            page: SearchPage::default(),
            searching: false,
        };
        let (snapshots, _) = watch::channel(view.snapshot());
        Self {
            shared: Arc::new(Shared {
                config,
                generations: GenerationCounter::new(),
                view: Mutex::new(view),
                snapshots,
                searches_executed: AtomicU64::new(0),
                stale_discarded: AtomicU64::new(0),
            }),
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.shared.snapshots.borrow().clone()
    }

    /// Receiver that sees every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.shared.snapshots.subscribe()
    }

    pub fn stats(&self) -> ViewStats {
        ViewStats {
            searches_executed: self.shared.searches_executed.load(Ordering::Relaxed),
            stale_discarded: self.shared.stale_discarded.load(Ordering::Relaxed),
            latest_generation: self.shared.generations.latest(),
        }
    }

    /// The built index, once a load has succeeded.
    pub fn index(&self) -> Option<Arc<SearchIndex>> {
        match &self.shared.view.lock().index {
            IndexState::Ready(index) => Some(Arc::clone(index)),
            _ => None,
        }
    }

    /// Fetch content, normalize it and build the index.
    ///
    /// On failure the error is kept in the snapshot and returned; call
    /// [`retry`](Self::retry) to try again. A state committed while loading
    /// is searched as soon as the index is ready.
    pub async fn load(&self, source: &dyn ContentSource) -> Result<(), ContentLoadError> {
        {
            let mut view = self.shared.view.lock();
            view.index = IndexState::Loading;
            self.shared.publish(&view);
        }

        let collections = match fetch_collections(source).await {
            Ok(collections) => collections,
            Err(err) => {
                warn!(error = %err, "content load failed");
                let mut view = self.shared.view.lock();
                view.index = IndexState::Failed(err.to_string());
                self.shared.publish(&view);
                return Err(err);
            }
        };

        let normalized = normalize(&collections);
        let index = Arc::new(build_index_parallel(normalized.documents));
        info!(
            documents = index.total_docs(),
            terms = index.term_count(),
            dropped = normalized.dropped.total(),
            "search index ready"
        );

        let mut view = self.shared.view.lock();
        view.index = IndexState::Ready(Arc::clone(&index));
        if let Some(state) = view.committed.clone() {
            let generation = self.shared.generations.issue();
            view.page = SearchPage::default();
            view.searching = true;
            self.shared.dispatch(index, state, generation);
        }
        self.shared.publish(&view);
        Ok(())
    }

    /// Re-run a failed (or any) load.
    pub async fn retry(&self, source: &dyn ContentSource) -> Result<(), ContentLoadError> {
        debug!("retrying content load");
        self.load(source).await
    }

    /// Apply a location directly: initial URL context or back/forward.
    ///
    /// Never debounced. Any pending typed draft is discarded.
    pub fn navigate(&self, location: &str) {
        let next = QueryState::from_query_string(location);
        let mut view = self.shared.view.lock();
        view.draft = None;
        if view.debouncer.cancel() {
            debug!("navigation cancelled pending input");
        }
        self.shared.commit(&mut view, next);
    }

    /// Record typed text; it commits after the quiet period.
    pub fn set_query(&self, raw: impl Into<String>) {
        let weak: Weak<Shared> = Arc::downgrade(&self.shared);
        let mut view = self.shared.view.lock();
        view.draft = Some(raw.into());
        let restarted = view.debouncer.schedule(async move {
            if let Some(shared) = weak.upgrade() {
                shared.flush_draft();
            }
        });
        if restarted {
            debug!("debounce restarted");
        }
    }

    /// Change the type filter immediately, back to page 1.
    pub fn set_type_filter(&self, type_filter: TypeFilter) {
        let mut view = self.shared.view.lock();
        let mut next = view.take_base();
        if next.type_filter != type_filter {
            next.type_filter = type_filter;
            next.page = 1;
        }
        self.shared.commit(&mut view, next);
    }

    /// Change the page immediately. Page 0 means page 1.
    pub fn set_page(&self, page: u32) {
        let mut view = self.shared.view.lock();
        let next = view.take_base().with_page(page);
        self.shared.commit(&mut view, next);
    }

    /// Change the category immediately, back to page 1. Blank clears it.
    pub fn set_category(&self, category: Option<String>) {
        let category = category.filter(|c| !c.trim().is_empty());
        let mut view = self.shared.view.lock();
        let mut next = view.take_base();
        if next.category != category {
            next.category = category;
            next.page = 1;
        }
        self.shared.commit(&mut view, next);
    }
}
