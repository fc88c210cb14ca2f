// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unified search over posts, guides, quizzes and games.
//!
//! Heterogeneous content records are normalized into one document shape,
//! indexed into an inverted index with field-weighted TF-IDF statistics, and
//! queried with OR semantics, type/category post-filters and a total result
//! order. A synchronizer binds rapid user input and the URL query string to
//! asynchronous searches without ever showing a stale result.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  content     │────▶│   index      │────▶│   search     │
//! │ (records,    │     │ (tokenize,   │     │ (score, rank,│
//! │  normalize)  │     │  build_index)│     │  filter,page)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    ▲
//!                             ▼                    │
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │   verify     │     │    sync      │
//!                      │ (check_index)│     │ (SearchView, │
//!                      └──────────────┘     │  debounce,   │
//!                                           │  generations)│
//!                                           └──────────────┘
//!                                                  ▲
//!                                           ┌──────────────┐
//!                                           │   state      │
//!                                           │ (QueryState ⇄│
//!                                           │  URL)        │
//!                                           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sitesearch::{build_index, normalize, search, ContentCollections, PostRecord, QueryState};
//!
//! let collections = ContentCollections {
//!     posts: vec![PostRecord {
//!         slug: Some("docker-basics".into()),
//!         title: Some("Docker Basics".into()),
//!         ..PostRecord::default()
//!     }],
//!     ..ContentCollections::default()
//! };
//! let index = build_index(normalize(&collections).documents);
//!
//! let results = search(&index, &QueryState::from_query_string("q=docker"));
//! assert_eq!(results[0].document.id, "post:docker-basics");
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod index;
pub mod scoring;
pub mod search;
pub mod state;
pub mod sync;
pub mod types;
pub mod verify;

pub mod testing;

// Re-exports for public API
pub use config::SearchConfig;
pub use content::{
    fetch_collections, normalize, ContentCollections, ContentSource, DropCounts, GameRecord,
    GuideRecord, JsonFileSource, Normalized, PostRecord, QuizRecord,
};
pub use error::{ConfigError, ContentLoadError, MalformedRecord};
pub use index::{build_index, build_index_parallel, query_terms, tokenize, SearchIndex};
pub use search::{search, search_with, SearchPage};
pub use state::{QueryState, TypeFilter};
pub use sync::{Generation, GenerationCounter, SearchView, ViewSnapshot, ViewStats};
pub use types::{
    ContentDocument, ContentType, DocId, FieldKind, Posting, PostingList, SearchResult,
};
pub use verify::{check_index, InvariantError, WellFormedIndex};
