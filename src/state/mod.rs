// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the user asked for.
//!
//! `QueryState` is the single source of truth for a search: query text, type
//! filter, optional category and page. It round-trips through the URL query
//! string losslessly (see [`url`]), which is what makes results survive reloads,
//! back/forward and sharing.

pub mod url;

use crate::types::{ContentType, SearchResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use self::url::{deserialize, serialize};

/// Set of content types a search is restricted to. Empty means all types.
///
/// Keeping "all" as the empty set makes an empty restriction unrepresentable,
/// so every filter has exactly one URL form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeFilter {
    types: BTreeSet<ContentType>,
}

impl TypeFilter {
    /// No restriction.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to the given types. An empty iterator yields [`TypeFilter::all`].
    pub fn only(types: impl IntoIterator<Item = ContentType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.types.is_empty()
    }

    pub fn allows(&self, content_type: ContentType) -> bool {
        self.types.is_empty() || self.types.contains(&content_type)
    }

    /// Selected types in declared order; empty when unrestricted.
    pub fn types(&self) -> impl Iterator<Item = ContentType> + '_ {
        self.types.iter().copied()
    }

    /// Keep only results whose document type passes. Applying twice is the
    /// same as applying once.
    pub fn apply(&self, results: Vec<SearchResult>) -> Vec<SearchResult> {
        if self.is_all() {
            return results;
        }
        results
            .into_iter()
            .filter(|r| self.allows(r.document.content_type))
            .collect()
    }
}

impl FromIterator<ContentType> for TypeFilter {
    fn from_iter<I: IntoIterator<Item = ContentType>>(iter: I) -> Self {
        Self::only(iter)
    }
}

/// A complete search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// Raw query text as typed.
    pub query: String,
    pub type_filter: TypeFilter,
    /// 1-based page number.
    pub page: u32,
    /// Optional category restriction (case-insensitive match).
    pub category: Option<String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            type_filter: TypeFilter::all(),
            page: 1,
            category: None,
        }
    }
}

impl QueryState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_types(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.trim().is_empty()).then_some(category);
        self
    }

    /// True when the query has nothing searchable in it.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Serialize into a URL query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        serialize(self)
    }

    /// Parse from a URL query string, falling back to defaults on bad values.
    pub fn from_query_string(query_string: &str) -> Self {
        deserialize(query_string)
    }
}
