// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime checks for the index invariants.
//!
//! `build_index` upholds these by construction. The checks exist for indexes
//! that arrive from elsewhere (deserialized snapshots, fuzzers) and as a test
//! oracle for the builder itself.
//!
//! ```text
//! WellFormedIndex::from_index(index)?   // every invariant checked once
//!     .index()                          // then read freely
//! ```

use crate::index::SearchIndex;
use std::collections::HashSet;
use thiserror::Error;

/// An index invariant that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A posting points past the document table.
    #[error("posting for '{term}' references doc {doc_id} but only {total_docs} documents exist")]
    InvalidDocId {
        term: String,
        doc_id: u32,
        total_docs: usize,
    },
    /// Postings are not strictly increasing by document.
    #[error("posting list for '{term}' not sorted at position {position}")]
    UnsortedPostingList { term: String, position: usize },
    #[error("posting list for '{term}' has doc_freq {claimed} but {actual} postings")]
    IncorrectDocFreq {
        term: String,
        claimed: usize,
        actual: usize,
    },
    #[error("posting list for '{term}' is empty")]
    EmptyPostingList { term: String },
    #[error("posting for '{term}' in doc {doc_id} has zero term frequency")]
    ZeroTermFrequency { term: String, doc_id: u32 },
    #[error("document id '{id}' appears more than once")]
    DuplicateDocumentId { id: String },
}

/// Check every structural invariant of `index`.
///
/// Returns the first violation found. Terms are visited in lexicographic
/// order, so the reported violation is deterministic.
pub fn check_index(index: &SearchIndex) -> Result<(), InvariantError> {
    let mut seen = HashSet::new();
    for doc in index.documents() {
        if !seen.insert(doc.id.as_str()) {
            return Err(InvariantError::DuplicateDocumentId { id: doc.id.clone() });
        }
    }

    let total_docs = index.total_docs();
    for (term, list) in index.terms() {
        if list.postings.is_empty() {
            return Err(InvariantError::EmptyPostingList {
                term: term.to_string(),
            });
        }
        if list.doc_freq != list.postings.len() {
            return Err(InvariantError::IncorrectDocFreq {
                term: term.to_string(),
                claimed: list.doc_freq,
                actual: list.postings.len(),
            });
        }
        for (position, posting) in list.postings.iter().enumerate() {
            if posting.doc_id.as_usize() >= total_docs {
                return Err(InvariantError::InvalidDocId {
                    term: term.to_string(),
                    doc_id: posting.doc_id.0,
                    total_docs,
                });
            }
            if posting.term_frequency == 0 {
                return Err(InvariantError::ZeroTermFrequency {
                    term: term.to_string(),
                    doc_id: posting.doc_id.0,
                });
            }
            if position > 0 && list.postings[position - 1].doc_id >= posting.doc_id {
                return Err(InvariantError::UnsortedPostingList {
                    term: term.to_string(),
                    position,
                });
            }
        }
    }
    Ok(())
}

/// A `SearchIndex` that has passed [`check_index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellFormedIndex(SearchIndex);

impl WellFormedIndex {
    pub fn from_index(index: SearchIndex) -> Result<Self, InvariantError> {
        check_index(&index)?;
        Ok(Self(index))
    }

    pub fn index(&self) -> &SearchIndex {
        &self.0
    }

    pub fn into_index(self) -> SearchIndex {
        self.0
    }
}
