// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! Built once per content snapshot, read-only afterwards. Rebuilding from
//! scratch on every content change is the whole update story: the corpus is
//! hundreds to low thousands of documents, so a rebuild is cheap and there's
//! no incremental state to get wrong.
//!
//! # Invariants
//!
//! 1. **POSTING_REFERENCES_DOC**: every posting's `doc_id < documents.len()`
//! 2. **POSTING_LIST_SORTED**: postings strictly increasing by `doc_id`
//! 3. **DOC_FREQ_CORRECT**: `doc_freq == postings.len()`
//! 4. **NON_EMPTY**: every term has at least one posting
//! 5. **UNIQUE_IDS**: no two documents share an `id`
//!
//! `verify::check_index` checks all five.
//!
//! # Determinism
//!
//! Terms live in a `BTreeMap` and documents are processed in input order, so
//! building twice from the same documents gives indexes that compare equal.
//! The parallel builder merges per-document maps in document order and
//! produces the same index as the sequential one.

pub mod tokenize;

use crate::scoring::FIELD_ORDER;
use crate::types::{ContentDocument, DocId, FieldKind, Posting, PostingList};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

pub use tokenize::{fold, is_stop_word, query_terms, tokenize};

/// Per-document statistics for one term: strongest field and total count.
type DocTerms = BTreeMap<String, (FieldKind, u32)>;

/// Immutable inverted index over a document snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    documents: Vec<ContentDocument>,
    terms: BTreeMap<String, PostingList>,
}

impl SearchIndex {
    pub fn documents(&self) -> &[ContentDocument] {
        &self.documents
    }

    pub fn document(&self, doc_id: DocId) -> Option<&ContentDocument> {
        self.documents.get(doc_id.as_usize())
    }

    pub fn total_docs(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Posting list for an already-tokenized term.
    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// Number of documents containing `term` (0 if absent).
    pub fn document_frequency(&self, term: &str) -> usize {
        self.terms.get(term).map_or(0, |list| list.doc_freq)
    }

    /// All terms in lexicographic order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.terms.iter().map(|(term, list)| (term.as_str(), list))
    }
}

/// Tokenize one document's fields into per-term statistics.
///
/// A term seen in several fields keeps the strongest field and sums the
/// occurrence counts across all of them.
fn document_terms(doc: &ContentDocument) -> DocTerms {
    let mut terms = DocTerms::new();
    for field in FIELD_ORDER {
        let tokens = match field {
            FieldKind::Title => tokenize(&doc.title),
            FieldKind::Tags => doc.tags.iter().flat_map(|tag| tokenize(tag)).collect(),
            FieldKind::Excerpt => tokenize(&doc.excerpt),
        };
        for token in tokens {
            let entry = terms.entry(token).or_insert((field, 0));
            entry.0 = entry.0.max(field);
            entry.1 += 1;
        }
    }
    terms
}

/// Drop documents whose id was already seen, keeping the first.
fn unique_documents(documents: Vec<ContentDocument>) -> Vec<ContentDocument> {
    let mut seen = HashSet::new();
    documents
        .into_iter()
        .filter(|doc| {
            let fresh = seen.insert(doc.id.clone());
            if !fresh {
                warn!(id = %doc.id, "skipping duplicate document id");
            }
            fresh
        })
        .collect()
}

/// Fold per-document term maps (in document order) into posting lists.
fn assemble(documents: Vec<ContentDocument>, per_doc: Vec<DocTerms>) -> SearchIndex {
    let mut terms: BTreeMap<String, PostingList> = BTreeMap::new();

    for (ordinal, doc_terms) in per_doc.into_iter().enumerate() {
        let doc_id = DocId(ordinal as u32);
        for (term, (field, term_frequency)) in doc_terms {
            let list = terms.entry(term).or_default();
            list.postings.push(Posting {
                doc_id,
                field,
                term_frequency,
            });
            list.doc_freq += 1;
        }
    }

    debug!(
        documents = documents.len(),
        terms = terms.len(),
        "built search index"
    );
    SearchIndex { documents, terms }
}

/// Build an inverted index from normalized documents.
///
/// Cost is linear in the total number of tokens.
pub fn build_index(documents: Vec<ContentDocument>) -> SearchIndex {
    let documents = unique_documents(documents);
    let per_doc: Vec<DocTerms> = documents.iter().map(document_terms).collect();
    assemble(documents, per_doc)
}

/// Build an inverted index with per-document tokenization spread over rayon.
///
/// Produces an index equal to [`build_index`]; only worth it for large corpora.
#[cfg(feature = "parallel")]
pub fn build_index_parallel(documents: Vec<ContentDocument>) -> SearchIndex {
    let documents = unique_documents(documents);
    let per_doc: Vec<DocTerms> = documents.par_iter().map(document_terms).collect();
    assemble(documents, per_doc)
}

/// Sequential fallback when the `parallel` feature is off.
#[cfg(not(feature = "parallel"))]
pub fn build_index_parallel(documents: Vec<ContentDocument>) -> SearchIndex {
    build_index(documents)
}
