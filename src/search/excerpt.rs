// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display snippets for results.
//!
//! The snippet comes from whichever field produced the strongest match, so a
//! title hit shows the title and an excerpt hit shows the words around the
//! first matching word.

use crate::index::tokenize;
use crate::types::{ContentDocument, FieldKind};

/// Words of context kept before the first hit in an excerpt window.
const LEAD_WORDS: usize = 4;

const ELLIPSIS: char = '…';

/// Snippet for `doc` taken from `field`, highlighting where `terms` matched.
pub fn matched_field_excerpt(
    doc: &ContentDocument,
    field: FieldKind,
    terms: &[String],
    max_words: usize,
) -> String {
    match field {
        FieldKind::Title => doc.title.clone(),
        FieldKind::Tags => {
            let matched: Vec<&str> = doc
                .tags
                .iter()
                .filter(|tag| contains_term(tag, terms))
                .map(String::as_str)
                .collect();
            if matched.is_empty() {
                doc.tags.join(", ")
            } else {
                matched.join(", ")
            }
        }
        FieldKind::Excerpt => window(&doc.excerpt, terms, max_words),
    }
}

fn contains_term(text: &str, terms: &[String]) -> bool {
    tokenize(text).iter().any(|token| terms.contains(token))
}

/// At most `max_words` words around the first word containing a term.
fn window(text: &str, terms: &[String], max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }

    let max_words = max_words.max(1);
    let lead = LEAD_WORDS.min(max_words - 1);
    let hit = words
        .iter()
        .position(|word| contains_term(word, terms))
        .unwrap_or(0);

    let start = hit.saturating_sub(lead);
    let end = (start + max_words).min(words.len());
    // Near the end of the text, slide back to use the full window.
    let start = start.min(end.saturating_sub(max_words));

    let mut out = String::new();
    if start > 0 {
        out.push(ELLIPSIS);
    }
    out.push_str(&words[start..end].join(" "));
    if end < words.len() {
        out.push(ELLIPSIS);
    }
    out
}
