// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The one tokenizer both indexing and querying go through.
//!
//! If the two sides tokenized differently, terms would silently stop matching,
//! so there is exactly one entry point: [`tokenize`].
//!
//! Rules: split on anything that isn't alphanumeric, fold case (and strip
//! diacritics when `unicode-normalization` is on), drop stop words. No
//! stemming.

use std::collections::HashSet;
use std::sync::LazyLock;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Words too common to help ranking.
///
/// Kept short: content titles are brief, and an aggressive list starts eating
/// words people actually search for.
const STOP_WORD_LIST: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "into", "is", "it",
    "its", "of", "on", "or", "that", "the", "this", "to", "was", "with",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORD_LIST.iter().copied().collect());

#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Word boundary detection: anything non-alphanumeric separates words.
#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Fold a single word: lowercase and strip combining marks.
///
/// - "Café" → "cafe"
/// - "naïve" → "naive"
#[cfg(feature = "unicode-normalization")]
pub fn fold(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only; assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(word: &str) -> String {
    word.to_lowercase()
}

/// Combining diacritical mark ranges (Unicode category Mn, common blocks).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1AB0}'..='\u{1AFF}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

/// Split text into searchable terms, in order of appearance.
///
/// Repeated terms are kept; callers that want a set dedupe themselves.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_word_boundary)
        .filter(|word| !word.is_empty())
        .map(fold)
        .filter(|term| !term.is_empty() && !is_stop_word(term))
        .collect()
}

/// Tokenize a query into distinct terms, keeping first-occurrence order.
///
/// A query is a set of terms for scoring purposes: typing a word twice should
/// not double its weight.
pub fn query_terms(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(query)
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}
