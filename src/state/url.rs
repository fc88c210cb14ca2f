// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `QueryState` ⇄ URL query string.
//!
//! | Param      | Meaning                          | Absent      |
//! |------------|----------------------------------|-------------|
//! | `q`        | free text, form-urlencoded       | empty query |
//! | `type`     | comma list of post,guide,quiz,game | all types |
//! | `page`     | positive integer                 | 1           |
//! | `category` | category name                    | none        |
//!
//! Parsing never fails. Unknown parameters are ignored, bad values fall back
//! to their defaults, and a repeated parameter keeps its first occurrence.
//! Serialization omits defaults, so `deserialize(serialize(s)) == s` for every
//! state with `page ≥ 1` and a non-blank (or absent) category.

use super::{QueryState, TypeFilter};
use crate::types::ContentType;
use ::url::form_urlencoded;

pub const PARAM_QUERY: &str = "q";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_CATEGORY: &str = "category";

/// Encode a state as a query string without the leading `?`.
pub fn serialize(state: &QueryState) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    if !state.query.is_empty() {
        out.append_pair(PARAM_QUERY, &state.query);
    }
    if !state.type_filter.is_all() {
        let types: Vec<&str> = state.type_filter.types().map(ContentType::as_str).collect();
        out.append_pair(PARAM_TYPE, &types.join(","));
    }
    if state.page > 1 {
        out.append_pair(PARAM_PAGE, &state.page.to_string());
    }
    if let Some(category) = state.category.as_deref().filter(|c| !c.trim().is_empty()) {
        out.append_pair(PARAM_CATEGORY, category);
    }
    out.finish()
}

/// Decode a query string, a `?`-prefixed one, or a whole path/URL.
pub fn deserialize(input: &str) -> QueryState {
    let query_string = extract_query(input);
    let mut query = None;
    let mut types = None;
    let mut page = None;
    let mut category = None;

    for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
        match key.as_ref() {
            PARAM_QUERY if query.is_none() => query = Some(value.into_owned()),
            PARAM_TYPE if types.is_none() => types = Some(parse_types(&value)),
            PARAM_PAGE if page.is_none() => page = Some(parse_page(&value)),
            PARAM_CATEGORY if category.is_none() => category = Some(value.into_owned()),
            _ => {}
        }
    }

    QueryState {
        query: query.unwrap_or_default(),
        type_filter: types.unwrap_or_default(),
        page: page.unwrap_or(1),
        category: category.filter(|c| !c.trim().is_empty()),
    }
}

/// Everything after the first `?` (if any), minus any `#fragment`.
fn extract_query(input: &str) -> &str {
    let without_fragment = input.split_once('#').map_or(input, |(before, _)| before);
    without_fragment
        .split_once('?')
        .map_or(without_fragment, |(_, after)| after)
}

/// Unknown names are skipped; `all` or nothing valid means all types.
fn parse_types(raw: &str) -> TypeFilter {
    let mut selected = Vec::new();
    for name in raw.split(',') {
        let name = name.trim();
        if name.eq_ignore_ascii_case("all") {
            return TypeFilter::all();
        }
        if let Ok(content_type) = name.parse::<ContentType>() {
            selected.push(content_type);
        }
    }
    TypeFilter::only(selected)
}

fn parse_page(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => 1,
    }
}
