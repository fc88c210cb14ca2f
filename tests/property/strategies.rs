//! Generators shared by the property suites.

use proptest::prelude::*;
use sitesearch::{ContentDocument, ContentType, QueryState, TypeFilter};

/// Small vocabulary so generated documents and queries overlap often.
pub const VOCAB: &[&str] = &[
    "docker", "rust", "kubernetes", "network", "async", "quiz", "game", "linux", "shell",
    "cloud", "the", "and", "of",
];

pub fn word() -> impl Strategy<Value = String> {
    prop::sample::select(VOCAB).prop_map(str::to_string)
}

pub fn text(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..=max_words).prop_map(|words| words.join(" "))
}

pub fn content_type() -> impl Strategy<Value = ContentType> {
    prop::sample::select(ContentType::ALL.to_vec())
}

pub fn type_filter() -> impl Strategy<Value = TypeFilter> {
    prop::collection::vec(content_type(), 0..=4).prop_map(TypeFilter::only)
}

/// Documents with unique ids `<type>:<n>`.
pub fn corpus() -> impl Strategy<Value = Vec<ContentDocument>> {
    prop::collection::vec(
        (
            content_type(),
            text(4),
            text(8),
            prop::collection::vec(word(), 0..3),
        ),
        1..12,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(n, (content_type, title, excerpt, tags))| {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                sitesearch::testing::make_doc_with(
                    &format!("{}:{}", content_type, n),
                    content_type,
                    &title,
                    &excerpt,
                    &tags,
                )
            })
            .collect()
    })
}

/// Any state the URL can carry, built through the public constructors.
pub fn query_state() -> impl Strategy<Value = QueryState> {
    (
        "\\PC{0,24}",
        type_filter(),
        1u32..5000,
        proptest::option::of("[A-Za-z][A-Za-z &/+-]{0,12}"),
    )
        .prop_map(|(query, types, page, category)| {
            let state = QueryState::new(query).with_types(types).with_page(page);
            match category {
                Some(category) => state.with_category(category),
                None => state,
            }
        })
}
