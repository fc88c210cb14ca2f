// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use sitesearch::{
    build_index_parallel, check_index, normalize, search_with, ContentCollections, ContentType,
    Normalized, QueryState, SearchConfig, SearchIndex, SearchPage, TypeFilter,
};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::display::{
    dim, field_label, ok_label, pad_left, paint, row, score_value, section_bot, section_mid,
    section_top, truncate, type_badge, Tone, BOLD, BOX_WIDTH,
};
use cli::{Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            types,
            page,
            category,
            url,
            config,
            json,
        } => {
            let overrides = Overrides {
                query,
                types,
                page,
                category,
                url,
            };
            run_search(&file, overrides, config.as_deref(), json)
        }
        Commands::Inspect { file, top } => run_inspect(&file, top),
        Commands::Url { query_string } => run_url(&query_string),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` overrides the level.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitesearch=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_index(file: &Path) -> Result<(Normalized, SearchIndex)> {
    let collections = ContentCollections::from_json_file(file)
        .with_context(|| format!("loading content from {}", file.display()))?;
    let normalized = normalize(&collections);
    let index = build_index_parallel(normalized.documents.clone());
    Ok((normalized, index))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

/// Command-line values layered over the `--url` state.
struct Overrides {
    query: Option<String>,
    types: Option<String>,
    page: Option<u32>,
    category: Option<String>,
    url: Option<String>,
}

impl Overrides {
    fn into_state(self) -> Result<QueryState> {
        let mut state = self
            .url
            .as_deref()
            .map(QueryState::from_query_string)
            .unwrap_or_default();
        if let Some(query) = self.query {
            state.query = query;
        }
        if let Some(types) = self.types {
            state.type_filter = parse_type_list(&types)?;
        }
        if let Some(page) = self.page {
            state = state.with_page(page);
        }
        if let Some(category) = self.category {
            state = state.with_category(category);
        }
        Ok(state)
    }
}

/// Unlike URL parsing, the CLI rejects unknown type names.
fn parse_type_list(raw: &str) -> Result<TypeFilter> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(TypeFilter::all());
    }
    raw.split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| name.parse::<ContentType>().map_err(anyhow::Error::from))
        .collect::<Result<TypeFilter>>()
}

fn run_search(
    file: &Path,
    overrides: Overrides,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SearchConfig::default(),
    };
    let state = overrides.into_state()?;
    let (_, index) = load_index(file)?;
    let page = search_with(&index, &state, &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_results(&state, &page);
    }
    Ok(())
}

fn print_results(state: &QueryState, page: &SearchPage) {
    let location = state.to_query_string();
    section_top("QUERY");
    row(&format!(" {}", paint(Tone::Cyan, &[BOLD], &format!("?{}", location))));
    row(&format!(
        " {} matches, page {} of {}",
        page.total_matches,
        page.page,
        page.page_count.max(1)
    ));

    section_mid("RESULTS");
    if page.results.is_empty() {
        row(&format!(" {}", dim("no results")));
    }
    for (rank, result) in page.results.iter().enumerate() {
        let doc = &result.document;
        row(&format!(
            " {} {} {} {}",
            pad_left(&(rank + 1).to_string(), 3),
            type_badge(doc.content_type),
            score_value(result.score),
            truncate(&doc.title, BOX_WIDTH - 22),
        ));
        row(&format!(
            "       {} {}",
            field_label(result.matched_field),
            dim(&truncate(&result.matched_field_excerpt, BOX_WIDTH - 16))
        ));
        row(&format!("       {}", dim(&truncate(&doc.url, BOX_WIDTH - 8))));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(file: &Path, top: usize) -> Result<()> {
    let (normalized, index) = load_index(file)?;

    section_top("DOCUMENTS");
    for content_type in ContentType::ALL {
        let kept = index
            .documents()
            .iter()
            .filter(|doc| doc.content_type == content_type)
            .count();
        row(&format!(
            " {} {} kept, {} dropped",
            type_badge(content_type),
            pad_left(&kept.to_string(), 6),
            normalized.dropped.get(content_type)
        ));
    }
    row(&format!(" total {} documents", index.total_docs()));

    section_mid("INDEX");
    row(&format!(" {} distinct terms", index.term_count()));
    let mut terms: Vec<(&str, usize)> = index
        .terms()
        .map(|(term, list)| (term, list.doc_freq))
        .collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    for (term, doc_freq) in terms.into_iter().take(top) {
        row(&format!(" {} {}", pad_left(&doc_freq.to_string(), 6), term));
    }

    section_mid("INVARIANTS");
    match check_index(&index) {
        Ok(()) => row(&format!(" {}", ok_label(true))),
        Err(err) => row(&format!(" {} {}", ok_label(false), err)),
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// URL
// ═══════════════════════════════════════════════════════════════════════════

fn run_url(query_string: &str) -> Result<()> {
    let state = QueryState::from_query_string(query_string);
    println!("?{}", state.to_query_string());
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
