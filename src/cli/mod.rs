// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesearch command-line interface.
//!
//! Three subcommands: `search` to query a content snapshot, `inspect` to see
//! what the normalizer and index builder made of it, and `url` to canonicalize
//! a query string.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sitesearch",
    about = "Unified search over posts, guides, quizzes and games",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a content snapshot and display ranked results
    Search {
        /// Content JSON: { "posts": [...], "guides": [...], "quizzes": [...], "games": [...] }
        file: PathBuf,

        /// Search query (overrides `q` from --url)
        query: Option<String>,

        /// Comma-separated content types, e.g. post,guide
        #[arg(short = 't', long = "type")]
        types: Option<String>,

        /// 1-based result page
        #[arg(short, long)]
        page: Option<u32>,

        /// Restrict to one category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Start from a URL query string such as "q=docker&type=guide"
        #[arg(long)]
        url: Option<String>,

        /// Search config JSON (pageSize, debounceMs, excerptWords)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the result page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show document counts, dropped records and index statistics
    Inspect {
        /// Content JSON file
        file: PathBuf,

        /// Number of most frequent terms to list
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Parse a query string and print its canonical form
    Url {
        /// Query string, `?`-prefixed string or full URL
        query_string: String,
    },
}
