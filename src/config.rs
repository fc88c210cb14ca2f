// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for ranking output and the input synchronizer.
//!
//! The defaults (page size 20, 200ms debounce) are starting points meant to be
//! tuned against a real corpus. Every field is optional in the JSON form.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_EXCERPT_WORDS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchConfig {
    /// Results per page.
    pub page_size: usize,
    /// Quiet period before typed input becomes a search.
    pub debounce_ms: u64,
    /// Maximum words in an excerpt snippet.
    pub excerpt_words: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            excerpt_words: DEFAULT_EXCERPT_WORDS,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("pageSize must be at least 1".into()));
        }
        if self.excerpt_words == 0 {
            return Err(ConfigError::Invalid(
                "excerptWords must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
