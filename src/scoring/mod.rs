// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! `core` computes per-term contributions; `ranking` turns scored candidates
//! into a total order so identical inputs always produce identical pages.

mod core;
pub mod ranking;

pub use self::core::*;
