// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sitesearch CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Respects
//! `NO_COLOR` and falls back to plain text when stdout is not a TTY, so piping
//! `sitesearch search` into other tools stays clean.
//!
//! # Theme detection order
//!
//! 1. `SITESEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use sitesearch::{ContentType, FieldKind};
use std::sync::OnceLock;

/// Width between │ and │ (excluding border chars).
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SITESEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        let light = colorfgbg
            .rsplit(';')
            .next()
            .and_then(|bg| bg.parse::<u8>().ok())
            .is_some_and(|bg| bg >= 7 && bg != 8);
        if light {
            return Theme::Light;
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Semantic colors used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Tone {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Tone::Red) => (224, 108, 117),
            (Theme::Dark, Tone::Green) => (152, 195, 121),
            (Theme::Dark, Tone::Yellow) => (229, 192, 123),
            (Theme::Dark, Tone::Blue) => (97, 175, 239),
            (Theme::Dark, Tone::Magenta) => (198, 120, 221),
            (Theme::Dark, Tone::Cyan) => (86, 182, 194),
            (Theme::Dark, Tone::Gray) => (92, 99, 112),
            (Theme::Light, Tone::Red) => (228, 86, 73),
            (Theme::Light, Tone::Green) => (80, 161, 79),
            (Theme::Light, Tone::Yellow) => (193, 132, 1),
            (Theme::Light, Tone::Blue) => (64, 120, 242),
            (Theme::Light, Tone::Magenta) => (166, 38, 164),
            (Theme::Light, Tone::Cyan) => (1, 132, 188),
            (Theme::Light, Tone::Gray) => (160, 161, 167),
        }
    }

    fn escape(self) -> String {
        rgb(self.rgb(theme()))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Color `text` with `tone` plus modifiers, or leave it plain off-TTY.
pub fn paint(tone: Tone, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(tone: Tone) -> (String, &'static str) {
    if use_colors() {
        (tone.escape(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Visible length, ignoring ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if !in_escape => len += 1,
            _ => {}
        }
    }
    len
}

/// Cut plain text to `max` visible characters, ending in "…" when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    format!("{}{}", " ".repeat(width.saturating_sub(visible)), s)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let (on, off) = border(Tone::Gray);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{on}│{off}{content}{}{on}│{off}", " ".repeat(pad));
}

fn labelled_rule(left: char, right: char, label: &str) {
    let (on, off) = border(Tone::Gray);
    let label_part = format!("─ {} ", paint(Tone::Cyan, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{on}{left}{off}{label_part}{on}{}{right}{off}", "─".repeat(remaining));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    labelled_rule('┌', '┐', label);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    labelled_rule('├', '┤', label);
}

/// └──────────────────┘
pub fn section_bot() {
    let (on, off) = border(Tone::Gray);
    println!("{on}└{}┘{off}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Fixed-width, color-coded content type badge.
pub fn type_badge(content_type: ContentType) -> String {
    let tone = match content_type {
        ContentType::Post => Tone::Green,
        ContentType::Guide => Tone::Blue,
        ContentType::Quiz => Tone::Magenta,
        ContentType::Game => Tone::Yellow,
    };
    paint(tone, &[BOLD], &format!("{:<5}", content_type.as_str()))
}

pub fn field_label(field: FieldKind) -> String {
    let tone = match field {
        FieldKind::Title => Tone::Green,
        FieldKind::Tags => Tone::Cyan,
        FieldKind::Excerpt => Tone::Gray,
    };
    paint(tone, &[], field.as_str())
}

/// Score with color by magnitude.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>7.3}", score);
    let tone = if score >= 5.0 {
        Tone::Green
    } else if score >= 1.0 {
        Tone::Yellow
    } else {
        Tone::Gray
    };
    paint(tone, &[], &text)
}

pub fn ok_label(ok: bool) -> String {
    if ok {
        paint(Tone::Green, &[BOLD], "ok")
    } else {
        paint(Tone::Red, &[BOLD], "FAILED")
    }
}

pub fn dim(text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", DIM, text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
