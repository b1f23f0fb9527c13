//! Pure formatting helpers shared by the renderers.
//!
//! Nothing here touches the terminal, so every rule is unit-tested directly.

use chrono::{DateTime, Local};

use crate::models::{content_type_name, ContentType, RankedItem};

/// Signed percentage for a stat card delta.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendIndicator {
    pub text: String,
    /// Drives green (true) or red (false) coloring.
    pub positive: bool,
}

impl TrendIndicator {
    /// `v >= 0` renders as `+{v}%`, negatives as `{v}%`.
    pub fn new(value: f64) -> Self {
        // -0.0 compares equal to 0.0 but would print as "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        let positive = value >= 0.0;
        let text = if positive {
            format!("+{}%", value)
        } else {
            format!("{}%", value)
        };
        Self { text, positive }
    }
}

/// Plain percentage without a sign prefix (prediction accuracy).
pub fn percent(value: f64) -> String {
    format!("{}%", value)
}

/// Round half up, the way the web dashboard rounds scores.
pub fn round_score(score: f64) -> i64 {
    (score + 0.5).floor() as i64
}

/// Hot-trend score with one decimal.
pub fn hot_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Category label, or the localized "uncategorized" placeholder.
pub fn category_or_unknown(category: Option<&str>) -> String {
    match category {
        Some(c) if !c.trim().is_empty() => c.to_string(),
        _ => t!("common.uncategorized").to_string(),
    }
}

// ── Ranking ──────────────────────────────────────────────────────

/// One row of the detail ranking. Server order is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    /// 1-based position.
    pub rank: usize,
    pub title: String,
    pub category: String,
    pub score: i64,
}

pub fn ranking_rows(items: &[RankedItem]) -> Vec<RankingRow> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| RankingRow {
            rank: i + 1,
            title: item.title.clone(),
            category: category_or_unknown(item.category.as_deref()),
            score: round_score(item.popularity_score),
        })
        .collect()
}

// ── Detail view text ─────────────────────────────────────────────

pub fn detail_title(code: &str) -> String {
    ContentType::from_code(code)
        .map(|ct| ct.detail_title())
        .unwrap_or_else(|| t!("detail.title_fallback").to_string())
}

/// Heading and body of the industry-trend narrative for `code`.
pub fn narrative(code: &str) -> (String, String) {
    (
        t!("detail.narrative_title", kind = content_type_name(code)).to_string(),
        t!("detail.narrative_body").to_string(),
    )
}

// ── Clock ────────────────────────────────────────────────────────

/// `(date, time)` strings for the header clock.
pub fn clock(now: &DateTime<Local>) -> (String, String) {
    let date_fmt = t!("clock.date_format").to_string();
    (
        now.format(&date_fmt).to_string(),
        now.format("%H:%M:%S").to_string(),
    )
}
