use std::fmt;

use serde::Deserialize;

/// The five content categories the backend crawls and analyzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Novel,
    Drama,
    Comic,
    News,
    Entertainment,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Novel,
        ContentType::Drama,
        ContentType::Comic,
        ContentType::News,
        ContentType::Entertainment,
    ];

    /// Categories tracked by the hot-trends view (novels are not).
    pub const HOT_TREND: [ContentType; 4] = [
        ContentType::Drama,
        ContentType::Comic,
        ContentType::News,
        ContentType::Entertainment,
    ];

    /// Wire code used in URLs and JSON payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ContentType::Novel => "novel",
            ContentType::Drama => "drama",
            ContentType::Comic => "comic",
            ContentType::News => "news",
            ContentType::Entertainment => "entertainment",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "novel" => Some(ContentType::Novel),
            "drama" => Some(ContentType::Drama),
            "comic" => Some(ContentType::Comic),
            "news" => Some(ContentType::News),
            "entertainment" => Some(ContentType::Entertainment),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ContentType::Novel => t!("content.novel").to_string(),
            ContentType::Drama => t!("content.drama").to_string(),
            ContentType::Comic => t!("content.comic").to_string(),
            ContentType::News => t!("content.news").to_string(),
            ContentType::Entertainment => t!("content.entertainment").to_string(),
        }
    }

    /// Title of the drill-down panel for this type.
    pub fn detail_title(&self) -> String {
        match self {
            ContentType::Novel => t!("detail.title_novel").to_string(),
            ContentType::Drama => t!("detail.title_drama").to_string(),
            ContentType::Comic => t!("detail.title_comic").to_string(),
            ContentType::News => t!("detail.title_news").to_string(),
            ContentType::Entertainment => t!("detail.title_entertainment").to_string(),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Localized display name for a content-type code.
///
/// Unknown codes pass through unchanged so new backend categories still render.
pub fn content_type_name(code: &str) -> String {
    match ContentType::from_code(code) {
        Some(ct) => ct.label(),
        None => code.to_string(),
    }
}

/// Processing state of a crawled item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum ContentStatus {
    #[default]
    Pending,
    Analyzing,
    Analyzed,
}

impl From<String> for ContentStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => ContentStatus::Pending,
            "analyzed" => ContentStatus::Analyzed,
            // Anything the backend reports mid-flight counts as analyzing
            _ => ContentStatus::Analyzing,
        }
    }
}

impl ContentStatus {
    pub fn label(&self) -> String {
        match self {
            ContentStatus::Pending => t!("raw.status_pending").to_string(),
            ContentStatus::Analyzing => t!("raw.status_analyzing").to_string(),
            ContentStatus::Analyzed => t!("raw.status_analyzed").to_string(),
        }
    }
}

/// A raw crawled item as listed by `/api/content/raw`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    pub content_type: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub popularity_score: f64,
    #[serde(default)]
    pub source_site: String,
    #[serde(default)]
    pub crawl_date: String,
    #[serde(default)]
    pub status: ContentStatus,
}

/// Coarse popularity bucket used for the raw-data badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopularityLevel {
    Low,
    Medium,
    High,
}

impl PopularityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            PopularityLevel::High
        } else if score >= 60.0 {
            PopularityLevel::Medium
        } else {
            PopularityLevel::Low
        }
    }
}

/// An entry of the per-type ranking (`/api/content/top/{type}`).
#[derive(Debug, Clone, Deserialize)]
pub struct RankedItem {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub popularity_score: f64,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ContentType ───────────────────────────────────────────────

    #[test]
    fn code_round_trips_for_all_types() {
        for ct in ContentType::ALL {
            assert_eq!(ContentType::from_code(ct.code()), Some(ct));
        }
    }

    #[test]
    fn from_code_rejects_unknown_and_case_variants() {
        assert_eq!(ContentType::from_code("overall"), None);
        assert_eq!(ContentType::from_code("Novel"), None);
        assert_eq!(ContentType::from_code(""), None);
    }

    #[test]
    fn hot_trend_categories_exclude_novel() {
        assert!(!ContentType::HOT_TREND.contains(&ContentType::Novel));
        assert_eq!(ContentType::HOT_TREND.len(), 4);
    }

    // ── content_type_name ─────────────────────────────────────────

    #[test]
    fn content_type_name_known_codes() {
        rust_i18n::set_locale("en");
        assert_eq!(content_type_name("novel"), "Novel");
        assert_eq!(content_type_name("drama"), "Short Drama");
        assert_eq!(content_type_name("comic"), "Comic Drama");
        assert_eq!(content_type_name("news"), "News");
        assert_eq!(content_type_name("entertainment"), "Entertainment");
    }

    #[test]
    fn content_type_name_unknown_passes_through() {
        rust_i18n::set_locale("en");
        assert_eq!(content_type_name("podcast"), "podcast");
        assert_eq!(content_type_name(""), "");
    }

    // ── ContentStatus ─────────────────────────────────────────────

    #[test]
    fn status_deserializes_known_values() {
        let s: ContentStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(s, ContentStatus::Pending);
        let s: ContentStatus = serde_json::from_str("\"analyzed\"").unwrap();
        assert_eq!(s, ContentStatus::Analyzed);
    }

    #[test]
    fn status_unknown_value_is_analyzing() {
        let s: ContentStatus = serde_json::from_str("\"queued\"").unwrap();
        assert_eq!(s, ContentStatus::Analyzing);
    }

    #[test]
    fn content_item_tolerates_missing_optional_fields() {
        let item: ContentItem =
            serde_json::from_str(r#"{"title":"t","content_type":"news"}"#).unwrap();
        assert_eq!(item.id, None);
        assert_eq!(item.category, None);
        assert_eq!(item.status, ContentStatus::Pending);
        assert_eq!(item.popularity_score, 0.0);
    }

    // ── PopularityLevel ───────────────────────────────────────────

    #[test]
    fn popularity_level_thresholds() {
        assert_eq!(PopularityLevel::from_score(80.0), PopularityLevel::High);
        assert_eq!(PopularityLevel::from_score(79.9), PopularityLevel::Medium);
        assert_eq!(PopularityLevel::from_score(60.0), PopularityLevel::Medium);
        assert_eq!(PopularityLevel::from_score(59.9), PopularityLevel::Low);
        assert_eq!(PopularityLevel::from_score(-5.0), PopularityLevel::Low);
    }
}
