use std::collections::HashMap;

use serde::Deserialize;

use super::ContentType;

/// Headline numbers for the dashboard stat cards (`/api/dashboard/stats`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub hot_novel_count: u64,
    pub hot_drama_count: u64,
    pub hot_comic_count: u64,
    pub news_count: Option<u64>,
    pub entertainment_count: Option<u64>,
    pub prediction_accuracy: f64,
    pub novel_trend: f64,
    pub drama_trend: f64,
    pub comic_trend: f64,
    pub accuracy_trend: f64,
}

impl DashboardStats {
    /// Per-type counts for the distribution chart. Missing optional counts are 0.
    pub fn distribution(&self) -> DistributionSnapshot {
        DistributionSnapshot {
            slices: vec![
                (ContentType::Novel, self.hot_novel_count),
                (ContentType::Drama, self.hot_drama_count),
                (ContentType::Comic, self.hot_comic_count),
                (ContentType::News, self.news_count.unwrap_or(0)),
                (
                    ContentType::Entertainment,
                    self.entertainment_count.unwrap_or(0),
                ),
            ],
        }
    }
}

/// Category shares shown by the distribution chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistributionSnapshot {
    pub slices: Vec<(ContentType, u64)>,
}

impl DistributionSnapshot {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|(_, n)| n).sum()
    }

    /// Share of `count` in the total as a percentage, 0 when the total is empty.
    pub fn percent(&self, count: u64) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    }
}

/// Daily item counts per category over a window (`/api/charts/trends`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrendSeries {
    /// `MM-DD` labels, oldest first.
    pub dates: Vec<String>,
    pub novel_counts: Vec<f64>,
    pub drama_counts: Vec<f64>,
    pub comic_counts: Vec<f64>,
    pub news_counts: Vec<f64>,
    pub entertainment_counts: Vec<f64>,
}

impl TrendSeries {
    pub fn counts(&self, ct: ContentType) -> &[f64] {
        match ct {
            ContentType::Novel => &self.novel_counts,
            ContentType::Drama => &self.drama_counts,
            ContentType::Comic => &self.comic_counts,
            ContentType::News => &self.news_counts,
            ContentType::Entertainment => &self.entertainment_counts,
        }
    }

    /// Largest value across all series (0 for an empty window).
    pub fn max_count(&self) -> f64 {
        ContentType::ALL
            .iter()
            .flat_map(|ct| self.counts(*ct).iter().copied())
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Per-category hot-trend counters (`/api/hot-trends/stats`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HotTrendStats {
    pub drama_count: u64,
    pub comic_count: u64,
    pub news_count: u64,
    pub entertainment_count: u64,
}

impl HotTrendStats {
    pub fn count(&self, ct: ContentType) -> u64 {
        match ct {
            ContentType::Drama => self.drama_count,
            ContentType::Comic => self.comic_count,
            ContentType::News => self.news_count,
            ContentType::Entertainment => self.entertainment_count,
            ContentType::Novel => 0,
        }
    }
}

/// Items awaiting analysis, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingCounts {
    counts: HashMap<ContentType, u64>,
}

impl PendingCounts {
    pub fn from_pairs(pairs: &[(ContentType, u64)]) -> Self {
        Self {
            counts: pairs.iter().copied().collect(),
        }
    }

    /// Tally pending rows of a raw listing. Unknown type codes are skipped.
    pub fn tally<'a>(items: impl IntoIterator<Item = &'a super::ContentItem>) -> Self {
        let mut counts = HashMap::new();
        for item in items {
            if item.status != super::ContentStatus::Pending {
                continue;
            }
            if let Some(ct) = ContentType::from_code(&item.content_type) {
                *counts.entry(ct).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    pub fn get(&self, ct: ContentType) -> u64 {
        self.counts.get(&ct).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Backend health as reported by `/api/system/status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BackendStatus {
    pub database_status: String,
    pub ollama_status: String,
    pub last_update: String,
    pub total_records: u64,
    pub hardware: HardwareStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HardwareStatus {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_usage: f64,
    pub gpu: Option<GpuStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GpuStatus {
    pub available: bool,
    pub count: u32,
    pub details: Vec<GpuDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GpuDetail {
    pub name: String,
    pub load: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentItem;

    // ── DashboardStats ────────────────────────────────────────────

    #[test]
    fn stats_parse_with_missing_optional_counts() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"hot_novel_count":3,"hot_drama_count":2,"hot_comic_count":1,
                "prediction_accuracy":87.5,"novel_trend":100,"drama_trend":-12.5,
                "comic_trend":0,"accuracy_trend":2.3}"#,
        )
        .unwrap();
        assert_eq!(stats.news_count, None);
        assert_eq!(stats.drama_trend, -12.5);

        let dist = stats.distribution();
        assert_eq!(dist.slices.len(), 5);
        assert_eq!(dist.total(), 6);
        assert_eq!(dist.slices[3], (ContentType::News, 0));
    }

    #[test]
    fn distribution_percent_handles_empty_total() {
        let dist = DashboardStats::default().distribution();
        assert_eq!(dist.total(), 0);
        assert_eq!(dist.percent(0), 0.0);
    }

    #[test]
    fn distribution_percent_of_total() {
        let stats = DashboardStats {
            hot_novel_count: 1,
            hot_drama_count: 3,
            ..Default::default()
        };
        let dist = stats.distribution();
        assert_eq!(dist.percent(1), 25.0);
        assert_eq!(dist.percent(3), 75.0);
    }

    // ── TrendSeries ───────────────────────────────────────────────

    #[test]
    fn trend_series_max_count_across_series() {
        let series = TrendSeries {
            dates: vec!["01-01".into(), "01-02".into()],
            novel_counts: vec![1.0, 4.0],
            news_counts: vec![9.0, 2.0],
            ..Default::default()
        };
        assert_eq!(series.max_count(), 9.0);
        assert_eq!(series.counts(ContentType::Comic), &[] as &[f64]);
        assert!(!series.is_empty());
    }

    #[test]
    fn trend_series_empty_window() {
        let series = TrendSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.max_count(), 0.0);
    }

    // ── PendingCounts ─────────────────────────────────────────────

    fn item(ct: &str, status: &str) -> ContentItem {
        serde_json::from_value(serde_json::json!({
            "title": "t", "content_type": ct, "status": status
        }))
        .unwrap()
    }

    #[test]
    fn pending_tally_counts_only_pending_known_types() {
        let items = vec![
            item("novel", "pending"),
            item("novel", "pending"),
            item("novel", "analyzed"),
            item("news", "pending"),
            item("podcast", "pending"),
            item("drama", "analyzing"),
        ];
        let counts = PendingCounts::tally(&items);
        assert_eq!(counts.get(ContentType::Novel), 2);
        assert_eq!(counts.get(ContentType::News), 1);
        assert_eq!(counts.get(ContentType::Drama), 0);
        assert_eq!(counts.total(), 3);
    }

    // ── HotTrendStats / BackendStatus ─────────────────────────────

    #[test]
    fn hot_trend_stats_default_missing_fields() {
        let stats: HotTrendStats = serde_json::from_str(r#"{"news_count":8}"#).unwrap();
        assert_eq!(stats.count(ContentType::News), 8);
        assert_eq!(stats.count(ContentType::Drama), 0);
        assert_eq!(stats.count(ContentType::Novel), 0);
    }

    #[test]
    fn backend_status_parses_nested_hardware() {
        let status: BackendStatus = serde_json::from_str(
            r#"{"database_status":"connected","ollama_status":"available",
                "last_update":"2024-01-01 10:00:00","total_records":0,
                "hardware":{"cpu_percent":12.5,"memory_percent":40,"disk_usage":71.2,
                            "gpu":{"available":false}}}"#,
        )
        .unwrap();
        assert_eq!(status.database_status, "connected");
        assert_eq!(status.hardware.memory_percent, 40.0);
        let gpu = status.hardware.gpu.unwrap();
        assert!(!gpu.available);
        assert!(gpu.details.is_empty());
    }
}
