use serde::Deserialize;

/// A currently high-popularity item within a hot-trend category.
///
/// The backend reuses its top-content query for these lists, so the score
/// may arrive as `popularity_score` and the origin as `source`/`source_site`.
#[derive(Debug, Clone, Deserialize)]
pub struct HotTrendItem {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_site: Option<String>,
    #[serde(default, alias = "popularity_score")]
    pub hot_score: f64,
}

impl HotTrendItem {
    /// Where the item was seen: platform first, then source, then source site.
    pub fn origin(&self) -> &str {
        self.platform
            .as_deref()
            .or(self.source.as_deref())
            .or(self.source_site.as_deref())
            .unwrap_or("")
    }

    pub fn heat_tier(&self) -> HeatTier {
        HeatTier::from_score(self.hot_score)
    }
}

/// 0..=3 bucket derived from a hot-trend score, 25 points per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeatTier(u8);

impl HeatTier {
    pub const MAX: u8 = 3;

    pub fn from_score(score: f64) -> Self {
        // NaN and negatives land in the coolest tier
        if score.is_nan() || score <= 0.0 {
            return HeatTier(0);
        }
        let tier = (score / 25.0).floor().min(Self::MAX as f64);
        HeatTier(tier as u8)
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}
