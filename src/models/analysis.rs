use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lines shown per section of an analysis card.
pub const CARD_PREVIEW_LINES: usize = 2;

/// One AI analysis run as returned by `/api/analysis/recent`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub analysis_date: String,
    /// Fraction in 0..1.
    #[serde(default)]
    pub confidence_score: f64,
    #[serde(default, deserialize_with = "string_list")]
    pub trend_summary: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub prediction_result: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AnalysisRecord {
    pub fn is_overall(&self) -> bool {
        self.content_type == "overall"
    }

    pub fn heading(&self) -> String {
        if self.is_overall() {
            t!("analysis.overall").to_string()
        } else {
            t!("analysis.prediction").to_string()
        }
    }

    /// Confidence as a percentage with one decimal, e.g. `87.3%`.
    pub fn confidence_display(&self) -> String {
        format!("{:.1}%", self.confidence_score * 100.0)
    }

    pub fn trend_preview(&self) -> &[String] {
        preview(&self.trend_summary)
    }

    pub fn prediction_preview(&self) -> &[String] {
        preview(&self.prediction_result)
    }
}

fn preview(lines: &[String]) -> &[String] {
    &lines[..lines.len().min(CARD_PREVIEW_LINES)]
}

/// Accept a JSON array of anything and stringify its elements.
/// Non-array values (objects, bare strings, null) yield an empty list.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AnalysisRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn heading_depends_on_overall_marker() {
        rust_i18n::set_locale("en");
        let overall = parse(r#"{"content_type":"overall"}"#);
        let other = parse(r#"{"content_type":"drama"}"#);
        assert_eq!(overall.heading(), "Overall analysis");
        assert_eq!(other.heading(), "Prediction analysis");
    }

    #[test]
    fn confidence_rendered_with_one_decimal() {
        let r = parse(r#"{"confidence_score":0.8734}"#);
        assert_eq!(r.confidence_display(), "87.3%");
        let r = parse(r#"{"confidence_score":1}"#);
        assert_eq!(r.confidence_display(), "100.0%");
    }

    #[test]
    fn previews_cap_at_two_lines() {
        let r = parse(r#"{"trend_summary":["a","b","c"],"prediction_result":["x"]}"#);
        assert_eq!(r.trend_preview(), &["a".to_string(), "b".to_string()]);
        assert_eq!(r.prediction_preview(), &["x".to_string()]);
    }

    #[test]
    fn non_array_summaries_are_empty() {
        let r = parse(r#"{"trend_summary":"plain text","prediction_result":{"k":1}}"#);
        assert!(r.trend_summary.is_empty());
        assert!(r.prediction_result.is_empty());
    }

    #[test]
    fn missing_and_null_summaries_are_empty() {
        let r = parse(r#"{"trend_summary":null}"#);
        assert!(r.trend_summary.is_empty());
        assert!(r.prediction_result.is_empty());
    }

    #[test]
    fn non_string_elements_are_stringified() {
        let r = parse(r#"{"trend_summary":[1, true, "ok"]}"#);
        assert_eq!(r.trend_summary, vec!["1", "true", "ok"]);
    }
}
