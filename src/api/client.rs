use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;
use crate::models::{
    AnalysisRecord, BackendStatus, ContentItem, ContentType, DashboardStats, HotTrendItem,
    HotTrendStats, RankedItem, TrendSeries,
};

/// The backend's response wrapper: `{success, data?, error?, processed_count?, message?}`.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    processed_count: Option<u64>,
    #[serde(default)]
    message: Option<String>,
}

/// Outcome of a POST action the backend accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionAck {
    pub processed_count: Option<u64>,
    pub message: Option<String>,
}

/// Async client for the trend-analysis REST API.
///
/// Every method decodes the envelope and maps `success: false` to
/// [`ApiError::Rejected`]. No retries; callers decide how to degrade.
#[derive(Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ── Transport ────────────────────────────────────────────────

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Envelope, ApiError> {
        tracing::debug!(path, ?query, "GET");
        let resp = self.client.get(self.url(path)).query(query).send().await?;
        Self::read_envelope(path, resp).await
    }

    async fn post(&self, path: &str, model: &str) -> Result<Envelope, ApiError> {
        tracing::debug!(path, model, "POST");
        let resp = self
            .client
            .post(self.url(path))
            .json(&serde_json::json!({ "model": model }))
            .send()
            .await?;
        Self::read_envelope(path, resp).await
    }

    /// Decode a response into an accepted envelope.
    ///
    /// The backend answers failures with HTTP 500 *and* a JSON envelope, so
    /// the body is parsed before the status code is consulted.
    async fn read_envelope(path: &str, resp: reqwest::Response) -> Result<Envelope, ApiError> {
        let status = resp.status();
        let body = resp.text().await?;

        let envelope: Envelope = match serde_json::from_str(&body) {
            Ok(env) => env,
            Err(e) if status.is_success() => return Err(ApiError::Decode(e)),
            Err(_) => {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        };

        if !envelope.success {
            let msg = envelope.error.clone().unwrap_or_default();
            tracing::debug!(path, status = status.as_u16(), error = %msg, "rejected");
            return Err(ApiError::Rejected(msg));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(envelope)
    }

    fn take_data<T: DeserializeOwned>(envelope: Envelope) -> Result<T, ApiError> {
        match envelope.data {
            Some(Value::Null) | None => Err(ApiError::MissingData),
            Some(data) => Ok(serde_json::from_value(data)?),
        }
    }

    fn ack(envelope: Envelope) -> ActionAck {
        ActionAck {
            processed_count: envelope.processed_count,
            message: envelope.message,
        }
    }

    // ── GET endpoints ────────────────────────────────────────────

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        Self::take_data(self.get("/api/dashboard/stats", &[]).await?)
    }

    pub async fn trends(&self, days: u32) -> Result<TrendSeries, ApiError> {
        Self::take_data(
            self.get("/api/charts/trends", &[("days", days.to_string())])
                .await?,
        )
    }

    pub async fn recent_analyses(&self, limit: usize) -> Result<Vec<AnalysisRecord>, ApiError> {
        Self::take_data(
            self.get("/api/analysis/recent", &[("limit", limit.to_string())])
                .await?,
        )
    }

    pub async fn models(&self) -> Result<Vec<String>, ApiError> {
        Self::take_data(self.get("/api/models/list", &[]).await?)
    }

    pub async fn top_content(&self, code: &str, limit: usize) -> Result<Vec<RankedItem>, ApiError> {
        let path = format!("/api/content/top/{}", code);
        Self::take_data(self.get(&path, &[("limit", limit.to_string())]).await?)
    }

    pub async fn raw_content(
        &self,
        type_code: &str,
        period_code: &str,
    ) -> Result<Vec<ContentItem>, ApiError> {
        Self::take_data(
            self.get(
                "/api/content/raw",
                &[
                    ("type", type_code.to_string()),
                    ("period", period_code.to_string()),
                ],
            )
            .await?,
        )
    }

    pub async fn hot_trend_stats(&self) -> Result<HotTrendStats, ApiError> {
        Self::take_data(self.get("/api/hot-trends/stats", &[]).await?)
    }

    pub async fn hot_trends(
        &self,
        ct: ContentType,
        limit: usize,
    ) -> Result<Vec<HotTrendItem>, ApiError> {
        let path = format!("/api/hot-trends/{}", ct.code());
        Self::take_data(self.get(&path, &[("limit", limit.to_string())]).await?)
    }

    pub async fn system_status(&self) -> Result<BackendStatus, ApiError> {
        Self::take_data(self.get("/api/system/status", &[]).await?)
    }

    // ── POST actions ─────────────────────────────────────────────

    pub async fn trigger_update(&self, model: &str) -> Result<ActionAck, ApiError> {
        Ok(Self::ack(self.post("/api/crawler/update", model).await?))
    }

    pub async fn process_pending(&self, model: &str) -> Result<ActionAck, ApiError> {
        Ok(Self::ack(
            self.post("/api/analysis/process-pending", model).await?,
        ))
    }

    pub async fn run_prediction(&self, model: &str) -> Result<ActionAck, ApiError> {
        Ok(Self::ack(self.post("/api/analysis/predict", model).await?))
    }
}
