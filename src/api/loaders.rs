//! View loaders: fetch and shape everything one panel needs.
//!
//! Loaders only talk to the backend and return structured results. They
//! never touch UI state; the app decides how each failure degrades.

use futures_util::future::join_all;

use super::client::DashboardClient;
use super::error::ApiError;
use crate::models::{
    AnalysisRecord, ContentItem, ContentType, DashboardStats, DistributionSnapshot, HotTrendItem,
    HotTrendStats, PendingCounts, RankedItem, RawFilter, TrendSeries,
};

/// Everything the dashboard panel shows, one result per section.
#[derive(Debug)]
pub struct DashboardBundle {
    pub stats: Result<DashboardStats, ApiError>,
    pub trends: Result<TrendSeries, ApiError>,
    pub distribution: Result<DistributionSnapshot, ApiError>,
    pub recent: Result<Vec<AnalysisRecord>, ApiError>,
}

/// Raw listing plus pending counts tallied from it.
#[derive(Debug)]
pub struct RawListing {
    pub items: Vec<ContentItem>,
    pub pending: PendingCounts,
}

#[derive(Debug)]
pub struct HotTrendsBundle {
    pub stats: Result<HotTrendStats, ApiError>,
    /// One list per hot-trend category, in `ContentType::HOT_TREND` order.
    pub lists: Vec<(ContentType, Vec<HotTrendItem>)>,
}

fn log_failure<T>(what: &str, result: &Result<T, ApiError>) {
    if let Err(e) = result {
        tracing::warn!(section = what, error = %e, "load failed");
    }
}

/// Stats, trends, distribution, and recent analyses, awaited in that order.
pub async fn load_dashboard(
    client: &DashboardClient,
    days: u32,
    recent_limit: usize,
) -> DashboardBundle {
    let stats = client.dashboard_stats().await;
    log_failure("dashboard stats", &stats);

    let trends = fetch_trends(client, days).await;
    let distribution = fetch_distribution(client).await;

    let recent = client.recent_analyses(recent_limit).await;
    log_failure("recent analyses", &recent);

    DashboardBundle {
        stats,
        trends,
        distribution,
        recent,
    }
}

pub async fn fetch_trends(client: &DashboardClient, days: u32) -> Result<TrendSeries, ApiError> {
    let trends = client.trends(days).await;
    log_failure("trends", &trends);
    trends
}

/// The distribution chart is derived from the stats endpoint.
pub async fn fetch_distribution(client: &DashboardClient) -> Result<DistributionSnapshot, ApiError> {
    let dist = client
        .dashboard_stats()
        .await
        .map(|stats| stats.distribution());
    log_failure("distribution", &dist);
    dist
}

pub async fn load_raw_data_view(
    client: &DashboardClient,
    filter: RawFilter,
) -> Result<RawListing, ApiError> {
    let items = client
        .raw_content(filter.type_code(), filter.period.code())
        .await;
    log_failure("raw content", &items);
    let items = items?;
    let pending = PendingCounts::tally(&items);
    Ok(RawListing { items, pending })
}

pub async fn load_hot_trends_view(client: &DashboardClient, limit: usize) -> HotTrendsBundle {
    let stats = client.hot_trend_stats().await;
    log_failure("hot-trend stats", &stats);
    let lists = fetch_hot_trend_lists(client, limit).await;
    HotTrendsBundle { stats, lists }
}

/// Fetch all hot-trend category lists concurrently.
///
/// Each request degrades to an empty list on its own; the result is only
/// returned once all of them have settled.
pub async fn fetch_hot_trend_lists(
    client: &DashboardClient,
    limit: usize,
) -> Vec<(ContentType, Vec<HotTrendItem>)> {
    let fetches = ContentType::HOT_TREND.iter().map(|&ct| async move {
        match client.hot_trends(ct, limit).await {
            Ok(items) => (ct, items),
            Err(e) => {
                tracing::warn!(category = ct.code(), error = %e, "hot-trend list unavailable");
                (ct, Vec::new())
            }
        }
    });
    join_all(fetches).await
}

/// Ranking for the drill-down panel of `code`.
pub async fn load_detail_view(
    client: &DashboardClient,
    code: &str,
    limit: usize,
) -> Result<Vec<RankedItem>, ApiError> {
    let ranking = client.top_content(code, limit).await;
    log_failure("ranking", &ranking);
    ranking
}
