//! Placeholder data shown when the backend is unreachable and
//! `fallback = "demo"` is configured.
//!
//! Everything here is deterministic so the demo screen looks the same on
//! every run and tests can pin exact values.

use chrono::NaiveDate;

use crate::models::{
    content_type_name, ContentItem, ContentStatus, ContentType, HotTrendItem, HotTrendStats,
    PendingCounts, RawFilter,
};

const DEMO_ROWS: u64 = 20;
const DEMO_CATEGORIES: [&str; 5] = ["玄幻", "都市", "古装", "悬疑", "恋爱"];

fn sites(ct: ContentType) -> [&'static str; 2] {
    match ct {
        ContentType::Novel => ["起点中文网", "晋江文学城"],
        ContentType::Drama => ["优酷", "爱奇艺"],
        ContentType::Comic => ["哔哩哔哩", "快看漫画"],
        ContentType::News => ["新浪新闻", "网易新闻"],
        ContentType::Entertainment => ["微博", "豆瓣"],
    }
}

/// Twenty sample rows crawled on `today`, narrowed by the type filter.
pub fn raw_items(filter: &RawFilter, today: NaiveDate) -> Vec<ContentItem> {
    let crawl_date = today.format("%Y-%m-%d").to_string();
    (1..=DEMO_ROWS)
        .filter_map(|i| {
            let ct = ContentType::ALL[(i * 3 % 5) as usize];
            if filter.content_type.is_some_and(|want| want != ct) {
                return None;
            }
            let status = match i % 3 {
                0 => ContentStatus::Analyzed,
                1 => ContentStatus::Pending,
                _ => ContentStatus::Analyzing,
            };
            Some(ContentItem {
                id: Some(i),
                title: t!(
                    "demo.raw_title",
                    kind = content_type_name(ct.code()),
                    n = i
                )
                .to_string(),
                content_type: ct.code().to_string(),
                category: Some(DEMO_CATEGORIES[(i * 7 % 5) as usize].to_string()),
                popularity_score: ((i * 37 + 11) % 100) as f64,
                source_site: sites(ct)[(i % 2) as usize].to_string(),
                crawl_date: crawl_date.clone(),
                status,
            })
        })
        .collect()
}

/// Fixed pending-analysis counts per category.
pub fn pending_counts() -> PendingCounts {
    PendingCounts::from_pairs(&[
        (ContentType::Novel, 25),
        (ContentType::Drama, 18),
        (ContentType::Comic, 12),
        (ContentType::News, 35),
        (ContentType::Entertainment, 42),
    ])
}

pub fn hot_trend_stats() -> HotTrendStats {
    HotTrendStats {
        drama_count: 12,
        comic_count: 25,
        news_count: 8,
        entertainment_count: 32,
    }
}

fn hot(title: &str, category: &str, platform: &str, hot_score: f64) -> HotTrendItem {
    HotTrendItem {
        title: title.to_string(),
        category: Some(category.to_string()),
        platform: Some(platform.to_string()),
        source: None,
        source_site: None,
        hot_score,
    }
}

/// Three sample items per hot-trend category, in `ContentType::HOT_TREND` order.
pub fn hot_trend_lists() -> Vec<(ContentType, Vec<HotTrendItem>)> {
    ContentType::HOT_TREND
        .iter()
        .map(|&ct| {
            let items = match ct {
                ContentType::Drama => vec![
                    hot("爆款短剧·都市爱情故事", "都市", "爱奇艺", 94.5),
                    hot("古装悬疑·宫斗秘闻", "古装", "腾讯视频", 92.3),
                    hot("科幻冒险·未来世界", "科幻", "优酷", 89.7),
                ],
                ContentType::Comic => vec![
                    hot("恋爱日常·青春物语", "恋爱", "快看漫画", 96.2),
                    hot("校园搞笑·欢乐时光", "搞笑", "哔哩哔哩", 93.8),
                    hot("奇幻冒险·异世界", "奇幻", "腾讯动漫", 91.5),
                ],
                ContentType::News => vec![
                    hot("科技前沿·AI技术突破", "科技", "新浪新闻", 98.1),
                    hot("财经观察·股市动态", "财经", "网易新闻", 95.3),
                    hot("社会热点·民生关注", "社会", "搜狐新闻", 92.7),
                ],
                ContentType::Entertainment => vec![
                    hot("明星八卦·恋情曝光", "明星", "微博", 99.5),
                    hot("综艺热议·节目争议", "综艺", "豆瓣", 97.8),
                    hot("音乐榜单·新歌发布", "音乐", "网易云音乐", 96.4),
                ],
                ContentType::Novel => Vec::new(),
            };
            (ct, items)
        })
        .collect()
}
