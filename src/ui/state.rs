use std::collections::{HashMap, HashSet, VecDeque};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, NaiveDate};

use crate::api::loaders::{DashboardBundle, HotTrendsBundle, RawListing};
use crate::api::ApiError;
use crate::config::{Config, FallbackMode};
use crate::constants::*;
use crate::demo;
use crate::models::{
    content_type_name, AnalysisRecord, BackendStatus, ContentItem, ContentType, DashboardStats,
    HotTrendItem, HotTrendStats, PendingCounts, RankedItem, RawFilter, TrendSeries,
};

use super::chart::{ChartSlot, DistributionChart, TrendsChart};
use super::theme::Theme;

// ── Views ────────────────────────────────────────────────────────

/// Which panel is active. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Dashboard,
    RawData,
    HotTrends,
    /// Drill-down for a content-type code (unknown codes allowed).
    Detail(String),
}

/// The four panels a view can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewContainer {
    Dashboard,
    RawData,
    Detail,
    HotTrends,
}

impl ViewContainer {
    pub const ALL: [ViewContainer; 4] = [
        ViewContainer::Dashboard,
        ViewContainer::RawData,
        ViewContainer::Detail,
        ViewContainer::HotTrends,
    ];
}

impl View {
    /// Map a navigation target to a view. Anything that is not one of the
    /// named views is treated as a content-type code.
    pub fn from_target(target: &str) -> Self {
        match target {
            "dashboard" => View::Dashboard,
            "raw-data" => View::RawData,
            "hot-trends" => View::HotTrends,
            code => View::Detail(code.to_string()),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            View::Dashboard => "dashboard",
            View::RawData => "raw-data",
            View::HotTrends => "hot-trends",
            View::Detail(code) => code,
        }
    }

    pub fn container(&self) -> ViewContainer {
        match self {
            View::Dashboard => ViewContainer::Dashboard,
            View::RawData => ViewContainer::RawData,
            View::HotTrends => ViewContainer::HotTrends,
            View::Detail(_) => ViewContainer::Detail,
        }
    }

    /// Navigation strip entries, in key order `1`..`8`.
    pub fn nav() -> Vec<View> {
        let mut nav = vec![View::Dashboard];
        nav.extend(
            ContentType::ALL
                .iter()
                .map(|ct| View::Detail(ct.code().to_string())),
        );
        nav.push(View::RawData);
        nav.push(View::HotTrends);
        nav
    }

    pub fn nav_index(&self) -> Option<usize> {
        View::nav().iter().position(|v| v == self)
    }

    pub fn label(&self) -> String {
        match self {
            View::Dashboard => t!("nav.dashboard").to_string(),
            View::RawData => t!("nav.raw_data").to_string(),
            View::HotTrends => t!("nav.hot_trends").to_string(),
            View::Detail(code) => content_type_name(code),
        }
    }
}

/// Loader the app should run after a view switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Dashboard,
    RawData(RawFilter),
    HotTrends,
    Detail(String),
}

// ── Data feeds ───────────────────────────────────────────────────

/// Where a panel section's data came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Feed<T> {
    Pending,
    Live(T),
    /// Placeholder data shown because the fetch failed.
    Demo(T),
    /// The fetch failed and no placeholder is configured.
    Unavailable,
}

impl<T> Feed<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Feed::Live(v) | Feed::Demo(v) => Some(v),
            Feed::Pending | Feed::Unavailable => None,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Feed::Demo(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Feed::Unavailable)
    }
}

// ── Stale-response guard ─────────────────────────────────────────

/// A class of request whose responses supersede each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadKey {
    Dashboard,
    Trends,
    RawData,
    HotTrends,
    Detail,
    Models,
    BackendStatus,
}

/// Issued per dispatch; a response is applied only while its ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub key: LoadKey,
    pub generation: u64,
}

/// Generation counter per load key.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generations: HashMap<LoadKey, u64>,
}

impl RequestTracker {
    pub fn issue(&mut self, key: LoadKey) -> Ticket {
        let generation = self.generations.entry(key).or_insert(0);
        *generation += 1;
        Ticket {
            key,
            generation: *generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.generations.get(&ticket.key) == Some(&ticket.generation)
    }
}

// ── Toasts ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created: Instant,
}

// ── Actions ──────────────────────────────────────────────────────

/// Mutating backend calls triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Update,
    Analyze,
    Predict,
}

impl ActionKind {
    pub fn label(&self) -> String {
        match self {
            ActionKind::Update => t!("action.update").to_string(),
            ActionKind::Analyze => t!("action.analyze").to_string(),
            ActionKind::Predict => t!("action.predict").to_string(),
        }
    }

    /// Toast text when the backend rejects the call without a message.
    pub fn failure_fallback(&self) -> String {
        match self {
            ActionKind::Update => t!("toast.update_failed").to_string(),
            ActionKind::Analyze => t!("toast.analyze_failed").to_string(),
            ActionKind::Predict => t!("toast.predict_failed").to_string(),
        }
    }
}

// ── AppState ─────────────────────────────────────────────────────

/// Central application state. Single source of truth for the UI.
pub struct AppState {
    // ── View ──────────────────────────────────────────────────
    pub view: View,
    pub tick_count: u64,
    pub now: DateTime<Local>,
    pub api_base_url: String,

    // ── Model selection ───────────────────────────────────────
    pub selected_model: String,
    /// Server-provided model list; empty until `/api/models/list` answers.
    pub models: Vec<String>,

    // ── Dashboard ─────────────────────────────────────────────
    pub stats: Feed<DashboardStats>,
    pub trend_days: u32,
    pub trends_chart: ChartSlot<TrendsChart>,
    pub distribution_chart: ChartSlot<DistributionChart>,
    pub recent: Feed<Vec<AnalysisRecord>>,

    // ── Raw data ──────────────────────────────────────────────
    pub raw_filter: RawFilter,
    pub raw_items: Feed<Vec<ContentItem>>,
    pub pending: Feed<PendingCounts>,
    pub raw_scroll: usize,

    // ── Hot trends ────────────────────────────────────────────
    pub hot_stats: Feed<HotTrendStats>,
    pub hot_lists: Feed<Vec<(ContentType, Vec<HotTrendItem>)>>,

    // ── Detail ────────────────────────────────────────────────
    pub ranking: Feed<Vec<RankedItem>>,
    pub ranking_scroll: usize,

    // ── Requests ──────────────────────────────────────────────
    pub requests: RequestTracker,
    /// Keys with a current request still in flight.
    pub in_flight: HashSet<LoadKey>,
    /// Blocking action in progress; drives the loading overlay.
    pub busy: Option<ActionKind>,

    // ── Toasts ────────────────────────────────────────────────
    pub toasts: VecDeque<Toast>,
    pub toast_duration: Duration,

    // ── Overlays ──────────────────────────────────────────────
    pub show_help: bool,
    pub show_settings: bool,
    pub show_model_picker: bool,
    pub model_picker_selected: usize,
    pub show_backend_status: bool,
    pub backend_status: Feed<BackendStatus>,

    // ── Appearance ────────────────────────────────────────────
    pub theme: Theme,
    pub current_lang: String,
    pub fallback: FallbackMode,
}

impl AppState {
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            view: View::Dashboard,
            tick_count: 0,
            now: Local::now(),
            api_base_url: config.api_base_url.clone(),
            selected_model: config.default_model.clone(),
            models: Vec::new(),
            stats: Feed::Pending,
            trend_days: config.trend_days,
            trends_chart: ChartSlot::new("trends"),
            distribution_chart: ChartSlot::new("distribution"),
            recent: Feed::Pending,
            raw_filter: RawFilter::default(),
            raw_items: Feed::Pending,
            pending: Feed::Pending,
            raw_scroll: 0,
            hot_stats: Feed::Pending,
            hot_lists: Feed::Pending,
            ranking: Feed::Pending,
            ranking_scroll: 0,
            requests: RequestTracker::default(),
            in_flight: HashSet::new(),
            busy: None,
            toasts: VecDeque::new(),
            toast_duration: Duration::from_secs(config.toast_secs),
            show_help: false,
            show_settings: false,
            show_model_picker: false,
            model_picker_selected: 0,
            show_backend_status: false,
            backend_status: Feed::Pending,
            theme,
            current_lang: config.lang.clone(),
            fallback: config.fallback,
        }
    }

    // ── View switching ────────────────────────────────────────

    /// Activate `view` and return the loader to run. Re-entering the
    /// current view reloads it.
    pub fn switch_view(&mut self, view: View) -> LoadRequest {
        if let View::Detail(code) = &view {
            if self.view != view {
                tracing::debug!(code = %code, "entering detail view");
                self.ranking = Feed::Pending;
            }
            self.ranking_scroll = 0;
        }
        if view == View::RawData && self.view != View::RawData {
            self.raw_scroll = 0;
        }
        self.view = view;
        self.load_request()
    }

    /// Loader for the current view.
    pub fn load_request(&self) -> LoadRequest {
        match &self.view {
            View::Dashboard => LoadRequest::Dashboard,
            View::RawData => LoadRequest::RawData(self.raw_filter),
            View::HotTrends => LoadRequest::HotTrends,
            View::Detail(code) => LoadRequest::Detail(code.clone()),
        }
    }

    pub fn is_visible(&self, container: ViewContainer) -> bool {
        self.view.container() == container
    }

    /// Step through the nav strip. A detail view for a code outside the
    /// strip steps from the dashboard.
    pub fn next_view(&mut self) -> LoadRequest {
        let nav = View::nav();
        let idx = self.view.nav_index().map(|i| (i + 1) % nav.len()).unwrap_or(1);
        self.switch_view(nav[idx].clone())
    }

    pub fn prev_view(&mut self) -> LoadRequest {
        let nav = View::nav();
        let idx = self
            .view
            .nav_index()
            .map(|i| (i + nav.len() - 1) % nav.len())
            .unwrap_or(nav.len() - 1);
        self.switch_view(nav[idx].clone())
    }

    // ── Request bookkeeping ───────────────────────────────────

    /// Issue a ticket for `key`, superseding any request already in flight.
    pub fn begin_load(&mut self, key: LoadKey) -> Ticket {
        self.in_flight.insert(key);
        self.requests.issue(key)
    }

    /// Settle a response. Returns false when a newer request for the same
    /// key has been issued since, in which case the response must be dropped.
    pub fn finish_load(&mut self, ticket: &Ticket) -> bool {
        if !self.requests.is_current(ticket) {
            tracing::debug!(key = ?ticket.key, generation = ticket.generation, "discarding stale response");
            return false;
        }
        self.in_flight.remove(&ticket.key);
        true
    }

    pub fn is_loading(&self, key: LoadKey) -> bool {
        self.in_flight.contains(&key)
    }

    // ── Applying results ──────────────────────────────────────

    /// Apply a dashboard bundle. `trends_current` is false when a period
    /// change has superseded the trends fetched with it.
    pub fn apply_dashboard(&mut self, bundle: DashboardBundle, trends_current: bool) {
        match bundle.stats {
            Ok(stats) => self.stats = Feed::Live(stats),
            Err(_) => {
                self.stats = Feed::Unavailable;
                self.push_toast(ToastKind::Error, t!("toast.load_failed").to_string());
            }
        }
        if trends_current {
            self.apply_trends(bundle.trends);
        }
        match bundle.distribution {
            Ok(snapshot) => self
                .distribution_chart
                .bind(DistributionChart::new(snapshot)),
            Err(_) => self.distribution_chart.release(),
        }
        self.recent = match bundle.recent {
            Ok(records) => Feed::Live(records),
            Err(_) => Feed::Unavailable,
        };
    }

    pub fn apply_trends(&mut self, trends: Result<TrendSeries, ApiError>) {
        match trends {
            Ok(series) => self
                .trends_chart
                .bind(TrendsChart::from_series(&series, self.trend_days)),
            Err(_) => self.trends_chart.release(),
        }
    }

    pub fn apply_raw_data(&mut self, listing: Result<RawListing, ApiError>, today: NaiveDate) {
        match listing {
            Ok(listing) => {
                self.raw_items = Feed::Live(listing.items);
                self.pending = Feed::Live(listing.pending);
            }
            Err(_) => match self.fallback {
                FallbackMode::Demo => {
                    self.raw_items = Feed::Demo(demo::raw_items(&self.raw_filter, today));
                    self.pending = Feed::Demo(demo::pending_counts());
                }
                FallbackMode::Unavailable => {
                    self.raw_items = Feed::Unavailable;
                    self.pending = Feed::Unavailable;
                }
            },
        }
        self.clamp_raw_scroll();
    }

    /// Category lists always render: a failed category is an empty list.
    /// Demo lists replace them only when the whole backend looks down.
    pub fn apply_hot_trends(&mut self, bundle: HotTrendsBundle) {
        let stats_failed = bundle.stats.is_err();
        let all_empty = bundle.lists.iter().all(|(_, items)| items.is_empty());

        self.hot_stats = match (bundle.stats, self.fallback) {
            (Ok(stats), _) => Feed::Live(stats),
            (Err(_), FallbackMode::Demo) => Feed::Demo(demo::hot_trend_stats()),
            (Err(_), FallbackMode::Unavailable) => Feed::Unavailable,
        };
        self.hot_lists = if stats_failed && all_empty && self.fallback == FallbackMode::Demo {
            Feed::Demo(demo::hot_trend_lists())
        } else {
            Feed::Live(bundle.lists)
        };
    }

    pub fn apply_ranking(&mut self, ranking: Result<Vec<RankedItem>, ApiError>) {
        self.ranking = match ranking {
            Ok(items) => Feed::Live(items),
            Err(_) => Feed::Unavailable,
        };
        self.ranking_scroll = 0;
    }

    /// Replace the model list. The selection survives if the server still
    /// offers it, otherwise the first offered model is adopted.
    pub fn apply_models(&mut self, models: Result<Vec<String>, ApiError>) {
        let Ok(models) = models else {
            return;
        };
        if !models.is_empty() && !models.contains(&self.selected_model) {
            tracing::info!(
                previous = %self.selected_model,
                adopted = %models[0],
                "selected model not offered by backend"
            );
            self.selected_model = models[0].clone();
        }
        self.models = models;
    }

    pub fn apply_backend_status(&mut self, status: Result<BackendStatus, ApiError>) {
        self.backend_status = match status {
            Ok(s) => Feed::Live(s),
            Err(_) => Feed::Unavailable,
        };
    }

    // ── Model selection ───────────────────────────────────────

    /// Select a model offered by the server. Unknown identifiers are refused.
    pub fn select_model(&mut self, model: &str) -> bool {
        if !self.models.iter().any(|m| m == model) {
            return false;
        }
        self.selected_model = model.to_string();
        true
    }

    pub fn open_model_picker(&mut self) {
        self.model_picker_selected = self
            .models
            .iter()
            .position(|m| *m == self.selected_model)
            .unwrap_or(0);
        self.show_model_picker = true;
    }

    pub fn close_model_picker(&mut self) {
        self.show_model_picker = false;
    }

    pub fn model_picker_up(&mut self) {
        self.model_picker_selected = self.model_picker_selected.saturating_sub(1);
    }

    pub fn model_picker_down(&mut self) {
        if self.model_picker_selected + 1 < self.models.len() {
            self.model_picker_selected += 1;
        }
    }

    /// Select the highlighted model and close the picker.
    pub fn confirm_model_picker(&mut self) -> bool {
        let chosen = self.models.get(self.model_picker_selected).cloned();
        self.show_model_picker = false;
        match chosen {
            Some(model) => self.select_model(&model),
            None => false,
        }
    }

    // ── Dashboard period / raw filter ─────────────────────────

    /// Advance the trend window 7 → 30 → 90 → 7 and return the new value.
    pub fn cycle_trend_days(&mut self) -> u32 {
        let idx = TREND_PERIODS
            .iter()
            .position(|&d| d == self.trend_days)
            .map(|i| (i + 1) % TREND_PERIODS.len())
            .unwrap_or(0);
        self.trend_days = TREND_PERIODS[idx];
        self.trend_days
    }

    pub fn cycle_raw_type(&mut self) -> LoadRequest {
        self.raw_filter.cycle_type();
        self.raw_scroll = 0;
        self.load_request()
    }

    pub fn cycle_raw_period(&mut self) -> LoadRequest {
        self.raw_filter.cycle_period();
        self.raw_scroll = 0;
        self.load_request()
    }

    // ── Scrolling ─────────────────────────────────────────────

    fn scroll_len(&self) -> usize {
        match self.view {
            View::RawData => self.raw_items.data().map(Vec::len).unwrap_or(0),
            View::Detail(_) => self.ranking.data().map(Vec::len).unwrap_or(0),
            _ => 0,
        }
    }

    fn scroll_mut(&mut self) -> Option<&mut usize> {
        match self.view {
            View::RawData => Some(&mut self.raw_scroll),
            View::Detail(_) => Some(&mut self.ranking_scroll),
            _ => None,
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.scroll_len().saturating_sub(1);
        if let Some(pos) = self.scroll_mut() {
            *pos = pos.saturating_add_signed(delta).min(max);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_by(-1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_by(1);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(PAGE_SIZE as isize));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(PAGE_SIZE as isize);
    }

    fn clamp_raw_scroll(&mut self) {
        let len = self.raw_items.data().map(Vec::len).unwrap_or(0);
        self.raw_scroll = self.raw_scroll.min(len.saturating_sub(1));
    }

    // ── Toasts ────────────────────────────────────────────────

    pub fn push_toast(&mut self, kind: ToastKind, message: String) {
        self.toasts.push_back(Toast {
            kind,
            message,
            created: Instant::now(),
        });
        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drop toasts older than the configured duration.
    pub fn expire_toasts(&mut self, now: Instant) {
        let ttl = self.toast_duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created) < ttl);
    }

    // ── Appearance ────────────────────────────────────────────

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next_builtin();
    }

    /// Cycle to the next UI language.
    pub fn cycle_lang(&mut self) {
        let current_idx = LANGUAGES
            .iter()
            .position(|&l| l == self.current_lang)
            .unwrap_or(0);
        let next_lang = LANGUAGES[(current_idx + 1) % LANGUAGES.len()];
        rust_i18n::set_locale(next_lang);
        self.current_lang = next_lang.to_string();
    }

    /// Any modal overlay that captures keys.
    pub fn has_modal(&self) -> bool {
        self.show_help || self.show_settings || self.show_model_picker || self.show_backend_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;

    fn make_state() -> AppState {
        rust_i18n::set_locale("en");
        AppState::new(&Config::default(), Theme::default())
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn visible(s: &AppState) -> Vec<ViewContainer> {
        ViewContainer::ALL
            .iter()
            .copied()
            .filter(|c| s.is_visible(*c))
            .collect()
    }

    // ── View ──────────────────────────────────────────────────────

    #[test]
    fn from_target_named_views() {
        assert_eq!(View::from_target("dashboard"), View::Dashboard);
        assert_eq!(View::from_target("raw-data"), View::RawData);
        assert_eq!(View::from_target("hot-trends"), View::HotTrends);
    }

    #[test]
    fn from_target_other_is_detail() {
        assert_eq!(View::from_target("novel"), View::Detail("novel".into()));
        assert_eq!(View::from_target("podcast"), View::Detail("podcast".into()));
        assert_eq!(View::from_target("podcast").container(), ViewContainer::Detail);
    }

    #[test]
    fn target_round_trips() {
        for view in View::nav() {
            assert_eq!(View::from_target(view.target()), view);
        }
    }

    #[test]
    fn nav_has_eight_entries() {
        let nav = View::nav();
        assert_eq!(nav.len(), 8);
        assert_eq!(nav[0], View::Dashboard);
        assert_eq!(nav[1], View::Detail("novel".into()));
        assert_eq!(nav[6], View::RawData);
        assert_eq!(nav[7], View::HotTrends);
    }

    #[test]
    fn detail_label_passes_unknown_code_through() {
        rust_i18n::set_locale("en");
        assert_eq!(View::Detail("drama".into()).label(), "Short Drama");
        assert_eq!(View::Detail("podcast".into()).label(), "podcast");
    }

    // ── switch_view ───────────────────────────────────────────────

    #[test]
    fn initial_view_is_dashboard() {
        let s = make_state();
        assert_eq!(s.view, View::Dashboard);
        assert_eq!(visible(&s), vec![ViewContainer::Dashboard]);
    }

    #[test]
    fn exactly_one_container_visible_after_every_transition() {
        let mut s = make_state();
        let mut targets: Vec<View> = View::nav();
        targets.push(View::from_target("podcast"));
        targets.push(View::Dashboard);
        targets.push(View::Dashboard);

        for from in &targets {
            for to in &targets {
                s.switch_view(from.clone());
                s.switch_view(to.clone());
                let shown = visible(&s);
                assert_eq!(shown.len(), 1, "{:?} -> {:?}", from, to);
                assert_eq!(shown[0], to.container());
            }
        }
    }

    #[test]
    fn switch_view_returns_matching_loader() {
        let mut s = make_state();
        assert_eq!(s.switch_view(View::RawData), LoadRequest::RawData(RawFilter::default()));
        assert_eq!(s.switch_view(View::HotTrends), LoadRequest::HotTrends);
        assert_eq!(
            s.switch_view(View::from_target("comic")),
            LoadRequest::Detail("comic".into())
        );
        assert_eq!(s.switch_view(View::Dashboard), LoadRequest::Dashboard);
    }

    #[test]
    fn reentering_current_view_reloads() {
        let mut s = make_state();
        s.switch_view(View::HotTrends);
        assert_eq!(s.switch_view(View::HotTrends), LoadRequest::HotTrends);
    }

    #[test]
    fn entering_other_detail_clears_ranking() {
        let mut s = make_state();
        s.switch_view(View::from_target("novel"));
        s.apply_ranking(Ok(Vec::new()));
        s.switch_view(View::from_target("novel"));
        assert!(matches!(s.ranking, Feed::Live(_)));
        s.switch_view(View::from_target("news"));
        assert!(matches!(s.ranking, Feed::Pending));
    }

    #[test]
    fn next_and_prev_view_wrap() {
        let mut s = make_state();
        s.prev_view();
        assert_eq!(s.view, View::HotTrends);
        s.next_view();
        assert_eq!(s.view, View::Dashboard);
        s.next_view();
        assert_eq!(s.view, View::Detail("novel".into()));
    }

    // ── RequestTracker ────────────────────────────────────────────

    #[test]
    fn tracker_latest_ticket_is_current() {
        let mut t = RequestTracker::default();
        let first = t.issue(LoadKey::RawData);
        assert!(t.is_current(&first));
        let second = t.issue(LoadKey::RawData);
        assert!(!t.is_current(&first));
        assert!(t.is_current(&second));
    }

    #[test]
    fn tracker_keys_are_independent() {
        let mut t = RequestTracker::default();
        let raw = t.issue(LoadKey::RawData);
        t.issue(LoadKey::Detail);
        assert!(t.is_current(&raw));
    }

    #[test]
    fn stale_response_is_discarded_and_keeps_loading() {
        let mut s = make_state();
        let old = s.begin_load(LoadKey::RawData);
        let new = s.begin_load(LoadKey::RawData);

        assert!(!s.finish_load(&old));
        assert!(s.is_loading(LoadKey::RawData));

        assert!(s.finish_load(&new));
        assert!(!s.is_loading(LoadKey::RawData));
    }

    // ── Applying results ──────────────────────────────────────────

    #[test]
    fn dashboard_stats_failure_toasts_and_marks_unavailable() {
        let mut s = make_state();
        s.apply_dashboard(DashboardBundle {
            stats: Err(ApiError::MissingData),
            trends: Ok(TrendSeries::default()),
            distribution: Err(ApiError::MissingData),
            recent: Ok(Vec::new()),
        }, true);
        assert!(s.stats.is_unavailable());
        assert_eq!(s.toasts.len(), 1);
        assert_eq!(s.toasts[0].kind, ToastKind::Error);
        assert!(s.trends_chart.is_bound());
        assert!(!s.distribution_chart.is_bound());
        assert!(matches!(s.recent, Feed::Live(ref r) if r.is_empty()));
    }

    #[test]
    fn reloading_dashboard_rebinds_charts_once() {
        let mut s = make_state();
        for _ in 0..2 {
            s.apply_dashboard(DashboardBundle {
                stats: Ok(DashboardStats::default()),
                trends: Ok(TrendSeries::default()),
                distribution: Ok(DashboardStats::default().distribution()),
                recent: Ok(Vec::new()),
            }, true);
        }
        assert_eq!(s.trends_chart.bound_count(), 2);
        assert_eq!(s.trends_chart.released_count(), 1);
        assert_eq!(s.distribution_chart.released_count(), 1);
    }

    #[test]
    fn trends_failure_releases_chart() {
        let mut s = make_state();
        s.apply_trends(Ok(TrendSeries::default()));
        s.apply_trends(Err(ApiError::MissingData));
        assert!(!s.trends_chart.is_bound());
    }

    #[test]
    fn raw_failure_uses_demo_fallback() {
        let mut s = make_state();
        s.raw_filter.content_type = Some(ContentType::Drama);
        s.apply_raw_data(Err(ApiError::MissingData), day());
        assert!(s.raw_items.is_demo());
        let items = s.raw_items.data().unwrap();
        assert!(items.iter().all(|i| i.content_type == "drama"));
        assert_eq!(s.pending.data().unwrap().get(ContentType::News), 35);
    }

    #[test]
    fn raw_failure_unavailable_mode() {
        let mut s = make_state();
        s.fallback = FallbackMode::Unavailable;
        s.apply_raw_data(Err(ApiError::MissingData), day());
        assert!(s.raw_items.is_unavailable());
        assert!(s.pending.is_unavailable());
    }

    #[test]
    fn raw_success_is_live() {
        let mut s = make_state();
        s.apply_raw_data(
            Ok(RawListing {
                items: Vec::new(),
                pending: PendingCounts::default(),
            }),
            day(),
        );
        assert_eq!(s.raw_items.data().map(Vec::len), Some(0));
        assert!(!s.raw_items.is_demo());
    }

    #[test]
    fn hot_partial_failure_keeps_live_lists() {
        let mut s = make_state();
        let mut lists: Vec<(ContentType, Vec<HotTrendItem>)> = ContentType::HOT_TREND
            .iter()
            .map(|&ct| (ct, Vec::new()))
            .collect();
        lists[0].1 = demo::hot_trend_lists().remove(0).1;
        s.apply_hot_trends(HotTrendsBundle {
            stats: Err(ApiError::MissingData),
            lists,
        });
        assert!(s.hot_stats.is_demo());
        let lists = s.hot_lists.data().unwrap();
        assert!(!s.hot_lists.is_demo());
        assert_eq!(lists[0].1.len(), 3);
        assert!(lists[1].1.is_empty());
    }

    #[test]
    fn hot_total_failure_shows_demo_lists() {
        let mut s = make_state();
        s.apply_hot_trends(HotTrendsBundle {
            stats: Err(ApiError::MissingData),
            lists: ContentType::HOT_TREND.iter().map(|&ct| (ct, Vec::new())).collect(),
        });
        assert!(s.hot_lists.is_demo());
    }

    #[test]
    fn ranking_failure_is_unavailable() {
        let mut s = make_state();
        s.apply_ranking(Err(ApiError::MissingData));
        assert!(s.ranking.is_unavailable());
    }

    // ── Models ────────────────────────────────────────────────────

    #[test]
    fn models_keep_selection_when_offered() {
        let mut s = make_state();
        s.apply_models(Ok(vec!["qwen2".into(), "llama2".into()]));
        assert_eq!(s.selected_model, "llama2");
    }

    #[test]
    fn models_adopt_first_when_selection_missing() {
        let mut s = make_state();
        s.apply_models(Ok(vec!["qwen2".into(), "mistral".into()]));
        assert_eq!(s.selected_model, "qwen2");
    }

    #[test]
    fn models_failure_keeps_default() {
        let mut s = make_state();
        s.apply_models(Err(ApiError::MissingData));
        assert_eq!(s.selected_model, DEFAULT_MODEL);
        assert!(s.models.is_empty());
    }

    #[test]
    fn select_model_rejects_unknown() {
        let mut s = make_state();
        s.apply_models(Ok(vec!["llama2".into(), "qwen2".into()]));
        assert!(!s.select_model("gpt-x"));
        assert_eq!(s.selected_model, "llama2");
        assert!(s.select_model("qwen2"));
        assert_eq!(s.selected_model, "qwen2");
    }

    #[test]
    fn model_picker_navigation() {
        let mut s = make_state();
        s.apply_models(Ok(vec!["a".into(), "llama2".into(), "c".into()]));
        s.open_model_picker();
        assert_eq!(s.model_picker_selected, 1);
        s.model_picker_down();
        s.model_picker_down();
        assert_eq!(s.model_picker_selected, 2);
        assert!(s.confirm_model_picker());
        assert_eq!(s.selected_model, "c");
        assert!(!s.show_model_picker);
    }

    #[test]
    fn model_picker_empty_list_confirms_nothing() {
        let mut s = make_state();
        s.open_model_picker();
        s.model_picker_up();
        assert!(!s.confirm_model_picker());
        assert_eq!(s.selected_model, DEFAULT_MODEL);
    }

    // ── Period / filter ───────────────────────────────────────────

    #[test]
    fn trend_days_cycle() {
        let mut s = make_state();
        assert_eq!(s.trend_days, 7);
        assert_eq!(s.cycle_trend_days(), 30);
        assert_eq!(s.cycle_trend_days(), 90);
        assert_eq!(s.cycle_trend_days(), 7);
    }

    #[test]
    fn raw_filter_changes_request_reload() {
        let mut s = make_state();
        s.switch_view(View::RawData);
        let req = s.cycle_raw_period();
        assert_eq!(
            req,
            LoadRequest::RawData(RawFilter {
                content_type: None,
                period: Period::Week,
            })
        );
    }

    // ── Scrolling ─────────────────────────────────────────────────

    #[test]
    fn raw_scroll_clamped_to_rows() {
        let mut s = make_state();
        s.switch_view(View::RawData);
        s.apply_raw_data(Err(ApiError::MissingData), day());
        s.page_down();
        s.page_down();
        s.page_down();
        assert_eq!(s.raw_scroll, 19);
        s.scroll_up();
        assert_eq!(s.raw_scroll, 18);
        s.page_up();
        s.page_up();
        assert_eq!(s.raw_scroll, 0);
    }

    #[test]
    fn scroll_on_dashboard_is_noop() {
        let mut s = make_state();
        s.scroll_down();
        assert_eq!(s.raw_scroll, 0);
        assert_eq!(s.ranking_scroll, 0);
    }

    // ── Toasts ────────────────────────────────────────────────────

    #[test]
    fn toasts_capped() {
        let mut s = make_state();
        for i in 0..10 {
            s.push_toast(ToastKind::Info, format!("t{}", i));
        }
        assert_eq!(s.toasts.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(s.toasts.back().unwrap().message, "t9");
    }

    #[test]
    fn toasts_expire_after_duration() {
        let mut s = make_state();
        s.push_toast(ToastKind::Success, "done".into());
        let created = s.toasts[0].created;
        s.expire_toasts(created + Duration::from_secs(2));
        assert_eq!(s.toasts.len(), 1);
        s.expire_toasts(created + Duration::from_secs(3));
        assert!(s.toasts.is_empty());
    }

    // ── Appearance ────────────────────────────────────────────────

    #[test]
    fn cycle_theme_changes() {
        let mut s = make_state();
        let initial = s.theme.name.clone();
        s.cycle_theme();
        assert_ne!(s.theme.name, initial);
    }

    #[test]
    fn has_modal_tracks_overlays() {
        let mut s = make_state();
        assert!(!s.has_modal());
        s.show_settings = true;
        assert!(s.has_modal());
    }
}
