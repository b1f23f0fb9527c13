//! Application struct and event loop.
//!
//! Owns the terminal, state, backend client, and the load channel.
//! Loaders run on spawned tasks and report back as [`LoadEvent`]s that
//! the loop drains once per frame.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::api::loaders::{self, DashboardBundle, HotTrendsBundle, RawListing};
use crate::api::{ActionAck, ApiError, DashboardClient};
use crate::config::Config;
use crate::constants::*;
use crate::models::{BackendStatus, RankedItem, RawFilter, TrendSeries};
use crate::report;
use crate::ui::{self, ActionKind, AppState, LoadKey, LoadRequest, Ticket, ToastKind, View};

/// Results posted back to the UI loop by spawned tasks.
#[derive(Debug)]
pub enum LoadEvent {
    Dashboard {
        ticket: Ticket,
        /// Trends ride along with the dashboard but a period change can
        /// supersede them independently.
        trends_ticket: Ticket,
        bundle: DashboardBundle,
    },
    Trends {
        ticket: Ticket,
        result: Result<TrendSeries, ApiError>,
    },
    RawData {
        ticket: Ticket,
        result: Result<RawListing, ApiError>,
        announce: bool,
    },
    HotTrends {
        ticket: Ticket,
        bundle: HotTrendsBundle,
        announce: bool,
    },
    Detail {
        ticket: Ticket,
        result: Result<Vec<RankedItem>, ApiError>,
    },
    Models {
        ticket: Ticket,
        result: Result<Vec<String>, ApiError>,
    },
    BackendStatus {
        ticket: Ticket,
        result: Result<BackendStatus, ApiError>,
    },
    Action {
        kind: ActionKind,
        result: Result<ActionAck, ApiError>,
    },
    /// The post-update delay elapsed.
    RefreshDue,
    Exported(Result<PathBuf>),
}

/// Main application struct.
pub struct App {
    state: AppState,
    client: DashboardClient,
    config: Config,

    // Channel
    load_tx: mpsc::UnboundedSender<LoadEvent>,
    load_rx: mpsc::UnboundedReceiver<LoadEvent>,

    // Local loop state
    last_clock: Instant,
}

impl App {
    pub fn new(config: Config, theme: ui::Theme) -> Self {
        let client = DashboardClient::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        );
        let state = AppState::new(&config, theme);
        let (load_tx, load_rx) = mpsc::unbounded_channel::<LoadEvent>();

        Self {
            state,
            client,
            config,
            load_tx,
            load_rx,
            last_clock: Instant::now(),
        }
    }

    /// Run the main event loop. Returns when the user quits.
    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        tracing::info!(api = %self.config.api_base_url, "dashboard started");

        // Initial data
        self.dispatch_models();
        self.dispatch(LoadRequest::Dashboard);

        // Main loop
        let result = self.event_loop(&mut terminal);

        // Cleanup
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        tracing::info!("dashboard stopped");
        println!("\n{}\n", t!("app.stopped"));
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            self.drain_load_events();

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        return Ok(()); // quit requested
                    }
                }
            }

            self.tick();
        }
    }

    fn tick(&mut self) {
        self.state.tick_count = self.state.tick_count.wrapping_add(1);
        if self.last_clock.elapsed() >= Duration::from_millis(CLOCK_TICK_MS) {
            self.last_clock = Instant::now();
            self.state.now = Local::now();
        }
        self.state.expire_toasts(Instant::now());
    }

    // ── Channel draining ─────────────────────────────────────────

    fn drain_load_events(&mut self) {
        while let Ok(event) = self.load_rx.try_recv() {
            self.handle_load_event(event);
        }
    }

    fn handle_load_event(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Dashboard {
                ticket,
                trends_ticket,
                bundle,
            } => {
                if !self.state.finish_load(&ticket) {
                    return;
                }
                let trends_current = self.state.finish_load(&trends_ticket);
                self.state.apply_dashboard(bundle, trends_current);
            }
            LoadEvent::Trends { ticket, result } => {
                if self.state.finish_load(&ticket) {
                    self.state.apply_trends(result);
                }
            }
            LoadEvent::RawData {
                ticket,
                result,
                announce,
            } => {
                if !self.state.finish_load(&ticket) {
                    return;
                }
                self.state.apply_raw_data(result, Local::now().date_naive());
                if announce {
                    self.state
                        .push_toast(ToastKind::Success, t!("toast.raw_refreshed").to_string());
                }
            }
            LoadEvent::HotTrends {
                ticket,
                bundle,
                announce,
            } => {
                if !self.state.finish_load(&ticket) {
                    return;
                }
                self.state.apply_hot_trends(bundle);
                if announce {
                    self.state
                        .push_toast(ToastKind::Success, t!("toast.hot_refreshed").to_string());
                }
            }
            LoadEvent::Detail { ticket, result } => {
                if self.state.finish_load(&ticket) {
                    self.state.apply_ranking(result);
                }
            }
            LoadEvent::Models { ticket, result } => {
                if self.state.finish_load(&ticket) {
                    self.state.apply_models(result);
                }
            }
            LoadEvent::BackendStatus { ticket, result } => {
                if self.state.finish_load(&ticket) {
                    self.state.apply_backend_status(result);
                }
            }
            LoadEvent::Action { kind, result } => self.finish_action(kind, result),
            LoadEvent::RefreshDue => {
                // The user may have navigated away during the delay
                if self.state.view == View::Dashboard {
                    self.dispatch(LoadRequest::Dashboard);
                } else {
                    tracing::debug!("skipping delayed dashboard refresh, view changed");
                }
            }
            LoadEvent::Exported(result) => match result {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "report exported");
                    self.state.push_toast(
                        ToastKind::Success,
                        t!("toast.report_saved", path = path.display().to_string()).to_string(),
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %format!("{:#}", e), "report export failed");
                    self.state.push_toast(
                        ToastKind::Error,
                        t!("toast.export_failed", error = format!("{:#}", e)).to_string(),
                    );
                }
            },
        }
    }

    // ── Dispatching ──────────────────────────────────────────────

    fn dispatch(&mut self, request: LoadRequest) {
        match request {
            LoadRequest::Dashboard => self.dispatch_dashboard(),
            LoadRequest::RawData(filter) => self.dispatch_raw_data(filter, false),
            LoadRequest::HotTrends => self.dispatch_hot_trends(false),
            LoadRequest::Detail(code) => self.dispatch_detail(code),
        }
    }

    fn dispatch_dashboard(&mut self) {
        let ticket = self.state.begin_load(LoadKey::Dashboard);
        let trends_ticket = self.state.begin_load(LoadKey::Trends);
        let client = self.client.clone();
        let tx = self.load_tx.clone();
        let days = self.state.trend_days;
        let recent_limit = self.config.recent_limit;

        tokio::spawn(async move {
            let bundle = loaders::load_dashboard(&client, days, recent_limit).await;
            let _ = tx.send(LoadEvent::Dashboard {
                ticket,
                trends_ticket,
                bundle,
            });
        });
    }

    fn dispatch_trends(&mut self) {
        let ticket = self.state.begin_load(LoadKey::Trends);
        let client = self.client.clone();
        let tx = self.load_tx.clone();
        let days = self.state.trend_days;

        tokio::spawn(async move {
            let result = loaders::fetch_trends(&client, days).await;
            let _ = tx.send(LoadEvent::Trends { ticket, result });
        });
    }

    fn dispatch_raw_data(&mut self, filter: RawFilter, announce: bool) {
        let ticket = self.state.begin_load(LoadKey::RawData);
        let client = self.client.clone();
        let tx = self.load_tx.clone();

        tokio::spawn(async move {
            let result = loaders::load_raw_data_view(&client, filter).await;
            let _ = tx.send(LoadEvent::RawData {
                ticket,
                result,
                announce,
            });
        });
    }

    fn dispatch_hot_trends(&mut self, announce: bool) {
        let ticket = self.state.begin_load(LoadKey::HotTrends);
        let client = self.client.clone();
        let tx = self.load_tx.clone();
        let limit = self.config.hot_trend_limit;

        tokio::spawn(async move {
            let bundle = loaders::load_hot_trends_view(&client, limit).await;
            let _ = tx.send(LoadEvent::HotTrends {
                ticket,
                bundle,
                announce,
            });
        });
    }

    fn dispatch_detail(&mut self, code: String) {
        let ticket = self.state.begin_load(LoadKey::Detail);
        let client = self.client.clone();
        let tx = self.load_tx.clone();
        let limit = self.config.ranking_limit;

        tokio::spawn(async move {
            let result = loaders::load_detail_view(&client, &code, limit).await;
            let _ = tx.send(LoadEvent::Detail { ticket, result });
        });
    }

    fn dispatch_models(&mut self) {
        let ticket = self.state.begin_load(LoadKey::Models);
        let client = self.client.clone();
        let tx = self.load_tx.clone();

        tokio::spawn(async move {
            let result = client.models().await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "model list unavailable");
            }
            let _ = tx.send(LoadEvent::Models { ticket, result });
        });
    }

    fn dispatch_backend_status(&mut self) {
        let ticket = self.state.begin_load(LoadKey::BackendStatus);
        let client = self.client.clone();
        let tx = self.load_tx.clone();

        tokio::spawn(async move {
            let result = client.system_status().await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "backend status unavailable");
            }
            let _ = tx.send(LoadEvent::BackendStatus { ticket, result });
        });
    }

    // ── Actions ──────────────────────────────────────────────────

    /// Start a blocking backend action. Ignored while another one runs.
    fn start_action(&mut self, kind: ActionKind) {
        if let Some(running) = self.state.busy {
            tracing::debug!(?running, requested = ?kind, "action ignored while busy");
            return;
        }
        self.state.busy = Some(kind);
        let client = self.client.clone();
        let tx = self.load_tx.clone();
        let model = self.state.selected_model.clone();
        tracing::info!(action = ?kind, model = %model, "starting action");

        tokio::spawn(async move {
            let result = match kind {
                ActionKind::Update => client.trigger_update(&model).await,
                ActionKind::Analyze => client.process_pending(&model).await,
                ActionKind::Predict => client.run_prediction(&model).await,
            };
            let _ = tx.send(LoadEvent::Action { kind, result });
        });
    }

    fn finish_action(&mut self, kind: ActionKind, result: Result<ActionAck, ApiError>) {
        self.state.busy = None;

        let ack = match result {
            Ok(ack) => ack,
            Err(e) => {
                tracing::warn!(action = ?kind, error = %e, "action failed");
                let message = e.user_message(&kind.failure_fallback());
                self.state.push_toast(ToastKind::Error, message);
                return;
            }
        };

        match kind {
            ActionKind::Update => {
                self.state
                    .push_toast(ToastKind::Success, t!("toast.update_started").to_string());
                self.schedule_refresh();
            }
            ActionKind::Analyze => {
                let count = ack.processed_count.unwrap_or(0);
                self.state.push_toast(
                    ToastKind::Success,
                    t!("toast.analyzed", count = count).to_string(),
                );
                self.dispatch_raw_data(self.state.raw_filter, false);
            }
            ActionKind::Predict => {
                self.state
                    .push_toast(ToastKind::Success, t!("toast.predict_done").to_string());
                if self.state.view == View::Dashboard {
                    self.dispatch(LoadRequest::Dashboard);
                }
            }
        }
    }

    /// Re-fetch the dashboard once the crawler has had time to start.
    fn schedule_refresh(&self) {
        let tx = self.load_tx.clone();
        let delay = Duration::from_secs(self.config.refresh_delay_secs);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(LoadEvent::RefreshDue);
        });
    }

    fn refresh_current_view(&mut self) {
        match self.state.view {
            View::RawData => {
                self.state
                    .push_toast(ToastKind::Info, t!("toast.refreshing_raw").to_string());
                self.dispatch_raw_data(self.state.raw_filter, true);
            }
            View::HotTrends => {
                self.state
                    .push_toast(ToastKind::Info, t!("toast.refreshing_hot").to_string());
                self.dispatch_hot_trends(true);
            }
            _ => {
                let request = self.state.load_request();
                self.dispatch(request);
            }
        }
    }

    fn export_report(&mut self) {
        self.state
            .push_toast(ToastKind::Info, t!("toast.generating_report").to_string());
        let tx = self.load_tx.clone();
        let dir = self.config.export_dir.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(EXPORT_DELAY_MS)).await;
            let result = report::write_report(&dir, Utc::now());
            let _ = tx.send(LoadEvent::Exported(result));
        });
    }

    // ── Keyboard handling ────────────────────────────────────────

    /// Handle a key event. Returns `true` if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Settings notice: any key dismisses
        if self.state.show_settings {
            self.state.show_settings = false;
            return false;
        }

        if self.state.show_model_picker {
            return self.handle_key_model_picker(key);
        }

        if self.state.show_help {
            return self.handle_key_help(key);
        }

        if self.state.show_backend_status {
            return self.handle_key_backend_status(key);
        }

        self.handle_key_normal(key)
    }

    fn handle_key_help(&mut self, key: KeyEvent) -> bool {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
        ) {
            self.state.show_help = false;
        }
        false
    }

    fn handle_key_model_picker(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.state.close_model_picker(),
            KeyCode::Up | KeyCode::Char('k') => self.state.model_picker_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.model_picker_down(),
            KeyCode::Enter => {
                if self.state.confirm_model_picker() {
                    tracing::info!(model = %self.state.selected_model, "model selected");
                }
            }
            _ => {}
        }
        false
    }

    fn handle_key_backend_status(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('i') => {
                self.state.show_backend_status = false;
            }
            KeyCode::Char('r') => self.dispatch_backend_status(),
            _ => {}
        }
        false
    }

    fn navigate(&mut self, view: View) {
        let request = self.state.switch_view(view);
        self.dispatch(request);
    }

    fn handle_key_normal(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,

            // Navigation
            KeyCode::Char(c @ '1'..='8') => {
                let idx = (c as usize) - ('1' as usize);
                if let Some(view) = View::nav().get(idx).cloned() {
                    self.navigate(view);
                }
            }
            KeyCode::Tab => {
                let request = self.state.next_view();
                self.dispatch(request);
            }
            KeyCode::BackTab => {
                let request = self.state.prev_view();
                self.dispatch(request);
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                if self.state.view != View::Dashboard {
                    self.navigate(View::Dashboard);
                }
            }

            // Scrolling
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::PageUp => self.state.page_up(),
            KeyCode::PageDown => self.state.page_down(),

            // Dashboard period
            KeyCode::Char('p') if self.state.view == View::Dashboard => {
                let days = self.state.cycle_trend_days();
                tracing::debug!(days, "trend period changed");
                self.dispatch_trends();
            }

            // Raw data filters
            KeyCode::Char('f') if self.state.view == View::RawData => {
                let request = self.state.cycle_raw_type();
                self.dispatch(request);
            }
            KeyCode::Char('d') if self.state.view == View::RawData => {
                let request = self.state.cycle_raw_period();
                self.dispatch(request);
            }

            // Actions
            KeyCode::Char('u') => self.start_action(ActionKind::Update),
            KeyCode::Char('A') => self.start_action(ActionKind::Analyze),
            KeyCode::Char('P') => self.start_action(ActionKind::Predict),
            KeyCode::Char('r') => self.refresh_current_view(),
            KeyCode::Char('e') if self.state.view == View::HotTrends => self.export_report(),

            // Overlays
            KeyCode::Char('?') => self.state.show_help = true,
            KeyCode::Char('s') => self.state.show_settings = true,
            KeyCode::Char('m') => {
                if self.state.models.is_empty() && !self.state.is_loading(LoadKey::Models) {
                    self.dispatch_models();
                }
                self.state.open_model_picker();
            }
            KeyCode::Char('i') => {
                self.state.show_backend_status = true;
                self.dispatch_backend_status();
            }

            // Appearance
            KeyCode::Char('T') => self.state.cycle_theme(),
            KeyCode::Char('L') => self.state.cycle_lang(),

            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentType, PendingCounts};

    // Unroutable address: spawned loaders fail fast and their events are
    // never drained by these tests.
    fn make_app() -> App {
        rust_i18n::set_locale("en");
        let config = Config {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        App::new(config, ui::Theme::default())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn listing() -> RawListing {
        RawListing {
            items: Vec::new(),
            pending: PendingCounts::from_pairs(&[(ContentType::News, 3)]),
        }
    }

    // ── Navigation ────────────────────────────────────────────────

    #[tokio::test]
    async fn number_keys_switch_views() {
        let mut app = make_app();
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.state.view, View::RawData);
        assert!(app.state.is_loading(LoadKey::RawData));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state.view, View::Detail("drama".into()));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.view, View::Dashboard);
    }

    #[tokio::test]
    async fn quit_keys() {
        let mut app = make_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[tokio::test]
    async fn settings_notice_dismissed_by_any_key() {
        let mut app = make_app();
        press(&mut app, KeyCode::Char('s'));
        assert!(app.state.show_settings);
        // 'q' closes the notice instead of quitting
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(!app.state.show_settings);
    }

    // ── Stale responses ───────────────────────────────────────────

    #[tokio::test]
    async fn stale_raw_response_is_dropped() {
        let mut app = make_app();
        press(&mut app, KeyCode::Char('7'));
        let stale = app.state.begin_load(LoadKey::RawData);
        let current = app.state.begin_load(LoadKey::RawData);

        app.handle_load_event(LoadEvent::RawData {
            ticket: stale,
            result: Ok(listing()),
            announce: false,
        });
        assert!(matches!(app.state.raw_items, ui::Feed::Pending));

        app.handle_load_event(LoadEvent::RawData {
            ticket: current,
            result: Ok(listing()),
            announce: true,
        });
        assert_eq!(app.state.pending.data().map(|p| p.get(ContentType::News)), Some(3));
        assert_eq!(app.state.toasts.back().unwrap().kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn superseded_trends_are_not_applied_from_dashboard() {
        let mut app = make_app();
        let ticket = app.state.begin_load(LoadKey::Dashboard);
        let trends_ticket = app.state.begin_load(LoadKey::Trends);
        // period change while the dashboard is loading
        app.state.begin_load(LoadKey::Trends);

        app.handle_load_event(LoadEvent::Dashboard {
            ticket,
            trends_ticket,
            bundle: DashboardBundle {
                stats: Err(ApiError::MissingData),
                trends: Ok(TrendSeries::default()),
                distribution: Err(ApiError::MissingData),
                recent: Ok(Vec::new()),
            },
        });
        assert!(!app.state.trends_chart.is_bound());
        assert!(app.state.is_loading(LoadKey::Trends));
        assert!(!app.state.is_loading(LoadKey::Dashboard));
    }

    // ── Actions ───────────────────────────────────────────────────

    #[tokio::test]
    async fn action_keys_ignored_while_busy() {
        let mut app = make_app();
        press(&mut app, KeyCode::Char('A'));
        assert_eq!(app.state.busy, Some(ActionKind::Analyze));
        press(&mut app, KeyCode::Char('P'));
        assert_eq!(app.state.busy, Some(ActionKind::Analyze));
    }

    #[tokio::test]
    async fn analyze_success_toasts_count_and_reloads_raw() {
        let mut app = make_app();
        app.state.busy = Some(ActionKind::Analyze);
        app.handle_load_event(LoadEvent::Action {
            kind: ActionKind::Analyze,
            result: Ok(ActionAck {
                processed_count: Some(7),
                message: None,
            }),
        });
        assert_eq!(app.state.busy, None);
        assert_eq!(
            app.state.toasts.back().unwrap().message,
            "Successfully analyzed 7 items"
        );
        assert!(app.state.is_loading(LoadKey::RawData));
    }

    #[tokio::test]
    async fn action_failure_prefers_server_message() {
        let mut app = make_app();
        app.state.busy = Some(ActionKind::Update);
        app.handle_load_event(LoadEvent::Action {
            kind: ActionKind::Update,
            result: Err(ApiError::Rejected("crawler busy".into())),
        });
        let toast = app.state.toasts.back().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "crawler busy");
    }

    #[tokio::test]
    async fn rejected_action_without_message_uses_fallback() {
        let mut app = make_app();
        app.handle_load_event(LoadEvent::Action {
            kind: ActionKind::Predict,
            result: Err(ApiError::Rejected(String::new())),
        });
        assert_eq!(app.state.toasts.back().unwrap().message, "Prediction failed");
    }

    #[tokio::test]
    async fn delayed_refresh_skipped_after_navigation() {
        let mut app = make_app();
        press(&mut app, KeyCode::Char('8'));
        let before = app.state.is_loading(LoadKey::Dashboard);
        app.handle_load_event(LoadEvent::RefreshDue);
        assert_eq!(app.state.is_loading(LoadKey::Dashboard), before);
        assert!(!before);
    }

    #[tokio::test]
    async fn delayed_refresh_reloads_dashboard() {
        let mut app = make_app();
        app.handle_load_event(LoadEvent::RefreshDue);
        assert!(app.state.is_loading(LoadKey::Dashboard));
    }

    // ── Export ────────────────────────────────────────────────────

    #[tokio::test]
    async fn export_result_toasts_path() {
        let mut app = make_app();
        app.handle_load_event(LoadEvent::Exported(Ok(PathBuf::from(
            "/tmp/hot-trends-report_2024-03-09.json",
        ))));
        let toast = app.state.toasts.back().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(toast.message.contains("hot-trends-report_2024-03-09.json"));
    }
}
