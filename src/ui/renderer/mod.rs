//! Renderer module: split into focused submodules.
//!
//! - `header`: Logo, navigation strip, clock and model
//! - `status_bar`: Bottom status bar with per-view keybinds
//! - `dashboard`: Stat cards, trends chart, distribution, recent analyses
//! - `raw_data`: Raw crawled content with filters
//! - `hot_trends`: Hot-trend counts and per-category lists
//! - `detail`: Per-type ranking and narrative
//! - `overlays`: Popups (progress, help, model picker, settings, backend status) and toasts
//! - `helpers`: Shared rendering utilities

mod dashboard;
mod detail;
mod header;
pub mod helpers;
mod hot_trends;
mod overlays;
mod raw_data;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::state::{AppState, View};

/// Top-level render function. Delegates to the active view's renderer.
pub fn render(frame: &mut Frame, state: &AppState) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar
            Constraint::Min(10),   // Content area
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    header::render_header(frame, main_chunks[0], state);
    status_bar::render_status_bar(frame, main_chunks[2], state);

    match &state.view {
        View::Dashboard => dashboard::render_dashboard(frame, main_chunks[1], state),
        View::RawData => raw_data::render_raw_data(frame, main_chunks[1], state),
        View::HotTrends => hot_trends::render_hot_trends(frame, main_chunks[1], state),
        View::Detail(code) => detail::render_detail(frame, main_chunks[1], state, code),
    }

    if state.show_model_picker {
        overlays::render_model_picker(frame, size, state);
    }

    if state.show_settings {
        overlays::render_settings(frame, size, state);
    }

    if state.show_backend_status {
        overlays::render_backend_status(frame, size, state);
    }

    if state.show_help {
        overlays::render_help_overlay(frame, size, state);
    }

    if state.busy.is_some() {
        overlays::render_loading(frame, size, state);
    }

    overlays::render_toasts(frame, main_chunks[1], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::api::loaders::HotTrendsBundle;
    use crate::api::ApiError;
    use crate::config::Config;
    use crate::models::{ContentType, HotTrendItem, HotTrendStats, RankedItem};
    use crate::ui::theme::Theme;

    fn make_state() -> AppState {
        rust_i18n::set_locale("en");
        AppState::new(&Config::default(), Theme::default())
    }

    fn draw(state: &AppState) -> Buffer {
        let backend = TestBackend::new(140, 44);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    // ── Smoke ─────────────────────────────────────────────────────

    #[test]
    fn every_nav_view_renders() {
        let mut s = make_state();
        for view in View::nav() {
            s.switch_view(view);
            let text = screen_text(&draw(&s));
            assert!(text.contains("Dashboard"));
        }
    }

    #[test]
    fn unknown_detail_code_renders_fallback_title() {
        let mut s = make_state();
        s.switch_view(View::from_target("podcast"));
        s.apply_ranking(Ok(Vec::new()));
        let text = screen_text(&draw(&s));
        assert!(text.contains("Content Analysis"));
    }

    #[test]
    fn overlays_render_over_views() {
        let mut s = make_state();
        s.show_help = true;
        s.show_backend_status = true;
        s.push_toast(crate::ui::state::ToastKind::Success, "saved".into());
        let text = screen_text(&draw(&s));
        assert!(text.contains("saved"));
    }

    // ── Detail ────────────────────────────────────────────────────

    #[test]
    fn empty_ranking_shows_placeholder_and_no_rows() {
        let mut s = make_state();
        s.switch_view(View::from_target("novel"));
        s.apply_ranking(Ok(Vec::new()));
        let text = screen_text(&draw(&s));
        assert!(text.contains("No data"));
        assert!(!text.contains("#1"));
    }

    #[test]
    fn ranking_rows_in_server_order() {
        let mut s = make_state();
        s.switch_view(View::from_target("novel"));
        s.apply_ranking(Ok(vec![
            RankedItem {
                title: "Second Sun".into(),
                category: None,
                popularity_score: 50.0,
                url: None,
            },
            RankedItem {
                title: "First Moon".into(),
                category: Some("fantasy".into()),
                popularity_score: 99.0,
                url: None,
            },
        ]));
        let text = screen_text(&draw(&s));
        let a = text.find("Second Sun").unwrap();
        let b = text.find("First Moon").unwrap();
        assert!(a < b);
        assert!(text.contains("#1"));
        assert!(text.contains("#2"));
    }

    #[test]
    fn ranking_failure_shows_unavailable() {
        let mut s = make_state();
        s.switch_view(View::from_target("comic"));
        s.apply_ranking(Err(ApiError::MissingData));
        let text = screen_text(&draw(&s));
        assert!(text.contains("Data unavailable"));
    }

    // ── Hot trends ────────────────────────────────────────────────

    #[test]
    fn hot_partial_lists_render_per_category() {
        let mut s = make_state();
        s.switch_view(View::HotTrends);
        let mut lists: Vec<_> = ContentType::HOT_TREND
            .iter()
            .map(|&ct| (ct, Vec::new()))
            .collect();
        lists[3].1 = vec![HotTrendItem {
            title: "Midnight Idol Tour".into(),
            category: Some("music".into()),
            platform: Some("weibo".into()),
            source: None,
            source_site: None,
            hot_score: 88.0,
        }];
        s.apply_hot_trends(HotTrendsBundle {
            stats: Ok(HotTrendStats::default()),
            lists,
        });

        let text = screen_text(&draw(&s));
        assert_eq!(text.matches("No hot trends").count(), 3);
        assert!(text.contains("Midnight Idol Tour"));
        assert!(text.contains("88.0"));
    }

    // ── Raw data ──────────────────────────────────────────────────

    #[test]
    fn raw_demo_fallback_is_badged() {
        let mut s = make_state();
        s.switch_view(View::RawData);
        s.apply_raw_data(
            Err(ApiError::MissingData),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        );
        let text = screen_text(&draw(&s));
        assert!(text.contains("DEMO"));
    }
}
