//! Dashboard view: stat cards, trends chart, distribution, recent analyses.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

use crate::models::ContentType;
use crate::ui::format::{percent, TrendIndicator};
use crate::ui::state::{AppState, LoadKey};
use crate::ui::widgets::{ShareBar, StatCard};

use super::helpers::{feed_message, panel, render_placeholder};

pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Stat cards
            Constraint::Percentage(50), // Charts
            Constraint::Min(6),         // Recent analyses
        ])
        .split(area);

    render_stat_cards(frame, chunks[0], state);

    let chart_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);
    render_trends_chart(frame, chart_split[0], state);
    render_distribution(frame, chart_split[1], state);

    render_recent_analyses(frame, chunks[2], state);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let stats = state.stats.data();
    let missing = if state.is_loading(LoadKey::Dashboard) {
        "…".to_string()
    } else {
        "--".to_string()
    };

    let cards = [
        (
            t!("dashboard.hot_novel").to_string(),
            stats.map(|s| s.hot_novel_count.to_string()),
            stats.map(|s| TrendIndicator::new(s.novel_trend)),
            t.series_color(ContentType::Novel),
        ),
        (
            t!("dashboard.hot_drama").to_string(),
            stats.map(|s| s.hot_drama_count.to_string()),
            stats.map(|s| TrendIndicator::new(s.drama_trend)),
            t.series_color(ContentType::Drama),
        ),
        (
            t!("dashboard.hot_comic").to_string(),
            stats.map(|s| s.hot_comic_count.to_string()),
            stats.map(|s| TrendIndicator::new(s.comic_trend)),
            t.series_color(ContentType::Comic),
        ),
        (
            t!("dashboard.accuracy").to_string(),
            stats.map(|s| percent(s.prediction_accuracy)),
            stats.map(|s| TrendIndicator::new(s.accuracy_trend)),
            t.success,
        ),
    ];

    for ((title, value, trend, color), col) in cards.into_iter().zip(cols.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style());
        let inner = block.inner(*col);
        frame.render_widget(block, *col);
        frame.render_widget(
            StatCard {
                title,
                value: value.unwrap_or_else(|| missing.clone()),
                color,
                trend,
                theme: t,
            },
            inner,
        );
    }
}

fn render_trends_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = panel(
        t!("dashboard.trends_title", days = state.trend_days).to_string(),
        false,
        t,
    );

    let Some(chart) = state.trends_chart.get().filter(|c| !c.is_empty()) else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let msg = if state.is_loading(LoadKey::Dashboard) || state.is_loading(LoadKey::Trends) {
            t!("common.loading")
        } else if state.trends_chart.is_bound() {
            t!("common.no_data")
        } else {
            t!("common.unavailable")
        };
        render_placeholder(frame, inner, &msg, t);
        return;
    };

    let datasets: Vec<Dataset> = chart
        .series
        .iter()
        .map(|(ct, points)| {
            Dataset::default()
                .name(ct.label())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(t.series_color(*ct)))
                .data(points)
        })
        .collect();

    let x_labels: Vec<Span> = chart
        .x_labels()
        .into_iter()
        .map(|l| Span::styled(l, Style::default().fg(t.text_muted)))
        .collect();
    let y_labels: Vec<Span> = [0.0, chart.y_max / 2.0, chart.y_max]
        .iter()
        .map(|v| Span::styled(format!("{:.0}", v), Style::default().fg(t.text_muted)))
        .collect();

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, chart.x_max()])
                .labels(x_labels)
                .style(Style::default().fg(t.border)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, chart.y_max])
                .labels(y_labels)
                .style(Style::default().fg(t.border)),
        );
    frame.render_widget(widget, area);
}

fn render_distribution(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = panel(t!("dashboard.distribution_title").to_string(), false, t);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(chart) = state.distribution_chart.get() else {
        let msg = if state.is_loading(LoadKey::Dashboard) {
            t!("common.loading")
        } else {
            t!("common.unavailable")
        };
        render_placeholder(frame, inner, &msg, t);
        return;
    };

    let rows = chart.rows();
    let total: u64 = rows.iter().map(|(_, n, _)| n).sum();
    let body = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    for (i, (ct, count, pct)) in rows.into_iter().enumerate() {
        let y = body.y + (i as u16) * 2;
        if y >= body.y + body.height {
            break;
        }
        frame.render_widget(
            ShareBar::new(ct.label(), count, pct, t.series_color(ct), t),
            Rect::new(body.x, y, body.width, 1),
        );
    }

    let footer_y = body.y + body.height.saturating_sub(1);
    if body.height > 10 {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                t!("dashboard.distribution_total", total = total).to_string(),
                Style::default().fg(t.text_dim),
            ))),
            Rect::new(body.x, footer_y, body.width, 1),
        );
    }
}

fn render_recent_analyses(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = panel(t!("dashboard.recent_title").to_string(), false, t);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(msg) = feed_message(&state.recent, state.is_loading(LoadKey::Dashboard)) {
        render_placeholder(frame, inner, &msg, t);
        return;
    }
    let records = state.recent.data().map(Vec::as_slice).unwrap_or_default();
    if records.is_empty() {
        render_placeholder(frame, inner, &t!("dashboard.no_analysis"), t);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for record in records {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", record.heading()),
                Style::default()
                    .fg(t.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", record.analysis_date),
                Style::default().fg(t.text_dim),
            ),
            Span::styled(
                format!(
                    " {} ",
                    t!("dashboard.confidence", value = record.confidence_display())
                ),
                t.badge_style(t.success),
            ),
        ]));

        let trends = record.trend_preview();
        if !trends.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("   {}", t!("dashboard.trend_summary")),
                Style::default().fg(t.accent_secondary),
            )));
            for line in trends {
                lines.push(Line::from(Span::styled(
                    format!("     {}", line),
                    Style::default().fg(t.text_primary),
                )));
            }
        }

        let predictions = record.prediction_preview();
        if !predictions.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("   {}", t!("dashboard.prediction_result")),
                Style::default().fg(t.accent_secondary),
            )));
            for line in predictions {
                lines.push(Line::from(Span::styled(
                    format!("     {}", line),
                    Style::default().fg(t.text_primary),
                )));
            }
        }
        lines.push(Line::raw(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
