//! Hot trends view: per-category counts and a 2x2 grid of trending lists.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{ContentType, HotTrendItem};
use crate::ui::format::{category_or_unknown, hot_score};
use crate::ui::state::{AppState, LoadKey};
use crate::utils::{pad_to_width, truncate_str};

use super::helpers::{feed_message, panel, render_placeholder};

pub fn render_hot_trends(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    render_counts(frame, chunks[0], state);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(chunks[1]);
    let mut cells = Vec::with_capacity(4);
    for row in rows.iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(*row);
        cells.extend(cols.iter().copied());
    }

    let loading = state.is_loading(LoadKey::HotTrends);
    let lists = state.hot_lists.data();
    for (ct, cell) in ContentType::HOT_TREND.iter().zip(cells) {
        let items = lists
            .and_then(|l| l.iter().find(|(c, _)| c == ct))
            .map(|(_, items)| items.as_slice());
        render_list(frame, cell, state, *ct, items, loading);
    }
}

fn render_counts(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = panel(
        t!("hot.stats_title").to_string(),
        state.hot_stats.is_demo(),
        t,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(msg) = feed_message(&state.hot_stats, state.is_loading(LoadKey::HotTrends)) {
        render_placeholder(frame, inner, &msg, t);
        return;
    }
    let Some(stats) = state.hot_stats.data() else {
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);
    for (ct, col) in ContentType::HOT_TREND.iter().zip(cols.iter()) {
        let line = Line::from(vec![
            Span::styled(format!(" {} ", ct.label()), Style::default().fg(t.text_dim)),
            Span::styled(
                stats.count(*ct).to_string(),
                Style::default()
                    .fg(t.series_color(*ct))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), *col);
    }
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    ct: ContentType,
    items: Option<&[HotTrendItem]>,
    loading: bool,
) {
    let t = &state.theme;
    let block = panel(
        t!("hot.list_title", kind = ct.label()).to_string(),
        state.hot_lists.is_demo(),
        t,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(items) = items else {
        let msg = feed_message(&state.hot_lists, loading)
            .unwrap_or_else(|| t!("hot.no_data").to_string());
        render_placeholder(frame, inner, &msg, t);
        return;
    };
    if items.is_empty() {
        render_placeholder(frame, inner, &t!("hot.no_data"), t);
        return;
    }

    let width = inner.width as usize;
    let title_width = width.saturating_sub(5 + 8);
    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if lines.len() + 2 > inner.height as usize {
            break;
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:>2} ", i + 1),
                t.badge_style(t.heat_color(item.heat_tier())),
            ),
            Span::raw(" "),
            Span::styled(
                pad_to_width(&truncate_str(&item.title, title_width), title_width),
                Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>7}", hot_score(item.hot_score)),
                Style::default().fg(t.heat_color(item.heat_tier())),
            ),
        ]));

        let mut meta = category_or_unknown(item.category.as_deref());
        if !item.origin().is_empty() {
            meta.push_str(" · ");
            meta.push_str(item.origin());
        }
        lines.push(Line::from(Span::styled(
            format!("      {}", truncate_str(&meta, width.saturating_sub(6))),
            Style::default().fg(t.text_dim),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
