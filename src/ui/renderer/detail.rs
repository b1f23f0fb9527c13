//! Drill-down view for one content type: popularity ranking and narrative.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::format::{self, ranking_rows};
use crate::ui::state::{AppState, LoadKey};
use crate::utils::{pad_to_width, truncate_str};

use super::helpers::{
    feed_message, panel, render_placeholder, render_scrollbar_bordered, scroll_offset,
};

pub fn render_detail(frame: &mut Frame, area: Rect, state: &AppState, code: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    render_ranking(frame, chunks[0], state, code);
    render_narrative(frame, chunks[1], state, code);
}

fn render_ranking(frame: &mut Frame, area: Rect, state: &AppState, code: &str) {
    let t = &state.theme;
    let block = panel(format::detail_title(code), false, t);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(msg) = feed_message(&state.ranking, state.is_loading(LoadKey::Detail)) {
        render_placeholder(frame, inner, &msg, t);
        return;
    }
    let rows = ranking_rows(state.ranking.data().map(Vec::as_slice).unwrap_or_default());
    if rows.is_empty() {
        render_placeholder(frame, inner, &t!("common.no_data"), t);
        return;
    }

    let visible = inner.height as usize;
    let offset = scroll_offset(state.ranking_scroll, visible, rows.len());
    let width = inner.width as usize;
    // rank badge, score column and spacing
    let title_width = width.saturating_sub(6 + 8 + 18);

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, row)| {
            let base = if i == state.ranking_scroll {
                t.table_row_selected()
            } else {
                t.table_row_normal()
            };
            Line::from(vec![
                Span::styled(
                    format!(" {:>3} ", format!("#{}", row.rank)),
                    t.badge_style(t.rank_color(i)),
                ),
                Span::styled(" ", base),
                Span::styled(
                    pad_to_width(&truncate_str(&row.title, title_width), title_width),
                    base.add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    pad_to_width(&truncate_str(&row.category, 16), 18),
                    base.fg(t.text_dim),
                ),
                Span::styled(format!("{:>6}", row.score), base.fg(t.accent)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
    render_scrollbar_bordered(frame, area, rows.len(), state.ranking_scroll);
}

fn render_narrative(frame: &mut Frame, area: Rect, state: &AppState, code: &str) {
    let t = &state.theme;
    let (title, body) = format::narrative(code);
    let block = panel(title, false, t);
    let text = Paragraph::new(Line::from(Span::styled(
        body,
        Style::default().fg(t.text_primary),
    )))
    .block(block)
    .wrap(Wrap { trim: true });
    frame.render_widget(text, area);
}
