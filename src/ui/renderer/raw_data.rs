//! Raw data view: pending counters, filter bar, crawled-content table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{content_type_name, ContentType, PopularityLevel};
use crate::ui::format::{category_or_unknown, round_score};
use crate::ui::state::{AppState, LoadKey};
use crate::utils::truncate_str;

use super::helpers::{feed_message, panel, render_placeholder, render_scrollbar_bordered};

pub fn render_raw_data(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Pending counters
            Constraint::Length(3), // Filter bar
            Constraint::Min(6),    // Table
        ])
        .split(area);

    render_pending(frame, chunks[0], state);
    render_filter_bar(frame, chunks[1], state);
    render_table(frame, chunks[2], state);
}

fn render_pending(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = panel(
        t!("raw.pending_title").to_string(),
        state.pending.is_demo(),
        t,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(msg) = feed_message(&state.pending, state.is_loading(LoadKey::RawData)) {
        render_placeholder(frame, inner, &msg, t);
        return;
    }
    let Some(counts) = state.pending.data() else {
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(inner);
    for (ct, col) in ContentType::ALL.iter().zip(cols.iter()) {
        let line = Line::from(vec![
            Span::styled(format!(" {} ", ct.label()), Style::default().fg(t.text_dim)),
            Span::styled(
                counts.get(*ct).to_string(),
                Style::default()
                    .fg(t.series_color(*ct))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), *col);
    }
}

fn render_filter_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let count = state.raw_items.data().map(Vec::len).unwrap_or(0);
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", t!("raw.filter_type")),
            Style::default().fg(t.text_dim),
        ),
        Span::styled(" f ", t.badge_style(t.accent)),
        Span::styled(
            format!(" {}  ", state.raw_filter.type_label()),
            Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(t.text_muted)),
        Span::styled(
            format!("{} ", t!("raw.filter_period")),
            Style::default().fg(t.text_dim),
        ),
        Span::styled(" d ", t.badge_style(t.accent)),
        Span::styled(
            format!(" {}  ", state.raw_filter.period.label()),
            Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(t.text_muted)),
        Span::styled(
            t!("raw.row_count", count = count).to_string(),
            Style::default().fg(t.text_dim),
        ),
    ]);
    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(bar, area);
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let block = panel(
        t!("raw.table_title").to_string(),
        state.raw_items.is_demo(),
        t,
    );

    if let Some(msg) = feed_message(&state.raw_items, state.is_loading(LoadKey::RawData)) {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_placeholder(frame, inner, &msg, t);
        return;
    }
    let items = state.raw_items.data().map(Vec::as_slice).unwrap_or_default();
    if items.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_placeholder(frame, inner, &t!("raw.no_data"), t);
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID").style(t.table_header_style()),
        Cell::from(t!("raw.col_title").to_string()).style(t.table_header_style()),
        Cell::from(t!("raw.col_type").to_string()).style(t.table_header_style()),
        Cell::from(t!("raw.col_category").to_string()).style(t.table_header_style()),
        Cell::from(t!("raw.col_popularity").to_string()).style(t.table_header_style()),
        Cell::from(t!("raw.col_source").to_string()).style(t.table_header_style()),
        Cell::from(t!("raw.col_crawled").to_string()).style(t.table_header_style()),
        Cell::from(t!("raw.col_status").to_string()).style(t.table_header_style()),
    ])
    .height(1);

    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == state.raw_scroll {
                t.table_row_selected()
            } else {
                t.table_row_normal()
            };
            let level = PopularityLevel::from_score(item.popularity_score);
            let id = item.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into());

            Row::new(vec![
                Cell::from(id).style(Style::default().fg(t.text_dim)),
                Cell::from(truncate_str(&item.title, 36)),
                Cell::from(content_type_name(&item.content_type))
                    .style(Style::default().fg(t.text_dim)),
                Cell::from(truncate_str(
                    &category_or_unknown(item.category.as_deref()),
                    12,
                ))
                .style(Style::default().fg(t.text_dim)),
                Cell::from(Span::styled(
                    format!(" {:>3} ", round_score(item.popularity_score)),
                    t.badge_style(t.popularity_color(level)),
                )),
                Cell::from(truncate_str(&item.source_site, 14))
                    .style(Style::default().fg(t.text_muted)),
                Cell::from(truncate_str(&item.crawl_date, 19))
                    .style(Style::default().fg(t.text_muted)),
                Cell::from(item.status.label())
                    .style(Style::default().fg(t.status_color(item.status))),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(24),
            Constraint::Length(13),
            Constraint::Length(13),
            Constraint::Length(7),
            Constraint::Length(15),
            Constraint::Length(20),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(t.table_row_selected());

    let mut table_state = TableState::default();
    table_state.select(Some(state.raw_scroll));
    frame.render_stateful_widget(table, area, &mut table_state);

    render_scrollbar_bordered(frame, area, items.len(), state.raw_scroll);
}
