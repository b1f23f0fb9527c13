//! Header bar: logo, navigation strip, clock and model.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::format::clock;
use crate::ui::state::{AppState, View};
use crate::utils::{spinner_char, truncate_str};

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Logo
            Constraint::Min(20),    // Navigation
            Constraint::Length(40), // Clock + model
        ])
        .split(area);

    // Logo
    let pulse = if state.now.timestamp() % 2 == 0 {
        "●"
    } else {
        "○"
    };
    let logo = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(pulse, Style::default().fg(t.success)),
        Span::styled(t!("app.name").to_string(), t.header_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(logo, chunks[0]);

    // Navigation strip
    let nav = View::nav();
    let mut nav_spans = vec![Span::raw(" ")];
    for (i, view) in nav.iter().enumerate() {
        let style = if *view == state.view {
            t.tab_active_style()
        } else {
            t.tab_inactive_style()
        };
        nav_spans.push(Span::styled(
            format!("{}", i + 1),
            Style::default().fg(t.text_muted),
        ));
        nav_spans.push(Span::styled(format!(" {}", view.label()), style));
        if i < nav.len() - 1 {
            nav_spans.push(Span::styled(" │ ", Style::default().fg(t.text_muted)));
        }
    }
    // Detail views for codes outside the strip still show where we are
    if state.view.nav_index().is_none() {
        nav_spans.push(Span::styled(" │ ", Style::default().fg(t.text_muted)));
        nav_spans.push(Span::styled(state.view.label(), t.tab_active_style()));
    }

    let nav_line = Paragraph::new(Line::from(nav_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(nav_line, chunks[1]);

    // Clock, model, activity
    let (date, time) = clock(&state.now);
    let mut right = Vec::new();
    if !state.in_flight.is_empty() {
        right.push(Span::styled(
            format!("{} ", spinner_char(state.tick_count)),
            Style::default().fg(t.accent),
        ));
    }
    right.push(Span::styled(
        format!("{} ", truncate_str(&state.selected_model, 12)),
        Style::default()
            .fg(t.accent_secondary)
            .add_modifier(Modifier::BOLD),
    ));
    right.push(Span::styled(
        format!("{} ", date),
        Style::default().fg(t.text_dim),
    ));
    right.push(Span::styled(
        format!("{} ", time),
        Style::default().fg(t.text_primary),
    ));

    let summary = Paragraph::new(Line::from(right))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_style()),
        );
    frame.render_widget(summary, chunks[2]);
}
