//! Status bar at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::state::{AppState, View};

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    // Helper to create a keybind badge
    let badge = |key: &str, color: ratatui::style::Color| -> Span {
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(t.bg_dark)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    };
    let dim =
        |text: &str| -> Span { Span::styled(text.to_string(), Style::default().fg(t.text_dim)) };

    let mut spans = vec![
        Span::styled(" ", Style::default()),
        badge("q", t.accent),
        dim(&t!("status.quit")),
        badge("1-8", t.accent),
        dim(&t!("status.switch")),
        badge("r", t.accent),
        dim(&t!("status.refresh")),
    ];

    match state.view {
        View::Dashboard => {
            spans.push(badge("p", t.accent));
            spans.push(dim(&t!("status.period", days = state.trend_days)));
            spans.push(badge("u", t.warning));
            spans.push(dim(&t!("status.update")));
            spans.push(badge("P", t.warning));
            spans.push(dim(&t!("status.predict")));
        }
        View::RawData => {
            spans.push(badge("f", t.accent));
            spans.push(dim(&t!("status.type")));
            spans.push(badge("d", t.accent));
            spans.push(dim(&t!("status.period_raw")));
            spans.push(badge("A", t.warning));
            spans.push(dim(&t!("status.analyze")));
        }
        View::HotTrends => {
            spans.push(badge("e", t.accent));
            spans.push(dim(&t!("status.export")));
        }
        View::Detail(_) => {
            spans.push(badge("↑↓", t.accent));
            spans.push(dim(&t!("status.scroll")));
            spans.push(badge("Esc", t.accent));
            spans.push(dim(&t!("status.back")));
        }
    }

    spans.push(badge("m", t.accent_secondary));
    spans.push(dim(&format!(" {} ", state.selected_model)));
    spans.push(badge("T", t.accent));
    spans.push(dim(&format!(" {} ", t.name)));
    spans.push(badge("L", t.accent));
    spans.push(dim(&format!(" {} ", state.current_lang.to_uppercase())));
    spans.push(badge("?", t.accent));
    spans.push(dim(&t!("status.help")));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
