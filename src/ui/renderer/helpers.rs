//! Shared rendering helpers: panel blocks, placeholders, scrollbar, centered rect.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::ui::state::Feed;
use crate::ui::theme::Theme;

/// Bordered panel block with an accented title. Demo data gets a badge.
pub fn panel<'a>(title: String, demo: bool, t: &Theme) -> Block<'a> {
    let mut spans = vec![Span::styled(format!(" {} ", title), t.header_style())];
    if demo {
        spans.push(Span::styled(
            t!("common.demo_badge").to_string(),
            t.badge_style(t.warning),
        ));
        spans.push(Span::raw(" "));
    }
    Block::default()
        .title(Line::from(spans))
        .borders(Borders::ALL)
        .border_style(t.border_style())
}

/// Centered dim message for empty, loading, or unavailable sections.
pub fn render_placeholder(frame: &mut Frame, area: Rect, message: &str, t: &Theme) {
    if area.height == 0 {
        return;
    }
    let y = area.y + area.height.saturating_sub(1) / 2;
    let line_area = Rect::new(area.x, y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(t.text_muted),
        )))
        .alignment(Alignment::Center),
        line_area,
    );
}

/// Placeholder text for a feed that has nothing to draw yet.
pub fn feed_message<T>(feed: &Feed<T>, loading: bool) -> Option<String> {
    match feed {
        Feed::Live(_) | Feed::Demo(_) => None,
        Feed::Pending if loading => Some(t!("common.loading").to_string()),
        Feed::Pending => Some(t!("common.no_data").to_string()),
        Feed::Unavailable => Some(t!("common.unavailable").to_string()),
    }
}

/// Bold accent section heading.
pub fn section_heading<'a>(text: String, t: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        text,
        Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
    ))
}

/// Render a vertical scrollbar inside a bordered area (1px vertical margin).
///
/// Only renders if `total` exceeds the inner height.
pub fn render_scrollbar_bordered(frame: &mut Frame, area: Rect, total: usize, position: usize) {
    let visible_height = area.height.saturating_sub(2) as usize;
    if total <= visible_height {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"));
    let mut scrollbar_state = ScrollbarState::new(total).position(position);
    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}

/// First row index to draw so that `selected` stays on screen.
pub fn scroll_offset(selected: usize, visible: usize, total: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    selected
        .saturating_sub(visible - 1)
        .min(total - visible)
}

/// Return a `Rect` centered within `area` with the given dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
