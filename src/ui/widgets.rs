use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::format::TrendIndicator;
use super::theme::Theme;
use crate::utils::pad_to_width;

/// One category row of the distribution chart: label, proportional bar,
/// count and share.
pub struct ShareBar<'a> {
    pub label: String,
    pub count: u64,
    pub percent: f64,
    pub color: Color,
    pub theme: &'a Theme,
}

impl<'a> ShareBar<'a> {
    pub fn new(label: String, count: u64, percent: f64, color: Color, theme: &'a Theme) -> Self {
        Self {
            label,
            count,
            percent: percent.clamp(0.0, 100.0),
            color,
            theme,
        }
    }
}

impl Widget for ShareBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 16 || area.height < 1 {
            return;
        }

        const LABEL_WIDTH: u16 = 14;
        let value = format!(" {:>4} {:>5.1}%", self.count, self.percent);
        let value_width = value.width() as u16;
        let bar_width = area.width.saturating_sub(LABEL_WIDTH + value_width);

        buf.set_string(
            area.x,
            area.y,
            pad_to_width(&self.label, LABEL_WIDTH as usize),
            Style::default().fg(self.theme.text_dim),
        );

        let bar_x = area.x + LABEL_WIDTH;
        let filled = ((self.percent / 100.0) * bar_width as f64).round() as u16;
        for i in 0..bar_width {
            let (ch, style) = if i < filled {
                ("█", Style::default().fg(self.color))
            } else {
                ("░", Style::default().fg(self.theme.border))
            };
            buf.set_string(bar_x + i, area.y, ch, style);
        }

        buf.set_string(
            bar_x + bar_width,
            area.y,
            &value,
            Style::default().fg(self.color),
        );
    }
}

/// Headline number with an optional signed delta underneath.
pub struct StatCard<'a> {
    pub title: String,
    pub value: String,
    pub color: Color,
    pub trend: Option<TrendIndicator>,
    pub theme: &'a Theme,
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 {
            return;
        }
        let width = area.width as usize;

        buf.set_string(
            area.x,
            area.y,
            pad_to_width(&self.title, width),
            Style::default().fg(self.theme.text_dim),
        );
        buf.set_string(
            area.x,
            area.y + 1,
            pad_to_width(&self.value, width),
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        );

        if let Some(trend) = self.trend {
            if area.height >= 3 {
                let arrow = if trend.positive { "▲ " } else { "▼ " };
                buf.set_string(
                    area.x,
                    area.y + 2,
                    pad_to_width(&format!("{}{}", arrow, trend.text), width),
                    Style::default().fg(self.theme.trend_color(trend.positive)),
                );
            }
        }
    }
}
