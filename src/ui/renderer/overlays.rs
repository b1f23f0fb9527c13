//! Popup overlays: action progress, help, model picker, settings notice,
//! backend status, and toast notifications.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::{HELP_POPUP_HEIGHT, HELP_POPUP_WIDTH, TOAST_WIDTH};
use crate::ui::state::{AppState, Feed, LoadKey, ToastKind};
use crate::ui::theme::Theme;
use crate::utils::{loading_dots, spinner_char, truncate_str};

use super::helpers::{centered_rect, section_heading};

/// Blocking progress popup while an update/analyze/predict call runs.
pub fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let Some(action) = state.busy else {
        return;
    };
    let popup_area = centered_rect(44, 5, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_highlight_style());
    let text = Paragraph::new(vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("  {} ", spinner_char(state.tick_count)),
                Style::default().fg(t.accent),
            ),
            Span::styled(
                format!("{}{}", action.label(), loading_dots(state.tick_count)),
                Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD),
            ),
        ]),
    ])
    .block(block);
    frame.render_widget(text, popup_area);
}

pub fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup_area = centered_rect(HELP_POPUP_WIDTH, HELP_POPUP_HEIGHT, area);

    frame.render_widget(Clear, popup_area);

    let help_entry = |key: &str, desc: String, color: Color| -> Line {
        Line::from(vec![
            Span::styled(
                format!("  {:<18}", key),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(t.text_primary)),
        ])
    };

    let help_text = vec![
        section_heading(format!("  {}", t!("help.navigation")), t),
        help_entry("1 - 8", t!("help.jump").to_string(), t.accent),
        help_entry("Tab / Shift+Tab", t!("help.switch").to_string(), t.accent),
        help_entry("Esc / b", t!("help.back").to_string(), t.accent),
        help_entry("Up/Down / j / k", t!("help.scroll").to_string(), t.accent),
        help_entry("PgUp / PgDn", t!("help.page").to_string(), t.accent),
        Line::raw(""),
        section_heading(format!("  {}", t!("help.data")), t),
        help_entry("p", t!("help.period").to_string(), t.accent),
        help_entry("f / d", t!("help.raw_filter").to_string(), t.accent),
        help_entry("r", t!("help.refresh").to_string(), t.accent),
        help_entry("e", t!("help.export").to_string(), t.accent),
        Line::raw(""),
        section_heading(format!("  {}", t!("help.actions")), t),
        help_entry("u", t!("help.update").to_string(), t.warning),
        help_entry("A", t!("help.analyze").to_string(), t.warning),
        help_entry("P", t!("help.predict").to_string(), t.warning),
        help_entry("m", t!("help.model").to_string(), t.accent_secondary),
        Line::raw(""),
        section_heading(format!("  {}", t!("help.general")), t),
        help_entry("i", t!("help.status").to_string(), t.accent),
        help_entry("s", t!("help.settings").to_string(), t.accent),
        help_entry("T", t!("help.theme").to_string(), t.accent),
        help_entry("L", t!("help.lang").to_string(), t.accent),
        help_entry("?", t!("help.help").to_string(), t.accent),
        help_entry("q", t!("help.quit").to_string(), t.accent),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(t!("help.title").to_string(), t.header_style()))
                .borders(Borders::ALL)
                .border_style(t.border_highlight_style()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}

pub fn render_model_picker(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup_width = 48.min(area.width.saturating_sub(4));
    let popup_height = (state.models.len() as u16 + 5)
        .max(7)
        .min(area.height.saturating_sub(4));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(t!("model.title").to_string(), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_highlight_style());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            t!("model.hint").to_string(),
            Style::default().fg(t.text_dim),
        )),
        Line::raw(""),
    ];

    if state.models.is_empty() {
        let msg = if state.is_loading(LoadKey::Models) {
            t!("common.loading")
        } else {
            t!("model.none")
        };
        lines.push(Line::from(Span::styled(
            format!("   {}", msg),
            Style::default().fg(t.text_muted),
        )));
    }

    let name_width = (inner.width as usize).saturating_sub(8);
    for (i, model) in state.models.iter().enumerate() {
        let is_selected = i == state.model_picker_selected;
        let prefix = if is_selected { " > " } else { "   " };
        let style = if is_selected {
            t.table_row_selected()
        } else {
            Style::default().fg(t.text_primary)
        };
        let marker = if *model == state.selected_model {
            Span::styled(" ●", Style::default().fg(t.success))
        } else {
            Span::raw("")
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(truncate_str(model, name_width), style),
            marker,
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_settings(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup_area = centered_rect(50, 7, area);
    frame.render_widget(Clear, popup_area);

    let text = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {}", t!("settings.under_development")),
            Style::default().fg(t.text_primary),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {}", t!("common.esc_close")),
            Style::default().fg(t.text_muted),
        )),
    ])
    .block(
        Block::default()
            .title(Span::styled(t!("settings.title").to_string(), t.header_style()))
            .borders(Borders::ALL)
            .border_style(t.border_highlight_style()),
    )
    .wrap(Wrap { trim: false });
    frame.render_widget(text, popup_area);
}

/// Helper: create a simple "  label: value" detail line.
fn detail_line<'a>(label: String, value: String, color: Color, t: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", label), Style::default().fg(t.text_dim)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn health_color(status: &str, t: &Theme) -> Color {
    match status {
        "healthy" | "connected" | "ok" | "running" => t.success,
        "" | "unknown" => t.text_muted,
        _ => t.danger,
    }
}

fn usage_color(percent: f64, t: &Theme) -> Color {
    if percent >= 90.0 {
        t.danger
    } else if percent >= 75.0 {
        t.warning
    } else {
        t.success
    }
}

pub fn render_backend_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 20.min(area.height.saturating_sub(4));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(t!("backend.title").to_string(), t.header_style()))
        .borders(Borders::ALL)
        .border_style(t.border_highlight_style());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = vec![detail_line(
        t!("backend.api").to_string(),
        state.api_base_url.clone(),
        t.text_primary,
        t,
    )];

    match &state.backend_status {
        Feed::Live(status) | Feed::Demo(status) => {
            lines.push(detail_line(
                t!("backend.database").to_string(),
                status.database_status.clone(),
                health_color(&status.database_status, t),
                t,
            ));
            lines.push(detail_line(
                t!("backend.ollama").to_string(),
                status.ollama_status.clone(),
                health_color(&status.ollama_status, t),
                t,
            ));
            lines.push(detail_line(
                t!("backend.last_update").to_string(),
                status.last_update.clone(),
                t.text_primary,
                t,
            ));
            lines.push(detail_line(
                t!("backend.records").to_string(),
                status.total_records.to_string(),
                t.text_primary,
                t,
            ));
            lines.push(Line::raw(""));

            let hw = &status.hardware;
            lines.push(section_heading(format!(" {}", t!("backend.hardware")), t));
            lines.push(detail_line(
                "CPU".into(),
                format!("{:.1}%", hw.cpu_percent),
                usage_color(hw.cpu_percent, t),
                t,
            ));
            lines.push(detail_line(
                t!("backend.memory").to_string(),
                format!("{:.1}%", hw.memory_percent),
                usage_color(hw.memory_percent, t),
                t,
            ));
            lines.push(detail_line(
                t!("backend.disk").to_string(),
                format!("{:.1}%", hw.disk_usage),
                usage_color(hw.disk_usage, t),
                t,
            ));
            match &hw.gpu {
                Some(gpu) if gpu.available => {
                    lines.push(detail_line(
                        "GPU".into(),
                        t!("backend.gpu_count", count = gpu.count).to_string(),
                        t.text_primary,
                        t,
                    ));
                    for detail in &gpu.details {
                        lines.push(detail_line(
                            format!("  {}", truncate_str(&detail.name, 12)),
                            format!("{:.0}%", detail.load),
                            usage_color(detail.load, t),
                            t,
                        ));
                    }
                }
                _ => lines.push(detail_line(
                    "GPU".into(),
                    t!("backend.gpu_none").to_string(),
                    t.text_muted,
                    t,
                )),
            }
        }
        Feed::Pending => lines.push(detail_line(
            String::new(),
            t!("common.loading").to_string(),
            t.text_muted,
            t,
        )),
        Feed::Unavailable => lines.push(detail_line(
            String::new(),
            t!("backend.unreachable").to_string(),
            t.danger,
            t,
        )),
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Stack live toasts in the top-right corner, newest at the bottom.
pub fn render_toasts(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let width = TOAST_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(4) as usize;
    let mut y = area.y + 1;

    for toast in &state.toasts {
        let color = match toast.kind {
            ToastKind::Info => t.info,
            ToastKind::Success => t.success,
            ToastKind::Error => t.danger,
        };
        let wrapped = textwrap::wrap(&toast.message, inner_width.max(1));
        let height = wrapped.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }
        let rect = Rect::new(area.x + area.width - width, y, width, height);
        frame.render_widget(Clear, rect);

        let lines: Vec<Line> = wrapped
            .into_iter()
            .map(|l| {
                Line::from(Span::styled(
                    format!(" {}", l),
                    Style::default().fg(t.text_primary),
                ))
            })
            .collect();
        let popup = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(popup, rect);
        y += height;
    }
}
