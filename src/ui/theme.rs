use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::models::{ContentStatus, ContentType, HeatTier, PopularityLevel};

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["default", "gruvbox", "nord", "dracula"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Brand / Primary ──────────────────────────────────────
    pub accent: Color,
    pub accent_secondary: Color,
    pub bg_dark: Color,
    pub bg_panel: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_dim: Color,
    pub text_muted: Color,

    // ── Semantic ─────────────────────────────────────────────
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // ── Table selection ──────────────────────────────────────
    pub table_row_selected_bg: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,

    // ── Content series ───────────────────────────────────────
    pub series_novel: Color,
    pub series_drama: Color,
    pub series_comic: Color,
    pub series_news: Color,
    pub series_entertainment: Color,

    // ── Heat tiers (hottest first) and rank medals ───────────
    pub heat: [Color; 4],
    pub rank_gold: Color,
    pub rank_silver: Color,
    pub rank_bronze: Color,
    pub rank_plain: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// Default dark theme, matching the web dashboard palette.
    pub fn default_dark() -> Self {
        Self {
            name: "default".to_string(),
            accent: Color::Rgb(59, 130, 246),
            accent_secondary: Color::Rgb(0, 243, 255),
            bg_dark: Color::Rgb(17, 24, 39),
            bg_panel: Color::Rgb(31, 41, 55),
            text_primary: Color::Rgb(229, 231, 235),
            text_dim: Color::Rgb(156, 163, 175),
            text_muted: Color::Rgb(107, 114, 128),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            danger: Color::Rgb(248, 113, 113),
            info: Color::Rgb(96, 165, 250),
            table_row_selected_bg: Color::Rgb(40, 48, 66),
            border: Color::Rgb(55, 65, 81),
            series_novel: Color::Rgb(59, 130, 246),
            series_drama: Color::Rgb(139, 92, 246),
            series_comic: Color::Rgb(236, 72, 153),
            series_news: Color::Rgb(0, 243, 255),
            series_entertainment: Color::Rgb(191, 0, 255),
            heat: [
                Color::Rgb(239, 68, 68),
                Color::Rgb(249, 115, 22),
                Color::Rgb(234, 179, 8),
                Color::Rgb(34, 197, 94),
            ],
            rank_gold: Color::Rgb(251, 191, 36),
            rank_silver: Color::Rgb(148, 163, 184),
            rank_bronze: Color::Rgb(205, 127, 50),
            rank_plain: Color::Rgb(100, 116, 139),
        }
    }

    /// Gruvbox dark palette.
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            accent: Color::Rgb(215, 153, 33),            // yellow
            accent_secondary: Color::Rgb(142, 192, 124), // green
            bg_dark: Color::Rgb(40, 40, 40),             // bg0
            bg_panel: Color::Rgb(50, 48, 47),            // bg0_s
            text_primary: Color::Rgb(235, 219, 178),     // fg
            text_dim: Color::Rgb(168, 153, 132),         // fg4
            text_muted: Color::Rgb(102, 92, 84),         // bg4
            success: Color::Rgb(142, 192, 124),          // green
            warning: Color::Rgb(250, 189, 47),           // yellow bright
            danger: Color::Rgb(251, 73, 52),             // red
            info: Color::Rgb(131, 165, 152),             // blue
            table_row_selected_bg: Color::Rgb(60, 56, 54),
            border: Color::Rgb(80, 73, 69),
            series_novel: Color::Rgb(131, 165, 152),
            series_drama: Color::Rgb(211, 134, 155),
            series_comic: Color::Rgb(254, 128, 25),
            series_news: Color::Rgb(142, 192, 124),
            series_entertainment: Color::Rgb(250, 189, 47),
            heat: [
                Color::Rgb(251, 73, 52),
                Color::Rgb(254, 128, 25),
                Color::Rgb(250, 189, 47),
                Color::Rgb(142, 192, 124),
            ],
            rank_gold: Color::Rgb(250, 189, 47),
            rank_silver: Color::Rgb(168, 153, 132),
            rank_bronze: Color::Rgb(214, 93, 14),
            rank_plain: Color::Rgb(102, 92, 84),
        }
    }

    /// Nord palette.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            accent: Color::Rgb(136, 192, 208), // nord8 frost
            accent_secondary: Color::Rgb(143, 188, 187), // nord7
            bg_dark: Color::Rgb(46, 52, 64),   // nord0
            bg_panel: Color::Rgb(59, 66, 82),  // nord1
            text_primary: Color::Rgb(229, 233, 240), // nord5
            text_dim: Color::Rgb(182, 191, 204),
            text_muted: Color::Rgb(107, 112, 127),
            success: Color::Rgb(163, 190, 140), // nord14 green
            warning: Color::Rgb(235, 203, 139), // nord13 yellow
            danger: Color::Rgb(191, 97, 106),  // nord11 red
            info: Color::Rgb(129, 161, 193),   // nord9
            table_row_selected_bg: Color::Rgb(67, 76, 94),
            border: Color::Rgb(76, 86, 106), // nord3
            series_novel: Color::Rgb(129, 161, 193),
            series_drama: Color::Rgb(180, 142, 173),
            series_comic: Color::Rgb(208, 135, 112),
            series_news: Color::Rgb(136, 192, 208),
            series_entertainment: Color::Rgb(235, 203, 139),
            heat: [
                Color::Rgb(191, 97, 106),
                Color::Rgb(208, 135, 112),
                Color::Rgb(235, 203, 139),
                Color::Rgb(163, 190, 140),
            ],
            rank_gold: Color::Rgb(235, 203, 139),
            rank_silver: Color::Rgb(216, 222, 233),
            rank_bronze: Color::Rgb(208, 135, 112),
            rank_plain: Color::Rgb(76, 86, 106),
        }
    }

    /// Dracula palette.
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            accent: Color::Rgb(139, 233, 253),          // cyan
            accent_secondary: Color::Rgb(80, 250, 123), // green
            bg_dark: Color::Rgb(40, 42, 54),            // background
            bg_panel: Color::Rgb(48, 51, 65),           // current line
            text_primary: Color::Rgb(248, 248, 242),    // foreground
            text_dim: Color::Rgb(188, 188, 172),
            text_muted: Color::Rgb(98, 114, 164), // comment
            success: Color::Rgb(80, 250, 123),
            warning: Color::Rgb(241, 250, 140),
            danger: Color::Rgb(255, 85, 85),
            info: Color::Rgb(139, 233, 253),
            table_row_selected_bg: Color::Rgb(68, 71, 90),
            border: Color::Rgb(98, 114, 164),
            series_novel: Color::Rgb(139, 233, 253),
            series_drama: Color::Rgb(189, 147, 249),
            series_comic: Color::Rgb(255, 121, 198),
            series_news: Color::Rgb(80, 250, 123),
            series_entertainment: Color::Rgb(255, 184, 108),
            heat: [
                Color::Rgb(255, 85, 85),
                Color::Rgb(255, 184, 108),
                Color::Rgb(241, 250, 140),
                Color::Rgb(80, 250, 123),
            ],
            rank_gold: Color::Rgb(241, 250, 140),
            rank_silver: Color::Rgb(188, 188, 172),
            rank_bronze: Color::Rgb(255, 184, 108),
            rank_plain: Color::Rgb(98, 114, 164),
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_dark()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Cycle to the next built-in theme. Custom themes cycle back to the first.
    pub fn next_builtin(&self) -> Self {
        let next_idx = BUILTIN_THEME_NAMES
            .iter()
            .position(|&n| n == self.name)
            .map(|idx| (idx + 1) % BUILTIN_THEME_NAMES.len())
            .unwrap_or(0);
        Self::by_name(BUILTIN_THEME_NAMES[next_idx]).unwrap_or_default()
    }

    /// Load a custom theme from a TOML file, falling back to default for missing fields.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        Some(
            file.into_theme(
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("custom"),
            ),
        )
    }

    // ── Domain colors ────────────────────────────────────────

    pub fn series_color(&self, ct: ContentType) -> Color {
        match ct {
            ContentType::Novel => self.series_novel,
            ContentType::Drama => self.series_drama,
            ContentType::Comic => self.series_comic,
            ContentType::News => self.series_news,
            ContentType::Entertainment => self.series_entertainment,
        }
    }

    pub fn heat_color(&self, tier: HeatTier) -> Color {
        self.heat[tier.level().min(HeatTier::MAX) as usize]
    }

    /// Medal colors for the top three ranks (0-based), slate for the rest.
    pub fn rank_color(&self, index: usize) -> Color {
        match index {
            0 => self.rank_gold,
            1 => self.rank_silver,
            2 => self.rank_bronze,
            _ => self.rank_plain,
        }
    }

    pub fn popularity_color(&self, level: PopularityLevel) -> Color {
        match level {
            PopularityLevel::High => self.danger,
            PopularityLevel::Medium => self.warning,
            PopularityLevel::Low => self.text_muted,
        }
    }

    pub fn status_color(&self, status: ContentStatus) -> Color {
        match status {
            ContentStatus::Analyzed => self.success,
            ContentStatus::Pending => self.warning,
            ContentStatus::Analyzing => self.info,
        }
    }

    pub fn trend_color(&self, positive: bool) -> Color {
        if positive {
            self.success
        } else {
            self.danger
        }
    }

    // ── Computed Styles ──────────────────────────────────────

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active_style(&self) -> Style {
        Style::default()
            .fg(self.bg_dark)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_row_normal(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn table_row_selected(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.table_row_selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Solid badge with dark text on `bg`.
    pub fn badge_style(&self, bg: Color) -> Style {
        Style::default()
            .fg(self.bg_dark)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_highlight_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional; missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    accent: Option<String>,
    accent_secondary: Option<String>,
    bg_dark: Option<String>,
    bg_panel: Option<String>,
    text_primary: Option<String>,
    text_dim: Option<String>,
    text_muted: Option<String>,
    success: Option<String>,
    warning: Option<String>,
    danger: Option<String>,
    info: Option<String>,
    table_row_selected_bg: Option<String>,
    border: Option<String>,
    series_novel: Option<String>,
    series_drama: Option<String>,
    series_comic: Option<String>,
    series_news: Option<String>,
    series_entertainment: Option<String>,
    /// Up to four hex colors, hottest tier first.
    heat: Option<Vec<String>>,
    rank_gold: Option<String>,
    rank_silver: Option<String>,
    rank_bronze: Option<String>,
    rank_plain: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::default_dark();
        let mut heat = base.heat;
        if let Some(colors) = &self.heat {
            for (slot, hex) in heat.iter_mut().zip(colors) {
                if let Some(c) = parse_color(&Some(hex.clone())) {
                    *slot = c;
                }
            }
        }
        Theme {
            name: name.to_string(),
            accent: parse_color(&self.accent).unwrap_or(base.accent),
            accent_secondary: parse_color(&self.accent_secondary).unwrap_or(base.accent_secondary),
            bg_dark: parse_color(&self.bg_dark).unwrap_or(base.bg_dark),
            bg_panel: parse_color(&self.bg_panel).unwrap_or(base.bg_panel),
            text_primary: parse_color(&self.text_primary).unwrap_or(base.text_primary),
            text_dim: parse_color(&self.text_dim).unwrap_or(base.text_dim),
            text_muted: parse_color(&self.text_muted).unwrap_or(base.text_muted),
            success: parse_color(&self.success).unwrap_or(base.success),
            warning: parse_color(&self.warning).unwrap_or(base.warning),
            danger: parse_color(&self.danger).unwrap_or(base.danger),
            info: parse_color(&self.info).unwrap_or(base.info),
            table_row_selected_bg: parse_color(&self.table_row_selected_bg)
                .unwrap_or(base.table_row_selected_bg),
            border: parse_color(&self.border).unwrap_or(base.border),
            series_novel: parse_color(&self.series_novel).unwrap_or(base.series_novel),
            series_drama: parse_color(&self.series_drama).unwrap_or(base.series_drama),
            series_comic: parse_color(&self.series_comic).unwrap_or(base.series_comic),
            series_news: parse_color(&self.series_news).unwrap_or(base.series_news),
            series_entertainment: parse_color(&self.series_entertainment)
                .unwrap_or(base.series_entertainment),
            heat,
            rank_gold: parse_color(&self.rank_gold).unwrap_or(base.rank_gold),
            rank_silver: parse_color(&self.rank_silver).unwrap_or(base.rank_silver),
            rank_bronze: parse_color(&self.rank_bronze).unwrap_or(base.rank_bronze),
            rank_plain: parse_color(&self.rank_plain).unwrap_or(base.rank_plain),
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
