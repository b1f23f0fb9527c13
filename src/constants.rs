//! Application-wide constants.
//!
//! Centralizes timing, limits, and configuration defaults so the loaders,
//! renderers, and config layer agree on the same numbers.

use std::path::PathBuf;

// ── Backend ───────────────────────────────────────────────────────
/// Default backend base URL (the Flask service listens on port 5000).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
/// Environment variable that overrides the configured API URL.
pub const API_URL_ENV: &str = "TRENDSCOPE_API_URL";
/// Default per-request timeout (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
/// Model used until the server's model list arrives.
pub const DEFAULT_MODEL: &str = "llama2";

// ── Timing ────────────────────────────────────────────────────────
/// Event poll timeout (ms) -- how often the UI checks for input.
pub const EVENT_POLL_MS: u64 = 50;
/// Clock refresh interval (ms).
pub const CLOCK_TICK_MS: u64 = 1000;
/// Delay before re-fetching the dashboard after an update trigger (seconds).
pub const DEFAULT_REFRESH_DELAY_SECS: u64 = 3;
/// Toast display duration (seconds).
pub const DEFAULT_TOAST_SECS: u64 = 3;
/// Simulated report generation delay (ms).
pub const EXPORT_DELAY_MS: u64 = 1500;

// ── Limits ────────────────────────────────────────────────────────
/// Default trend chart window (days).
pub const DEFAULT_TREND_DAYS: u32 = 7;
/// Selectable trend chart windows (days), cycled with `p`.
pub const TREND_PERIODS: &[u32] = &[7, 30, 90];
/// Recent analysis cards on the dashboard.
pub const DEFAULT_RECENT_LIMIT: usize = 5;
/// Ranking entries in the detail view.
pub const DEFAULT_RANKING_LIMIT: usize = 20;
/// Items per hot-trend category list.
pub const DEFAULT_HOT_TREND_LIMIT: usize = 10;
/// Upper bound for any configurable list limit.
pub const MAX_LIST_LIMIT: usize = 200;
/// Toasts kept on screen at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

// ── UI Layout ─────────────────────────────────────────────────────
/// Page up/down step size.
pub const PAGE_SIZE: usize = 10;
/// Help overlay width.
pub const HELP_POPUP_WIDTH: u16 = 58;
/// Help overlay height.
pub const HELP_POPUP_HEIGHT: u16 = 30;
/// Toast width.
pub const TOAST_WIDTH: u16 = 46;

// ── Spinner Animation ─────────────────────────────────────────────
/// Spinner character sequence for loading indicators.
pub const SPINNER_CHARS: &[&str] = &["◐", "◓", "◑", "◒"];

// ── Supported Languages ───────────────────────────────────────────
/// Available UI languages for cycling.
pub const LANGUAGES: &[&str] = &["en", "zh"];

// ── Logging ───────────────────────────────────────────────────────
/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "TRENDSCOPE_LOG";
/// Filter used when `LOG_ENV` is unset.
pub const DEFAULT_LOG_FILTER: &str = "trendscope=info,warn";
/// Log file name inside the log directory (rotated daily).
pub const LOG_FILE_NAME: &str = "trendscope.log";

// ── Report Export ─────────────────────────────────────────────────
/// File name prefix for exported hot-trend reports.
pub const REPORT_FILE_PREFIX: &str = "hot-trends-report";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/trendscope/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("trendscope")
}

/// Returns `~/.config/trendscope/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/trendscope/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    config_dir().join("themes").join(format!("{}.toml", name))
}

/// Returns `~/.config/trendscope/.env`.
pub fn env_file_path() -> PathBuf {
    config_dir().join(".env")
}

/// Returns `~/.local/share/trendscope/`.
pub fn data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("trendscope")
}

/// Returns `~/.local/share/trendscope/logs/`.
pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}
