use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::*;

/// What the UI shows when a dashboard, raw-data, or hot-trend fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackMode {
    /// Locally generated placeholder data, clearly badged as demo.
    Demo,
    /// An explicit "unavailable" state.
    Unavailable,
}

impl FallbackMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "demo" => Some(FallbackMode::Demo),
            "unavailable" | "none" | "off" => Some(FallbackMode::Unavailable),
            _ => None,
        }
    }
}

/// Application configuration with sensible defaults.
///
/// Can be overridden via ~/.config/trendscope/config.toml, the
/// `TRENDSCOPE_API_URL` environment variable, and CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without trailing slash.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Model sent with action requests until the user picks another.
    pub default_model: String,
    /// Initial trend chart window in days.
    pub trend_days: u32,
    pub recent_limit: usize,
    pub ranking_limit: usize,
    pub hot_trend_limit: usize,
    /// Seconds between an update trigger and the dashboard re-fetch.
    pub refresh_delay_secs: u64,
    /// Seconds a toast stays on screen.
    pub toast_secs: u64,
    pub fallback: FallbackMode,
    /// Theme name (built-in or custom)
    pub theme: String,
    /// UI language (en, zh)
    pub lang: String,
    /// Directory exported reports are written to.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            default_model: DEFAULT_MODEL.to_string(),
            trend_days: DEFAULT_TREND_DAYS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            ranking_limit: DEFAULT_RANKING_LIMIT,
            hot_trend_limit: DEFAULT_HOT_TREND_LIMIT,
            refresh_delay_secs: DEFAULT_REFRESH_DELAY_SECS,
            toast_secs: DEFAULT_TOAST_SECS,
            fallback: FallbackMode::Demo,
            theme: "default".to_string(),
            lang: "en".to_string(),
            export_dir: data_dir().join("reports"),
        }
    }
}

/// TOML-deserializable config file format.
/// All fields are optional; missing fields use defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    default_model: Option<String>,
    trend_days: Option<u32>,
    recent_limit: Option<usize>,
    ranking_limit: Option<usize>,
    hot_trend_limit: Option<usize>,
    refresh_delay_secs: Option<u64>,
    toast_secs: Option<u64>,
    fallback: Option<String>,
    theme: Option<String>,
    lang: Option<String>,
    export_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from ~/.config/trendscope/config.toml, then apply the
    /// `TRENDSCOPE_API_URL` environment override.
    pub fn load() -> Self {
        let mut config = Self::load_from(&config_file_path());
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.set_api_url(&url);
        }
        config
    }

    /// Load config from an explicit path, falling back to defaults for any
    /// missing fields. If the file doesn't exist, returns pure defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Config::default(), // No config file, use defaults
        };

        match toml::from_str::<FileConfig>(&content) {
            Ok(file_config) => Config::default().merged(file_config),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Config::default()
            }
        }
    }

    /// Merge file values over `self`.
    fn merged(mut self, file_config: FileConfig) -> Self {
        if let Some(v) = file_config.api_base_url {
            self.set_api_url(&v);
        }
        if let Some(v) = file_config.request_timeout_secs {
            self.request_timeout_secs = v.max(1);
        }
        if let Some(v) = file_config.default_model {
            if !v.is_empty() {
                self.default_model = v;
            }
        }
        if let Some(v) = file_config.trend_days {
            self.trend_days = v.clamp(1, 365);
        }
        if let Some(v) = file_config.recent_limit {
            self.recent_limit = v.clamp(1, MAX_LIST_LIMIT);
        }
        if let Some(v) = file_config.ranking_limit {
            self.ranking_limit = v.clamp(1, MAX_LIST_LIMIT);
        }
        if let Some(v) = file_config.hot_trend_limit {
            self.hot_trend_limit = v.clamp(1, MAX_LIST_LIMIT);
        }
        if let Some(v) = file_config.refresh_delay_secs {
            self.refresh_delay_secs = v; // 0 = immediate
        }
        if let Some(v) = file_config.toast_secs {
            self.toast_secs = v.max(1);
        }
        if let Some(v) = file_config.fallback {
            match FallbackMode::parse(&v) {
                Some(mode) => self.fallback = mode,
                None => eprintln!("Warning: unknown fallback mode '{}', keeping demo", v),
            }
        }
        if let Some(v) = file_config.theme {
            if !v.is_empty() {
                self.theme = v;
            }
        }
        if let Some(v) = file_config.lang {
            if !v.is_empty() {
                self.lang = v;
            }
        }
        if let Some(v) = file_config.export_dir {
            self.export_dir = v;
        }
        self
    }

    /// Set the backend URL, ignoring blanks and trimming trailing slashes.
    pub fn set_api_url(&mut self, url: &str) {
        let trimmed = url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api_base_url = trimmed.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.default_model, "llama2");
        assert_eq!(config.fallback, FallbackMode::Demo);
    }

    #[test]
    fn file_values_merge_over_defaults() {
        let file = write_config(
            r#"
api_base_url = "http://backend:8080/"
default_model = "qwen2"
ranking_limit = 5
fallback = "unavailable"
lang = "zh"
"#,
        );
        let config = Config::load_from(file.path());
        assert_eq!(config.api_base_url, "http://backend:8080");
        assert_eq!(config.default_model, "qwen2");
        assert_eq!(config.ranking_limit, 5);
        assert_eq!(config.fallback, FallbackMode::Unavailable);
        assert_eq!(config.lang, "zh");
        // Untouched fields keep their defaults
        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
        assert_eq!(config.hot_trend_limit, DEFAULT_HOT_TREND_LIMIT);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let file = write_config("ranking_limit = 0\nhot_trend_limit = 100000\ntoast_secs = 0\n");
        let config = Config::load_from(file.path());
        assert_eq!(config.ranking_limit, 1);
        assert_eq!(config.hot_trend_limit, MAX_LIST_LIMIT);
        assert_eq!(config.toast_secs, 1);
    }

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        let file = write_config("this is = = not toml");
        let config = Config::load_from(file.path());
        assert_eq!(config.ranking_limit, DEFAULT_RANKING_LIMIT);
    }

    #[test]
    fn unknown_fallback_keeps_demo() {
        let file = write_config("fallback = \"sometimes\"\n");
        assert_eq!(Config::load_from(file.path()).fallback, FallbackMode::Demo);
    }

    #[test]
    fn set_api_url_ignores_blank() {
        let mut config = Config::default();
        config.set_api_url("   ");
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        config.set_api_url("https://x.example//");
        assert_eq!(config.api_base_url, "https://x.example");
    }

    #[test]
    fn fallback_mode_parse() {
        assert_eq!(FallbackMode::parse("Demo"), Some(FallbackMode::Demo));
        assert_eq!(FallbackMode::parse(" off "), Some(FallbackMode::Unavailable));
        assert_eq!(FallbackMode::parse("x"), None);
    }
}
