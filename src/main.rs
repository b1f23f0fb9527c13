//! # Trendscope - Terminal Dashboard for Content Trend Analysis
//!
//! Browses crawled novels, short dramas, comic dramas, news and
//! entertainment content, their AI analyses and hot trends, and triggers
//! crawler and analysis jobs on the backend.

#[macro_use]
extern crate rust_i18n;

// Load locale files from `locales/` directory, default to English
i18n!("locales", fallback = "en");

mod api;
mod app;
mod config;
pub mod constants;
mod demo;
mod logging;
mod models;
mod report;
mod ui;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::{Config, FallbackMode};
use constants::{custom_theme_path, env_file_path};

/// Trendscope - terminal dashboard for the content-trend analysis backend
#[derive(Parser, Debug)]
#[command(name = "trendscope", version, about = "Terminal dashboard for content trend analysis")]
struct Cli {
    /// Backend base URL (e.g. http://127.0.0.1:5000)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Model sent with update/analyze/predict actions
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Color theme (default, gruvbox, nord, dracula, or a custom theme name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// UI language (en, zh)
    #[arg(long, short = 'l', value_name = "LANG")]
    lang: Option<String>,

    /// What failed sections show: demo data or an unavailable notice
    #[arg(long, value_name = "MODE")]
    fallback: Option<String>,

    /// Directory exported reports are written to
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Optional .env with TRENDSCOPE_API_URL / TRENDSCOPE_LOG, never committed
    let _ = dotenvy::from_path(env_file_path());

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(ref url) = cli.api_url {
        config.set_api_url(url);
    }
    if let Some(model) = cli.model.filter(|m| !m.trim().is_empty()) {
        config.default_model = model;
    }
    if let Some(theme_name) = cli.theme {
        config.theme = theme_name;
    }
    if let Some(lang) = cli.lang {
        config.lang = lang;
    }
    if let Some(ref mode) = cli.fallback {
        match FallbackMode::parse(mode) {
            Some(mode) => config.fallback = mode,
            None => eprintln!("Warning: unknown fallback mode '{}', keeping demo", mode),
        }
    }
    if let Some(dir) = cli.export_dir {
        config.export_dir = dir;
    }

    // Set UI language (CLI > config > default "en")
    rust_i18n::set_locale(&config.lang);

    // Resolve theme
    let theme = ui::Theme::by_name(&config.theme)
        .or_else(|| ui::Theme::from_toml_file(&custom_theme_path(&config.theme)))
        .unwrap_or_default();

    tracing::debug!(?config, "configuration resolved");

    // Build and run the application
    let mut app = app::App::new(config, theme);
    app.run().await
}
