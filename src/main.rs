#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod observers;
mod sections;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{Storage, Theme, VisitFlag, PROFILE};
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Theme requested on the command line
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

pub fn get_initial_theme() -> Theme {
    INITIAL_THEME.get().copied().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

/// Personal portfolio, single-page desktop shell
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page developer portfolio")]
struct Args {
    /// Data directory for the visit flag
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Forget the previous visit so the terminal intro plays again
    #[arg(long)]
    reset_intro: bool,

    /// Start in the light theme
    #[arg(long)]
    light: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = INITIAL_THEME.set(if args.light { Theme::Light } else { Theme::Dark });

    if args.reset_intro {
        match Storage::open_in(&data_dir) {
            Ok(storage) => {
                VisitFlag::new(Some(storage)).clear();
                tracing::info!("Visit flag cleared");
            }
            Err(e) => tracing::warn!("Could not reset visit flag: {}", e),
        }
    }

    tracing::info!("Starting portfolio with data dir: {:?}", data_dir);

    let title = format!("{} | Portfolio", PROFILE.name);

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(&title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                .with_resizable(true)
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
