//! hexpick viewer - desktop color picker window.

mod app;
mod clipboard;
mod slider;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hexpick_core::{HexColor, PickerConfig};
use tracing_subscriber::EnvFilter;

use app::PickerApp;

/// Pick, tweak and copy a hex color.
#[derive(Parser, Debug)]
#[command(name = "hexpick-viewer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start color instead of a random one (e.g. "#FF5733")
    #[arg(short, long)]
    color: Option<String>,

    /// Open with the RGB sliders visible
    #[arg(long)]
    sliders: bool,

    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => PickerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PickerConfig::default(),
    };
    if let Some(color) = &args.color {
        config.initial_color =
            Some(HexColor::parse(color).with_context(|| format!("Bad --color {color}"))?);
    }
    if args.sliders {
        config.show_sliders = true;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([420.0, 420.0])
            .with_title("hexpick"),
        ..Default::default()
    };

    eframe::run_native(
        "hexpick",
        options,
        Box::new(move |cc| Ok(Box::new(PickerApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Viewer exited with error: {e}"))
}
