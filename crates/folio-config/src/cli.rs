//! Command-line argument parsing for the Folio driver.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Folio command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "folio", about = "Scroll-orchestrated portfolio hero, headless driver")]
pub struct CliArgs {
    /// Viewport width in CSS pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in CSS pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Device pixel ratio.
    #[arg(long)]
    pub dpr: Option<f32>,

    /// User agent string used for device classification.
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Scrub lag in seconds.
    #[arg(long)]
    pub scrub: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Simulated scroll speed in pixels per second.
    #[arg(long, default_value_t = 1200.0)]
    pub scroll_speed: f32,

    /// Skip the GPU probe and assume WebGL is available.
    #[arg(long)]
    pub assume_webgl: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.viewport.width = w;
        }
        if let Some(h) = args.height {
            self.viewport.height = h;
        }
        if let Some(dpr) = args.dpr {
            self.viewport.device_pixel_ratio = dpr;
        }
        if let Some(ref ua) = args.user_agent {
            self.viewport.user_agent = ua.clone();
        }
        if let Some(scrub) = args.scrub {
            self.scroll.scrub_seconds = scrub;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
