//! `folio`: mounts the portfolio hero against a headless surface and replays a
//! scroll session through it.
//!
//! Run with: `cargo run -p folio-app -- --scroll-speed 1800`

mod clock;
mod platform;
mod session;

use clap::Parser;
use folio_config::{CliArgs, Config};
use folio_page::{App, Fallback, Layout};
use folio_render::{FixedProbe, GraphicsProbe, RecordingSurface, WgpuGlProbe};
use tracing::{info, warn};

use crate::platform::PlatformDirs;
use crate::session::ScrollSession;

fn main() {
    let args = CliArgs::parse();

    let dirs = match PlatformDirs::resolve() {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to resolve platform directories: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = dirs.create_dirs() {
        eprintln!("Failed to create platform directories: {e}");
        std::process::exit(1);
    }

    let config_dir = args.config.clone().unwrap_or_else(|| dirs.config_dir.clone());
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", config_dir.display());
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    folio_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!(
        "Viewport {}x{} @{}x, scrub {}s",
        config.viewport.width,
        config.viewport.height,
        config.viewport.device_pixel_ratio,
        config.scroll.scrub_seconds
    );

    let probe: Box<dyn GraphicsProbe> = if args.assume_webgl {
        Box::new(FixedProbe::supported("assumed"))
    } else {
        Box::new(WgpuGlProbe)
    };

    let mut surface = RecordingSurface::new();
    let mut app = App::mount(&config, probe.as_ref(), &mut surface);

    if let Some(page) = app.page_mut() {
        let session = ScrollSession::scripted(page.layout().max_scroll(), args.scroll_speed);
        let report = session::run(page, &mut surface, session);
        println!("Scroll session");
        println!("  steps:    {}", report.steps);
        println!("  drawn:    {}", report.frames_drawn);
        println!("  skipped:  {}", report.frames_skipped);
        println!("  redraws:  {}", report.redraw_requests);
        println!("  scroll_y: {}", report.final_scroll_y);
        if let Some(frame) = &report.last_frame {
            println!("  last frame: {frame:?}");
        }
    } else {
        warn!("Hero unavailable, showing fallback");
        println!("{}", Fallback::HEADING);
        println!("{}", Fallback::MESSAGE);
    }

    let cancelled = app.unmount();
    info!(cancelled, "Shut down");
}
