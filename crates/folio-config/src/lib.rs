//! Configuration system for the Folio portfolio runtime.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CapabilityConfig, Config, DebugConfig, HeroConfig, LayoutConfig, LoadingConfig,
    NavigationConfig, ScrollConfig, ViewportConfig, VisibilityConfig,
};
pub use error::ConfigError;
