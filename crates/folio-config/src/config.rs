//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Host viewport and device description.
    pub viewport: ViewportConfig,
    /// Hero visibility observation settings.
    pub visibility: VisibilityConfig,
    /// Device classification thresholds and quality caps.
    pub capability: CapabilityConfig,
    /// Scroll-bound animation settings.
    pub scroll: ScrollConfig,
    /// Fixed header behavior.
    pub navigation: NavigationConfig,
    /// Loading overlay settings.
    pub loading: LoadingConfig,
    /// Page geometry used when no host layout is available.
    pub layout: LayoutConfig,
    /// Hero scene content.
    pub hero: HeroConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Viewport configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport width in CSS pixels.
    pub width: u32,
    /// Viewport height in CSS pixels.
    pub height: u32,
    /// Device pixel ratio reported by the host.
    pub device_pixel_ratio: f32,
    /// User agent string used for device classification.
    pub user_agent: String,
}

/// Hero visibility observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Visible-area fraction at which the hero counts as visible.
    pub threshold: f32,
    /// Margin in pixels added around the viewport before intersecting.
    pub root_margin_px: f32,
}

/// Device classification and render quality caps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CapabilityConfig {
    /// Viewports narrower than this are treated as mobile.
    pub mobile_breakpoint_px: u32,
    /// Device pixel ratio cap on mobile.
    pub mobile_dpr_cap: f32,
    /// Device pixel ratio cap on desktop.
    pub desktop_dpr_cap: f32,
    /// User agent fragments (case-insensitive) that mark a mobile device.
    pub mobile_user_agents: Vec<String>,
}

/// Scroll-bound animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Seconds the scrubbed playhead takes to catch up with the scroll position.
    pub scrub_seconds: f32,
}

/// Fixed header configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Scrolling down past this offset hides the header.
    pub hide_after_px: f32,
    /// Offset past which the header switches to its scrolled style.
    pub scrolled_after_px: f32,
}

/// Loading overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoadingConfig {
    /// How long the overlay stays up after mount, in milliseconds.
    pub duration_ms: u64,
}

/// Page geometry, expressed in viewport heights.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the hero section (scroll runway for the 3D timelines).
    pub hero_height_vh: f32,
    /// Height of each content section.
    pub section_height_vh: f32,
}

/// Hero scene content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeroConfig {
    /// Main title rendered as 3D text.
    pub title: String,
    /// Subtitle lines rendered under the title.
    pub subtitle: Vec<String>,
    /// URL of the keyboard model asset.
    pub model_url: String,
    /// Font used for the title.
    pub title_font_url: String,
    /// Font used for the subtitle.
    pub subtitle_font_url: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            device_pixel_ratio: 1.0,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64)".to_string(),
        }
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_px: 100.0,
        }
    }
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            mobile_dpr_cap: 1.5,
            desktop_dpr_cap: 2.0,
            mobile_user_agents: [
                "Android",
                "webOS",
                "iPhone",
                "iPad",
                "iPod",
                "BlackBerry",
                "IEMobile",
                "Opera Mini",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { scrub_seconds: 1.5 }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            hide_after_px: 100.0,
            scrolled_after_px: 50.0,
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self { duration_ms: 2500 }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hero_height_vh: 300.0,
            section_height_vh: 100.0,
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "KHUSHAL".to_string(),
            subtitle: vec![
                "A CREATIVE".to_string(),
                "FRONTEND".to_string(),
                "DEVELOPER".to_string(),
            ],
            model_url: "/keyboard.glb".to_string(),
            title_font_url: "/fonts/Outfit-Bold.ttf".to_string(),
            subtitle_font_url: "/fonts/Outfit-Regular.ttf".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 1280"));
        assert!(ron_str.contains("scrub_seconds: 1.5"));
        assert!(ron_str.contains("mobile_breakpoint_px: 768"));
    }

    #[test]
    fn test_defaults_match_page_constants() {
        let config = Config::default();
        assert_eq!(config.visibility.threshold, 0.1);
        assert_eq!(config.visibility.root_margin_px, 100.0);
        assert_eq!(config.navigation.hide_after_px, 100.0);
        assert_eq!(config.navigation.scrolled_after_px, 50.0);
        assert_eq!(config.loading.duration_ms, 2500);
        assert_eq!(config.capability.mobile_user_agents.len(), 8);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(viewport: (width: 390), scroll: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.viewport.width, 390);
        assert_eq!(config.viewport.height, 720);
        assert_eq!(config.navigation, NavigationConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.viewport.width = 390;
        config.viewport.user_agent = "Mozilla/5.0 (iPhone)".to_string();
        config.scroll.scrub_seconds = 0.5;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.layout.hero_height_vh = 400.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().layout.hero_height_vh, 400.0);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
