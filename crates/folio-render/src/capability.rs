//! Device capability probing and the quality tier it selects.
//!
//! Two independent questions are answered at mount time:
//!
//! 1. Can we get a GL-class drawing context at all? ([`GraphicsProbe`])
//! 2. Is this a low-power device? ([`classify`])
//!
//! The answers are fixed for the session; resizing across the breakpoint does
//! not re-tier.

use folio_config::{CapabilityConfig, ViewportConfig};
use thiserror::Error;

/// Errors from probing for a graphics context.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("no GL-capable adapter available: {0}")]
    NoAdapter(String),
}

/// What the probe found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterSummary {
    pub name: String,
    pub backend: String,
}

/// Attempts to acquire a drawing context suitable for the hero scene.
pub trait GraphicsProbe {
    fn probe(&self) -> Result<AdapterSummary, ProbeError>;
}

/// Requests a GL-backend adapter through wgpu.
///
/// GL is the backend the hero targets in browsers, so a machine that only has
/// Vulkan or Metal still counts as unsupported here.
#[derive(Clone, Copy, Debug, Default)]
pub struct WgpuGlProbe;

impl GraphicsProbe for WgpuGlProbe {
    fn probe(&self) -> Result<AdapterSummary, ProbeError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .map_err(|e| ProbeError::NoAdapter(e.to_string()))?;

        let info = adapter.get_info();
        log::info!("GL adapter: {} ({:?}, {:?})", info.name, info.backend, info.device_type);
        Ok(AdapterSummary {
            name: info.name,
            backend: format!("{:?}", info.backend),
        })
    }
}

/// A probe with a predetermined answer, for hosts that already know whether
/// GL is available.
#[derive(Clone, Debug)]
pub struct FixedProbe {
    adapter: Option<AdapterSummary>,
}

impl FixedProbe {
    pub fn supported(name: impl Into<String>) -> Self {
        Self {
            adapter: Some(AdapterSummary {
                name: name.into(),
                backend: "Gl".to_string(),
            }),
        }
    }

    pub fn unsupported() -> Self {
        Self { adapter: None }
    }
}

impl GraphicsProbe for FixedProbe {
    fn probe(&self) -> Result<AdapterSummary, ProbeError> {
        self.adapter
            .clone()
            .ok_or_else(|| ProbeError::NoAdapter("probe configured as unsupported".to_string()))
    }
}

/// The inputs classification looks at.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceProfile {
    /// Viewport width in CSS pixels.
    pub viewport_width: u32,
    pub device_pixel_ratio: f32,
    pub user_agent: String,
}

impl From<&ViewportConfig> for DeviceProfile {
    fn from(viewport: &ViewportConfig) -> Self {
        Self {
            viewport_width: viewport.width,
            device_pixel_ratio: viewport.device_pixel_ratio,
            user_agent: viewport.user_agent.clone(),
        }
    }
}

/// Coarse device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityTier {
    MobileLowPower,
    DesktopHighPerformance,
}

/// Low-power when the viewport is narrower than the breakpoint or the user
/// agent names a known mobile platform (case-insensitive).
pub fn classify(profile: &DeviceProfile, config: &CapabilityConfig) -> CapabilityTier {
    let narrow = profile.viewport_width < config.mobile_breakpoint_px;
    let agent = profile.user_agent.to_lowercase();
    let mobile_agent = config
        .mobile_user_agents
        .iter()
        .any(|name| agent.contains(&name.to_lowercase()));

    if narrow || mobile_agent {
        CapabilityTier::MobileLowPower
    } else {
        CapabilityTier::DesktopHighPerformance
    }
}

/// Renderer configuration chosen by the tier.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub tier: CapabilityTier,
    /// Effective pixel ratio, never above the tier's cap.
    pub pixel_ratio: f32,
    pub antialias: bool,
    pub shadows: bool,
    pub power_preference: wgpu::PowerPreference,
    /// Intensity of the image-based environment light.
    pub environment_intensity: f32,
}

impl RenderSettings {
    pub fn for_tier(tier: CapabilityTier, device_pixel_ratio: f32, config: &CapabilityConfig) -> Self {
        match tier {
            CapabilityTier::MobileLowPower => Self {
                tier,
                pixel_ratio: config.mobile_dpr_cap.min(device_pixel_ratio),
                antialias: false,
                shadows: false,
                power_preference: wgpu::PowerPreference::LowPower,
                environment_intensity: 0.4,
            },
            CapabilityTier::DesktopHighPerformance => Self {
                tier,
                pixel_ratio: config.desktop_dpr_cap.min(device_pixel_ratio),
                antialias: true,
                shadows: true,
                power_preference: wgpu::PowerPreference::HighPerformance,
                environment_intensity: 0.6,
            },
        }
    }

    /// Classify `profile` and pick its settings.
    pub fn detect(profile: &DeviceProfile, config: &CapabilityConfig) -> Self {
        let tier = classify(profile, config);
        let settings = Self::for_tier(tier, profile.device_pixel_ratio, config);
        log::info!(
            "Capability tier {:?}: dpr {}, antialias {}, shadows {}",
            settings.tier,
            settings.pixel_ratio,
            settings.antialias,
            settings.shadows
        );
        settings
    }
}
