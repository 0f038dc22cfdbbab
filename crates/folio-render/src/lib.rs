//! Scene-side half of the hero: capability probing and quality tiers, the
//! scene graph the timelines drive, the backdrop shader, the render loop gate,
//! and the mouse-parallax camera rig.
//!
//! Actual drawing happens behind [`RenderSurface`]; this crate decides what is
//! drawn and when.

pub mod backdrop;
pub mod camera;
pub mod capability;
pub mod gate;
pub mod headless;
pub mod lights;
pub mod rig;
pub mod scene;

pub use backdrop::{BACKDROP_SHADER_SOURCE, BackdropPlane, BackdropUniform, backdrop_alpha};
pub use camera::{Camera, CameraUniform};
pub use capability::{
    AdapterSummary, CapabilityTier, DeviceProfile, FixedProbe, GraphicsProbe, ProbeError,
    RenderSettings, WgpuGlProbe, classify,
};
pub use gate::{Frameloop, RenderLoopGate, RenderSurface};
pub use headless::{FrameSnapshot, RecordingSurface};
pub use lights::{AmbientLight, FillLight, HeroLights, ShadowSettings, SpotLight, SpotLightUniform};
pub use rig::ParallaxRig;
pub use scene::{HeroText, ModelNode, Scene, TextNode, ToneMapping, Transform};
