//! The hero's light rig: ambient fill, a shadow-casting key spot, a rim spot
//! behind the model, and a weak frontal directional fill.
//!
//! The key light is the only light the scroll timelines move.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Uniform light from every direction.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// Shadow map parameters for a shadow-casting light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowSettings {
    /// Square shadow map resolution in texels.
    pub map_size: u32,
    /// Depth bias against shadow acne.
    pub bias: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            map_size: 1024,
            bias: -0.0001,
        }
    }
}

/// A cone light aimed at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    /// Half-angle of the cone in radians.
    pub angle: f32,
    /// Fraction of the cone that is attenuated at the edge, `[0, 1]`.
    pub penumbra: f32,
    pub color: Vec3,
    pub intensity: f32,
    /// Present when the light casts shadows.
    pub shadow: Option<ShadowSettings>,
}

impl SpotLight {
    /// Unit vector from the light toward its target.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Y)
    }

    pub fn casts_shadow(&self) -> bool {
        self.shadow.is_some()
    }

    /// Build the GPU-side uniform from this light's properties.
    pub fn to_uniform(&self) -> SpotLightUniform {
        let dir = self.direction();
        SpotLightUniform {
            position_intensity: [self.position.x, self.position.y, self.position.z, self.intensity],
            direction_cos_angle: [dir.x, dir.y, dir.z, self.angle.cos()],
            color_penumbra: [self.color.x, self.color.y, self.color.z, self.penumbra],
        }
    }
}

/// GPU-side spot light, 48 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SpotLightUniform {
    /// xyz = position, w = intensity.
    pub position_intensity: [f32; 4],
    /// xyz = direction (normalized), w = cosine of the cone half-angle.
    pub direction_cos_angle: [f32; 4],
    /// xyz = color (linear RGB), w = penumbra.
    pub color_penumbra: [f32; 4],
}

/// Directional fill from in front of the model, shining toward the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct FillLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl FillLight {
    /// Normalized direction the light travels.
    pub fn direction(&self) -> Vec3 {
        (-self.position).try_normalize().unwrap_or(Vec3::NEG_Z)
    }
}

/// Every light in the hero scene.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroLights {
    pub ambient: AmbientLight,
    /// Shadow-casting key light, driven by the lights timeline.
    pub key: SpotLight,
    pub rim: SpotLight,
    pub fill: FillLight,
}

impl HeroLights {
    /// The rig with shadows enabled or disabled on the key light.
    pub fn new(shadows: bool) -> Self {
        let mut lights = Self::default();
        if !shadows {
            lights.key.shadow = None;
        }
        lights
    }
}

impl Default for HeroLights {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Vec3::ONE,
                intensity: 0.3,
            },
            key: SpotLight {
                position: Vec3::new(5.0, 12.0, 5.0),
                target: Vec3::ZERO,
                angle: 0.4,
                penumbra: 1.0,
                color: Vec3::ONE,
                intensity: 6.0,
                shadow: Some(ShadowSettings::default()),
            },
            rim: SpotLight {
                position: Vec3::new(-8.0, 8.0, -8.0),
                target: Vec3::ZERO,
                angle: 0.5,
                penumbra: 1.0,
                color: Vec3::ONE,
                intensity: 15.0,
                shadow: None,
            },
            fill: FillLight {
                position: Vec3::new(0.0, 5.0, 10.0),
                color: Vec3::ONE,
                intensity: 0.2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rig() {
        let lights = HeroLights::default();
        assert_eq!(lights.ambient.intensity, 0.3);
        assert_eq!(lights.key.position, Vec3::new(5.0, 12.0, 5.0));
        assert_eq!(lights.key.intensity, 6.0);
        assert_eq!(lights.key.shadow, Some(ShadowSettings { map_size: 1024, bias: -0.0001 }));
        assert_eq!(lights.rim.intensity, 15.0);
        assert!(!lights.rim.casts_shadow());
        assert_eq!(lights.fill.intensity, 0.2);
    }

    #[test]
    fn test_shadows_off_drops_key_shadow() {
        assert!(!HeroLights::new(false).key.casts_shadow());
        assert!(HeroLights::new(true).key.casts_shadow());
    }

    #[test]
    fn test_directions_point_at_origin() {
        let lights = HeroLights::default();
        let key = lights.key.direction();
        assert!((key.length() - 1.0).abs() < 1e-5);
        assert!((key + lights.key.position.normalize()).length() < 1e-5);
        assert!(lights.fill.direction().y < 0.0);
        assert!(lights.fill.direction().z < 0.0);
    }

    #[test]
    fn test_spot_uniform_layout() {
        assert_eq!(std::mem::size_of::<SpotLightUniform>(), 48);
        let uniform = HeroLights::default().key.to_uniform();
        assert_eq!(uniform.position_intensity, [5.0, 12.0, 5.0, 6.0]);
        assert!((uniform.direction_cos_angle[3] - 0.4f32.cos()).abs() < 1e-6);
        assert_eq!(uniform.color_penumbra[3], 1.0);
    }
}
