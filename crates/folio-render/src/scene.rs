//! Scene graph for the hero: keyboard model, lights, camera, backdrop and the
//! 3D title text.
//!
//! [`Scene`] is the sink the hero timelines write into. Element targets belong
//! to the page and are ignored here.

use folio_anim::{Property, PropertySink, SceneNode, Target};
use folio_config::HeroConfig;
use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::backdrop::BackdropPlane;
use crate::camera::Camera;
use crate::capability::RenderSettings;
use crate::lights::HeroLights;

/// Clear color `#0a0a0a`.
const BACKGROUND: Vec3 = Vec3::new(10.0 / 255.0, 10.0 / 255.0, 10.0 / 255.0);

/// Position, Euler rotation (radians, XYZ order) and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// The keyboard model.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelNode {
    pub asset_url: String,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    /// Lower bound applied to every material's authored roughness.
    pub min_roughness: f32,
}

impl ModelNode {
    /// The model in its opening pose.
    pub fn new(asset_url: impl Into<String>) -> Self {
        Self {
            asset_url: asset_url.into(),
            transform: Transform {
                position: Vec3::new(0.8, -0.5, 0.0),
                rotation: Vec3::new(0.1, -0.4, 0.0),
                scale: Vec3::splat(5.5),
            },
            cast_shadow: true,
            receive_shadow: true,
            min_roughness: 0.4,
        }
    }

    /// Roughness a material ends up with after the floor is applied.
    pub fn material_roughness(&self, authored: f32) -> f32 {
        authored.max(self.min_roughness)
    }
}

/// A line of 3D text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub font_url: String,
    /// Position relative to the parent text group.
    pub position: Vec3,
    pub font_size: f32,
    pub letter_spacing: f32,
    pub opacity: f32,
    pub emissive_intensity: f32,
}

/// Title and subtitle block floating in front of the model.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroText {
    pub group_position: Vec3,
    pub title: TextNode,
    pub subtitle: Vec<TextNode>,
}

impl HeroText {
    const SUBTITLE_ORIGIN: Vec3 = Vec3::new(-2.28, 0.0, 0.5);
    const SUBTITLE_LINE_HEIGHT: f32 = 0.18;

    pub fn new(hero: &HeroConfig) -> Self {
        let title = TextNode {
            text: hero.title.clone(),
            font_url: hero.title_font_url.clone(),
            position: Vec3::new(0.0, 0.7, 0.0),
            font_size: 1.2,
            letter_spacing: -0.05,
            opacity: 1.0,
            emissive_intensity: 0.2,
        };
        let subtitle = hero
            .subtitle
            .iter()
            .enumerate()
            .map(|(i, line)| TextNode {
                text: line.clone(),
                font_url: hero.subtitle_font_url.clone(),
                position: Self::SUBTITLE_ORIGIN - Vec3::Y * (Self::SUBTITLE_LINE_HEIGHT * i as f32),
                font_size: 0.15,
                letter_spacing: 0.2,
                opacity: 0.8,
                emissive_intensity: 0.1,
            })
            .collect();
        Self {
            group_position: Vec3::new(0.0, 0.0, 3.0),
            title,
            subtitle,
        }
    }
}

/// Tone mapping applied when resolving the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToneMapping {
    AcesFilmic { exposure: f32 },
}

/// Everything the render surface draws for the hero.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub background: Vec3,
    pub tone_mapping: ToneMapping,
    pub environment_intensity: f32,
    pub shadows: bool,
    pub camera: Camera,
    pub model: ModelNode,
    pub lights: HeroLights,
    pub backdrop: BackdropPlane,
    pub text: HeroText,
}

impl Scene {
    /// Assemble the hero scene for a capability tier.
    pub fn assemble(settings: &RenderSettings, hero: &HeroConfig) -> Self {
        log::debug!(
            "Assembling hero scene: model {}, shadows {}",
            hero.model_url,
            settings.shadows
        );
        Self {
            background: BACKGROUND,
            tone_mapping: ToneMapping::AcesFilmic { exposure: 1.4 },
            environment_intensity: settings.environment_intensity,
            shadows: settings.shadows,
            camera: Camera::default(),
            model: ModelNode::new(hero.model_url.clone()),
            lights: HeroLights::new(settings.shadows),
            backdrop: BackdropPlane::default(),
            text: HeroText::new(hero),
        }
    }

    fn write_axis(v: &mut Vec3, property: Property, value: f32) -> bool {
        match property {
            Property::PositionX => v.x = value,
            Property::PositionY => v.y = value,
            Property::PositionZ => v.z = value,
            _ => return false,
        }
        true
    }
}

impl PropertySink for Scene {
    fn apply(&mut self, target: &Target, property: Property, value: f32) {
        let Target::Scene(node) = target else {
            return;
        };

        let handled = match (node, property) {
            (SceneNode::Model, Property::RotationX) => {
                self.model.transform.rotation.x = value;
                true
            }
            (SceneNode::Model, Property::RotationY) => {
                self.model.transform.rotation.y = value;
                true
            }
            (SceneNode::Model, Property::RotationZ) => {
                self.model.transform.rotation.z = value;
                true
            }
            (SceneNode::Model, Property::Scale) => {
                self.model.transform.scale = Vec3::splat(value);
                true
            }
            (SceneNode::Model, p) => Self::write_axis(&mut self.model.transform.position, p, value),
            (SceneNode::Camera, Property::Fov) => {
                self.camera.fov_deg = value;
                true
            }
            (SceneNode::Camera, p) => Self::write_axis(&mut self.camera.position, p, value),
            (SceneNode::KeyLight, Property::Intensity) => {
                self.lights.key.intensity = value;
                true
            }
            (SceneNode::KeyLight, p) => Self::write_axis(&mut self.lights.key.position, p, value),
            (SceneNode::HeroTitle, Property::Opacity) => {
                self.text.title.opacity = value;
                true
            }
            (SceneNode::HeroTitle, p) => Self::write_axis(&mut self.text.title.position, p, value),
        };

        if !handled {
            log::trace!("Scene ignores {property:?} on {node:?}");
        }
    }
}
