//! A render surface that draws nothing and records what it was asked to do.

use glam::Vec3;

use crate::capability::RenderSettings;
use crate::gate::{Frameloop, RenderSurface};
use crate::scene::Scene;

/// What the last drawn frame looked like.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub camera_position: Vec3,
    pub model_rotation: Vec3,
    pub model_position: Vec3,
    pub key_light_intensity: f32,
    pub title_y: f32,
}

impl From<&Scene> for FrameSnapshot {
    fn from(scene: &Scene) -> Self {
        Self {
            camera_position: scene.camera.position,
            model_rotation: scene.model.transform.rotation,
            model_position: scene.model.transform.position,
            key_light_intensity: scene.lights.key.intensity,
            title_y: scene.text.title.position.y,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub settings: Option<RenderSettings>,
    pub frameloop: Option<Frameloop>,
    pub frameloop_changes: u32,
    pub redraw_requests: u32,
    pub draws: u32,
    pub last_frame: Option<FrameSnapshot>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for RecordingSurface {
    fn configure(&mut self, settings: &RenderSettings) {
        self.settings = Some(settings.clone());
    }

    fn set_frameloop(&mut self, frameloop: Frameloop) {
        self.frameloop = Some(frameloop);
        self.frameloop_changes += 1;
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn draw(&mut self, scene: &Scene) {
        self.draws += 1;
        self.last_frame = Some(FrameSnapshot::from(scene));
    }
}
