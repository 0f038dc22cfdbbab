//! Mouse parallax: the camera drifts toward the pointer while the hero is on
//! screen and keeps looking at the origin.

use glam::{Vec2, Vec3};

use crate::camera::Camera;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxRig {
    /// World units of camera offset per unit of normalized pointer offset.
    pub strength: f32,
    /// Fraction of the remaining distance covered each frame.
    pub smoothing: f32,
}

impl Default for ParallaxRig {
    fn default() -> Self {
        Self {
            strength: 0.4,
            smoothing: 0.05,
        }
    }
}

impl ParallaxRig {
    /// Ease the camera's x/y toward the pointer.
    ///
    /// `pointer` is in normalized device coordinates, `[-1, 1]` on both axes.
    /// Nothing happens while the hero is hidden.
    pub fn update(&self, camera: &mut Camera, pointer: Vec2, visible: bool) {
        if !visible {
            return;
        }
        let goal = Vec3::new(pointer.x * self.strength, pointer.y * self.strength, camera.position.z);
        camera.position = camera.position.lerp(goal, self.smoothing);
        camera.look_at(Vec3::ZERO);
    }
}
