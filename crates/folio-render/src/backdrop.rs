//! Ground backdrop: a large dark plane under the model whose alpha fades out
//! in a soft half-disc around the bottom-center of its UV space.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// UV point the fade is centered on.
const FADE_CENTER: Vec2 = Vec2::new(0.5, 0.0);
const FADE_INNER: f32 = 0.48;
const FADE_OUTER: f32 = 0.5;

/// WGSL source for the backdrop plane. The fragment stage mirrors
/// [`backdrop_alpha`].
pub const BACKDROP_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct BackdropUniform {
    model: mat4x4<f32>,
    color_opacity: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@group(1) @binding(0)
var<uniform> backdrop: BackdropUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = camera.view_proj * backdrop.model * vec4<f32>(in.position, 1.0);
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dist = distance(in.uv, vec2<f32>(0.5, 0.0));
    let alpha = 1.0 - smoothstep(0.48, 0.5, dist);
    return vec4<f32>(backdrop.color_opacity.rgb, alpha * backdrop.color_opacity.a);
}
"#;

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Alpha of the backdrop at `uv`, before the plane's opacity is applied.
pub fn backdrop_alpha(uv: Vec2) -> f32 {
    1.0 - smoothstep(FADE_INNER, FADE_OUTER, uv.distance(FADE_CENTER))
}

/// The backdrop plane in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct BackdropPlane {
    pub position: Vec3,
    /// Width and height in world units.
    pub size: Vec2,
    pub color: Vec3,
    pub opacity: f32,
}

impl Default for BackdropPlane {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, -10.0, -5.0),
            size: Vec2::new(40.0, 20.0),
            color: Vec3::ZERO,
            opacity: 1.0,
        }
    }
}

impl BackdropPlane {
    /// Final alpha at `uv`.
    pub fn alpha_at(&self, uv: Vec2) -> f32 {
        backdrop_alpha(uv) * self.opacity
    }

    /// Model matrix scaling a unit quad to the plane's size.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(self.size.extend(1.0))
    }

    pub fn to_uniform(&self) -> BackdropUniform {
        BackdropUniform {
            model: self.model_matrix().to_cols_array_2d(),
            color_opacity: [self.color.x, self.color.y, self.color.z, self.opacity],
        }
    }
}

/// GPU-side backdrop data, 80 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct BackdropUniform {
    pub model: [[f32; 4]; 4],
    /// xyz = color, w = opacity.
    pub color_opacity: [f32; 4],
}
