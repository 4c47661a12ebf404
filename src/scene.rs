use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::camera::Camera;
use crate::showcase::StepData;
use crate::types::{ContactShadow, Lighting, SceneUniform};

/// Static part of the showcase scene: camera, lights, shadow and model scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseScene {
    pub camera: Camera,
    pub lighting: Lighting,
    pub shadow: ContactShadow,
    pub model_scale: f32,
}

impl ShowcaseScene {
    pub fn new(model_scale: f32) -> Self {
        Self {
            camera: Camera::default(),
            lighting: Lighting::default(),
            shadow: ContactShadow::default(),
            model_scale,
        }
    }

    /// Uniform for the interpolated pose at the given aspect ratio
    pub fn uniform(&self, step: &StepData, aspect: f32) -> SceneUniform {
        SceneUniform::new(
            self.camera.view_projection(aspect),
            model_transform(step.rotation, step.position, self.model_scale),
            &self.lighting,
            &self.shadow,
        )
    }
}

/// Translation * rotation (intrinsic XYZ Euler) * uniform scale
pub fn model_transform(rotation: Vec3, position: Vec3, scale: f32) -> Mat4 {
    let rotation = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
    Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position)
}
