use glam::{Mat4, Vec3};

pub const DEFAULT_FOV_Y_DEGREES: f32 = 50.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;

/// Fixed perspective camera looking at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f32,
}

impl Camera {
    pub fn new(position: Vec3, fov_y_degrees: f32) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            fov_y_degrees,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            aspect,
            NEAR_PLANE,
            FAR_PLANE,
        )
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.5, 0.1, 1.0), DEFAULT_FOV_Y_DEGREES)
    }
}
