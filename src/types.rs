use glam::{Mat4, Vec3};

// === GPU Data Structures ===

/// Mesh vertex for the model pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x4];

    pub const fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-frame scene uniform (camera, model transform, lights, contact shadow)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    /// xyz: direction toward the light, w: intensity
    pub light: [f32; 4],
    /// x: ambient, y: environment, z: shadow far distance, w: unused
    pub lighting: [f32; 4],
    /// x: ground height, y: opacity, z: scale, w: blur
    pub shadow: [f32; 4],
    /// xyz: model origin in world space, w: unused
    pub model_origin: [f32; 4],
}

impl SceneUniform {
    pub fn new(view_proj: Mat4, model: Mat4, lights: &Lighting, shadow: &ContactShadow) -> Self {
        let normal_matrix = model.inverse().transpose();
        let origin = model.transform_point3(Vec3::ZERO);
        let light_dir = lights.directional_position.normalize_or_zero();

        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: normal_matrix.to_cols_array_2d(),
            light: [light_dir.x, light_dir.y, light_dir.z, lights.directional_intensity],
            lighting: [lights.ambient, lights.environment, shadow.far, 0.0],
            shadow: [shadow.ground_y, shadow.opacity, shadow.scale, shadow.blur],
            model_origin: [origin.x, origin.y, origin.z, 0.0],
        }
    }
}

/// Light rig of the showcase scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub directional_position: Vec3,
    pub directional_intensity: f32,
    /// Strength of the hemispheric "city" environment term
    pub environment: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            directional_position: Vec3::new(5.0, 10.0, 7.5),
            directional_intensity: 1.2,
            environment: 0.6,
        }
    }
}

/// Soft shadow disc under the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactShadow {
    pub ground_y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub blur: f32,
    pub far: f32,
}

impl Default for ContactShadow {
    fn default() -> Self {
        Self {
            ground_y: -1.2,
            opacity: 0.4,
            scale: 10.0,
            blur: 2.5,
            far: 4.5,
        }
    }
}

/// Axis-Aligned Bounding Box
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn empty() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    pub fn grow(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
