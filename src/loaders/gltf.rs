use anyhow::{Context, Result};
use glam::{Mat3, Mat4, Vec3};
use std::path::Path;

use crate::types::{Vertex, AABB};

/// Fallback surface color when a primitive has no material
const DEFAULT_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 1.0];

/// Indexed triangle mesh in model space, ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub bounds: AABB,
}

impl ModelMesh {
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            bounds: AABB::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn from_document(document: &gltf::Document, buffers: &[gltf::buffer::Data]) -> Result<Self> {
        let mut mesh = Self::empty();

        for scene in document.scenes() {
            log::debug!("Processing scene: {:?}", scene.name());
            for node in scene.nodes() {
                mesh.append_node(&node, buffers, &Mat4::IDENTITY)?;
            }
        }

        Ok(mesh)
    }

    /// Recursively appends a node and its children
    fn append_node(
        &mut self,
        node: &gltf::Node,
        buffers: &[gltf::buffer::Data],
        parent_transform: &Mat4,
    ) -> Result<()> {
        let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
        let global_transform = *parent_transform * local_transform;

        if let Some(mesh) = node.mesh() {
            self.append_mesh(&mesh, buffers, &global_transform)?;
        }

        for child in node.children() {
            self.append_node(&child, buffers, &global_transform)?;
        }

        Ok(())
    }

    fn append_mesh(
        &mut self,
        mesh: &gltf::Mesh,
        buffers: &[gltf::buffer::Data],
        transform: &Mat4,
    ) -> Result<()> {
        let normal_matrix = Mat3::from_mat4(*transform).inverse().transpose();

        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "Skipping {:?} primitive in mesh {:?}",
                    primitive.mode(),
                    mesh.name()
                );
                continue;
            }

            let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &d[..]));

            let positions: Vec<Vec3> = reader
                .read_positions()
                .context("Mesh primitive has no positions")?
                .map(|pos| transform.transform_point3(Vec3::from_array(pos)))
                .collect();

            let indices: Vec<u32> = match reader.read_indices() {
                Some(indices) => indices.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };

            let normals: Vec<Vec3> = match reader.read_normals() {
                Some(normals) => normals
                    .map(|n| (normal_matrix * Vec3::from_array(n)).normalize_or_zero())
                    .collect(),
                None => smooth_normals(&positions, &indices),
            };

            let base_color = primitive
                .material()
                .index()
                .map(|_| primitive.material().pbr_metallic_roughness().base_color_factor())
                .unwrap_or(DEFAULT_COLOR);

            let colors: Vec<[f32; 4]> = match reader.read_colors(0) {
                Some(colors) => colors
                    .into_rgba_f32()
                    .map(|c| {
                        [
                            c[0] * base_color[0],
                            c[1] * base_color[1],
                            c[2] * base_color[2],
                            c[3] * base_color[3],
                        ]
                    })
                    .collect(),
                None => vec![base_color; positions.len()],
            };

            let base = self.vertices.len() as u32;
            for ((position, normal), color) in positions.iter().zip(&normals).zip(&colors) {
                self.bounds.grow(*position);
                self.vertices
                    .push(Vertex::new(position.to_array(), normal.to_array(), *color));
            }

            let vertex_count = positions.len() as u32;
            for triangle in indices.chunks_exact(3) {
                if triangle.iter().all(|&i| i < vertex_count) {
                    self.indices.extend(triangle.iter().map(|&i| base + i));
                }
            }
        }

        Ok(())
    }
}

/// Area-weighted vertex normals for meshes that ship without them
fn smooth_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|i| i as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    normals.into_iter().map(Vec3::normalize_or_zero).collect()
}

/// Loads a glTF or GLB file into a single triangle mesh
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelMesh> {
    let path = path.as_ref();
    log::info!("Loading glTF file: {:?}", path);

    let (document, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    let mesh = ModelMesh::from_document(&document, &buffers)?;
    log::info!(
        "Loaded {:?}: {} meshes, {} vertices, {} triangles",
        path,
        document.meshes().count(),
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    if !mesh.bounds.is_empty() {
        log::info!(
            "Model bounds: center {:?}, size {:?}",
            mesh.bounds.center(),
            mesh.bounds.size()
        );
    }
    Ok(mesh)
}

/// Loads a glTF document from memory (GLB or JSON with embedded buffers)
pub fn load_model_from_slice(bytes: &[u8]) -> Result<ModelMesh> {
    let (document, buffers, _images) =
        gltf::import_slice(bytes).context("Failed to parse glTF data")?;
    ModelMesh::from_document(&document, &buffers)
}

/// Loads the model, degrading to an empty mesh when the asset is unusable
pub fn load_model_or_empty(path: impl AsRef<Path>) -> ModelMesh {
    match load_model(path) {
        Ok(mesh) => {
            if mesh.is_empty() {
                log::warn!("Model contains no triangles");
            }
            mesh
        }
        Err(e) => {
            log::warn!("Showing page without model: {:#}", e);
            ModelMesh::empty()
        }
    }
}
