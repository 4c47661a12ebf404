pub mod gltf;

pub use gltf::{load_model, load_model_from_slice, load_model_or_empty, ModelMesh};
