pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod loaders;
pub mod renderer;
pub mod scene;
pub mod showcase;
pub mod types;
