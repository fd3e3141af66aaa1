pub mod app;
pub mod camera;
pub mod cli;
pub mod core;
pub mod mesh;
pub mod renderer;
pub mod scenes;
pub mod types;

pub use camera::{Camera, MoveDirection};
pub use scenes::create_desk_scene;
