mod desk;

pub use desk::create_desk_scene;

use glam::{Mat4, Vec3};

use crate::mesh::MeshData;

/// Per-object placement: model matrix is translation * rotation * scale
///
/// The rotation angle is consumed as-is in radians, matching the literal
/// values the scene was authored with.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation_angle: f32,
    pub rotation_axis: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let rotation = if self.rotation_angle == 0.0 {
            Mat4::IDENTITY
        } else {
            Mat4::from_axis_angle(self.rotation_axis.normalize(), self.rotation_angle)
        };

        Mat4::from_translation(self.translation) * rotation * Mat4::from_scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_angle: 0.0,
            rotation_axis: Vec3::Y,
            scale: Vec3::ONE,
        }
    }
}

/// A placed mesh in the fixed scene
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: &'static str,
    pub mesh: MeshData,
    pub transform: Transform,
}
