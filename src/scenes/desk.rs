//! The fixed desk scene: a wooden surface holding a pencil, a puzzle cube,
//! a tablet, and an earbud case.

use glam::Vec3;

use super::{SceneObject, Transform};
use crate::mesh::{self, Color};

const BROWN: Color = [0.59, 0.29, 0.0, 1.0];
const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
const GRAY: Color = [0.33, 0.33, 0.33, 1.0];
const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
const PURPLE: Color = [1.0, 0.0, 1.0, 1.0];
const RED: Color = [1.0, 0.0, 0.0, 1.0];
const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];

/// Build the six scene objects with their authored transforms
pub fn create_desk_scene() -> Vec<SceneObject> {
    vec![
        SceneObject {
            name: "desk surface",
            mesh: mesh::plane(BROWN),
            transform: Transform {
                scale: Vec3::splat(2.0),
                ..Transform::default()
            },
        },
        SceneObject {
            name: "pencil tip",
            mesh: mesh::pyramid(WHITE),
            transform: Transform {
                translation: Vec3::new(-2.5, -3.86, 2.0),
                rotation_angle: 45.5,
                rotation_axis: Vec3::X,
                scale: Vec3::new(0.25, 0.5, 0.25),
            },
        },
        SceneObject {
            name: "puzzle cube",
            mesh: mesh::cuboid(
                [0.5, 0.5, 0.5],
                // Back, front, left, right, bottom, top
                [GREEN, BLUE, PURPLE, RED, WHITE, YELLOW],
            ),
            transform: Transform {
                translation: Vec3::new(2.5, -3.5, -1.0),
                rotation_angle: 10.0,
                rotation_axis: Vec3::Y,
                scale: Vec3::ONE,
            },
        },
        SceneObject {
            name: "tablet",
            mesh: mesh::cuboid([0.5, 0.25, 0.5], [GRAY, GRAY, GRAY, GRAY, GRAY, BLACK]),
            transform: Transform {
                translation: Vec3::new(0.0, -3.9, 0.0),
                scale: Vec3::new(3.0, 0.5, 5.0),
                ..Transform::default()
            },
        },
        SceneObject {
            name: "pencil body",
            mesh: mesh::cuboid([0.5, 0.25, 0.5], [WHITE; 6]),
            transform: Transform {
                translation: Vec3::new(-2.5, -3.88, 0.25),
                scale: Vec3::new(0.25, 0.5, 3.0),
                ..Transform::default()
            },
        },
        SceneObject {
            name: "earbud case",
            mesh: mesh::cuboid([0.5, 0.25, 0.5], [WHITE; 6]),
            transform: Transform {
                translation: Vec3::new(2.5, -3.84, 0.78),
                rotation_angle: 10.0,
                rotation_axis: Vec3::Y,
                scale: Vec3::new(0.65, 0.65, 1.2),
            },
        },
    ]
}
