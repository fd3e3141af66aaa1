use glam::{Mat4, Vec3};

use desk_scene::camera::{Camera, MoveDirection, PITCH_LIMIT, ZOOM_MAX, ZOOM_MIN};

const EPS: f32 = 1e-5;

fn camera_at(yaw: f32, pitch: f32) -> Camera {
    let mut camera = Camera::new(Vec3::ZERO);
    camera.yaw = yaw;
    camera.pitch = pitch;
    // Zero-offset movement just rederives the basis
    camera.process_mouse_movement(0.0, 0.0, false);
    camera
}

#[cfg(test)]
mod basis_tests {
    use super::*;

    #[test]
    fn basis_is_orthonormal_across_orientation_range() {
        let mut yaw = -180.0 + 7.5;
        while yaw <= 180.0 {
            let mut pitch = -88.0;
            while pitch < 89.0 {
                let camera = camera_at(yaw, pitch);

                assert!(
                    (camera.front.length() - 1.0).abs() < EPS,
                    "front not unit at yaw {} pitch {}",
                    yaw,
                    pitch
                );
                assert!((camera.right.length() - 1.0).abs() < EPS);
                assert!((camera.up.length() - 1.0).abs() < EPS);

                assert!(camera.front.dot(camera.right).abs() < EPS);
                assert!(camera.front.dot(camera.up).abs() < EPS);
                assert!(camera.right.dot(camera.up).abs() < EPS);

                pitch += 11.0;
            }
            yaw += 15.0;
        }
    }

    #[test]
    fn default_orientation_faces_negative_z() {
        let camera = Camera::new(Vec3::ZERO);
        assert!((camera.front - Vec3::NEG_Z).length() < EPS);
        assert!((camera.right - Vec3::X).length() < EPS);
        assert!((camera.up - Vec3::Y).length() < EPS);
    }
}

#[cfg(test)]
mod mouse_tests {
    use super::*;

    #[test]
    fn pitch_clamps_at_upper_limit() {
        let mut camera = Camera::new(Vec3::ZERO);

        // Many small deltas walking past the limit
        for _ in 0..2000 {
            camera.process_mouse_movement(0.0, 1.0, true);
        }
        assert_eq!(camera.pitch, PITCH_LIMIT);
    }

    #[test]
    fn pitch_clamps_single_oversized_delta() {
        let mut camera = Camera::new(Vec3::ZERO);

        camera.process_mouse_movement(0.0, 1.0e6, true);
        assert_eq!(camera.pitch, PITCH_LIMIT);

        camera.process_mouse_movement(0.0, -1.0e7, true);
        assert_eq!(camera.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn unconstrained_pitch_may_exceed_limit() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_movement(0.0, 1200.0, false);
        assert!(camera.pitch > PITCH_LIMIT);
    }

    #[test]
    fn yaw_accumulates_scaled_by_sensitivity() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_movement(50.0, 0.0, true);
        assert!((camera.yaw - (-90.0 + 50.0 * camera.mouse_sensitivity)).abs() < EPS);
    }
}

#[cfg(test)]
mod scroll_tests {
    use super::*;

    #[test]
    fn zoom_stays_bounded_for_any_scroll_sequence() {
        let mut camera = Camera::new(Vec3::ZERO);

        for delta in [3.0, -7.0, 100.0, -0.5, 44.0, -200.0, 1.0] {
            camera.process_mouse_scroll(delta);
            assert!(camera.zoom >= ZOOM_MIN && camera.zoom <= ZOOM_MAX);
        }
    }

    #[test]
    fn oversized_scroll_deltas_clamp_to_each_bound() {
        // Start at zoom 45 and overshoot both ends in turn
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(camera.zoom, 45.0);

        camera.process_mouse_scroll(50.0);
        assert_eq!(camera.zoom, 1.0);

        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom, 45.0);
    }

    #[test]
    fn zoom_moves_opposite_to_scroll_direction() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_scroll(5.0);
        assert_eq!(camera.zoom, 40.0);
    }
}

#[cfg(test)]
mod movement_tests {
    use super::*;

    #[test]
    fn forward_then_backward_returns_to_start() {
        let mut camera = camera_at(37.0, -12.0);
        camera.position = Vec3::new(1.0, 2.0, 3.0);
        let start = camera.position;

        camera.process_keyboard(MoveDirection::Forward, 0.25);
        camera.process_keyboard(MoveDirection::Backward, 0.25);

        assert!((camera.position - start).length() < EPS);
    }

    #[test]
    fn left_right_and_up_down_also_round_trip() {
        let mut camera = camera_at(123.0, 45.0);
        let start = camera.position;

        camera.process_keyboard(MoveDirection::Left, 0.1);
        camera.process_keyboard(MoveDirection::Right, 0.1);
        camera.process_keyboard(MoveDirection::Up, 0.7);
        camera.process_keyboard(MoveDirection::Down, 0.7);

        assert!((camera.position - start).length() < EPS);
    }

    #[test]
    fn vertical_movement_follows_world_up_not_view_up() {
        let mut camera = camera_at(-90.0, 60.0);
        camera.process_keyboard(MoveDirection::Up, 1.0);

        assert_eq!(camera.position.x, 0.0);
        assert_eq!(camera.position.z, 0.0);
        assert!((camera.position.y - camera.movement_speed).abs() < EPS);
    }

    #[test]
    fn displacement_scales_with_delta_time() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(MoveDirection::Forward, 2.0);
        assert!((camera.position.z + 2.0 * camera.movement_speed).abs() < EPS);
    }

    #[test]
    fn negative_delta_moves_the_opposite_way() {
        // Permissive by design: negative time reverses the displacement
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(MoveDirection::Forward, -1.0);
        assert!(camera.position.z > 0.0);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut camera = Camera::new(Vec3::new(4.0, 5.0, 6.0));
        camera.process_keyboard(MoveDirection::Forward, 0.0);
        assert_eq!(camera.position, Vec3::new(4.0, 5.0, 6.0));
    }
}

#[cfg(test)]
mod view_matrix_tests {
    use super::*;

    fn assert_mat4_eq(a: Mat4, b: Mat4) {
        let (a, b) = (a.to_cols_array(), b.to_cols_array());
        for i in 0..16 {
            assert!(
                (a[i] - b[i]).abs() < EPS,
                "element {} differs: {} vs {}",
                i,
                a[i],
                b[i]
            );
        }
    }

    #[test]
    fn default_state_matches_reference_look_at() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0));
        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 9.0),
            Vec3::Y,
        );

        assert_mat4_eq(camera.view_matrix(), expected);
    }

    #[test]
    fn view_matrix_maps_position_to_eye_origin() {
        let camera = camera_at(25.0, -40.0);
        let eye = camera.view_matrix().transform_point3(camera.position);
        assert!(eye.length() < EPS);
    }

    #[test]
    fn view_matrix_looks_down_negative_eye_z() {
        let camera = camera_at(200.0, 10.0);
        let ahead = camera
            .view_matrix()
            .transform_point3(camera.position + camera.front);
        assert!((ahead - Vec3::NEG_Z).length() < EPS);
    }
}
