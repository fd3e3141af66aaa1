use std::collections::HashSet;

use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::MoveDirection;

/// Pixel-precise wheels report in pixels; one "line" of scroll is roughly
/// this many of them.
const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

/// Bridges winit window events to per-frame camera input
///
/// Winit delivers key edges, not held state, so movement keys are latched
/// here and drained by the frame loop. Cursor motion arrives as absolute
/// positions; the first event only seeds the last-known position so the
/// initial delta is never computed against garbage.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashSet<MoveDirection>,
    held_vec: Vec<MoveDirection>,
    last_cursor: Option<(f32, f32)>,
    mouse_delta: (f32, f32),
    scroll_delta: f32,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update state from a window event
    pub fn process_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(direction) = Self::keycode_to_direction(keycode) {
                        self.set_held(direction, event.state.is_pressed());
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.scroll_delta += y,
                MouseScrollDelta::PixelDelta(pos) => {
                    self.scroll_delta += pos.y as f32 / PIXELS_PER_SCROLL_LINE;
                }
            },
            WindowEvent::MouseInput { state, button, .. } => {
                Self::log_mouse_button(*button, *state);
            }
            _ => {}
        }
    }

    /// Movement directions currently held down
    pub fn held_directions(&self) -> &[MoveDirection] {
        &self.held_vec
    }

    /// Accumulated cursor motion since the last take, y inverted to
    /// camera convention (window y grows downward)
    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Accumulated scroll lines since the last take
    pub fn take_scroll_delta(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }

    fn set_held(&mut self, direction: MoveDirection, pressed: bool) {
        if pressed {
            if self.held.insert(direction) {
                self.held_vec.push(direction);
            }
        } else if self.held.remove(&direction) {
            self.held_vec.retain(|&d| d != direction);
        }
    }

    fn cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((last_x, last_y)) = self.last_cursor {
            self.mouse_delta.0 += x - last_x;
            self.mouse_delta.1 += last_y - y;
        }
        self.last_cursor = Some((x, y));
    }

    fn keycode_to_direction(keycode: KeyCode) -> Option<MoveDirection> {
        match keycode {
            KeyCode::KeyW => Some(MoveDirection::Forward),
            KeyCode::KeyS => Some(MoveDirection::Backward),
            KeyCode::KeyA => Some(MoveDirection::Left),
            KeyCode::KeyD => Some(MoveDirection::Right),
            KeyCode::KeyQ => Some(MoveDirection::Up),
            KeyCode::KeyE => Some(MoveDirection::Down),
            _ => None,
        }
    }

    fn log_mouse_button(button: MouseButton, state: ElementState) {
        let action = if state.is_pressed() {
            "pressed"
        } else {
            "released"
        };
        log::debug!("mouse button {:?} {}", button, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_quiescent() {
        let mut tracker = InputTracker::new();
        assert!(tracker.held_directions().is_empty());
        assert_eq!(tracker.take_mouse_delta(), (0.0, 0.0));
        assert_eq!(tracker.take_scroll_delta(), 0.0);
    }

    #[test]
    fn held_key_latches_until_release() {
        let mut tracker = InputTracker::new();

        tracker.set_held(MoveDirection::Forward, true);
        tracker.set_held(MoveDirection::Forward, true); // key repeat
        assert_eq!(tracker.held_directions(), &[MoveDirection::Forward]);

        tracker.set_held(MoveDirection::Forward, false);
        assert!(tracker.held_directions().is_empty());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = InputTracker::new();
        tracker.set_held(MoveDirection::Left, false);
        assert!(tracker.held_directions().is_empty());
    }

    #[test]
    fn first_cursor_event_produces_no_delta() {
        let mut tracker = InputTracker::new();

        tracker.cursor_moved(400.0, 300.0);
        assert_eq!(tracker.take_mouse_delta(), (0.0, 0.0));

        tracker.cursor_moved(410.0, 290.0);
        // y inverted: cursor moved up on screen, pitch delta is positive
        assert_eq!(tracker.take_mouse_delta(), (10.0, 10.0));
    }

    #[test]
    fn cursor_deltas_accumulate_between_takes() {
        let mut tracker = InputTracker::new();

        tracker.cursor_moved(0.0, 0.0);
        tracker.cursor_moved(5.0, 0.0);
        tracker.cursor_moved(12.0, 0.0);

        assert_eq!(tracker.take_mouse_delta(), (12.0, 0.0));
        assert_eq!(tracker.take_mouse_delta(), (0.0, 0.0), "take must drain");
    }

    #[test]
    fn all_six_directions_are_mapped() {
        let cases = [
            (KeyCode::KeyW, MoveDirection::Forward),
            (KeyCode::KeyS, MoveDirection::Backward),
            (KeyCode::KeyA, MoveDirection::Left),
            (KeyCode::KeyD, MoveDirection::Right),
            (KeyCode::KeyQ, MoveDirection::Up),
            (KeyCode::KeyE, MoveDirection::Down),
        ];

        for (keycode, direction) in cases {
            assert_eq!(InputTracker::keycode_to_direction(keycode), Some(direction));
        }
        assert_eq!(InputTracker::keycode_to_direction(KeyCode::KeyZ), None);
    }
}
