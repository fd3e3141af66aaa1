use std::sync::Arc;

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::camera::Camera;
use crate::cli::Cli;
use crate::core::clock::FrameClock;
use crate::core::input::InputTracker;
use crate::renderer::Renderer;
use crate::scenes::create_desk_scene;

const WINDOW_TITLE: &str = "Desk Scene";
const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 10.0);
const FPS_LOG_INTERVAL: f32 = 1.0;

/// Application context owning everything the frame loop touches
///
/// Window and renderer are created lazily on `resumed`, as winit requires;
/// camera, input, and timing state live here instead of at process scope.
pub struct App {
    config: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    input: InputTracker,
    clock: FrameClock,
    frame_count: u32,
    fps_timer: f32,
}

impl App {
    pub fn new(config: Cli) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            camera: Camera::new(CAMERA_START),
            input: InputTracker::new(),
            clock: FrameClock::new(),
            frame_count: 0,
            fps_timer: 0.0,
        }
    }

    /// Feed the frame's input to the camera
    fn apply_input(&mut self, delta_seconds: f32) {
        for &direction in self.input.held_directions() {
            self.camera.process_keyboard(direction, delta_seconds);
        }

        let (dx, dy) = self.input.take_mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            self.camera.process_mouse_movement(dx, dy, true);
        }

        let scroll = self.input.take_scroll_delta();
        if scroll != 0.0 {
            self.camera.process_mouse_scroll(scroll);
        }
    }

    fn update_fps(&mut self, delta_seconds: f32) {
        self.frame_count += 1;
        self.fps_timer += delta_seconds;

        if self.fps_timer >= FPS_LOG_INTERVAL {
            log::info!("FPS: {:.1}", self.frame_count as f32 / self.fps_timer);
            self.frame_count = 0;
            self.fps_timer = 0.0;
        }
    }

    fn capture_cursor(window: &Window) {
        // Locked is unsupported on some platforms; confined is close enough
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("could not grab cursor: {}", e);
        }
        window.set_cursor_visible(false);
    }

    fn redraw(&mut self, delta_seconds: f32) {
        self.update_fps(delta_seconds);
        self.apply_input(delta_seconds);

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        match renderer.render(&self.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(e) => log::error!("render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        if !self.config.release_cursor {
            Self::capture_cursor(&window);
        }

        let scene = create_desk_scene();
        let renderer = match pollster::block_on(Renderer::new(window.clone(), &scene)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        // GPU setup can take a while; do not count it as the first frame
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.process_window_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.redraw(delta);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
