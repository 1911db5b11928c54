use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use fly_camera::cli::Cli;
use fly_camera::core::{Clock, WindowCursor, WinitController};
use fly_camera::{CameraConfig, CameraController, Transform};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const START_POSITION: Vec3 = Vec3::new(0.0, 8.0, 15.0);

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    cursor: Option<WindowCursor>,
    clock: Clock,
    input: WinitController,
    camera: CameraController,
    pose: Transform,
}

impl App {
    fn new(config: CameraConfig, mouse_scale: f32) -> Self {
        let pose = Transform::looking_to(START_POSITION, -START_POSITION);
        Self {
            window: None,
            cursor: None,
            clock: Clock::new(),
            input: WinitController::with_mouse_scale(mouse_scale),
            camera: CameraController::new(config, &pose),
            pose,
        }
    }

    fn update(&mut self) {
        let delta = self.clock.tick();

        if let (Some(window), Some(cursor)) = (&self.window, &mut self.cursor) {
            self.camera
                .advance_into(delta, &self.input, cursor, &mut self.pose);

            let state = self.camera.smoothed_state();
            window.set_title(&format!(
                "Fly Camera - pos ({:.1}, {:.1}, {:.1}) yaw {:.1} pitch {:.1} boost {:.1}",
                state.position.x,
                state.position.y,
                state.position.z,
                state.yaw,
                state.pitch,
                self.camera.boost(),
            ));
        }

        self.input.reset_deltas();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Fly Camera")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.cursor = Some(WindowCursor::new(window.clone()));
            self.window = Some(window);
            self.camera.initialize(&self.pose);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
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
            WindowEvent::RedrawRequested => self.update(),
            other => self.input.process_event(&other),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_default_config {
        println!("{}", CameraConfig::default().to_json_pretty()?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => CameraConfig::load(path)?,
        None => CameraConfig::default(),
    };

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config, cli.mouse_scale);

    log::info!("Fly Camera - Controls: WASD/QE move, hold right mouse to look, Shift fast, scroll boost, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
