use std::collections::HashSet;

use glam::Vec2;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Button, Controller};

/// Axis units per pixel of pointer motion
pub const DEFAULT_MOUSE_SCALE: f32 = 0.1;
/// Pixel scroll is converted to lines at this rate
pub const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Buttons that went down since last reset
    just_pressed: HashSet<Button>,
    /// Buttons that went up since last reset
    just_released: HashSet<Button>,
    /// Pointer motion since last reset, in pixels
    mouse_delta: Vec2,
    /// Scroll since last reset, in lines
    scroll_delta: Vec2,
    mouse_scale: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::with_mouse_scale(DEFAULT_MOUSE_SCALE)
    }

    pub fn with_mouse_scale(mouse_scale: f32) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
            mouse_delta: Vec2::ZERO,
            scroll_delta: Vec2::ZERO,
            mouse_scale,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_button(btn, *state);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vec2::new(*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        Vec2::new(pos.x as f32, pos.y as f32) / PIXELS_PER_SCROLL_LINE
                    }
                };
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Raw pointer motion keeps arriving while the cursor is locked
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.mouse_delta += Vec2::new(*dx as f32, *dy as f32);
        }
    }

    /// Update a button from an element state
    pub fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                // Key repeat arrives as further presses; only the first is an edge
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                    self.just_pressed.insert(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                    self.just_released.insert(button);
                }
            }
        }
    }

    /// Release every held button, as when the window loses focus
    pub fn release_all(&mut self) {
        for button in std::mem::take(&mut self.pressed_vec) {
            self.pressed_keys.remove(&button);
            self.just_released.insert(button);
        }
    }

    /// Reset per-frame state (edges and deltas)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::KeyF => Some(Button::KeyF),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::ControlLeft | KeyCode::ControlRight => Some(Button::Ctrl),
            KeyCode::Escape => Some(Button::Escape),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            MouseButton::Middle => Some(Button::MouseMiddle),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn was_pressed(&self, button: Button) -> bool {
        self.just_pressed.contains(&button)
    }

    fn was_released(&self, button: Button) -> bool {
        self.just_released.contains(&button)
    }

    fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta * self.mouse_scale
    }

    fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }
}
