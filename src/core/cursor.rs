use std::sync::Arc;

use winit::window::{CursorGrabMode, Window};

use crate::traits::CursorControl;

/// Cursor of a winit window
pub struct WindowCursor {
    window: Arc<Window>,
}

impl WindowCursor {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl CursorControl for WindowCursor {
    fn lock_and_hide(&mut self) {
        // Not every platform supports Locked; Confined still keeps the pointer in the window
        let grabbed = self
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("Failed to grab cursor: {}", e);
        }
        self.window.set_cursor_visible(false);
    }

    fn unlock_and_show(&mut self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Failed to release cursor: {}", e);
        }
        self.window.set_cursor_visible(true);
    }
}
