use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyR,
    KeyF,
    Space,
    Shift,
    Ctrl,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    MouseLeft,
    MouseRight,
    MouseMiddle,
}

/// Controller - per-frame snapshot of input device state
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Button went down during this frame
    fn was_pressed(&self, _button: Button) -> bool {
        false
    }

    /// Button went up during this frame
    fn was_released(&self, _button: Button) -> bool {
        false
    }

    /// Relative pointer motion this frame, in axis units (x right, y down)
    fn mouse_delta(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Scroll this frame, in lines (y positive away from the user)
    fn scroll_delta(&self) -> Vec2 {
        Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::KeyW);
        set.insert(Button::KeyA);
        set.insert(Button::MouseRight);
        set.insert(Button::KeyW);

        assert!(set.contains(&Button::KeyW));
        assert!(!set.contains(&Button::KeyS));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_button_serializes_by_name() {
        let json = serde_json::to_string(&Button::MouseRight).unwrap();
        assert_eq!(json, "\"MouseRight\"");

        let parsed: Button = serde_json::from_str("\"Shift\"").unwrap();
        assert_eq!(parsed, Button::Shift);
    }

    // Only the required methods; everything else falls back to defaults
    struct HeldOnly {
        pressed: Vec<Button>,
    }

    impl Controller for HeldOnly {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }
    }

    #[test]
    fn test_controller_defaults_are_inert() {
        let controller = HeldOnly {
            pressed: vec![Button::KeyW, Button::MouseRight],
        };

        assert!(controller.is_down(Button::KeyW));
        assert!(!controller.is_down(Button::KeyA));
        assert_eq!(controller.get_down_keys().len(), 2);
        assert!(!controller.was_pressed(Button::MouseRight));
        assert!(!controller.was_released(Button::MouseRight));
        assert_eq!(controller.mouse_delta(), Vec2::ZERO);
        assert_eq!(controller.scroll_delta(), Vec2::ZERO);
    }
}
