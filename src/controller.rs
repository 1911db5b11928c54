use glam::{Vec2, Vec3};

use crate::camera::CameraState;
use crate::config::CameraConfig;
use crate::smoothing::lerp_fraction;
use crate::traits::{Controller, CursorControl, Transformable};
use crate::types::Transform;

/// Boost change per line of scroll
pub const SCROLL_BOOST_STEP: f32 = 0.2;
/// Translation multiplier while the fast-move key is held
pub const FAST_MOVE_FACTOR: f32 = 10.0;

/// Whether pointer motion is currently steering the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookMode {
    #[default]
    Idle,
    Looking,
}

/// Smoothed free-fly camera.
///
/// Input moves a target pose instantly; a second, rendered pose chases it with
/// exponential smoothing. Call [`CameraController::advance`] once per frame.
#[derive(Debug, Clone)]
pub struct CameraController {
    config: CameraConfig,
    boost: f32,
    mode: LookMode,
    target: CameraState,
    smoothed: CameraState,
}

impl CameraController {
    /// Build a controller starting at `pose`.
    ///
    /// `config` is expected to have passed [`CameraConfig::validate`].
    pub fn new<T: Transformable + ?Sized>(config: CameraConfig, pose: &T) -> Self {
        let boost = config.boost;
        let mut controller = Self {
            config,
            boost,
            mode: LookMode::Idle,
            target: CameraState::default(),
            smoothed: CameraState::default(),
        };
        controller.initialize(pose);
        controller
    }

    /// Snap both poses to `pose`, dropping any pending smoothing
    pub fn initialize<T: Transformable + ?Sized>(&mut self, pose: &T) {
        self.target.set_from_transform(pose);
        self.smoothed.set_from_transform(pose);
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn boost(&self) -> f32 {
        self.boost
    }

    pub fn mode(&self) -> LookMode {
        self.mode
    }

    pub fn is_looking(&self) -> bool {
        self.mode == LookMode::Looking
    }

    pub fn target_state(&self) -> &CameraState {
        &self.target
    }

    pub fn smoothed_state(&self) -> &CameraState {
        &self.smoothed
    }

    /// Run one frame of `dt` seconds and return the smoothed pose
    pub fn advance(
        &mut self,
        dt: f32,
        input: &dyn Controller,
        cursor: &mut dyn CursorControl,
    ) -> Transform {
        let mut pose = Transform::default();
        self.advance_into(dt, input, cursor, &mut pose);
        pose
    }

    /// Run one frame of `dt` seconds and write the smoothed pose into `pose`
    pub fn advance_into<T: Transformable + ?Sized>(
        &mut self,
        dt: f32,
        input: &dyn Controller,
        cursor: &mut dyn CursorControl,
        pose: &mut T,
    ) {
        let dt = dt.max(0.0);

        self.update_look_mode(input, cursor);
        self.boost += input.scroll_delta().y * SCROLL_BOOST_STEP;

        let translation = self.translation(input, dt);
        self.target.translate(translation);

        if self.is_looking() {
            self.rotate(input.mouse_delta());
        }

        let position_t = lerp_fraction(self.config.position_lerp_time, dt);
        let rotation_t = lerp_fraction(self.config.rotation_lerp_time, dt);
        self.smoothed.lerp_towards(&self.target, position_t, rotation_t);
        self.smoothed.update_transform(pose);

        log::trace!(
            "camera at {:?} yaw {:.2} pitch {:.2}",
            self.smoothed.position,
            self.smoothed.yaw,
            self.smoothed.pitch
        );
    }

    fn update_look_mode(&mut self, input: &dyn Controller, cursor: &mut dyn CursorControl) {
        let button = self.config.look_button;
        let pressed = input.was_pressed(button);
        let released = input.was_released(button);

        if pressed {
            cursor.lock_and_hide();
        }
        if released {
            cursor.unlock_and_show();
        }

        // Both edges in one frame lose their order; the held state decides
        let looking = match (pressed, released) {
            (true, false) => true,
            (false, true) => false,
            (true, true) => input.is_down(button),
            (false, false) => return,
        };
        if pressed && released && looking {
            cursor.lock_and_hide();
        }

        self.mode = if looking {
            LookMode::Looking
        } else {
            LookMode::Idle
        };
        log::debug!("look mode {:?}", self.mode);
    }

    /// Local-space translation for this frame
    fn translation(&self, input: &dyn Controller, dt: f32) -> Vec3 {
        let direction = Vec3::new(
            self.config.horizontal.value(input),
            self.config.up.value(input),
            self.config.vertical.value(input),
        );

        let mut translation = direction * dt;
        if input.is_down(self.config.fast_move_key) {
            translation *= FAST_MOVE_FACTOR;
        }
        translation * 2.0f32.powf(self.boost)
    }

    fn rotate(&mut self, delta: Vec2) {
        let movement = Vec2::new(delta.x, delta.y * if self.config.invert_y { 1.0 } else { -1.0 });
        let sensitivity = self.config.mouse_sensitivity_curve.evaluate(movement.length());

        self.target.yaw += movement.x * sensitivity;
        self.target.pitch += movement.y * sensitivity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::SensitivityCurve;
    use crate::traits::{Button, NoCursor};

    #[derive(Default)]
    struct Frame {
        held: Vec<Button>,
        scroll: f32,
    }

    impl Controller for Frame {
        fn is_down(&self, button: Button) -> bool {
            self.held.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.held
        }

        fn scroll_delta(&self) -> Vec2 {
            Vec2::new(0.0, self.scroll)
        }
    }

    fn controller(boost: f32) -> CameraController {
        let config = CameraConfig {
            boost,
            ..CameraConfig::default()
        };
        CameraController::new(config, &Transform::IDENTITY)
    }

    #[test]
    fn starts_idle_at_pose() {
        let pose = Transform::looking_to(Vec3::new(0.0, 8.0, 15.0), Vec3::X);
        let camera = CameraController::new(CameraConfig::default(), &pose);

        assert_eq!(camera.mode(), LookMode::Idle);
        assert_eq!(camera.target_state(), camera.smoothed_state());
        assert!((camera.target_state().yaw - 90.0).abs() < 1e-3);
        assert_eq!(camera.boost(), 3.5);
    }

    #[test]
    fn forward_key_moves_target_by_boosted_distance() {
        let mut camera = controller(0.0);
        let input = Frame {
            held: vec![Button::KeyW],
            ..Default::default()
        };

        camera.advance(0.5, &input, &mut NoCursor);
        assert!(camera.target_state().position.abs_diff_eq(Vec3::new(0.0, 0.0, -0.5), 1e-5));

        let mut camera = controller(2.0);
        camera.advance(0.5, &input, &mut NoCursor);
        assert!(camera.target_state().position.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-5));
    }

    #[test]
    fn fast_move_multiplies_by_ten() {
        let mut camera = controller(0.0);
        let input = Frame {
            held: vec![Button::KeyD, Button::Shift],
            ..Default::default()
        };

        camera.advance(0.1, &input, &mut NoCursor);
        assert!(camera.target_state().position.abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn scroll_accumulates_boost_without_clamping() {
        let mut camera = controller(0.0);
        for _ in 0..100 {
            camera.advance(0.0, &Frame { scroll: 1.0, ..Default::default() }, &mut NoCursor);
        }
        assert!((camera.boost() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn rotation_ignored_while_idle() {
        let mut camera = controller(0.0);
        camera.rotate(Vec2::new(1.0, 0.0));
        assert!(camera.target_state().yaw > 0.0);

        let mut camera = controller(0.0);
        camera.advance(0.016, &Frame::default(), &mut NoCursor);
        assert_eq!(camera.target_state().yaw, 0.0);
    }

    #[test]
    fn rotate_applies_curve_and_y_inversion() {
        let mut config = CameraConfig::default();
        config.mouse_sensitivity_curve = SensitivityCurve::constant(2.0);
        let mut camera = CameraController::new(config.clone(), &Transform::IDENTITY);

        camera.rotate(Vec2::new(3.0, 4.0));
        assert_eq!(camera.target_state().yaw, 6.0);
        assert_eq!(camera.target_state().pitch, -8.0);

        config.invert_y = true;
        let mut camera = CameraController::new(config, &Transform::IDENTITY);
        camera.rotate(Vec2::new(3.0, 4.0));
        assert_eq!(camera.target_state().pitch, 8.0);
    }

    #[test]
    fn negative_dt_is_treated_as_zero() {
        let mut camera = controller(0.0);
        let input = Frame {
            held: vec![Button::KeyW],
            ..Default::default()
        };
        camera.advance(-1.0, &input, &mut NoCursor);
        assert_eq!(camera.target_state().position, Vec3::ZERO);
    }

    #[test]
    fn initialize_resets_both_states() {
        let mut camera = controller(0.0);
        let input = Frame {
            held: vec![Button::KeyW],
            ..Default::default()
        };
        camera.advance(0.2, &input, &mut NoCursor);
        assert_ne!(camera.target_state(), camera.smoothed_state());

        let pose = Transform::new(Vec3::new(5.0, 5.0, 5.0), glam::Quat::IDENTITY);
        camera.initialize(&pose);
        assert_eq!(camera.target_state().position, pose.position);
        assert_eq!(camera.smoothed_state().position, pose.position);
    }
}
