use glam::{EulerRot, Quat, Vec3};

use crate::traits::Transformable;

/// Camera pose in world space. Orientation is yaw/pitch in degrees, roll is always zero.
///
/// Positive yaw turns right, positive pitch looks up. At zero yaw and pitch the
/// camera looks down world -Z with +X to its right.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraState {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self { position, yaw, pitch }
    }

    /// Snapshot a transform; any roll it carries is dropped
    pub fn from_transform<T: Transformable + ?Sized>(transform: &T) -> Self {
        let mut state = Self::default();
        state.set_from_transform(transform);
        state
    }

    pub fn set_from_transform<T: Transformable + ?Sized>(&mut self, transform: &T) {
        let (yaw, pitch, _roll) = transform.world_rotation().to_euler(EulerRot::YXZ);
        self.yaw = -yaw.to_degrees();
        self.pitch = pitch.to_degrees();
        self.position = transform.world_position();
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            -self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Move by `delta` given in local axes (x right, y up, z forward)
    pub fn translate(&mut self, delta: Vec3) {
        self.position += self.rotation() * Vec3::new(delta.x, delta.y, -delta.z);
    }

    /// Close `position_t` of the positional gap and `rotation_t` of the angular gap.
    ///
    /// Angles are interpolated as plain numbers, so a yaw gap across the ±180°
    /// seam is closed the long way round.
    pub fn lerp_towards(&mut self, target: &CameraState, position_t: f32, rotation_t: f32) {
        self.position = self.position * (1.0 - position_t) + target.position * position_t;
        self.yaw = lerp(self.yaw, target.yaw, rotation_t);
        self.pitch = lerp(self.pitch, target.pitch, rotation_t);
    }

    pub fn update_transform<T: Transformable + ?Sized>(&self, transform: &mut T) {
        transform.set_world_rotation(self.rotation());
        transform.set_world_position(self.position);
    }
}

// Exact at both ends: t = 0 keeps `a`, t = 1 yields `b`
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
