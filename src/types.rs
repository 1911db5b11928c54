use glam::{Mat4, Quat, Vec3};

use crate::traits::Transformable;

/// Renderable world-space pose owned by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` looking along `direction` with world up.
    ///
    /// `direction` must be non-zero and not parallel to world up.
    pub fn looking_to(position: Vec3, direction: Vec3) -> Self {
        let view = Mat4::look_to_rh(position, direction.normalize(), Vec3::Y);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        Self { position, rotation }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transformable for Transform {
    fn world_position(&self) -> Vec3 {
        self.position
    }

    fn world_rotation(&self) -> Quat {
        self.rotation
    }

    fn set_world_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_world_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
