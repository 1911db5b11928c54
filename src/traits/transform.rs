use glam::{Quat, Vec3};

/// World-space pose that a camera state can be read from and written to
pub trait Transformable {
    fn world_position(&self) -> Vec3;

    fn world_rotation(&self) -> Quat;

    fn set_world_position(&mut self, position: Vec3);

    fn set_world_rotation(&mut self, rotation: Quat);
}
