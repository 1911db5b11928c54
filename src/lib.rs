pub mod camera;
pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod curve;
pub mod smoothing;
pub mod traits;
pub mod types;

pub use camera::CameraState;
pub use config::{CameraConfig, MoveAxis};
pub use controller::{CameraController, LookMode};
pub use curve::{Keyframe, SensitivityCurve};
pub use traits::{Button, Controller, CursorControl, Transformable};
pub use types::Transform;
