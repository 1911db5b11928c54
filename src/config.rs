use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::curve::SensitivityCurve;
use crate::traits::{Button, Controller};

/// Recommended bounds for the convergence time constants, in seconds
pub const LERP_TIME_RANGE: (f32, f32) = (0.001, 1.0);

/// Pair of buttons driving one movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAxis {
    pub positive: Button,
    pub negative: Button,
}

impl MoveAxis {
    pub const fn new(positive: Button, negative: Button) -> Self {
        Self { positive, negative }
    }

    /// +1, -1, or 0 when both or neither are held
    pub fn value(&self, input: &dyn Controller) -> f32 {
        match (input.is_down(self.positive), input.is_down(self.negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

/// Tunables for [`crate::CameraController`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub horizontal: MoveAxis,
    pub vertical: MoveAxis,
    pub up: MoveAxis,
    /// Held to multiply translation speed by ten
    pub fast_move_key: Button,
    /// Held to rotate with the pointer
    pub look_button: Button,
    /// Exponential speed factor; each unit doubles translation speed
    pub boost: f32,
    /// Seconds to close 99% of the position gap
    pub position_lerp_time: f32,
    /// Seconds to close 99% of the rotation gap
    pub rotation_lerp_time: f32,
    pub mouse_sensitivity_curve: SensitivityCurve,
    pub invert_y: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            horizontal: MoveAxis::new(Button::KeyD, Button::KeyA),
            vertical: MoveAxis::new(Button::KeyW, Button::KeyS),
            up: MoveAxis::new(Button::KeyE, Button::KeyQ),
            fast_move_key: Button::Shift,
            look_button: Button::MouseRight,
            boost: 3.5,
            position_lerp_time: 0.2,
            rotation_lerp_time: 0.01,
            mouse_sensitivity_curve: SensitivityCurve::default(),
            invert_y: false,
        }
    }
}

impl CameraConfig {
    /// Read a JSON config; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera config: {:?}", path))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid camera config: {:?}", path))?;
        log::info!("Loaded camera config from {:?}", path);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse camera config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize camera config")
    }

    pub fn validate(&self) -> Result<()> {
        for (name, tau) in [
            ("position_lerp_time", self.position_lerp_time),
            ("rotation_lerp_time", self.rotation_lerp_time),
        ] {
            ensure!(
                tau.is_finite() && tau > 0.0,
                "{} must be a positive number of seconds, got {}",
                name,
                tau
            );
            if tau < LERP_TIME_RANGE.0 || tau > LERP_TIME_RANGE.1 {
                log::warn!(
                    "{} = {}s is outside the recommended range {:?}",
                    name,
                    tau,
                    LERP_TIME_RANGE
                );
            }
        }

        ensure!(
            !self.mouse_sensitivity_curve.is_empty(),
            "mouse_sensitivity_curve needs at least one key"
        );
        for key in self.mouse_sensitivity_curve.keys() {
            ensure!(
                [key.time, key.value, key.in_tangent, key.out_tangent]
                    .iter()
                    .all(|v| v.is_finite()),
                "mouse_sensitivity_curve keys must be finite, got {:?}",
                key
            );
        }
        ensure!(self.boost.is_finite(), "boost must be finite, got {}", self.boost);

        Ok(())
    }
}
