//! Pointer sensitivity response curve.
//!
//! Maps the magnitude of a pointer delta to a rotation multiplier. Keys are
//! kept sorted by `time`; segments between keys are cubic Hermite splines
//! driven by the keys' tangents, and the curve holds its end values outside
//! the key range.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    /// Flat key: zero slope on both sides
    pub const fn new(time: f32, value: f32) -> Self {
        Self::with_tangents(time, value, 0.0, 0.0)
    }

    pub const fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct SensitivityCurve {
    keys: Vec<Keyframe>,
}

impl SensitivityCurve {
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// Piecewise linear curve through `(time, value)` points
    pub fn linear(points: &[(f32, f32)]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let slope = |a: (f32, f32), b: (f32, f32)| {
            let width = b.0 - a.0;
            if width > 0.0 {
                (b.1 - a.1) / width
            } else {
                0.0
            }
        };

        let keys = (0..sorted.len())
            .map(|i| {
                let (time, value) = sorted[i];
                let in_tangent = if i > 0 { slope(sorted[i - 1], sorted[i]) } else { 0.0 };
                let out_tangent = sorted
                    .get(i + 1)
                    .map_or(0.0, |&next| slope(sorted[i], next));
                Keyframe::with_tangents(time, value, in_tangent, out_tangent)
            })
            .collect();

        Self { keys }
    }

    /// Same multiplier for every input
    pub fn constant(value: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, value)])
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 1.0,
        };

        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // First key strictly after t. NaN input or key times break the ordering
        let idx = self.keys.partition_point(|k| k.time <= t);
        if idx == 0 || idx == self.keys.len() {
            return first.value;
        }
        hermite(&self.keys[idx - 1], &self.keys[idx], t)
    }
}

impl Default for SensitivityCurve {
    fn default() -> Self {
        Self::new(vec![
            Keyframe::with_tangents(0.0, 0.5, 0.0, 5.0),
            Keyframe::with_tangents(1.0, 2.5, 0.0, 0.0),
        ])
    }
}

impl From<Vec<Keyframe>> for SensitivityCurve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl From<SensitivityCurve> for Vec<Keyframe> {
    fn from(curve: SensitivityCurve) -> Self {
        curve.keys
    }
}

fn hermite(a: &Keyframe, b: &Keyframe, t: f32) -> f32 {
    let width = b.time - a.time;
    if width <= 0.0 {
        return b.value;
    }

    let s = (t - a.time) / width;
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * a.value + h10 * width * a.out_tangent + h01 * b.value + h11 * width * b.in_tangent
}
