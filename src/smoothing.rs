//! Frame-rate independent exponential smoothing.
//!
//! A value chasing a fixed target closes the same share of the gap over a
//! given span of real time no matter how that span is split into frames.
//! The time constant `tau` is the time needed to close [`CONVERGENCE_TARGET`]
//! of the gap.

/// Share of the gap closed after one time constant
pub const CONVERGENCE_TARGET: f32 = 0.99;

/// Interpolation fraction to apply for a frame of `dt` seconds.
///
/// `tau` must be positive; that is checked when the configuration is validated.
pub fn lerp_fraction(tau: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - ((1.0 - CONVERGENCE_TARGET).ln() / tau * dt).exp()
}

/// Gap left after `elapsed` seconds of smoothing towards a fixed target
pub fn remaining_gap(initial_gap: f32, tau: f32, elapsed: f32) -> f32 {
    initial_gap * (1.0 - CONVERGENCE_TARGET).powf(elapsed / tau)
}
