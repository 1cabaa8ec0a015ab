//! # inspace_math - Screen-space Math
//!
//! Small vector and angle primitives used by the gizmo core. Everything here
//! works in widget-local screen units: +x to the right, +y downwards.

pub mod vector;

pub use vector::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TAU: f32 = PI * 2.0;
    pub const FRAC_1_SQRT_2: f32 = core::f32::consts::FRAC_1_SQRT_2;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min { min }
    else if value > max { max }
    else { value }
}

/// Clamp the magnitude of `value` to `limit`, keeping its sign.
#[inline]
pub fn clamp_magnitude(value: f32, limit: f32) -> f32 {
    value.signum() * value.abs().min(limit)
}

/// Wrap an angle difference in degrees into (-180, 180].
///
/// Only a single turn is folded, which is all a frame-to-frame pointer delta
/// can produce.
#[inline]
pub fn wrap_degrees(delta: f32) -> f32 {
    let mut delta = delta;
    if delta > 180.0 {
        delta -= 360.0;
    }
    if delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

/// Round half towards positive infinity (`-0.5` rounds to `0`).
#[inline]
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(degrees(consts::PI), 180.0, epsilon = 1e-4);
        assert_relative_eq!(radians(90.0), consts::PI / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_clamp_magnitude() {
        assert_eq!(clamp_magnitude(70.0, 55.0), 55.0);
        assert_eq!(clamp_magnitude(-70.0, 55.0), -55.0);
        assert_eq!(clamp_magnitude(12.0, 55.0), 12.0);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(350.0), -10.0);
        assert_eq!(wrap_degrees(-350.0), 10.0);
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
        assert_eq!(wrap_degrees(42.0), 42.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(49.5), 50.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-30.2), -30.0);
    }
}
