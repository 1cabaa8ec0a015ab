//! Fixed isometric projection of the three logical axes onto the widget.
//!
//! All offsets are widget-local screen units relative to the widget center,
//! with +y pointing down. The gizmo fakes depth: X runs right, Y runs up and
//! Z runs along the lower-left diagonal.

use inspace_math::{consts, Vec2};

use crate::axis::Axis;

/// Half length of an axis track; offsets are normalized against it.
pub const TRACK_LENGTH: f32 = 60.0;

/// Clamp limit used instead of `TRACK_LENGTH` when dragging past the ends is allowed.
pub const BEYOND_BOUNDS_LIMIT: f32 = 1000.0;

/// Pose units per unit of progress.
pub const POSITION_SCALE: f32 = 50.0;

/// Pointer distance from center before a rotation ring is chosen.
pub const ROTATION_DEAD_ZONE: f32 = 10.0;

/// Foreshortening applied to offsets along the Z diagonal.
pub const Z_FORESHORTENING: f32 = consts::FRAC_1_SQRT_2;

/// Measured size of the rendering surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the surface in widget-local coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// A surface that is not laid out yet has no usable center.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Pointer offset from the center.
    pub fn relative(&self, pointer: Vec2) -> Vec2 {
        pointer - self.center()
    }
}

/// Unit screen direction in which an axis grows.
pub fn axis_direction(axis: Axis) -> Vec2 {
    match axis {
        Axis::X => Vec2::X,
        Axis::Y => Vec2::new(0.0, -1.0),
        Axis::Z => Vec2::new(-consts::FRAC_1_SQRT_2, consts::FRAC_1_SQRT_2),
    }
}

/// Perpendicular distance from an offset to an axis line.
pub fn distance_to_axis(rel: Vec2, axis: Axis) -> f32 {
    match axis {
        Axis::X => rel.y.abs(),
        Axis::Y => rel.x.abs(),
        Axis::Z => rel.dot(axis_direction(Axis::Z).perpendicular()).abs(),
    }
}

/// Axis line nearest to the offset. Ties go to the earlier axis in X, Y, Z order.
pub fn closest_axis(rel: Vec2) -> Axis {
    let mut best = Axis::X;
    let mut best_dist = distance_to_axis(rel, Axis::X);
    for axis in [Axis::Y, Axis::Z] {
        let dist = distance_to_axis(rel, axis);
        if dist < best_dist {
            best = axis;
            best_dist = dist;
        }
    }
    best
}

/// Raw screen scalar along an axis track, before clamping.
///
/// Y stays in screen orientation here (down is positive); the sign flip to
/// "up is positive" happens in [`normalized_progress`].
pub fn axis_scalar(rel: Vec2, axis: Axis) -> f32 {
    match axis {
        Axis::X => rel.x,
        Axis::Y => rel.y,
        Axis::Z => rel.dot(axis_direction(Axis::Z)) * Z_FORESHORTENING,
    }
}

/// Clamp limit for the track scalar.
pub fn track_limit(allow_beyond_bounds: bool) -> f32 {
    if allow_beyond_bounds {
        BEYOND_BOUNDS_LIMIT
    } else {
        TRACK_LENGTH
    }
}

/// Progress for a clamped track scalar; 1.0 at the positive arrow tip.
pub fn normalized_progress(axis: Axis, clamped: f32) -> f32 {
    match axis {
        Axis::Y => -clamped / TRACK_LENGTH,
        Axis::X | Axis::Z => clamped / TRACK_LENGTH,
    }
}

/// Handle position for a clamped track scalar, placed on the axis line.
pub fn handle_on_axis(axis: Axis, clamped: f32) -> Vec2 {
    match axis {
        Axis::X => Vec2::new(clamped, 0.0),
        Axis::Y => Vec2::new(0.0, clamped),
        Axis::Z => axis_direction(Axis::Z) * clamped,
    }
}

/// Inverse of [`handle_on_axis`].
pub fn scalar_on_axis(axis: Axis, handle: Vec2) -> f32 {
    match axis {
        Axis::X => handle.x,
        Axis::Y => handle.y,
        Axis::Z => handle.dot(axis_direction(Axis::Z)),
    }
}

/// Map an `atan2` angle to the 0..=360 readout range.
///
/// The origin of the range sits at due left (`-PI`), so a pointer due right
/// reads 180 degrees.
pub fn rotation_degrees(angle: f32) -> f32 {
    (angle + consts::PI) / consts::TAU * 360.0
}

/// Angular zones used to pick a rotation ring from the first drag direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationSector {
    /// Toward 10 to 2 o'clock, above center
    Y,
    /// Horizontal, either side
    X,
    /// Below center
    Z,
    /// Between the named sectors
    DeadZone,
}

impl RotationSector {
    /// Classify an offset by its screen angle.
    pub fn classify(rel: Vec2) -> Self {
        Self::from_degrees(inspace_math::degrees(rel.angle()))
    }

    /// Classify a screen angle in degrees, (-180, 180]. Sector ends are open
    /// except at the +/-180 wrap.
    pub fn from_degrees(angle: f32) -> Self {
        if angle > -120.0 && angle < -60.0 {
            RotationSector::Y
        } else if (angle > -30.0 && angle < 30.0) || angle > 150.0 || angle < -150.0 {
            RotationSector::X
        } else if angle > 60.0 && angle < 120.0 {
            RotationSector::Z
        } else {
            RotationSector::DeadZone
        }
    }

    /// Ring selected by this sector. The dead zone falls back to X.
    pub fn axis(self) -> Axis {
        match self {
            RotationSector::Y => Axis::Y,
            RotationSector::Z => Axis::Z,
            RotationSector::X | RotationSector::DeadZone => Axis::X,
        }
    }
}

/// Drawn radius of the ring for rotations around `axis`.
pub fn ring_radius(axis: Axis) -> f32 {
    match axis {
        Axis::X => 60.0,
        Axis::Y => 50.0,
        Axis::Z => 40.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_center_and_relative() {
        let b = Bounds::new(200.0, 100.0);
        assert_eq!(b.center(), Vec2::new(100.0, 50.0));
        assert_eq!(b.relative(Vec2::new(130.0, 50.0)), Vec2::new(30.0, 0.0));
        assert!(Bounds::new(0.0, 100.0).is_degenerate());
        assert!(Bounds::new(f32::NAN, 100.0).is_degenerate());
        assert!(!b.is_degenerate());
    }

    #[test]
    fn test_closest_axis_unambiguous() {
        assert_eq!(closest_axis(Vec2::new(40.0, 2.0)), Axis::X);
        assert_eq!(closest_axis(Vec2::new(-1.0, -40.0)), Axis::Y);
        assert_eq!(closest_axis(Vec2::new(-30.0, 30.0)), Axis::Z);
        assert_eq!(closest_axis(Vec2::new(30.0, -30.0)), Axis::Z);
    }

    #[test]
    fn test_closest_axis_ties_prefer_x_then_y() {
        assert_eq!(closest_axis(Vec2::ZERO), Axis::X);
        // |rel.y| == |rel.x|, Z distance is larger
        assert_eq!(closest_axis(Vec2::new(10.0, 10.0)), Axis::X);
    }

    #[test]
    fn test_z_scalar_is_foreshortened() {
        let rel = Vec2::new(-30.0, 30.0);
        let along = rel.length();
        assert_relative_eq!(axis_scalar(rel, Axis::Z), along * Z_FORESHORTENING, epsilon = 1e-4);
        assert_relative_eq!(distance_to_axis(rel, Axis::Z), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_handle_roundtrip_on_each_axis() {
        for axis in Axis::ALL {
            let handle = handle_on_axis(axis, 42.0);
            assert_relative_eq!(scalar_on_axis(axis, handle), 42.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_y_progress_is_up_positive() {
        assert_eq!(normalized_progress(Axis::Y, -60.0), 1.0);
        assert_eq!(normalized_progress(Axis::X, -60.0), -1.0);
    }

    #[test]
    fn test_rotation_degrees_due_right_is_180() {
        assert_relative_eq!(rotation_degrees(0.0), 180.0, epsilon = 1e-4);
        assert_relative_eq!(rotation_degrees(-consts::PI), 0.0, epsilon = 1e-4);
        assert_relative_eq!(rotation_degrees(consts::PI), 360.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rotation_sectors() {
        assert_eq!(RotationSector::classify(Vec2::new(0.0, -20.0)), RotationSector::Y);
        assert_eq!(RotationSector::classify(Vec2::new(20.0, 0.0)), RotationSector::X);
        assert_eq!(RotationSector::classify(Vec2::new(-20.0, 0.0)), RotationSector::X);
        assert_eq!(RotationSector::classify(Vec2::new(0.0, 20.0)), RotationSector::Z);
        // 45 degrees below the right horizon
        let dead = RotationSector::classify(Vec2::new(20.0, 20.0));
        assert_eq!(dead, RotationSector::DeadZone);
        assert_eq!(dead.axis(), Axis::X);
    }

    #[test]
    fn test_rotation_sector_edges_are_open() {
        for edge in [-150.0, -120.0, -60.0, -30.0, 30.0, 60.0, 120.0, 150.0] {
            assert_eq!(RotationSector::from_degrees(edge), RotationSector::DeadZone, "{}", edge);
        }
        assert_eq!(RotationSector::from_degrees(-119.9), RotationSector::Y);
        assert_eq!(RotationSector::from_degrees(-60.1), RotationSector::Y);
        assert_eq!(RotationSector::from_degrees(60.1), RotationSector::Z);
        assert_eq!(RotationSector::from_degrees(119.9), RotationSector::Z);
        assert_eq!(RotationSector::from_degrees(29.9), RotationSector::X);
        assert_eq!(RotationSector::from_degrees(150.1), RotationSector::X);
        assert_eq!(RotationSector::from_degrees(-150.1), RotationSector::X);
        // Both ends of the wrap belong to X
        assert_eq!(RotationSector::from_degrees(180.0), RotationSector::X);
        assert_eq!(RotationSector::from_degrees(-180.0), RotationSector::X);
    }
}
