//! Pose of the manipulated object.

use inspace_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// Position and rotation of the manipulated object.
///
/// Survives drags and mode switches; only drag output and an explicit reset
/// change it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Translation in display units, about [-50, 50] per axis when clamped
    pub position: Vec3,
    /// Rotation in degrees per axis
    pub rotation: Vec3,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub fn position_on(&self, axis: Axis) -> f32 {
        self.position[axis.index()]
    }

    pub fn rotation_around(&self, axis: Axis) -> f32 {
        self.rotation[axis.index()]
    }

    pub fn set_position_on(&mut self, axis: Axis, value: f32) {
        self.position[axis.index()] = value;
    }

    pub fn set_rotation_around(&mut self, axis: Axis, degrees: f32) {
        self.rotation[axis.index()] = degrees;
    }

    pub fn rotate_around(&mut self, axis: Axis, delta_degrees: f32) {
        self.rotation[axis.index()] += delta_degrees;
    }

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_accessors_touch_one_component() {
        let mut pose = Pose::default();
        pose.set_position_on(Axis::Y, 12.5);
        pose.set_rotation_around(Axis::Z, 90.0);
        pose.rotate_around(Axis::Z, 400.0);

        assert_eq!(pose.position, Vec3::new(0.0, 12.5, 0.0));
        assert_eq!(pose.rotation_around(Axis::Z), 490.0);
        assert_eq!(pose.rotation_around(Axis::X), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut pose = Pose::new(Vec3::splat(3.0), Vec3::splat(45.0));
        pose.reset();
        assert_eq!(pose, Pose::IDENTITY);
    }
}
