//! Rotate manipulator: picks a ring from the first drag direction, then
//! follows the pointer angle around it.

use inspace_math::{consts, wrap_degrees, Vec2, Vec3};

use super::{DragContext, DragOutput, Manipulator};
use crate::axis::{Axis, OperatingMode};
use crate::pose::Pose;
use crate::projection::{ring_radius, rotation_degrees, RotationSector, ROTATION_DEAD_ZONE};
use crate::session::DragSession;

/// Rotates the object around X, Y or Z.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotateManipulator {
    /// Last pointer angle per axis in readout degrees, for continuous rotation
    last_angle: Vec3,
}

impl RotateManipulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded readout angle for `axis`.
    pub fn last_angle(&self, axis: Axis) -> f32 {
        self.last_angle[axis.index()]
    }

    /// Choose a ring once the pointer leaves the dead zone.
    ///
    /// A held lock with nothing selected yet suppresses the choice.
    fn select_plane(&self, rel: Vec2, ctx: &DragContext<'_>, session: &mut DragSession) {
        if session.selected_rotation_plane.is_some() || rel.length() <= ROTATION_DEAD_ZONE {
            return;
        }
        if session.axis_locked || ctx.modifier_active {
            return;
        }
        let sector = RotationSector::classify(rel);
        let axis = sector.axis();
        log::debug!("Rotation ring -> {} ({:?})", axis, sector);
        session.selected_rotation_plane = Some(axis);
    }
}

impl Manipulator for RotateManipulator {
    fn mode(&self) -> OperatingMode {
        OperatingMode::Rotate
    }

    fn begin_drag(&mut self, session: &DragSession, _pose: &Pose) {
        let seed = rotation_degrees(session.handle.angle());
        self.last_angle = Vec3::splat(seed);
    }

    fn drag(
        &mut self,
        rel: Vec2,
        ctx: &DragContext<'_>,
        session: &mut DragSession,
        pose: &mut Pose,
    ) -> DragOutput {
        self.select_plane(rel, ctx, session);

        let Some(plane) = session.selected_rotation_plane else {
            return DragOutput::NEUTRAL;
        };

        let angle = rel.angle();
        let degrees = rotation_degrees(angle);

        if ctx.settings.allow_drag_beyond_bounds {
            let delta = wrap_degrees(degrees - self.last_angle[plane.index()]);
            pose.rotate_around(plane, delta);
        } else {
            pose.set_rotation_around(plane, degrees);
        }
        self.last_angle[plane.index()] = degrees;

        DragOutput {
            handle: Vec2::from_angle(angle) * ring_radius(plane),
            progress: angle / consts::PI,
            axis: Some(plane),
        }
    }

    fn end_drag(&mut self, _session: &DragSession) {}
}
