//! Translate manipulator: snaps the handle onto the nearest axis track.

use inspace_math::{clamp, Vec2};

use super::{DragContext, DragOutput, Manipulator};
use crate::axis::{Axis, OperatingMode};
use crate::pose::Pose;
use crate::projection::{
    axis_scalar, closest_axis, handle_on_axis, normalized_progress, track_limit, POSITION_SCALE,
};
use crate::session::DragSession;

/// Moves the object along X, Y or Z.
#[derive(Clone, Copy, Debug, Default)]
pub struct TranslateManipulator;

impl TranslateManipulator {
    pub fn new() -> Self {
        Self
    }

    /// Pick the axis for this frame, honoring an engaged lock.
    fn resolve_axis(&self, rel: Vec2, ctx: &DragContext<'_>, session: &mut DragSession) -> Axis {
        let locked = session.lock_requested(ctx.settings.lock_axis, ctx.modifier_active)
            && session.active
            && session.axis_committed;
        if locked {
            return session.selected_axis;
        }

        let axis = closest_axis(rel);
        if !session.axis_committed || axis != session.selected_axis {
            log::debug!("Translate axis -> {}", axis);
        }
        session.selected_axis = axis;
        session.axis_committed = true;
        axis
    }
}

impl Manipulator for TranslateManipulator {
    fn mode(&self) -> OperatingMode {
        OperatingMode::Transform
    }

    fn begin_drag(&mut self, _session: &DragSession, _pose: &Pose) {}

    fn drag(
        &mut self,
        rel: Vec2,
        ctx: &DragContext<'_>,
        session: &mut DragSession,
        pose: &mut Pose,
    ) -> DragOutput {
        let axis = self.resolve_axis(rel, ctx, session);

        let limit = track_limit(ctx.settings.allow_drag_beyond_bounds);
        let clamped = clamp(axis_scalar(rel, axis), -limit, limit);
        let progress = normalized_progress(axis, clamped);

        pose.set_position_on(axis, progress * POSITION_SCALE);

        DragOutput {
            handle: handle_on_axis(axis, clamped),
            progress,
            axis: Some(axis),
        }
    }

    fn end_drag(&mut self, _session: &DragSession) {}
}
