//! Axis/ring disambiguation.
//!
//! Each operating mode has a [`Manipulator`] that turns a pointer offset into
//! a drag target, a handle position and a pose update.

mod rotate;
mod translate;

pub use rotate::RotateManipulator;
pub use translate::TranslateManipulator;

use inspace_math::Vec2;

use crate::axis::{Axis, OperatingMode};
use crate::pose::Pose;
use crate::session::DragSession;
use crate::settings::GizmoSettings;

/// Per-frame inputs besides the pointer offset.
#[derive(Clone, Copy, Debug)]
pub struct DragContext<'a> {
    pub settings: &'a GizmoSettings,
    /// Lock modifier state reported with this pointer event
    pub modifier_active: bool,
}

/// Result of one drag frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragOutput {
    /// Handle position relative to the widget center
    pub handle: Vec2,
    /// Normalized progress in [-1, 1] (beyond when unclamped)
    pub progress: f32,
    /// Axis or ring the frame acted on
    pub axis: Option<Axis>,
}

impl DragOutput {
    /// Handle at center, nothing targeted.
    pub const NEUTRAL: Self = Self {
        handle: Vec2::ZERO,
        progress: 0.0,
        axis: None,
    };
}

/// Strategy for one operating mode.
pub trait Manipulator {
    /// Mode this manipulator serves.
    fn mode(&self) -> OperatingMode;

    /// Called after the session has been marked active.
    fn begin_drag(&mut self, session: &DragSession, pose: &Pose);

    /// Process one pointer offset (relative to the widget center).
    fn drag(
        &mut self,
        rel: Vec2,
        ctx: &DragContext<'_>,
        session: &mut DragSession,
        pose: &mut Pose,
    ) -> DragOutput;

    /// Called before the session is cleared.
    fn end_drag(&mut self, session: &DragSession);
}
