//! Transient per-drag state.

use inspace_math::Vec2;

use crate::axis::Axis;

/// State of the current pointer drag.
///
/// Owned by one widget instance; the Presentation Adapter reads a copy of it
/// after every processed event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    /// Between drag start and drag end
    pub active: bool,
    /// Translation axis currently targeted; keeps its value between drags
    pub selected_axis: Axis,
    /// Rotation ring chosen for this drag, if any
    pub selected_rotation_plane: Option<Axis>,
    /// Last normalized progress in [-1, 1], display only
    pub progress: f32,
    /// An explicit lock modifier is holding the current axis
    pub axis_locked: bool,
    /// Handle position relative to the widget center
    pub handle: Vec2,
    /// `selected_axis` was picked during this drag
    pub axis_committed: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag. A modifier held at press time engages the lock.
    pub fn begin(&mut self, modifier_active: bool) {
        self.active = true;
        self.selected_rotation_plane = None;
        self.axis_committed = false;
        self.axis_locked = modifier_active;
    }

    /// Finish a drag. The handle snaps back to center; the selected axis is kept.
    pub fn end(&mut self) {
        self.active = false;
        self.clear_transient();
    }

    /// Clear everything a mode switch must not carry over.
    pub fn clear_transient(&mut self) {
        self.selected_rotation_plane = None;
        self.axis_locked = false;
        self.axis_committed = false;
        self.handle = Vec2::ZERO;
        self.progress = 0.0;
    }

    /// Track a lock modifier between pointer events. Pressing only engages the
    /// lock mid-drag; releasing always clears it.
    pub fn set_modifier(&mut self, active: bool) {
        if active {
            if self.active {
                self.axis_locked = true;
            }
        } else {
            self.axis_locked = false;
        }
    }

    /// Whether an axis lock condition holds for this frame.
    pub fn lock_requested(&self, lock_axis_setting: bool, modifier_active: bool) -> bool {
        lock_axis_setting || self.axis_locked || modifier_active
    }
}
