//! Per-widget controller.
//!
//! Owns the mode, settings, drag session and pose of one gizmo instance and
//! routes pointer events to the manipulator for the current mode.

use inspace_math::Vec2;

use crate::axis::OperatingMode;
use crate::manipulator::{
    DragContext, DragOutput, Manipulator, RotateManipulator, TranslateManipulator,
};
use crate::mode::{ListenerId, ModeController};
use crate::pose::Pose;
use crate::presentation::{PresentationAdapter, RenderSnapshot};
use crate::projection::Bounds;
use crate::session::DragSession;
use crate::settings::{GizmoSettings, SettingsPatch};

/// One gizmo widget.
pub struct GizmoController {
    modes: ModeController,
    settings: GizmoSettings,
    session: DragSession,
    pose: Pose,

    translate: TranslateManipulator,
    rotate: RotateManipulator,

    presenter: Option<Box<dyn PresentationAdapter>>,
}

impl Default for GizmoController {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for GizmoController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GizmoController")
            .field("mode", &self.modes.mode())
            .field("settings", &self.settings)
            .field("session", &self.session)
            .field("pose", &self.pose)
            .field("presenter", &self.presenter.is_some())
            .finish()
    }
}

impl GizmoController {
    pub fn new(mode: OperatingMode, settings: GizmoSettings) -> Self {
        Self {
            modes: ModeController::new(mode),
            settings,
            session: DragSession::new(),
            pose: Pose::IDENTITY,
            translate: TranslateManipulator::new(),
            rotate: RotateManipulator::new(),
            presenter: None,
        }
    }

    /// Transform mode with default settings.
    pub fn with_defaults() -> Self {
        Self::new(OperatingMode::Transform, GizmoSettings::default())
    }

    fn current_manipulator_mut(&mut self) -> &mut dyn Manipulator {
        match self.modes.mode() {
            OperatingMode::Transform => &mut self.translate,
            OperatingMode::Rotate => &mut self.rotate,
        }
    }

    // ---- Pointer events ----

    /// Pointer pressed on the widget.
    pub fn on_drag_start(&mut self, modifier_active: bool) {
        self.session.begin(modifier_active);
        let (session, pose) = (self.session, self.pose);
        self.current_manipulator_mut().begin_drag(&session, &pose);
        log::debug!("Drag start ({}, modifier: {})", self.modes.mode(), modifier_active);
        self.present();
    }

    /// Pointer moved. `pointer` is widget-local; `bounds` is `None` while the
    /// surface is not mounted.
    ///
    /// Moves outside a drag, or against missing or empty bounds, are ignored
    /// and return [`DragOutput::NEUTRAL`].
    pub fn on_drag_move(
        &mut self,
        pointer: Vec2,
        bounds: Option<Bounds>,
        modifier_active: bool,
    ) -> DragOutput {
        if !self.session.active {
            return DragOutput::NEUTRAL;
        }
        let bounds = match bounds {
            Some(b) if !b.is_degenerate() => b,
            other => {
                log::warn!("Ignoring drag move, unusable widget bounds: {:?}", other);
                return DragOutput::NEUTRAL;
            }
        };

        let rel = bounds.relative(pointer);
        let ctx = DragContext {
            settings: &self.settings,
            modifier_active,
        };
        let manipulator: &mut dyn Manipulator = match self.modes.mode() {
            OperatingMode::Transform => &mut self.translate,
            OperatingMode::Rotate => &mut self.rotate,
        };
        let out = manipulator.drag(rel, &ctx, &mut self.session, &mut self.pose);

        self.session.handle = out.handle;
        self.session.progress = out.progress;
        log::trace!(
            "Drag move rel=({:.1}, {:.1}) axis={:?} progress={:.3}",
            rel.x,
            rel.y,
            out.axis,
            out.progress
        );

        self.present();
        out
    }

    /// Pointer released. The pose stays where the drag left it.
    pub fn on_drag_end(&mut self) {
        if !self.session.active {
            return;
        }
        let session = self.session;
        self.current_manipulator_mut().end_drag(&session);
        self.session.end();
        log::debug!("Drag end, pose {:?}", self.pose);
        self.present();
    }

    /// Drag interrupted by the host (pointer capture lost, focus change).
    pub fn on_drag_cancel(&mut self) {
        log::debug!("Drag cancelled");
        self.on_drag_end();
    }

    /// Lock modifier pressed or released between pointer events.
    pub fn set_modifier(&mut self, active: bool) {
        self.session.set_modifier(active);
    }

    // ---- Mode ----

    pub fn mode(&self) -> OperatingMode {
        self.modes.mode()
    }

    /// Returns whether the mode changed.
    pub fn set_mode(&mut self, mode: OperatingMode) -> bool {
        let changed = self.modes.set(mode, &mut self.session);
        if changed {
            self.resume_drag();
            self.present();
        }
        changed
    }

    pub fn toggle_mode(&mut self) -> OperatingMode {
        let mode = self.modes.toggle(&mut self.session);
        self.resume_drag();
        self.present();
        mode
    }

    /// A drag in progress carries on in the new mode from the reset handle.
    fn resume_drag(&mut self) {
        if !self.session.active {
            return;
        }
        let (session, pose) = (self.session, self.pose);
        self.current_manipulator_mut().begin_drag(&session, &pose);
    }

    pub fn subscribe_mode<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(OperatingMode) + Send + Sync + 'static,
    {
        self.modes.subscribe(listener)
    }

    pub fn unsubscribe_mode(&mut self, id: ListenerId) -> bool {
        self.modes.unsubscribe(id)
    }

    // ---- Settings ----

    pub fn settings(&self) -> &GizmoSettings {
        &self.settings
    }

    /// Merge a partial settings update. Takes effect on the next move.
    pub fn update_settings(&mut self, patch: &SettingsPatch) {
        if patch.is_empty() {
            return;
        }
        self.settings.merge(patch);
        log::debug!("Settings updated: {:?}", patch);
        self.present();
    }

    // ---- State ----

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Copy of the current drag session.
    pub fn session_state(&self) -> DragSession {
        self.session
    }

    /// Move the object back to the origin with no rotation.
    pub fn reset_pose(&mut self) {
        self.pose.reset();
        log::debug!("Pose reset");
        self.present();
    }

    // ---- Presentation ----

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self.modes.mode(), &self.session, &self.pose, &self.settings)
    }

    /// Register the adapter that redraws this widget. Replaces any previous one.
    pub fn attach_presenter<P>(&mut self, presenter: P)
    where
        P: PresentationAdapter + 'static,
    {
        self.presenter = Some(Box::new(presenter));
        self.present();
    }

    fn present(&mut self) {
        if self.presenter.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.present(&snapshot);
        }
    }
}
