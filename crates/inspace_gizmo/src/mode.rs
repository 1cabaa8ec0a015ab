//! Operating mode with change notification.

use crate::axis::OperatingMode;
use crate::session::DragSession;

/// Mode change listener.
pub type ModeListener = Box<dyn Fn(OperatingMode) + Send + Sync>;

/// Listener handle returned by [`ModeController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Owns the current mode and tells subscribers when it changes.
///
/// Every change clears the session's transient state before returning, so the
/// next drag frame never sees a ring or lock from the old mode.
pub struct ModeController {
    mode: OperatingMode,
    listeners: Vec<(ListenerId, ModeListener)>,
    next_listener_id: u64,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(OperatingMode::default())
    }
}

impl std::fmt::Debug for ModeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeController")
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ModeController {
    pub fn new(mode: OperatingMode) -> Self {
        Self {
            mode,
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// Flip between transform and rotate.
    pub fn toggle(&mut self, session: &mut DragSession) -> OperatingMode {
        self.apply(self.mode.toggled(), session);
        self.mode
    }

    /// Set the mode from outside. Returns whether it changed; an unchanged
    /// mode leaves the session alone.
    pub fn set(&mut self, mode: OperatingMode, session: &mut DragSession) -> bool {
        if mode == self.mode {
            return false;
        }
        self.apply(mode, session);
        true
    }

    fn apply(&mut self, mode: OperatingMode, session: &mut DragSession) {
        log::debug!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
        session.clear_transient();
        for (_, listener) in &self.listeners {
            listener(mode);
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(OperatingMode) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use inspace_math::Vec2;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_toggle_clears_ring_and_handle() {
        let mut modes = ModeController::new(OperatingMode::Rotate);
        let mut session = DragSession::new();
        session.begin(true);
        session.selected_rotation_plane = Some(Axis::Z);
        session.handle = Vec2::new(0.0, 40.0);
        session.progress = 0.5;

        assert_eq!(modes.toggle(&mut session), OperatingMode::Transform);
        assert_eq!(session.selected_rotation_plane, None);
        assert_eq!(session.handle, Vec2::ZERO);
        assert_eq!(session.progress, 0.0);
        assert!(!session.axis_locked);
    }

    #[test]
    fn test_set_same_mode_keeps_session() {
        let mut modes = ModeController::new(OperatingMode::Rotate);
        let mut session = DragSession::new();
        session.begin(false);
        session.selected_rotation_plane = Some(Axis::Y);

        assert!(!modes.set(OperatingMode::Rotate, &mut session));
        assert_eq!(session.selected_rotation_plane, Some(Axis::Y));
    }

    #[test]
    fn test_listeners_notified_until_unsubscribed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut modes = ModeController::default();
        let mut session = DragSession::new();

        let sink = Arc::clone(&seen);
        let id = modes.subscribe(move |m| sink.lock().unwrap().push(m));

        modes.toggle(&mut session);
        modes.set(OperatingMode::Transform, &mut session);
        assert!(modes.unsubscribe(id));
        assert!(!modes.unsubscribe(id));
        modes.toggle(&mut session);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![OperatingMode::Rotate, OperatingMode::Transform]
        );
    }
}
